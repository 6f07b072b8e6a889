use crate::error::ParamError;
use crate::key::ParamKey;
use crate::list::{Dispatch, ParamList, SlotAt};
use std::any::{Any, TypeId};
use std::fmt;

/// A fixed-arity set of named, typed parameters.
///
/// A `ParamMap` can be thought of as an ordered set of `{name, value}` pairs
/// whose arity and per-slot types are fixed at the type level: the tuple
/// parameter `P` declares one type per slot, and construction binds one name
/// per slot. Parameters can then be stored and retrieved independently, in any
/// order, addressed by name, by run-time index, or by compile-time index, and
/// finally submitted all at once to a function expecting exactly the declared
/// types in declared order.
///
/// # Creating a map
///
/// The map is constructed from exactly one name per declared type; supplying
/// too few or too many names fails to compile. All slots start empty.
///
/// ```
/// use param_map::ParamMap;
///
/// let mut params = ParamMap::<(i32, bool, String)>::new(["my_int", "enabled", "name"]);
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.is_set("my_int"), Ok(false));
/// ```
///
/// # Storing and retrieving parameters
///
/// ```
/// use param_map::{ParamMap, ParamError};
///
/// let mut params = ParamMap::<(i32, bool, String)>::new(["my_int", "enabled", "name"]);
///
/// params.set("my_int", 3)?;
/// params.set(1usize, true)?;
/// params.set_at::<2>("Homer Simpson");
///
/// assert_eq!(params.get::<i32, _>("my_int")?, &3);
/// assert_eq!(params.get::<bool, _>(1usize)?, &true);
/// assert_eq!(params.get_at::<2>()?, "Homer Simpson");
/// # Ok::<(), ParamError>(())
/// ```
///
/// # Calling a function with the stored parameters
///
/// Once every slot holds a value, [`submit`](ParamMap::submit) invokes a
/// function with the stored values in declared order and passes its return
/// value through. The map is not modified and can be submitted again.
///
/// ```
/// use param_map::{ParamMap, ParamError};
///
/// let mut params = ParamMap::<(String, i32)>::new(["name", "age"]);
/// params.set("name", "Homer Simpson".to_string())?;
/// params.set("age", 35)?;
///
/// let line = params.submit(|name: String, age: i32| format!("{name} is {age}"))?;
/// assert_eq!(line, "Homer Simpson is 35");
/// # Ok::<(), ParamError>(())
/// ```
///
/// # Performance
///
/// By-name operations hash the given name, which takes time linear in its
/// length, and then scan the slot positions; prefer the index-based variants
/// in hot code, or populate the map outside of it. `submit` does no hashing or
/// searching at all — resolution already happened during `set` — so its only
/// overhead over a direct call is cloning the stored values, which is required
/// because the map must remain valid and populated after the call.
///
/// # Name collisions
///
/// Names are stored as hashes and compared as hashes. Two distinct names that
/// hash alike collide silently, and duplicate names are not rejected: a lookup
/// always resolves to the lowest matching index whose slot type suits the
/// operation.
pub struct ParamMap<P: ParamList> {
    hashes: P::Hashes,
    slots: P::Slots,
}

impl<P: ParamList> ParamMap<P> {
    /// Creates a map with the given slot names and every slot empty.
    ///
    /// Exactly one name must be supplied per declared type; this is enforced
    /// at compile time. Each name is hashed once here so that later by-name
    /// lookups compare hashes instead of strings.
    ///
    /// ```
    /// use param_map::ParamMap;
    ///
    /// let params = ParamMap::<(i32, bool)>::new(["retries", "verbose"]);
    /// assert_eq!(params.len(), 2);
    /// ```
    pub fn new<'a>(names: P::Names<'a>) -> Self {
        Self {
            hashes: P::hash_names(names),
            slots: P::vacant(),
        }
    }

    /// Stores `value` in the parameter identified by `key`, overwriting any
    /// previous value.
    ///
    /// The key may be a name (`&str`, `String`) or a run-time index (`usize`).
    /// The target slot's declared type must be exactly `V`; there are no
    /// implicit conversions on this path (use [`set_at`](ParamMap::set_at) for
    /// `Into`-based conversion at a compile-time index).
    ///
    /// # Errors
    ///
    /// - [`ParamError::IndexOutOfRange`] if `key` is an index `>= len()`
    /// - [`ParamError::ArgumentMismatch`] if no parameter matches `key` with
    ///   declared type `V`
    pub fn set<V: Any, K: ParamKey>(&mut self, key: K, value: V) -> Result<(), ParamError> {
        let index = key.locate(self.hashes.as_ref(), |index| {
            P::slot_type(index) == Some(TypeId::of::<V>())
        })?;
        match P::cell_mut::<V>(&mut self.slots, index) {
            Some(cell) => {
                *cell = Some(value);
                Ok(())
            }
            None => Err(ParamError::ArgumentMismatch {
                key: key.describe(),
            }),
        }
    }

    /// Stores `value` in the parameter at compile-time index `INDEX`,
    /// overwriting any previous value.
    ///
    /// Fully type-checked at compile time: an out-of-range `INDEX` or an
    /// unsuitable value type fails to compile, and the call itself cannot
    /// fail. Accepts anything convertible into the slot's declared type.
    ///
    /// ```
    /// use param_map::ParamMap;
    ///
    /// let mut params = ParamMap::<(String, i32)>::new(["name", "age"]);
    /// params.set_at::<0>("Homer Simpson"); // &str -> String via Into
    /// params.set_at::<1>(35);
    /// ```
    pub fn set_at<const INDEX: usize>(&mut self, value: impl Into<<P as SlotAt<INDEX>>::Value>)
    where
        P: SlotAt<INDEX>,
    {
        *P::cell_at_mut(&mut self.slots) = Some(value.into());
    }

    /// Returns a read-only reference to the value of the parameter identified
    /// by `key`.
    ///
    /// The requested type `V` must be exactly the slot's declared type; reads
    /// never convert.
    ///
    /// # Errors
    ///
    /// - [`ParamError::IndexOutOfRange`] if `key` is an index `>= len()`
    /// - [`ParamError::ArgumentMismatch`] if no parameter matches `key` with
    ///   declared type `V`
    /// - [`ParamError::MissingValue`] if the parameter has no stored value
    pub fn get<V: Any, K: ParamKey>(&self, key: K) -> Result<&V, ParamError> {
        let index = key.locate(self.hashes.as_ref(), |index| {
            P::slot_type(index) == Some(TypeId::of::<V>())
        })?;
        match P::cell::<V>(&self.slots, index) {
            Some(cell) => cell.as_ref().ok_or(ParamError::MissingValue { index }),
            None => Err(ParamError::ArgumentMismatch {
                key: key.describe(),
            }),
        }
    }

    /// Returns a read-only reference to the value of the parameter at
    /// compile-time index `INDEX`, with its type deduced from the declaration.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::MissingValue`] if the parameter has no stored
    /// value. Index and type validity are checked at compile time.
    pub fn get_at<const INDEX: usize>(&self) -> Result<&<P as SlotAt<INDEX>>::Value, ParamError>
    where
        P: SlotAt<INDEX>,
    {
        P::cell_at(&self.slots)
            .as_ref()
            .ok_or(ParamError::MissingValue { index: INDEX })
    }

    /// Returns whether the parameter identified by `key` currently holds a
    /// value.
    ///
    /// Presence checks are type-agnostic: a name resolves to the lowest slot
    /// whose hash matches regardless of its declared type. (This mirrors the
    /// type-filtered resolution of `set`/`get` only in its key handling, not
    /// in its type handling — see the crate docs on duplicate names.)
    ///
    /// # Errors
    ///
    /// - [`ParamError::IndexOutOfRange`] if `key` is an index `>= len()`
    /// - [`ParamError::ArgumentMismatch`] if no parameter name matches `key`
    pub fn is_set<K: ParamKey>(&self, key: K) -> Result<bool, ParamError> {
        let index = key.locate(self.hashes.as_ref(), |_| true)?;
        Ok(P::occupied(&self.slots, index))
    }

    /// Returns whether the parameter at compile-time index `INDEX` currently
    /// holds a value. Cannot fail.
    pub fn is_set_at<const INDEX: usize>(&self) -> bool
    where
        P: SlotAt<INDEX>,
    {
        P::cell_at(&self.slots).is_some()
    }

    /// Empties every slot, dropping all stored values. Idempotent.
    pub fn clear(&mut self) {
        P::clear(&mut self.slots);
    }

    /// Returns the number of parameters in the map, a compile-time constant.
    #[doc(alias = "size")]
    pub const fn len(&self) -> usize {
        P::LEN
    }

    /// Always `false`: a map's arity is at least one.
    pub const fn is_empty(&self) -> bool {
        P::LEN == 0
    }

    /// Calls `function` with the stored parameters.
    ///
    /// The precondition — every slot occupied — is verified in full before
    /// anything else happens: either `function` runs exactly once with a
    /// complete, correctly-typed argument list, or it does not run at all.
    /// The stored values are passed as clones, in declared order, and the
    /// function's return value comes back unmodified.
    ///
    /// The map is not modified: `submit` may be called any number of times
    /// once all parameters are set, and each call re-reads the current slot
    /// values, so `set` calls between submissions are observed. Panics raised
    /// by `function` propagate to the caller untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::MissingValue`] naming the first empty slot if any
    /// parameter has no stored value.
    ///
    /// ```
    /// use param_map::{ParamMap, ParamError};
    ///
    /// let mut params = ParamMap::<(i32, i32)>::new(["a", "b"]);
    /// params.set("a", 2)?;
    ///
    /// // "b" is still empty; the function is not invoked.
    /// assert_eq!(
    ///     params.submit(|a: i32, b: i32| a + b),
    ///     Err(ParamError::MissingValue { index: 1 })
    /// );
    ///
    /// params.set("b", 3)?;
    /// assert_eq!(params.submit(|a: i32, b: i32| a + b)?, 5);
    /// # Ok::<(), ParamError>(())
    /// ```
    pub fn submit<F>(&self, function: F) -> Result<<P as Dispatch<F>>::Output, ParamError>
    where
        P: Dispatch<F>,
    {
        P::dispatch(&self.slots, function)
    }
}

impl<P: ParamList> Clone for ParamMap<P>
where
    P::Slots: Clone,
{
    fn clone(&self) -> Self {
        Self {
            hashes: self.hashes,
            slots: self.slots.clone(),
        }
    }
}

impl<P: ParamList> fmt::Debug for ParamMap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied: Vec<bool> = (0..P::LEN)
            .map(|index| P::occupied(&self.slots, index))
            .collect();
        f.debug_struct("ParamMap")
            .field("arity", &P::LEN)
            .field("occupied", &occupied)
            .finish()
    }
}
