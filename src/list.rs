use crate::error::ParamError;
use std::any::{Any, TypeId};

/// A tuple of declared parameter types backing a [`ParamMap`](crate::ParamMap).
///
/// Implemented for tuples of arity 1 through 12 where every element type is
/// `'static`. The tuple fixes the map's arity and the declared type of each
/// slot at the type level; all run-time addressing funnels through the
/// positional accessors defined here, which erase to `dyn Any` only at the
/// cell boundary and only for exact-`TypeId` checks.
///
/// You should not need to implement this trait yourself.
pub trait ParamList {
    /// The arity, fixed at the type level.
    const LEN: usize;

    /// The construction argument: exactly one name per slot. Supplying the
    /// wrong number of names is an array-length mismatch and fails to compile.
    type Names<'a>;

    /// One name hash per slot, `[u64; LEN]`.
    type Hashes: AsRef<[u64]> + Copy;

    /// The storage: one optional cell per slot, `(Option<T1>, ..., Option<TN>)`.
    type Slots;

    /// Hashes the slot names once, in declared order.
    fn hash_names(names: Self::Names<'_>) -> Self::Hashes;

    /// Storage with every slot empty.
    fn vacant() -> Self::Slots;

    /// The declared type of the slot at `index`, or `None` out of range.
    fn slot_type(index: usize) -> Option<TypeId>;

    /// Whether the slot at `index` currently holds a value.
    fn occupied(slots: &Self::Slots, index: usize) -> bool;

    /// Empties every slot, dropping any stored values.
    fn clear(slots: &mut Self::Slots);

    /// The cell at `index`, viewed as `Option<V>`. Returns `None` when the
    /// index is out of range or `V` is not the slot's declared type.
    fn cell<V: Any>(slots: &Self::Slots, index: usize) -> Option<&Option<V>>;

    /// Mutable variant of [`cell`](ParamList::cell).
    fn cell_mut<V: Any>(slots: &mut Self::Slots, index: usize) -> Option<&mut Option<V>>;
}

/// Compile-time-indexed access to the slot at position `INDEX`.
///
/// Implemented for every in-range position of every [`ParamList`] tuple, so an
/// out-of-range compile-time index is a missing-impl compile error rather than
/// a run-time failure.
pub trait SlotAt<const INDEX: usize>: ParamList {
    /// The declared type of this slot.
    type Value: 'static;

    fn cell_at(slots: &Self::Slots) -> &Option<Self::Value>;
    fn cell_at_mut(slots: &mut Self::Slots) -> &mut Option<Self::Value>;
}

/// Invokes a function over all stored slot values at once.
///
/// Implemented for a [`ParamList`] tuple and any `F` callable with the tuple's
/// element types, in declared order, returning [`Dispatch::Output`]. Every
/// element type must be `Clone`: the dispatch clones the stored values rather
/// than moving them out, so the map remains valid and fully populated
/// afterwards and may be dispatched again.
pub trait Dispatch<F>: ParamList {
    /// The invoked function's return type, passed through unmodified.
    type Output;

    /// Verifies that every slot is occupied, then calls `function` exactly
    /// once with clones of the stored values in declared order. The occupancy
    /// check is all-or-nothing: if any slot is empty, `function` is never
    /// invoked and the first vacant index is reported.
    fn dispatch(slots: &Self::Slots, function: F) -> Result<Self::Output, ParamError>;
}

macro_rules! impl_param_list {
    ($len:expr => $( ($T:ident, $value:ident, $idx:tt) ),+) => {
        impl<$($T: 'static),+> ParamList for ($($T,)+) {
            const LEN: usize = $len;

            type Names<'a> = [&'a str; $len];
            type Hashes = [u64; $len];
            type Slots = ($(Option<$T>,)+);

            fn hash_names(names: Self::Names<'_>) -> Self::Hashes {
                names.map(crate::key::hash_name)
            }

            fn vacant() -> Self::Slots {
                ($(Option::<$T>::None,)+)
            }

            fn slot_type(index: usize) -> Option<TypeId> {
                match index {
                    $( $idx => Some(TypeId::of::<$T>()), )+
                    _ => None,
                }
            }

            fn occupied(slots: &Self::Slots, index: usize) -> bool {
                match index {
                    $( $idx => slots.$idx.is_some(), )+
                    _ => false,
                }
            }

            fn clear(slots: &mut Self::Slots) {
                $( slots.$idx = None; )+
            }

            fn cell<V: Any>(slots: &Self::Slots, index: usize) -> Option<&Option<V>> {
                match index {
                    $( $idx => (&slots.$idx as &dyn Any).downcast_ref::<Option<V>>(), )+
                    _ => None,
                }
            }

            fn cell_mut<V: Any>(slots: &mut Self::Slots, index: usize) -> Option<&mut Option<V>> {
                match index {
                    $( $idx => (&mut slots.$idx as &mut dyn Any).downcast_mut::<Option<V>>(), )+
                    _ => None,
                }
            }
        }

        impl<Fun, Ret, $($T),+> Dispatch<Fun> for ($($T,)+)
        where
            Fun: FnOnce($($T),+) -> Ret,
            $($T: Clone + 'static,)+
        {
            type Output = Ret;

            fn dispatch(slots: &Self::Slots, function: Fun) -> Result<Ret, ParamError> {
                match ($(slots.$idx.as_ref(),)+) {
                    ($(Some($value),)+) => Ok(function($($value.clone()),+)),
                    _ => {
                        let occupancy = [$(slots.$idx.is_some()),+];
                        let index = occupancy
                            .iter()
                            .position(|&occupied| !occupied)
                            .unwrap_or(0);
                        Err(ParamError::MissingValue { index })
                    }
                }
            }
        }
    };
}

macro_rules! impl_slot_at {
    ($idx:tt, $V:ident, ($($T:ident),+)) => {
        impl<$($T: 'static),+> SlotAt<$idx> for ($($T,)+) {
            type Value = $V;

            fn cell_at(slots: &Self::Slots) -> &Option<$V> {
                &slots.$idx
            }

            fn cell_at_mut(slots: &mut Self::Slots) -> &mut Option<$V> {
                &mut slots.$idx
            }
        }
    };
}

impl_param_list!(1 => (A, a, 0));
impl_param_list!(2 => (A, a, 0), (B, b, 1));
impl_param_list!(3 => (A, a, 0), (B, b, 1), (C, c, 2));
impl_param_list!(4 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3));
impl_param_list!(5 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4));
impl_param_list!(6 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4), (F, f, 5));
impl_param_list!(7 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4), (F, f, 5), (G, g, 6));
impl_param_list!(8 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4), (F, f, 5), (G, g, 6), (H, h, 7));
impl_param_list!(9 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4), (F, f, 5), (G, g, 6), (H, h, 7), (I, i, 8));
impl_param_list!(10 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4), (F, f, 5), (G, g, 6), (H, h, 7), (I, i, 8), (J, j, 9));
impl_param_list!(11 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4), (F, f, 5), (G, g, 6), (H, h, 7), (I, i, 8), (J, j, 9), (K, k, 10));
impl_param_list!(12 => (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4), (F, f, 5), (G, g, 6), (H, h, 7), (I, i, 8), (J, j, 9), (K, k, 10), (L, l, 11));

impl_slot_at!(0, A, (A));

impl_slot_at!(0, A, (A, B));
impl_slot_at!(1, B, (A, B));

impl_slot_at!(0, A, (A, B, C));
impl_slot_at!(1, B, (A, B, C));
impl_slot_at!(2, C, (A, B, C));

impl_slot_at!(0, A, (A, B, C, D));
impl_slot_at!(1, B, (A, B, C, D));
impl_slot_at!(2, C, (A, B, C, D));
impl_slot_at!(3, D, (A, B, C, D));

impl_slot_at!(0, A, (A, B, C, D, E));
impl_slot_at!(1, B, (A, B, C, D, E));
impl_slot_at!(2, C, (A, B, C, D, E));
impl_slot_at!(3, D, (A, B, C, D, E));
impl_slot_at!(4, E, (A, B, C, D, E));

impl_slot_at!(0, A, (A, B, C, D, E, F));
impl_slot_at!(1, B, (A, B, C, D, E, F));
impl_slot_at!(2, C, (A, B, C, D, E, F));
impl_slot_at!(3, D, (A, B, C, D, E, F));
impl_slot_at!(4, E, (A, B, C, D, E, F));
impl_slot_at!(5, F, (A, B, C, D, E, F));

impl_slot_at!(0, A, (A, B, C, D, E, F, G));
impl_slot_at!(1, B, (A, B, C, D, E, F, G));
impl_slot_at!(2, C, (A, B, C, D, E, F, G));
impl_slot_at!(3, D, (A, B, C, D, E, F, G));
impl_slot_at!(4, E, (A, B, C, D, E, F, G));
impl_slot_at!(5, F, (A, B, C, D, E, F, G));
impl_slot_at!(6, G, (A, B, C, D, E, F, G));

impl_slot_at!(0, A, (A, B, C, D, E, F, G, H));
impl_slot_at!(1, B, (A, B, C, D, E, F, G, H));
impl_slot_at!(2, C, (A, B, C, D, E, F, G, H));
impl_slot_at!(3, D, (A, B, C, D, E, F, G, H));
impl_slot_at!(4, E, (A, B, C, D, E, F, G, H));
impl_slot_at!(5, F, (A, B, C, D, E, F, G, H));
impl_slot_at!(6, G, (A, B, C, D, E, F, G, H));
impl_slot_at!(7, H, (A, B, C, D, E, F, G, H));

impl_slot_at!(0, A, (A, B, C, D, E, F, G, H, I));
impl_slot_at!(1, B, (A, B, C, D, E, F, G, H, I));
impl_slot_at!(2, C, (A, B, C, D, E, F, G, H, I));
impl_slot_at!(3, D, (A, B, C, D, E, F, G, H, I));
impl_slot_at!(4, E, (A, B, C, D, E, F, G, H, I));
impl_slot_at!(5, F, (A, B, C, D, E, F, G, H, I));
impl_slot_at!(6, G, (A, B, C, D, E, F, G, H, I));
impl_slot_at!(7, H, (A, B, C, D, E, F, G, H, I));
impl_slot_at!(8, I, (A, B, C, D, E, F, G, H, I));

impl_slot_at!(0, A, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(1, B, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(2, C, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(3, D, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(4, E, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(5, F, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(6, G, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(7, H, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(8, I, (A, B, C, D, E, F, G, H, I, J));
impl_slot_at!(9, J, (A, B, C, D, E, F, G, H, I, J));

impl_slot_at!(0, A, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(1, B, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(2, C, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(3, D, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(4, E, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(5, F, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(6, G, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(7, H, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(8, I, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(9, J, (A, B, C, D, E, F, G, H, I, J, K));
impl_slot_at!(10, K, (A, B, C, D, E, F, G, H, I, J, K));

impl_slot_at!(0, A, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(1, B, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(2, C, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(3, D, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(4, E, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(5, F, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(6, G, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(7, H, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(8, I, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(9, J, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(10, K, (A, B, C, D, E, F, G, H, I, J, K, L));
impl_slot_at!(11, L, (A, B, C, D, E, F, G, H, I, J, K, L));
