use crate::error::ParamError;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hashes a parameter name with the std hasher.
///
/// Names are hashed once at construction and once per by-name lookup; slot
/// resolution compares hashes only, never the strings themselves. Two names
/// hashing to the same value therefore collide silently — a documented caller
/// hazard, identical to comparing the names' hashes directly.
pub(crate) fn hash_name(name: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    hasher.finish()
}

/// A key that can address a slot in a [`ParamMap`](crate::ParamMap): a
/// parameter name (`&str`, `String`) or a run-time index (`usize`).
///
/// `locate` walks the map's name hashes and returns the first position that
/// both matches the key and is accepted by the operation's type predicate.
/// Each operation supplies its own predicate: writes and reads filter on the
/// slot's declared type, while occupancy checks accept every slot.
pub trait ParamKey {
    /// Resolves this key to a slot position.
    ///
    /// # Errors
    ///
    /// - [`ParamError::IndexOutOfRange`] if the key is an index `>= hashes.len()`,
    ///   reported before the predicate is consulted
    /// - [`ParamError::ArgumentMismatch`] if no position matches the key with
    ///   an accepting predicate
    fn locate<F>(&self, hashes: &[u64], accepts: F) -> Result<usize, ParamError>
    where
        F: FnMut(usize) -> bool;

    /// How this key renders in an [`ParamError::ArgumentMismatch`].
    fn describe(&self) -> String;
}

impl ParamKey for &str {
    fn locate<F>(&self, hashes: &[u64], mut accepts: F) -> Result<usize, ParamError>
    where
        F: FnMut(usize) -> bool,
    {
        let needle = hash_name(self);
        for (index, &hash) in hashes.iter().enumerate() {
            if hash == needle && accepts(index) {
                return Ok(index);
            }
        }
        Err(ParamError::ArgumentMismatch {
            key: self.describe(),
        })
    }

    fn describe(&self) -> String {
        (*self).to_string()
    }
}

impl ParamKey for String {
    fn locate<F>(&self, hashes: &[u64], accepts: F) -> Result<usize, ParamError>
    where
        F: FnMut(usize) -> bool,
    {
        ParamKey::locate(&self.as_str(), hashes, accepts)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl ParamKey for usize {
    fn locate<F>(&self, hashes: &[u64], mut accepts: F) -> Result<usize, ParamError>
    where
        F: FnMut(usize) -> bool,
    {
        if *self >= hashes.len() {
            return Err(ParamError::IndexOutOfRange {
                index: *self,
                len: hashes.len(),
            });
        }
        if accepts(*self) {
            Ok(*self)
        } else {
            Err(ParamError::ArgumentMismatch {
                key: self.describe(),
            })
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
