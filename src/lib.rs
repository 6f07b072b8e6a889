//! # param-map
//!
//! A fixed-arity, named-parameter container with type-safe dispatch.
//!
//! `param-map` lets you declare a set of typed parameter slots up front — one
//! per parameter, each with a compile-known type and a run-time name —
//! populate them independently and in any order, query which ones are set,
//! and finally submit the whole set to a function expecting exactly those
//! types in declared order.
//!
//! ## Key Features
//!
//! - **Fixed arity, checked at compile time**: the slot types are a tuple
//!   type parameter, and construction takes exactly one name per slot —
//!   an arity mismatch fails to compile, not at run time
//! - **Three addressing modes**: by name, by run-time index, or by
//!   compile-time index, for `set`, `get`, and `is_set` alike
//! - **Type-safe**: a slot only ever stores or reveals its declared type;
//!   run-time addressing is checked with exact `TypeId` comparisons,
//!   compile-time addressing is checked entirely by the type system
//! - **Type-checked dispatch**: `submit` refuses to run until every slot is
//!   populated, then calls your function with the stored values in declared
//!   order
//! - **Distinguishable errors**: out-of-range, mismatch, and missing-value
//!   failures are separate [`ParamError`] variants, so callers can branch
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use param_map::{ParamMap, ParamError};
//!
//! fn main() -> Result<(), ParamError> {
//!     // Three typed slots, each with a name.
//!     let mut params = ParamMap::<(i32, bool, String)>::new(["my_int", "enabled", "name"]);
//!
//!     // Populate them in any order, by name or by index.
//!     params.set("enabled", true)?;
//!     params.set("my_int", 3)?;
//!     params.set(2usize, "Homer Simpson".to_string())?;
//!
//!     // Retrieve values in a type-safe way.
//!     let my_int = params.get::<i32, _>("my_int")?;
//!     let name = params.get::<String, _>("name")?;
//!     println!("{name}: {my_int}");
//!
//!     // Handle errors properly.
//!     match params.get::<bool, _>("nonexistent") {
//!         Ok(value) => println!("Value: {}", value),
//!         Err(ParamError::ArgumentMismatch { key }) => println!("No parameter `{key}`"),
//!         Err(e) => println!("Other error: {}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Submitting to a Function
//!
//! ```rust
//! use param_map::{ParamMap, ParamError};
//!
//! fn process_person(name: String, age: i32) {
//!     println!("Processing {name:?} (age: {age})");
//! }
//!
//! fn main() -> Result<(), ParamError> {
//!     let mut params = ParamMap::<(String, i32)>::new(["name", "age"]);
//!
//!     params.set("name", "Homer Simpson".to_string())?;
//!     match params.submit(process_person) {
//!         // "age" has no value yet, so the function was not called.
//!         Err(ParamError::MissingValue { index }) => println!("slot {index} empty"),
//!         other => other?,
//!     }
//!
//!     params.set("age", 35)?;
//!     params.submit(process_person)?;
//!
//!     // The map is untouched by submit; update a slot and go again.
//!     params.set("age", 38)?;
//!     params.submit(process_person)?;
//!     Ok(())
//! }
//! ```
//!
//! ### Compile-Time Indexing
//!
//! The `*_at` variants address a slot by a const index. Resolution and type
//! checking happen entirely at compile time — a wrong index or type is a
//! compile error, and `set_at` additionally accepts anything `Into`-convertible
//! to the slot's declared type:
//!
//! ```rust
//! use param_map::{ParamMap, ParamError};
//!
//! let mut params = ParamMap::<(String, i32)>::new(["name", "age"]);
//!
//! params.set_at::<0>("Homer Simpson"); // &str -> String, infallible
//! params.set_at::<1>(35);
//!
//! assert!(params.is_set_at::<0>());
//! assert_eq!(params.get_at::<1>()?, &35);
//! # Ok::<(), ParamError>(())
//! ```
//!
//! ## Names are hashes
//!
//! Slot names are hashed once at construction and by-name lookups compare
//! hashes only; the strings themselves are never stored. Lookups scan slots in
//! declared order and pick the lowest index whose hash matches and whose
//! declared type suits the operation — so duplicate (or colliding) names are
//! not an error, they simply resolve to the first compatible slot. Note the
//! asymmetry this implies: `set` and `get` filter candidates by type, while
//! `is_set` by name checks only the name and reports on the lowest hash match
//! whatever its type.
//!
//! ## Concurrency
//!
//! A `ParamMap` is plain owned data with no interior mutability; mutation
//! requires `&mut self`. Share it across threads behind a lock if needed —
//! the map itself provides no synchronization.

mod error;
mod key;
mod list;
mod map;

pub use error::ParamError;
pub use key::ParamKey;
pub use list::{Dispatch, ParamList, SlotAt};
pub use map::ParamMap;

// Re-export std::any for convenience; stored values are bounded on `Any`.
pub use std::any::{Any, TypeId};
