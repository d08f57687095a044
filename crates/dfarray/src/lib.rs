//! Fixed-capacity, default-filled arrays.
//!
//! [`FixedArray`] models the array of a data-structures course rather than a
//! growable vector: the capacity is declared up front, every slot is filled
//! with `T::default()` immediately, and indices are checked against that
//! capacity. There is no separate logical length, so
//! [`FixedArray::count`] always equals [`FixedArray::capacity`].
//!
//! # Error model
//!
//! The primary accessors ([`FixedArray::get`], [`FixedArray::set`] and
//! friends) return [`ArrayError::OutOfRange`] instead of touching storage
//! when an index is outside `[0, capacity)`. The `[]` operators keep the
//! fatal behaviour and panic with the same message.
//!
//! Indices may be any primitive integer (see [`ArrayIndex`]), so negative
//! indices are reported rather than unrepresentable.
//!
//! # Logging
//!
//! Construction is logged at `trace` and rejected indices or capacities at
//! `debug` through the [`log`] facade. No logger is installed by this crate.
//!
//! # Threading
//!
//! No internal synchronisation. Writes need `&mut`, so sharing across
//! threads requires the caller's own exclusion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod index;

pub use array::FixedArray;
pub use error::ArrayError;
pub use index::ArrayIndex;
