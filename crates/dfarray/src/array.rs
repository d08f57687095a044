//! The fixed-capacity array itself.
//!
//! A [`FixedArray`] is allocated to its full capacity at construction and
//! every slot is filled before the constructor returns. Slot access is
//! checked against that capacity; there is no separate logical length.

use std::mem;
use std::ops::{Index, IndexMut};

use crate::error::ArrayError;
use crate::index::ArrayIndex;

/// A contiguous block of exactly `capacity` slots, each always holding a
/// valid `T`.
///
/// The backing storage is allocated once and never resized. Writes replace
/// slot values in place; nothing changes the capacity after construction.
///
/// ```
/// use dfarray::FixedArray;
///
/// let mut a = FixedArray::<i32>::new(3);
/// a.set(1, 42).unwrap();
/// assert_eq!(a.get(1), Ok(&42));
/// assert_eq!(a.get(0), Ok(&0));
/// assert!(a.get(3).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedArray<T> {
    /// Backing storage. Its length is the capacity.
    slots: Box<[T]>,
}

impl<T: Default> FixedArray<T> {
    /// Create an array of `capacity` slots, each set to `T::default()`.
    ///
    /// A capacity of zero yields a valid array with no accessible slots.
    pub fn new(capacity: usize) -> Self {
        Self::from_fn(capacity, |_| T::default())
    }

    /// Create an array from a capacity given as any primitive integer.
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `capacity` is negative or
    /// larger than `usize::MAX`. Nothing is allocated on failure.
    pub fn try_new<C: ArrayIndex>(capacity: C) -> Result<Self, ArrayError> {
        let requested = capacity.widen();
        match usize::try_from(requested) {
            Ok(capacity) => Ok(Self::new(capacity)),
            Err(_) => {
                log::debug!("rejected fixed array capacity {requested}");
                Err(ArrayError::InvalidArgument {
                    capacity: requested,
                })
            }
        }
    }

    /// Restore every slot to `T::default()` without reallocating.
    pub fn reset(&mut self) {
        self.slots.fill_with(T::default);
    }
}

impl<T> FixedArray<T> {
    /// Create an array of `capacity` slots where slot `i` holds `fill(i)`.
    ///
    /// Slots are filled in index order and all of them are populated before
    /// this returns.
    pub fn from_fn(capacity: usize, fill: impl FnMut(usize) -> T) -> Self {
        let slots: Box<[T]> = (0..capacity).map(fill).collect();
        log::trace!(
            "allocated fixed array of {} x {}",
            capacity,
            std::any::type_name::<T>()
        );
        Self { slots }
    }

    /// Number of occupied slots. Always equal to [`capacity`](Self::capacity).
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Total number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Unoccupied slots (`capacity - count`). Always zero, since every slot
    /// is filled at construction.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.count()
    }

    /// Memory used by the slot storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * mem::size_of::<T>()
    }

    /// Read the value at `index`.
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index` is not in
    /// `[0, capacity)`.
    pub fn get<I: ArrayIndex>(&self, index: I) -> Result<&T, ArrayError> {
        let slot = self.slot("get", index)?;
        Ok(&self.slots[slot])
    }

    /// Mutable access to the value at `index`.
    ///
    /// Same bounds policy as [`get`](Self::get).
    pub fn get_mut<I: ArrayIndex>(&mut self, index: I) -> Result<&mut T, ArrayError> {
        let slot = self.slot("get_mut", index)?;
        Ok(&mut self.slots[slot])
    }

    /// Overwrite the value at `index`.
    ///
    /// On [`ArrayError::OutOfRange`] nothing is written and `value` is
    /// dropped.
    pub fn set<I: ArrayIndex>(&mut self, index: I, value: T) -> Result<(), ArrayError> {
        let slot = self.slot("set", index)?;
        self.slots[slot] = value;
        Ok(())
    }

    /// Overwrite the value at `index`, returning the value it held.
    pub fn replace<I: ArrayIndex>(&mut self, index: I, value: T) -> Result<T, ArrayError> {
        let slot = self.slot("replace", index)?;
        Ok(mem::replace(&mut self.slots[slot], value))
    }

    fn slot<I: ArrayIndex>(&self, op: &str, index: I) -> Result<usize, ArrayError> {
        index.to_slot(self.slots.len()).inspect_err(|err| {
            log::debug!("fixed array {op} rejected: {err}");
        })
    }
}

/// Subscript access. Out-of-range indices are fatal.
///
/// # Panics
///
/// Panics with the [`ArrayError::OutOfRange`] message if `index >= capacity`.
impl<T> Index<usize> for FixedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Subscript assignment. Out-of-range indices are fatal.
///
/// # Panics
///
/// Panics with the [`ArrayError::OutOfRange`] message if `index >= capacity`.
impl<T> IndexMut<usize> for FixedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
