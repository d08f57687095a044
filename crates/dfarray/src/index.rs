//! Integer types accepted as slot indices.
//!
//! Bounds-checked operations on [`FixedArray`](crate::FixedArray) take any
//! primitive integer up to 64 bits wide. Signed indices are accepted so that
//! a negative index is reported as [`ArrayError::OutOfRange`] rather than
//! being unrepresentable at the call site.

use crate::error::ArrayError;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer usable as a slot index.
///
/// Sealed: implemented for `u8..=u64`, `usize`, `i8..=i64` and `isize`.
pub trait ArrayIndex: Copy + sealed::Sealed {
    /// The index widened to `i128`. Lossless for every implementor.
    fn widen(self) -> i128;

    /// Resolve this index against `capacity`.
    ///
    /// Returns the slot position if `0 <= self < capacity`, otherwise
    /// [`ArrayError::OutOfRange`] carrying the original index.
    fn to_slot(self, capacity: usize) -> Result<usize, ArrayError> {
        let index = self.widen();
        if (0..capacity as i128).contains(&index) {
            Ok(index as usize)
        } else {
            Err(ArrayError::OutOfRange { index, capacity })
        }
    }
}

macro_rules! impl_array_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl ArrayIndex for $t {
                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_array_index!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
