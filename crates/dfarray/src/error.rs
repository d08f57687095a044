//! Error types for fixed-array construction and slot access.

use std::error::Error;
use std::fmt;

/// Errors that can occur when building or indexing a
/// [`FixedArray`](crate::FixedArray).
///
/// Both variants are caused purely by caller-supplied arguments; neither
/// represents a transient failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A slot index fell outside `[0, capacity)`.
    OutOfRange {
        /// The rejected index, widened so negative indices survive intact.
        index: i128,
        /// Capacity of the array at the time of the access.
        capacity: usize,
    },
    /// A requested capacity was negative or does not fit in `usize`.
    InvalidArgument {
        /// The rejected capacity.
        capacity: i128,
    },
}

impl ArrayError {
    /// Largest valid index for the array that produced this error, or
    /// `None` when the array has no slots.
    pub fn last_valid_index(&self) -> Option<usize> {
        match self {
            Self::OutOfRange { capacity, .. } => capacity.checked_sub(1),
            Self::InvalidArgument { .. } => None,
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, capacity } => match capacity.checked_sub(1) {
                Some(last) => write!(f, "index {index} is out of range (0 - {last})"),
                None => write!(f, "index {index} is out of range (array has no slots)"),
            },
            Self::InvalidArgument { capacity } => {
                write!(f, "invalid capacity {capacity}: must be a non-negative size")
            }
        }
    }
}

impl Error for ArrayError {}
