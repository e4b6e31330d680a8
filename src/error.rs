use std::fmt::Display;

use thiserror::Error;

use crate::options::Algorithm;

/// Result alias used by every fallible dftplan operation.
pub type DftResult<T> = Result<T, DftError>;

/// Errors reported when creating a plan or calling one of its transform methods.
///
/// Call-contract errors are checked before any work is done, so a failed call leaves every buffer
/// untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DftError {
    /// The requested transform length is zero or too large to address `2 * len` values.
    #[error("transform length {len} is out of range, expected a value in 1..={max}")]
    LengthOutOfRange { len: usize, max: usize },

    /// The plan options forced an algorithm that cannot compute a transform of this length.
    #[error("the {algorithm} algorithm cannot compute a transform of length {len}")]
    UnsupportedStrategy { len: usize, algorithm: Algorithm },

    /// A buffer passed to a transform method does not have the length the plan expects.
    #[error("{role} buffer has the wrong length: expected {expected} values, got {actual}")]
    BufferLength {
        role: BufferRole,
        expected: usize,
        actual: usize,
    },
}

/// Identifies which buffer argument a [`DftError::BufferLength`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferRole {
    /// The read-only input of an out-of-place transform
    Input,
    /// The output of an out-of-place transform
    Output,
    /// The single buffer of an in-place transform
    Buffer,
}

impl Display for BufferRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
            Self::Buffer => f.write_str("in-place"),
        }
    }
}
