use thiserror::Error;

/// Errors reported by checked vector operations.
///
/// Floating-point domain issues (division by zero, overflow) are not errors
/// at this layer; they propagate as IEEE-754 special values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Elementwise operation over vectors of unequal length.
    #[error("dimension mismatch: left operand has {left} elements, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The backing buffer could not be allocated.
    #[error("failed to allocate storage for {len} elements")]
    AllocationFailure { len: usize },

    /// Checked element access beyond the end of the vector.
    #[error("index {index} out of range for vector of length {len}")]
    OutOfRange { index: usize, len: usize },
}
