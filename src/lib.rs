pub mod kernel;

// Re-exporting the value type for easier access by callers.
pub use kernel::Vector;

// --- Errors ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// A required argument was absent or out of range.
    InvalidArgument(String),
    /// Two vectors of different dimension were combined.
    DimensionMismatch { expected: usize, found: usize },
    /// An element-wise sum does not fit in an `i64`.
    Overflow { index: usize },
}

impl std::fmt::Display for VectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            VectorError::InvalidArgument(s) => write!(f, "Invalid argument: {}", s),
            VectorError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension is not matching: expected {}, found {}", expected, found)
            }
            VectorError::Overflow { index } => write!(f, "Addition overflowed at index {}", index),
        }
    }
}

impl std::error::Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;
