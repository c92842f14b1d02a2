//! Error types for sphere partitioning

use std::fmt;

/// Errors that can occur while configuring or generating a partition
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionError {
    /// Dimension outside {1, 2}
    InvalidDimension(u32),
    /// Requested region count was zero
    InvalidRegionCount(usize),
    /// Configuration validation failed
    InvalidConfig(String),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionError::InvalidDimension(dim) => {
                write!(f, "invalid dimension: {} (must be 1 <= dim <= 2)", dim)
            }
            PartitionError::InvalidRegionCount(n) => {
                write!(f, "invalid region count: {} (must be >= 1)", n)
            }
            PartitionError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for PartitionError {}

/// Result type alias for partition operations
pub type Result<T> = std::result::Result<T, PartitionError>;
