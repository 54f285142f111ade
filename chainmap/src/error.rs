use thiserror::Error;

/// Errors that can occur when configuring a chained hash map
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainMapError {
    /// A table needs at least one bucket to derive an index from
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,

    /// Load factor is zero, negative, NaN or infinite
    #[error("load factor must be a positive finite number, got {0}")]
    InvalidLoadFactor(f64),
}

pub type Result<T> = std::result::Result<T, ChainMapError>;
