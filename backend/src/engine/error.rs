use thiserror::Error;

/// Errors surfaced by the simulation core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Door counts outside the playable range
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Parallel run asked for zero batches
    #[error("Batch count must be at least 1")]
    InvalidBatchCount,

    /// Report or config could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
