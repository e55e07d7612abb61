//! Error types for the S3 model.

/// Errors raised by the model layer.
///
/// Structures and builders never fail; the only error is asking an open
/// enumeration for the wire value of its `Unknown` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The sentinel variant has no wire value and must not be serialized.
    #[error("{shape}::Unknown has no wire value")]
    UnknownVariant {
        /// Name of the enumeration shape.
        shape: &'static str,
    },
}

/// Convenience result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
