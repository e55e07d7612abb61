//! Error types for the code generator.

use std::path::PathBuf;

/// Errors raised while loading the configuration, resolving the Smithy model
/// or rendering source files.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`CodegenConfig`](crate::CodegenConfig).
    #[error("invalid codegen config: {0}")]
    Config(#[from] toml::de::Error),

    /// The same operation is listed more than once in the configuration.
    #[error("operation {0} is listed more than once")]
    DuplicateOperation(String),

    /// The model is not a valid Smithy JSON AST document.
    #[error("invalid Smithy model: {0}")]
    Model(#[from] serde_json::Error),

    /// A configured operation does not exist in the model.
    #[error("operation {0} not found in model")]
    MissingOperation(String),

    /// A configured operation name resolves to a shape of another kind.
    #[error("{0} is not an operation shape")]
    NotAnOperation(String),

    /// A shape is referenced but never defined.
    #[error("shape {0} is referenced but not defined")]
    MissingShape(String),

    /// The model defines a shape under a name the generator emits itself.
    #[error("model shape {0} clashes with a generated structure")]
    ReservedShape(String),

    /// A member targets a shape kind that has no member type.
    #[error("member {member} of {shape} targets unsupported shape {target}")]
    UnsupportedTarget {
        /// The containing structure.
        shape: String,
        /// The member name.
        member: String,
        /// The target shape ID.
        target: String,
    },

    /// Writing to an in-memory buffer failed.
    #[error("failed to render source: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Convenience result type for code generation.
pub type Result<T> = std::result::Result<T, CodegenError>;
