//! S3 model code generator.
//!
//! Reads an AWS S3 Smithy JSON AST model and renders the `open_enum!` and
//! `s3_structure!` invocations that make up the generated modules of
//! `s3crt-model`: `enums.rs`, `types.rs`, `input/`, `output/` and
//! `operations.rs`.

pub mod codegen;
pub mod config;
pub mod error;
pub mod model;
pub mod shapes;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

pub use config::{CodegenConfig, OperationGroup};
pub use error::{CodegenError, Result};

/// Resolve a Smithy JSON document and render every generated file.
///
/// Returns file contents keyed by path relative to the output directory.
pub fn generate(model_json: &str, config: &CodegenConfig) -> Result<BTreeMap<String, String>> {
    let model: model::SmithyModel = serde_json::from_str(model_json)?;
    info!(
        smithy = %model.smithy,
        shapes = model.shapes.len(),
        "parsed Smithy model"
    );

    let resolved = shapes::resolve_model(&model, config)?;
    info!(
        operations = resolved.operations.len(),
        enums = resolved.enums.len(),
        structures = resolved.struct_count(),
        "resolved shapes"
    );

    codegen::generate_all(&resolved)
}

/// Read the configured model and write the generated files.
///
/// Returns the number of files written.
pub fn run(config: &CodegenConfig) -> Result<usize> {
    info!(path = %config.model_path.display(), "reading Smithy model");
    let model_json = fs::read_to_string(&config.model_path).map_err(|source| CodegenError::Io {
        path: config.model_path.clone(),
        source,
    })?;

    let files = generate(&model_json, config)?;
    for (rel_path, content) in &files {
        let full_path = config.output_dir.join(rel_path);
        write_file(&full_path, content)?;
        debug!(path = %full_path.display(), bytes = content.len(), "wrote file");
    }

    info!(
        files = files.len(),
        output = %config.output_dir.display(),
        "code generation complete"
    );
    Ok(files.len())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let io_err = |source| CodegenError::Io {
        path: path.to_owned(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, content).map_err(io_err)
}
