//! `s3crt-codegen [config.toml]`
//!
//! Regenerates the generated modules of `s3crt-model` from the S3 Smithy
//! model. Without a config file the built-in defaults are used.
//!
//! | Variable | Effect |
//! |---|---|
//! | `CODEGEN_MODEL` | Smithy JSON AST path |
//! | `CODEGEN_OUTPUT` | Output directory |
//! | `RUST_LOG` | Tracing filter (overrides `log_level`) |

use std::path::PathBuf;

use anyhow::{Context, Result};
use s3crt_codegen::CodegenConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => CodegenConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CodegenConfig::default(),
    }
    .with_env_overrides();

    init_tracing(&config.log_level)?;

    s3crt_codegen::run(&config).with_context(|| {
        format!(
            "failed to generate {} from {}",
            config.output_dir.display(),
            config.model_path.display()
        )
    })?;

    Ok(())
}
