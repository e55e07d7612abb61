//! Generator configuration.
//!
//! [`CodegenConfig`] is read from a TOML file whose keys all have defaults,
//! so an empty file (or no file at all) generates the full S3 catalogue.
//! The model and output paths can be overridden from the environment.
//!
//! ```toml
//! model_path = "smithy-model/s3.json"
//! output_dir = "../crates/s3crt-model/src"
//!
//! [[groups]]
//! category = "list"
//! operations = ["ListObjects", "ListObjectsV2"]
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{CodegenError, Result};

/// Environment variable overriding [`CodegenConfig::model_path`].
pub const MODEL_ENV: &str = "CODEGEN_MODEL";

/// Environment variable overriding [`CodegenConfig::output_dir`].
pub const OUTPUT_ENV: &str = "CODEGEN_OUTPUT";

/// A file category and the operations whose structures are generated into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationGroup {
    /// Module name under `input/` and `output/` (e.g. `"object"`).
    pub category: String,
    /// Smithy operation names, without namespace.
    pub operations: Vec<String>,
}

impl OperationGroup {
    fn new(category: &str, operations: &[&str]) -> Self {
        Self {
            category: category.to_owned(),
            operations: operations.iter().map(|op| (*op).to_owned()).collect(),
        }
    }
}

/// Code generator configuration.
///
/// ```
/// use s3crt_codegen::CodegenConfig;
///
/// let config = CodegenConfig::default();
/// assert_eq!(config.namespace, "com.amazonaws.s3");
/// assert!(config.custom_query_parameters);
/// assert!(config.operations().any(|(op, cat)| op == "GetObject" && cat == "object"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Smithy namespace of the service shapes.
    #[builder(default = String::from("com.amazonaws.s3"))]
    pub namespace: String,

    /// Path of the Smithy JSON AST model.
    #[builder(default = PathBuf::from("smithy-model/s3.json"))]
    pub model_path: PathBuf,

    /// Directory the generated files are written into.
    #[builder(default = PathBuf::from("../crates/s3crt-model/src"))]
    pub output_dir: PathBuf,

    /// Log level filter used when `RUST_LOG` is unset.
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// Whether request structures get a `custom_query_parameters` string.
    #[builder(default = true)]
    pub custom_query_parameters: bool,

    /// Whether request structures get an ordered `custom_headers` list.
    #[builder(default = true)]
    pub custom_headers: bool,

    /// Operations to generate, grouped by file category.
    #[builder(default = default_groups())]
    pub groups: Vec<OperationGroup>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CodegenConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the `CODEGEN_MODEL` and `CODEGEN_OUTPUT` environment overrides.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply path overrides from an arbitrary variable lookup.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup(MODEL_ENV).filter(|v| !v.is_empty()) {
            self.model_path = PathBuf::from(v);
        }
        if let Some(v) = lookup(OUTPUT_ENV).filter(|v| !v.is_empty()) {
            self.output_dir = PathBuf::from(v);
        }
        self
    }

    /// Every configured operation with its category, in configuration order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().flat_map(|group| {
            group
                .operations
                .iter()
                .map(|op| (op.as_str(), group.category.as_str()))
        })
    }

    /// Reject configurations that list an operation twice.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for (op, _) in self.operations() {
            if !seen.insert(op) {
                return Err(CodegenError::DuplicateOperation(op.to_owned()));
            }
        }
        Ok(())
    }
}

fn default_groups() -> Vec<OperationGroup> {
    vec![
        OperationGroup::new(
            "bucket",
            &[
                "CreateBucket",
                "DeleteBucket",
                "HeadBucket",
                "ListBuckets",
                "GetBucketLocation",
            ],
        ),
        OperationGroup::new(
            "object",
            &[
                "PutObject",
                "GetObject",
                "HeadObject",
                "DeleteObject",
                "DeleteObjects",
                "CopyObject",
                "RestoreObject",
                "SelectObjectContent",
                "GetObjectTorrent",
            ],
        ),
        OperationGroup::new(
            "multipart",
            &[
                "CreateMultipartUpload",
                "UploadPart",
                "UploadPartCopy",
                "CompleteMultipartUpload",
                "AbortMultipartUpload",
                "ListParts",
                "ListMultipartUploads",
            ],
        ),
        OperationGroup::new("list", &["ListObjects", "ListObjectsV2", "ListObjectVersions"]),
        OperationGroup::new(
            "config",
            &[
                "GetBucketVersioning",
                "PutBucketVersioning",
                "PutBucketEncryption",
                "PutBucketCors",
                "DeleteBucketCors",
                "PutBucketLifecycleConfiguration",
                "PutBucketPolicy",
                "PutBucketTagging",
                "PutBucketNotificationConfiguration",
                "PutBucketLogging",
                "PutPublicAccessBlock",
                "DeletePublicAccessBlock",
                "PutBucketOwnershipControls",
                "PutObjectLockConfiguration",
                "GetBucketAccelerateConfiguration",
                "PutBucketAccelerateConfiguration",
                "PutBucketRequestPayment",
                "GetBucketWebsite",
                "PutBucketWebsite",
                "PutBucketAcl",
                "PutBucketReplication",
                "GetBucketAnalyticsConfiguration",
                "PutBucketAnalyticsConfiguration",
                "ListBucketAnalyticsConfigurations",
                "GetBucketInventoryConfiguration",
                "PutBucketInventoryConfiguration",
                "DeleteBucketInventoryConfiguration",
                "ListBucketInventoryConfigurations",
                "GetBucketMetricsConfiguration",
                "PutBucketMetricsConfiguration",
                "DeleteBucketMetricsConfiguration",
                "ListBucketMetricsConfigurations",
                "PutBucketIntelligentTieringConfiguration",
                "ListBucketIntelligentTieringConfigurations",
                "PutObjectTagging",
                "DeleteObjectTagging",
                "GetObjectAcl",
                "PutObjectAcl",
                "GetObjectRetention",
                "PutObjectRetention",
                "PutObjectLegalHold",
            ],
        ),
    ]
}
