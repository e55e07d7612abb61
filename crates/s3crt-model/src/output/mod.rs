//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.

mod bucket;
mod config;
mod list;
mod multipart;
mod object;

pub use bucket::{CreateBucketOutput, GetBucketLocationOutput, ListBucketsOutput};
pub use config::{
    DeleteObjectTaggingOutput, GetBucketAccelerateConfigurationOutput,
    GetBucketAnalyticsConfigurationOutput, GetBucketInventoryConfigurationOutput,
    GetBucketMetricsConfigurationOutput, GetBucketVersioningOutput, GetBucketWebsiteOutput,
    GetObjectAclOutput, GetObjectRetentionOutput, ListBucketAnalyticsConfigurationsOutput,
    ListBucketIntelligentTieringConfigurationsOutput, ListBucketInventoryConfigurationsOutput,
    ListBucketMetricsConfigurationsOutput, PutObjectAclOutput, PutObjectLegalHoldOutput,
    PutObjectLockConfigurationOutput, PutObjectRetentionOutput, PutObjectTaggingOutput,
};
pub use list::{ListObjectVersionsOutput, ListObjectsOutput, ListObjectsV2Output};
pub use multipart::{
    AbortMultipartUploadOutput, CompleteMultipartUploadOutput, CreateMultipartUploadOutput,
    ListMultipartUploadsOutput, ListPartsOutput, UploadPartCopyOutput, UploadPartOutput,
};
pub use object::{
    CopyObjectOutput, DeleteObjectOutput, DeleteObjectsOutput, GetObjectOutput,
    GetObjectTorrentOutput, HeadObjectOutput, PutObjectOutput, RestoreObjectOutput,
};
