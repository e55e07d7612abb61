//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.

mod bucket;
mod config;
mod list;
mod multipart;
mod object;

pub use bucket::{
    CreateBucketRequest, DeleteBucketRequest, GetBucketLocationRequest, HeadBucketRequest,
};
pub use config::{
    DeleteBucketCorsRequest, DeleteBucketInventoryConfigurationRequest,
    DeleteBucketMetricsConfigurationRequest, DeleteObjectTaggingRequest,
    DeletePublicAccessBlockRequest, GetBucketAccelerateConfigurationRequest,
    GetBucketAnalyticsConfigurationRequest, GetBucketInventoryConfigurationRequest,
    GetBucketMetricsConfigurationRequest, GetBucketVersioningRequest, GetBucketWebsiteRequest,
    GetObjectAclRequest, GetObjectRetentionRequest, ListBucketAnalyticsConfigurationsRequest,
    ListBucketIntelligentTieringConfigurationsRequest, ListBucketInventoryConfigurationsRequest,
    ListBucketMetricsConfigurationsRequest, PutBucketAccelerateConfigurationRequest,
    PutBucketAclRequest, PutBucketAnalyticsConfigurationRequest, PutBucketCorsRequest,
    PutBucketEncryptionRequest, PutBucketIntelligentTieringConfigurationRequest,
    PutBucketInventoryConfigurationRequest, PutBucketLifecycleConfigurationRequest,
    PutBucketLoggingRequest, PutBucketMetricsConfigurationRequest,
    PutBucketNotificationConfigurationRequest, PutBucketOwnershipControlsRequest,
    PutBucketPolicyRequest, PutBucketReplicationRequest, PutBucketRequestPaymentRequest,
    PutBucketTaggingRequest, PutBucketVersioningRequest, PutBucketWebsiteRequest,
    PutObjectAclRequest, PutObjectLegalHoldRequest, PutObjectLockConfigurationRequest,
    PutObjectRetentionRequest, PutObjectTaggingRequest, PutPublicAccessBlockRequest,
};
pub use list::{ListObjectVersionsRequest, ListObjectsRequest, ListObjectsV2Request};
pub use multipart::{
    AbortMultipartUploadRequest, CompleteMultipartUploadRequest, CreateMultipartUploadRequest,
    ListMultipartUploadsRequest, ListPartsRequest, UploadPartCopyRequest, UploadPartRequest,
};
pub use object::{
    CopyObjectRequest, DeleteObjectRequest, DeleteObjectsRequest, GetObjectRequest,
    GetObjectTorrentRequest, HeadObjectRequest, PutObjectRequest, RestoreObjectRequest,
    SelectObjectContentRequest,
};
