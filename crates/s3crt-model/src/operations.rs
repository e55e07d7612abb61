//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.

/// All S3 operations covered by the generated request and output structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3Operation {
    /// The CreateBucket operation.
    CreateBucket,
    /// The DeleteBucket operation.
    DeleteBucket,
    /// The HeadBucket operation.
    HeadBucket,
    /// The ListBuckets operation.
    ListBuckets,
    /// The GetBucketLocation operation.
    GetBucketLocation,
    /// The PutObject operation.
    PutObject,
    /// The GetObject operation.
    GetObject,
    /// The HeadObject operation.
    HeadObject,
    /// The DeleteObject operation.
    DeleteObject,
    /// The DeleteObjects operation.
    DeleteObjects,
    /// The CopyObject operation.
    CopyObject,
    /// The RestoreObject operation.
    RestoreObject,
    /// The SelectObjectContent operation.
    SelectObjectContent,
    /// The GetObjectTorrent operation.
    GetObjectTorrent,
    /// The CreateMultipartUpload operation.
    CreateMultipartUpload,
    /// The UploadPart operation.
    UploadPart,
    /// The UploadPartCopy operation.
    UploadPartCopy,
    /// The CompleteMultipartUpload operation.
    CompleteMultipartUpload,
    /// The AbortMultipartUpload operation.
    AbortMultipartUpload,
    /// The ListParts operation.
    ListParts,
    /// The ListMultipartUploads operation.
    ListMultipartUploads,
    /// The ListObjects operation.
    ListObjects,
    /// The ListObjectsV2 operation.
    ListObjectsV2,
    /// The ListObjectVersions operation.
    ListObjectVersions,
    /// The GetBucketVersioning operation.
    GetBucketVersioning,
    /// The PutBucketVersioning operation.
    PutBucketVersioning,
    /// The PutBucketEncryption operation.
    PutBucketEncryption,
    /// The PutBucketCors operation.
    PutBucketCors,
    /// The DeleteBucketCors operation.
    DeleteBucketCors,
    /// The PutBucketLifecycleConfiguration operation.
    PutBucketLifecycleConfiguration,
    /// The PutBucketPolicy operation.
    PutBucketPolicy,
    /// The PutBucketTagging operation.
    PutBucketTagging,
    /// The PutBucketNotificationConfiguration operation.
    PutBucketNotificationConfiguration,
    /// The PutBucketLogging operation.
    PutBucketLogging,
    /// The PutPublicAccessBlock operation.
    PutPublicAccessBlock,
    /// The DeletePublicAccessBlock operation.
    DeletePublicAccessBlock,
    /// The PutBucketOwnershipControls operation.
    PutBucketOwnershipControls,
    /// The PutObjectLockConfiguration operation.
    PutObjectLockConfiguration,
    /// The GetBucketAccelerateConfiguration operation.
    GetBucketAccelerateConfiguration,
    /// The PutBucketAccelerateConfiguration operation.
    PutBucketAccelerateConfiguration,
    /// The PutBucketRequestPayment operation.
    PutBucketRequestPayment,
    /// The GetBucketWebsite operation.
    GetBucketWebsite,
    /// The PutBucketWebsite operation.
    PutBucketWebsite,
    /// The PutBucketAcl operation.
    PutBucketAcl,
    /// The PutBucketReplication operation.
    PutBucketReplication,
    /// The GetBucketAnalyticsConfiguration operation.
    GetBucketAnalyticsConfiguration,
    /// The PutBucketAnalyticsConfiguration operation.
    PutBucketAnalyticsConfiguration,
    /// The ListBucketAnalyticsConfigurations operation.
    ListBucketAnalyticsConfigurations,
    /// The GetBucketInventoryConfiguration operation.
    GetBucketInventoryConfiguration,
    /// The PutBucketInventoryConfiguration operation.
    PutBucketInventoryConfiguration,
    /// The DeleteBucketInventoryConfiguration operation.
    DeleteBucketInventoryConfiguration,
    /// The ListBucketInventoryConfigurations operation.
    ListBucketInventoryConfigurations,
    /// The GetBucketMetricsConfiguration operation.
    GetBucketMetricsConfiguration,
    /// The PutBucketMetricsConfiguration operation.
    PutBucketMetricsConfiguration,
    /// The DeleteBucketMetricsConfiguration operation.
    DeleteBucketMetricsConfiguration,
    /// The ListBucketMetricsConfigurations operation.
    ListBucketMetricsConfigurations,
    /// The PutBucketIntelligentTieringConfiguration operation.
    PutBucketIntelligentTieringConfiguration,
    /// The ListBucketIntelligentTieringConfigurations operation.
    ListBucketIntelligentTieringConfigurations,
    /// The PutObjectTagging operation.
    PutObjectTagging,
    /// The DeleteObjectTagging operation.
    DeleteObjectTagging,
    /// The GetObjectAcl operation.
    GetObjectAcl,
    /// The PutObjectAcl operation.
    PutObjectAcl,
    /// The GetObjectRetention operation.
    GetObjectRetention,
    /// The PutObjectRetention operation.
    PutObjectRetention,
    /// The PutObjectLegalHold operation.
    PutObjectLegalHold,
}

impl S3Operation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateBucket,
        Self::DeleteBucket,
        Self::HeadBucket,
        Self::ListBuckets,
        Self::GetBucketLocation,
        Self::PutObject,
        Self::GetObject,
        Self::HeadObject,
        Self::DeleteObject,
        Self::DeleteObjects,
        Self::CopyObject,
        Self::RestoreObject,
        Self::SelectObjectContent,
        Self::GetObjectTorrent,
        Self::CreateMultipartUpload,
        Self::UploadPart,
        Self::UploadPartCopy,
        Self::CompleteMultipartUpload,
        Self::AbortMultipartUpload,
        Self::ListParts,
        Self::ListMultipartUploads,
        Self::ListObjects,
        Self::ListObjectsV2,
        Self::ListObjectVersions,
        Self::GetBucketVersioning,
        Self::PutBucketVersioning,
        Self::PutBucketEncryption,
        Self::PutBucketCors,
        Self::DeleteBucketCors,
        Self::PutBucketLifecycleConfiguration,
        Self::PutBucketPolicy,
        Self::PutBucketTagging,
        Self::PutBucketNotificationConfiguration,
        Self::PutBucketLogging,
        Self::PutPublicAccessBlock,
        Self::DeletePublicAccessBlock,
        Self::PutBucketOwnershipControls,
        Self::PutObjectLockConfiguration,
        Self::GetBucketAccelerateConfiguration,
        Self::PutBucketAccelerateConfiguration,
        Self::PutBucketRequestPayment,
        Self::GetBucketWebsite,
        Self::PutBucketWebsite,
        Self::PutBucketAcl,
        Self::PutBucketReplication,
        Self::GetBucketAnalyticsConfiguration,
        Self::PutBucketAnalyticsConfiguration,
        Self::ListBucketAnalyticsConfigurations,
        Self::GetBucketInventoryConfiguration,
        Self::PutBucketInventoryConfiguration,
        Self::DeleteBucketInventoryConfiguration,
        Self::ListBucketInventoryConfigurations,
        Self::GetBucketMetricsConfiguration,
        Self::PutBucketMetricsConfiguration,
        Self::DeleteBucketMetricsConfiguration,
        Self::ListBucketMetricsConfigurations,
        Self::PutBucketIntelligentTieringConfiguration,
        Self::ListBucketIntelligentTieringConfigurations,
        Self::PutObjectTagging,
        Self::DeleteObjectTagging,
        Self::GetObjectAcl,
        Self::PutObjectAcl,
        Self::GetObjectRetention,
        Self::PutObjectRetention,
        Self::PutObjectLegalHold,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateBucket => "CreateBucket",
            Self::DeleteBucket => "DeleteBucket",
            Self::HeadBucket => "HeadBucket",
            Self::ListBuckets => "ListBuckets",
            Self::GetBucketLocation => "GetBucketLocation",
            Self::PutObject => "PutObject",
            Self::GetObject => "GetObject",
            Self::HeadObject => "HeadObject",
            Self::DeleteObject => "DeleteObject",
            Self::DeleteObjects => "DeleteObjects",
            Self::CopyObject => "CopyObject",
            Self::RestoreObject => "RestoreObject",
            Self::SelectObjectContent => "SelectObjectContent",
            Self::GetObjectTorrent => "GetObjectTorrent",
            Self::CreateMultipartUpload => "CreateMultipartUpload",
            Self::UploadPart => "UploadPart",
            Self::UploadPartCopy => "UploadPartCopy",
            Self::CompleteMultipartUpload => "CompleteMultipartUpload",
            Self::AbortMultipartUpload => "AbortMultipartUpload",
            Self::ListParts => "ListParts",
            Self::ListMultipartUploads => "ListMultipartUploads",
            Self::ListObjects => "ListObjects",
            Self::ListObjectsV2 => "ListObjectsV2",
            Self::ListObjectVersions => "ListObjectVersions",
            Self::GetBucketVersioning => "GetBucketVersioning",
            Self::PutBucketVersioning => "PutBucketVersioning",
            Self::PutBucketEncryption => "PutBucketEncryption",
            Self::PutBucketCors => "PutBucketCors",
            Self::DeleteBucketCors => "DeleteBucketCors",
            Self::PutBucketLifecycleConfiguration => "PutBucketLifecycleConfiguration",
            Self::PutBucketPolicy => "PutBucketPolicy",
            Self::PutBucketTagging => "PutBucketTagging",
            Self::PutBucketNotificationConfiguration => "PutBucketNotificationConfiguration",
            Self::PutBucketLogging => "PutBucketLogging",
            Self::PutPublicAccessBlock => "PutPublicAccessBlock",
            Self::DeletePublicAccessBlock => "DeletePublicAccessBlock",
            Self::PutBucketOwnershipControls => "PutBucketOwnershipControls",
            Self::PutObjectLockConfiguration => "PutObjectLockConfiguration",
            Self::GetBucketAccelerateConfiguration => "GetBucketAccelerateConfiguration",
            Self::PutBucketAccelerateConfiguration => "PutBucketAccelerateConfiguration",
            Self::PutBucketRequestPayment => "PutBucketRequestPayment",
            Self::GetBucketWebsite => "GetBucketWebsite",
            Self::PutBucketWebsite => "PutBucketWebsite",
            Self::PutBucketAcl => "PutBucketAcl",
            Self::PutBucketReplication => "PutBucketReplication",
            Self::GetBucketAnalyticsConfiguration => "GetBucketAnalyticsConfiguration",
            Self::PutBucketAnalyticsConfiguration => "PutBucketAnalyticsConfiguration",
            Self::ListBucketAnalyticsConfigurations => "ListBucketAnalyticsConfigurations",
            Self::GetBucketInventoryConfiguration => "GetBucketInventoryConfiguration",
            Self::PutBucketInventoryConfiguration => "PutBucketInventoryConfiguration",
            Self::DeleteBucketInventoryConfiguration => "DeleteBucketInventoryConfiguration",
            Self::ListBucketInventoryConfigurations => "ListBucketInventoryConfigurations",
            Self::GetBucketMetricsConfiguration => "GetBucketMetricsConfiguration",
            Self::PutBucketMetricsConfiguration => "PutBucketMetricsConfiguration",
            Self::DeleteBucketMetricsConfiguration => "DeleteBucketMetricsConfiguration",
            Self::ListBucketMetricsConfigurations => "ListBucketMetricsConfigurations",
            Self::PutBucketIntelligentTieringConfiguration => "PutBucketIntelligentTieringConfiguration",
            Self::ListBucketIntelligentTieringConfigurations => "ListBucketIntelligentTieringConfigurations",
            Self::PutObjectTagging => "PutObjectTagging",
            Self::DeleteObjectTagging => "DeleteObjectTagging",
            Self::GetObjectAcl => "GetObjectAcl",
            Self::PutObjectAcl => "PutObjectAcl",
            Self::GetObjectRetention => "GetObjectRetention",
            Self::PutObjectRetention => "PutObjectRetention",
            Self::PutObjectLegalHold => "PutObjectLegalHold",
        }
    }

    /// Look up an operation by its AWS name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateBucket" => Some(Self::CreateBucket),
            "DeleteBucket" => Some(Self::DeleteBucket),
            "HeadBucket" => Some(Self::HeadBucket),
            "ListBuckets" => Some(Self::ListBuckets),
            "GetBucketLocation" => Some(Self::GetBucketLocation),
            "PutObject" => Some(Self::PutObject),
            "GetObject" => Some(Self::GetObject),
            "HeadObject" => Some(Self::HeadObject),
            "DeleteObject" => Some(Self::DeleteObject),
            "DeleteObjects" => Some(Self::DeleteObjects),
            "CopyObject" => Some(Self::CopyObject),
            "RestoreObject" => Some(Self::RestoreObject),
            "SelectObjectContent" => Some(Self::SelectObjectContent),
            "GetObjectTorrent" => Some(Self::GetObjectTorrent),
            "CreateMultipartUpload" => Some(Self::CreateMultipartUpload),
            "UploadPart" => Some(Self::UploadPart),
            "UploadPartCopy" => Some(Self::UploadPartCopy),
            "CompleteMultipartUpload" => Some(Self::CompleteMultipartUpload),
            "AbortMultipartUpload" => Some(Self::AbortMultipartUpload),
            "ListParts" => Some(Self::ListParts),
            "ListMultipartUploads" => Some(Self::ListMultipartUploads),
            "ListObjects" => Some(Self::ListObjects),
            "ListObjectsV2" => Some(Self::ListObjectsV2),
            "ListObjectVersions" => Some(Self::ListObjectVersions),
            "GetBucketVersioning" => Some(Self::GetBucketVersioning),
            "PutBucketVersioning" => Some(Self::PutBucketVersioning),
            "PutBucketEncryption" => Some(Self::PutBucketEncryption),
            "PutBucketCors" => Some(Self::PutBucketCors),
            "DeleteBucketCors" => Some(Self::DeleteBucketCors),
            "PutBucketLifecycleConfiguration" => Some(Self::PutBucketLifecycleConfiguration),
            "PutBucketPolicy" => Some(Self::PutBucketPolicy),
            "PutBucketTagging" => Some(Self::PutBucketTagging),
            "PutBucketNotificationConfiguration" => Some(Self::PutBucketNotificationConfiguration),
            "PutBucketLogging" => Some(Self::PutBucketLogging),
            "PutPublicAccessBlock" => Some(Self::PutPublicAccessBlock),
            "DeletePublicAccessBlock" => Some(Self::DeletePublicAccessBlock),
            "PutBucketOwnershipControls" => Some(Self::PutBucketOwnershipControls),
            "PutObjectLockConfiguration" => Some(Self::PutObjectLockConfiguration),
            "GetBucketAccelerateConfiguration" => Some(Self::GetBucketAccelerateConfiguration),
            "PutBucketAccelerateConfiguration" => Some(Self::PutBucketAccelerateConfiguration),
            "PutBucketRequestPayment" => Some(Self::PutBucketRequestPayment),
            "GetBucketWebsite" => Some(Self::GetBucketWebsite),
            "PutBucketWebsite" => Some(Self::PutBucketWebsite),
            "PutBucketAcl" => Some(Self::PutBucketAcl),
            "PutBucketReplication" => Some(Self::PutBucketReplication),
            "GetBucketAnalyticsConfiguration" => Some(Self::GetBucketAnalyticsConfiguration),
            "PutBucketAnalyticsConfiguration" => Some(Self::PutBucketAnalyticsConfiguration),
            "ListBucketAnalyticsConfigurations" => Some(Self::ListBucketAnalyticsConfigurations),
            "GetBucketInventoryConfiguration" => Some(Self::GetBucketInventoryConfiguration),
            "PutBucketInventoryConfiguration" => Some(Self::PutBucketInventoryConfiguration),
            "DeleteBucketInventoryConfiguration" => Some(Self::DeleteBucketInventoryConfiguration),
            "ListBucketInventoryConfigurations" => Some(Self::ListBucketInventoryConfigurations),
            "GetBucketMetricsConfiguration" => Some(Self::GetBucketMetricsConfiguration),
            "PutBucketMetricsConfiguration" => Some(Self::PutBucketMetricsConfiguration),
            "DeleteBucketMetricsConfiguration" => Some(Self::DeleteBucketMetricsConfiguration),
            "ListBucketMetricsConfigurations" => Some(Self::ListBucketMetricsConfigurations),
            "PutBucketIntelligentTieringConfiguration" => Some(Self::PutBucketIntelligentTieringConfiguration),
            "ListBucketIntelligentTieringConfigurations" => Some(Self::ListBucketIntelligentTieringConfigurations),
            "PutObjectTagging" => Some(Self::PutObjectTagging),
            "DeleteObjectTagging" => Some(Self::DeleteObjectTagging),
            "GetObjectAcl" => Some(Self::GetObjectAcl),
            "PutObjectAcl" => Some(Self::PutObjectAcl),
            "GetObjectRetention" => Some(Self::GetObjectRetention),
            "PutObjectRetention" => Some(Self::PutObjectRetention),
            "PutObjectLegalHold" => Some(Self::PutObjectLegalHold),
            _ => None,
        }
    }

    /// The file category the operation's structures are generated into.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::CreateBucket
            | Self::DeleteBucket
            | Self::HeadBucket
            | Self::ListBuckets
            | Self::GetBucketLocation => "bucket",
            Self::PutObject
            | Self::GetObject
            | Self::HeadObject
            | Self::DeleteObject
            | Self::DeleteObjects
            | Self::CopyObject
            | Self::RestoreObject
            | Self::SelectObjectContent
            | Self::GetObjectTorrent => "object",
            Self::CreateMultipartUpload
            | Self::UploadPart
            | Self::UploadPartCopy
            | Self::CompleteMultipartUpload
            | Self::AbortMultipartUpload
            | Self::ListParts
            | Self::ListMultipartUploads => "multipart",
            Self::ListObjects | Self::ListObjectsV2 | Self::ListObjectVersions => "list",
            Self::GetBucketVersioning
            | Self::PutBucketVersioning
            | Self::PutBucketEncryption
            | Self::PutBucketCors
            | Self::DeleteBucketCors
            | Self::PutBucketLifecycleConfiguration
            | Self::PutBucketPolicy
            | Self::PutBucketTagging
            | Self::PutBucketNotificationConfiguration
            | Self::PutBucketLogging
            | Self::PutPublicAccessBlock
            | Self::DeletePublicAccessBlock
            | Self::PutBucketOwnershipControls
            | Self::PutObjectLockConfiguration
            | Self::GetBucketAccelerateConfiguration
            | Self::PutBucketAccelerateConfiguration
            | Self::PutBucketRequestPayment
            | Self::GetBucketWebsite
            | Self::PutBucketWebsite
            | Self::PutBucketAcl
            | Self::PutBucketReplication
            | Self::GetBucketAnalyticsConfiguration
            | Self::PutBucketAnalyticsConfiguration
            | Self::ListBucketAnalyticsConfigurations
            | Self::GetBucketInventoryConfiguration
            | Self::PutBucketInventoryConfiguration
            | Self::DeleteBucketInventoryConfiguration
            | Self::ListBucketInventoryConfigurations
            | Self::GetBucketMetricsConfiguration
            | Self::PutBucketMetricsConfiguration
            | Self::DeleteBucketMetricsConfiguration
            | Self::ListBucketMetricsConfigurations
            | Self::PutBucketIntelligentTieringConfiguration
            | Self::ListBucketIntelligentTieringConfigurations
            | Self::PutObjectTagging
            | Self::DeleteObjectTagging
            | Self::GetObjectAcl
            | Self::PutObjectAcl
            | Self::GetObjectRetention
            | Self::PutObjectRetention
            | Self::PutObjectLegalHold => "config",
        }
    }

    /// Name of the request structure, `None` when the operation takes no input.
    #[must_use]
    pub fn request_shape(&self) -> Option<&'static str> {
        match self {
            Self::CreateBucket => Some("CreateBucketRequest"),
            Self::DeleteBucket => Some("DeleteBucketRequest"),
            Self::HeadBucket => Some("HeadBucketRequest"),
            Self::GetBucketLocation => Some("GetBucketLocationRequest"),
            Self::PutObject => Some("PutObjectRequest"),
            Self::GetObject => Some("GetObjectRequest"),
            Self::HeadObject => Some("HeadObjectRequest"),
            Self::DeleteObject => Some("DeleteObjectRequest"),
            Self::DeleteObjects => Some("DeleteObjectsRequest"),
            Self::CopyObject => Some("CopyObjectRequest"),
            Self::RestoreObject => Some("RestoreObjectRequest"),
            Self::SelectObjectContent => Some("SelectObjectContentRequest"),
            Self::GetObjectTorrent => Some("GetObjectTorrentRequest"),
            Self::CreateMultipartUpload => Some("CreateMultipartUploadRequest"),
            Self::UploadPart => Some("UploadPartRequest"),
            Self::UploadPartCopy => Some("UploadPartCopyRequest"),
            Self::CompleteMultipartUpload => Some("CompleteMultipartUploadRequest"),
            Self::AbortMultipartUpload => Some("AbortMultipartUploadRequest"),
            Self::ListParts => Some("ListPartsRequest"),
            Self::ListMultipartUploads => Some("ListMultipartUploadsRequest"),
            Self::ListObjects => Some("ListObjectsRequest"),
            Self::ListObjectsV2 => Some("ListObjectsV2Request"),
            Self::ListObjectVersions => Some("ListObjectVersionsRequest"),
            Self::GetBucketVersioning => Some("GetBucketVersioningRequest"),
            Self::PutBucketVersioning => Some("PutBucketVersioningRequest"),
            Self::PutBucketEncryption => Some("PutBucketEncryptionRequest"),
            Self::PutBucketCors => Some("PutBucketCorsRequest"),
            Self::DeleteBucketCors => Some("DeleteBucketCorsRequest"),
            Self::PutBucketLifecycleConfiguration => Some("PutBucketLifecycleConfigurationRequest"),
            Self::PutBucketPolicy => Some("PutBucketPolicyRequest"),
            Self::PutBucketTagging => Some("PutBucketTaggingRequest"),
            Self::PutBucketNotificationConfiguration => Some("PutBucketNotificationConfigurationRequest"),
            Self::PutBucketLogging => Some("PutBucketLoggingRequest"),
            Self::PutPublicAccessBlock => Some("PutPublicAccessBlockRequest"),
            Self::DeletePublicAccessBlock => Some("DeletePublicAccessBlockRequest"),
            Self::PutBucketOwnershipControls => Some("PutBucketOwnershipControlsRequest"),
            Self::PutObjectLockConfiguration => Some("PutObjectLockConfigurationRequest"),
            Self::GetBucketAccelerateConfiguration => Some("GetBucketAccelerateConfigurationRequest"),
            Self::PutBucketAccelerateConfiguration => Some("PutBucketAccelerateConfigurationRequest"),
            Self::PutBucketRequestPayment => Some("PutBucketRequestPaymentRequest"),
            Self::GetBucketWebsite => Some("GetBucketWebsiteRequest"),
            Self::PutBucketWebsite => Some("PutBucketWebsiteRequest"),
            Self::PutBucketAcl => Some("PutBucketAclRequest"),
            Self::PutBucketReplication => Some("PutBucketReplicationRequest"),
            Self::GetBucketAnalyticsConfiguration => Some("GetBucketAnalyticsConfigurationRequest"),
            Self::PutBucketAnalyticsConfiguration => Some("PutBucketAnalyticsConfigurationRequest"),
            Self::ListBucketAnalyticsConfigurations => Some("ListBucketAnalyticsConfigurationsRequest"),
            Self::GetBucketInventoryConfiguration => Some("GetBucketInventoryConfigurationRequest"),
            Self::PutBucketInventoryConfiguration => Some("PutBucketInventoryConfigurationRequest"),
            Self::DeleteBucketInventoryConfiguration => Some("DeleteBucketInventoryConfigurationRequest"),
            Self::ListBucketInventoryConfigurations => Some("ListBucketInventoryConfigurationsRequest"),
            Self::GetBucketMetricsConfiguration => Some("GetBucketMetricsConfigurationRequest"),
            Self::PutBucketMetricsConfiguration => Some("PutBucketMetricsConfigurationRequest"),
            Self::DeleteBucketMetricsConfiguration => Some("DeleteBucketMetricsConfigurationRequest"),
            Self::ListBucketMetricsConfigurations => Some("ListBucketMetricsConfigurationsRequest"),
            Self::PutBucketIntelligentTieringConfiguration => Some("PutBucketIntelligentTieringConfigurationRequest"),
            Self::ListBucketIntelligentTieringConfigurations => Some("ListBucketIntelligentTieringConfigurationsRequest"),
            Self::PutObjectTagging => Some("PutObjectTaggingRequest"),
            Self::DeleteObjectTagging => Some("DeleteObjectTaggingRequest"),
            Self::GetObjectAcl => Some("GetObjectAclRequest"),
            Self::PutObjectAcl => Some("PutObjectAclRequest"),
            Self::GetObjectRetention => Some("GetObjectRetentionRequest"),
            Self::PutObjectRetention => Some("PutObjectRetentionRequest"),
            Self::PutObjectLegalHold => Some("PutObjectLegalHoldRequest"),
            Self::ListBuckets => None,
        }
    }

    /// Name of the output structure, `None` when the operation returns nothing.
    #[must_use]
    pub fn output_shape(&self) -> Option<&'static str> {
        match self {
            Self::CreateBucket => Some("CreateBucketOutput"),
            Self::ListBuckets => Some("ListBucketsOutput"),
            Self::GetBucketLocation => Some("GetBucketLocationOutput"),
            Self::PutObject => Some("PutObjectOutput"),
            Self::GetObject => Some("GetObjectOutput"),
            Self::HeadObject => Some("HeadObjectOutput"),
            Self::DeleteObject => Some("DeleteObjectOutput"),
            Self::DeleteObjects => Some("DeleteObjectsOutput"),
            Self::CopyObject => Some("CopyObjectOutput"),
            Self::RestoreObject => Some("RestoreObjectOutput"),
            Self::GetObjectTorrent => Some("GetObjectTorrentOutput"),
            Self::CreateMultipartUpload => Some("CreateMultipartUploadOutput"),
            Self::UploadPart => Some("UploadPartOutput"),
            Self::UploadPartCopy => Some("UploadPartCopyOutput"),
            Self::CompleteMultipartUpload => Some("CompleteMultipartUploadOutput"),
            Self::AbortMultipartUpload => Some("AbortMultipartUploadOutput"),
            Self::ListParts => Some("ListPartsOutput"),
            Self::ListMultipartUploads => Some("ListMultipartUploadsOutput"),
            Self::ListObjects => Some("ListObjectsOutput"),
            Self::ListObjectsV2 => Some("ListObjectsV2Output"),
            Self::ListObjectVersions => Some("ListObjectVersionsOutput"),
            Self::GetBucketVersioning => Some("GetBucketVersioningOutput"),
            Self::PutObjectLockConfiguration => Some("PutObjectLockConfigurationOutput"),
            Self::GetBucketAccelerateConfiguration => Some("GetBucketAccelerateConfigurationOutput"),
            Self::GetBucketWebsite => Some("GetBucketWebsiteOutput"),
            Self::GetBucketAnalyticsConfiguration => Some("GetBucketAnalyticsConfigurationOutput"),
            Self::ListBucketAnalyticsConfigurations => Some("ListBucketAnalyticsConfigurationsOutput"),
            Self::GetBucketInventoryConfiguration => Some("GetBucketInventoryConfigurationOutput"),
            Self::ListBucketInventoryConfigurations => Some("ListBucketInventoryConfigurationsOutput"),
            Self::GetBucketMetricsConfiguration => Some("GetBucketMetricsConfigurationOutput"),
            Self::ListBucketMetricsConfigurations => Some("ListBucketMetricsConfigurationsOutput"),
            Self::ListBucketIntelligentTieringConfigurations => Some("ListBucketIntelligentTieringConfigurationsOutput"),
            Self::PutObjectTagging => Some("PutObjectTaggingOutput"),
            Self::DeleteObjectTagging => Some("DeleteObjectTaggingOutput"),
            Self::GetObjectAcl => Some("GetObjectAclOutput"),
            Self::PutObjectAcl => Some("PutObjectAclOutput"),
            Self::GetObjectRetention => Some("GetObjectRetentionOutput"),
            Self::PutObjectRetention => Some("PutObjectRetentionOutput"),
            Self::PutObjectLegalHold => Some("PutObjectLegalHoldOutput"),
            Self::DeleteBucket
            | Self::HeadBucket
            | Self::SelectObjectContent
            | Self::PutBucketVersioning
            | Self::PutBucketEncryption
            | Self::PutBucketCors
            | Self::DeleteBucketCors
            | Self::PutBucketLifecycleConfiguration
            | Self::PutBucketPolicy
            | Self::PutBucketTagging
            | Self::PutBucketNotificationConfiguration
            | Self::PutBucketLogging
            | Self::PutPublicAccessBlock
            | Self::DeletePublicAccessBlock
            | Self::PutBucketOwnershipControls
            | Self::PutBucketAccelerateConfiguration
            | Self::PutBucketRequestPayment
            | Self::PutBucketWebsite
            | Self::PutBucketAcl
            | Self::PutBucketReplication
            | Self::PutBucketAnalyticsConfiguration
            | Self::PutBucketInventoryConfiguration
            | Self::DeleteBucketInventoryConfiguration
            | Self::PutBucketMetricsConfiguration
            | Self::DeleteBucketMetricsConfiguration
            | Self::PutBucketIntelligentTieringConfiguration => None,
        }
    }
}

impl std::fmt::Display for S3Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
