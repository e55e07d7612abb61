//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::enums::{BucketCannedACL, ObjectCannedACL, RequestPayer};
use crate::s3_structure;
use crate::types::{
    AccelerateConfiguration, AccessControlPolicy, AnalyticsConfiguration,
    BucketLifecycleConfiguration, BucketLoggingStatus, CORSConfiguration, HttpHeader,
    IntelligentTieringConfiguration, InventoryConfiguration, MetricsConfiguration,
    NotificationConfiguration, ObjectLockConfiguration, ObjectLockLegalHold, ObjectLockRetention,
    OwnershipControls, PublicAccessBlockConfiguration, ReplicationConfiguration,
    RequestPaymentConfiguration, ServerSideEncryptionConfiguration, Tagging,
    VersioningConfiguration, WebsiteConfiguration,
};

s3_structure! {
    /// S3 DeleteBucketCorsRequest.
    pub struct DeleteBucketCorsRequest {
        /// Specifies the bucket whose cors configuration is being deleted.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 DeleteBucketInventoryConfigurationRequest.
    pub struct DeleteBucketInventoryConfigurationRequest {
        /// The name of the bucket containing the inventory configuration to delete.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The ID used to identify the inventory configuration.
        id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 DeleteBucketMetricsConfigurationRequest.
    pub struct DeleteBucketMetricsConfigurationRequest {
        /// The name of the bucket containing the metrics configuration to delete.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The ID used to identify the metrics configuration.
        id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 DeleteObjectTaggingRequest.
    pub struct DeleteObjectTaggingRequest {
        /// The bucket name containing the objects from which to remove the tags.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Name of the object key.
        key: String,
        /// The versionId of the object that the tag-set will be removed from.
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 DeletePublicAccessBlockRequest.
    pub struct DeletePublicAccessBlockRequest {
        /// The Amazon S3 bucket whose PublicAccessBlock configuration you want to delete.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetBucketAccelerateConfigurationRequest.
    pub struct GetBucketAccelerateConfigurationRequest {
        /// The name of the bucket for which the accelerate configuration is retrieved.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetBucketAnalyticsConfigurationRequest.
    pub struct GetBucketAnalyticsConfigurationRequest {
        /// The name of the bucket from which an analytics configuration is retrieved.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The ID that identifies the analytics configuration.
        id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetBucketInventoryConfigurationRequest.
    pub struct GetBucketInventoryConfigurationRequest {
        /// The name of the bucket containing the inventory configuration to retrieve.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The ID used to identify the inventory configuration.
        id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetBucketMetricsConfigurationRequest.
    pub struct GetBucketMetricsConfigurationRequest {
        /// The name of the bucket containing the metrics configuration to retrieve.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The ID used to identify the metrics configuration.
        id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetBucketVersioningRequest.
    pub struct GetBucketVersioningRequest {
        bucket: String,
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetBucketWebsiteRequest.
    pub struct GetBucketWebsiteRequest {
        bucket: String,
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetObjectAclRequest.
    pub struct GetObjectAclRequest {
        /// The bucket name that contains the object for which to get the ACL information.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The key of the object for which to get the ACL information.
        key: String,
        request_payer: RequestPayer,
        /// VersionId used to reference a specific version of the object.
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetObjectRetentionRequest.
    pub struct GetObjectRetentionRequest {
        bucket: String,
        expected_bucket_owner: String,
        key: String,
        request_payer: RequestPayer,
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 ListBucketAnalyticsConfigurationsRequest.
    pub struct ListBucketAnalyticsConfigurationsRequest {
        /// The name of the bucket from which analytics configurations are retrieved.
        bucket: String,
        /// The ContinuationToken that represents a placeholder from where this request should begin.
        continuation_token: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 ListBucketIntelligentTieringConfigurationsRequest.
    pub struct ListBucketIntelligentTieringConfigurationsRequest {
        bucket: String,
        continuation_token: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 ListBucketInventoryConfigurationsRequest.
    pub struct ListBucketInventoryConfigurationsRequest {
        /// The name of the bucket containing the inventory configurations to retrieve.
        bucket: String,
        /// The marker used to continue an inventory configuration listing that has been truncated.
        continuation_token: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 ListBucketMetricsConfigurationsRequest.
    pub struct ListBucketMetricsConfigurationsRequest {
        /// The name of the bucket containing the metrics configurations to retrieve.
        bucket: String,
        /// The marker that is used to continue a metrics configuration listing that has been truncated.
        continuation_token: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketAccelerateConfigurationRequest.
    pub struct PutBucketAccelerateConfigurationRequest {
        /// Container for setting the transfer acceleration state.
        accelerate_configuration: AccelerateConfiguration,
        /// The name of the bucket for which the accelerate configuration is set.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketAclRequest.
    pub struct PutBucketAclRequest {
        /// The canned ACL to apply to the bucket.
        acl: BucketCannedACL,
        /// Contains the elements that set the ACL permissions for an object per grantee.
        access_control_policy: AccessControlPolicy,
        /// The bucket to which to apply the ACL.
        bucket: String,
        /// The base64-encoded 128-bit MD5 digest of the data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Allows grantee the read, write, read ACP, and write ACP permissions on the bucket.
        grant_full_control: String,
        /// Allows grantee to list the objects in the bucket.
        grant_read: String,
        /// Allows grantee to read the bucket ACL.
        grant_read_acp: String,
        /// Allows grantee to create, overwrite, and delete any object in the bucket.
        grant_write: String,
        /// Allows grantee to write the ACL for the applicable bucket.
        grant_write_acp: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketAnalyticsConfigurationRequest.
    pub struct PutBucketAnalyticsConfigurationRequest {
        /// The configuration and any analyses for the analytics filter.
        analytics_configuration: AnalyticsConfiguration,
        /// The name of the bucket to which an analytics configuration is stored.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The ID that identifies the analytics configuration.
        id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketCorsRequest.
    pub struct PutBucketCorsRequest {
        /// Specifies the bucket impacted by the cors configuration.
        bucket: String,
        /// Describes the cross-origin access configuration for objects in an Amazon S3 bucket.
        cors_configuration: CORSConfiguration,
        /// The base64-encoded 128-bit MD5 digest of the data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketEncryptionRequest.
    pub struct PutBucketEncryptionRequest {
        bucket: String,
        /// The base64-encoded 128-bit MD5 digest of the server-side encryption configuration.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        server_side_encryption_configuration: ServerSideEncryptionConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketIntelligentTieringConfigurationRequest.
    pub struct PutBucketIntelligentTieringConfigurationRequest {
        /// The name of the Amazon S3 bucket whose configuration you want to modify or retrieve.
        bucket: String,
        /// The ID used to identify the S3 Intelligent-Tiering configuration.
        id: String,
        /// Container for S3 Intelligent-Tiering configuration.
        intelligent_tiering_configuration: IntelligentTieringConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketInventoryConfigurationRequest.
    pub struct PutBucketInventoryConfigurationRequest {
        /// The name of the bucket where the inventory configuration will be stored.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The ID used to identify the inventory configuration.
        id: String,
        /// Specifies the inventory configuration.
        inventory_configuration: InventoryConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketLifecycleConfigurationRequest.
    pub struct PutBucketLifecycleConfigurationRequest {
        bucket: String,
        expected_bucket_owner: String,
        lifecycle_configuration: BucketLifecycleConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketLoggingRequest.
    pub struct PutBucketLoggingRequest {
        /// The name of the bucket for which to set the logging parameters.
        bucket: String,
        /// Container for logging status information.
        bucket_logging_status: BucketLoggingStatus,
        /// The MD5 hash of the PutBucketLogging request body.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketMetricsConfigurationRequest.
    pub struct PutBucketMetricsConfigurationRequest {
        /// The name of the bucket for which the metrics configuration is set.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The ID used to identify the metrics configuration.
        id: String,
        /// Specifies the metrics configuration.
        metrics_configuration: MetricsConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketNotificationConfigurationRequest.
    pub struct PutBucketNotificationConfigurationRequest {
        /// The name of the bucket.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        notification_configuration: NotificationConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketOwnershipControlsRequest.
    pub struct PutBucketOwnershipControlsRequest {
        /// The name of the Amazon S3 bucket whose OwnershipControls you want to set.
        bucket: String,
        /// The MD5 hash of the OwnershipControls request body.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The OwnershipControls (BucketOwnerPreferred or ObjectWriter) that you want to apply to this Amazon S3 bucket.
        ownership_controls: OwnershipControls,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketPolicyRequest.
    pub struct PutBucketPolicyRequest {
        /// The name of the bucket.
        bucket: String,
        confirm_remove_self_bucket_access: bool,
        /// The MD5 hash of the request body.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The bucket policy as a JSON document.
        policy: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketReplicationRequest.
    pub struct PutBucketReplicationRequest {
        /// The name of the bucket
        bucket: String,
        /// The base64-encoded 128-bit MD5 digest of the data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        replication_configuration: ReplicationConfiguration,
        /// A token to allow Object Lock to be enabled for an existing bucket.
        token: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketRequestPaymentRequest.
    pub struct PutBucketRequestPaymentRequest {
        /// The bucket name.
        bucket: String,
        /// >The base64-encoded 128-bit MD5 digest of the data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Container for Payer.
        request_payment_configuration: RequestPaymentConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketTaggingRequest.
    pub struct PutBucketTaggingRequest {
        /// The bucket name.
        bucket: String,
        /// The base64-encoded 128-bit MD5 digest of the data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Container for the TagSet and Tag elements.
        tagging: Tagging,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketVersioningRequest.
    pub struct PutBucketVersioningRequest {
        /// The bucket name.
        bucket: String,
        /// >The base64-encoded 128-bit MD5 digest of the data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        mfa: String,
        /// Container for setting the versioning state.
        versioning_configuration: VersioningConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutBucketWebsiteRequest.
    pub struct PutBucketWebsiteRequest {
        /// The bucket name.
        bucket: String,
        /// The base64-encoded 128-bit MD5 digest of the data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Container for the request.
        website_configuration: WebsiteConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutObjectAclRequest.
    pub struct PutObjectAclRequest {
        /// The canned ACL to apply to the object.
        acl: ObjectCannedACL,
        /// Contains the elements that set the ACL permissions for an object per grantee.
        access_control_policy: AccessControlPolicy,
        /// The bucket name that contains the object to which you want to attach the ACL.
        bucket: String,
        /// The base64-encoded 128-bit MD5 digest of the data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Allows grantee the read, write, read ACP, and write ACP permissions on the bucket.
        grant_full_control: String,
        /// Allows grantee to list the objects in the bucket.
        grant_read: String,
        /// Allows grantee to read the bucket ACL.
        grant_read_acp: String,
        /// Allows grantee to create, overwrite, and delete any object in the bucket.
        grant_write: String,
        /// Allows grantee to write the ACL for the applicable bucket.
        grant_write_acp: String,
        /// Key for which the PUT operation was initiated.
        key: String,
        request_payer: RequestPayer,
        /// VersionId used to reference a specific version of the object.
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutObjectLegalHoldRequest.
    pub struct PutObjectLegalHoldRequest {
        /// The bucket name containing the object that you want to place a Legal Hold on.
        bucket: String,
        /// The MD5 hash for the request body.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The key name for the object that you want to place a Legal Hold on.
        key: String,
        /// Container element for the Legal Hold configuration you want to apply to the specified object.
        legal_hold: ObjectLockLegalHold,
        request_payer: RequestPayer,
        /// The version ID of the object that you want to place a Legal Hold on.
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutObjectLockConfigurationRequest.
    pub struct PutObjectLockConfigurationRequest {
        /// The bucket whose Object Lock configuration you want to create or replace.
        bucket: String,
        /// The MD5 hash for the request body.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The Object Lock configuration that you want to apply to the specified bucket.
        object_lock_configuration: ObjectLockConfiguration,
        request_payer: RequestPayer,
        /// A token to allow Object Lock to be enabled for an existing bucket.
        token: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutObjectRetentionRequest.
    pub struct PutObjectRetentionRequest {
        /// The bucket name that contains the object you want to apply this Object Retention configuration to.
        bucket: String,
        /// Indicates whether this operation should bypass Governance-mode restrictions.
        bypass_governance_retention: bool,
        /// The MD5 hash for the request body.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The key name for the object that you want to apply this Object Retention configuration to.
        key: String,
        request_payer: RequestPayer,
        /// The container element for the Object Retention configuration.
        retention: ObjectLockRetention,
        /// The version ID for the object that you want to apply this Object Retention configuration to.
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutObjectTaggingRequest.
    pub struct PutObjectTaggingRequest {
        /// The bucket name containing the object.
        bucket: String,
        /// The MD5 hash for the request body.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Name of the object key.
        key: String,
        /// Container for the TagSet and Tag elements
        tagging: Tagging,
        /// The versionId of the object that the tag-set will be added to.
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutPublicAccessBlockRequest.
    pub struct PutPublicAccessBlockRequest {
        /// The name of the Amazon S3 bucket whose PublicAccessBlock configuration you want to set.
        bucket: String,
        /// The MD5 hash of the PutPublicAccessBlock request body.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The PublicAccessBlock configuration that you want to apply to this Amazon S3 bucket.
        public_access_block_configuration: PublicAccessBlockConfiguration,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}
