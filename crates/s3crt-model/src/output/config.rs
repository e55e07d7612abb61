//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::enums::{BucketAccelerateStatus, BucketVersioningStatus, MFADeleteStatus, RequestCharged};
use crate::s3_structure;
use crate::types::{
    AnalyticsConfiguration, ErrorDocument, Grant, IndexDocument, IntelligentTieringConfiguration,
    InventoryConfiguration, MetricsConfiguration, ObjectLockRetention, Owner, RedirectAllRequestsTo,
    RoutingRule,
};

s3_structure! {
    /// S3 DeleteObjectTaggingOutput.
    pub struct DeleteObjectTaggingOutput {
        version_id: String,
    }
}

s3_structure! {
    /// S3 GetBucketAccelerateConfigurationOutput.
    pub struct GetBucketAccelerateConfigurationOutput {
        status: BucketAccelerateStatus,
    }
}

s3_structure! {
    /// S3 GetBucketAnalyticsConfigurationOutput.
    pub struct GetBucketAnalyticsConfigurationOutput {
        analytics_configuration: AnalyticsConfiguration,
    }
}

s3_structure! {
    /// S3 GetBucketInventoryConfigurationOutput.
    pub struct GetBucketInventoryConfigurationOutput {
        inventory_configuration: InventoryConfiguration,
    }
}

s3_structure! {
    /// S3 GetBucketMetricsConfigurationOutput.
    pub struct GetBucketMetricsConfigurationOutput {
        metrics_configuration: MetricsConfiguration,
    }
}

s3_structure! {
    /// S3 GetBucketVersioningOutput.
    pub struct GetBucketVersioningOutput {
        /// Specifies whether MFA delete is enabled in the bucket versioning configuration.
        mfa_delete: MFADeleteStatus,
        /// The versioning state of the bucket.
        status: BucketVersioningStatus,
    }
}

s3_structure! {
    /// S3 GetBucketWebsiteOutput.
    pub struct GetBucketWebsiteOutput {
        /// The object key name of the website error document to use for 4XX class errors.
        error_document: ErrorDocument,
        /// The name of the index document for the website (for example index.html ).
        index_document: IndexDocument,
        /// Specifies the redirect behavior of all requests to a website endpoint of an Amazon S3 bucket.
        redirect_all_requests_to: RedirectAllRequestsTo,
        /// Rules that define when a redirect is applied and the redirect behavior.
        routing_rules: Vec<RoutingRule>,
    }
}

s3_structure! {
    /// S3 GetObjectAclOutput.
    pub struct GetObjectAclOutput {
        /// A list of grants.
        grants: Vec<Grant>,
        /// Container for the bucket owner's display name and ID.
        owner: Owner,
        request_charged: RequestCharged,
    }
}

s3_structure! {
    /// S3 GetObjectRetentionOutput.
    pub struct GetObjectRetentionOutput {
        retention: ObjectLockRetention,
    }
}

s3_structure! {
    /// S3 ListBucketAnalyticsConfigurationsOutput.
    pub struct ListBucketAnalyticsConfigurationsOutput {
        /// The list of analytics configurations for a bucket.
        analytics_configuration_list: Vec<AnalyticsConfiguration>,
        /// The marker that is used as a starting point for this analytics configuration list response.
        continuation_token: String,
        /// Indicates whether the returned list of analytics configurations is complete.
        is_truncated: bool,
        next_continuation_token: String,
    }
}

s3_structure! {
    /// S3 ListBucketIntelligentTieringConfigurationsOutput.
    pub struct ListBucketIntelligentTieringConfigurationsOutput {
        /// The ContinuationToken that represents a placeholder from where this request should begin.
        continuation_token: String,
        /// The list of S3 Intelligent-Tiering configurations for a bucket.
        intelligent_tiering_configuration_list: Vec<IntelligentTieringConfiguration>,
        /// Indicates whether the returned list of analytics configurations is complete.
        is_truncated: bool,
        /// The marker used to continue this inventory configuration listing.
        next_continuation_token: String,
    }
}

s3_structure! {
    /// S3 ListBucketInventoryConfigurationsOutput.
    pub struct ListBucketInventoryConfigurationsOutput {
        continuation_token: String,
        /// The list of inventory configurations for a bucket.
        inventory_configuration_list: Vec<InventoryConfiguration>,
        /// Tells whether the returned list of inventory configurations is complete.
        is_truncated: bool,
        /// The marker used to continue this inventory configuration listing.
        next_continuation_token: String,
    }
}

s3_structure! {
    /// S3 ListBucketMetricsConfigurationsOutput.
    pub struct ListBucketMetricsConfigurationsOutput {
        /// The marker that is used as a starting point for this metrics configuration list response.
        continuation_token: String,
        /// Indicates whether the returned list of metrics configurations is complete.
        is_truncated: bool,
        /// The list of metrics configurations for a bucket.
        metrics_configuration_list: Vec<MetricsConfiguration>,
        /// The marker used to continue a metrics configuration listing that has been truncated.
        next_continuation_token: String,
    }
}

s3_structure! {
    /// S3 PutObjectAclOutput.
    pub struct PutObjectAclOutput {
        request_charged: RequestCharged,
    }
}

s3_structure! {
    /// S3 PutObjectLegalHoldOutput.
    pub struct PutObjectLegalHoldOutput {
        request_charged: RequestCharged,
    }
}

s3_structure! {
    /// S3 PutObjectLockConfigurationOutput.
    pub struct PutObjectLockConfigurationOutput {
        request_charged: RequestCharged,
    }
}

s3_structure! {
    /// S3 PutObjectRetentionOutput.
    pub struct PutObjectRetentionOutput {
        request_charged: RequestCharged,
    }
}

s3_structure! {
    /// S3 PutObjectTaggingOutput.
    pub struct PutObjectTaggingOutput {
        version_id: String,
    }
}
