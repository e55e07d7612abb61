//! Structure contract over every shared S3 type.

#[cfg(test)]
mod tests {
    use s3crt_model::types::{
        AbortIncompleteMultipartUpload, AccelerateConfiguration, AccessControlPolicy,
        AccessControlTranslation, AnalyticsAndOperator, AnalyticsConfiguration,
        AnalyticsExportDestination, AnalyticsFilter, AnalyticsS3BucketDestination, Bucket,
        BucketLifecycleConfiguration, BucketLoggingStatus, CORSConfiguration, CORSRule, CSVInput,
        CSVOutput, CommonPrefix, CompletedMultipartUpload, CompletedPart, Condition,
        CopyObjectResult, CopyPartResult, CreateBucketConfiguration, DefaultRetention, Delete,
        DeleteMarkerEntry, DeleteMarkerReplication, DeletedObject, Destination, Encryption,
        EncryptionConfiguration, Error, ErrorDocument, ExistingObjectReplication, FilterRule,
        GlacierJobParameters, Grant, Grantee, HttpHeader, IndexDocument, Initiator,
        InputSerialization, IntelligentTieringAndOperator, IntelligentTieringConfiguration,
        IntelligentTieringFilter, InventoryConfiguration, InventoryDestination, InventoryEncryption,
        InventoryFilter, InventoryS3BucketDestination, InventorySchedule, JSONInput, JSONOutput,
        LambdaFunctionConfiguration, LifecycleExpiration, LifecycleRule, LifecycleRuleAndOperator,
        LifecycleRuleFilter, LoggingEnabled, MetadataEntry, Metrics, MetricsAndOperator,
        MetricsConfiguration, MetricsFilter, MultipartUpload, NoncurrentVersionExpiration,
        NoncurrentVersionTransition, NotificationConfiguration, NotificationConfigurationFilter,
        Object, ObjectIdentifier, ObjectLockConfiguration, ObjectLockLegalHold, ObjectLockRetention,
        ObjectLockRule, ObjectVersion, OutputLocation, OutputSerialization, Owner,
        OwnershipControls, OwnershipControlsRule, ParquetInput, Part, Progress,
        PublicAccessBlockConfiguration, QueueConfiguration, Redirect, RedirectAllRequestsTo,
        ReplicaModifications, ReplicationConfiguration, ReplicationRule, ReplicationRuleAndOperator,
        ReplicationRuleFilter, ReplicationTime, ReplicationTimeValue, RequestPaymentConfiguration,
        RequestProgress, RestoreRequest, RoutingRule, S3KeyFilter, S3Location, SSEKMS, SSES3,
        ScanRange, SelectParameters, ServerSideEncryptionByDefault,
        ServerSideEncryptionConfiguration, ServerSideEncryptionRule, SourceSelectionCriteria,
        SseKmsEncryptedObjects, Stats, StorageClassAnalysis, StorageClassAnalysisDataExport, Tag,
        Tagging, TargetGrant, Tiering, TopicConfiguration, Transition, VersioningConfiguration,
        WebsiteConfiguration,
    };

    #[test]
    fn test_should_honor_structure_contract_for_every_shared_type() {
        let checked = check_structures!(
            AbortIncompleteMultipartUpload,
            AccelerateConfiguration,
            AccessControlPolicy,
            AccessControlTranslation,
            AnalyticsAndOperator,
            AnalyticsConfiguration,
            AnalyticsExportDestination,
            AnalyticsFilter,
            AnalyticsS3BucketDestination,
            Bucket,
            BucketLifecycleConfiguration,
            BucketLoggingStatus,
            CORSConfiguration,
            CORSRule,
            CSVInput,
            CSVOutput,
            CommonPrefix,
            CompletedMultipartUpload,
            CompletedPart,
            Condition,
            CopyObjectResult,
            CopyPartResult,
            CreateBucketConfiguration,
            DefaultRetention,
            Delete,
            DeleteMarkerEntry,
            DeleteMarkerReplication,
            DeletedObject,
            Destination,
            Encryption,
            EncryptionConfiguration,
            Error,
            ErrorDocument,
            ExistingObjectReplication,
            FilterRule,
            GlacierJobParameters,
            Grant,
            Grantee,
            HttpHeader,
            IndexDocument,
            Initiator,
            InputSerialization,
            IntelligentTieringAndOperator,
            IntelligentTieringConfiguration,
            IntelligentTieringFilter,
            InventoryConfiguration,
            InventoryDestination,
            InventoryEncryption,
            InventoryFilter,
            InventoryS3BucketDestination,
            InventorySchedule,
            JSONInput,
            JSONOutput,
            LambdaFunctionConfiguration,
            LifecycleExpiration,
            LifecycleRule,
            LifecycleRuleAndOperator,
            LifecycleRuleFilter,
            LoggingEnabled,
            MetadataEntry,
            Metrics,
            MetricsAndOperator,
            MetricsConfiguration,
            MetricsFilter,
            MultipartUpload,
            NoncurrentVersionExpiration,
            NoncurrentVersionTransition,
            NotificationConfiguration,
            NotificationConfigurationFilter,
            Object,
            ObjectIdentifier,
            ObjectLockConfiguration,
            ObjectLockLegalHold,
            ObjectLockRetention,
            ObjectLockRule,
            ObjectVersion,
            OutputLocation,
            OutputSerialization,
            Owner,
            OwnershipControls,
            OwnershipControlsRule,
            ParquetInput,
            Part,
            Progress,
            PublicAccessBlockConfiguration,
            QueueConfiguration,
            Redirect,
            RedirectAllRequestsTo,
            ReplicaModifications,
            ReplicationConfiguration,
            ReplicationRule,
            ReplicationRuleAndOperator,
            ReplicationRuleFilter,
            ReplicationTime,
            ReplicationTimeValue,
            RequestPaymentConfiguration,
            RequestProgress,
            RestoreRequest,
            RoutingRule,
            S3KeyFilter,
            S3Location,
            SSEKMS,
            SSES3,
            ScanRange,
            SelectParameters,
            ServerSideEncryptionByDefault,
            ServerSideEncryptionConfiguration,
            ServerSideEncryptionRule,
            SourceSelectionCriteria,
            SseKmsEncryptedObjects,
            Stats,
            StorageClassAnalysis,
            StorageClassAnalysisDataExport,
            Tag,
            Tagging,
            TargetGrant,
            Tiering,
            TopicConfiguration,
            Transition,
            VersioningConfiguration,
            WebsiteConfiguration,
        );
        assert_eq!(checked, 121);
    }
}
