//! Open enum contract over every generated enum.

#[cfg(test)]
mod tests {
    use s3crt_model::enums::{
        AnalyticsS3ExportFileFormat, ArchiveStatus, BucketAccelerateStatus, BucketCannedACL,
        BucketLocationConstraint, BucketLogsPermission, BucketVersioningStatus, CompressionType,
        DeleteMarkerReplicationStatus, EncodingType, Event, ExistingObjectReplicationStatus,
        ExpirationStatus, ExpressionType, FileHeaderInfo, FilterRuleName,
        IntelligentTieringAccessTier, IntelligentTieringStatus, InventoryFormat, InventoryFrequency,
        InventoryIncludedObjectVersions, InventoryOptionalField, JSONType, MFADelete,
        MFADeleteStatus, MetadataDirective, MetricsStatus, ObjectCannedACL, ObjectLockEnabled,
        ObjectLockLegalHoldStatus, ObjectLockMode, ObjectLockRetentionMode, ObjectOwnership,
        ObjectStorageClass, ObjectVersionStorageClass, OwnerOverride, Payer, Permission, Protocol,
        QuoteFields, ReplicaModificationsStatus, ReplicationRuleStatus, ReplicationStatus,
        ReplicationTimeStatus, RequestCharged, RequestPayer, RestoreRequestType,
        ServerSideEncryption, SseKmsEncryptedObjectsStatus, StorageClass,
        StorageClassAnalysisSchemaVersion, TaggingDirective, Tier, TransitionStorageClass, Type,
    };

    #[test]
    fn test_should_honor_open_enum_contract_for_every_enum() {
        let checked = check_open_enums! {
            AnalyticsS3ExportFileFormat => 1,
            ArchiveStatus => 2,
            BucketAccelerateStatus => 2,
            BucketCannedACL => 4,
            BucketLocationConstraint => 25,
            BucketLogsPermission => 3,
            BucketVersioningStatus => 2,
            CompressionType => 3,
            DeleteMarkerReplicationStatus => 2,
            EncodingType => 1,
            Event => 17,
            ExistingObjectReplicationStatus => 2,
            ExpirationStatus => 2,
            ExpressionType => 1,
            FileHeaderInfo => 3,
            FilterRuleName => 2,
            IntelligentTieringAccessTier => 2,
            IntelligentTieringStatus => 2,
            InventoryFormat => 3,
            InventoryFrequency => 2,
            InventoryIncludedObjectVersions => 2,
            InventoryOptionalField => 11,
            JSONType => 2,
            MFADelete => 2,
            MFADeleteStatus => 2,
            MetadataDirective => 2,
            MetricsStatus => 2,
            ObjectCannedACL => 7,
            ObjectLockEnabled => 1,
            ObjectLockLegalHoldStatus => 2,
            ObjectLockMode => 2,
            ObjectLockRetentionMode => 2,
            ObjectOwnership => 2,
            ObjectStorageClass => 8,
            ObjectVersionStorageClass => 1,
            OwnerOverride => 1,
            Payer => 2,
            Permission => 5,
            Protocol => 2,
            QuoteFields => 2,
            ReplicaModificationsStatus => 2,
            ReplicationRuleStatus => 2,
            ReplicationStatus => 4,
            ReplicationTimeStatus => 2,
            RequestCharged => 1,
            RequestPayer => 1,
            RestoreRequestType => 1,
            ServerSideEncryption => 2,
            SseKmsEncryptedObjectsStatus => 2,
            StorageClass => 8,
            StorageClassAnalysisSchemaVersion => 1,
            TaggingDirective => 2,
            Tier => 3,
            TransitionStorageClass => 5,
            Type => 3,
        };
        assert_eq!(checked, 55);
    }
}
