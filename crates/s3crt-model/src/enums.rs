//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::open_enum;

open_enum! {
    /// S3 AnalyticsS3ExportFileFormat enum.
    pub enum AnalyticsS3ExportFileFormat {
        Csv => "CSV",
    }
}

open_enum! {
    /// S3 ArchiveStatus enum.
    pub enum ArchiveStatus {
        ArchiveAccess => "ARCHIVE_ACCESS",
        DeepArchiveAccess => "DEEP_ARCHIVE_ACCESS",
    }
}

open_enum! {
    /// S3 BucketAccelerateStatus enum.
    pub enum BucketAccelerateStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}

open_enum! {
    /// S3 BucketCannedACL enum.
    pub enum BucketCannedACL {
        AuthenticatedRead => "authenticated-read",
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
    }
}

open_enum! {
    /// S3 BucketLocationConstraint enum.
    pub enum BucketLocationConstraint {
        AfSouth1 => "af-south-1",
        ApEast1 => "ap-east-1",
        ApNortheast1 => "ap-northeast-1",
        ApNortheast2 => "ap-northeast-2",
        ApNortheast3 => "ap-northeast-3",
        ApSouth1 => "ap-south-1",
        ApSoutheast1 => "ap-southeast-1",
        ApSoutheast2 => "ap-southeast-2",
        CaCentral1 => "ca-central-1",
        CnNorth1 => "cn-north-1",
        CnNorthwest1 => "cn-northwest-1",
        Eu => "EU",
        EuCentral1 => "eu-central-1",
        EuNorth1 => "eu-north-1",
        EuSouth1 => "eu-south-1",
        EuWest1 => "eu-west-1",
        EuWest2 => "eu-west-2",
        EuWest3 => "eu-west-3",
        MeSouth1 => "me-south-1",
        SaEast1 => "sa-east-1",
        UsEast2 => "us-east-2",
        UsGovEast1 => "us-gov-east-1",
        UsGovWest1 => "us-gov-west-1",
        UsWest1 => "us-west-1",
        UsWest2 => "us-west-2",
    }
}

open_enum! {
    /// S3 BucketLogsPermission enum.
    pub enum BucketLogsPermission {
        FullControl => "FULL_CONTROL",
        Read => "READ",
        Write => "WRITE",
    }
}

open_enum! {
    /// S3 BucketVersioningStatus enum.
    pub enum BucketVersioningStatus {
        Enabled => "Enabled",
        Suspended => "Suspended",
    }
}

open_enum! {
    /// S3 CompressionType enum.
    pub enum CompressionType {
        Bzip2 => "BZIP2",
        Gzip => "GZIP",
        None => "NONE",
    }
}

open_enum! {
    /// S3 DeleteMarkerReplicationStatus enum.
    pub enum DeleteMarkerReplicationStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 EncodingType enum.
    pub enum EncodingType {
        Url => "url",
    }
}

open_enum! {
    /// S3 Event enum.
    pub enum Event {
        S3ObjectCreated => "s3:ObjectCreated:*",
        S3ObjectCreatedCompleteMultipartUpload => "s3:ObjectCreated:CompleteMultipartUpload",
        S3ObjectCreatedCopy => "s3:ObjectCreated:Copy",
        S3ObjectCreatedPost => "s3:ObjectCreated:Post",
        S3ObjectCreatedPut => "s3:ObjectCreated:Put",
        S3ObjectRemoved => "s3:ObjectRemoved:*",
        S3ObjectRemovedDelete => "s3:ObjectRemoved:Delete",
        S3ObjectRemovedDeleteMarkerCreated => "s3:ObjectRemoved:DeleteMarkerCreated",
        S3ObjectRestore => "s3:ObjectRestore:*",
        S3ObjectRestoreCompleted => "s3:ObjectRestore:Completed",
        S3ObjectRestorePost => "s3:ObjectRestore:Post",
        S3ReducedRedundancyLostObject => "s3:ReducedRedundancyLostObject",
        S3Replication => "s3:Replication:*",
        S3ReplicationOperationFailedReplication => "s3:Replication:OperationFailedReplication",
        S3ReplicationOperationMissedThreshold => "s3:Replication:OperationMissedThreshold",
        S3ReplicationOperationNotTracked => "s3:Replication:OperationNotTracked",
        S3ReplicationOperationReplicatedAfterThreshold => "s3:Replication:OperationReplicatedAfterThreshold",
    }
}

open_enum! {
    /// S3 ExistingObjectReplicationStatus enum.
    pub enum ExistingObjectReplicationStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 ExpirationStatus enum.
    pub enum ExpirationStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 ExpressionType enum.
    pub enum ExpressionType {
        Sql => "SQL",
    }
}

open_enum! {
    /// S3 FileHeaderInfo enum.
    pub enum FileHeaderInfo {
        Ignore => "IGNORE",
        None => "NONE",
        Use => "USE",
    }
}

open_enum! {
    /// S3 FilterRuleName enum.
    pub enum FilterRuleName {
        Prefix => "prefix",
        Suffix => "suffix",
    }
}

open_enum! {
    /// S3 IntelligentTieringAccessTier enum.
    pub enum IntelligentTieringAccessTier {
        ArchiveAccess => "ARCHIVE_ACCESS",
        DeepArchiveAccess => "DEEP_ARCHIVE_ACCESS",
    }
}

open_enum! {
    /// S3 IntelligentTieringStatus enum.
    pub enum IntelligentTieringStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 InventoryFormat enum.
    pub enum InventoryFormat {
        Csv => "CSV",
        Orc => "ORC",
        Parquet => "Parquet",
    }
}

open_enum! {
    /// S3 InventoryFrequency enum.
    pub enum InventoryFrequency {
        Daily => "Daily",
        Weekly => "Weekly",
    }
}

open_enum! {
    /// S3 InventoryIncludedObjectVersions enum.
    pub enum InventoryIncludedObjectVersions {
        All => "All",
        Current => "Current",
    }
}

open_enum! {
    /// S3 InventoryOptionalField enum.
    pub enum InventoryOptionalField {
        ETag => "ETag",
        EncryptionStatus => "EncryptionStatus",
        IntelligentTieringAccessTier => "IntelligentTieringAccessTier",
        IsMultipartUploaded => "IsMultipartUploaded",
        LastModifiedDate => "LastModifiedDate",
        ObjectLockLegalHoldStatus => "ObjectLockLegalHoldStatus",
        ObjectLockMode => "ObjectLockMode",
        ObjectLockRetainUntilDate => "ObjectLockRetainUntilDate",
        ReplicationStatus => "ReplicationStatus",
        Size => "Size",
        StorageClass => "StorageClass",
    }
}

open_enum! {
    /// S3 JSONType enum.
    pub enum JSONType {
        Document => "DOCUMENT",
        Lines => "LINES",
    }
}

open_enum! {
    /// S3 MFADelete enum.
    pub enum MFADelete {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 MFADeleteStatus enum.
    pub enum MFADeleteStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 MetadataDirective enum.
    pub enum MetadataDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

open_enum! {
    /// S3 MetricsStatus enum.
    pub enum MetricsStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 ObjectCannedACL enum.
    pub enum ObjectCannedACL {
        AuthenticatedRead => "authenticated-read",
        AwsExecRead => "aws-exec-read",
        BucketOwnerFullControl => "bucket-owner-full-control",
        BucketOwnerRead => "bucket-owner-read",
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
    }
}

open_enum! {
    /// S3 ObjectLockEnabled enum.
    pub enum ObjectLockEnabled {
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 ObjectLockLegalHoldStatus enum.
    pub enum ObjectLockLegalHoldStatus {
        Off => "OFF",
        On => "ON",
    }
}

open_enum! {
    /// S3 ObjectLockMode enum.
    pub enum ObjectLockMode {
        Compliance => "COMPLIANCE",
        Governance => "GOVERNANCE",
    }
}

open_enum! {
    /// S3 ObjectLockRetentionMode enum.
    pub enum ObjectLockRetentionMode {
        Compliance => "COMPLIANCE",
        Governance => "GOVERNANCE",
    }
}

open_enum! {
    /// S3 ObjectOwnership enum.
    pub enum ObjectOwnership {
        BucketOwnerPreferred => "BucketOwnerPreferred",
        ObjectWriter => "ObjectWriter",
    }
}

open_enum! {
    /// S3 ObjectStorageClass enum.
    pub enum ObjectStorageClass {
        DeepArchive => "DEEP_ARCHIVE",
        Glacier => "GLACIER",
        IntelligentTiering => "INTELLIGENT_TIERING",
        OnezoneIa => "ONEZONE_IA",
        Outposts => "OUTPOSTS",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        Standard => "STANDARD",
        StandardIa => "STANDARD_IA",
    }
}

open_enum! {
    /// S3 ObjectVersionStorageClass enum.
    pub enum ObjectVersionStorageClass {
        Standard => "STANDARD",
    }
}

open_enum! {
    /// S3 OwnerOverride enum.
    pub enum OwnerOverride {
        Destination => "Destination",
    }
}

open_enum! {
    /// S3 Payer enum.
    pub enum Payer {
        BucketOwner => "BucketOwner",
        Requester => "Requester",
    }
}

open_enum! {
    /// S3 Permission enum.
    pub enum Permission {
        FullControl => "FULL_CONTROL",
        Read => "READ",
        ReadAcp => "READ_ACP",
        Write => "WRITE",
        WriteAcp => "WRITE_ACP",
    }
}

open_enum! {
    /// S3 Protocol enum.
    pub enum Protocol {
        Http => "http",
        Https => "https",
    }
}

open_enum! {
    /// S3 QuoteFields enum.
    pub enum QuoteFields {
        Always => "ALWAYS",
        Asneeded => "ASNEEDED",
    }
}

open_enum! {
    /// S3 ReplicaModificationsStatus enum.
    pub enum ReplicaModificationsStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 ReplicationRuleStatus enum.
    pub enum ReplicationRuleStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 ReplicationStatus enum.
    pub enum ReplicationStatus {
        Complete => "COMPLETE",
        Failed => "FAILED",
        Pending => "PENDING",
        Replica => "REPLICA",
    }
}

open_enum! {
    /// S3 ReplicationTimeStatus enum.
    pub enum ReplicationTimeStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 RequestCharged enum.
    pub enum RequestCharged {
        Requester => "requester",
    }
}

open_enum! {
    /// S3 RequestPayer enum.
    pub enum RequestPayer {
        Requester => "requester",
    }
}

open_enum! {
    /// S3 RestoreRequestType enum.
    pub enum RestoreRequestType {
        Select => "SELECT",
    }
}

open_enum! {
    /// S3 ServerSideEncryption enum.
    pub enum ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
    }
}

open_enum! {
    /// S3 SseKmsEncryptedObjectsStatus enum.
    pub enum SseKmsEncryptedObjectsStatus {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// S3 StorageClass enum.
    pub enum StorageClass {
        DeepArchive => "DEEP_ARCHIVE",
        Glacier => "GLACIER",
        IntelligentTiering => "INTELLIGENT_TIERING",
        OnezoneIa => "ONEZONE_IA",
        Outposts => "OUTPOSTS",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        Standard => "STANDARD",
        StandardIa => "STANDARD_IA",
    }
}

open_enum! {
    /// S3 StorageClassAnalysisSchemaVersion enum.
    pub enum StorageClassAnalysisSchemaVersion {
        V1 => "V_1",
    }
}

open_enum! {
    /// S3 TaggingDirective enum.
    pub enum TaggingDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

open_enum! {
    /// S3 Tier enum.
    pub enum Tier {
        Bulk => "Bulk",
        Expedited => "Expedited",
        Standard => "Standard",
    }
}

open_enum! {
    /// S3 TransitionStorageClass enum.
    pub enum TransitionStorageClass {
        DeepArchive => "DEEP_ARCHIVE",
        Glacier => "GLACIER",
        IntelligentTiering => "INTELLIGENT_TIERING",
        OnezoneIa => "ONEZONE_IA",
        StandardIa => "STANDARD_IA",
    }
}

open_enum! {
    /// S3 Type enum.
    pub enum Type {
        AmazonCustomerByEmail => "AmazonCustomerByEmail",
        CanonicalUser => "CanonicalUser",
        Group => "Group",
    }
}
