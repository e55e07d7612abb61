//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::enums::{
    AnalyticsS3ExportFileFormat, BucketAccelerateStatus, BucketLocationConstraint,
    BucketLogsPermission, BucketVersioningStatus, CompressionType, DeleteMarkerReplicationStatus,
    Event, ExistingObjectReplicationStatus, ExpirationStatus, ExpressionType, FileHeaderInfo,
    FilterRuleName, IntelligentTieringAccessTier, IntelligentTieringStatus, InventoryFormat,
    InventoryFrequency, InventoryIncludedObjectVersions, InventoryOptionalField, JSONType,
    MFADelete, MetricsStatus, ObjectCannedACL, ObjectLockEnabled, ObjectLockLegalHoldStatus,
    ObjectLockRetentionMode, ObjectOwnership, ObjectStorageClass, ObjectVersionStorageClass,
    OwnerOverride, Payer, Permission, Protocol, QuoteFields, ReplicaModificationsStatus,
    ReplicationRuleStatus, ReplicationTimeStatus, RestoreRequestType, ServerSideEncryption,
    SseKmsEncryptedObjectsStatus, StorageClass, StorageClassAnalysisSchemaVersion, Tier,
    TransitionStorageClass, Type,
};
use crate::s3_structure;

s3_structure! {
    /// S3 AbortIncompleteMultipartUpload.
    pub struct AbortIncompleteMultipartUpload {
        days_after_initiation: i32,
    }
}

s3_structure! {
    /// S3 AccelerateConfiguration.
    pub struct AccelerateConfiguration {
        status: BucketAccelerateStatus,
    }
}

s3_structure! {
    /// S3 AccessControlPolicy.
    pub struct AccessControlPolicy {
        grants: Vec<Grant>,
        owner: Owner,
    }
}

s3_structure! {
    /// S3 AccessControlTranslation.
    pub struct AccessControlTranslation {
        owner: OwnerOverride,
    }
}

s3_structure! {
    /// S3 AnalyticsAndOperator.
    pub struct AnalyticsAndOperator {
        prefix: String,
        tags: Vec<Tag>,
    }
}

s3_structure! {
    /// S3 AnalyticsConfiguration.
    pub struct AnalyticsConfiguration {
        /// The filter used to describe a set of objects for analyses.
        filter: AnalyticsFilter,
        /// The ID that identifies the analytics configuration.
        id: String,
        storage_class_analysis: StorageClassAnalysis,
    }
}

s3_structure! {
    /// S3 AnalyticsExportDestination.
    pub struct AnalyticsExportDestination {
        s3_bucket_destination: AnalyticsS3BucketDestination,
    }
}

s3_structure! {
    /// S3 AnalyticsFilter.
    pub struct AnalyticsFilter {
        and: AnalyticsAndOperator,
        prefix: String,
        tag: Tag,
    }
}

s3_structure! {
    /// S3 AnalyticsS3BucketDestination.
    pub struct AnalyticsS3BucketDestination {
        bucket: String,
        bucket_account_id: String,
        format: AnalyticsS3ExportFileFormat,
        prefix: String,
    }
}

s3_structure! {
    /// S3 Bucket.
    pub struct Bucket {
        creation_date: chrono::DateTime<chrono::Utc>,
        name: String,
    }
}

s3_structure! {
    /// S3 BucketLifecycleConfiguration.
    pub struct BucketLifecycleConfiguration {
        rules: Vec<LifecycleRule>,
    }
}

s3_structure! {
    /// S3 BucketLoggingStatus.
    pub struct BucketLoggingStatus {
        logging_enabled: LoggingEnabled,
    }
}

s3_structure! {
    /// S3 CORSConfiguration.
    pub struct CORSConfiguration {
        cors_rules: Vec<CORSRule>,
    }
}

s3_structure! {
    /// S3 CORSRule.
    pub struct CORSRule {
        /// Headers that are specified in the Access-Control-Request-Headers header.
        allowed_headers: Vec<String>,
        /// An HTTP method that you allow the origin to execute.
        allowed_methods: Vec<String>,
        /// One or more origins you want customers to be able to access the bucket from.
        allowed_origins: Vec<String>,
        expose_headers: Vec<String>,
        /// The time in seconds that your browser is to cache the preflight response for the specified resource.
        max_age_seconds: i32,
    }
}

s3_structure! {
    /// S3 CSVInput.
    pub struct CSVInput {
        /// Specifies that CSV field values may contain quoted record delimiters and such records should be allowed.
        allow_quoted_record_delimiter: bool,
        comments: String,
        /// A single character used to separate individual fields in a record.
        field_delimiter: String,
        /// Describes the first line of input.
        file_header_info: FileHeaderInfo,
        /// A single character used for escaping when the field delimiter is part of the value.
        quote_character: String,
        /// A single character used for escaping the quotation mark character inside an already escaped value.
        quote_escape_character: String,
        /// A single character used to separate individual records in the input.
        record_delimiter: String,
    }
}

s3_structure! {
    /// S3 CSVOutput.
    pub struct CSVOutput {
        /// The value used to separate individual fields in a record.
        field_delimiter: String,
        /// A single character used for escaping when the field delimiter is part of the value.
        quote_character: String,
        /// The single character used for escaping the quote character inside an already escaped value.
        quote_escape_character: String,
        /// Indicates whether to use quotation marks around output fields.
        quote_fields: QuoteFields,
        /// A single character used to separate individual records in the output.
        record_delimiter: String,
    }
}

s3_structure! {
    /// S3 CommonPrefix.
    pub struct CommonPrefix {
        prefix: String,
    }
}

s3_structure! {
    /// S3 CompletedMultipartUpload.
    pub struct CompletedMultipartUpload {
        parts: Vec<CompletedPart>,
    }
}

s3_structure! {
    /// S3 CompletedPart.
    pub struct CompletedPart {
        e_tag: String,
        part_number: i32,
    }
}

s3_structure! {
    /// S3 Condition.
    pub struct Condition {
        /// The HTTP error code when the redirect is applied.
        http_error_code_returned_equals: String,
        /// The object key name prefix when the redirect is applied.
        key_prefix_equals: String,
    }
}

s3_structure! {
    /// S3 CopyObjectResult.
    pub struct CopyObjectResult {
        /// Returns the ETag of the new object.
        e_tag: String,
        /// Returns the date that the object was last modified.
        last_modified: chrono::DateTime<chrono::Utc>,
    }
}

s3_structure! {
    /// S3 CopyPartResult.
    pub struct CopyPartResult {
        e_tag: String,
        last_modified: chrono::DateTime<chrono::Utc>,
    }
}

s3_structure! {
    /// S3 CreateBucketConfiguration.
    pub struct CreateBucketConfiguration {
        location_constraint: BucketLocationConstraint,
    }
}

s3_structure! {
    /// S3 DefaultRetention.
    pub struct DefaultRetention {
        /// The number of days that you want to specify for the default retention period.
        days: i32,
        /// The default Object Lock retention mode you want to apply to new objects placed in the specified bucket.
        mode: ObjectLockRetentionMode,
        /// The number of years that you want to specify for the default retention period.
        years: i32,
    }
}

s3_structure! {
    /// S3 Delete.
    pub struct Delete {
        objects: Vec<ObjectIdentifier>,
        quiet: bool,
    }
}

s3_structure! {
    /// S3 DeleteMarkerEntry.
    pub struct DeleteMarkerEntry {
        /// Specifies whether the object is (true) or is not (false) the latest version of an object.
        is_latest: bool,
        /// The object key.
        key: String,
        /// Date and time the object was last modified.
        last_modified: chrono::DateTime<chrono::Utc>,
        /// The account that created the delete marker.>
        owner: Owner,
        /// Version ID of an object.
        version_id: String,
    }
}

s3_structure! {
    /// S3 DeleteMarkerReplication.
    pub struct DeleteMarkerReplication {
        status: DeleteMarkerReplicationStatus,
    }
}

s3_structure! {
    /// S3 DeletedObject.
    pub struct DeletedObject {
        delete_marker: bool,
        /// The version ID of the delete marker created as a result of the DELETE operation.
        delete_marker_version_id: String,
        /// The name of the deleted object.
        key: String,
        /// The version ID of the deleted object.
        version_id: String,
    }
}

s3_structure! {
    /// S3 Destination.
    pub struct Destination {
        access_control_translation: AccessControlTranslation,
        /// Destination bucket owner account ID.
        account: String,
        /// The Amazon Resource Name (ARN) of the bucket where you want Amazon S3 to store the results.
        bucket: String,
        /// A container that provides information about encryption.
        encryption_configuration: EncryptionConfiguration,
        /// A container specifying replication metrics-related settings enabling replication metrics and events.
        metrics: Metrics,
        replication_time: ReplicationTime,
        /// The storage class to use when replicating objects, such as S3 Standard or reduced redundancy.
        storage_class: StorageClass,
    }
}

s3_structure! {
    /// S3 Encryption.
    pub struct Encryption {
        encryption_type: ServerSideEncryption,
        kms_context: String,
        kms_key_id: String,
    }
}

s3_structure! {
    /// S3 EncryptionConfiguration.
    pub struct EncryptionConfiguration {
        replica_kms_key_id: String,
    }
}

s3_structure! {
    /// S3 Error.
    pub struct Error {
        code: String,
        key: String,
        message: String,
        version_id: String,
    }
}

s3_structure! {
    /// S3 ErrorDocument.
    pub struct ErrorDocument {
        key: String,
    }
}

s3_structure! {
    /// S3 ExistingObjectReplication.
    pub struct ExistingObjectReplication {
        status: ExistingObjectReplicationStatus,
    }
}

s3_structure! {
    /// S3 FilterRule.
    pub struct FilterRule {
        name: FilterRuleName,
        value: String,
    }
}

s3_structure! {
    /// S3 GlacierJobParameters.
    pub struct GlacierJobParameters {
        tier: Tier,
    }
}

s3_structure! {
    /// S3 Grant.
    pub struct Grant {
        grantee: Grantee,
        permission: Permission,
    }
}

s3_structure! {
    /// S3 Grantee.
    pub struct Grantee {
        /// Screen name of the grantee.
        display_name: String,
        /// Email address of the grantee.
        email_address: String,
        /// The canonical user ID of the grantee.
        id: String,
        /// Type of grantee
        type_: Type,
        /// URI of the grantee group.
        uri: String,
    }
}

s3_structure! {
    /// S3 HttpHeader.
    pub struct HttpHeader {
        name: String,
        value: String,
    }
}

s3_structure! {
    /// S3 IndexDocument.
    pub struct IndexDocument {
        suffix: String,
    }
}

s3_structure! {
    /// S3 Initiator.
    pub struct Initiator {
        display_name: String,
        id: String,
    }
}

s3_structure! {
    /// S3 InputSerialization.
    pub struct InputSerialization {
        /// Describes the serialization of a CSV-encoded object.
        csv: CSVInput,
        /// Specifies object's compression format.
        compression_type: CompressionType,
        /// Specifies JSON as object's input serialization format.
        json: JSONInput,
        /// Specifies Parquet as object's input serialization format.
        parquet: ParquetInput,
    }
}

s3_structure! {
    /// S3 IntelligentTieringAndOperator.
    pub struct IntelligentTieringAndOperator {
        prefix: String,
        tags: Vec<Tag>,
    }
}

s3_structure! {
    /// S3 IntelligentTieringConfiguration.
    pub struct IntelligentTieringConfiguration {
        /// Specifies a bucket filter.
        filter: IntelligentTieringFilter,
        /// The ID used to identify the S3 Intelligent-Tiering configuration.
        id: String,
        /// Specifies the status of the configuration.
        status: IntelligentTieringStatus,
        /// Specifies the S3 Intelligent-Tiering storage class tier of the configuration.
        tierings: Vec<Tiering>,
    }
}

s3_structure! {
    /// S3 IntelligentTieringFilter.
    pub struct IntelligentTieringFilter {
        /// A conjunction (logical AND) of predicates, which is used in evaluating a metrics filter.
        and: IntelligentTieringAndOperator,
        /// An object key name prefix that identifies the subset of objects to which the rule applies.
        prefix: String,
        tag: Tag,
    }
}

s3_structure! {
    /// S3 InventoryConfiguration.
    pub struct InventoryConfiguration {
        /// Contains information about where to publish the inventory results.
        destination: InventoryDestination,
        /// Specifies an inventory filter.
        filter: InventoryFilter,
        /// The ID used to identify the inventory configuration.
        id: String,
        /// Object versions to include in the inventory list.
        included_object_versions: InventoryIncludedObjectVersions,
        /// Specifies whether the inventory is enabled or disabled.
        is_enabled: bool,
        /// Contains the optional fields that are included in the inventory results.
        optional_fields: Vec<InventoryOptionalField>,
        /// Specifies the schedule for generating inventory results.
        schedule: InventorySchedule,
    }
}

s3_structure! {
    /// S3 InventoryDestination.
    pub struct InventoryDestination {
        s3_bucket_destination: InventoryS3BucketDestination,
    }
}

s3_structure! {
    /// S3 InventoryEncryption.
    pub struct InventoryEncryption {
        ssekms: SSEKMS,
        sses3: SSES3,
    }
}

s3_structure! {
    /// S3 InventoryFilter.
    pub struct InventoryFilter {
        prefix: String,
    }
}

s3_structure! {
    /// S3 InventoryS3BucketDestination.
    pub struct InventoryS3BucketDestination {
        /// The account ID that owns the destination S3 bucket.
        account_id: String,
        /// The Amazon Resource Name (ARN) of the bucket where inventory results will be published.
        bucket: String,
        /// Contains the type of server-side encryption used to encrypt the inventory results.
        encryption: InventoryEncryption,
        /// Specifies the output format of the inventory results.
        format: InventoryFormat,
        /// The prefix that is prepended to all inventory results.
        prefix: String,
    }
}

s3_structure! {
    /// S3 InventorySchedule.
    pub struct InventorySchedule {
        frequency: InventoryFrequency,
    }
}

s3_structure! {
    /// S3 JSONInput.
    pub struct JSONInput {
        type_: JSONType,
    }
}

s3_structure! {
    /// S3 JSONOutput.
    pub struct JSONOutput {
        record_delimiter: String,
    }
}

s3_structure! {
    /// S3 LambdaFunctionConfiguration.
    pub struct LambdaFunctionConfiguration {
        /// The Amazon S3 bucket event for which to invoke the AWS Lambda function.
        events: Vec<Event>,
        filter: NotificationConfigurationFilter,
        id: String,
        lambda_function_arn: String,
    }
}

s3_structure! {
    /// S3 LifecycleExpiration.
    pub struct LifecycleExpiration {
        /// Indicates at what date the object is to be moved or deleted.
        date: chrono::DateTime<chrono::Utc>,
        /// Indicates the lifetime, in days, of the objects that are subject to the rule.
        days: i32,
        /// Indicates whether Amazon S3 will remove a delete marker with no noncurrent versions.
        expired_object_delete_marker: bool,
    }
}

s3_structure! {
    /// S3 LifecycleRule.
    pub struct LifecycleRule {
        abort_incomplete_multipart_upload: AbortIncompleteMultipartUpload,
        expiration: LifecycleExpiration,
        filter: LifecycleRuleFilter,
        /// Unique identifier for the rule.
        id: String,
        noncurrent_version_expiration: NoncurrentVersionExpiration,
        noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
        /// Prefix identifying one or more objects to which the rule applies.
        prefix: String,
        /// If 'Enabled', the rule is currently being applied.
        status: ExpirationStatus,
        /// Specifies when an Amazon S3 object transitions to a specified storage class.
        transitions: Vec<Transition>,
    }
}

s3_structure! {
    /// S3 LifecycleRuleAndOperator.
    pub struct LifecycleRuleAndOperator {
        prefix: String,
        tags: Vec<Tag>,
    }
}

s3_structure! {
    /// S3 LifecycleRuleFilter.
    pub struct LifecycleRuleFilter {
        and: LifecycleRuleAndOperator,
        prefix: String,
        tag: Tag,
    }
}

s3_structure! {
    /// S3 LoggingEnabled.
    pub struct LoggingEnabled {
        /// Specifies the bucket where you want Amazon S3 to store server access logs.
        target_bucket: String,
        /// Container for granting information.
        target_grants: Vec<TargetGrant>,
        /// A prefix for all log object keys.
        target_prefix: String,
    }
}

s3_structure! {
    /// S3 MetadataEntry.
    pub struct MetadataEntry {
        name: String,
        value: String,
    }
}

s3_structure! {
    /// S3 Metrics.
    pub struct Metrics {
        event_threshold: ReplicationTimeValue,
        status: MetricsStatus,
    }
}

s3_structure! {
    /// S3 MetricsAndOperator.
    pub struct MetricsAndOperator {
        prefix: String,
        tags: Vec<Tag>,
    }
}

s3_structure! {
    /// S3 MetricsConfiguration.
    pub struct MetricsConfiguration {
        filter: MetricsFilter,
        id: String,
    }
}

s3_structure! {
    /// S3 MetricsFilter.
    pub struct MetricsFilter {
        and: MetricsAndOperator,
        prefix: String,
        tag: Tag,
    }
}

s3_structure! {
    /// S3 MultipartUpload.
    pub struct MultipartUpload {
        /// Date and time at which the multipart upload was initiated.
        initiated: chrono::DateTime<chrono::Utc>,
        /// Identifies who initiated the multipart upload.
        initiator: Initiator,
        /// Key of the object for which the multipart upload was initiated.
        key: String,
        /// Specifies the owner of the object that is part of the multipart upload.
        owner: Owner,
        /// The class of storage used to store the object.
        storage_class: StorageClass,
        /// Upload ID that identifies the multipart upload.
        upload_id: String,
    }
}

s3_structure! {
    /// S3 NoncurrentVersionExpiration.
    pub struct NoncurrentVersionExpiration {
        noncurrent_days: i32,
    }
}

s3_structure! {
    /// S3 NoncurrentVersionTransition.
    pub struct NoncurrentVersionTransition {
        /// Specifies the number of days an object is noncurrent before Amazon S3 can perform the associated action.
        noncurrent_days: i32,
        /// The class of storage used to store the object.
        storage_class: TransitionStorageClass,
    }
}

s3_structure! {
    /// S3 NotificationConfiguration.
    pub struct NotificationConfiguration {
        /// Describes the AWS Lambda functions to invoke and the events for which to invoke them.
        lambda_function_configurations: Vec<LambdaFunctionConfiguration>,
        /// The Amazon Simple Queue Service queues to publish messages to and the events for which to publish messages.
        queue_configurations: Vec<QueueConfiguration>,
        /// The topic to which notifications are sent and the events for which notifications are generated.
        topic_configurations: Vec<TopicConfiguration>,
    }
}

s3_structure! {
    /// S3 NotificationConfigurationFilter.
    pub struct NotificationConfigurationFilter {
        key: S3KeyFilter,
    }
}

s3_structure! {
    /// S3 Object.
    pub struct Object {
        /// The entity tag is a hash of the object.
        e_tag: String,
        /// The name that you assign to an object.
        key: String,
        /// The date the Object was Last Modified
        last_modified: chrono::DateTime<chrono::Utc>,
        /// The owner of the object
        owner: Owner,
        /// Size in bytes of the object
        size: i32,
        /// The class of storage used to store the object.
        storage_class: ObjectStorageClass,
    }
}

s3_structure! {
    /// S3 ObjectIdentifier.
    pub struct ObjectIdentifier {
        key: String,
        version_id: String,
    }
}

s3_structure! {
    /// S3 ObjectLockConfiguration.
    pub struct ObjectLockConfiguration {
        object_lock_enabled: ObjectLockEnabled,
        rule: ObjectLockRule,
    }
}

s3_structure! {
    /// S3 ObjectLockLegalHold.
    pub struct ObjectLockLegalHold {
        status: ObjectLockLegalHoldStatus,
    }
}

s3_structure! {
    /// S3 ObjectLockRetention.
    pub struct ObjectLockRetention {
        mode: ObjectLockRetentionMode,
        retain_until_date: chrono::DateTime<chrono::Utc>,
    }
}

s3_structure! {
    /// S3 ObjectLockRule.
    pub struct ObjectLockRule {
        default_retention: DefaultRetention,
    }
}

s3_structure! {
    /// S3 ObjectVersion.
    pub struct ObjectVersion {
        /// The entity tag is an MD5 hash of that version of the object.
        e_tag: String,
        /// Specifies whether the object is (true) or is not (false) the latest version of an object.
        is_latest: bool,
        /// The object key.
        key: String,
        /// Date and time the object was last modified.
        last_modified: chrono::DateTime<chrono::Utc>,
        /// Specifies the owner of the object.
        owner: Owner,
        /// Size in bytes of the object.
        size: i32,
        /// The class of storage used to store the object.
        storage_class: ObjectVersionStorageClass,
        /// Version ID of an object.
        version_id: String,
    }
}

s3_structure! {
    /// S3 OutputLocation.
    pub struct OutputLocation {
        s3: S3Location,
    }
}

s3_structure! {
    /// S3 OutputSerialization.
    pub struct OutputSerialization {
        csv: CSVOutput,
        json: JSONOutput,
    }
}

s3_structure! {
    /// S3 Owner.
    pub struct Owner {
        display_name: String,
        id: String,
    }
}

s3_structure! {
    /// S3 OwnershipControls.
    pub struct OwnershipControls {
        rules: Vec<OwnershipControlsRule>,
    }
}

s3_structure! {
    /// S3 OwnershipControlsRule.
    pub struct OwnershipControlsRule {
        object_ownership: ObjectOwnership,
    }
}

s3_structure! {
    /// S3 ParquetInput.
    pub struct ParquetInput {
    }
}

s3_structure! {
    /// S3 Part.
    pub struct Part {
        /// Entity tag returned when the part was uploaded.
        e_tag: String,
        /// Date and time at which the part was uploaded.
        last_modified: chrono::DateTime<chrono::Utc>,
        /// Part number identifying the part.
        part_number: i32,
        /// Size in bytes of the uploaded part data.
        size: i32,
    }
}

s3_structure! {
    /// S3 Progress.
    pub struct Progress {
        /// The current number of uncompressed object bytes processed.
        bytes_processed: i64,
        /// The current number of bytes of records payload data returned.
        bytes_returned: i64,
        /// The current number of object bytes scanned.
        bytes_scanned: i64,
    }
}

s3_structure! {
    /// S3 PublicAccessBlockConfiguration.
    pub struct PublicAccessBlockConfiguration {
        block_public_acls: bool,
        /// Specifies whether Amazon S3 should block public bucket policies for this bucket.
        block_public_policy: bool,
        /// Specifies whether Amazon S3 should ignore public ACLs for this bucket and objects in this bucket.
        ignore_public_acls: bool,
        /// Specifies whether Amazon S3 should restrict public bucket policies for this bucket.
        restrict_public_buckets: bool,
    }
}

s3_structure! {
    /// S3 QueueConfiguration.
    pub struct QueueConfiguration {
        /// A collection of bucket events for which to send notifications
        events: Vec<Event>,
        filter: NotificationConfigurationFilter,
        id: String,
        queue_arn: String,
    }
}

s3_structure! {
    /// S3 Redirect.
    pub struct Redirect {
        /// The host name to use in the redirect request.
        host_name: String,
        /// The HTTP redirect code to use on the response.
        http_redirect_code: String,
        /// Protocol to use when redirecting requests.
        protocol: Protocol,
        /// The object key prefix to use in the redirect request.
        replace_key_prefix_with: String,
        /// The specific object key to use in the redirect request.
        replace_key_with: String,
    }
}

s3_structure! {
    /// S3 RedirectAllRequestsTo.
    pub struct RedirectAllRequestsTo {
        host_name: String,
        protocol: Protocol,
    }
}

s3_structure! {
    /// S3 ReplicaModifications.
    pub struct ReplicaModifications {
        status: ReplicaModificationsStatus,
    }
}

s3_structure! {
    /// S3 ReplicationConfiguration.
    pub struct ReplicationConfiguration {
        role: String,
        /// A container for one or more replication rules.
        rules: Vec<ReplicationRule>,
    }
}

s3_structure! {
    /// S3 ReplicationRule.
    pub struct ReplicationRule {
        delete_marker_replication: DeleteMarkerReplication,
        destination: Destination,
        existing_object_replication: ExistingObjectReplication,
        filter: ReplicationRuleFilter,
        /// A unique identifier for the rule.
        id: String,
        /// An object key name prefix that identifies the object or objects to which the rule applies.
        prefix: String,
        /// The priority indicates which rule has precedence whenever two or more replication rules conflict.
        priority: i32,
        /// A container that describes additional filters for identifying the source objects that you want to replicate.
        source_selection_criteria: SourceSelectionCriteria,
        /// Specifies whether the rule is enabled.
        status: ReplicationRuleStatus,
    }
}

s3_structure! {
    /// S3 ReplicationRuleAndOperator.
    pub struct ReplicationRuleAndOperator {
        prefix: String,
        tags: Vec<Tag>,
    }
}

s3_structure! {
    /// S3 ReplicationRuleFilter.
    pub struct ReplicationRuleFilter {
        and: ReplicationRuleAndOperator,
        prefix: String,
        tag: Tag,
    }
}

s3_structure! {
    /// S3 ReplicationTime.
    pub struct ReplicationTime {
        status: ReplicationTimeStatus,
        time: ReplicationTimeValue,
    }
}

s3_structure! {
    /// S3 ReplicationTimeValue.
    pub struct ReplicationTimeValue {
        minutes: i32,
    }
}

s3_structure! {
    /// S3 RequestPaymentConfiguration.
    pub struct RequestPaymentConfiguration {
        payer: Payer,
    }
}

s3_structure! {
    /// S3 RequestProgress.
    pub struct RequestProgress {
        enabled: bool,
    }
}

s3_structure! {
    /// S3 RestoreRequest.
    pub struct RestoreRequest {
        /// Lifetime of the active copy in days.
        days: i32,
        /// The optional description for the job.
        description: String,
        /// S3 Glacier related parameters pertaining to this job.
        glacier_job_parameters: GlacierJobParameters,
        /// Describes the location where the restore job's output is stored.
        output_location: OutputLocation,
        /// Describes the parameters for Select job types.
        select_parameters: SelectParameters,
        /// Retrieval tier at which the restore will be processed.
        tier: Tier,
        /// Type of restore request.
        type_: RestoreRequestType,
    }
}

s3_structure! {
    /// S3 RoutingRule.
    pub struct RoutingRule {
        /// A container for describing a condition that must be met for the specified redirect to apply.
        condition: Condition,
        /// Container for redirect information.
        redirect: Redirect,
    }
}

s3_structure! {
    /// S3 S3KeyFilter.
    pub struct S3KeyFilter {
        filter_rules: Vec<FilterRule>,
    }
}

s3_structure! {
    /// S3 S3Location.
    pub struct S3Location {
        /// A list of grants that control access to the staged results.
        access_control_list: Vec<Grant>,
        /// The name of the bucket where the restore results will be placed.
        bucket_name: String,
        /// The canned ACL to apply to the restore results.
        canned_acl: ObjectCannedACL,
        encryption: Encryption,
        /// The prefix that is prepended to the restore results for this request.
        prefix: String,
        /// The class of storage used to store the restore results.
        storage_class: StorageClass,
        /// The tag-set that is applied to the restore results.
        tagging: Tagging,
        /// A list of metadata to store with the restore results in S3.
        user_metadata: Vec<MetadataEntry>,
    }
}

s3_structure! {
    /// S3 SSEKMS.
    pub struct SSEKMS {
        key_id: String,
    }
}

s3_structure! {
    /// S3 SSES3.
    pub struct SSES3 {
    }
}

s3_structure! {
    /// S3 ScanRange.
    pub struct ScanRange {
        /// Specifies the end of the byte range.
        end: i64,
        /// Specifies the start of the byte range.
        start: i64,
    }
}

s3_structure! {
    /// S3 SelectParameters.
    pub struct SelectParameters {
        /// The expression that is used to query the object.
        expression: String,
        /// The type of the provided expression (for example, SQL).
        expression_type: ExpressionType,
        /// Describes the serialization format of the object.
        input_serialization: InputSerialization,
        /// Describes how the results of the Select job are serialized.
        output_serialization: OutputSerialization,
    }
}

s3_structure! {
    /// S3 ServerSideEncryptionByDefault.
    pub struct ServerSideEncryptionByDefault {
        /// AWS Key Management Service (KMS) customer master key ID to use for the default encryption.
        kms_master_key_id: String,
        /// Server-side encryption algorithm to use for the default encryption.
        sse_algorithm: ServerSideEncryption,
    }
}

s3_structure! {
    /// S3 ServerSideEncryptionConfiguration.
    pub struct ServerSideEncryptionConfiguration {
        rules: Vec<ServerSideEncryptionRule>,
    }
}

s3_structure! {
    /// S3 ServerSideEncryptionRule.
    pub struct ServerSideEncryptionRule {
        /// Specifies the default server-side encryption to apply to new objects in the bucket.
        apply_server_side_encryption_by_default: ServerSideEncryptionByDefault,
        bucket_key_enabled: bool,
    }
}

s3_structure! {
    /// S3 SourceSelectionCriteria.
    pub struct SourceSelectionCriteria {
        /// A filter that you can specify for selections for modifications on replicas.
        replica_modifications: ReplicaModifications,
        /// A container for filter information for the selection of Amazon S3 objects encrypted with AWS KMS.
        sse_kms_encrypted_objects: SseKmsEncryptedObjects,
    }
}

s3_structure! {
    /// S3 SseKmsEncryptedObjects.
    pub struct SseKmsEncryptedObjects {
        status: SseKmsEncryptedObjectsStatus,
    }
}

s3_structure! {
    /// S3 Stats.
    pub struct Stats {
        /// The total number of uncompressed object bytes processed.
        bytes_processed: i64,
        /// The total number of bytes of records payload data returned.
        bytes_returned: i64,
        /// The total number of object bytes scanned.
        bytes_scanned: i64,
    }
}

s3_structure! {
    /// S3 StorageClassAnalysis.
    pub struct StorageClassAnalysis {
        data_export: StorageClassAnalysisDataExport,
    }
}

s3_structure! {
    /// S3 StorageClassAnalysisDataExport.
    pub struct StorageClassAnalysisDataExport {
        destination: AnalyticsExportDestination,
        output_schema_version: StorageClassAnalysisSchemaVersion,
    }
}

s3_structure! {
    /// S3 Tag.
    pub struct Tag {
        key: String,
        value: String,
    }
}

s3_structure! {
    /// S3 Tagging.
    pub struct Tagging {
        tag_set: Vec<Tag>,
    }
}

s3_structure! {
    /// S3 TargetGrant.
    pub struct TargetGrant {
        grantee: Grantee,
        permission: BucketLogsPermission,
    }
}

s3_structure! {
    /// S3 Tiering.
    pub struct Tiering {
        /// S3 Intelligent-Tiering access tier.
        access_tier: IntelligentTieringAccessTier,
        days: i32,
    }
}

s3_structure! {
    /// S3 TopicConfiguration.
    pub struct TopicConfiguration {
        /// The Amazon S3 bucket event about which to send notifications.
        events: Vec<Event>,
        filter: NotificationConfigurationFilter,
        id: String,
        topic_arn: String,
    }
}

s3_structure! {
    /// S3 Transition.
    pub struct Transition {
        /// Indicates when objects are transitioned to the specified storage class.
        date: chrono::DateTime<chrono::Utc>,
        /// Indicates the number of days after creation when objects are transitioned to the specified storage class.
        days: i32,
        /// The storage class to which you want the object to transition.
        storage_class: TransitionStorageClass,
    }
}

s3_structure! {
    /// S3 VersioningConfiguration.
    pub struct VersioningConfiguration {
        mfa_delete: MFADelete,
        status: BucketVersioningStatus,
    }
}

s3_structure! {
    /// S3 WebsiteConfiguration.
    pub struct WebsiteConfiguration {
        /// The name of the error document for the website.
        error_document: ErrorDocument,
        /// The name of the index document for the website.
        index_document: IndexDocument,
        /// The redirect behavior for every request to this bucket's website endpoint.
        redirect_all_requests_to: RedirectAllRequestsTo,
        /// Rules that define when a redirect is applied and the redirect behavior.
        routing_rules: Vec<RoutingRule>,
    }
}
