//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use std::collections::HashMap;

use crate::enums::{
    ArchiveStatus, ObjectLockLegalHoldStatus, ObjectLockMode, ReplicationStatus, RequestCharged,
    ServerSideEncryption, StorageClass,
};
use crate::s3_structure;
use crate::types::{CopyObjectResult, DeletedObject, Error};

s3_structure! {
    /// S3 CopyObjectOutput.
    pub struct CopyObjectOutput {
        /// Indicates whether the copied object uses an S3 Bucket Key for server-side encryption with AWS KMS (SSE-KMS).
        bucket_key_enabled: bool,
        /// Container for all response elements.
        copy_object_result: CopyObjectResult,
        /// Version of the copied object in the destination bucket.
        copy_source_version_id: String,
        /// If the object expiration is configured, the response includes this header.
        expiration: String,
        request_charged: RequestCharged,
        sse_customer_algorithm: String,
        sse_customer_key_md5: String,
        /// If present, specifies the AWS KMS Encryption Context to use for object encryption.
        ssekms_encryption_context: String,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
        /// Version ID of the newly created copy.
        version_id: String,
    }
}

s3_structure! {
    /// S3 DeleteObjectOutput.
    pub struct DeleteObjectOutput {
        delete_marker: bool,
        request_charged: RequestCharged,
        /// Returns the version ID of the delete marker created as a result of the DELETE operation.
        version_id: String,
    }
}

s3_structure! {
    /// S3 DeleteObjectsOutput.
    pub struct DeleteObjectsOutput {
        /// Container element for a successful delete.
        deleted: Vec<DeletedObject>,
        errors: Vec<Error>,
        request_charged: RequestCharged,
    }
}

s3_structure! {
    /// S3 GetObjectOutput.
    pub struct GetObjectOutput {
        /// Indicates that a range of bytes was specified.
        accept_ranges: String,
        /// Object data.
        body: Vec<u8>,
        /// Indicates whether the object uses an S3 Bucket Key for server-side encryption with AWS KMS (SSE-KMS).
        bucket_key_enabled: bool,
        /// Specifies caching behavior along the request/reply chain.
        cache_control: String,
        /// Specifies presentational information for the object.
        content_disposition: String,
        content_encoding: String,
        /// The language the content is in.
        content_language: String,
        /// Size of the body in bytes.
        content_length: i64,
        /// The portion of the object returned in the response.
        content_range: String,
        /// A standard MIME type describing the format of the object data.
        content_type: String,
        /// Specifies whether the object retrieved was (true) or was not (false) a Delete Marker.
        delete_marker: bool,
        /// An ETag is an opaque identifier assigned by a web server to a specific version of a resource found at a URL.
        e_tag: String,
        /// If the object expiration is configured (see PUT Bucket lifecycle), the response includes this header.
        expiration: String,
        /// The date and time at which the object is no longer cacheable.
        expires: chrono::DateTime<chrono::Utc>,
        /// Last modified date of the object
        last_modified: chrono::DateTime<chrono::Utc>,
        /// A map of metadata to store with the object in S3.
        metadata: HashMap<String, String>,
        /// This is set to the number of metadata entries not returned in x-amz-meta headers.
        missing_meta: i32,
        /// Indicates whether this object has an active legal hold.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus,
        /// The Object Lock mode currently in place for this object.
        object_lock_mode: ObjectLockMode,
        /// The date and time when this object's Object Lock will expire.
        object_lock_retain_until_date: chrono::DateTime<chrono::Utc>,
        /// The count of parts this object has.
        parts_count: i32,
        replication_status: ReplicationStatus,
        request_charged: RequestCharged,
        /// Provides information about object restoration operation and expiration time of the restored object copy.
        restore: String,
        sse_customer_algorithm: String,
        sse_customer_key_md5: String,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
        /// Provides storage class information of the object.
        storage_class: StorageClass,
        /// The number of tags, if any, on the object.
        tag_count: i32,
        /// Version of the object.
        version_id: String,
        website_redirect_location: String,
    }
}

s3_structure! {
    /// S3 GetObjectTorrentOutput.
    pub struct GetObjectTorrentOutput {
        body: Vec<u8>,
        request_charged: RequestCharged,
    }
}

s3_structure! {
    /// S3 HeadObjectOutput.
    pub struct HeadObjectOutput {
        /// Indicates that a range of bytes was specified.
        accept_ranges: String,
        /// The archive state of the head object.
        archive_status: ArchiveStatus,
        /// Indicates whether the object uses an S3 Bucket Key for server-side encryption with AWS KMS (SSE-KMS).
        bucket_key_enabled: bool,
        /// Specifies caching behavior along the request/reply chain.
        cache_control: String,
        /// Specifies presentational information for the object.
        content_disposition: String,
        content_encoding: String,
        /// The language the content is in.
        content_language: String,
        /// Size of the body in bytes.
        content_length: i64,
        /// A standard MIME type describing the format of the object data.
        content_type: String,
        /// Specifies whether the object retrieved was (true) or was not (false) a Delete Marker.
        delete_marker: bool,
        /// An ETag is an opaque identifier assigned by a web server to a specific version of a resource found at a URL.
        e_tag: String,
        /// If the object expiration is configured (see PUT Bucket lifecycle), the response includes this header.
        expiration: String,
        /// The date and time at which the object is no longer cacheable.
        expires: chrono::DateTime<chrono::Utc>,
        /// Last modified date of the object
        last_modified: chrono::DateTime<chrono::Utc>,
        /// A map of metadata to store with the object in S3.
        metadata: HashMap<String, String>,
        /// This is set to the number of metadata entries not returned in x-amz-meta headers.
        missing_meta: i32,
        /// Specifies whether a legal hold is in effect for this object.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus,
        /// The Object Lock mode, if any, that's in effect for this object.
        object_lock_mode: ObjectLockMode,
        /// The date and time when the Object Lock retention period expires.
        object_lock_retain_until_date: chrono::DateTime<chrono::Utc>,
        /// The count of parts this object has.
        parts_count: i32,
        replication_status: ReplicationStatus,
        request_charged: RequestCharged,
        restore: String,
        sse_customer_algorithm: String,
        sse_customer_key_md5: String,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
        /// Provides storage class information of the object.
        storage_class: StorageClass,
        /// Version of the object.
        version_id: String,
        website_redirect_location: String,
    }
}

s3_structure! {
    /// S3 PutObjectOutput.
    pub struct PutObjectOutput {
        /// Indicates whether the uploaded object uses an S3 Bucket Key for server-side encryption with AWS KMS (SSE-KMS).
        bucket_key_enabled: bool,
        /// Entity tag for the uploaded object.
        e_tag: String,
        expiration: String,
        request_charged: RequestCharged,
        sse_customer_algorithm: String,
        sse_customer_key_md5: String,
        /// If present, specifies the AWS KMS Encryption Context to use for object encryption.
        ssekms_encryption_context: String,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
        /// Version of the object.
        version_id: String,
    }
}

s3_structure! {
    /// S3 RestoreObjectOutput.
    pub struct RestoreObjectOutput {
        request_charged: RequestCharged,
        /// Indicates the path in the provided S3 output location where Select results will be restored to.
        restore_output_path: String,
    }
}
