//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use std::collections::HashMap;

use crate::enums::{
    ExpressionType, MetadataDirective, ObjectCannedACL, ObjectLockLegalHoldStatus, ObjectLockMode,
    RequestPayer, ServerSideEncryption, StorageClass, TaggingDirective,
};
use crate::s3_structure;
use crate::types::{
    Delete, HttpHeader, InputSerialization, OutputSerialization, RequestProgress, RestoreRequest,
    ScanRange,
};

s3_structure! {
    /// S3 CopyObjectRequest.
    pub struct CopyObjectRequest {
        /// The canned ACL to apply to the object.
        acl: ObjectCannedACL,
        /// The name of the destination bucket.
        bucket: String,
        bucket_key_enabled: bool,
        /// Specifies caching behavior along the request/reply chain.
        cache_control: String,
        /// Specifies presentational information for the object.
        content_disposition: String,
        content_encoding: String,
        /// The language the content is in.
        content_language: String,
        /// A standard MIME type describing the format of the object data.
        content_type: String,
        /// Specifies the source object for the copy operation.
        copy_source: String,
        /// Copies the object if its entity tag (ETag) matches the specified tag.
        copy_source_if_match: String,
        /// Copies the object if it has been modified since the specified time.
        copy_source_if_modified_since: chrono::DateTime<chrono::Utc>,
        /// Copies the object if its entity tag (ETag) is different than the specified ETag.
        copy_source_if_none_match: String,
        /// Copies the object if it hasn't been modified since the specified time.
        copy_source_if_unmodified_since: chrono::DateTime<chrono::Utc>,
        /// Specifies the algorithm to use when decrypting the source object (for example, AES256).
        copy_source_sse_customer_algorithm: String,
        /// Specifies the customer-provided encryption key for Amazon S3 to use to decrypt the source object.
        copy_source_sse_customer_key: String,
        /// Specifies the 128-bit MD5 digest of the encryption key according to RFC 1321.
        copy_source_sse_customer_key_md5: String,
        /// The account id of the expected destination bucket owner.
        expected_bucket_owner: String,
        /// The account id of the expected source bucket owner.
        expected_source_bucket_owner: String,
        /// The date and time at which the object is no longer cacheable.
        expires: chrono::DateTime<chrono::Utc>,
        /// Gives the grantee READ, READ_ACP, and WRITE_ACP permissions on the object.
        grant_full_control: String,
        /// Allows grantee to read the object data and its metadata.
        grant_read: String,
        /// Allows grantee to read the object ACL.
        grant_read_acp: String,
        /// Allows grantee to write the ACL for the applicable object.
        grant_write_acp: String,
        /// The key of the destination object.
        key: String,
        /// A map of metadata to store with the object in S3.
        metadata: HashMap<String, String>,
        metadata_directive: MetadataDirective,
        /// Specifies whether you want to apply a Legal Hold to the copied object.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus,
        /// The Object Lock mode that you want to apply to the copied object.
        object_lock_mode: ObjectLockMode,
        /// The date and time when you want the copied object's Object Lock to expire.
        object_lock_retain_until_date: chrono::DateTime<chrono::Utc>,
        request_payer: RequestPayer,
        /// Specifies the algorithm to use to when encrypting the object (for example, AES256).
        sse_customer_algorithm: String,
        /// Specifies the customer-provided encryption key for Amazon S3 to use in encrypting data.
        sse_customer_key: String,
        /// Specifies the 128-bit MD5 digest of the encryption key according to RFC 1321.
        sse_customer_key_md5: String,
        /// Specifies the AWS KMS Encryption Context to use for object encryption.
        ssekms_encryption_context: String,
        /// Specifies the AWS KMS key ID to use for object encryption.
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
        /// By default, Amazon S3 uses the STANDARD Storage Class to store newly created objects.
        storage_class: StorageClass,
        tagging: String,
        tagging_directive: TaggingDirective,
        website_redirect_location: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 DeleteObjectRequest.
    pub struct DeleteObjectRequest {
        /// The bucket name of the bucket containing the object.
        bucket: String,
        /// Indicates whether S3 Object Lock should bypass Governance-mode restrictions to process this operation.
        bypass_governance_retention: bool,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Key name of the object to delete.
        key: String,
        mfa: String,
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
    /// S3 DeleteObjectsRequest.
    pub struct DeleteObjectsRequest {
        /// The bucket name containing the objects to delete.
        bucket: String,
        /// Specifies whether you want to delete this object even if it has a Governance-type Object Lock in place.
        bypass_governance_retention: bool,
        /// Container for the request.
        delete: Delete,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        mfa: String,
        request_payer: RequestPayer,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetObjectRequest.
    pub struct GetObjectRequest {
        /// The bucket name containing the object.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        if_match: String,
        if_modified_since: chrono::DateTime<chrono::Utc>,
        if_none_match: String,
        if_unmodified_since: chrono::DateTime<chrono::Utc>,
        /// Key of the object to get.
        key: String,
        /// Part number of the object being read.
        part_number: i32,
        /// Downloads the specified range bytes of an object.
        range: String,
        request_payer: RequestPayer,
        /// Sets the Cache-Control header of the response.
        response_cache_control: String,
        /// Sets the Content-Disposition header of the response
        response_content_disposition: String,
        /// Sets the Content-Encoding header of the response.
        response_content_encoding: String,
        /// Sets the Content-Language header of the response.
        response_content_language: String,
        /// Sets the Content-Type header of the response.
        response_content_type: String,
        /// Sets the Expires header of the response.
        response_expires: chrono::DateTime<chrono::Utc>,
        /// Specifies the algorithm to use to when encrypting the object (for example, AES256).
        sse_customer_algorithm: String,
        /// Specifies the customer-provided encryption key for Amazon S3 to use in encrypting data.
        sse_customer_key: String,
        /// Specifies the 128-bit MD5 digest of the encryption key according to RFC 1321.
        sse_customer_key_md5: String,
        /// VersionId used to reference a specific version of the object.
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetObjectTorrentRequest.
    pub struct GetObjectTorrentRequest {
        bucket: String,
        expected_bucket_owner: String,
        key: String,
        request_payer: RequestPayer,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 HeadObjectRequest.
    pub struct HeadObjectRequest {
        /// The name of the bucket containing the object.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        if_match: String,
        if_modified_since: chrono::DateTime<chrono::Utc>,
        if_none_match: String,
        if_unmodified_since: chrono::DateTime<chrono::Utc>,
        /// The object key.
        key: String,
        /// Part number of the object being read.
        part_number: i32,
        /// Downloads the specified range bytes of an object.
        range: String,
        request_payer: RequestPayer,
        /// Specifies the algorithm to use to when encrypting the object (for example, AES256).
        sse_customer_algorithm: String,
        /// Specifies the customer-provided encryption key for Amazon S3 to use in encrypting data.
        sse_customer_key: String,
        /// Specifies the 128-bit MD5 digest of the encryption key according to RFC 1321.
        sse_customer_key_md5: String,
        /// VersionId used to reference a specific version of the object.
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 PutObjectRequest.
    pub struct PutObjectRequest {
        /// The canned ACL to apply to the object.
        acl: ObjectCannedACL,
        /// Object data.
        body: Vec<u8>,
        /// The bucket name to which the PUT operation was initiated.
        bucket: String,
        bucket_key_enabled: bool,
        /// Can be used to specify caching behavior along the request/reply chain.
        cache_control: String,
        /// Specifies presentational information for the object.
        content_disposition: String,
        content_encoding: String,
        /// The language the content is in.
        content_language: String,
        /// Size of the body in bytes.
        content_length: i64,
        /// The base64-encoded 128-bit MD5 digest of the message (without the headers) according to RFC 1864.
        content_md5: String,
        /// A standard MIME type describing the format of the contents.
        content_type: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The date and time at which the object is no longer cacheable.
        expires: chrono::DateTime<chrono::Utc>,
        /// Gives the grantee READ, READ_ACP, and WRITE_ACP permissions on the object.
        grant_full_control: String,
        /// Allows grantee to read the object data and its metadata.
        grant_read: String,
        /// Allows grantee to read the object ACL.
        grant_read_acp: String,
        /// Allows grantee to write the ACL for the applicable object.
        grant_write_acp: String,
        /// Object key for which the PUT operation was initiated.
        key: String,
        /// A map of metadata to store with the object in S3.
        metadata: HashMap<String, String>,
        /// Specifies whether a legal hold will be applied to this object.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus,
        /// The Object Lock mode that you want to apply to this object.
        object_lock_mode: ObjectLockMode,
        /// The date and time when you want this object's Object Lock to expire.
        object_lock_retain_until_date: chrono::DateTime<chrono::Utc>,
        request_payer: RequestPayer,
        /// Specifies the algorithm to use to when encrypting the object (for example, AES256).
        sse_customer_algorithm: String,
        /// Specifies the customer-provided encryption key for Amazon S3 to use in encrypting data.
        sse_customer_key: String,
        /// Specifies the 128-bit MD5 digest of the encryption key according to RFC 1321.
        sse_customer_key_md5: String,
        /// Specifies the AWS KMS Encryption Context to use for object encryption.
        ssekms_encryption_context: String,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
        /// By default, Amazon S3 uses the STANDARD Storage Class to store newly created objects.
        storage_class: StorageClass,
        /// The tag-set for the object.
        tagging: String,
        website_redirect_location: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 RestoreObjectRequest.
    pub struct RestoreObjectRequest {
        bucket: String,
        expected_bucket_owner: String,
        key: String,
        request_payer: RequestPayer,
        restore_request: RestoreRequest,
        version_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 SelectObjectContentRequest.
    pub struct SelectObjectContentRequest {
        /// The S3 bucket.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// The expression that is used to query the object.
        expression: String,
        /// The type of the provided expression (for example, SQL).
        expression_type: ExpressionType,
        /// Describes the format of the data in the object that is being queried.
        input_serialization: InputSerialization,
        /// The object key.
        key: String,
        /// Describes the format of the data that you want Amazon S3 to return in response.
        output_serialization: OutputSerialization,
        /// Specifies if periodic request progress information should be enabled.
        request_progress: RequestProgress,
        /// The SSE Algorithm used to encrypt the object.
        sse_customer_algorithm: String,
        /// The SSE Customer Key.
        sse_customer_key: String,
        /// The SSE Customer Key MD5.
        sse_customer_key_md5: String,
        /// Specifies the byte range of the object to get the records from.
        scan_range: ScanRange,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}
