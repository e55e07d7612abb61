//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use std::collections::HashMap;

use crate::enums::{
    EncodingType, ObjectCannedACL, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer,
    ServerSideEncryption, StorageClass,
};
use crate::s3_structure;
use crate::types::{CompletedMultipartUpload, HttpHeader};

s3_structure! {
    /// S3 AbortMultipartUploadRequest.
    pub struct AbortMultipartUploadRequest {
        /// The bucket name to which the upload was taking place.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Key of the object for which the multipart upload was initiated.
        key: String,
        request_payer: RequestPayer,
        /// Upload ID that identifies the multipart upload.
        upload_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 CompleteMultipartUploadRequest.
    pub struct CompleteMultipartUploadRequest {
        /// Name of the bucket to which the multipart upload was initiated.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Object key for which the multipart upload was initiated.
        key: String,
        /// The container for the multipart upload request information.
        multipart_upload: CompletedMultipartUpload,
        request_payer: RequestPayer,
        /// ID for the initiated multipart upload.
        upload_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 CreateMultipartUploadRequest.
    pub struct CreateMultipartUploadRequest {
        /// The canned ACL to apply to the object.
        acl: ObjectCannedACL,
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
        /// Object key for which the multipart upload is to be initiated.
        key: String,
        /// A map of metadata to store with the object in S3.
        metadata: HashMap<String, String>,
        /// Specifies whether you want to apply a Legal Hold to the uploaded object.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus,
        /// Specifies the Object Lock mode that you want to apply to the uploaded object.
        object_lock_mode: ObjectLockMode,
        /// Specifies the date and time when you want the Object Lock to expire.
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
        /// Specifies the ID of the symmetric customer managed AWS KMS CMK to use for object encryption.
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
    /// S3 ListMultipartUploadsRequest.
    pub struct ListMultipartUploadsRequest {
        /// The name of the bucket to which the multipart upload was initiated.
        bucket: String,
        /// Character you use to group keys.
        delimiter: String,
        encoding_type: EncodingType,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        key_marker: String,
        /// Sets the maximum number of multipart uploads, from 1 to 1,000, to return in the response body.
        max_uploads: i32,
        /// Lists in-progress uploads only for those keys that begin with the specified prefix.
        prefix: String,
        /// Together with key-marker, specifies the multipart upload after which listing should begin.
        upload_id_marker: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 ListPartsRequest.
    pub struct ListPartsRequest {
        /// The name of the bucket to which the parts are being uploaded.
        bucket: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Object key for which the multipart upload was initiated.
        key: String,
        /// Sets the maximum number of parts to return.
        max_parts: i32,
        /// Specifies the part after which listing should begin.
        part_number_marker: String,
        request_payer: RequestPayer,
        /// Upload ID identifying the multipart upload whose parts are being listed.
        upload_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 UploadPartCopyRequest.
    pub struct UploadPartCopyRequest {
        /// The bucket name.
        bucket: String,
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
        /// The range of bytes to copy from the source object.
        copy_source_range: String,
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
        /// Object key for which the multipart upload was initiated.
        key: String,
        /// Part number of part being copied.
        part_number: i32,
        request_payer: RequestPayer,
        /// Specifies the algorithm to use to when encrypting the object (for example, AES256).
        sse_customer_algorithm: String,
        /// Specifies the customer-provided encryption key for Amazon S3 to use in encrypting data.
        sse_customer_key: String,
        /// Specifies the 128-bit MD5 digest of the encryption key according to RFC 1321.
        sse_customer_key_md5: String,
        /// Upload ID identifying the multipart upload whose part is being copied.
        upload_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 UploadPartRequest.
    pub struct UploadPartRequest {
        /// Object data.
        body: Vec<u8>,
        /// The name of the bucket to which the multipart upload was initiated.
        bucket: String,
        /// Size of the body in bytes.
        content_length: i64,
        /// The base64-encoded 128-bit MD5 digest of the part data.
        content_md5: String,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Object key for which the multipart upload was initiated.
        key: String,
        /// Part number of part being uploaded.
        part_number: i32,
        request_payer: RequestPayer,
        /// Specifies the algorithm to use to when encrypting the object (for example, AES256).
        sse_customer_algorithm: String,
        /// Specifies the customer-provided encryption key for Amazon S3 to use in encrypting data.
        sse_customer_key: String,
        /// Specifies the 128-bit MD5 digest of the encryption key according to RFC 1321.
        sse_customer_key_md5: String,
        /// Upload ID identifying the multipart upload whose part is being uploaded.
        upload_id: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}
