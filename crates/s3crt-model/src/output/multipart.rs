//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::enums::{EncodingType, RequestCharged, ServerSideEncryption, StorageClass};
use crate::s3_structure;
use crate::types::{CommonPrefix, CopyPartResult, Initiator, MultipartUpload, Owner, Part};

s3_structure! {
    /// S3 AbortMultipartUploadOutput.
    pub struct AbortMultipartUploadOutput {
        request_charged: RequestCharged,
    }
}

s3_structure! {
    /// S3 CompleteMultipartUploadOutput.
    pub struct CompleteMultipartUploadOutput {
        /// The name of the bucket that contains the newly created object.
        bucket: String,
        bucket_key_enabled: bool,
        /// Entity tag that identifies the newly created object's data.
        e_tag: String,
        expiration: String,
        /// The object key of the newly created object.
        key: String,
        /// The URI that identifies the newly created object.
        location: String,
        request_charged: RequestCharged,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
        /// Version ID of the newly created object, in case the bucket has versioning turned on.
        version_id: String,
    }
}

s3_structure! {
    /// S3 CreateMultipartUploadOutput.
    pub struct CreateMultipartUploadOutput {
        abort_date: chrono::DateTime<chrono::Utc>,
        /// This header is returned along with the x-amz-abort-date header.
        abort_rule_id: String,
        /// The name of the bucket to which the multipart upload was initiated.
        bucket: String,
        bucket_key_enabled: bool,
        /// Object key for which the multipart upload was initiated.
        key: String,
        request_charged: RequestCharged,
        sse_customer_algorithm: String,
        sse_customer_key_md5: String,
        /// If present, specifies the AWS KMS Encryption Context to use for object encryption.
        ssekms_encryption_context: String,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
        /// ID for the initiated multipart upload.
        upload_id: String,
    }
}

s3_structure! {
    /// S3 ListMultipartUploadsOutput.
    pub struct ListMultipartUploadsOutput {
        /// The name of the bucket to which the multipart upload was initiated.
        bucket: String,
        common_prefixes: Vec<CommonPrefix>,
        /// Contains the delimiter you specified in the request.
        delimiter: String,
        /// Encoding type used by Amazon S3 to encode object keys in the response.
        encoding_type: EncodingType,
        /// Indicates whether the returned list of multipart uploads is truncated.
        is_truncated: bool,
        /// The key at or after which the listing began.
        key_marker: String,
        /// Maximum number of multipart uploads that could have been included in the response.
        max_uploads: i32,
        next_key_marker: String,
        next_upload_id_marker: String,
        /// When a prefix is provided in the request, this field contains the specified prefix.
        prefix: String,
        /// Upload ID after which listing began.
        upload_id_marker: String,
        /// Container for elements related to a particular multipart upload.
        uploads: Vec<MultipartUpload>,
    }
}

s3_structure! {
    /// S3 ListPartsOutput.
    pub struct ListPartsOutput {
        abort_date: chrono::DateTime<chrono::Utc>,
        /// This header is returned along with the x-amz-abort-date header.
        abort_rule_id: String,
        /// The name of the bucket to which the multipart upload was initiated.
        bucket: String,
        /// Container element that identifies who initiated the multipart upload.
        initiator: Initiator,
        /// Indicates whether the returned list of parts is truncated.
        is_truncated: bool,
        /// Object key for which the multipart upload was initiated.
        key: String,
        /// Maximum number of parts that were allowed in the response.
        max_parts: i32,
        next_part_number_marker: String,
        /// Container element that identifies the object owner, after the object is created.
        owner: Owner,
        part_number_marker: String,
        /// Container for elements related to a particular part.
        parts: Vec<Part>,
        request_charged: RequestCharged,
        /// Class of storage (STANDARD or REDUCED_REDUNDANCY) used to store the uploaded object.
        storage_class: StorageClass,
        /// Upload ID identifying the multipart upload whose parts are being listed.
        upload_id: String,
    }
}

s3_structure! {
    /// S3 UploadPartCopyOutput.
    pub struct UploadPartCopyOutput {
        bucket_key_enabled: bool,
        /// Container for all response elements.
        copy_part_result: CopyPartResult,
        /// The version of the source object that was copied, if you have enabled versioning on the source bucket.
        copy_source_version_id: String,
        request_charged: RequestCharged,
        sse_customer_algorithm: String,
        sse_customer_key_md5: String,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
    }
}

s3_structure! {
    /// S3 UploadPartOutput.
    pub struct UploadPartOutput {
        bucket_key_enabled: bool,
        /// Entity tag for the uploaded object.
        e_tag: String,
        request_charged: RequestCharged,
        sse_customer_algorithm: String,
        sse_customer_key_md5: String,
        ssekms_key_id: String,
        server_side_encryption: ServerSideEncryption,
    }
}
