//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::enums::{EncodingType, RequestPayer};
use crate::s3_structure;
use crate::types::HttpHeader;

s3_structure! {
    /// S3 ListObjectVersionsRequest.
    pub struct ListObjectVersionsRequest {
        /// The bucket name that contains the objects.
        bucket: String,
        /// A delimiter is a character that you specify to group keys.
        delimiter: String,
        encoding_type: EncodingType,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Specifies the key to start with when listing objects in a bucket.
        key_marker: String,
        /// Sets the maximum number of keys returned in the response.
        max_keys: i32,
        /// Use this parameter to select only those keys that begin with the specified prefix.
        prefix: String,
        /// Specifies the object version you want to start listing from.
        version_id_marker: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 ListObjectsRequest.
    pub struct ListObjectsRequest {
        /// The name of the bucket containing the objects.
        bucket: String,
        /// A delimiter is a character you use to group keys.
        delimiter: String,
        encoding_type: EncodingType,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        /// Specifies the key to start with when listing objects in a bucket.
        marker: String,
        /// Sets the maximum number of keys returned in the response.
        max_keys: i32,
        /// Limits the response to keys that begin with the specified prefix.
        prefix: String,
        /// Confirms that the requester knows that she or he will be charged for the list objects request.
        request_payer: RequestPayer,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 ListObjectsV2Request.
    pub struct ListObjectsV2Request {
        /// Bucket name to list.
        bucket: String,
        /// ContinuationToken indicates Amazon S3 that the list is being continued on this bucket with a token.
        continuation_token: String,
        /// A delimiter is a character you use to group keys.
        delimiter: String,
        /// Encoding type used by Amazon S3 to encode object keys in the response.
        encoding_type: EncodingType,
        /// The account id of the expected bucket owner.
        expected_bucket_owner: String,
        fetch_owner: bool,
        /// Sets the maximum number of keys returned in the response.
        max_keys: i32,
        /// Limits the response to keys that begin with the specified prefix.
        prefix: String,
        /// Confirms that the requester knows that she or he will be charged for the list objects request in V2 style.
        request_payer: RequestPayer,
        /// StartAfter is where you want Amazon S3 to start listing from.
        start_after: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}
