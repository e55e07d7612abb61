//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::enums::EncodingType;
use crate::s3_structure;
use crate::types::{CommonPrefix, DeleteMarkerEntry, Object, ObjectVersion};

s3_structure! {
    /// S3 ListObjectVersionsOutput.
    pub struct ListObjectVersionsOutput {
        common_prefixes: Vec<CommonPrefix>,
        /// Container for an object that is a delete marker.
        delete_markers: Vec<DeleteMarkerEntry>,
        /// The delimiter grouping the included keys.
        delimiter: String,
        /// Encoding type used by Amazon S3 to encode object key names in the XML response.
        encoding_type: EncodingType,
        /// A flag that indicates whether Amazon S3 returned all of the results that satisfied the search criteria.
        is_truncated: bool,
        /// Marks the last key returned in a truncated response.
        key_marker: String,
        /// Specifies the maximum number of objects to return.
        max_keys: i32,
        /// The bucket name.
        name: String,
        next_key_marker: String,
        next_version_id_marker: String,
        /// Selects objects that start with the value supplied by this parameter.
        prefix: String,
        /// Marks the last version of the key returned in a truncated response.
        version_id_marker: String,
        /// Container for version information.
        versions: Vec<ObjectVersion>,
    }
}

s3_structure! {
    /// S3 ListObjectsOutput.
    pub struct ListObjectsOutput {
        /// All of the keys rolled up in a common prefix count as a single return when calculating the number of returns.
        common_prefixes: Vec<CommonPrefix>,
        /// Metadata about each object returned.
        contents: Vec<Object>,
        delimiter: String,
        /// Encoding type used by Amazon S3 to encode object keys in the response.
        encoding_type: EncodingType,
        /// A flag that indicates whether Amazon S3 returned all of the results that satisfied the search criteria.
        is_truncated: bool,
        /// Indicates where in the bucket listing begins.
        marker: String,
        /// The maximum number of keys returned in the response body.
        max_keys: i32,
        /// The bucket name.
        name: String,
        next_marker: String,
        /// Keys that begin with the indicated prefix.
        prefix: String,
    }
}

s3_structure! {
    /// S3 ListObjectsV2Output.
    pub struct ListObjectsV2Output {
        common_prefixes: Vec<CommonPrefix>,
        /// Metadata about each object returned.
        contents: Vec<Object>,
        /// If ContinuationToken was sent with the request, it is included in the response.
        continuation_token: String,
        delimiter: String,
        /// Encoding type used by Amazon S3 to encode object key names in the XML response.
        encoding_type: EncodingType,
        /// Set to false if all of the results were returned.
        is_truncated: bool,
        /// KeyCount is the number of keys returned with this request.
        key_count: i32,
        /// Sets the maximum number of keys returned in the response.
        max_keys: i32,
        /// The bucket name.
        name: String,
        next_continuation_token: String,
        /// Keys that begin with the indicated prefix.
        prefix: String,
        /// If StartAfter was sent with the request, it is included in the response.
        start_after: String,
    }
}
