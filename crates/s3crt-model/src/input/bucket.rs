//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::enums::BucketCannedACL;
use crate::s3_structure;
use crate::types::{CreateBucketConfiguration, HttpHeader};

s3_structure! {
    /// S3 CreateBucketRequest.
    pub struct CreateBucketRequest {
        /// The canned ACL to apply to the bucket.
        acl: BucketCannedACL,
        /// The name of the bucket to create.
        bucket: String,
        /// The configuration information for the bucket.
        create_bucket_configuration: CreateBucketConfiguration,
        /// Allows grantee the read, write, read ACP, and write ACP permissions on the bucket.
        grant_full_control: String,
        /// Allows grantee to list the objects in the bucket.
        grant_read: String,
        /// Allows grantee to read the bucket ACL.
        grant_read_acp: String,
        /// Allows grantee to create, overwrite, and delete any object in the bucket.
        grant_write: String,
        /// Allows grantee to write the ACL for the applicable bucket.
        grant_write_acp: String,
        /// Specifies whether you want S3 Object Lock to be enabled for the new bucket.
        object_lock_enabled_for_bucket: bool,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 DeleteBucketRequest.
    pub struct DeleteBucketRequest {
        bucket: String,
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 GetBucketLocationRequest.
    pub struct GetBucketLocationRequest {
        bucket: String,
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}

s3_structure! {
    /// S3 HeadBucketRequest.
    pub struct HeadBucketRequest {
        bucket: String,
        expected_bucket_owner: String,
        /// Extra HTTP headers sent with the request, in order.
        custom_headers: Vec<HttpHeader>,
        /// Pre-encoded query string appended to the request URI.
        custom_query_parameters: String,
    }
}
