//! Generated from the AWS S3 Smithy model by s3crt-codegen. DO NOT EDIT.
#![allow(missing_docs)]

use crate::enums::BucketLocationConstraint;
use crate::s3_structure;
use crate::types::{Bucket, Owner};

s3_structure! {
    /// S3 CreateBucketOutput.
    pub struct CreateBucketOutput {
        location: String,
    }
}

s3_structure! {
    /// S3 GetBucketLocationOutput.
    pub struct GetBucketLocationOutput {
        location_constraint: BucketLocationConstraint,
    }
}

s3_structure! {
    /// S3 ListBucketsOutput.
    pub struct ListBucketsOutput {
        buckets: Vec<Bucket>,
        owner: Owner,
    }
}
