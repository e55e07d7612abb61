//! Immutable S3 request and response structures.
//!
//! Every S3 payload is a [`Structure`]: a read-only value built through its
//! paired [`StructureBuilder`]. Constrained string fields are open
//! enumerations ([`OpenEnum`]) that degrade unrecognized wire values to an
//! `Unknown` variant instead of failing.
//!
//! The `enums`, `types`, `input`, `output` and `operations` modules are
//! generated by `s3crt-codegen` from the AWS S3 Smithy model. The remaining
//! modules hold the hand-written machinery the generated code expands into.
//!
//! ```
//! use s3crt_model::Structure;
//! use s3crt_model::enums::StorageClass;
//! use s3crt_model::input::GetObjectRequest;
//!
//! let request = GetObjectRequest::builder()
//!     .bucket("logs")
//!     .key("2024/05/01.gz")
//!     .part_number(2)
//!     .build();
//! assert_eq!(request.bucket(), "logs");
//! assert_eq!(request.range(), "");
//! assert_eq!(request.part_number(), Some(2));
//!
//! let retry = request.with_changes(|b| {
//!     b.set_part_number(None);
//! });
//! assert_eq!(retry.part_number(), None);
//!
//! assert!(StorageClass::from_raw("GLACIER_IR").is_unknown());
//! ```
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]

pub mod enumeration;
pub mod enums;
pub mod error;
pub mod input;
pub mod member;
pub mod operations;
pub mod output;
pub mod structure;
pub mod types;

pub use enumeration::{OpenEnum, UNKNOWN_DISPLAY};
pub use error::{ModelError, ModelResult};
pub use member::Member;
pub use operations::S3Operation;
pub use structure::{Structure, StructureBuilder};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
    pub use serde;

    pub use crate::enumeration::{deserialize_open_enum, serialize_open_enum};
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::enums::{BucketLocationConstraint, ObjectStorageClass, Permission, Type};
    use crate::input::ListObjectsV2Request;
    use crate::output::{ListBucketsOutput, ListObjectsV2Output};
    use crate::types::{Bucket, Grant, Grantee, HttpHeader, Object, Owner};

    #[test]
    fn test_should_rebuild_bucket_with_new_name() {
        let created = Utc.with_ymd_and_hms(2021, 3, 14, 9, 26, 53).unwrap();
        let bucket = Bucket::builder().name("logs").creation_date(created).build();
        assert_eq!(bucket.name(), "logs");
        assert_eq!(bucket.creation_date(), Some(created));

        let renamed = bucket.to_builder().name("logs2").build();
        assert_eq!(renamed.name(), "logs2");
        assert_eq!(renamed.creation_date(), Some(created));
        assert_eq!(bucket.name(), "logs");
    }

    #[test]
    fn test_should_degrade_undefined_region_to_unknown() {
        assert_eq!(
            BucketLocationConstraint::from_value(Some("us-west-9")),
            Some(BucketLocationConstraint::Unknown)
        );
        assert_eq!(
            BucketLocationConstraint::from_raw("eu-west-1"),
            BucketLocationConstraint::EuWest1
        );
        assert_eq!(BucketLocationConstraint::from_raw("EU"), BucketLocationConstraint::Eu);
    }

    #[test]
    fn test_should_nest_structures_inside_collections() {
        let owner = Owner::builder().id("abc123").display_name("ops").build();
        let object = Object::builder()
            .key("a.txt")
            .size(12)
            .storage_class(ObjectStorageClass::from_raw("STANDARD"))
            .owner(owner.clone())
            .build();
        let listing = ListObjectsV2Output::builder()
            .name("logs")
            .contents(vec![object])
            .key_count(1)
            .is_truncated(false)
            .build();

        let contents = listing.contents().expect("contents present");
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].key(), "a.txt");
        assert_eq!(contents[0].storage_class(), Some(ObjectStorageClass::Standard));
        assert_eq!(contents[0].owner(), Some(&owner));
        assert_eq!(listing.is_truncated(), Some(false));
        assert!(listing.common_prefixes().is_none());
    }

    #[test]
    fn test_should_keep_keyword_members_accessible() {
        let grantee = Grantee::builder()
            .type_(Type::CanonicalUser)
            .id("abc123")
            .build();
        let grant = Grant::builder()
            .grantee(grantee)
            .permission(Permission::from_raw("FULL_CONTROL"))
            .build();

        assert_eq!(
            grant.grantee().and_then(Grantee::type_),
            Some(Type::CanonicalUser)
        );
        assert_eq!(grant.permission(), Some(Permission::FullControl));
    }

    #[test]
    fn test_should_carry_custom_query_parameters() {
        let request = ListObjectsV2Request::builder()
            .bucket("logs")
            .custom_query_parameters("x-id=ListObjectsV2&a=1&a=2")
            .build();
        assert_eq!(request.custom_query_parameters(), "x-id=ListObjectsV2&a=1&a=2");
        assert_eq!(ListObjectsV2Request::default().custom_query_parameters(), "");
    }

    #[test]
    fn test_should_carry_custom_headers_in_order() {
        let headers = vec![
            HttpHeader::builder().name("x-trace").value("1").build(),
            HttpHeader::builder().name("x-trace").value("2").build(),
        ];
        let request = ListObjectsV2Request::builder()
            .bucket("logs")
            .custom_headers(headers.clone())
            .build();

        let rebuilt = request.to_builder().build();
        assert_eq!(rebuilt, request);
        let staged = rebuilt.custom_headers().expect("headers present");
        assert_eq!(staged, headers.as_slice());
        let values: Vec<&str> = staged.iter().map(HttpHeader::value).collect();
        assert_eq!(values, ["1", "2"]);
        assert_eq!(staged[0].name(), "x-trace");
        assert!(ListObjectsV2Request::default().custom_headers().is_none());
    }

    #[test]
    fn test_should_leave_unset_output_collections_absent() {
        let output = ListBucketsOutput::default();
        assert!(output.buckets().is_none());
        assert!(output.owner().is_none());

        let output = output.with_changes(|b| {
            b.buckets(Vec::<Bucket>::new());
        });
        assert_eq!(output.buckets(), Some(&[][..]));
    }

    #[test]
    fn test_should_map_operations_to_shapes() {
        let op = S3Operation::from_name("ListObjectsV2").expect("known operation");
        assert_eq!(op, S3Operation::ListObjectsV2);
        assert_eq!(op.request_shape(), Some("ListObjectsV2Request"));
        assert_eq!(op.output_shape(), Some("ListObjectsV2Output"));
        assert_eq!(op.category(), "list");
        assert_eq!(op.to_string(), "ListObjectsV2");

        assert_eq!(S3Operation::ListBuckets.request_shape(), None);
        assert_eq!(S3Operation::PutBucketTagging.output_shape(), None);
        assert_eq!(S3Operation::from_name("ListObjectsV3"), None);
    }

    #[test]
    fn test_should_name_every_operation_uniquely() {
        let mut names: Vec<&str> = S3Operation::ALL.iter().map(S3Operation::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), S3Operation::ALL.len());
        for op in S3Operation::ALL {
            assert_eq!(S3Operation::from_name(op.as_str()), Some(*op));
        }
    }
}
