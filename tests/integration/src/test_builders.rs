//! Builder semantics exercised through real S3 shapes.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{TimeZone, Utc};
    use s3crt_model::enums::{ObjectCannedACL, ServerSideEncryption, StorageClass};
    use s3crt_model::input::{GetObjectRequest, PutObjectRequest};
    use s3crt_model::types::{Tag, Tagging};
    use s3crt_model::{Structure, StructureBuilder};

    fn upload() -> PutObjectRequest {
        PutObjectRequest::builder()
            .bucket("logs")
            .key("2024/05/01.gz")
            .body(b"payload".to_vec())
            .content_length(7_i64)
            .acl(ObjectCannedACL::Private)
            .storage_class(StorageClass::StandardIa)
            .metadata(HashMap::from([("team".to_owned(), "ops".to_owned())]))
            .build()
    }

    #[test]
    fn test_should_keep_last_written_value_per_member() {
        let request = GetObjectRequest::builder()
            .bucket("first")
            .bucket("second")
            .part_number(1)
            .part_number(3)
            .build();
        assert_eq!(request.bucket(), "second");
        assert_eq!(request.part_number(), Some(3));
    }

    #[test]
    fn test_should_not_disturb_other_members_when_editing_one() {
        let original = upload();
        let moved = original.with_changes(|b| {
            b.key("2024/05/02.gz");
        });

        assert_eq!(moved.key(), "2024/05/02.gz");
        assert_eq!(moved.bucket(), original.bucket());
        assert_eq!(moved.body(), original.body());
        assert_eq!(moved.content_length(), Some(7));
        assert_eq!(moved.acl(), Some(ObjectCannedACL::Private));
        assert_eq!(moved.storage_class(), Some(StorageClass::StandardIa));
        assert_eq!(moved.metadata(), original.metadata());
        assert_ne!(moved, original);
        assert_eq!(original.key(), "2024/05/01.gz");
    }

    #[test]
    fn test_should_reset_members_to_absent() {
        let cleared = upload().with_changes(|b| {
            b.set_content_length(None)
                .set_storage_class(None)
                .set_metadata(None)
                .set_key(None);
        });
        assert_eq!(cleared.content_length(), None);
        assert_eq!(cleared.storage_class(), None);
        assert!(cleared.metadata().is_none());
        assert_eq!(cleared.key(), "");
        assert_eq!(cleared.bucket(), "logs");
    }

    #[test]
    fn test_should_treat_empty_string_like_unset() {
        let explicit = GetObjectRequest::builder().bucket("logs").range("").build();
        let implicit = GetObjectRequest::builder().bucket("logs").build();
        assert_eq!(explicit, implicit);
        assert_eq!(explicit.range(), "");
    }

    #[test]
    fn test_should_snapshot_builder_on_each_build() {
        let mut builder = PutObjectRequest::builder();
        builder.bucket("logs").key("a.txt");
        let first = builder.build();

        builder.key("b.txt").server_side_encryption("aws:kms");
        let second = builder.build();

        assert_eq!(first.key(), "a.txt");
        assert_eq!(first.server_side_encryption(), None);
        assert_eq!(second.key(), "b.txt");
        assert_eq!(second.server_side_encryption(), Some(ServerSideEncryption::AwsKms));
        assert_eq!(builder.get_key(), "b.txt");
    }

    #[test]
    fn test_should_isolate_cloned_builders() {
        let mut original = upload().to_builder();
        let mut fork = original.clone();
        fork.bucket("archive");
        original.tagging("env=prod");

        assert_eq!(original.build().bucket(), "logs");
        assert_eq!(fork.build().bucket(), "archive");
        assert_eq!(fork.get_tagging(), "");
    }

    #[test]
    fn test_should_copy_nested_collections_into_builder() {
        let tagging = Tagging::builder()
            .tag_set(vec![Tag::builder().key("env").value("prod").build()])
            .build();

        let mut builder = tagging.to_builder();
        let mut tags = builder.get_tag_set().map(<[Tag]>::to_vec).unwrap_or_default();
        tags.push(Tag::builder().key("team").value("ops").build());
        builder.tag_set(tags);
        let extended = builder.build();

        assert_eq!(tagging.tag_set().map(<[Tag]>::len), Some(1));
        assert_eq!(extended.tag_set().map(<[Tag]>::len), Some(2));
        assert_eq!(extended.tag_set().map(|t| t[1].key()), Some("team"));
    }

    #[test]
    fn test_should_compare_timestamps_by_instant() {
        let expires = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let a = upload().with_changes(|b| {
            b.expires(expires);
        });
        let b = upload().with_changes(|b| {
            b.expires(expires);
        });
        assert_eq!(a, b);
        assert_eq!(a.expires(), Some(expires));
        assert_ne!(a, upload());
    }

    #[test]
    fn test_should_rebuild_any_structure_generically() {
        fn rebuilt<T: Structure>(value: &T) -> T {
            let builder = value.to_builder();
            StructureBuilder::build(&builder)
        }
        let original = upload();
        assert_eq!(rebuilt(&original), original);
    }
}
