//! End-to-end payload composition across nested S3 shapes.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use s3crt_model::enums::{
        BucketCannedACL, BucketLocationConstraint, ExpirationStatus, RequestCharged,
        ServerSideEncryption, TransitionStorageClass,
    };
    use s3crt_model::input::{
        CompleteMultipartUploadRequest, CreateBucketRequest, DeleteObjectsRequest,
        PutBucketEncryptionRequest, PutBucketLifecycleConfigurationRequest,
    };
    use s3crt_model::output::DeleteObjectsOutput;
    use s3crt_model::types::{
        Bucket, BucketLifecycleConfiguration, CompletedMultipartUpload, CompletedPart,
        CreateBucketConfiguration, Delete, DeletedObject, Error, LifecycleExpiration,
        LifecycleRule, LifecycleRuleFilter, ObjectIdentifier, ServerSideEncryptionByDefault,
        ServerSideEncryptionConfiguration, ServerSideEncryptionRule, Transition,
    };
    use s3crt_model::{OpenEnum, Structure};

    use crate::init_tracing;

    #[test]
    fn test_should_rename_bucket_without_touching_creation_date() {
        let created = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
        let logs = Bucket::builder().name("logs").creation_date(created).build();
        let logs2 = logs.to_builder().name("logs2").build();

        assert_eq!(logs.name(), "logs");
        assert_eq!(logs2.name(), "logs2");
        assert_eq!(logs2.creation_date(), logs.creation_date());
        assert_ne!(logs, logs2);

        let restored = logs2.with_changes(|b| {
            b.name("logs");
        });
        assert_eq!(restored, logs);
    }

    #[test]
    fn test_should_create_bucket_in_unlisted_region() {
        init_tracing();
        let region = BucketLocationConstraint::from_value(Some("us-west-9"));
        assert_eq!(region, Some(BucketLocationConstraint::Unknown));

        let request = CreateBucketRequest::builder()
            .bucket("logs")
            .acl(BucketCannedACL::Private)
            .create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .set_location_constraint(region)
                    .build(),
            )
            .build();

        let constraint = request
            .create_bucket_configuration()
            .and_then(CreateBucketConfiguration::location_constraint)
            .expect("constraint staged");
        assert!(constraint.is_unknown());
        assert_eq!(constraint.value(), None);
        assert!(constraint.try_value().is_err());
        assert!(serde_json::to_string(&constraint).is_err());
    }

    #[test]
    fn test_should_compose_lifecycle_configuration() {
        let archive_on = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let rule = LifecycleRule::builder()
            .id("archive-logs")
            .status(ExpirationStatus::Enabled)
            .filter(LifecycleRuleFilter::builder().prefix("logs/").build())
            .transitions(vec![
                Transition::builder()
                    .days(30)
                    .storage_class(TransitionStorageClass::StandardIa)
                    .build(),
                Transition::builder()
                    .date(archive_on)
                    .storage_class("GLACIER")
                    .build(),
            ])
            .expiration(LifecycleExpiration::builder().days(365).build())
            .build();
        let request = PutBucketLifecycleConfigurationRequest::builder()
            .bucket("logs")
            .lifecycle_configuration(
                BucketLifecycleConfiguration::builder().rules(vec![rule]).build(),
            )
            .build();

        let rules = request
            .lifecycle_configuration()
            .and_then(BucketLifecycleConfiguration::rules)
            .expect("rules staged");
        assert_eq!(rules.len(), 1);
        let rule = &rules[0];
        assert_eq!(rule.status(), Some(ExpirationStatus::Enabled));
        assert_eq!(rule.filter().map(LifecycleRuleFilter::prefix), Some("logs/"));
        assert_eq!(rule.prefix(), "");

        let transitions = rule.transitions().expect("transitions staged");
        assert_eq!(transitions[0].days(), Some(30));
        assert_eq!(transitions[0].date(), None);
        assert_eq!(transitions[1].date(), Some(archive_on));
        assert_eq!(
            transitions[1].storage_class(),
            Some(TransitionStorageClass::Glacier)
        );
        assert_eq!(rule.expiration().and_then(LifecycleExpiration::days), Some(365));
        assert!(rule.noncurrent_version_transitions().is_none());
    }

    #[test]
    fn test_should_complete_multipart_upload_in_part_order() {
        let parts: Vec<CompletedPart> = (1..=3)
            .map(|n| {
                CompletedPart::builder()
                    .part_number(n)
                    .e_tag(format!("\"etag-{n}\""))
                    .build()
            })
            .collect();
        let request = CompleteMultipartUploadRequest::builder()
            .bucket("media")
            .key("video.mp4")
            .upload_id("upload-1")
            .multipart_upload(CompletedMultipartUpload::builder().parts(parts).build())
            .build();

        let staged = request
            .multipart_upload()
            .and_then(CompletedMultipartUpload::parts)
            .expect("parts staged");
        let numbers: Vec<Option<i32>> = staged.iter().map(CompletedPart::part_number).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(staged[2].e_tag(), "\"etag-3\"");
        assert_eq!(request.request_payer(), None);
    }

    #[test]
    fn test_should_pair_delete_objects_request_and_output() {
        let request = DeleteObjectsRequest::builder()
            .bucket("logs")
            .delete(
                Delete::builder()
                    .quiet(false)
                    .objects(vec![
                        ObjectIdentifier::builder().key("a.txt").build(),
                        ObjectIdentifier::builder().key("b.txt").version_id("v2").build(),
                    ])
                    .build(),
            )
            .build();
        let delete = request.delete().expect("delete staged");
        assert_eq!(delete.quiet(), Some(false));
        assert_eq!(delete.objects().map(<[ObjectIdentifier]>::len), Some(2));

        let output = DeleteObjectsOutput::builder()
            .deleted(vec![DeletedObject::builder().key("a.txt").build()])
            .errors(vec![
                Error::builder()
                    .key("b.txt")
                    .version_id("v2")
                    .code("AccessDenied")
                    .message("Access Denied")
                    .build(),
            ])
            .request_charged(RequestCharged::from_raw("requester"))
            .build();

        assert_eq!(output.deleted().map(|d| d[0].key()), Some("a.txt"));
        assert_eq!(output.deleted().and_then(|d| d[0].delete_marker()), None);
        let error = &output.errors().expect("errors present")[0];
        assert_eq!(error.code(), "AccessDenied");
        assert_eq!(error.version_id(), "v2");
        assert_eq!(output.request_charged(), Some(RequestCharged::Requester));
    }

    #[test]
    fn test_should_configure_default_bucket_encryption() {
        let by_default = ServerSideEncryptionByDefault::builder()
            .sse_algorithm("aws:kms")
            .kms_master_key_id("alias/logs")
            .build();
        let request = PutBucketEncryptionRequest::builder()
            .bucket("logs")
            .server_side_encryption_configuration(
                ServerSideEncryptionConfiguration::builder()
                    .rules(vec![
                        ServerSideEncryptionRule::builder()
                            .apply_server_side_encryption_by_default(by_default.clone())
                            .bucket_key_enabled(true)
                            .build(),
                    ])
                    .build(),
            )
            .build();

        let rule = &request
            .server_side_encryption_configuration()
            .and_then(ServerSideEncryptionConfiguration::rules)
            .expect("rules staged")[0];
        assert_eq!(rule.apply_server_side_encryption_by_default(), Some(&by_default));
        assert_eq!(
            by_default.sse_algorithm().as_ref().map(ToString::to_string),
            Some("aws:kms".to_owned())
        );
        assert_eq!(by_default.sse_algorithm(), Some(ServerSideEncryption::AwsKms));
        assert_eq!(rule.bucket_key_enabled(), Some(true));
    }
}
