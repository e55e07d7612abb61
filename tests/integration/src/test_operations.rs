//! Operation catalogue consistency against the generated structures.

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use s3crt_model::{S3Operation, Structure, input, output};

    /// Map each listed structure's shape name to its category.
    macro_rules! shape_categories {
        ($module:ident { $($category:ident => [$($ty:ident),* $(,)?]),* $(,)? }) => {{
            let mut shapes = BTreeMap::new();
            $($(
                shapes.insert(<$module::$ty as Structure>::SHAPE, stringify!($category));
            )*)*
            shapes
        }};
    }

    fn request_categories() -> BTreeMap<&'static str, &'static str> {
        shape_categories!(input {
            bucket => [
                CreateBucketRequest,
                DeleteBucketRequest,
                GetBucketLocationRequest,
                HeadBucketRequest,
            ],
            config => [
                DeleteBucketCorsRequest,
                DeleteBucketInventoryConfigurationRequest,
                DeleteBucketMetricsConfigurationRequest,
                DeleteObjectTaggingRequest,
                DeletePublicAccessBlockRequest,
                GetBucketAccelerateConfigurationRequest,
                GetBucketAnalyticsConfigurationRequest,
                GetBucketInventoryConfigurationRequest,
                GetBucketMetricsConfigurationRequest,
                GetBucketVersioningRequest,
                GetBucketWebsiteRequest,
                GetObjectAclRequest,
                GetObjectRetentionRequest,
                ListBucketAnalyticsConfigurationsRequest,
                ListBucketIntelligentTieringConfigurationsRequest,
                ListBucketInventoryConfigurationsRequest,
                ListBucketMetricsConfigurationsRequest,
                PutBucketAccelerateConfigurationRequest,
                PutBucketAclRequest,
                PutBucketAnalyticsConfigurationRequest,
                PutBucketCorsRequest,
                PutBucketEncryptionRequest,
                PutBucketIntelligentTieringConfigurationRequest,
                PutBucketInventoryConfigurationRequest,
                PutBucketLifecycleConfigurationRequest,
                PutBucketLoggingRequest,
                PutBucketMetricsConfigurationRequest,
                PutBucketNotificationConfigurationRequest,
                PutBucketOwnershipControlsRequest,
                PutBucketPolicyRequest,
                PutBucketReplicationRequest,
                PutBucketRequestPaymentRequest,
                PutBucketTaggingRequest,
                PutBucketVersioningRequest,
                PutBucketWebsiteRequest,
                PutObjectAclRequest,
                PutObjectLegalHoldRequest,
                PutObjectLockConfigurationRequest,
                PutObjectRetentionRequest,
                PutObjectTaggingRequest,
                PutPublicAccessBlockRequest,
            ],
            list => [
                ListObjectVersionsRequest,
                ListObjectsRequest,
                ListObjectsV2Request,
            ],
            multipart => [
                AbortMultipartUploadRequest,
                CompleteMultipartUploadRequest,
                CreateMultipartUploadRequest,
                ListMultipartUploadsRequest,
                ListPartsRequest,
                UploadPartCopyRequest,
                UploadPartRequest,
            ],
            object => [
                CopyObjectRequest,
                DeleteObjectRequest,
                DeleteObjectsRequest,
                GetObjectRequest,
                GetObjectTorrentRequest,
                HeadObjectRequest,
                PutObjectRequest,
                RestoreObjectRequest,
                SelectObjectContentRequest,
            ],
        })
    }

    fn output_categories() -> BTreeMap<&'static str, &'static str> {
        shape_categories!(output {
            bucket => [
                CreateBucketOutput,
                GetBucketLocationOutput,
                ListBucketsOutput,
            ],
            config => [
                DeleteObjectTaggingOutput,
                GetBucketAccelerateConfigurationOutput,
                GetBucketAnalyticsConfigurationOutput,
                GetBucketInventoryConfigurationOutput,
                GetBucketMetricsConfigurationOutput,
                GetBucketVersioningOutput,
                GetBucketWebsiteOutput,
                GetObjectAclOutput,
                GetObjectRetentionOutput,
                ListBucketAnalyticsConfigurationsOutput,
                ListBucketIntelligentTieringConfigurationsOutput,
                ListBucketInventoryConfigurationsOutput,
                ListBucketMetricsConfigurationsOutput,
                PutObjectAclOutput,
                PutObjectLegalHoldOutput,
                PutObjectLockConfigurationOutput,
                PutObjectRetentionOutput,
                PutObjectTaggingOutput,
            ],
            list => [
                ListObjectVersionsOutput,
                ListObjectsOutput,
                ListObjectsV2Output,
            ],
            multipart => [
                AbortMultipartUploadOutput,
                CompleteMultipartUploadOutput,
                CreateMultipartUploadOutput,
                ListMultipartUploadsOutput,
                ListPartsOutput,
                UploadPartCopyOutput,
                UploadPartOutput,
            ],
            object => [
                CopyObjectOutput,
                DeleteObjectOutput,
                DeleteObjectsOutput,
                GetObjectOutput,
                GetObjectTorrentOutput,
                HeadObjectOutput,
                PutObjectOutput,
                RestoreObjectOutput,
            ],
        })
    }

    #[test]
    fn test_should_resolve_every_request_shape_in_its_category() {
        let requests = request_categories();
        let mut referenced = BTreeSet::new();
        for op in S3Operation::ALL {
            if let Some(shape) = op.request_shape() {
                assert_eq!(requests.get(shape), Some(&op.category()), "{op}: {shape}");
                referenced.insert(shape);
            }
        }
        let generated: BTreeSet<_> = requests.keys().copied().collect();
        assert_eq!(referenced, generated);
    }

    #[test]
    fn test_should_resolve_every_output_shape_in_its_category() {
        let outputs = output_categories();
        let mut referenced = BTreeSet::new();
        for op in S3Operation::ALL {
            if let Some(shape) = op.output_shape() {
                assert_eq!(outputs.get(shape), Some(&op.category()), "{op}: {shape}");
                referenced.insert(shape);
            }
        }
        let generated: BTreeSet<_> = outputs.keys().copied().collect();
        assert_eq!(referenced, generated);
    }

    #[test]
    fn test_should_round_trip_operation_names() {
        for op in S3Operation::ALL {
            assert_eq!(S3Operation::from_name(op.as_str()), Some(*op));
            assert_eq!(op.to_string(), op.as_str());
        }
        assert_eq!(S3Operation::from_name("listobjectsv2"), None);
        assert_eq!(S3Operation::from_name(""), None);
    }

    #[test]
    fn test_should_group_operations_by_category() {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for op in S3Operation::ALL {
            *counts.entry(op.category()).or_default() += 1;
        }
        let expected = BTreeMap::from([
            ("bucket", 5),
            ("config", 41),
            ("list", 3),
            ("multipart", 7),
            ("object", 9),
        ]);
        assert_eq!(counts, expected);
        assert_eq!(S3Operation::ALL.len(), 65);
    }

    #[test]
    fn test_should_leave_unit_payloads_without_shapes() {
        assert_eq!(S3Operation::ListBuckets.request_shape(), None);
        assert_eq!(S3Operation::ListBuckets.output_shape(), Some("ListBucketsOutput"));
        assert_eq!(S3Operation::DeleteBucket.output_shape(), None);
        assert_eq!(
            S3Operation::DeleteBucket.request_shape(),
            Some(<input::DeleteBucketRequest as Structure>::SHAPE)
        );
    }
}
