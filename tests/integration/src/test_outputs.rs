//! Structure contract over every output structure.

#[cfg(test)]
mod tests {
    use s3crt_model::output::{
        AbortMultipartUploadOutput, CompleteMultipartUploadOutput, CopyObjectOutput,
        CreateBucketOutput, CreateMultipartUploadOutput, DeleteObjectOutput,
        DeleteObjectTaggingOutput, DeleteObjectsOutput, GetBucketAccelerateConfigurationOutput,
        GetBucketAnalyticsConfigurationOutput, GetBucketInventoryConfigurationOutput,
        GetBucketLocationOutput, GetBucketMetricsConfigurationOutput, GetBucketVersioningOutput,
        GetBucketWebsiteOutput, GetObjectAclOutput, GetObjectOutput, GetObjectRetentionOutput,
        GetObjectTorrentOutput, HeadObjectOutput, ListBucketAnalyticsConfigurationsOutput,
        ListBucketIntelligentTieringConfigurationsOutput, ListBucketInventoryConfigurationsOutput,
        ListBucketMetricsConfigurationsOutput, ListBucketsOutput, ListMultipartUploadsOutput,
        ListObjectVersionsOutput, ListObjectsOutput, ListObjectsV2Output, ListPartsOutput,
        PutObjectAclOutput, PutObjectLegalHoldOutput, PutObjectLockConfigurationOutput,
        PutObjectOutput, PutObjectRetentionOutput, PutObjectTaggingOutput, RestoreObjectOutput,
        UploadPartCopyOutput, UploadPartOutput,
    };

    #[test]
    fn test_should_honor_structure_contract_for_bucket_outputs() {
        let checked = check_structures!(
            CreateBucketOutput,
            GetBucketLocationOutput,
            ListBucketsOutput,
        );
        assert_eq!(checked, 3);
    }

    #[test]
    fn test_should_honor_structure_contract_for_config_outputs() {
        let checked = check_structures!(
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
        );
        assert_eq!(checked, 18);
    }

    #[test]
    fn test_should_honor_structure_contract_for_list_outputs() {
        let checked = check_structures!(
            ListObjectVersionsOutput,
            ListObjectsOutput,
            ListObjectsV2Output,
        );
        assert_eq!(checked, 3);
    }

    #[test]
    fn test_should_honor_structure_contract_for_multipart_outputs() {
        let checked = check_structures!(
            AbortMultipartUploadOutput,
            CompleteMultipartUploadOutput,
            CreateMultipartUploadOutput,
            ListMultipartUploadsOutput,
            ListPartsOutput,
            UploadPartCopyOutput,
            UploadPartOutput,
        );
        assert_eq!(checked, 7);
    }

    #[test]
    fn test_should_honor_structure_contract_for_object_outputs() {
        let checked = check_structures!(
            CopyObjectOutput,
            DeleteObjectOutput,
            DeleteObjectsOutput,
            GetObjectOutput,
            GetObjectTorrentOutput,
            HeadObjectOutput,
            PutObjectOutput,
            RestoreObjectOutput,
        );
        assert_eq!(checked, 8);
    }
}
