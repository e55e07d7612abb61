//! Structure contract over every request structure.

#[cfg(test)]
mod tests {
    use s3crt_model::input::{
        AbortMultipartUploadRequest, CompleteMultipartUploadRequest, CopyObjectRequest,
        CreateBucketRequest, CreateMultipartUploadRequest, DeleteBucketCorsRequest,
        DeleteBucketInventoryConfigurationRequest, DeleteBucketMetricsConfigurationRequest,
        DeleteBucketRequest, DeleteObjectRequest, DeleteObjectTaggingRequest, DeleteObjectsRequest,
        DeletePublicAccessBlockRequest, GetBucketAccelerateConfigurationRequest,
        GetBucketAnalyticsConfigurationRequest, GetBucketInventoryConfigurationRequest,
        GetBucketLocationRequest, GetBucketMetricsConfigurationRequest, GetBucketVersioningRequest,
        GetBucketWebsiteRequest, GetObjectAclRequest, GetObjectRequest, GetObjectRetentionRequest,
        GetObjectTorrentRequest, HeadBucketRequest, HeadObjectRequest,
        ListBucketAnalyticsConfigurationsRequest, ListBucketIntelligentTieringConfigurationsRequest,
        ListBucketInventoryConfigurationsRequest, ListBucketMetricsConfigurationsRequest,
        ListMultipartUploadsRequest, ListObjectVersionsRequest, ListObjectsRequest,
        ListObjectsV2Request, ListPartsRequest, PutBucketAccelerateConfigurationRequest,
        PutBucketAclRequest, PutBucketAnalyticsConfigurationRequest, PutBucketCorsRequest,
        PutBucketEncryptionRequest, PutBucketIntelligentTieringConfigurationRequest,
        PutBucketInventoryConfigurationRequest, PutBucketLifecycleConfigurationRequest,
        PutBucketLoggingRequest, PutBucketMetricsConfigurationRequest,
        PutBucketNotificationConfigurationRequest, PutBucketOwnershipControlsRequest,
        PutBucketPolicyRequest, PutBucketReplicationRequest, PutBucketRequestPaymentRequest,
        PutBucketTaggingRequest, PutBucketVersioningRequest, PutBucketWebsiteRequest,
        PutObjectAclRequest, PutObjectLegalHoldRequest, PutObjectLockConfigurationRequest,
        PutObjectRequest, PutObjectRetentionRequest, PutObjectTaggingRequest,
        PutPublicAccessBlockRequest, RestoreObjectRequest, SelectObjectContentRequest,
        UploadPartCopyRequest, UploadPartRequest,
    };
    use s3crt_model::types::HttpHeader;

    #[test]
    fn test_should_honor_structure_contract_for_bucket_requests() {
        let checked = check_structures!(
            CreateBucketRequest,
            DeleteBucketRequest,
            GetBucketLocationRequest,
            HeadBucketRequest,
        );
        assert_eq!(checked, 4);
    }

    #[test]
    fn test_should_honor_structure_contract_for_config_requests() {
        let checked = check_structures!(
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
        );
        assert_eq!(checked, 41);
    }

    #[test]
    fn test_should_honor_structure_contract_for_list_requests() {
        let checked = check_structures!(
            ListObjectVersionsRequest,
            ListObjectsRequest,
            ListObjectsV2Request,
        );
        assert_eq!(checked, 3);
    }

    #[test]
    fn test_should_honor_structure_contract_for_multipart_requests() {
        let checked = check_structures!(
            AbortMultipartUploadRequest,
            CompleteMultipartUploadRequest,
            CreateMultipartUploadRequest,
            ListMultipartUploadsRequest,
            ListPartsRequest,
            UploadPartCopyRequest,
            UploadPartRequest,
        );
        assert_eq!(checked, 7);
    }

    #[test]
    fn test_should_honor_structure_contract_for_object_requests() {
        let checked = check_structures!(
            CopyObjectRequest,
            DeleteObjectRequest,
            DeleteObjectsRequest,
            GetObjectRequest,
            GetObjectTorrentRequest,
            HeadObjectRequest,
            PutObjectRequest,
            RestoreObjectRequest,
            SelectObjectContentRequest,
        );
        assert_eq!(checked, 9);
    }

    macro_rules! assert_request_extras {
        ($($request:ty),+ $(,)?) => {{
            let mut count = 0_usize;
            $(
                let request = <$request>::builder()
                    .custom_headers(headers())
                    .custom_query_parameters(QUERY)
                    .build();
                assert_eq!(request.custom_query_parameters(), QUERY, stringify!($request));
                assert_eq!(
                    request.custom_headers(),
                    Some(headers().as_slice()),
                    stringify!($request)
                );
                assert_eq!(<$request>::default().custom_query_parameters(), "");
                assert!(<$request>::default().custom_headers().is_none());
                count += 1;
            )+
            count
        }};
    }

    const QUERY: &str = "x-id=Check&a=1&a=2";

    fn headers() -> Vec<HttpHeader> {
        vec![
            HttpHeader::builder().name("x-amz-meta-a").value("1").build(),
            HttpHeader::builder().name("x-amz-meta-a").value("2").build(),
        ]
    }

    #[test]
    fn test_should_give_every_request_custom_headers_and_query_string() {
        let checked = assert_request_extras!(
            AbortMultipartUploadRequest,
            CompleteMultipartUploadRequest,
            CopyObjectRequest,
            CreateBucketRequest,
            CreateMultipartUploadRequest,
            DeleteBucketCorsRequest,
            DeleteBucketInventoryConfigurationRequest,
            DeleteBucketMetricsConfigurationRequest,
            DeleteBucketRequest,
            DeleteObjectRequest,
            DeleteObjectTaggingRequest,
            DeleteObjectsRequest,
            DeletePublicAccessBlockRequest,
            GetBucketAccelerateConfigurationRequest,
            GetBucketAnalyticsConfigurationRequest,
            GetBucketInventoryConfigurationRequest,
            GetBucketLocationRequest,
            GetBucketMetricsConfigurationRequest,
            GetBucketVersioningRequest,
            GetBucketWebsiteRequest,
            GetObjectAclRequest,
            GetObjectRequest,
            GetObjectRetentionRequest,
            GetObjectTorrentRequest,
            HeadBucketRequest,
            HeadObjectRequest,
            ListBucketAnalyticsConfigurationsRequest,
            ListBucketIntelligentTieringConfigurationsRequest,
            ListBucketInventoryConfigurationsRequest,
            ListBucketMetricsConfigurationsRequest,
            ListMultipartUploadsRequest,
            ListObjectVersionsRequest,
            ListObjectsRequest,
            ListObjectsV2Request,
            ListPartsRequest,
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
            PutObjectRequest,
            PutObjectRetentionRequest,
            PutObjectTaggingRequest,
            PutPublicAccessBlockRequest,
            RestoreObjectRequest,
            SelectObjectContentRequest,
            UploadPartCopyRequest,
            UploadPartRequest,
        );
        assert_eq!(checked, 64);
    }
}
