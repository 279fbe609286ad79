//! S3 publisher: bridges the [`Publisher`] trait to the AWS S3 client.
//!
//! [`S3Publisher`] holds the destination bucket and a shared SDK client;
//! credentials and region come from the default AWS provider chain
//! (environment, profile, instance role). Bucket lifecycle and permissions
//! are the operator's concern.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{error, info};

use rmm_report_core::contract::{PublishError, Publisher};

pub struct S3Publisher {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Publisher {
    /// Construct a publisher for `bucket` using the default AWS configuration.
    pub async fn new_from_env(bucket: String) -> Self {
        let shared_config =
            aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        info!(bucket = %bucket, "Initialized S3 publisher");
        Self {
            client: aws_sdk_s3::Client::new(&shared_config),
            bucket,
        }
    }
}

#[async_trait]
impl Publisher for S3Publisher {
    async fn put_object(&self, key: &str, body: Vec<u8>) -> Result<(), PublishError> {
        info!(bucket = %self.bucket, key = %key, bytes = body.len(), "Uploading report object");
        match self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
        {
            Ok(_) => {
                info!(bucket = %self.bucket, key = %key, "Successfully uploaded report object");
                Ok(())
            }
            Err(e) => {
                error!(error = ?e, bucket = %self.bucket, key = %key, "Failed to upload report object");
                Err(format!("S3 put_object failed: {e:?}").into())
            }
        }
    }
}
