use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;

/// Thin wrapper over the bucket uploaded media lives in.
#[derive(Clone)]
pub struct ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_url: String,
}

impl ObjectStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_url: String) -> Self {
        Self {
            client,
            bucket,
            public_url,
        }
    }

    /// Uploads `body` under `key` and returns its public URL.
    pub async fn put(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("upload of {key} failed: {e}")))?;

        info!("Uploaded s3://{}/{}", self.bucket, key);
        Ok(public_url(&self.public_url, key))
    }

    /// Best-effort removal; failures are logged, not returned.
    pub async fn remove(&self, key: &str) {
        if let Err(e) = self
            .client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            warn!("Failed to delete s3://{}/{}: {e}", self.bucket, key);
        }
    }
}

pub fn public_url(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key)
}

/// File extension for an uploaded image, preferring the declared content type.
pub fn image_extension(content_type: &str, file_name: Option<&str>) -> Option<&'static str> {
    let from_mime = match content_type.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        "image/heic" => Some("heic"),
        "image/heif" => Some("heif"),
        _ => None,
    };
    from_mime.or_else(|| {
        let ext = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some("jpg"),
            "png" => Some("png"),
            "webp" => Some("webp"),
            "gif" => Some("gif"),
            "heic" => Some("heic"),
            "heif" => Some("heif"),
            _ => None,
        }
    })
}

/// `{prefix}/{owner}/{random}.{ext}`
pub fn object_key(prefix: &str, owner: Uuid, extension: &str) -> String {
    format!("{prefix}/{owner}/{}.{extension}", Uuid::new_v4())
}
