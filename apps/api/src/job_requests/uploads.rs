use axum::extract::Multipart;
use bytes::Bytes;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::job_requests::create::CreateJobRequest;
use crate::storage::{image_extension, object_key, ObjectStore};

pub const MAX_IMAGES: usize = 10;
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;
const KEY_PREFIX: &str = "job-requests";

#[derive(Debug)]
pub struct PendingImage {
    pub content_type: String,
    pub extension: &'static str,
    pub data: Bytes,
}

#[derive(Debug)]
pub struct JobRequestForm {
    pub payload: CreateJobRequest,
    pub images: Vec<PendingImage>,
}

/// Validates one uploaded part as an image.
pub fn pending_image(
    content_type: Option<&str>,
    file_name: Option<&str>,
    data: Bytes,
) -> Result<PendingImage, AppError> {
    let content_type = content_type.unwrap_or("application/octet-stream");
    let extension = image_extension(content_type, file_name).ok_or_else(|| {
        AppError::Validation(format!(
            "Unsupported image type '{content_type}' for {}",
            file_name.unwrap_or("upload")
        ))
    })?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded image is empty".to_string()));
    }
    let content_type = if content_type.starts_with("image/") {
        content_type.to_string()
    } else {
        format!("image/{extension}")
    };
    Ok(PendingImage {
        content_type,
        extension,
        data,
    })
}

/// Reads the `payload` JSON part and every `images` part. Unknown parts are ignored.
pub async fn read_form(mut multipart: Multipart) -> Result<JobRequestForm, AppError> {
    let mut payload: Option<CreateJobRequest> = None;
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("payload") => {
                let text = field.text().await?;
                let parsed = serde_json::from_str(&text).map_err(|e| {
                    AppError::Validation(format!("payload is not valid JSON: {e}"))
                })?;
                payload = Some(parsed);
            }
            Some("images") | Some("images[]") => {
                if images.len() == MAX_IMAGES {
                    return Err(AppError::Validation(format!(
                        "At most {MAX_IMAGES} images can be attached"
                    )));
                }
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let data = field.bytes().await?;
                images.push(pending_image(
                    content_type.as_deref(),
                    file_name.as_deref(),
                    data,
                )?);
            }
            _ => {}
        }
    }

    let payload =
        payload.ok_or_else(|| AppError::Validation("payload is required".to_string()))?;
    Ok(JobRequestForm { payload, images })
}

/// Uploads every image. On failure, already-uploaded objects are removed.
/// Returns `(key, public_url)` pairs in upload order.
pub async fn upload_images(
    store: &ObjectStore,
    owner: Uuid,
    images: Vec<PendingImage>,
) -> Result<Vec<(String, String)>, AppError> {
    let mut uploaded: Vec<(String, String)> = Vec::with_capacity(images.len());
    for image in images {
        let key = object_key(KEY_PREFIX, owner, image.extension);
        match store.put(&key, image.data, &image.content_type).await {
            Ok(url) => uploaded.push((key, url)),
            Err(e) => {
                warn!("Image upload failed, rolling back {} uploads", uploaded.len());
                remove_all(store, &uploaded).await;
                return Err(e);
            }
        }
    }
    Ok(uploaded)
}

pub async fn remove_all(store: &ObjectStore, uploaded: &[(String, String)]) {
    for (key, _) in uploaded {
        store.remove(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_declared_image() {
        let image =
            pending_image(Some("image/png"), Some("a.png"), Bytes::from_static(b"x")).unwrap();
        assert_eq!(image.extension, "png");
        assert_eq!(image.content_type, "image/png");
    }

    #[test]
    fn test_octet_stream_with_heic_name_gets_image_type() {
        let image = pending_image(
            Some("application/octet-stream"),
            Some("IMG_1.heic"),
            Bytes::from_static(b"x"),
        )
        .unwrap();
        assert_eq!(image.content_type, "image/heic");
    }

    #[test]
    fn test_rejects_non_image() {
        let err = pending_image(Some("application/pdf"), Some("a.pdf"), Bytes::from_static(b"x"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_empty_file() {
        assert!(pending_image(Some("image/jpeg"), None, Bytes::new()).is_err());
    }
}
