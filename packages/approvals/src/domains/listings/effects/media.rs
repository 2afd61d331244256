//! Media storage for listings.
//!
//! Uploads are validated here, but a media change still never publishes
//! on its own: the diff gates the `media` field to admin review
//! regardless of what was uploaded.

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use crate::common::ListingId;
use crate::kernel::deps::ServiceDeps;

/// File extensions accepted for listing media (images and short video).
const ALLOWED_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "webp", "gif", "mp4", "mov"];

/// Maximum upload size in bytes (25 MB).
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Store one media file for a listing and return its public URL.
///
/// Keys are namespaced per listing and prefixed with a fresh UUID so
/// re-uploading the same file name never overwrites an earlier object.
pub async fn store_listing_media(
    listing_id: ListingId,
    file_name: &str,
    bytes: Vec<u8>,
    deps: &ServiceDeps,
) -> Result<String> {
    if bytes.is_empty() {
        bail!("Media upload is empty: {}", file_name);
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        bail!(
            "Media upload exceeds {} MB: {}",
            MAX_UPLOAD_BYTES / (1024 * 1024),
            file_name
        );
    }

    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        bail!("Unsupported media type: {}", file_name);
    }

    let key = format!(
        "listings/{}/{}-{}",
        listing_id,
        Uuid::new_v4(),
        sanitize_file_name(file_name)
    );
    let content_type = content_type_for(&extension);

    let url = deps
        .blobs
        .put_object(&key, bytes, content_type)
        .await
        .context("Failed to store media object")?;

    tracing::info!("Stored media {} for listing {}", key, listing_id);
    Ok(url)
}

/// Remove a previously stored media object.
///
/// Only keys under the listing media prefix can be deleted through this
/// path.
pub async fn delete_listing_media(key: &str, deps: &ServiceDeps) -> Result<()> {
    if !key.starts_with("listings/") {
        bail!("Refusing to delete non-media key: {}", key);
    }

    deps.blobs
        .delete_object(key)
        .await
        .context("Failed to delete media object")?;

    tracing::info!("Deleted media object {}", key);
    Ok(())
}

/// Keep file names safe to embed in object keys and URLs.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}
