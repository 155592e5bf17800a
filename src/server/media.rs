//! Storage paths and persistence for uploaded media assets.
//!
//! Uploaded files land under a per-entity-type directory with a name built
//! from a slugified label and a random unique suffix, e.g.
//! `uploads/airplanes_media_files/boeing-747-1f0c.../.png`-style paths.

use std::path::Path;

use uuid::Uuid;

use crate::server::error::AppError;

/// Media directory for airplane images.
pub const AIRPLANE_MEDIA_DIR: &str = "airplanes_media_files";

/// Maximum number of label characters carried into the slug.
const SLUG_MAX_LEN: usize = 50;

/// Lowercases the label and collapses every non-alphanumeric run into a
/// single hyphen.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut last_was_hyphen = true; // suppress leading hyphen

    for c in label.chars().take(SLUG_MAX_LEN) {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Builds the storage path for an uploaded asset: slugified label plus a
/// random unique suffix, under the given per-entity-type directory.
///
/// # Arguments
/// - `media_dir` - Per-entity-type directory, e.g. `airplanes_media_files`
/// - `label` - Human-readable label of the owning record
/// - `extension` - File extension including the leading dot, or empty
pub fn create_media_path(media_dir: &str, label: &str, extension: &str) -> String {
    format!(
        "uploads/{}/{}-{}{}",
        media_dir,
        slugify(label),
        Uuid::new_v4(),
        extension
    )
}

/// Writes asset bytes under the media root, creating directories as needed.
pub async fn store(media_root: &Path, relative_path: &str, data: &[u8]) -> Result<(), AppError> {
    let full_path = media_root.join(relative_path);

    if let Some(parent) = full_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&full_path, data).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_mixed_labels() {
        assert_eq!(slugify("Boeing 747"), "boeing-747");
        assert_eq!(slugify("  Airbus / A320 neo "), "airbus-a320-neo");
        assert_eq!(slugify("___"), "");
    }

    #[test]
    fn truncates_long_labels() {
        let label = "x".repeat(200);
        assert_eq!(slugify(&label).len(), 50);
    }

    #[test]
    fn media_path_is_unique_per_call() {
        let a = create_media_path(AIRPLANE_MEDIA_DIR, "Boeing 747", ".png");
        let b = create_media_path(AIRPLANE_MEDIA_DIR, "Boeing 747", ".png");

        assert!(a.starts_with("uploads/airplanes_media_files/boeing-747-"));
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);
    }
}
