//! # Filesystem-backed avatar storage
//!
//! Replaces the hosted object-storage bucket with a directory of user-scoped
//! files served statically by the web binary.
//!
//! ## Layout
//!
//! ```text
//! <AVATAR_DIR>/
//! └── <user_id>/
//!     └── avatar.<ext>
//! ```
//!
//! Uploads overwrite in place (bucket-style upsert). [`public_url`] maps a
//! stored file to the `/uploads/...` path the web server exposes.

use std::path::{Path, PathBuf};

/// Errors from the avatar store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Base directory for stored avatars. `AVATAR_DIR` env var, default `uploads`.
pub fn base_dir() -> PathBuf {
    std::env::var("AVATAR_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("uploads"))
}

fn avatar_path(base: &Path, user_id: &str, ext: &str) -> PathBuf {
    base.join(user_id).join(format!("avatar.{ext}"))
}

/// Store avatar bytes for a user, replacing any previous avatar. Returns the
/// public URL path of the stored file.
pub fn store_avatar(
    base: &Path,
    user_id: &str,
    ext: &str,
    data: &[u8],
) -> Result<String, StorageError> {
    let ext = ext.to_ascii_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(StorageError::UnsupportedType(ext));
    }

    let path = avatar_path(base, user_id, &ext);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // A previous avatar may have a different extension; clear the scope first
    // so at most one avatar file exists per user.
    if let Some(parent) = path.parent() {
        if let Ok(entries) = std::fs::read_dir(parent) {
            for entry in entries.flatten() {
                let _ = std::fs::remove_file(entry.path());
            }
        }
    }

    std::fs::write(&path, data)?;
    Ok(public_url(user_id, &ext))
}

/// Public URL path for a stored avatar, as served by the web binary.
pub fn public_url(user_id: &str, ext: &str) -> String {
    format!("/uploads/{user_id}/avatar.{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_replace_avatar() {
        let dir = std::env::temp_dir().join(format!("baraka_avatar_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let url = store_avatar(&dir, "user-1", "png", b"png-bytes").unwrap();
        assert_eq!(url, "/uploads/user-1/avatar.png");
        assert_eq!(std::fs::read(dir.join("user-1/avatar.png")).unwrap(), b"png-bytes");

        // Re-upload with a different extension replaces the old file.
        let url = store_avatar(&dir, "user-1", "jpg", b"jpg-bytes").unwrap();
        assert_eq!(url, "/uploads/user-1/avatar.jpg");
        assert!(!dir.join("user-1/avatar.png").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            store_avatar(&dir, "user-1", "svg", b"<svg/>"),
            Err(StorageError::UnsupportedType(_))
        ));
    }
}
