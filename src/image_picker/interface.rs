use std::path::PathBuf;

use thiserror::Error;

/// Labels applied to an upload when the picked file carries no usable metadata.
pub const FALLBACK_MIME_TYPE: &str = "image/jpeg";
pub const FALLBACK_FILE_NAME: &str = "upload.jpg";

/// Handle to a photo chosen from the system library. Replaced wholesale on
/// each new selection, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub mime_type: String,
    pub file_name: String,
}

impl SelectedImage {
    pub fn from_path(path: PathBuf) -> Self {
        let mime_type = mime_guess::from_path(&path)
            .first()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string());

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

        Self {
            path,
            mime_type,
            file_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("image picker failed: {0}")]
    Picker(String),
}

pub trait ImagePicker {
    /// `Ok(None)` means the user dismissed the dialog.
    fn pick(&self) -> Result<Option<SelectedImage>, PickError>;
}
