use tracing::debug;

use crate::image_picker::interface::{ImagePicker, PickError, SelectedImage};

pub struct ImagePickerRfd {}

impl ImagePickerRfd {
    pub fn new() -> Self {
        Self {}
    }
}

impl ImagePicker for ImagePickerRfd {
    fn pick(&self) -> Result<Option<SelectedImage>, PickError> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Select a photo")
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file()
        else {
            debug!("image selection dismissed");
            return Ok(None);
        };

        if let Err(err) = std::fs::metadata(&path) {
            return Err(PickError::Picker(format!(
                "selected file {} is not readable: {err}",
                path.display()
            )));
        }

        let image = SelectedImage::from_path(path);
        debug!(
            file_name = %image.file_name,
            mime_type = %image.mime_type,
            "image selected"
        );

        Ok(Some(image))
    }
}
