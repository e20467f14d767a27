use std::collections::VecDeque;
use std::sync::Mutex;

use crate::image_picker::interface::{ImagePicker, PickError, SelectedImage};

/// Plays back a scripted sequence of selections; once the script runs out,
/// every further pick behaves as a dismissed dialog.
pub struct ImagePickerFake {
    script: Mutex<VecDeque<Result<Option<SelectedImage>, PickError>>>,
}

impl ImagePickerFake {
    pub fn new(script: Vec<Result<Option<SelectedImage>, PickError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

impl ImagePicker for ImagePickerFake {
    fn pick(&self) -> Result<Option<SelectedImage>, PickError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }
}
