use std::sync::{Arc, Mutex};

use crate::device_display::interface::{DeviceDisplay, DisplayError, ViewFrame};
use crate::photo_grader::core::{Model, UploadPhase};

pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Pure projection of the model onto one screen frame.
pub fn view(model: &Model) -> ViewFrame {
    let mut frame = ViewFrame {
        notice: model.notice.clone(),
        ..ViewFrame::default()
    };

    match &model.phase {
        UploadPhase::Idle => {}
        UploadPhase::Uploading { image, .. } => {
            frame.preview = Some(image.path.clone());
            frame.busy = true;
        }
        UploadPhase::Succeeded { image, result } => {
            frame.preview = Some(image.path.clone());
            frame.headline = Some(format!(
                "{} ({})",
                result.predicted_class,
                format_percent(result.predicted_probability)
            ));
            frame.breakdown = result
                .all_predictions
                .iter()
                .map(|entry| {
                    format!(
                        "{}: {}",
                        entry.class_name,
                        format_percent(entry.probability)
                    )
                })
                .collect();
        }
        UploadPhase::Failed { image, message } => {
            frame.preview = Some(image.path.clone());
            frame.error = Some(message.clone());
        }
    }

    frame
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, model: &Model) -> Result<(), DisplayError> {
        self.device_display.lock().unwrap().show(&view(model))
    }
}
