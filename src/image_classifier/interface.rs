use thiserror::Error;

use crate::image_picker::interface::SelectedImage;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassProbability {
    pub class_name: String,
    pub probability: f64,
}

/// Classification returned by the remote model. Built only from a validated
/// response body; every probability is in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub predicted_class: String,
    pub predicted_probability: f64,
    pub all_predictions: Vec<ClassProbability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Network failure, timeout, or a non-2xx status. Uniform, not retried.
    #[error("upload failed: {0}")]
    Transport(String),
    /// A 2xx response whose body does not match the prediction shape.
    #[error("unexpected response from server: {0}")]
    MalformedResponse(String),
}

pub trait ImageClassifier {
    fn classify(&self, image: &SelectedImage) -> Result<Prediction, ClassifyError>;
}
