use rand::Rng;

use crate::image_classifier::interface::{
    ClassProbability, ClassifyError, ImageClassifier, Prediction,
};
use crate::image_picker::interface::SelectedImage;

/// Grade labels served by the remote carcass-grading model.
const GRADES: [&str; 5] = ["1++", "1+", "1", "2", "3"];

pub struct ImageClassifierFake {}

impl ImageClassifierFake {
    pub fn new() -> Self {
        Self {}
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, _image: &SelectedImage) -> Result<Prediction, ClassifyError> {
        let mut rng = rand::rng();

        let weights: Vec<f64> = GRADES
            .iter()
            .map(|_| rng.random_range(0.05..1.0))
            .collect();
        let total: f64 = weights.iter().sum();

        let all_predictions: Vec<ClassProbability> = GRADES
            .iter()
            .zip(&weights)
            .map(|(grade, weight)| ClassProbability {
                class_name: (*grade).to_string(),
                probability: weight / total,
            })
            .collect();

        let top = all_predictions
            .iter()
            .max_by(|a, b| a.probability.total_cmp(&b.probability))
            .cloned()
            .ok_or_else(|| ClassifyError::MalformedResponse("no grades configured".to_string()))?;

        std::thread::sleep(std::time::Duration::from_secs(1));

        Ok(Prediction {
            predicted_class: top.class_name,
            predicted_probability: top.probability,
            all_predictions,
        })
    }
}
