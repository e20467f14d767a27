use std::time::Duration;

use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::image_classifier::interface::{
    ClassProbability, ClassifyError, ImageClassifier, Prediction,
};
use crate::image_picker::interface::SelectedImage;

const PREDICT_PATH: &str = "/predict/";

pub struct ImageClassifierHttp {
    http: Client,
    server_url: String,
}

impl ImageClassifierHttp {
    pub fn new(server_url: impl Into<String>, request_timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(request_timeout).build()?;

        Ok(Self {
            http,
            server_url: server_url.into(),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), PREDICT_PATH)
    }
}

/// Wire shape of a successful prediction. Stays private to this module; the
/// rest of the crate only ever sees the validated `Prediction`.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    predicted_class: String,
    predicted_probability: f64,
    all_predictions: Vec<PredictionEntry>,
}

#[derive(Debug, Deserialize)]
struct PredictionEntry {
    class: String,
    probability: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

fn into_prediction(body: PredictResponse) -> Result<Prediction, ClassifyError> {
    let probabilities = std::iter::once(body.predicted_probability)
        .chain(body.all_predictions.iter().map(|entry| entry.probability));
    for probability in probabilities {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ClassifyError::MalformedResponse(format!(
                "probability {probability} is outside [0, 1]"
            )));
        }
    }

    Ok(Prediction {
        predicted_class: body.predicted_class,
        predicted_probability: body.predicted_probability,
        all_predictions: body
            .all_predictions
            .into_iter()
            .map(|entry| ClassProbability {
                class_name: entry.class,
                probability: entry.probability,
            })
            .collect(),
    })
}

impl ImageClassifier for ImageClassifierHttp {
    fn classify(&self, image: &SelectedImage) -> Result<Prediction, ClassifyError> {
        let bytes = std::fs::read(&image.path).map_err(|err| {
            ClassifyError::Transport(format!("failed to read {}: {err}", image.path.display()))
        })?;

        let part = multipart::Part::bytes(bytes)
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|err| {
                ClassifyError::Transport(format!("invalid mime type {}: {err}", image.mime_type))
            })?;
        let form = multipart::Form::new().part("image", part);

        debug!(url = %self.predict_url(), file_name = %image.file_name, "uploading image");

        let response = self
            .http
            .post(self.predict_url())
            .multipart(form)
            .send()
            .map_err(|err| ClassifyError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| ClassifyError::Transport(err.to_string()))?;

        if !status.is_success() {
            warn!(%status, "upload rejected");
            // Failure bodies carry `{"error": "..."}` when the server had a
            // say in the matter; fold that into the message.
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err_body) => format!("server returned {status}: {}", err_body.error),
                Err(_) => format!("server returned {status}"),
            };
            return Err(ClassifyError::Transport(message));
        }

        let parsed: PredictResponse = serde_json::from_str(&body)
            .map_err(|err| ClassifyError::MalformedResponse(err.to_string()))?;

        into_prediction(parsed)
    }
}
