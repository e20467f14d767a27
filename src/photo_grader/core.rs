use crate::image_classifier::interface::{ClassifyError, Prediction};
use crate::image_picker::interface::{PickError, SelectedImage};

/// Monotonically increasing tag for upload requests. A response is applied
/// only when its tag matches the latest issued one, so a response belonging
/// to a superseded upload can never overwrite newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RequestId(u64);

impl RequestId {
    pub fn next(self) -> Self {
        RequestId(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadPhase {
    Idle,
    Uploading {
        image: SelectedImage,
        request: RequestId,
    },
    Succeeded {
        image: SelectedImage,
        result: Prediction,
    },
    Failed {
        image: SelectedImage,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub phase: UploadPhase,
    /// Transient picker-failure notice; cleared by the next selection.
    pub notice: Option<String>,
    pub issued: RequestId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PickRequested,
    PickDone(Result<Option<SelectedImage>, PickError>),
    UploadDone {
        request: RequestId,
        result: Result<Prediction, ClassifyError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeToDisplayEvents,
    OpenPicker,
    Upload {
        image: SelectedImage,
        request: RequestId,
    },
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model {
            phase: UploadPhase::Idle,
            notice: None,
            issued: RequestId::default(),
        },
        vec![Effect::SubscribeToDisplayEvents],
    )
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::PickRequested => (model, vec![Effect::OpenPicker]),

        // The user dismissed the picker: nothing changes.
        Event::PickDone(Ok(None)) => (model, vec![]),

        // Picker failure is transient: surface a notice, keep the phase.
        Event::PickDone(Err(err)) => (
            Model {
                notice: Some(err.to_string()),
                ..model
            },
            vec![],
        ),

        // A fresh selection supersedes whatever was in flight.
        Event::PickDone(Ok(Some(image))) => {
            let request = model.issued.next();
            (
                Model {
                    phase: UploadPhase::Uploading {
                        image: image.clone(),
                        request,
                    },
                    notice: None,
                    issued: request,
                },
                vec![Effect::Upload { image, request }],
            )
        }

        Event::UploadDone { request, result } => {
            let Model {
                phase,
                notice,
                issued,
            } = model;

            match phase {
                UploadPhase::Uploading {
                    image,
                    request: current,
                } if request == current => {
                    let phase = match result {
                        Ok(result) => UploadPhase::Succeeded { image, result },
                        Err(err) => UploadPhase::Failed {
                            image,
                            message: err.to_string(),
                        },
                    };
                    (
                        Model {
                            phase,
                            notice,
                            issued,
                        },
                        vec![],
                    )
                }
                // Response of a superseded upload: drop it.
                phase => (
                    Model {
                        phase,
                        notice,
                        issued,
                    },
                    vec![],
                ),
            }
        }
    }
}
