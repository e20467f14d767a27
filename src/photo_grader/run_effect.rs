use tracing::debug;

use crate::device_display::interface::DeviceDisplayEvent;
use crate::photo_grader::core::{Effect, Event};
use crate::photo_grader::main::PhotoGrader;

impl PhotoGrader {
    pub(crate) fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }

    fn run_effect(&self, effect: Effect) {
        debug!(effect = ?effect, "running effect");

        match effect {
            Effect::SubscribeToDisplayEvents => {
                let events = self.device_display.lock().unwrap().events();
                loop {
                    match events.recv() {
                        Ok(DeviceDisplayEvent::SelectPressed) => {
                            if self.event_sender.send(Event::PickRequested).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
            Effect::OpenPicker => {
                let picked = self.image_picker.pick();
                let _ = self.event_sender.send(Event::PickDone(picked));
            }
            Effect::Upload { image, request } => {
                let result = self.image_classifier.classify(&image);
                let _ = self.event_sender.send(Event::UploadDone { request, result });
            }
        }
    }
}
