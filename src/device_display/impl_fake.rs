use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::device_display::interface::{
    DeviceDisplay, DeviceDisplayEvent, DisplayError, ViewFrame,
};

/// Records every frame it is shown; clones share state so tests can hold one
/// handle while the app owns another.
#[derive(Clone)]
pub struct DeviceDisplayFake {
    frames: Arc<Mutex<Vec<ViewFrame>>>,
    select_sender: Arc<Mutex<Option<Sender<DeviceDisplayEvent>>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self {
            frames: Arc::new(Mutex::new(Vec::new())),
            select_sender: Arc::new(Mutex::new(None)),
        }
    }

    pub fn frames(&self) -> Vec<ViewFrame> {
        self.frames.lock().unwrap().clone()
    }

    pub fn press_select(&self) {
        if let Some(sender) = &*self.select_sender.lock().unwrap() {
            let _ = sender.send(DeviceDisplayEvent::SelectPressed);
        }
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn show(&mut self, frame: &ViewFrame) -> Result<(), DisplayError> {
        self.frames.lock().unwrap().push(frame.clone());
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceDisplayEvent> {
        let (sender, receiver) = channel();
        *self.select_sender.lock().unwrap() = Some(sender);
        receiver
    }
}
