use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crate::device_display::interface::{
    DeviceDisplay, DeviceDisplayEvent, DisplayError, ViewFrame,
};

pub struct DeviceDisplayConsole {}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {}
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), DisplayError> {
        println!("photo-grader (press Enter to select an image)");
        Ok(())
    }

    fn show(&mut self, frame: &ViewFrame) -> Result<(), DisplayError> {
        println!("----------------------------------------");

        if let Some(path) = &frame.preview {
            println!("Photo: {}", path.display());
        }
        if frame.busy {
            println!("Uploading...");
        }
        if let Some(headline) = &frame.headline {
            println!("Grade: {headline}");
            println!("Per-class probabilities:");
            for row in &frame.breakdown {
                println!("  {row}");
            }
        }
        if let Some(error) = &frame.error {
            println!("Error: {error}");
        }
        if let Some(notice) = &frame.notice {
            println!("Notice: {notice}");
        }

        println!("(press Enter to select an image)");
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceDisplayEvent> {
        let (sender, receiver) = channel();

        thread::spawn(move || {
            for line in std::io::stdin().lines() {
                if line.is_err() {
                    break;
                }
                if sender.send(DeviceDisplayEvent::SelectPressed).is_err() {
                    break;
                }
            }
        });

        receiver
    }
}
