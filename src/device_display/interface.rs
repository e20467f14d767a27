use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use thiserror::Error;

/// Everything the screen needs for one paint: the preview, the busy
/// indicator, the grade breakdown, and any error or transient notice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFrame {
    pub preview: Option<PathBuf>,
    pub busy: bool,
    pub headline: Option<String>,
    pub breakdown: Vec<String>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum DeviceDisplayEvent {
    SelectPressed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("display failed: {0}")]
    Display(String),
}

pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), DisplayError>;

    fn show(&mut self, frame: &ViewFrame) -> Result<(), DisplayError>;

    /// User-intent events sourced from the display (the select button).
    fn events(&self) -> Receiver<DeviceDisplayEvent>;
}
