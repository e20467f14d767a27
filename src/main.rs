use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::device_display::impl_console::DeviceDisplayConsole;
use crate::device_display::impl_gui::DeviceDisplayGui;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_http::ImageClassifierHttp;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_picker::impl_rfd::ImagePickerRfd;
use crate::image_picker::interface::ImagePicker;
use crate::photo_grader::main::PhotoGrader;

mod config;
mod device_display;
mod image_classifier;
mod image_picker;
mod photo_grader;

/// Single-screen client for a remote photo-grading service.
#[derive(Debug, Parser)]
#[command(name = "photo-grader")]
struct Cli {
    /// Render to the terminal instead of opening a window.
    #[arg(long)]
    console: bool,

    /// Grade with a canned local classifier instead of the remote service.
    #[arg(long)]
    fake_classifier: bool,

    /// Override the inference server URL (scheme://host:port).
    #[arg(long)]
    server_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(server_url) = cli.server_url {
        config.server_url = server_url;
    }

    let image_picker: Arc<dyn ImagePicker + Send + Sync> = Arc::new(ImagePickerRfd::new());

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = if cli.fake_classifier {
        Arc::new(ImageClassifierFake::new())
    } else {
        Arc::new(
            ImageClassifierHttp::new(config.server_url.clone(), config.request_timeout)
                .context("failed to build the http client")?,
        )
    };

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = if cli.console {
        Arc::new(Mutex::new(DeviceDisplayConsole::new()))
    } else {
        Arc::new(Mutex::new(DeviceDisplayGui::new()))
    };

    let app = PhotoGrader::new(config, image_picker, image_classifier, device_display);

    app.run()
}
