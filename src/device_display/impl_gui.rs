use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;
use tracing::{info, warn};

use crate::device_display::interface::{
    DeviceDisplay, DeviceDisplayEvent, DisplayError, ViewFrame,
};

struct GraderWindow {
    frame: Arc<Mutex<ViewFrame>>,
    select_sender: Arc<Mutex<Option<Sender<DeviceDisplayEvent>>>>,
    preview: Option<(PathBuf, egui::TextureHandle)>,
}

impl GraderWindow {
    fn preview_texture(
        &mut self,
        ctx: &egui::Context,
        path: &PathBuf,
    ) -> Option<egui::TextureHandle> {
        if let Some((loaded, texture)) = &self.preview {
            if loaded == path {
                return Some(texture.clone());
            }
        }

        let decoded = match image::open(path) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(path = %path.display(), "failed to decode preview: {err}");
                return None;
            }
        };
        let size = [decoded.width() as usize, decoded.height() as usize];
        let rgba = decoded.to_rgba8();
        let pixels = rgba.as_flat_samples();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());

        let texture = ctx.load_texture(
            path.to_string_lossy().to_string(),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.preview = Some((path.clone(), texture.clone()));

        Some(texture)
    }
}

impl eframe::App for GraderWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = self.frame.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                if ui.button("Select image").clicked() {
                    if let Some(sender) = &*self.select_sender.lock().unwrap() {
                        let _ = sender.send(DeviceDisplayEvent::SelectPressed);
                    }
                }
                ui.add_space(12.0);

                if let Some(path) = &frame.preview {
                    if let Some(texture) = self.preview_texture(ctx, path) {
                        ui.add(egui::Image::new(&texture).max_size(egui::vec2(320.0, 320.0)));
                    }
                }

                if frame.busy {
                    ui.add_space(12.0);
                    ui.add(egui::Spinner::new());
                }

                if let Some(headline) = &frame.headline {
                    ui.add_space(12.0);
                    ui.label(egui::RichText::new(headline).size(22.0).strong());
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new("Per-class probabilities").strong());
                    for row in &frame.breakdown {
                        ui.label(row);
                    }
                }

                if let Some(error) = &frame.error {
                    ui.add_space(12.0);
                    ui.colored_label(egui::Color32::RED, format!("Error: {error}"));
                }

                if let Some(notice) = &frame.notice {
                    ui.add_space(12.0);
                    ui.colored_label(egui::Color32::YELLOW, notice);
                }
            });
        });
    }
}

pub struct DeviceDisplayGui {
    frame: Arc<Mutex<ViewFrame>>,
    select_sender: Arc<Mutex<Option<Sender<DeviceDisplayEvent>>>>,
    ctx: Arc<Mutex<Option<egui::Context>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            frame: Arc::new(Mutex::new(ViewFrame::default())),
            select_sender: Arc::new(Mutex::new(None)),
            ctx: Arc::new(Mutex::new(None)),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), DisplayError> {
        let frame = self.frame.clone();
        let select_sender = self.select_sender.clone();
        let ctx_slot = self.ctx.clone();

        // The window runs on its own thread; the event loop only ever touches
        // the shared frame.
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([380.0, 640.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let result = eframe::run_native(
                "Photo Grader",
                options,
                Box::new(move |cc| {
                    *ctx_slot.lock().unwrap() = Some(cc.egui_ctx.clone());
                    Box::new(GraderWindow {
                        frame,
                        select_sender,
                        preview: None,
                    })
                }),
            );

            if let Err(err) = result {
                warn!("display window exited: {err}");
            }
            info!("window closed, shutting down");
            std::process::exit(0);
        });

        Ok(())
    }

    fn show(&mut self, frame: &ViewFrame) -> Result<(), DisplayError> {
        *self.frame.lock().unwrap() = frame.clone();
        if let Some(ctx) = &*self.ctx.lock().unwrap() {
            ctx.request_repaint();
        }
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceDisplayEvent> {
        let (sender, receiver) = channel();
        *self.select_sender.lock().unwrap() = Some(sender);
        receiver
    }
}
