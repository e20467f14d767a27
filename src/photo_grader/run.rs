use anyhow::Context;
use tracing::{debug, info};

use crate::photo_grader::core::{init, transition};
use crate::photo_grader::main::PhotoGrader;
use crate::photo_grader::render::Render;

impl PhotoGrader {
    pub fn run(&self) -> anyhow::Result<()> {
        info!(server_url = %self.config.server_url, "starting photo grader");

        self.device_display.lock().unwrap().init()?;

        let render = Render::new(self.device_display.clone());

        let (initial, effects) = init();
        *self.model.lock().unwrap() = initial.clone();
        render.render(&initial)?;
        self.spawn_effects(effects);

        let mut current = initial;

        loop {
            let event = {
                let receiver = self.event_receiver.lock().unwrap();
                receiver.recv()
            };
            let event = event.context("event channel closed")?;

            debug!(event = ?event, "event received");

            let (next, effects) = transition(current, event);

            debug!(phase = ?next.phase, effects = ?effects, "transitioned");

            current = next.clone();
            *self.model.lock().unwrap() = next;

            render.render(&current)?;

            self.spawn_effects(effects);
        }
    }
}
