use super::{Config, FramePacer};
use crate::{NiceInt, Result, Settings, Simulation};
use eframe::egui::{CentralPanel, Context, Frame, Key, ViewportCommand};
use std::time::Instant;

pub struct App {
    pub(super) simulation: Simulation, // Current generation and the engine driving it.
    pub(super) cell_resolution: f32,   // Side of a cell in pixels.
    pub(super) is_paused: bool,        // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,      // Do one step and pause.
    pub(super) last_update_duration: f64, // Duration of the last generation in seconds.
    pub(super) frame_pacer: FramePacer, // Limits the frame rate to the configured fps.
    pub(super) shown_generation: Option<u64>, // Generation currently shown in the title.
}

impl App {
    pub fn new(settings: &Settings, simulation: Simulation) -> Result<Self> {
        Ok(Self {
            simulation,
            cell_resolution: settings.cell_resolution as f32,
            is_paused: false,
            do_one_step: false,
            last_update_duration: 0.,
            frame_pacer: FramePacer::new(settings.frame_time()?),
            shown_generation: None,
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Returns `false` when the simulation cannot continue.
    fn update_engine(&mut self) -> bool {
        if self.is_paused && !self.do_one_step {
            return true;
        }
        self.do_one_step = false;

        let timer = Instant::now();
        if let Err(err) = self.simulation.step() {
            log::error!("simulation stopped: {err}");
            return false;
        }
        self.last_update_duration = timer.elapsed().as_secs_f64();
        true
    }

    /// Returns `false` when the user asked to quit.
    fn handle_input(&mut self, ctx: &Context) -> bool {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.is_paused = !self.is_paused;
            }
            if input.key_pressed(Key::N) {
                self.do_one_step = true;
            }
            !(input.key_pressed(Key::Escape) || input.key_pressed(Key::Q))
        })
    }

    fn update_title(&mut self, ctx: &Context) {
        let generation = self.simulation.generation();
        if self.shown_generation == Some(generation) {
            return;
        }
        self.shown_generation = Some(generation);
        let title = format!(
            "{} | generation {} | population {} | {:.0} fps | step {:.3} ms",
            Config::TITLE,
            NiceInt::from(generation),
            NiceInt::from(self.simulation.grid().population()),
            self.frame_pacer.fps(),
            self.last_update_duration * 1e3,
        );
        ctx.send_viewport_cmd(ViewportCommand::Title(title));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if !self.handle_input(ctx) {
            log::info!(
                "quit requested at generation {}",
                self.simulation.generation()
            );
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }

        CentralPanel::default()
            .frame(Frame::none().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| self.draw(ui));

        if !self.update_engine() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }
        self.update_title(ctx);

        ctx.request_repaint();
        self.frame_pacer.end_frame();
    }
}
