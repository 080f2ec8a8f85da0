use std::sync::OnceLock;

use anyhow::{anyhow, Context};
use clap::Parser;
use nannou::prelude::*;
use nannou_egui::egui;
use sinegraph::config::{Args, Config};

mod console;
mod input;
mod model;
mod render;

use model::Model;

static CONFIG: OnceLock<Config> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let config = Args::parse()
        .validate()
        .context("invalid command line")?;
    console::init(config.log_level);

    log::info!("sinegraph v{} starting", env!("CARGO_PKG_VERSION"));
    CONFIG
        .set(config)
        .map_err(|_| anyhow!("configuration already initialised"))?;

    nannou::app(model).update(update).run();
    Ok(())
}

fn model(app: &App) -> Model {
    let Some(config) = CONFIG.get() else {
        log::error!("started without configuration");
        std::process::exit(1);
    };
    match Model::new(app, config) {
        Ok(model) => model,
        Err(err) => {
            log::error!("failed to create window: {err:?}");
            std::process::exit(1);
        }
    }
}

fn update(_app: &App, m: &mut Model, update: Update) {
    let Some(egui) = m.egui.as_mut() else {
        return;
    };
    egui.set_elapsed_time(update.since_start);
    let ctx = egui.begin_frame();

    let params = m.widget.params();
    let state = m.widget.drag_state().label();
    egui::Window::new("Curve")
        .resizable(false)
        .show(&ctx, |ui| {
            ui.label(format!("x min: {:.3}", params.x_min));
            ui.label(format!("x max: {:.3}", params.x_max));
            ui.label(format!("periods: {:.2}", params.periods()));
            ui.label(format!("amplitude: {:.2}", params.y_amplitude));
            ui.separator();
            ui.label(state);
        });

    m.pointer_over_panel = ctx.is_pointer_over_area();
}
