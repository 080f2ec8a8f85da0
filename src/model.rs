use nannou::prelude::*;
use nannou_egui::Egui;
use sinegraph::config::Config;
use sinegraph::consts::WINDOW_TITLE;
use sinegraph::{Canvas, CurveWidget};

pub struct Model {
    pub window: WindowId,
    pub widget: CurveWidget,
    /// Parameter readout. `None` when started with `--no-panel`.
    pub egui: Option<Egui>,
    /// Set during `update` when the pointer hovers the readout panel.
    pub pointer_over_panel: bool,
}

impl Model {
    pub fn new(app: &App, config: &Config) -> Result<Self, nannou::window::BuildError> {
        app.set_loop_mode(LoopMode::Wait);

        let window = app
            .new_window()
            .size(config.width, config.height)
            .title(WINDOW_TITLE)
            .msaa_samples(4)
            .view(crate::render::view)
            .event(crate::input::event)
            .raw_event(crate::input::raw_window_event)
            .build()?;

        let egui = if config.show_panel {
            app.window(window).map(|w| Egui::from_window(&w))
        } else {
            None
        };

        log::info!(
            "window {}x{} ready, readout panel {}",
            config.width,
            config.height,
            if egui.is_some() { "on" } else { "off" }
        );

        Ok(Model {
            window,
            widget: CurveWidget::new(Canvas::new(config.width as f64, config.height as f64)),
            egui,
            pointer_over_panel: false,
        })
    }

    /// Ask the window for a new frame.
    pub fn request_redraw(&self, app: &App) {
        if let Some(window) = app.window(self.window) {
            window.winit_window().request_redraw();
        }
    }
}
