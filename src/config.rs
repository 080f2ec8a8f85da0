//! Start-up configuration for the desktop host.

use crate::consts::{INITIAL_HEIGHT, INITIAL_WIDTH, PADDING};
use clap::Parser;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("canvas width {0} leaves no room for the plot (must exceed {min})", min = 2.0 * PADDING)]
    WidthTooSmall(u32),
    #[error("canvas height {0} leaves no room for the plot (must exceed {min})", min = 2.0 * PADDING)]
    HeightTooSmall(u32),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Interactive sine curve: drag the curve sideways to change how many periods
/// are shown, up or down to change its amplitude.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about)]
pub struct Args {
    /// Initial canvas width in pixels.
    #[clap(long, env = "SINEGRAPH_WIDTH", default_value_t = INITIAL_WIDTH)]
    pub width: u32,

    /// Initial canvas height in pixels.
    #[clap(long, env = "SINEGRAPH_HEIGHT", default_value_t = INITIAL_HEIGHT)]
    pub height: u32,

    /// Log filter used when RUST_LOG is unset (error, warn, info, debug, trace).
    #[clap(long, env = "SINEGRAPH_LOG", default_value = "info")]
    pub log_level: String,

    /// Hide the parameter readout panel.
    #[clap(long)]
    pub no_panel: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub log_level: log::LevelFilter,
    pub show_panel: bool,
}

impl Args {
    pub fn validate(self) -> Result<Config, ConfigError> {
        let min = 2.0 * PADDING;
        if f64::from(self.width) <= min {
            return Err(ConfigError::WidthTooSmall(self.width));
        }
        if f64::from(self.height) <= min {
            return Err(ConfigError::HeightTooSmall(self.height));
        }
        let log_level = self
            .log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))?;

        Ok(Config {
            width: self.width,
            height: self.height,
            log_level,
            show_panel: !self.no_panel,
        })
    }
}
