use log::LevelFilter;

/// Install the global logger. `RUST_LOG`, when set, takes precedence over `level`.
pub fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
