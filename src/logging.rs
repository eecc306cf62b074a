use crate::config::LogLevel;

/// Installs the stderr logger. `RUST_LOG` wins over the configured level and
/// `verbose` raises the floor to debug.
pub fn init(level: LogLevel, verbose: bool) {
    let filter = if verbose {
        log::LevelFilter::Debug.max(level.to_level_filter())
    } else {
        level.to_level_filter()
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(filter);
    builder.parse_default_env();
    builder.format_timestamp(None);
    builder.target(env_logger::Target::Stderr);
    // A second init in the same process (tests) keeps the first logger.
    let _ = builder.try_init();
}
