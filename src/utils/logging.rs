// Tue Jan 13 2026 - Alex

use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs `env_logger` on stderr. Safe to call more than once.
    pub fn init(level: LevelFilter) {
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .format_target(false)
            .try_init();
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    /// `--quiet` caps the console at warnings.
    pub fn effective_level(requested: &str, quiet: bool) -> LevelFilter {
        let level = Self::level_from_str(requested);
        if quiet {
            level.min(LevelFilter::Warn)
        } else {
            level
        }
    }

    pub fn disable_color() {
        colored::control::set_override(false);
    }
}
