//! Logger setup and the runtime console-logs switch.
//
// env_logger is installed once with the most verbose configured level; the
// switch only moves the global max level between that level and Off.

use crate::config::LoggingConfig;
use chrono::Local;
use log::{debug, LevelFilter};
use std::io::Write;

/// Install env_logger. Safe to call more than once; later calls only
/// re-apply the console switch.
pub fn init_logger(config: &LoggingConfig) {
    let result = env_logger::Builder::new()
        .filter_level(config.level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();
    if result.is_err() {
        debug!("Logger already initialised");
    }
    apply_console_logging(config);
}

/// Turn console logging on or off according to `config`.
pub fn apply_console_logging(config: &LoggingConfig) {
    log::set_max_level(config.effective_level());
}

/// Whether log records currently reach the console
pub fn console_logging_active() -> bool {
    log::max_level() != LevelFilter::Off
}
