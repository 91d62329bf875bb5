use crate::error::ConnError;
use chrono::Local;
use log::{Level, Log, Metadata, Record};

/// Writes `<timestamp> <level> [<module>] <message>` lines to stdout. Only records from this crate
/// pass the filter, so dependencies stay quiet at `debug` and `trace`.
struct ConnLogger {
    level: Level,
}

impl ConnLogger {
    fn format_line(&self, record: &Record) -> String {
        format!(
            "{} {:<5} [{}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.module_path().unwrap_or_else(|| record.target()),
            record.args()
        )
    }
}

impl Log for ConnLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    #[allow(clippy::print_stdout)]
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format_line(record));
        }
    }

    fn flush(&self) {}
}

/// Installs the process-wide logger. Fails if a logger has already been installed.
pub fn init_logger(level: Level) -> Result<(), ConnError> {
    log::set_boxed_logger(Box::new(ConnLogger { level }))
        .map_err(|e| ConnError::Generic(format!("Could not set logger: {}", e)))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
