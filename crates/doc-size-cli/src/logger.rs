use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes timestamped log lines to stderr, keeping stdout for results
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            level: if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(record: &Record) -> String {
        format!(
            "{} {:<5} [{}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = Self::format(record);
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
