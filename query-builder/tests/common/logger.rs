use log::*;
use colored::*;

pub struct TestLogger {
    level: Level,
}

fn colored_level(level: Level) -> ColoredString {
    match level {
        Level::Error => level.to_string().red().bold(),
        Level::Warn => level.to_string().yellow(),
        Level::Info => level.to_string().green(),
        Level::Debug => level.to_string().blue(),
        Level::Trace => level.to_string().magenta(),
    }
}

impl TestLogger {
    pub fn new() -> Box<Self> {
        Box::new(Self {
            level: Level::Trace,
        })
    }

    /// Tests share one process, so only the first activation takes effect.
    pub fn activate(self: Box<Self>) {
        if log::set_logger(Box::leak(self)).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    }
}

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("query_builder") && metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if Log::enabled(self, record.metadata()) {
            let target = record.target().replace("query_builder::", "qb::");
            println!("[{} {target}] {}", colored_level(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}
