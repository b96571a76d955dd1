use crate::prelude::*;
use log::{LevelFilter, Log, Metadata, Record};

pub fn wndw() -> Result<web_sys::Window, ActionError> {
    web_sys::window().ok_or(ActionError::Unavailable("window"))
}

/// Forwards log records to the browser console.
pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    pub fn new(level: Level) -> Box<Self> {
        Box::new(Self { level })
    }

    pub fn activate(self: Box<Self>) {
        let level = self.level;
        if log::set_logger(Box::leak(self)).is_err() {
            web_sys::console::warn_1(&"Logger already set".into());
        } else {
            log::set_max_level(level.to_level_filter());
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let filter = match metadata.target().starts_with("query_builder") {
            true => self.level.to_level_filter(),
            false => LevelFilter::Warn,
        };
        metadata.level() <= filter
    }

    fn log(&self, record: &Record) {
        if !Log::enabled(self, record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{} {}] {}", record.level(), record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug => web_sys::console::debug_1(&message),
            Level::Trace => web_sys::console::log_1(&message),
        }
    }

    fn flush(&self) {}
}
