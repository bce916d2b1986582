use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    tag: String,
}

impl Logger {
    fn write(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        println!("[{}][{}] {}", timestamp, self.tag, message);
    }
}

pub fn init_logger(tag: impl Into<String>) {
    LOGGER.get_or_init(|| Logger { tag: tag.into() });
}

// No-op until init_logger is called.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.write(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
