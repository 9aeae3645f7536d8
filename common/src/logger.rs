use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format(&self, level: Level, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let tag = match level {
            Level::Info => "INFO",
            Level::Warn => "WARN",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}] {}", timestamp, prefix, tag, message),
            None => format!("[{}][{}] {}", timestamp, tag, message),
        }
    }

    pub fn log(&self, level: Level, message: &str) {
        let line = self.format(level, message);
        match level {
            Level::Info => println!("{}", line),
            Level::Warn => eprintln!("{}", line),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages logged before `init_logger` are dropped. The engine logs from
/// unit tests and benches where nobody installs a logger.
pub fn log(level: Level, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()));
        let line = logger.format(Level::Info, "food moved");
        assert!(line.contains("[Client][INFO] food moved"));
    }

    #[test]
    fn test_format_without_prefix() {
        let logger = Logger::new(None);
        let line = logger.format(Level::Warn, "reinit");
        assert!(line.ends_with("[WARN] reinit"));
    }
}
