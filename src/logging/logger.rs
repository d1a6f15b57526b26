use chrono::Local;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

static LOGGER: once_cell::sync::Lazy<Mutex<Logger>> =
    once_cell::sync::Lazy::new(|| Mutex::new(Logger::new()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

struct Logger {
    path: Option<PathBuf>,
}

impl Logger {
    fn new() -> Self {
        Self { path: None }
    }

    fn initialize(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    // lines are dropped until a path has been set
    fn write(&self, level: LogLevel, message: &str) {
        if let Some(path) = &self.path {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let line = format!("[{}] {} - {}\n", timestamp, level, message);
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }
}

fn log(level: LogLevel, message: &str) {
    if let Ok(logger) = LOGGER.lock() {
        logger.write(level, message);
    }
}

pub fn init_logger(log_path: PathBuf) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.initialize(log_path);
    }
}

pub fn log_info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn log_warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn log_error(message: &str) {
    log(LogLevel::Error, message);
}

#[test]
fn test_log_lines_carry_level_and_message() {
    let path = std::env::temp_dir().join(format!("pongboard-log-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);
    init_logger(path.clone());
    log_info("set won by A");
    log_warn("settings fallback");
    let content = std::fs::read_to_string(&path).expect("expected a log file");
    assert!(content.contains("INFO - set won by A"));
    assert!(content.contains("WARN - settings fallback"));
    let _ = std::fs::remove_file(&path);
}
