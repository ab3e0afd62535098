//! Timestamped console logging.
//!
//! All macros are silent unless the `BEANSTREAM_LOG` environment variable is set,
//! so embedding applications see no output by default.

/// Environment variable that switches console logging on.
pub(crate) const LOG_VAR: &str = "BEANSTREAM_LOG";

pub(crate) fn enabled() -> bool { std::env::var_os(LOG_VAR).is_some() }

macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::logger::enabled() {
            println!("\x1b[32m[INFO] [{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}

macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::enabled() {
            println!("\x1b[33m[LOG]  [{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}

macro_rules! warning {
    ($($arg:tt)*) => {
        if $crate::logger::enabled() {
            println!("\x1b[35m[WARN] [{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}

macro_rules! error {
    ($($arg:tt)*) => {
        if $crate::logger::enabled() {
            println!("\x1b[31m[ERROR][{}]\x1b[0m {}", ::chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}

pub(crate) use {error, info, log, warning};
