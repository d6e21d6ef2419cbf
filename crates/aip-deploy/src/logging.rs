//! Logging utilities for the deploy library
//!
//! The library never writes to the terminal directly. These macros forward to the
//! `log` facade, and the binary decides where records go.

/// Print an informational message
#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

/// Print a debug message
#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}
