use colored::{Colorize, CustomColor};

pub const CLOUD_BLUE: CustomColor = CustomColor {
    r: 66,
    g: 133,
    b: 244,
};

const PREFIX: &str = "deploy";

/// Logger for records emitted by the library, quiet unless `RUST_LOG` says otherwise.
pub fn init_logger() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
}

pub fn print_err(err_message: &str) {
    eprintln!(
        "[{}] {}: {}",
        PREFIX.custom_color(CLOUD_BLUE),
        "error".red().bold(),
        err_message
    );
}

#[macro_export]
macro_rules! print_err {
    ($($arg:tt)*) => {
        $crate::logging::print_err(&format!($($arg)*));
    };
}

pub fn print_warn(warn_message: &str) {
    eprintln!(
        "[{}] {}: {}",
        PREFIX.custom_color(CLOUD_BLUE),
        "warning".yellow().bold(),
        warn_message
    );
}

#[macro_export]
macro_rules! print_warn {
    ($($arg:tt)*) => {
        $crate::logging::print_warn(&format!($($arg)*));
    };
}

pub fn print_info(info_message: &str) {
    println!(
        "[{}] {}: {}",
        PREFIX.custom_color(CLOUD_BLUE),
        "info".cyan().bold(),
        info_message
    );
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => {
        $crate::logging::print_info(&format!($($arg)*));
    };
}

pub fn print_success(success_message: &str) {
    println!(
        "[{}] {}: {}",
        PREFIX.custom_color(CLOUD_BLUE),
        "success".green().bold(),
        success_message
    );
}

#[macro_export]
macro_rules! print_success {
    ($($arg:tt)*) => {
        $crate::logging::print_success(&format!($($arg)*));
    };
}
