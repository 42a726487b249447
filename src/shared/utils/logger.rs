use log::info;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("bookshelf", log::LevelFilter::Debug) // More verbose for our app
            .filter_module("diesel", log::LevelFilter::Warn) // Reduce diesel noise
            .filter_module("hyper", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}
