//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring a second initialization
///
/// Useful in tests where multiple test functions may race to initialize.
pub fn try_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
