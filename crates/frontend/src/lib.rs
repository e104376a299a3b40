pub mod shared;

/// Initializes logging using the `log` crate (browser console)
pub fn init_logging() {
    _ = console_log::init_with_level(log::Level::Debug);
}
