use std::env;
use tracing::Level;

/// Helper function to check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    env::var("RUST_LOG")
        .map(|val| val.to_lowercase() == "debug")
        .unwrap_or(false)
}

/// Installs the fmt subscriber; per-frame output only shows with RUST_LOG=debug
pub fn init() {
    let level = if is_debug_enabled() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .init();
}
