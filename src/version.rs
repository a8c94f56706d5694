// Version information module for the trivia service
//
// Provides version constants for the crate

/// Version string for the trivia service crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
