pub mod analysis;
pub mod config;
pub mod contribution;
pub mod diff;
pub mod error;

pub use error::{Result, ScanError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
