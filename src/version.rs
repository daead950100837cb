// Service identity baked in at build time, served on GET /version

/// Crate version, e.g. "0.1.0".
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name ("usage-dashboard").
pub const NAME: &str = env!("CARGO_PKG_NAME");
