//! `OpenAPI` tags and well-known names.

pub const SYSTEM_TAG: &str = "System";
pub const PUBLISHERS_TAG: &str = "Publishers";

/// Prefix for environment variable overrides (`PLIST__SERVER__PORT`).
pub const ENV_PREFIX: &str = "PLIST";
/// Config file looked up when none is given (`server.toml`, `server.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "server";
