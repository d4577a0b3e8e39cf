// Filenames and dirs
pub const FORGE_HIDDEN_DIR: &str = ".forge";
pub const REMOTE_CONFIG_FILENAME: &str = "remote_config.toml";

// Remote defaults
pub const DEFAULT_HOST: &str = "localhost:4000";
pub const DEFAULT_SCHEME: &str = "http";

// API
pub const API_NAMESPACE: &str = "api";
pub const DEFAULT_INCREMENT: i64 = 0;

// HTTP client
pub const FORGE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
