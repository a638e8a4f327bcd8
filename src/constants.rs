/// Application-wide constants
/// All magic numbers and constant values should be defined here

/// Maximum request body size in bytes (16 MB)
pub const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "memeforge";

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

/// VULNERABILITY (intentional): hardcoded fallback secret key.
/// Never ship a default secret in production code. Students should replace
/// this with a value sourced from a secret manager.
pub const DEFAULT_SECRET_KEY: &str = "memeforge-dev-secret-change-me";
