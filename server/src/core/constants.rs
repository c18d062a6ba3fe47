// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "trailhead";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "trailhead.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "TRAILHEAD_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "TRAILHEAD_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "TRAILHEAD_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "TRAILHEAD_LOG";

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "TRAILHEAD_DEBUG";

// =============================================================================
// Environment Variables - Database
// =============================================================================

/// Environment variable for the PostgreSQL connection URL
pub const ENV_POSTGRES_URL: &str = "TRAILHEAD_POSTGRES_URL";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5170;

/// Default request body limit in bytes (the API is read-only; bodies are small)
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// PostgreSQL Defaults
// =============================================================================

/// Maximum connections in the pool
pub const POSTGRES_DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Minimum connections kept warm
pub const POSTGRES_DEFAULT_MIN_CONNECTIONS: u32 = 2;

/// Connection acquire timeout in seconds
pub const POSTGRES_DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Idle connection timeout in seconds
pub const POSTGRES_DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600;

/// Max connection lifetime in seconds
pub const POSTGRES_DEFAULT_MAX_LIFETIME_SECS: u64 = 1800;

/// Statement timeout in seconds (0 = disabled)
pub const POSTGRES_DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 60;

// =============================================================================
// Shutdown
// =============================================================================

/// Timeout for background tasks to finish during graceful shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;
