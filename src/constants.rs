//! Constants used throughout the crate
//!
//! Column limits, defaults and user-facing messages live here so the entity,
//! validation and CLI layers agree on them.

// Column limits
/// Maximum length of `firstname` and `lastname`
pub const NAME_MAX_LEN: u32 = 100;
/// Maximum length of `email`
pub const EMAIL_MAX_LEN: u32 = 150;

// Pagination
/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u64 = 5;
/// Largest page size the configuration accepts
pub const MAX_PAGE_SIZE_LIMIT: u64 = 1000;
/// First page number (pages are 1-indexed)
pub const FIRST_PAGE: u64 = 1;

// Database
pub const DEFAULT_DATABASE_URL: &str = "sqlite://student-records.db?mode=rwc";
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 8;

// Files
pub const APP_DIR_NAME: &str = "student-records";
pub const LOCAL_CONFIG_FILE: &str = "student-records.toml";
pub const LOG_FILE_NAME: &str = "student-records.log";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const LOG_SOFT_DELETE_FAILED: &str = "Error in soft_delete";
