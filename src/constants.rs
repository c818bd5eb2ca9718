//! Constants used throughout the client
//!
//! This module centralizes endpoint locations, header names and validation bounds.

// REST endpoint
/// Base URL of the Todoist REST API (v2)
pub const BASE_URL: &str = "https://api.todoist.com/rest/v2";
/// Overall per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// Upper bound accepted for the configured timeout
pub const MAX_TIMEOUT_SECS: u64 = 300;

// Headers
/// Per-request idempotency / trace identifier header
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

// Task priority
/// Lowest priority accepted by the API ("p4" in the Todoist UI)
pub const PRIORITY_MIN: i64 = 1;
/// Highest priority accepted by the API ("p1" in the Todoist UI)
pub const PRIORITY_MAX: i64 = 4;
/// Priority used when a caller supplies a value outside the bounds
pub const PRIORITY_DEFAULT: i64 = 1;

// Credentials
/// Environment variable holding the API token by default
pub const DEFAULT_TOKEN_ENV: &str = "TODOIST_API_TOKEN";

// Configuration files
pub const CONFIG_FILE_NAME: &str = "todoist-client.toml";
pub const CONFIG_DIR_NAME: &str = "todoist-client";
pub const CONFIG_XDG_FILE_NAME: &str = "config.toml";

