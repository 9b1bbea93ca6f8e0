//! Default values for family-memories configuration.

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Recent vignettes listed on the dashboard.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// `limit` sent with the dashboard's photo request.
pub const DEFAULT_PHOTO_LIMIT: u32 = 1000;

/// Columns of vignette content shown on a feed card.
pub const DEFAULT_PREVIEW_WIDTH: usize = 120;

/// Environment variable overriding the backend origin.
pub const API_URL_ENV: &str = "FAMILY_MEMORIES_API_URL";

/// Environment variable carrying the bearer token.
pub const TOKEN_ENV: &str = "FAMILY_MEMORIES_TOKEN";
