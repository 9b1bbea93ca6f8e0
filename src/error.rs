//! Unified error types for family-memories.
//!
//! Every backend, view and configuration failure is expressed as a
//! [`MemoriesError`], so callers can tell a backend rejection (with the
//! backend's `detail` message) apart from a transport failure.

use std::path::PathBuf;
use thiserror::Error;

/// Generic fallback shown when neither the backend nor the transport gave a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Main error type for family-memories operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MemoriesError {
    /// The backend answered with a non-success status
    #[error("{context}: backend returned status {status}{}", detail_suffix(.detail.as_deref()))]
    Api {
        context: String,
        status: u16,
        detail: Option<String>,
    },

    /// The request never produced a response (connect, timeout, TLS)
    #[error("{context}: {message}")]
    Network { context: String, message: String },

    /// The backend answered but the body did not match the expected shape
    #[error("Invalid response while {context}: {message}")]
    InvalidResponse { context: String, message: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The session lacks the admin flag for an edit/delete affordance
    #[error("{0} requires an admin session")]
    NotAuthorized(String),
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(" ({d})")).unwrap_or_default()
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for family-memories operations
pub type Result<T> = std::result::Result<T, MemoriesError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MemoriesError {
    /// Create an API error from a status and optional backend detail
    pub fn api(context: impl Into<String>, status: u16, detail: Option<String>) -> Self {
        Self::Api {
            context: context.into(),
            status,
            detail,
        }
    }

    /// Create a network error
    pub fn network(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-response error
    pub fn invalid_response(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a not-authorized error for the named action
    pub fn not_authorized(action: impl Into<String>) -> Self {
        Self::NotAuthorized(action.into())
    }

    /// The message a user should see for this failure.
    ///
    /// Prefers the backend's `detail`, then the transport/IO message, then
    /// [`UNKNOWN_ERROR`].
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Api { detail, status, .. } => detail
                .clone()
                .unwrap_or_else(|| format!("Request failed with status code {status}")),
            Self::Network { message, .. }
            | Self::InvalidResponse { message, .. }
            | Self::Io { message, .. } => message.clone(),
            Self::Config(msg) | Self::Validation(msg) => msg.clone(),
            Self::NotAuthorized(_) => self.to_string(),
        };
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }

    /// HTTP status of a backend rejection, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MemoriesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MemoriesError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_response("decoding JSON", err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// ```ignore
/// use family_memories::error::ErrorContext;
///
/// let bytes = std::fs::read(&path).context("reading upload")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error, chained in front of any existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MemoriesError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: MemoriesError, new_ctx: &str) -> MemoriesError {
    match err {
        MemoriesError::Api {
            context,
            status,
            detail,
        } => MemoriesError::Api {
            context: chain_context(new_ctx, &context),
            status,
            detail,
        },
        MemoriesError::Network { context, message } => MemoriesError::Network {
            context: chain_context(new_ctx, &context),
            message,
        },
        MemoriesError::InvalidResponse { context, message } => MemoriesError::InvalidResponse {
            context: chain_context(new_ctx, &context),
            message,
        },
        MemoriesError::Io {
            path,
            message,
            source,
        } => MemoriesError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MemoriesError::Config(msg) => MemoriesError::Config(chain_context(new_ctx, &msg)),
        MemoriesError::Validation(msg) => MemoriesError::Validation(chain_context(new_ctx, &msg)),
        MemoriesError::NotAuthorized(action) => MemoriesError::NotAuthorized(action),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
