//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Template Store Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Template store unreachable: {message}")]
    Transport { message: String },

    #[error("Category not found: {name}")]
    CategoryNotFound { name: String },

    #[error("Template not found: {category}/{name}")]
    TemplateNotFound { category: String, name: String },

    #[error("Category is read-only: {category}")]
    ReadOnly { category: String },

    #[error("Invalid template name: {name:?}")]
    InvalidName { name: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn category_not_found(name: impl Into<String>) -> Self {
        Self::CategoryNotFound { name: name.into() }
    }

    pub fn template_not_found(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            category: category.into(),
            name: name.into(),
        }
    }

    pub fn read_only(category: impl Into<String>) -> Self {
        Self::ReadOnly {
            category: category.into(),
        }
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors surface as status-bar notices; the session keeps
    /// running and the operator re-triggers the action.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::CategoryNotFound { .. }
                | Error::TemplateNotFound { .. }
                | Error::ReadOnly { .. }
                | Error::InvalidName { .. }
                | Error::Config { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_))
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::transport("connection refused");
        assert_eq!(
            err.to_string(),
            "Template store unreachable: connection refused"
        );

        let err = Error::read_only("System");
        assert_eq!(err.to_string(), "Category is read-only: System");

        let err = Error::template_not_found("Translate", "a.txt");
        assert_eq!(err.to_string(), "Template not found: Translate/a.txt");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_store_errors_are_recoverable() {
        assert!(Error::transport("test").is_recoverable());
        assert!(Error::category_not_found("Missing").is_recoverable());
        assert!(Error::template_not_found("Translate", "x.txt").is_recoverable());
        assert!(Error::read_only("System").is_recoverable());
        assert!(Error::invalid_name("  ").is_recoverable());
    }

    #[test]
    fn test_terminal_init_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(!Error::transport("test").is_fatal());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::transport("test");
        let _ = Error::config("test");
        let _ = Error::channel_send("test");
        let _ = Error::invalid_name("test");
    }
}
