//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`AlbumsStoreError`], [`NetworkError`], [`ConfigError`]), while
//! `main` uses `anyhow` for convenient error propagation.
//!
//! [`AlbumsStoreError`]: crate::albums::AlbumsStoreError
//! [`NetworkError`]: crate::albums::NetworkError
//! [`ConfigError`]: crate::config::ConfigError

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] crate::albums::NetworkError),

    /// Album fetch error
    #[error("Albums error: {0}")]
    Albums(#[from] crate::albums::AlbumsStoreError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, crate::albums::NetworkError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Network(e).context(ctx))
    }
}
