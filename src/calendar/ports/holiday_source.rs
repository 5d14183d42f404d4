//! Remote holiday feed port.

use crate::calendar::domain::{CountryCode, Holiday};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for holiday source operations.
pub type HolidaySourceResult<T> = Result<T, HolidaySourceError>;

/// Remote public holiday provider.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetches the public holidays for a country and year.
    ///
    /// # Errors
    ///
    /// Returns [`HolidaySourceError`] when the provider cannot be reached,
    /// answers with a failure status, or returns an unreadable payload.
    async fn fetch(&self, country: &CountryCode, year: i32) -> HolidaySourceResult<Vec<Holiday>>;
}

/// Errors returned by holiday sources.
#[derive(Debug, Clone, Error)]
pub enum HolidaySourceError {
    /// The request could not be sent or the connection failed.
    #[error("holiday provider unreachable: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a non-success status code.
    #[error("holiday provider returned status {0}")]
    UnexpectedStatus(u16),

    /// The response body could not be decoded.
    #[error("invalid holiday payload: {0}")]
    Decode(String),
}

impl HolidaySourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
