//! Chat-completion provider abstraction and implementations.
//!
//! The trait keeps the generation backend swappable (OpenAI, mock) without
//! touching the handlers.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// A chat-style completion backend: one system instruction plus one user
/// prompt in, one completion out. A single failed call surfaces
/// immediately; there are no retries and no caching.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: Option<u32>,
    ) -> Result<String, ProviderError>;
}
