//! LlmClient trait definition

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse, LlmError};

/// Stateless LLM client - each call is independent
///
/// This is the core abstraction for the completion service. Every
/// itinerary request is a fresh conversation; no state is kept between
/// calls and a failed call leaves nothing to clean up.
#[async_trait]
pub trait LlmClient: Send + Sync + std::fmt::Debug {
    /// Send a single completion request (blocks until complete)
    ///
    /// One attempt only - callers surface failures instead of retrying.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}
