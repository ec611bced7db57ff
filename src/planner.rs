//! Itinerary planner - the submission path
//!
//! Validates the current trip request, assembles the two-message prompt,
//! and performs exactly one completion call. The two error kinds here are
//! the only failures the form ever displays.

use std::sync::Arc;

use eyre::Result;
use thiserror::Error;
use tracing::{debug, info};

use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::prompts::PromptBuilder;
use crate::trip::TripRequest;

/// Errors surfaced to the form on submit
#[derive(Debug, Error)]
pub enum PlanError {
    /// Submit was triggered without a required field; no remote call made
    #[error("Please provide at least a destination and the purpose of your trip.")]
    MissingRequiredField(&'static str),

    /// Any failure from the completion service, carrying the underlying message
    #[error("The itinerary request failed: {0}")]
    RemoteService(String),
}

/// Builds prompts and drives the completion call for trip requests
pub struct ItineraryPlanner {
    llm: Option<Arc<dyn LlmClient>>,
    /// Why `llm` is None (client construction error from startup)
    offline_reason: String,
    prompts: PromptBuilder,
    max_tokens: u32,
}

impl ItineraryPlanner {
    /// Create a planner with a working completion client
    pub fn new(llm: Arc<dyn LlmClient>, max_tokens: u32) -> Result<Self> {
        debug!(max_tokens, "ItineraryPlanner::new: called");
        Ok(Self {
            llm: Some(llm),
            offline_reason: String::new(),
            prompts: PromptBuilder::new()?,
            max_tokens,
        })
    }

    /// Create a planner with no client
    ///
    /// Submissions still validate locally; the remote step fails with the
    /// recorded reason (typically a missing API key).
    pub fn without_client(reason: impl Into<String>, max_tokens: u32) -> Result<Self> {
        let reason = reason.into();
        debug!(%reason, max_tokens, "ItineraryPlanner::without_client: called");
        Ok(Self {
            llm: None,
            offline_reason: reason,
            prompts: PromptBuilder::new()?,
            max_tokens,
        })
    }

    /// Assemble the two-message prompt for a request
    ///
    /// Fails with `MissingRequiredField` when destination and/or purpose
    /// is empty. Never touches the network.
    pub fn build_prompt(&self, request: &TripRequest) -> Result<CompletionRequest, PlanError> {
        debug!(
            destination = %request.destination,
            purpose = %request.purpose,
            "build_prompt: called"
        );
        if request.destination.is_empty() {
            return Err(PlanError::MissingRequiredField("destination"));
        }
        if request.purpose.is_empty() {
            return Err(PlanError::MissingRequiredField("purpose"));
        }

        let user_prompt = self
            .prompts
            .user_prompt(request)
            .map_err(|e| PlanError::RemoteService(format!("prompt rendering failed: {e}")))?;

        Ok(CompletionRequest {
            system_prompt: self.prompts.system_prompt(),
            messages: vec![Message::user(user_prompt)],
            max_tokens: self.max_tokens,
        })
    }

    /// Validate, build, and submit the request; returns the itinerary text
    ///
    /// One completion call, no retries. Validation failures return before
    /// any client interaction.
    pub async fn plan(&self, request: &TripRequest) -> Result<String, PlanError> {
        let completion = self.build_prompt(request)?;

        let llm = self
            .llm
            .as_ref()
            .ok_or_else(|| PlanError::RemoteService(self.offline_reason.clone()))?;

        let response = llm
            .complete(completion)
            .await
            .map_err(|e| PlanError::RemoteService(e.to_string()))?;

        match response.content {
            Some(text) if !text.is_empty() => {
                info!(chars = text.len(), "plan: itinerary received");
                Ok(text)
            }
            _ => Err(PlanError::RemoteService("completion contained no text".to_string())),
        }
    }
}
