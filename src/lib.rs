//! Wayfarer - form-driven travel itinerary planner
//!
//! A terminal form collects trip preferences through progressive
//! disclosure and forwards them as a single two-message prompt to a
//! chat-completion API; the returned itinerary renders in a read-only
//! pane.
//!
//! # Modules
//!
//! - [`trip`] - Trip request entity and the form stage machine
//! - [`prompts`] - Embedded Handlebars templates and prompt rendering
//! - [`llm`] - Completion-service trait and OpenAI client
//! - [`planner`] - Validation, prompt assembly, and the one remote call
//! - [`tui`] - Form event loop and rendering
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod llm;
pub mod planner;
pub mod prompts;
pub mod trip;
pub mod tui;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError, OpenAIClient, create_client};
pub use planner::{ItineraryPlanner, PlanError};
pub use prompts::PromptBuilder;
pub use trip::{Accommodation, Budget, Stage, Transit, TripRequest};
