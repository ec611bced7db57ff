//! Prompt rendering
//!
//! Renders the embedded Handlebars templates from a TripRequest. Field
//! values are interpolated verbatim (HTML escaping disabled); the wording
//! and field order of the user sentence are fixed by the template.

use eyre::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;
use crate::trip::TripRequest;

/// Template name for the user message
const ITINERARY_TEMPLATE: &str = "itinerary";

/// Context handed to the itinerary template
#[derive(Debug, Serialize)]
struct ItineraryContext<'a> {
    destination: &'a str,
    members: u32,
    budget: String,
    duration: u32,
    purpose: &'a str,
    preferences: String,
}

impl<'a> ItineraryContext<'a> {
    fn from_request(request: &'a TripRequest) -> Self {
        Self {
            destination: &request.destination,
            members: request.member_count,
            budget: request.budget.to_string(),
            duration: request.duration_days,
            purpose: &request.purpose,
            preferences: request.merged_preferences(),
        }
    }
}

/// Renders prompt text from embedded templates
pub struct PromptBuilder {
    handlebars: Handlebars<'static>,
}

impl PromptBuilder {
    /// Create a builder with both templates registered and smoke-tested
    ///
    /// A defective template is a build defect, so it fails here at startup
    /// rather than on first submit.
    pub fn new() -> Result<Self> {
        debug!("PromptBuilder::new: called");
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string(ITINERARY_TEMPLATE, embedded::ITINERARY)
            .context("Failed to register itinerary prompt template")?;

        let builder = Self { handlebars };
        builder
            .user_prompt(&TripRequest::default())
            .context("Itinerary prompt template failed to render")?;

        Ok(builder)
    }

    /// Fixed system role text
    pub fn system_prompt(&self) -> String {
        embedded::SYSTEM.trim_end().to_string()
    }

    /// Render the templated user sentence for a request
    pub fn user_prompt(&self, request: &TripRequest) -> Result<String, handlebars::RenderError> {
        debug!(destination = %request.destination, "PromptBuilder::user_prompt: called");
        let context = ItineraryContext::from_request(request);
        let rendered = self.handlebars.render(ITINERARY_TEMPLATE, &context)?;
        Ok(rendered.trim_end().to_string())
    }
}
