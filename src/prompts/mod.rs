//! Prompt templates for Wayfarer
//!
//! Embedded Handlebars templates plus the builder that renders them.

mod builder;
pub mod embedded;

pub use builder::PromptBuilder;
