//! Form stage derivation
//!
//! Which widgets exist is a pure function of the current field values.
//! Stage is re-derived per event, never stored, so clearing an earlier
//! field walks the form backward automatically.

use tracing::debug;

use super::TripRequest;

/// How far through the form the current values reach
///
/// Submitted/Failed outcomes are deliberately not represented here: they
/// belong to the TUI request phase and are erased by the next edit, at
/// which point the stage below is all that remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing shown but the destination input
    AwaitingDestination,
    /// Step-1 widgets visible, purpose still empty
    AwaitingPurpose,
    /// Step-2 widgets visible, request can be submitted
    AwaitingSubmission,
}

impl Stage {
    /// Derive the stage from current field values
    pub fn of(request: &TripRequest) -> Self {
        let stage = if request.destination.is_empty() {
            Stage::AwaitingDestination
        } else if request.purpose.is_empty() {
            Stage::AwaitingPurpose
        } else {
            Stage::AwaitingSubmission
        };
        debug!(?stage, "Stage::of: derived");
        stage
    }

    /// Whether the step-1 widgets (budget, members, duration, purpose) show
    pub fn shows_details(self) -> bool {
        !matches!(self, Stage::AwaitingDestination)
    }

    /// Whether the step-2 widgets (preferences, follow-up toggle) show
    pub fn shows_preferences(self) -> bool {
        matches!(self, Stage::AwaitingSubmission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_awaits_destination() {
        let request = TripRequest::default();
        assert_eq!(Stage::of(&request), Stage::AwaitingDestination);
        assert!(!Stage::of(&request).shows_details());
    }

    #[test]
    fn test_destination_reveals_details() {
        let request = TripRequest {
            destination: "Paris".to_string(),
            ..TripRequest::default()
        };
        assert_eq!(Stage::of(&request), Stage::AwaitingPurpose);
        assert!(Stage::of(&request).shows_details());
        assert!(!Stage::of(&request).shows_preferences());
    }

    #[test]
    fn test_purpose_reveals_preferences() {
        let request = TripRequest {
            destination: "Paris".to_string(),
            purpose: "Adventure".to_string(),
            ..TripRequest::default()
        };
        assert_eq!(Stage::of(&request), Stage::AwaitingSubmission);
        assert!(Stage::of(&request).shows_preferences());
    }

    #[test]
    fn test_clearing_destination_walks_backward() {
        let mut request = TripRequest {
            destination: "Paris".to_string(),
            purpose: "Adventure".to_string(),
            ..TripRequest::default()
        };
        assert_eq!(Stage::of(&request), Stage::AwaitingSubmission);

        request.destination.clear();
        assert_eq!(Stage::of(&request), Stage::AwaitingDestination);
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let request = TripRequest {
            destination: " ".to_string(),
            ..TripRequest::default()
        };
        assert_eq!(Stage::of(&request), Stage::AwaitingPurpose);
    }

    #[test]
    fn test_followup_toggle_does_not_change_stage() {
        let request = TripRequest {
            destination: "Kyoto".to_string(),
            purpose: "Cultural".to_string(),
            wants_followup: true,
            ..TripRequest::default()
        };
        assert_eq!(Stage::of(&request), Stage::AwaitingSubmission);
    }
}
