//! Integration tests for the itinerary submission flow
//!
//! These drive the public planner API against a scripted completion
//! client, covering the success path, both error kinds, and the form
//! staying usable after a failure.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use wayfarer::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError};
use wayfarer::planner::{ItineraryPlanner, PlanError};
use wayfarer::trip::{Accommodation, Budget, Transit, TripRequest};

/// Scripted completion client: plays back one outcome per call and
/// records every request it receives.
#[derive(Debug)]
struct ScriptedClient {
    outcomes: Mutex<Vec<Result<CompletionResponse, LlmError>>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    fn new(outcomes: Vec<Result<CompletionResponse, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(LlmError::InvalidResponse("script exhausted".to_string()));
        }
        outcomes.remove(0)
    }
}

fn paris_request() -> TripRequest {
    TripRequest {
        destination: "Paris".to_string(),
        budget: Budget::High,
        member_count: 2,
        duration_days: 5,
        purpose: "Adventure".to_string(),
        preferences: "vegetarian".to_string(),
        ..TripRequest::default()
    }
}

// =============================================================================
// Success path
// =============================================================================

#[tokio::test]
async fn test_submit_returns_itinerary_verbatim() {
    let client = ScriptedClient::new(vec![Ok(CompletionResponse {
        content: Some("Day 1: Louvre, picnic by the Seine".to_string()),
    })]);
    let planner = ItineraryPlanner::new(client.clone(), 4096).unwrap();

    let itinerary = planner.plan(&paris_request()).await.unwrap();

    assert_eq!(itinerary, "Day 1: Louvre, picnic by the Seine");
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_submit_sends_two_message_prompt_with_all_fields() {
    let client = ScriptedClient::new(vec![Ok(CompletionResponse {
        content: Some("ok".to_string()),
    })]);
    let planner = ItineraryPlanner::new(client.clone(), 4096).unwrap();

    planner.plan(&paris_request()).await.unwrap();

    let request = client.last_request().expect("client saw a request");
    // System prompt plus exactly one user message
    assert!(request.system_prompt.contains("travel planning assistant"));
    assert_eq!(request.messages.len(), 1);

    let user = &request.messages[0].content;
    for value in ["Paris", "2", "High", "5", "Adventure", "vegetarian"] {
        assert!(user.contains(value), "missing {value:?} in {user:?}");
    }
}

#[tokio::test]
async fn test_submit_with_followup_answers_sends_block() {
    let client = ScriptedClient::new(vec![Ok(CompletionResponse {
        content: Some("ok".to_string()),
    })]);
    let planner = ItineraryPlanner::new(client.clone(), 4096).unwrap();

    let request = TripRequest {
        wants_followup: true,
        activities: "hiking".to_string(),
        accommodation: Some(Accommodation::Hostels),
        transportation: Some(Transit::Biking),
        ..paris_request()
    };
    planner.plan(&request).await.unwrap();

    let sent = client.last_request().unwrap();
    assert!(
        sent.messages[0]
            .content
            .contains("vegetarian\nActivities: hiking\nAccommodation: Hostels\nTransportation: Biking")
    );
}

#[tokio::test]
async fn test_submit_with_empty_followup_sends_raw_preferences() {
    let client = ScriptedClient::new(vec![Ok(CompletionResponse {
        content: Some("ok".to_string()),
    })]);
    let planner = ItineraryPlanner::new(client.clone(), 4096).unwrap();

    let request = TripRequest {
        wants_followup: true,
        ..paris_request()
    };
    planner.plan(&request).await.unwrap();

    let sent = client.last_request().unwrap();
    assert!(sent.messages[0].content.contains("My preferences are: vegetarian."));
    assert!(!sent.messages[0].content.contains("Activities:"));
}

// =============================================================================
// Validation failures
// =============================================================================

#[tokio::test]
async fn test_missing_destination_makes_no_remote_call() {
    let client = ScriptedClient::new(vec![Ok(CompletionResponse {
        content: Some("unused".to_string()),
    })]);
    let planner = ItineraryPlanner::new(client.clone(), 4096).unwrap();

    let request = TripRequest {
        destination: String::new(),
        purpose: "Relaxing".to_string(),
        ..TripRequest::default()
    };

    let err = planner.plan(&request).await.unwrap_err();
    assert!(matches!(err, PlanError::MissingRequiredField(_)));
    assert_eq!(client.call_count(), 0);
}

// =============================================================================
// Remote failures and recovery
// =============================================================================

#[tokio::test]
async fn test_remote_failure_surfaces_underlying_message_and_form_recovers() {
    let client = ScriptedClient::new(vec![
        Err(LlmError::ApiError {
            status: 503,
            message: "connection refused".to_string(),
        }),
        Ok(CompletionResponse {
            content: Some("Day 1: try again and succeed".to_string()),
        }),
    ]);
    let planner = ItineraryPlanner::new(client.clone(), 4096).unwrap();

    let err = planner.plan(&paris_request()).await.unwrap_err();
    match err {
        PlanError::RemoteService(message) => {
            assert!(message.contains("connection refused"), "got {message:?}")
        }
        other => panic!("expected RemoteService, got {other:?}"),
    }

    // The planner stays usable: the next submission goes through
    let itinerary = planner.plan(&paris_request()).await.unwrap();
    assert_eq!(itinerary, "Day 1: try again and succeed");
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn test_empty_completion_is_a_remote_failure() {
    let client = ScriptedClient::new(vec![Ok(CompletionResponse { content: None })]);
    let planner = ItineraryPlanner::new(client.clone(), 4096).unwrap();

    let err = planner.plan(&paris_request()).await.unwrap_err();
    assert!(matches!(err, PlanError::RemoteService(_)));
}
