//! TUI application state
//!
//! Pure data structures for the form. No rendering logic here: views read
//! this state, the App mutates it, and the trip request is re-derived from
//! the widget buffers on every interaction.

use std::time::Instant;

use rand::seq::IndexedRandom;
use tracing::debug;

use crate::trip::{
    Accommodation, Budget, MAX_DURATION_DAYS, MIN_DURATION_DAYS, MIN_MEMBER_COUNT, Stage, Transit, TripRequest,
};

/// Fun words for the busy indicator while the request is in flight
pub const PLANNING_WORDS: &[&str] = &[
    "Planning",
    "Charting",
    "Mapping",
    "Packing",
    "Routing",
    "Navigating",
    "Wayfinding",
    "Plotting",
    "Scouting",
    "Itinerating",
];

/// Longest value accepted into a text buffer
const MAX_TEXT_LEN: usize = 500;

/// Form widgets, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Destination,
    Budget,
    Members,
    Duration,
    Purpose,
    Preferences,
    FollowupToggle,
    Activities,
    Accommodation,
    Transportation,
    Submit,
}

impl Field {
    /// Canonical traversal order
    pub const ORDER: &'static [Field] = &[
        Field::Destination,
        Field::Budget,
        Field::Members,
        Field::Duration,
        Field::Purpose,
        Field::Preferences,
        Field::FollowupToggle,
        Field::Activities,
        Field::Accommodation,
        Field::Transportation,
        Field::Submit,
    ];

    /// Whether this widget takes free text input
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::Destination | Field::Purpose | Field::Preferences | Field::Activities
        )
    }

    /// Whether this widget is a numeric stepper
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Members | Field::Duration)
    }
}

/// Outcome of the current/last submission
///
/// `Done`/`Failed` are the Submitted/Failed outcome states: they are not
/// part of the value-derived Stage and any field edit erases them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestPhase {
    /// No request in flight, nothing to show
    #[default]
    Idle,
    /// Completion call in flight; input is ignored, no cancellation
    Requesting,
    /// Itinerary text received
    Done(String),
    /// Validation or remote failure, displayed inline
    Failed(String),
}

/// All state the TUI renders from
#[derive(Debug)]
pub struct AppState {
    // === Widget buffers ===
    pub destination: String,
    pub budget: Budget,
    /// Numeric buffer; parsed and clamped when the request is built
    pub member_count: String,
    /// Numeric buffer; parsed and clamped when the request is built
    pub duration_days: String,
    pub purpose: String,
    pub preferences: String,
    pub wants_followup: bool,
    pub activities: String,
    pub accommodation: Option<Accommodation>,
    pub transportation: Option<Transit>,

    // === Interaction state ===
    /// Currently focused widget
    pub focus: Field,
    /// Submission outcome for the output pane
    pub phase: RequestPhase,
    /// Set by the App when submit is triggered; consumed by the runner
    pub pending_submit: bool,
    /// Busy-indicator word, picked when a request starts
    pub busy_word: String,
    /// When the in-flight request started
    pub busy_start: Option<Instant>,
    /// Manual scroll offset for the output pane
    pub output_scroll: u16,
    /// Exit flag
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create the initial form state (matches TripRequest defaults)
    pub fn new() -> Self {
        debug!("AppState::new: called");
        let defaults = TripRequest::default();
        Self {
            destination: String::new(),
            budget: defaults.budget,
            member_count: defaults.member_count.to_string(),
            duration_days: defaults.duration_days.to_string(),
            purpose: String::new(),
            preferences: String::new(),
            wants_followup: false,
            activities: String::new(),
            accommodation: None,
            transportation: None,
            focus: Field::Destination,
            phase: RequestPhase::default(),
            pending_submit: false,
            busy_word: String::new(),
            busy_start: None,
            output_scroll: 0,
            should_quit: false,
        }
    }

    /// Build the transient trip request from current widget values
    ///
    /// Numeric buffers parse leniently: garbage falls back to the field
    /// default, then the value is clamped into range.
    pub fn trip_request(&self) -> TripRequest {
        let defaults = TripRequest::default();
        let member_count = self
            .member_count
            .parse::<u32>()
            .unwrap_or(defaults.member_count)
            .max(MIN_MEMBER_COUNT);
        let duration_days = self
            .duration_days
            .parse::<u32>()
            .unwrap_or(defaults.duration_days)
            .clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS);

        TripRequest {
            destination: self.destination.clone(),
            budget: self.budget,
            member_count,
            duration_days,
            purpose: self.purpose.clone(),
            preferences: self.preferences.clone(),
            wants_followup: self.wants_followup,
            activities: self.activities.clone(),
            accommodation: self.accommodation,
            transportation: self.transportation,
        }
    }

    /// Current form stage, derived from the widget values
    pub fn stage(&self) -> Stage {
        Stage::of(&self.trip_request())
    }

    /// Widgets visible for the current stage, in traversal order
    pub fn visible_fields(&self) -> Vec<Field> {
        let stage = self.stage();
        let mut fields = vec![Field::Destination];

        if stage.shows_details() {
            fields.extend([Field::Budget, Field::Members, Field::Duration, Field::Purpose]);
        }
        if stage.shows_preferences() {
            fields.extend([Field::Preferences, Field::FollowupToggle]);
            if self.wants_followup {
                fields.extend([Field::Activities, Field::Accommodation, Field::Transportation]);
            }
        }
        // Submit is reachable as soon as the destination exists; pressing
        // it with an empty purpose produces the inline validation error
        if stage.shows_details() {
            fields.push(Field::Submit);
        }

        fields
    }

    /// Move focus to the next visible widget (wraps)
    pub fn focus_next(&mut self) {
        let visible = self.visible_fields();
        let idx = visible.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = visible[(idx + 1) % visible.len()];
        debug!(focus = ?self.focus, "AppState::focus_next: moved");
    }

    /// Move focus to the previous visible widget (wraps)
    pub fn focus_prev(&mut self) {
        let visible = self.visible_fields();
        let idx = visible.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = visible[(idx + visible.len() - 1) % visible.len()];
        debug!(focus = ?self.focus, "AppState::focus_prev: moved");
    }

    /// Re-anchor focus after an edit hid the focused widget
    ///
    /// Walks backward through the canonical order until a visible widget
    /// is found; Destination is always visible so this terminates.
    pub fn ensure_focus_visible(&mut self) {
        let visible = self.visible_fields();
        if visible.contains(&self.focus) {
            return;
        }
        let mut idx = Field::ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        while idx > 0 {
            idx -= 1;
            if visible.contains(&Field::ORDER[idx]) {
                break;
            }
        }
        self.focus = Field::ORDER[idx];
        debug!(focus = ?self.focus, "AppState::ensure_focus_visible: re-anchored");
    }

    /// Record that a field value changed
    ///
    /// Erases any Submitted/Failed outcome: the state machine is
    /// recomputed from values, so the next render shows the derived stage.
    pub fn mark_edited(&mut self) {
        if self.phase != RequestPhase::Idle && self.phase != RequestPhase::Requesting {
            debug!("AppState::mark_edited: clearing outcome");
            self.phase = RequestPhase::Idle;
            self.output_scroll = 0;
        }
        self.ensure_focus_visible();
    }

    /// Mutable access to the focused text buffer, if any
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Destination => Some(&mut self.destination),
            Field::Purpose => Some(&mut self.purpose),
            Field::Preferences => Some(&mut self.preferences),
            Field::Activities => Some(&mut self.activities),
            _ => None,
        }
    }

    /// Append a character to the focused widget
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            f if f.is_text() => {
                if let Some(buffer) = self.focused_text_mut()
                    && buffer.len() < MAX_TEXT_LEN
                {
                    buffer.push(c);
                }
            }
            Field::Members if c.is_ascii_digit() => {
                if self.member_count.len() < 3 {
                    self.member_count.push(c);
                }
            }
            Field::Duration if c.is_ascii_digit() => {
                if self.duration_days.len() < 2 {
                    self.duration_days.push(c);
                }
            }
            _ => return,
        }
        self.mark_edited();
    }

    /// Delete the last character of the focused widget
    pub fn backspace(&mut self) {
        match self.focus {
            f if f.is_text() => {
                if let Some(buffer) = self.focused_text_mut() {
                    buffer.pop();
                }
            }
            Field::Members => {
                self.member_count.pop();
            }
            Field::Duration => {
                self.duration_days.pop();
            }
            _ => return,
        }
        self.mark_edited();
    }

    /// Cycle the focused selector left/step the focused number down
    pub fn cycle_prev(&mut self) {
        match self.focus {
            Field::Budget => self.budget = self.budget.prev(),
            Field::Accommodation => {
                self.accommodation = Some(self.accommodation.unwrap_or_default().prev());
            }
            Field::Transportation => {
                self.transportation = Some(self.transportation.unwrap_or_default().prev());
            }
            Field::Members => self.step_members(-1),
            Field::Duration => self.step_duration(-1),
            _ => return,
        }
        self.mark_edited();
    }

    /// Cycle the focused selector right/step the focused number up
    pub fn cycle_next(&mut self) {
        match self.focus {
            Field::Budget => self.budget = self.budget.next(),
            Field::Accommodation => {
                self.accommodation = Some(self.accommodation.unwrap_or_default().next());
            }
            Field::Transportation => {
                self.transportation = Some(self.transportation.unwrap_or_default().next());
            }
            Field::Members => self.step_members(1),
            Field::Duration => self.step_duration(1),
            _ => return,
        }
        self.mark_edited();
    }

    fn step_members(&mut self, delta: i64) {
        let current = self.member_count.parse::<i64>().unwrap_or(1);
        let next = (current + delta).max(MIN_MEMBER_COUNT as i64);
        self.member_count = next.to_string();
    }

    fn step_duration(&mut self, delta: i64) {
        let current = self.duration_days.parse::<i64>().unwrap_or(3);
        let next = (current + delta).clamp(MIN_DURATION_DAYS as i64, MAX_DURATION_DAYS as i64);
        self.duration_days = next.to_string();
    }

    /// Toggle the follow-up section
    ///
    /// Opening pre-selects the default accommodation and transportation,
    /// so the selectors never show an unanswered state on screen.
    pub fn toggle_followup(&mut self) {
        self.wants_followup = !self.wants_followup;
        if self.wants_followup {
            self.accommodation.get_or_insert_default();
            self.transportation.get_or_insert_default();
        }
        debug!(wants_followup = self.wants_followup, "AppState::toggle_followup: toggled");
        self.mark_edited();
    }

    /// Whether a request is currently in flight
    pub fn is_requesting(&self) -> bool {
        matches!(self.phase, RequestPhase::Requesting)
    }

    /// Start the busy indicator - pick a random word, stamp the start time
    pub fn begin_request(&mut self) {
        debug!("AppState::begin_request: called");
        let mut rng = rand::rng();
        self.busy_word = PLANNING_WORDS.choose(&mut rng).unwrap_or(&"Planning").to_string();
        self.busy_start = Some(Instant::now());
        self.phase = RequestPhase::Requesting;
        self.output_scroll = 0;
    }

    /// Record the submission outcome
    pub fn finish_request(&mut self, result: Result<String, String>) {
        debug!(ok = result.is_ok(), "AppState::finish_request: called");
        self.busy_start = None;
        self.phase = match result {
            Ok(itinerary) => RequestPhase::Done(itinerary),
            Err(message) => RequestPhase::Failed(message),
        };
    }

    /// Seconds since the in-flight request started
    pub fn busy_elapsed_secs(&self) -> u64 {
        self.busy_start.map(|t| t.elapsed().as_secs()).unwrap_or(0)
    }
}
