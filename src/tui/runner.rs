//! TUI Runner - main loop that owns the terminal
//!
//! The TuiRunner is responsible for:
//! - Dispatching events to App for handling
//! - Rendering on every loop pass
//! - Spawning the completion call on submit and collecting its result
//!
//! One background task exists at most, for the duration of one in-flight
//! request; its result comes back over an mpsc channel so the render loop
//! never blocks on the network.

use std::sync::Arc;

use eyre::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::planner::{ItineraryPlanner, PlanError};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
    /// Planner shared with the in-flight request task
    planner: Arc<ItineraryPlanner>,
    /// Receiver for the in-flight request result
    plan_rx: Option<mpsc::Receiver<Result<String, PlanError>>>,
    /// Handle to the background request task
    plan_task: Option<JoinHandle<()>>,
}

impl TuiRunner {
    /// Create a new TuiRunner
    pub fn new(terminal: Tui, planner: ItineraryPlanner) -> Self {
        debug!("TuiRunner::new: called");
        Self {
            app: App::new(),
            terminal,
            event_handler: EventHandler::new(Duration::from_millis(100)),
            planner: Arc::new(planner),
            plan_rx: None,
            plan_task: None,
        }
    }

    /// Run the main loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        debug!("TuiRunner::run: entering main loop");
        loop {
            // Draw the UI
            self.terminal.draw(|frame| views::render(self.app.state_mut(), frame))?;

            // Wait for either a terminal event or the request result
            tokio::select! {
                event = self.event_handler.next() => {
                    match event? {
                        Event::Tick => {
                            // Nothing to poll; the redraw at the top of the
                            // loop keeps the busy indicator moving
                        }
                        Event::Key(key_event) => {
                            if self.app.handle_key(key_event) {
                                break;
                            }
                            if self.app.state_mut().pending_submit {
                                self.app.state_mut().pending_submit = false;
                                self.start_request();
                            }
                        }
                        Event::Resize(width, height) => {
                            debug!(width, height, "TuiRunner::run: resize");
                        }
                    }
                }
                Some(result) = async {
                    match &mut self.plan_rx {
                        Some(rx) => rx.recv().await,
                        None => std::future::pending().await,
                    }
                } => {
                    self.finish_request(result);
                }
            }

            if self.app.state().should_quit {
                debug!("TuiRunner::run: should_quit is true, breaking");
                break;
            }
        }

        debug!("TuiRunner::run: exiting");
        Ok(())
    }

    /// Kick off one completion call on a background task
    ///
    /// Validation runs first, synchronously: a missing required field is
    /// displayed immediately and no task is spawned (and therefore no
    /// remote call is made).
    fn start_request(&mut self) {
        if self.app.state().is_requesting() {
            debug!("TuiRunner::start_request: request already in flight, ignoring");
            return;
        }

        let request = self.app.state().trip_request();
        info!(destination = %request.destination, "start_request: submit triggered");

        if let Err(e) = self.planner.build_prompt(&request) {
            warn!(error = %e, "start_request: validation failed");
            self.app.state_mut().finish_request(Err(e.to_string()));
            return;
        }

        let planner = Arc::clone(&self.planner);
        let (tx, rx) = mpsc::channel(1);
        self.plan_rx = Some(rx);
        self.plan_task = Some(tokio::spawn(async move {
            let result = planner.plan(&request).await;
            let _ = tx.send(result).await;
        }));

        self.app.state_mut().begin_request();
    }

    /// Record the outcome of the in-flight request
    fn finish_request(&mut self, result: Result<String, PlanError>) {
        match &result {
            Ok(text) => info!(chars = text.len(), "finish_request: itinerary received"),
            Err(e) => warn!(error = %e, "finish_request: request failed"),
        }
        self.app.state_mut().finish_request(result.map_err(|e| e.to_string()));
        self.plan_rx = None;
        self.plan_task = None;
    }
}
