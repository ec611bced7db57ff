//! TUI views and rendering
//!
//! All rendering logic is contained here. The views module is responsible
//! for drawing the UI based on AppState, but never modifies state.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tracing::trace;

use super::state::{AppState, Field, RequestPhase};
use crate::trip::{Accommodation, Transit};

/// Status colors (k9s-inspired)
mod colors {
    use ratatui::style::Color;

    pub const READY: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const BUSY: Color = Color::Rgb(255, 215, 0); // Gold
    pub const FAILED: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED_BG: Color = Color::Rgb(40, 40, 40);
    pub const DIM: Color = Color::DarkGray;
}

/// Placeholder texts, shown dim while a field is empty
mod placeholders {
    pub const DESTINATION: &str = "Where would you like to go?";
    pub const PURPOSE: &str = "Adventure, relaxation, cultural, etc.";
    pub const PREFERENCES: &str = "Tell us about your interests, dietary restrictions, or mobility concerns.";
    pub const ACTIVITIES: &str = "E.g., hiking, museums, food tours, etc.";
}

/// Main render function
pub fn render(state: &mut AppState, frame: &mut Frame) {
    trace!("render: called");
    let visible = state.visible_fields();
    let form_height = visible.len() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(form_height), // Form
            Constraint::Min(5),              // Output
            Constraint::Length(3),           // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    render_form(state, &visible, frame, chunks[1]);
    render_output(state, frame, chunks[2]);
    render_footer(state, frame, chunks[3]);
}

/// Render header with title and request status
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_header: called");
    let (indicator, indicator_color) = match &state.phase {
        RequestPhase::Idle => ("●", colors::DIM),
        RequestPhase::Requesting => ("●", colors::BUSY),
        RequestPhase::Done(_) => ("●", colors::READY),
        RequestPhase::Failed(_) => ("●", colors::FAILED),
    };

    let line = Line::from(vec![
        Span::styled(format!("{} ", indicator), Style::default().fg(indicator_color)),
        Span::styled(
            "Wayfarer",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Plan your perfect trip with a personalized itinerary!",
            Style::default().fg(colors::DIM),
        ),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the progressive-disclosure form, one line per visible widget
fn render_form(state: &AppState, visible: &[Field], frame: &mut Frame, area: Rect) {
    trace!(field_count = visible.len(), "render_form: called");
    let lines: Vec<Line> = visible.iter().map(|field| field_line(state, *field)).collect();

    let form = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Trip Request "));
    frame.render_widget(form, area);
}

/// Build the display line for one widget
fn field_line(state: &AppState, field: Field) -> Line<'static> {
    let focused = state.focus == field;
    let marker = if focused { "▸ " } else { "  " };

    let mut spans = vec![Span::raw(marker.to_string())];

    match field {
        Field::Destination => {
            spans.push(label("Destination"));
            spans.extend(text_value(&state.destination, placeholders::DESTINATION, focused));
        }
        Field::Budget => {
            spans.push(label("Budget"));
            spans.push(selector_value(state.budget.to_string(), focused));
        }
        Field::Members => {
            spans.push(label("Members"));
            spans.push(selector_value(state.member_count.clone(), focused));
        }
        Field::Duration => {
            spans.push(label("Duration (days)"));
            spans.push(selector_value(state.duration_days.clone(), focused));
        }
        Field::Purpose => {
            spans.push(label("Purpose"));
            spans.extend(text_value(&state.purpose, placeholders::PURPOSE, focused));
        }
        Field::Preferences => {
            spans.push(label("Preferences"));
            spans.extend(text_value(&state.preferences, placeholders::PREFERENCES, focused));
        }
        Field::FollowupToggle => {
            let check = if state.wants_followup { "[x]" } else { "[ ]" };
            spans.push(Span::raw(format!("{} Answer follow-up questions?", check)));
        }
        Field::Activities => {
            spans.push(label("Activities"));
            spans.extend(text_value(&state.activities, placeholders::ACTIVITIES, focused));
        }
        Field::Accommodation => {
            spans.push(label("Accommodation"));
            let value = state.accommodation.unwrap_or(Accommodation::Hotels);
            spans.push(selector_value(value.to_string(), focused));
        }
        Field::Transportation => {
            spans.push(label("Transportation"));
            let value = state.transportation.unwrap_or(Transit::PublicTransit);
            spans.push(selector_value(value.to_string(), focused));
        }
        Field::Submit => {
            let style = if focused {
                Style::default().fg(colors::READY).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::READY)
            };
            spans.push(Span::styled("[ Generate Itinerary ]", style));
        }
    }

    let mut line = Line::from(spans);
    if focused {
        line = line.style(Style::default().bg(colors::SELECTED_BG));
    }
    line
}

/// Fixed-width field label
fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{:<17}", text), Style::default().fg(colors::HEADER))
}

/// Value spans for a text field, with placeholder and cursor
fn text_value(value: &str, placeholder: &str, focused: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if value.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), Style::default().fg(colors::DIM)));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors::HEADER)));
    }
    spans
}

/// Value span for a selector or stepper, with arrows when focused
fn selector_value(value: String, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(format!("◂ {} ▸", value), Style::default().add_modifier(Modifier::BOLD))
    } else {
        Span::raw(value)
    }
}

/// Render the read-only output pane
fn render_output(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_output: called");
    let block = Block::default().borders(Borders::ALL).title(" Itinerary ");

    let paragraph = match &state.phase {
        RequestPhase::Idle => Paragraph::new(Line::from(Span::styled(
            "Fill in the form and press Generate Itinerary.",
            Style::default().fg(colors::DIM),
        ))),
        RequestPhase::Requesting => Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}… ", state.busy_word),
                Style::default().fg(colors::BUSY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({}s)", state.busy_elapsed_secs()),
                Style::default().fg(colors::DIM),
            ),
        ])),
        RequestPhase::Done(itinerary) => {
            let text = tui_markdown::from_str(itinerary);
            Paragraph::new(text)
        }
        RequestPhase::Failed(message) => Paragraph::new(Line::from(Span::styled(
            format!("An error occurred: {}", message),
            Style::default().fg(colors::FAILED),
        ))),
    };

    frame.render_widget(
        paragraph
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.output_scroll, 0)),
        area,
    );
}

/// Render footer with context-sensitive keybinds
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    trace!("render_footer: called");
    let hints: &[(&str, &str)] = if state.is_requesting() {
        &[("Esc", "quit")]
    } else {
        &[
            ("Tab/↓", "next"),
            ("↑", "prev"),
            ("←/→", "adjust"),
            ("Space", "toggle"),
            ("Enter", "submit"),
            ("PgUp/PgDn", "scroll"),
            ("Esc", "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::DIM)));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
