//! UI rendering for the dashboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::features::timer::{format_minutes, format_time, SessionType, TimerStatus};
use crate::tui::app::App;
use crate::tui::event::help_text;

const fn type_color(session_type: SessionType) -> Color {
    match session_type {
        SessionType::Focus => Color::Red,
        SessionType::ShortBreak => Color::Green,
        SessionType::LongBreak => Color::Blue,
        SessionType::Custom => Color::Magenta,
    }
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // header, countdown, today, history, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_today(frame, app, chunks[2]);
    render_history(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let (label, color) = match &state.current_session {
        Some(session) => (
            format!(
                " {} · {} · {} ",
                session.session_type.display_name(),
                session.subject,
                state.status()
            ),
            type_color(session.session_type),
        ),
        None => (" Ready ".to_string(), Color::Cyan),
    };

    let header = Paragraph::new(label)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" studytimer ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let color = state
        .current_session
        .as_ref()
        .map_or(Color::DarkGray, |s| type_color(s.session_type));
    let color = if state.status() == TimerStatus::Paused {
        Color::Yellow
    } else {
        color
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(state.progress().clamp(0.0, 1.0))
        .label(Span::styled(
            format_time(state.time_left),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(gauge, area);
}

fn render_today(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let today = app.today();
    let state = app.state();

    let quality = if today.average_quality > 0.0 {
        format!("{:.1}", today.average_quality)
    } else {
        "-".to_string()
    };

    let line = Line::from(vec![
        Span::styled("Today ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "{} in {} sessions, quality {}",
            format_minutes(today.total_minutes),
            today.session_count,
            quality
        )),
        Span::styled(
            format!(
                "   Total {} · next: {}",
                format_minutes(state.total_study_time),
                app.suggested_break().session_type().display_name()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let panel = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_history(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .recent()
        .into_iter()
        .map(|session| {
            let mut spans = vec![
                Span::styled(
                    session.start_time_local().format("%m-%d %H:%M  ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<12}", session.session_type.display_name()),
                    Style::default().fg(type_color(session.session_type)),
                ),
                Span::raw(format!("{:>4}m  ", session.duration)),
                Span::styled(
                    session.subject.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];

            if let Some(q) = session.quality {
                spans.push(Span::styled(
                    format!("  {}", "★".repeat(usize::from(q))),
                    Style::default().fg(Color::Yellow),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Recent sessions ")
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(help_text());
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::timer::{SessionDraft, StudyTimer, TimerDriver, TimerOptions};
    use crate::storage::MemoryStorage;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_running_session() {
        let options = TimerOptions {
            sound_enabled: false,
            notifications_enabled: false,
            ..TimerOptions::default()
        };
        let mut timer = StudyTimer::new(options, Box::new(MemoryStorage::new()));
        timer.start_session(SessionDraft::focus("Topology").with_duration(2));
        let app = App::new(TimerDriver::with_period(timer, Duration::from_secs(3600)));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Topology"));
        assert!(text.contains("02:00"));
        assert!(text.contains("Recent sessions"));
    }
}
