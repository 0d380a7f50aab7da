pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::for_mode(state.dark_mode);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    // Title bar, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title_bar(frame, layout[0], state, &theme);
    screens::expenses::render(frame, layout[1], state, &theme);
    render_bottom_bar(frame, layout[2], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_title_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mode = if state.dark_mode { "Dark" } else { "Light" };
    let line = Line::from(vec![
        Span::styled(
            "Expense Tracker",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Records", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.ledger.ledger.len())),
        Span::styled("Theme", Style::default().fg(theme.dim)),
        Span::raw(format!(": {mode}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = components::hints::for_focus(state.focus);
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::AppConfig;

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_ledger_shows_placeholder_and_zero_totals() {
        let state = AppState::new(&AppConfig::default());
        let text = screen_text(&state);
        assert!(text.contains("No expenses added yet."));
        assert!(text.contains("Total Spent: INR 0.00"));
        assert!(text.contains("Remaining Balance: INR 0.00"));
    }

    #[test]
    fn records_are_listed_with_description_fallback() {
        let mut state = AppState::new(&AppConfig::default());
        let mut draft = state.ledger.draft.clone();
        draft.category = "Transport".to_string();
        draft.amount = "5".to_string();
        state.ledger = state
            .ledger
            .with_draft(draft)
            .add_expense(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();

        let text = screen_text(&state);
        assert!(text.contains("Transport - INR 5.00 (Cash)"));
        assert!(text.contains("No description | 1/1/2024"));
        assert!(text.contains("Remaining Balance: INR -5.00"));
    }
}
