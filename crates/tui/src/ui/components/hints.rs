use ratatui::{style::Style, text::Span};

use crate::{app::FormField, ui::theme::Theme};

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Hints for the focused field followed by the global shortcuts.
pub fn for_focus(focus: FormField) -> Vec<KeyHint> {
    let mut hints = match focus {
        FormField::Income => vec![KeyHint::new("0-9", "income")],
        FormField::Category | FormField::Amount | FormField::Description => {
            vec![KeyHint::new("Enter", "add expense")]
        }
        FormField::Currency | FormField::PaymentMethod => vec![
            KeyHint::new("←→", "change"),
            KeyHint::new("Enter", "add expense"),
        ],
        FormField::List => vec![
            KeyHint::new("↑↓", "select"),
            KeyHint::new("Del/d", "remove"),
        ],
    };
    hints.extend([
        KeyHint::new("Tab", "next"),
        KeyHint::new("Ctrl+E", "csv"),
        KeyHint::new("Ctrl+D", "pdf"),
        KeyHint::new("Ctrl+T", "theme"),
        KeyHint::new("Esc", "quit"),
    ]);
    hints
}
