use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use engine::{ExpenseRecord, categories};

use crate::{
    app::{AppState, FormField},
    ui::{
        components::{card::Card, money},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Form: 6 fields + hint + borders
            Constraint::Min(3),     // Expense list
            Constraint::Length(4),  // Totals
        ])
        .split(area);

    render_form(frame, layout[0], state, theme);
    render_list(frame, layout[1], state, theme);
    render_totals(frame, layout[2], state, theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let form_focused = state.focus != FormField::List;
    let card = Card::new("New expense", theme).focused(form_focused);
    let inner = card.block().inner(area);
    frame.render_widget(card.block(), area);

    let draft = &state.ledger.draft;
    let mut lines = vec![
        input_line(FormField::Income, &state.income_input, state.focus, theme),
        input_line(FormField::Category, &draft.category, state.focus, theme),
        input_line(FormField::Amount, &draft.amount, state.focus, theme),
        input_line(FormField::Description, &draft.description, state.focus, theme),
        selector_line(
            FormField::Currency,
            &format!("{} ({})", draft.currency, draft.currency.symbol()),
            state.focus,
            theme,
        ),
        selector_line(
            FormField::PaymentMethod,
            draft.payment_method.label(),
            state.focus,
            theme,
        ),
    ];

    if let Some(hint) = &state.hint {
        lines.push(Line::from(Span::styled(
            hint.as_str(),
            Style::default().fg(theme.dim),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_label(field: FormField, focus: FormField, theme: &Theme) -> Span<'static> {
    let style = if field == focus {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };
    Span::styled(format!("{:<12}", field.label()), style)
}

fn input_line<'a>(field: FormField, value: &'a str, focus: FormField, theme: &Theme) -> Line<'a> {
    let cursor = if field == focus { "│" } else { "" };
    Line::from(vec![
        field_label(field, focus, theme),
        Span::styled(value, Style::default().fg(theme.text)),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ])
}

fn selector_line(field: FormField, value: &str, focus: FormField, theme: &Theme) -> Line<'static> {
    let (left, right) = if field == focus { ("‹ ", " ›") } else { ("  ", "") };
    Line::from(vec![
        field_label(field, focus, theme),
        Span::styled(left, Style::default().fg(theme.accent)),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
        Span::styled(right, Style::default().fg(theme.accent)),
    ])
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == FormField::List;
    let card = Card::new("Your Expenses", theme).focused(focused);
    let expenses = state.ledger.ledger.expenses();

    if expenses.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No expenses added yet.",
            Style::default().fg(theme.dim),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(card.block());
        frame.render_widget(empty, area);
        return;
    }

    let items = expenses
        .iter()
        .map(|expense| expense_item(expense, theme))
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.selected));
    }

    let list = List::new(items)
        .block(card.block())
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn expense_item(expense: &ExpenseRecord, theme: &Theme) -> ListItem<'static> {
    let headline = Line::from(vec![
        Span::styled(
            format!(
                "{} {}",
                categories::icon_for(&expense.category),
                expense.category
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " - {} ({})",
            money::format_amount(expense.currency, expense.amount),
            expense.payment_method
        )),
    ]);

    let description = if expense.description.is_empty() {
        "No description"
    } else {
        expense.description.as_str()
    };
    let detail = Line::from(Span::styled(
        format!("   {description} | {}", expense.date_label()),
        Style::default().fg(theme.dim),
    ));

    ListItem::new(vec![headline, detail])
}

fn render_totals(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Summary", theme);
    let totals = state.ledger.totals();
    // Labelled with the selected currency, whatever the records carry.
    let currency = state.ledger.draft.currency;

    let lines = vec![
        Line::from(vec![
            Span::raw("Total Spent: "),
            money::styled_spent(currency, totals.total_spent, theme),
        ]),
        Line::from(vec![
            Span::raw("Remaining Balance: "),
            money::styled_balance(
                currency,
                totals.remaining_balance,
                totals.balance_status(),
                theme,
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(card.block()),
        area,
    );
}
