use engine::{BalanceStatus, Currency, MoneyCents};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// `CUR 12.34`, two decimals, no colouring.
#[must_use]
pub fn format_amount(currency: Currency, amount: MoneyCents) -> String {
    format!("{currency} {amount}")
}

/// Bold amount in the "spent" colour.
#[must_use]
pub fn styled_spent(currency: Currency, amount: MoneyCents, theme: &Theme) -> Span<'static> {
    Span::styled(
        format_amount(currency, amount),
        Style::default()
            .fg(theme.negative)
            .add_modifier(Modifier::BOLD),
    )
}

/// Bold balance: red when negative, green otherwise.
#[must_use]
pub fn styled_balance(
    currency: Currency,
    amount: MoneyCents,
    status: BalanceStatus,
    theme: &Theme,
) -> Span<'static> {
    let color = match status {
        BalanceStatus::Negative => theme.negative,
        BalanceStatus::NonNegative => theme.positive,
    };
    Span::styled(
        format_amount(currency, amount),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
