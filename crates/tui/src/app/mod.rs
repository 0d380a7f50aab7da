use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{DirectorySink, DownloadSink, EngineError, ExportFormat, LedgerState, export};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

/// Focus order of the form, ending on the expense list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Income,
    Category,
    Amount,
    Description,
    Currency,
    PaymentMethod,
    List,
}

impl FormField {
    const ORDER: [FormField; 7] = [
        FormField::Income,
        FormField::Category,
        FormField::Amount,
        FormField::Description,
        FormField::Currency,
        FormField::PaymentMethod,
        FormField::List,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Category => "Category",
            Self::Amount => "Amount",
            Self::Description => "Description",
            Self::Currency => "Currency",
            Self::PaymentMethod => "Payment",
            Self::List => "Expenses",
        }
    }

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn is_numeric(self) -> bool {
        matches!(self, Self::Income | Self::Amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug)]
pub struct AppState {
    pub ledger: LedgerState,
    /// Raw income text; the ledger keeps the last value that parsed.
    pub income_input: String,
    pub focus: FormField,
    pub selected: usize,
    pub dark_mode: bool,
    /// Inline validation hint shown under the form.
    pub hint: Option<String>,
    pub toast: Option<ToastState>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            ledger: LedgerState::new(config.currency, config.payment_method),
            income_input: String::new(),
            focus: FormField::Category,
            selected: 0,
            dark_mode: config.dark_mode,
            hint: None,
            toast: None,
        }
    }
}

pub struct App<S = DirectorySink> {
    sink: S,
    pub state: AppState,
    should_quit: bool,
}

impl App<DirectorySink> {
    pub fn new(config: AppConfig) -> Self {
        let sink = DirectorySink::new(&config.export_dir);
        Self::with_sink(&config, sink)
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.apply(map_key(key), Local::now().date_naive());
    }
}

impl<S: DownloadSink> App<S> {
    pub fn with_sink(config: &AppConfig, sink: S) -> Self {
        Self {
            sink,
            state: AppState::new(config),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one action; `today` dates any expense added by it.
    pub fn apply(&mut self, action: AppAction, today: NaiveDate) {
        self.state.toast = None;

        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::NextField => self.state.focus = self.state.focus.next(),
            AppAction::PrevField => self.state.focus = self.state.focus.prev(),
            AppAction::Submit => self.submit(today),
            AppAction::Backspace => self.edit_text(|text| {
                text.pop();
            }),
            AppAction::Delete => self.remove_selected(),
            AppAction::Up => self.select_prev(),
            AppAction::Down => self.select_next(),
            AppAction::Left => self.cycle_selector(false),
            AppAction::Right => self.cycle_selector(true),
            AppAction::ExportCsv => self.export(ExportFormat::Csv),
            AppAction::ExportPdf => self.export(ExportFormat::Pdf),
            AppAction::ToggleTheme => self.state.dark_mode = !self.state.dark_mode,
            AppAction::Input(ch) => self.input(ch),
            AppAction::None => {}
        }
    }

    fn submit(&mut self, today: NaiveDate) {
        match self.state.focus {
            FormField::Income => self.commit_income(),
            FormField::List => {}
            _ => match self.state.ledger.add_expense(today) {
                Ok(next) => {
                    self.state.ledger = next;
                    self.state.hint = None;
                    self.state.focus = FormField::Category;
                }
                Err(err) => self.state.hint = Some(hint_for(&err)),
            },
        }
    }

    fn input(&mut self, ch: char) {
        match self.state.focus {
            FormField::List => {
                if ch == 'd' {
                    self.remove_selected();
                }
            }
            FormField::Currency | FormField::PaymentMethod => {}
            field => {
                if field.is_numeric()
                    && !(ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-' | '+' | 'e' | 'E'))
                {
                    return;
                }
                self.edit_text(|text| text.push(ch));
            }
        }
    }

    /// Runs `edit` on the focused text buffer, if any.
    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        let mut draft = self.state.ledger.draft.clone();
        let buffer = match self.state.focus {
            FormField::Income => {
                edit(&mut self.state.income_input);
                self.commit_income();
                return;
            }
            FormField::Category => &mut draft.category,
            FormField::Amount => &mut draft.amount,
            FormField::Description => &mut draft.description,
            FormField::Currency | FormField::PaymentMethod | FormField::List => return,
        };
        edit(buffer);
        self.state.ledger = self.state.ledger.with_draft(draft);
    }

    fn commit_income(&mut self) {
        match self.state.ledger.set_income(&self.state.income_input) {
            Ok(next) => {
                self.state.ledger = next;
                self.state.hint = None;
            }
            Err(err) => self.state.hint = Some(hint_for(&err)),
        }
    }

    fn cycle_selector(&mut self, forward: bool) {
        let mut draft = self.state.ledger.draft.clone();
        match self.state.focus {
            FormField::Currency => draft.cycle_currency(forward),
            FormField::PaymentMethod => draft.cycle_payment_method(forward),
            _ => return,
        }
        self.state.ledger = self.state.ledger.with_draft(draft);
    }

    fn select_next(&mut self) {
        let len = self.state.ledger.ledger.len();
        if self.state.focus != FormField::List || len == 0 {
            return;
        }
        self.state.selected = (self.state.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        if self.state.focus != FormField::List {
            return;
        }
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    fn remove_selected(&mut self) {
        if self.state.focus != FormField::List {
            return;
        }
        self.state.ledger = self.state.ledger.remove_expense(self.state.selected);
        let len = self.state.ledger.ledger.len();
        self.state.selected = self.state.selected.min(len.saturating_sub(1));
    }

    fn export(&mut self, format: ExportFormat) {
        let toast = match export::export(format, &self.state.ledger.ledger, &mut self.sink) {
            Ok(path) => ToastState {
                message: format!("Saved {}", path.display()),
                level: ToastLevel::Success,
            },
            Err(err) => {
                tracing::error!("{} export failed: {err}", format.label());
                ToastState {
                    message: format!("{} export failed: {err}", format.label()),
                    level: ToastLevel::Error,
                }
            }
        };
        self.state.toast = Some(toast);
    }
}

fn hint_for(err: &EngineError) -> String {
    match err {
        EngineError::InvalidCategory => "Enter a category.".to_string(),
        EngineError::InvalidAmount(reason) => format!("Invalid amount: {reason}."),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use engine::{Currency, MoneyCents, PaymentMethod, ResultEngine};

    use super::*;

    #[derive(Default)]
    struct MemorySink {
        files: Vec<(String, Vec<u8>)>,
    }

    impl DownloadSink for MemorySink {
        fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> ResultEngine<PathBuf> {
            self.files.push((file_name.to_string(), bytes.to_vec()));
            Ok(PathBuf::from(file_name))
        }
    }

    struct FailingSink;

    impl DownloadSink for FailingSink {
        fn deliver(&mut self, _file_name: &str, _bytes: &[u8]) -> ResultEngine<PathBuf> {
            Err(EngineError::Io(std::io::Error::from(
                std::io::ErrorKind::PermissionDenied,
            )))
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn app() -> App<MemorySink> {
        App::with_sink(&AppConfig::default(), MemorySink::default())
    }

    fn type_text<S: DownloadSink>(app: &mut App<S>, text: &str) {
        for ch in text.chars() {
            app.apply(AppAction::Input(ch), day());
        }
    }

    fn focus<S: DownloadSink>(app: &mut App<S>, field: FormField) {
        while app.state.focus != field {
            app.apply(AppAction::NextField, day());
        }
    }

    fn add<S: DownloadSink>(app: &mut App<S>, category: &str, amount: &str, description: &str) {
        focus(app, FormField::Category);
        type_text(app, category);
        focus(app, FormField::Amount);
        type_text(app, amount);
        focus(app, FormField::Description);
        type_text(app, description);
        app.apply(AppAction::Submit, day());
    }

    #[test]
    fn submit_adds_and_resets_text_fields() {
        let mut app = app();
        focus(&mut app, FormField::Currency);
        app.apply(AppAction::Right, day());
        focus(&mut app, FormField::PaymentMethod);
        app.apply(AppAction::Right, day());

        add(&mut app, "Food", "10", "lunch");

        let state = &app.state.ledger;
        assert_eq!(state.ledger.len(), 1);
        assert!(state.draft.category.is_empty());
        assert!(state.draft.amount.is_empty());
        assert!(state.draft.description.is_empty());
        assert_eq!(state.draft.currency, Currency::Usd);
        assert_eq!(state.draft.payment_method, PaymentMethod::Upi);
        assert_eq!(app.state.focus, FormField::Category);
        assert!(app.state.hint.is_none());
    }

    #[test]
    fn invalid_submit_is_a_noop_with_hint() {
        let mut app = app();
        add(&mut app, "Food", "", "");
        assert!(app.state.ledger.ledger.is_empty());
        assert_eq!(app.state.ledger.draft.category, "Food");
        assert!(app.state.hint.is_some());
    }

    #[test]
    fn amount_field_ignores_letters() {
        let mut app = app();
        focus(&mut app, FormField::Amount);
        type_text(&mut app, "1a2.5b");
        assert_eq!(app.state.ledger.draft.amount, "12.5");
    }

    #[test]
    fn income_updates_while_typing() {
        let mut app = app();
        focus(&mut app, FormField::Income);
        type_text(&mut app, "250");
        assert_eq!(app.state.ledger.ledger.income(), MoneyCents::new(25_000));

        app.apply(AppAction::Backspace, day());
        assert_eq!(app.state.ledger.ledger.income(), MoneyCents::new(2_500));

        // "25.5" is the last value that parsed.
        type_text(&mut app, ".5.");
        assert_eq!(app.state.ledger.ledger.income(), MoneyCents::new(2_550));
        assert!(app.state.hint.is_some());
    }

    #[test]
    fn income_accepts_exponent_and_extra_decimals() {
        let mut app = app();
        focus(&mut app, FormField::Income);
        type_text(&mut app, "1e3");
        assert_eq!(app.state.ledger.ledger.income(), MoneyCents::new(100_000));

        for _ in 0..3 {
            app.apply(AppAction::Backspace, day());
        }
        type_text(&mut app, "12.345");
        assert_eq!(app.state.ledger.ledger.income(), MoneyCents::new(1_235));
        assert!(app.state.hint.is_none());
    }

    #[test]
    fn amount_in_exponent_form_adds_one_record() {
        let mut app = app();
        add(&mut app, "Rent", "1e3", "");
        add(&mut app, "Food", "12.345", "");

        let amounts: Vec<_> = app
            .state
            .ledger
            .ledger
            .expenses()
            .iter()
            .map(|e| e.amount)
            .collect();
        assert_eq!(amounts, vec![MoneyCents::new(100_000), MoneyCents::new(1_235)]);
    }

    #[test]
    fn delete_on_list_removes_selected_and_clamps() {
        let mut app = app();
        add(&mut app, "a", "1", "");
        add(&mut app, "b", "2", "");
        add(&mut app, "c", "3", "");

        focus(&mut app, FormField::List);
        app.apply(AppAction::Down, day());
        app.apply(AppAction::Down, day());
        app.apply(AppAction::Down, day());
        assert_eq!(app.state.selected, 2);

        app.apply(AppAction::Delete, day());
        let categories: Vec<_> = app
            .state
            .ledger
            .ledger
            .expenses()
            .iter()
            .map(|e| e.category.clone())
            .collect();
        assert_eq!(categories, vec!["a", "b"]);
        assert_eq!(app.state.selected, 1);

        app.apply(AppAction::Up, day());
        app.apply(AppAction::Input('d'), day());
        assert_eq!(app.state.ledger.ledger.expenses()[0].category, "b");
    }

    #[test]
    fn only_d_removes_on_list() {
        let mut app = app();
        add(&mut app, "a", "1", "");
        focus(&mut app, FormField::List);

        app.apply(AppAction::Input('x'), day());
        assert_eq!(app.state.ledger.ledger.len(), 1);

        app.apply(AppAction::Input('d'), day());
        assert!(app.state.ledger.ledger.is_empty());
    }

    #[test]
    fn exports_go_to_the_sink() {
        let mut app = app();
        add(&mut app, "Food", "10", "lunch");

        app.apply(AppAction::ExportCsv, day());
        assert_eq!(
            app.state.toast.as_ref().map(|t| t.level),
            Some(ToastLevel::Success)
        );
        app.apply(AppAction::ExportPdf, day());

        let names: Vec<_> = app.sink.files.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["expenses.csv", "expenses.pdf"]);
        assert_eq!(
            String::from_utf8(app.sink.files[0].1.clone()).unwrap(),
            "Category,Amount,Description,Date,Currency,Payment Method\n\
             Food,10,lunch,1/1/2024,INR,Cash\n"
        );
    }

    #[test]
    fn export_failure_becomes_error_toast() {
        let mut app = App::with_sink(&AppConfig::default(), FailingSink);
        app.apply(AppAction::ExportCsv, day());
        assert_eq!(
            app.state.toast.as_ref().map(|t| t.level),
            Some(ToastLevel::Error)
        );
    }

    #[test]
    fn quit_and_theme_toggle() {
        let mut app = app();
        assert!(!app.state.dark_mode);
        app.apply(AppAction::ToggleTheme, day());
        assert!(app.state.dark_mode);
        app.apply(AppAction::Quit, day());
        assert!(app.should_quit());
    }
}
