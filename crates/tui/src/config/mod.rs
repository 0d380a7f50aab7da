use clap::Parser;
use engine::{Currency, PaymentMethod};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/expense_tui.toml";
const ENV_PREFIX: &str = "EXPENSE_TUI";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory receiving `expenses.csv` / `expenses.pdf`.
    pub export_dir: String,
    /// Currency preselected in the form.
    pub currency: Currency,
    /// Payment method preselected in the form.
    pub payment_method: PaymentMethod,
    pub dark_mode: bool,
    /// Log destination; logging is off when unset.
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: ".".to_string(),
            currency: Currency::Inr,
            payment_method: PaymentMethod::Cash,
            dark_mode: false,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expense_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the export directory.
    #[arg(long)]
    export_dir: Option<String>,
    /// Override the preselected currency (INR, USD, EUR, GBP, JPY).
    #[arg(long)]
    currency: Option<String>,
    /// Override the preselected payment method (Cash, UPI, Card).
    #[arg(long)]
    payment_method: Option<String>,
    /// Start with the dark palette.
    #[arg(long)]
    dark: bool,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(export_dir) = args.export_dir {
        settings.export_dir = export_dir;
    }
    if let Some(currency) = args.currency {
        settings.currency = Currency::try_from(currency.as_str())?;
    }
    if let Some(method) = args.payment_method {
        settings.payment_method = PaymentMethod::try_from(method.as_str())?;
    }
    if args.dark {
        settings.dark_mode = true;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    Ok(settings)
}
