//! Currency CLI
//!
//! Command-line interface for currency conversions and day-by-day
//! conversion reports.

mod config;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_hex::CurrencyConverter;
use currency_types::CurrencyCode;
use exchange_rates::RateTable;

#[derive(Parser)]
#[command(name = "currency")]
#[command(author, version, about = "Currency conversion CLI", long_about = None)]
struct Cli {
    /// JSON rate table to use instead of the built-in rates
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Source currency code
        #[arg(long)]
        from: String,
        /// Target currency code
        #[arg(long)]
        to: String,
        /// Round the printed result to this many decimals
        #[arg(long)]
        precision: Option<usize>,
    },
    /// Convert 100 units once per day over a date range
    Report {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Print the report as JSON with per-day dates and rates
        #[arg(long)]
        json: bool,
    },
    /// List currencies known to the rate table (base rates and direct pairs)
    Currencies,
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => tracing_subscriber::EnvFilter::new(f),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,currency_cli=debug,currency_hex=debug".into()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn format_amount(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => value.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::Config::from_env()?;

    init_tracing(config.log_filter.as_deref());

    let table = match cli.rates.or(config.rates_file) {
        Some(path) => {
            tracing::info!("Using rate table: {}", path.display());
            RateTable::from_json_file(&path)?
        }
        None => RateTable::with_defaults(),
    };
    let converter = CurrencyConverter::new(table);

    match cli.command {
        Commands::Convert {
            amount,
            from,
            to,
            precision,
        } => {
            let converted = converter
                .convert(amount, &CurrencyCode::from(from), &CurrencyCode::from(to))
                .await?;
            println!("{}", format_amount(converted, precision.or(config.precision)));
        }

        Commands::Report {
            from,
            to,
            start,
            end,
            json,
        } => {
            let (from, to) = (CurrencyCode::from(from), CurrencyCode::from(to));
            if json {
                let report = converter
                    .build_conversion_report(&from, &to, start, end)
                    .await?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let report = converter
                    .generate_conversion_report(&from, &to, start, end)
                    .await?;
                println!("{}", report);
            }
        }

        Commands::Currencies => {
            for code in converter.provider().currencies() {
                println!("{}", code);
            }
        }
    }

    Ok(())
}
