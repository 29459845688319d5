use std::{env, fs};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::info;

use fund_reports::{
    data::read_holdings_export,
    models::{CategoryAum, CategoryMap},
    report::{aggregate_firm_aum, generate_holdings_summary},
    session::Session,
};

/// Conventional name for the downloadable summary file.
const SUMMARY_FILE_NAME: &str = "holdings_summary.txt";

#[derive(Parser)]
#[command(name = "fund-reports", about = "Industry AUM lookups and 13F holdings summaries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up per-category industry AUM figures for a firm
    Aum {
        /// Exact firm name to filter on; empty selects nothing
        #[arg(long, default_value = "")]
        firm: String,
        /// Reference table URL; falls back to MF_ANALYZER_URL
        #[arg(long)]
        url: Option<String>,
        /// Emit the result table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Merge a ticker list against a Whale Wisdom export
    Holdings {
        /// CSV with a 'Ticker' column listing the tickers of interest
        #[arg(long)]
        tickers: String,
        /// Unmodified Whale Wisdom export
        #[arg(long)]
        export: String,
        /// Also write the summary to this file
        #[arg(long, num_args = 0..=1, default_missing_value = SUMMARY_FILE_NAME)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut session = Session::new();

    match cli.command {
        Command::Aum { firm, url, json } => {
            let url = match url {
                Some(url) => url,
                None => env::var("MF_ANALYZER_URL")
                    .context("No reference URL given and MF_ANALYZER_URL is not set")?,
            };

            let records = session.reference_table(&url).await?;
            let rows = aggregate_firm_aum(records, &firm, &CategoryMap::default());

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No AUM rows to display");
            } else {
                print_aum_table(&rows);
            }
        }
        Command::Holdings {
            tickers,
            export,
            output,
        } => {
            let ticker_path = shellexpand::tilde(&tickers).into_owned();
            let export_path = shellexpand::tilde(&export).into_owned();

            session.load_tickers(&ticker_path)?;
            let export_rows = read_holdings_export(&export_path)?;
            let ticker_rows = session.tickers().unwrap_or(&[]);

            let summary = generate_holdings_summary(ticker_rows, &export_rows);
            println!("{}", summary);

            if let Some(path) = output {
                fs::write(&path, &summary)
                    .with_context(|| format!("Failed to write summary to {}", path))?;
                info!(path, "summary written");
            }
        }
    }

    Ok(())
}

fn print_aum_table(rows: &[CategoryAum]) {
    let category_width = rows
        .iter()
        .map(|r| r.category().len())
        .chain(["Client Defined Category Name".len()].into_iter())
        .max()
        .unwrap_or(0);
    let aum_width = rows
        .iter()
        .map(|r| r.vest_aum().len())
        .chain(["Vest AUM".len()].into_iter())
        .max()
        .unwrap_or(0);

    println!(
        "{:<category_width$}  {:>aum_width$}  {}",
        "Client Defined Category Name", "Vest AUM", "Industry AUM"
    );
    for row in rows {
        println!(
            "{:<category_width$}  {:>aum_width$}  {}",
            row.category(),
            row.vest_aum(),
            row.industry_aum()
        );
    }
}
