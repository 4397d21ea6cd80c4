//! Aniday - list anime character birthdays in the terminal
//!
//! Resolves the birthday page for a (day, month) pair through an on-disk
//! cache and prints the deduplicated, sorted character names with the
//! configured styling.

use clap::Parser;
use console::Style;

use aniday::cache::{CacheError, CacheStore};
use aniday::cli::Cli;
use aniday::config::{Settings, SettingsGuard};
use aniday::date::BirthdayDate;
use aniday::extract::extract_names;
use aniday::fetch::{BirthdayClient, FetchError};
use aniday::style::parse_style;

/// Width of the `=`-filled heading line
const HEADING_WIDTH: usize = 20;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    // Exit only after run() returns, once the settings guard has dropped
    // and persisted the configuration.
    std::process::exit(run().await);
}

async fn run() -> i32 {
    let cli = Cli::parse();
    let settings = SettingsGuard::new(Settings::load());

    match lookup(&cli, &settings).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}: {}", err.kind(), err);
            1
        }
    }
}

/// Resolves the requested day's page and prints the character names
async fn lookup(cli: &Cli, settings: &Settings) -> Result<(), FetchError> {
    let date = BirthdayDate::from_parts(cli.day, cli.month)?;

    print_heading(&date, &parse_style(&settings.style.head));

    let store = CacheStore::new().ok_or(CacheError::DirUnavailable)?;
    let client = BirthdayClient::new(store);
    let document = client
        .resolve(&date, settings.cache.window.as_duration())
        .await?;

    let name_style = parse_style(&settings.style.name);
    for name in extract_names(&document) {
        println!("> {}", name_style.apply_to(&name));
    }
    Ok(())
}

/// Prints the date label centered in a `=`-filled line
fn print_heading(date: &BirthdayDate, style: &Style) {
    let label = date.to_string();
    let pad = HEADING_WIDTH.saturating_sub(label.len());
    let left = pad / 2;
    println!(
        "{}{}{}",
        "=".repeat(left),
        style.apply_to(&label),
        "=".repeat(pad - left)
    );
}
