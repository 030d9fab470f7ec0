// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ago - describe how long ago a timestamp occurred

mod env;
mod output;

use output::OutputFormat;

use ago_core::{ElapsedTimeFormatter, FakeClock, Templates, TranslationKey};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Timezone used when neither `--tz` nor `AGO_TZ` is set.
const DEFAULT_TIMEZONE: &str = "UTC";

/// Marks a timestamp as unset.
const UNSET: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "ago",
    version,
    about = "Describe how long ago a timestamp occurred",
    allow_negative_numbers = true
)]
struct Cli {
    /// Unix epoch seconds whose wall-clock fields are in the viewer's
    /// timezone. Omit or pass "-" for an event that hasn't happened yet.
    timestamp: Option<String>,

    /// Viewer timezone as an IANA name (falls back to AGO_TZ, then UTC)
    #[arg(long = "tz", value_name = "ZONE")]
    timezone: Option<String>,

    /// Freeze "now" at this Unix epoch second
    #[arg(long, value_name = "EPOCH")]
    now: Option<i64>,

    /// Override a phrase template, e.g. --template 'days=%d jours'
    #[arg(short = 't', long = "template", value_name = "KEY=TEMPLATE")]
    templates: Vec<String>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let timestamp = parse_timestamp(cli.timestamp.as_deref())?;
    let templates = parse_templates(&cli.templates)?;
    let timezone = cli
        .timezone
        .or_else(env::timezone)
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

    let clock_source = if cli.now.is_some() { "frozen" } else { "system" };
    tracing::debug!(
        %timezone,
        clock = clock_source,
        unset = timestamp.is_none(),
        "formatting elapsed time"
    );

    let elapsed = match cli.now {
        Some(secs) => {
            let clock = FakeClock::from_epoch_secs(secs)
                .ok_or_else(|| anyhow!("--now {} is out of range", secs))?;
            ElapsedTimeFormatter::with_clock(clock).classify(&timezone, timestamp)
        }
        None => ElapsedTimeFormatter::new().classify(&timezone, timestamp),
    };

    println!("{}", output::render(elapsed, &templates, cli.output)?);
    Ok(())
}

/// Parse the positional timestamp; `None` and `"-"` mean unset.
fn parse_timestamp(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    let raw = match raw.map(str::trim) {
        None | Some(UNSET) => return Ok(None),
        Some(raw) => raw,
    };
    let secs: i64 = raw
        .parse()
        .with_context(|| format!("invalid timestamp '{}'", raw))?;
    DateTime::from_timestamp(secs, 0)
        .map(Some)
        .ok_or_else(|| anyhow!("timestamp {} is out of range", secs))
}

/// Parse `KEY=TEMPLATE` overrides into a template table.
fn parse_templates(raw: &[String]) -> Result<Templates> {
    let mut templates = Templates::new();
    for entry in raw {
        let (key, template) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("template '{}' must look like KEY=TEMPLATE", entry))?;
        let key: TranslationKey = key.trim().parse()?;
        templates.insert(key, template);
    }
    Ok(templates)
}
