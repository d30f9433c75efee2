//! `rolldate` — trading-calendar date resolution from the command line.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;

use roll_engine::{
    get_target_date, historical_volatility, last_thursday, post_expiry_friday, PriceTable,
    DEFAULT_LOOKBACK,
};

#[derive(Parser)]
#[command(
    name = "rolldate",
    version,
    about = "Deterministic trading-calendar date resolution"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a month-position pattern against a reference date
    Resolve {
        /// Reference date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Pattern grammar: 1 = nth weekday, 2 = month edge
        #[arg(long)]
        kind: u8,
        /// Pattern string, e.g. "0/1/1" (kind 1) or "-1F" (kind 2)
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        /// Emit a JSON record instead of a bare date
        #[arg(long)]
        json: bool,
    },
    /// Print the monthly expiry Thursday, or the post-expiry roll session
    Expiry {
        #[arg(long)]
        year: i32,
        /// Month 1-12
        #[arg(long)]
        month: u32,
        /// Print the session after the previous month's expiry instead
        #[arg(long)]
        roll: bool,
    },
    /// Compute annualized rolling volatility from a price table
    Vol {
        /// Input table (csv or json records)
        #[arg(long)]
        file: PathBuf,
        /// Close-price column name, after renames
        #[arg(long, default_value = "Close")]
        column: String,
        /// Rolling window in sessions
        #[arg(long, default_value_t = DEFAULT_LOOKBACK)]
        lookback: usize,
        /// Column rename, FROM=TO (repeatable)
        #[arg(long, value_name = "FROM=TO")]
        rename: Vec<String>,
    },
}

/// JSON record for `resolve --json`.
#[derive(Serialize)]
struct ResolvedTarget {
    reference: NaiveDate,
    pattern: String,
    kind: u8,
    target: NaiveDate,
    weekday: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Resolve {
            date,
            kind,
            pattern,
            json,
        } => run_resolve(date, kind, &pattern, json),
        Command::Expiry { year, month, roll } => run_expiry(year, month, roll),
        Command::Vol {
            file,
            column,
            lookback,
            rename,
        } => run_vol(&file, &column, lookback, &rename),
    }
}

fn run_resolve(date: NaiveDate, kind: u8, pattern: &str, json: bool) -> Result<()> {
    let target = get_target_date(date, pattern, kind)
        .with_context(|| format!("cannot resolve pattern '{pattern}'"))?;
    if json {
        let record = ResolvedTarget {
            reference: date,
            pattern: pattern.to_string(),
            kind,
            target,
            weekday: target.weekday().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{target}");
    }
    Ok(())
}

fn run_expiry(year: i32, month: u32, roll: bool) -> Result<()> {
    if !(1..=12).contains(&month) {
        bail!("month must be in 1-12, got {month}");
    }
    let date = if roll {
        post_expiry_friday(year, month)?
    } else {
        last_thursday(year, month)?
    };
    println!("{date}");
    Ok(())
}

fn run_vol(file: &Path, column: &str, lookback: usize, renames: &[String]) -> Result<()> {
    let renames = parse_renames(renames)?;
    let table = PriceTable::load(file, &renames)
        .with_context(|| format!("cannot load '{}'", file.display()))?;
    let closes = table
        .column(column)
        .with_context(|| format!("no column '{column}' in '{}'", file.display()))?;
    let vol = historical_volatility(closes, lookback);
    for (date, v) in table.dates().iter().zip(&vol) {
        println!("{date},{v:.6}");
    }
    Ok(())
}

fn parse_renames(pairs: &[String]) -> Result<HashMap<String, String>> {
    pairs
        .iter()
        .map(|p| {
            p.split_once('=')
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .ok_or_else(|| anyhow::anyhow!("rename '{p}' must be FROM=TO"))
        })
        .collect()
}
