//! CLI entry point for the daily PnL capture tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pnl_capture::config::Config;

#[derive(Parser)]
#[command(name = "pnl-capture")]
#[command(about = "Daily PnL capture: close, open and inspect trading days")]
#[command(version)]
struct Cli {
    /// Path to pnl.toml
    #[arg(long, default_value = "pnl.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Close the current day and start the next one
    Close,

    /// Start a new day (manual)
    Start {
        /// Starting balance; defaults to the live balance
        #[arg(allow_negative_numbers = true, value_parser = parse_balance)]
        balance: Option<f64>,
    },

    /// Show current status
    Status,
}

fn parse_balance(s: &str) -> Result<f64, String> {
    let balance = s.parse::<f64>().map_err(|e| e.to_string())?;
    if balance.is_finite() {
        Ok(balance)
    } else {
        Err(format!("{s} is not a finite amount"))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    let ledger = match pnl_capture::connect(&config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // Lifecycle failures are reported but do not change the exit status.
    match cli.command {
        Command::Close => match ledger.close_day() {
            Ok(closed) => {
                let r = &closed.record;
                println!("Day closed: {}", r.date);
                println!("   P&L: ${:+.2} ({:+.2}%)", r.pnl_usd, r.pnl_pct);
                println!(
                    "   Trades: {} (W:{} L:{})",
                    r.trades_count, r.wins, r.losses
                );
                println!(
                    "   New day started: {} with ${:.2}",
                    closed.next.date, closed.next.start_balance
                );
            }
            Err(e) => eprintln!("Close failed: {e}"),
        },
        Command::Start { balance } => match ledger.start_new_day(balance) {
            Ok(day) => println!(
                "New day started: {} with ${:.2}",
                day.date, day.start_balance
            ),
            Err(e) => eprintln!("Start failed: {e}"),
        },
        Command::Status => print!("{}", ledger.status()),
    }
}
