use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

use receipt_processor::{Receipt, breakdown, calculate_points};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Receipt(#[from] receipt_processor::Error),

    #[error("JSON writing error: {0}")]
    JsonWrite(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "receipt-processor")]
#[command(about = "Validate and score purchase receipts offline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the points awarded for a receipt
    Score {
        /// Receipt JSON file (stdin if not specified)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the contribution of every rule instead of just the total
        #[arg(short, long)]
        explain: bool,
    },

    /// Check that a receipt has every required field
    Validate {
        /// Receipt JSON file (stdin if not specified)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Read raw receipt bytes from a file or stdin.
fn read_input(input: Option<&PathBuf>) -> Result<Vec<u8>, AppError> {
    match input {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { input, explain } => {
            let receipt = Receipt::from_json(&read_input(input.as_ref())?)?;

            let output = if explain {
                let rules = breakdown(&receipt);
                serde_json::json!({ "rules": rules, "points": rules.total() })
            } else {
                serde_json::json!({ "points": calculate_points(&receipt) })
            };

            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Commands::Validate { input } => {
            let bytes = read_input(input.as_ref())?;
            match Receipt::from_json(&bytes) {
                Ok(receipt) => {
                    println!(
                        "ok: {} ({} item{})",
                        receipt.retailer,
                        receipt.items.len(),
                        if receipt.items.len() == 1 { "" } else { "s" }
                    );
                    Ok(())
                }
                Err(e) => {
                    eprintln!("invalid receipt: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
