//! Haulbook - fleet back-office settlement toolkit
//!
//! A CLI that turns ops-API document exports into payroll summaries,
//! transporter statements, invoice totals, route insights, and Excel.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
