//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use haulbook_types::OutputFormat;

#[derive(Parser)]
#[command(name = "haulbook")]
#[command(version)]
#[command(about = "Fleet back-office settlement: payroll, transporter payments, invoices, insights")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Driver payroll summary over a subtrip export
    Salary {
        /// Path to subtrips JSON export
        subtrips: PathBuf,

        /// CSV of ad-hoc payments and deductions (kind,label,amount)
        #[arg(long, short = 'a')]
        adjustments: Option<PathBuf>,

        /// Only count subtrips run by this vehicle (e.g. "KA-01-AB-1234")
        #[arg(long)]
        vehicle: Option<String>,
    },

    /// Transporter settlement statement for a payment period
    Transporter {
        /// Path to transporter payment JSON export
        payment: PathBuf,

        /// TDS percentage override (defaults to the transporter's record)
        #[arg(long)]
        tds: Option<f64>,
    },

    /// Invoice totals with CGST/SGST
    Invoice {
        /// Path to invoice JSON export
        invoice: PathBuf,

        /// Tax half-rate percentage override. Uses config value if not specified.
        #[arg(long)]
        tax: Option<f64>,
    },

    /// Scan subtrips for route deviations
    Insights {
        /// Path to subtrips JSON export
        subtrips: PathBuf,

        /// Route master TOML whose figures override embedded routes
        #[arg(long)]
        routes: Option<PathBuf>,
    },

    /// Export subtrips to Excel
    Export {
        /// Path to subtrips JSON export
        subtrips: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set transporter commission rate (per ton)
        #[arg(long)]
        set_commission: Option<f64>,

        /// Set CGST/SGST half-rate percentage
        #[arg(long)]
        set_tax: Option<f64>,

        /// Set default TDS percentage
        #[arg(long)]
        set_tds: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
