//! Command handlers

use std::path::{Path, PathBuf};

use haulbook_app::app::{invoice_totals, payment_statement, run_payroll, scan_insights};
use haulbook_app::config::Config;
use haulbook_app::repository::open_route_master_repo;
use haulbook_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Salary {
            subtrips,
            adjustments,
            vehicle,
        } => salary(&subtrips, adjustments.as_deref(), vehicle.as_deref(), format),
        Commands::Transporter { payment, tds } => transporter(&payment, tds, &config, format),
        Commands::Invoice { invoice, tax } => {
            let tax_percent = tax.unwrap_or(config.invoice_tax_percent);
            let totals = invoice_totals(&invoice, tax_percent)?;
            output::output_invoice(format, &totals)
        }
        Commands::Insights { subtrips, routes } => insights(&subtrips, routes, format),
        Commands::Export { subtrips, output } => export(&subtrips, output),
        Commands::Config {
            show,
            set_commission,
            set_tax,
            set_tds,
            set_output,
            reset,
        } => handle_config(show, set_commission, set_tax, set_tds, set_output, reset),
    }
}

fn salary(
    subtrips: &Path,
    adjustments: Option<&Path>,
    vehicle: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let run = run_payroll(subtrips, adjustments, vehicle)?;
    output::output_payroll(format, &run)
}

fn transporter(payment: &Path, tds: Option<f64>, config: &Config, format: OutputFormat) -> Result<()> {
    let statement = payment_statement(payment, &config.billing_rates(), tds)?;
    output::output_statement(format, &statement)
}

fn insights(subtrips: &Path, routes: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let master_repo = match routes {
        Some(path) => Some(open_route_master_repo(path)?),
        None => None,
    };
    let scanned = scan_insights(subtrips, master_repo.as_ref().map(|r| r.loader()))?;
    output::output_insights(format, &scanned)
}

fn export(subtrips: &Path, output: Option<PathBuf>) -> Result<()> {
    let output_path = output.unwrap_or_else(|| subtrips.with_extension("xlsx"));
    let count = haulbook_app::app::export_to_excel(subtrips, &output_path)?;
    println!("Exported {} subtrips to {}", count, output_path.display());
    Ok(())
}

fn handle_config(
    show: bool,
    set_commission: Option<f64>,
    set_tax: Option<f64>,
    set_tds: Option<f64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(commission) = set_commission {
        config.transporter_commission_rate = commission;
        changed = true;
    }
    if let Some(tax) = set_tax {
        config.invoice_tax_percent = tax;
        changed = true;
    }
    if let Some(tds) = set_tds {
        config.default_tds_percent = tds;
        changed = true;
    }
    if let Some(output_format) = set_output {
        config.output_format = output_format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
