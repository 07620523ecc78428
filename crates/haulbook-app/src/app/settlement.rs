//! Settlement use cases: load documents, run the aggregators, hand the
//! results to whichever presentation layer asked

use std::path::Path;

use serde::Serialize;

use haulbook_domain::model::{Invoice, Route, Subtrip, TransporterPayment};
use haulbook_domain::repository::SubtripRepository;
use haulbook_domain::service::{
    compute_invoice_line, compute_transporter_line, generate_insights, net_after_tds,
    summarize_driver_salary, summarize_invoice, summarize_transporter_payment, sum_category,
    BillingRates, DriverSalarySummary, ExpenseCategory, Insight, InvoiceLine, InvoiceSummary,
    TransporterLine, TransporterPaymentSummary,
};
use haulbook_infra::adjustments_csv::{load_adjustments, Adjustments};
use haulbook_infra::documents::{load_invoice, load_transporter_payment};
use haulbook_infra::route_master_loader::RouteMasterLoader;
use haulbook_types::{Error, Result};

use crate::repository::open_subtrip_repo;

/// One payroll run over a subtrip collection
#[derive(Debug, Serialize)]
pub struct PayrollRun {
    pub subtrip_count: usize,
    /// Advances already handed out on these legs, shown for reconciliation
    pub total_trip_advance: f64,
    pub summary: DriverSalarySummary,
}

/// Compute a driver payroll summary from exported subtrips plus an
/// optional adjustments CSV, optionally filtered to one vehicle.
pub fn run_payroll(
    subtrips_path: &Path,
    adjustments_path: Option<&Path>,
    vehicle_no: Option<&str>,
) -> Result<PayrollRun> {
    let repo = open_subtrip_repo(subtrips_path.to_path_buf())?;
    let subtrips = match vehicle_no {
        Some(vehicle_no) => repo.find_by_vehicle(vehicle_no)?,
        None => repo.find_all()?,
    };

    let adjustments = match adjustments_path {
        Some(path) => load_adjustments(path).map_err(|e| Error::CsvLoader(e.to_string()))?,
        None => Adjustments::default(),
    };

    let summary =
        summarize_driver_salary(&subtrips, &adjustments.payments, &adjustments.deductions);
    let total_trip_advance: f64 = subtrips
        .iter()
        .map(|s| sum_category(&s.expenses, ExpenseCategory::TripAdvance))
        .sum();

    Ok(PayrollRun {
        subtrip_count: subtrips.len(),
        total_trip_advance,
        summary,
    })
}

/// A transporter settlement statement ready for rendering
#[derive(Debug, Serialize)]
pub struct PaymentStatement {
    pub payment: TransporterPayment,
    pub lines: Vec<TransporterLine>,
    pub summary: TransporterPaymentSummary,
    pub tds_percent: f64,
    pub net_after_tds: f64,
}

/// Build a settlement statement for one transporter payment document.
///
/// TDS resolution: explicit override, else the transporter's recorded
/// percentage, else the configured default.
pub fn payment_statement(
    payment_path: &Path,
    rates: &BillingRates,
    tds_override: Option<f64>,
) -> Result<PaymentStatement> {
    let payment = load_transporter_payment(payment_path)?;

    let lines = payment
        .associated_subtrips
        .iter()
        .map(|s| compute_transporter_line(s, rates))
        .collect();
    let summary = summarize_transporter_payment(&payment, rates);

    let tds_percent = tds_override
        .or_else(|| payment.transporter.as_ref().and_then(|t| t.tds_percentage))
        .unwrap_or(rates.default_tds_percent);

    Ok(PaymentStatement {
        net_after_tds: net_after_tds(summary.net_income, tds_percent),
        tds_percent,
        summary,
        lines,
        payment,
    })
}

/// An invoice with its derived lines and totals
#[derive(Debug, Serialize)]
pub struct InvoiceTotals {
    pub invoice: Invoice,
    pub lines: Vec<InvoiceLine>,
    pub tax_percent: f64,
    pub summary: InvoiceSummary,
}

/// Compute invoice totals with CGST/SGST at `tax_percent` each
pub fn invoice_totals(invoice_path: &Path, tax_percent: f64) -> Result<InvoiceTotals> {
    let invoice = load_invoice(invoice_path)?;

    let lines = invoice
        .invoiced_sub_trips
        .iter()
        .map(compute_invoice_line)
        .collect();
    let summary = summarize_invoice(&invoice, tax_percent);

    Ok(InvoiceTotals {
        lines,
        tax_percent,
        summary,
        invoice,
    })
}

/// Insights for one subtrip, tagged with its identifiers
#[derive(Debug, Serialize)]
pub struct SubtripInsights {
    pub subtrip_id: String,
    pub vehicle_no: Option<String>,
    pub insights: Vec<Insight>,
}

/// Scan a subtrip collection for route deviations.
///
/// When a route master is supplied, its figures take precedence over the
/// route embedded in the export (the master is maintained locally and is
/// usually fresher).
pub fn scan_insights(
    subtrips_path: &Path,
    route_master: Option<&RouteMasterLoader>,
) -> Result<Vec<SubtripInsights>> {
    let repo = open_subtrip_repo(subtrips_path.to_path_buf())?;
    let subtrips = repo.find_all()?;

    Ok(subtrips
        .iter()
        .map(|subtrip| {
            let insights = match master_route(subtrip, route_master) {
                Some(fresher) => {
                    let mut with_master = subtrip.clone();
                    with_master.route_cd = Some(fresher);
                    generate_insights(&with_master)
                }
                None => generate_insights(subtrip),
            };
            SubtripInsights {
                subtrip_id: subtrip.subtrip_id.clone(),
                vehicle_no: subtrip.vehicle_no().map(str::to_string),
                insights,
            }
        })
        .collect())
}

fn master_route(subtrip: &Subtrip, route_master: Option<&RouteMasterLoader>) -> Option<Route> {
    let master = route_master?;
    let embedded = subtrip.route_cd.as_ref()?;
    master.get_route(&embedded.route_name).cloned()
}

/// Export a subtrip collection to Excel; returns the subtrip count
pub fn export_to_excel(subtrips_path: &Path, output_path: &Path) -> Result<usize> {
    let repo = open_subtrip_repo(subtrips_path.to_path_buf())?;
    let subtrips = repo.find_all()?;
    crate::export::export_subtrips(&subtrips, output_path)?;
    Ok(subtrips.len())
}
