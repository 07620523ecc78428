//! Transporter payment aggregation
//!
//! The transporter is paid on delivered (unloaded) quantity net of
//! commission and trip expenses; the customer is billed on loaded
//! quantity (see `invoice_summary`). That asymmetry is intentional.

use serde::{Deserialize, Serialize};

use crate::model::{Subtrip, TransporterPayment};
use crate::service::normalize::freight_figures;
use crate::service::rates::BillingRates;

/// Settlement figures for one subtrip
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransporterLine {
    pub effective_freight_rate: f64,
    pub total_freight_amount: f64,
    pub total_expense: f64,
    pub total_transporter_payment: f64,
}

/// Period-level settlement figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransporterPaymentSummary {
    pub total_trip_wise_income: f64,
    pub total_shortage_amount: f64,
    pub total_repayments: f64,
    pub net_income: f64,
}

/// Per-subtrip settlement: freight at the commission-adjusted rate on
/// unloaded quantity, minus every expense recorded on the leg.
pub fn compute_transporter_line(subtrip: &Subtrip, rates: &BillingRates) -> TransporterLine {
    let figures = freight_figures(subtrip);
    let effective_freight_rate = figures.rate - rates.transporter_commission_rate;
    let total_freight_amount = effective_freight_rate * figures.unloading_weight;
    let total_expense = figures.total_expense;

    TransporterLine {
        effective_freight_rate,
        total_freight_amount,
        total_expense,
        total_transporter_payment: total_freight_amount - total_expense,
    }
}

/// Aggregate a payment period: trip-wise income net of shortages and
/// advances already repaid. TDS is not applied here; see `net_after_tds`.
pub fn summarize_transporter_payment(
    payment: &TransporterPayment,
    rates: &BillingRates,
) -> TransporterPaymentSummary {
    let total_trip_wise_income: f64 = payment
        .associated_subtrips
        .iter()
        .map(|s| compute_transporter_line(s, rates).total_transporter_payment)
        .sum();
    let total_shortage_amount: f64 = payment
        .associated_subtrips
        .iter()
        .map(|s| s.shortage_amount.unwrap_or(0.0))
        .sum();
    let total_repayments: f64 = payment.repayments.iter().map(|r| r.amount).sum();

    TransporterPaymentSummary {
        total_trip_wise_income,
        total_shortage_amount,
        total_repayments,
        net_income: total_trip_wise_income - total_shortage_amount - total_repayments,
    }
}

/// Presentation-time TDS withholding on a settled net income
pub fn net_after_tds(net_income: f64, tds_percent: f64) -> f64 {
    net_income * (1.0 - tds_percent / 100.0)
}
