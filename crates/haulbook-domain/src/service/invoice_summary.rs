//! Invoice summary aggregation
//!
//! The customer is billed on loaded quantity; shrink between loading and
//! unloading is the transporter's problem, recovered via shortage.

use serde::{Deserialize, Serialize};

use crate::model::{Invoice, Subtrip};
use crate::service::normalize::freight_figures;

/// Billing figures for one invoiced subtrip
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub freight_amount: f64,
    pub shortage_amount: f64,
    pub total_amount: f64,
}

/// Whole-invoice totals feeding CGST/SGST computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub total_freight_wt: f64,
    pub total_shortage_wt: f64,
    pub total_shortage_amount: f64,
    pub total_freight_amount: f64,
    pub total_amount_before_tax: f64,
    pub total_after_tax: f64,
}

/// Per-subtrip billing: freight on loaded quantity, less shortage.
pub fn compute_invoice_line(subtrip: &Subtrip) -> InvoiceLine {
    let figures = freight_figures(subtrip);
    let freight_amount = figures.rate * figures.loading_weight;

    InvoiceLine {
        freight_amount,
        shortage_amount: figures.shortage_amount,
        total_amount: freight_amount - figures.shortage_amount,
    }
}

/// Invoice totals with tax applied as two equal halves (CGST and SGST,
/// each at `tax_percent`). An invoice with no subtrips is all zeros.
pub fn summarize_invoice(invoice: &Invoice, tax_percent: f64) -> InvoiceSummary {
    let mut summary = InvoiceSummary::default();

    for subtrip in &invoice.invoiced_sub_trips {
        let figures = freight_figures(subtrip);
        let line = compute_invoice_line(subtrip);
        summary.total_freight_wt += figures.loading_weight;
        summary.total_shortage_wt += figures.shortage_weight;
        summary.total_shortage_amount += line.shortage_amount;
        summary.total_freight_amount += line.freight_amount;
    }

    summary.total_amount_before_tax = summary.total_freight_amount - summary.total_shortage_amount;
    summary.total_after_tax = summary.total_amount_before_tax * (1.0 + 2.0 * tax_percent / 100.0);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoiced_subtrip(loading_weight: f64, rate: f64, shortage_amount: f64) -> Subtrip {
        Subtrip {
            loading_weight: Some(loading_weight),
            rate: Some(rate),
            shortage_amount: Some(shortage_amount),
            ..Default::default()
        }
    }

    #[test]
    fn test_line_bills_on_loaded_quantity() {
        let mut subtrip = invoiced_subtrip(10.0, 1000.0, 250.0);
        subtrip.unloading_weight = Some(9.5);
        let line = compute_invoice_line(&subtrip);
        assert!((line.freight_amount - 10000.0).abs() < 1e-9);
        assert!((line.shortage_amount - 250.0).abs() < 1e-9);
        assert!((line.total_amount - 9750.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_with_nine_percent_tax() {
        let invoice = Invoice {
            invoiced_sub_trips: vec![invoiced_subtrip(10.0, 1000.0, 0.0)],
            ..Default::default()
        };
        let summary = summarize_invoice(&invoice, 9.0);
        assert!((summary.total_freight_amount - 10000.0).abs() < 1e-9);
        assert!((summary.total_amount_before_tax - 10000.0).abs() < 1e-9);
        assert!((summary.total_after_tax - 11800.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_invoice_is_all_zero() {
        let summary = summarize_invoice(&Invoice::default(), 9.0);
        assert_eq!(summary, InvoiceSummary::default());
    }

    #[test]
    fn test_line_totals_match_summary_before_tax() {
        let subtrips = vec![
            invoiced_subtrip(10.0, 1000.0, 250.0),
            invoiced_subtrip(7.5, 1200.0, 0.0),
            invoiced_subtrip(12.0, 900.0, 400.0),
        ];
        let line_total: f64 = subtrips
            .iter()
            .map(|s| compute_invoice_line(s).total_amount)
            .sum();
        let invoice = Invoice {
            invoiced_sub_trips: subtrips,
            ..Default::default()
        };
        let summary = summarize_invoice(&invoice, 9.0);
        assert!((line_total - summary.total_amount_before_tax).abs() < 1e-9);
    }

    #[test]
    fn test_shortage_weights_accumulate() {
        let mut a = invoiced_subtrip(10.0, 1000.0, 100.0);
        a.shortage_weight = Some(0.2);
        let mut b = invoiced_subtrip(8.0, 1000.0, 50.0);
        b.shortage_weight = Some(0.1);
        let invoice = Invoice {
            invoiced_sub_trips: vec![a, b],
            ..Default::default()
        };
        let summary = summarize_invoice(&invoice, 0.0);
        assert!((summary.total_freight_wt - 18.0).abs() < 1e-9);
        assert!((summary.total_shortage_wt - 0.3).abs() < 1e-9);
        assert!((summary.total_shortage_amount - 150.0).abs() < 1e-9);
        assert_eq!(summary.total_after_tax, summary.total_amount_before_tax);
    }
}
