//! Tenant-level billing rates injected into the aggregators
//!
//! These used to live in a process-wide company constant in the ops app;
//! here the caller builds one value and passes it in, so the same
//! functions serve any tenant.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingRates {
    /// Commission deducted from the freight rate per ton before the
    /// transporter is paid. Defaults to zero (no commission).
    pub transporter_commission_rate: f64,
    /// CGST/SGST half-rate percentage; applied twice on invoice totals.
    pub invoice_tax_percent: f64,
    /// Fallback TDS percentage for transporters whose record carries none.
    pub default_tds_percent: f64,
}
