//! Invoice document type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::party::Customer;
use super::subtrip::Subtrip;

/// Customer invoice over a set of subtrip snapshots
///
/// Tax and net totals are derived on read, never stored on the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    #[serde(alias = "_id")]
    pub invoice_no: String,
    #[serde(rename = "customerId")]
    pub customer: Option<Customer>,
    pub invoiced_sub_trips: Vec<Subtrip>,
    pub invoice_status: InvoiceStatus,
    pub created_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
            InvoiceStatus::Unknown => "unknown",
        }
    }
}
