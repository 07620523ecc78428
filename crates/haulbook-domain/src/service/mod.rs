//! Pure aggregation services
//!
//! Every function here is synchronous and side-effect-free: documents in,
//! raw numbers out. Rounding to currency precision happens at the
//! presentation layer only, never inside a service.

pub mod driver_salary;
pub mod expense_classifier;
pub mod insights;
pub mod invoice_summary;
pub mod normalize;
pub mod rates;
pub mod transporter_payment;

pub use driver_salary::{salary_for_subtrip, summarize_driver_salary, DriverSalarySummary};
pub use expense_classifier::{classify, sum_category, ExpenseCategory};
pub use insights::{generate_insights, Insight, InsightKind};
pub use invoice_summary::{compute_invoice_line, summarize_invoice, InvoiceLine, InvoiceSummary};
pub use normalize::{freight_figures, FreightFigures};
pub use rates::BillingRates;
pub use transporter_payment::{
    compute_transporter_line, net_after_tds, summarize_transporter_payment, TransporterLine,
    TransporterPaymentSummary,
};
