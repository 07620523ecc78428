//! Domain model types
//!
//! All documents are JSON exports of the ops API, so wire names are
//! camelCase and anything that can be absent in an export is optional.

pub mod invoice;
pub mod party;
pub mod payment;
pub mod route;
pub mod subtrip;
pub mod vehicle;

pub use invoice::{Invoice, InvoiceStatus};
pub use party::{Customer, Driver, Transporter};
pub use payment::{AdditionalDeduction, AdditionalPayment, Repayment, TransporterPayment};
pub use route::{Route, VehicleExpectation};
pub use subtrip::{Expense, ExpenseType, Subtrip, Trip};
pub use vehicle::Vehicle;
