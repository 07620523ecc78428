//! Identity records: drivers, transporters, customers
//!
//! Consumed for display and for the TDS percentage on transporter
//! settlements; none of the aggregation arithmetic depends on identity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Driver {
    pub driver_name: String,
    pub driver_cell_no: Option<String>,
    pub bank_acc_no: Option<String>,
    pub bank_name: Option<String>,
    pub ifsc_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transporter {
    pub transport_name: String,
    /// Tax Deducted at Source percentage withheld from settlements
    pub tds_percentage: Option<f64>,
    pub bank_acc_no: Option<String>,
    pub bank_name: Option<String>,
    pub ifsc_code: Option<String>,
    pub cell_no: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub customer_name: String,
    pub address: Option<String>,
    pub gst_no: Option<String>,
    pub cell_no: Option<String>,
}
