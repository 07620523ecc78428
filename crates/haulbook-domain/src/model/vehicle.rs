//! Vehicle document type

use serde::{Deserialize, Serialize};

use super::party::Transporter;

/// Vehicle record referenced from a trip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vehicle {
    /// Registration number (e.g. "KA-01-AB-1234")
    pub vehicle_no: Option<String>,
    /// Body type matched against route expectations (e.g. "10-Wheeler")
    pub vehicle_type: Option<String>,
    /// Owning transporter, when the export populates it
    pub transporter: Option<Transporter>,
    pub is_own: Option<bool>,
}
