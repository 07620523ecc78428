//! Route document and per-vehicle-type expectation records

use serde::{Deserialize, Serialize};

/// An expected lane: where a subtrip should run and what it should cost
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Route {
    pub route_name: String,
    pub from_place: Option<String>,
    pub to_place: Option<String>,
    /// Per-vehicle-type expectation records
    pub salary: Vec<VehicleExpectation>,
    /// Expected toll spend for the lane
    pub toll_amt: Option<f64>,
    /// Expected distance (km)
    pub distance: Option<f64>,
}

/// What a lane is expected to consume for one vehicle type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleExpectation {
    pub vehicle_type: String,
    pub fixed_salary: f64,
    /// Expected diesel (L)
    pub diesel: f64,
    /// Expected AdBlue (L)
    pub ad_blue: f64,
    pub advance_amt: f64,
}

impl Route {
    /// Resolve the expectation record for a vehicle type, case-insensitively.
    ///
    /// A lane with no record for the type falls back to an all-zero
    /// expectation so callers never branch on a miss.
    pub fn expectation_for(&self, vehicle_type: &str) -> VehicleExpectation {
        self.salary
            .iter()
            .find(|s| s.vehicle_type.eq_ignore_ascii_case(vehicle_type))
            .cloned()
            .unwrap_or_default()
    }
}
