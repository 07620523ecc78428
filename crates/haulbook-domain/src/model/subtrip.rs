//! Subtrip and expense document types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::party::Driver;
use super::route::Route;
use super::vehicle::Vehicle;

/// One delivery leg, the unit expenses and income are recorded against
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subtrip {
    #[serde(alias = "_id")]
    pub subtrip_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Quantity loaded at origin (t)
    pub loading_weight: Option<f64>,
    /// Quantity delivered at destination (t)
    pub unloading_weight: Option<f64>,
    /// Freight rate per ton agreed with the customer
    pub rate: Option<f64>,
    pub start_km: Option<f64>,
    pub end_km: Option<f64>,
    pub shortage_weight: Option<f64>,
    pub shortage_amount: Option<f64>,
    pub expenses: Vec<Expense>,
    /// Populated route document, when the export carries it
    pub route_cd: Option<Route>,
    /// Populated parent trip, when the export carries it
    #[serde(rename = "tripId")]
    pub trip: Option<Trip>,
}

/// Parent trip reference carrying the populated vehicle and driver
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trip {
    #[serde(alias = "_id")]
    pub trip_id: String,
    #[serde(rename = "vehicleId")]
    pub vehicle: Option<Vehicle>,
    #[serde(rename = "driverId")]
    pub driver: Option<Driver>,
}

/// A dated, typed, amount-bearing charge against a subtrip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Expense {
    pub expense_type: ExpenseType,
    pub amount: f64,
    /// Only meaningful for diesel expenses
    pub diesel_ltr: Option<f64>,
    pub date: Option<NaiveDate>,
    pub remarks: Option<String>,
}

/// Expense type enumeration used by the ops API
///
/// Unknown or malformed values deserialize to `Other` so a single bad
/// record never fails a whole document load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseType {
    Diesel,
    Adblue,
    DriverSalary,
    TripAdvance,
    TripExtraAdvance,
    Toll,
    Police,
    Repair,
    #[default]
    #[serde(other)]
    Other,
}

impl ExpenseType {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Diesel => "diesel",
            ExpenseType::Adblue => "adblue",
            ExpenseType::DriverSalary => "driver-salary",
            ExpenseType::TripAdvance => "trip-advance",
            ExpenseType::TripExtraAdvance => "trip-extra-advance",
            ExpenseType::Toll => "toll",
            ExpenseType::Police => "police",
            ExpenseType::Repair => "repair",
            ExpenseType::Other => "other",
        }
    }
}

impl Subtrip {
    /// Vehicle registration number, when the parent trip carries one
    pub fn vehicle_no(&self) -> Option<&str> {
        self.trip
            .as_ref()
            .and_then(|t| t.vehicle.as_ref())
            .and_then(|v| v.vehicle_no.as_deref())
    }

    /// Vehicle type, when the parent trip carries one
    pub fn vehicle_type(&self) -> Option<&str> {
        self.trip
            .as_ref()
            .and_then(|t| t.vehicle.as_ref())
            .and_then(|v| v.vehicle_type.as_deref())
    }
}
