//! Row shaping for spreadsheet export
//!
//! Pure: a subtrip collection in, a fixed-column row sequence out, with a
//! synthetic TOTAL row appended. Numeric totals are recomputed from the
//! raw documents, not from the shaped rows, so no rounding compounds.

use serde::Serialize;

use haulbook_domain::model::Subtrip;
use haulbook_domain::service::freight_figures;

/// Column labels, in row field order
pub const HEADERS: [&str; 12] = [
    "Subtrip",
    "Date",
    "Vehicle",
    "Route",
    "Loading (t)",
    "Unloading (t)",
    "Rate",
    "Freight Amount",
    "Diesel (L)",
    "Driver Salary",
    "Total Expense",
    "Distance (km)",
];

/// One spreadsheet row; display columns degrade to "-" when the
/// document lacks the nested reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub subtrip: String,
    pub date: String,
    pub vehicle: String,
    pub route: String,
    pub loading_wt: f64,
    pub unloading_wt: f64,
    pub rate: f64,
    pub freight_amount: f64,
    pub diesel_ltr: f64,
    pub driver_salary: f64,
    pub total_expense: f64,
    pub distance_km: f64,
}

/// Shape a subtrip collection into export rows plus a TOTAL row
pub fn subtrip_rows(subtrips: &[Subtrip]) -> Vec<ExportRow> {
    let mut rows: Vec<ExportRow> = subtrips.iter().map(data_row).collect();
    rows.push(total_row(subtrips));
    rows
}

fn data_row(subtrip: &Subtrip) -> ExportRow {
    let figures = freight_figures(subtrip);

    ExportRow {
        subtrip: placeholder_if_empty(&subtrip.subtrip_id),
        date: subtrip
            .start_date
            .map(|d| d.format("%d-%m-%Y").to_string())
            .unwrap_or_else(|| "-".to_string()),
        vehicle: subtrip.vehicle_no().map(str::to_string).unwrap_or_else(|| "-".to_string()),
        route: subtrip
            .route_cd
            .as_ref()
            .map(|r| placeholder_if_empty(&r.route_name))
            .unwrap_or_else(|| "-".to_string()),
        loading_wt: figures.loading_weight,
        unloading_wt: figures.unloading_weight,
        rate: figures.rate,
        freight_amount: figures.rate * figures.loading_weight,
        diesel_ltr: figures.diesel_ltr,
        driver_salary: figures.driver_salary,
        total_expense: figures.total_expense,
        distance_km: figures.distance,
    }
}

fn total_row(subtrips: &[Subtrip]) -> ExportRow {
    let mut total = ExportRow {
        subtrip: "TOTAL".to_string(),
        date: String::new(),
        vehicle: String::new(),
        route: String::new(),
        loading_wt: 0.0,
        unloading_wt: 0.0,
        rate: 0.0,
        freight_amount: 0.0,
        diesel_ltr: 0.0,
        driver_salary: 0.0,
        total_expense: 0.0,
        distance_km: 0.0,
    };

    for subtrip in subtrips {
        let figures = freight_figures(subtrip);
        total.loading_wt += figures.loading_weight;
        total.unloading_wt += figures.unloading_weight;
        total.rate += figures.rate;
        total.freight_amount += figures.rate * figures.loading_weight;
        total.diesel_ltr += figures.diesel_ltr;
        total.driver_salary += figures.driver_salary;
        total.total_expense += figures.total_expense;
        total.distance_km += figures.distance;
    }

    total
}

fn placeholder_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
