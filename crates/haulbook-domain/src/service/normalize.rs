//! Normalization boundary for raw subtrip documents
//!
//! Exports can be partial: weights missing, km readings absent, expenses
//! not populated. Defaulting happens here, exactly once, so the
//! aggregation arithmetic downstream always sees complete figures.

use crate::model::Subtrip;
use crate::service::expense_classifier::{classify, ExpenseCategory};

/// Fully-defaulted numeric figures for one subtrip
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FreightFigures {
    pub rate: f64,
    pub loading_weight: f64,
    pub unloading_weight: f64,
    pub shortage_weight: f64,
    pub shortage_amount: f64,
    /// end_km - start_km, zero-floored when readings are missing
    pub distance: f64,
    /// Sum over all expenses regardless of type
    pub total_expense: f64,
    pub driver_salary: f64,
    pub diesel_ltr: f64,
    pub toll_amount: f64,
    pub trip_advance: f64,
}

/// Coerce a raw subtrip into complete figures
pub fn freight_figures(subtrip: &Subtrip) -> FreightFigures {
    let mut figures = FreightFigures {
        rate: subtrip.rate.unwrap_or(0.0),
        loading_weight: subtrip.loading_weight.unwrap_or(0.0),
        unloading_weight: subtrip.unloading_weight.unwrap_or(0.0),
        shortage_weight: subtrip.shortage_weight.unwrap_or(0.0),
        shortage_amount: subtrip.shortage_amount.unwrap_or(0.0),
        ..Default::default()
    };

    if let (Some(start), Some(end)) = (subtrip.start_km, subtrip.end_km) {
        figures.distance = end - start;
    }

    for expense in &subtrip.expenses {
        figures.total_expense += expense.amount;
        if classify(expense, ExpenseCategory::DriverSalary) {
            figures.driver_salary += expense.amount;
        }
        if classify(expense, ExpenseCategory::Diesel) {
            figures.diesel_ltr += expense.diesel_ltr.unwrap_or(0.0);
        }
        if classify(expense, ExpenseCategory::Toll) {
            figures.toll_amount += expense.amount;
        }
        if classify(expense, ExpenseCategory::TripAdvance) {
            figures.trip_advance += expense.amount;
        }
    }

    figures
}
