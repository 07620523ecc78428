//! Expense classification by category

use serde::{Deserialize, Serialize};

use crate::model::{Expense, ExpenseType};

/// Aggregation category an expense may count toward
///
/// Categories are sets of expense types, not a one-to-one mapping:
/// `TripAdvance` covers extra advances too, since both net against the
/// same ledger when a trip is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    DriverSalary,
    Diesel,
    Toll,
    TripAdvance,
    TripExtraAdvance,
}

impl ExpenseCategory {
    /// Expense types belonging to this category
    pub fn expense_types(&self) -> &'static [ExpenseType] {
        match self {
            ExpenseCategory::DriverSalary => &[ExpenseType::DriverSalary],
            ExpenseCategory::Diesel => &[ExpenseType::Diesel],
            ExpenseCategory::Toll => &[ExpenseType::Toll],
            ExpenseCategory::TripAdvance => {
                &[ExpenseType::TripAdvance, ExpenseType::TripExtraAdvance]
            }
            ExpenseCategory::TripExtraAdvance => &[ExpenseType::TripExtraAdvance],
        }
    }
}

/// Whether an expense counts toward a category.
///
/// Unknown expense types (`ExpenseType::Other`) match no category.
pub fn classify(expense: &Expense, category: ExpenseCategory) -> bool {
    category.expense_types().contains(&expense.expense_type)
}

/// Sum the amounts of a subtrip's expenses matching a category
pub fn sum_category(expenses: &[Expense], category: ExpenseCategory) -> f64 {
    expenses
        .iter()
        .filter(|e| classify(e, category))
        .map(|e| e.amount)
        .sum()
}
