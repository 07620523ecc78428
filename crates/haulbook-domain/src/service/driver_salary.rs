//! Driver salary aggregation

use serde::{Deserialize, Serialize};

use crate::model::{AdditionalDeduction, AdditionalPayment, Subtrip};
use crate::service::expense_classifier::{sum_category, ExpenseCategory};

/// Net payroll figures for one driver over a set of subtrips
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverSalarySummary {
    pub total_trip_wise_income: f64,
    pub total_additional_payments: f64,
    pub total_deductions: f64,
    pub net_income: f64,
}

/// Sum of driver-salary expense amounts recorded on one subtrip
pub fn salary_for_subtrip(subtrip: &Subtrip) -> f64 {
    sum_category(&subtrip.expenses, ExpenseCategory::DriverSalary)
}

/// Net a driver's trip-wise income against ad-hoc payments and deductions.
///
/// `net_income = trip_wise + payments - deductions` holds exactly in
/// floating point; no rounding is applied here.
pub fn summarize_driver_salary(
    subtrips: &[Subtrip],
    additional_payments: &[AdditionalPayment],
    additional_deductions: &[AdditionalDeduction],
) -> DriverSalarySummary {
    let total_trip_wise_income: f64 = subtrips.iter().map(salary_for_subtrip).sum();
    let total_additional_payments: f64 = additional_payments.iter().map(|p| p.amount).sum();
    let total_deductions: f64 = additional_deductions.iter().map(|d| d.amount).sum();

    DriverSalarySummary {
        total_trip_wise_income,
        total_additional_payments,
        total_deductions,
        net_income: total_trip_wise_income + total_additional_payments - total_deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Expense, ExpenseType};

    fn subtrip_with(expenses: Vec<Expense>) -> Subtrip {
        Subtrip {
            expenses,
            ..Default::default()
        }
    }

    fn expense(expense_type: ExpenseType, amount: f64) -> Expense {
        Expense {
            expense_type,
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn test_salary_ignores_other_expense_types() {
        let subtrip = subtrip_with(vec![
            expense(ExpenseType::DriverSalary, 500.0),
            expense(ExpenseType::Diesel, 300.0),
        ]);
        assert_eq!(salary_for_subtrip(&subtrip), 500.0);
    }

    #[test]
    fn test_salary_zero_for_no_expenses() {
        assert_eq!(salary_for_subtrip(&Subtrip::default()), 0.0);
    }

    #[test]
    fn test_empty_inputs_yield_zero_summary() {
        let summary = summarize_driver_salary(&[], &[], &[]);
        assert_eq!(summary, DriverSalarySummary::default());
    }

    #[test]
    fn test_net_income_identity() {
        let subtrips = vec![subtrip_with(vec![expense(ExpenseType::DriverSalary, 1000.0)])];
        let payments = vec![AdditionalPayment {
            label: "bonus".to_string(),
            amount: 200.0,
        }];
        let deductions = vec![AdditionalDeduction {
            label: "penalty".to_string(),
            amount: 50.0,
        }];
        let summary = summarize_driver_salary(&subtrips, &payments, &deductions);
        assert_eq!(summary.total_trip_wise_income, 1000.0);
        assert_eq!(summary.total_additional_payments, 200.0);
        assert_eq!(summary.total_deductions, 50.0);
        assert_eq!(summary.net_income, 1150.0);
        assert_eq!(
            summary.net_income,
            summary.total_trip_wise_income + summary.total_additional_payments
                - summary.total_deductions
        );
    }

    #[test]
    fn test_no_subtrips_reduces_to_payments_minus_deductions() {
        let payments = vec![AdditionalPayment {
            label: "festival advance".to_string(),
            amount: 500.0,
        }];
        let deductions = vec![AdditionalDeduction {
            label: "mess".to_string(),
            amount: 120.0,
        }];
        let summary = summarize_driver_salary(&[], &payments, &deductions);
        assert_eq!(summary.total_trip_wise_income, 0.0);
        assert_eq!(summary.net_income, 380.0);
    }

    #[test]
    fn test_summaries_are_repeatable() {
        let subtrips = vec![subtrip_with(vec![
            expense(ExpenseType::DriverSalary, 750.0),
            expense(ExpenseType::Toll, 90.0),
        ])];
        let first = summarize_driver_salary(&subtrips, &[], &[]);
        let second = summarize_driver_salary(&subtrips, &[], &[]);
        assert_eq!(first, second);
    }
}
