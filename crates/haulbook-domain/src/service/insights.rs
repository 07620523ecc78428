//! Route-deviation insight generation
//!
//! Compares what a subtrip actually consumed against what its route
//! expects for the vehicle type that ran it. Insights are opportunistic:
//! a subtrip without route or vehicle data simply yields none.

use serde::{Deserialize, Serialize};

use crate::model::Subtrip;
use crate::service::normalize::freight_figures;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    FuelOveruse,
    FuelUnderuse,
    TollOverrun,
    TollUnderrun,
    SalaryOverpaid,
    SalaryUnderpaid,
    DistanceOverrun,
    DistanceUnderrun,
}

impl InsightKind {
    pub fn label(&self) -> &'static str {
        match self {
            InsightKind::FuelOveruse => "fuel-overuse",
            InsightKind::FuelUnderuse => "fuel-underuse",
            InsightKind::TollOverrun => "toll-overrun",
            InsightKind::TollUnderrun => "toll-underrun",
            InsightKind::SalaryOverpaid => "salary-overpaid",
            InsightKind::SalaryUnderpaid => "salary-underpaid",
            InsightKind::DistanceOverrun => "distance-overrun",
            InsightKind::DistanceUnderrun => "distance-underrun",
        }
    }
}

/// One deviation message; carries both the expected and actual value so
/// a reader can verify the delta independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
}

struct Dimension {
    over: InsightKind,
    under: InsightKind,
    noun: &'static str,
    unit: &'static str,
}

/// Dimension check order: diesel, toll, driver salary, distance.
const DIMENSIONS: [Dimension; 4] = [
    Dimension {
        over: InsightKind::FuelOveruse,
        under: InsightKind::FuelUnderuse,
        noun: "Diesel use",
        unit: " L",
    },
    Dimension {
        over: InsightKind::TollOverrun,
        under: InsightKind::TollUnderrun,
        noun: "Toll spend",
        unit: "",
    },
    Dimension {
        over: InsightKind::SalaryOverpaid,
        under: InsightKind::SalaryUnderpaid,
        noun: "Driver salary",
        unit: "",
    },
    Dimension {
        over: InsightKind::DistanceOverrun,
        under: InsightKind::DistanceUnderrun,
        noun: "Distance run",
        unit: " km",
    },
];

/// Generate 0-4 deviation insights for one subtrip.
///
/// Returns an empty list when the route, trip, or vehicle reference is
/// missing; a route with no expectation record for the vehicle type is
/// treated as all-zero expectations.
pub fn generate_insights(subtrip: &Subtrip) -> Vec<Insight> {
    let Some(route) = subtrip.route_cd.as_ref() else {
        return Vec::new();
    };
    let Some(trip) = subtrip.trip.as_ref() else {
        return Vec::new();
    };
    let Some(vehicle) = trip.vehicle.as_ref() else {
        return Vec::new();
    };

    let expectation = route.expectation_for(vehicle.vehicle_type.as_deref().unwrap_or(""));
    let figures = freight_figures(subtrip);

    let expected = [
        expectation.diesel,
        route.toll_amt.unwrap_or(0.0),
        expectation.fixed_salary,
        route.distance.unwrap_or(0.0),
    ];
    let actual = [
        figures.diesel_ltr,
        figures.toll_amount,
        figures.driver_salary,
        figures.distance,
    ];

    let mut insights = Vec::new();
    for (dimension, (&expected, &actual)) in
        DIMENSIONS.iter().zip(expected.iter().zip(actual.iter()))
    {
        let delta = actual - expected;
        if delta == 0.0 {
            continue;
        }
        let (kind, verb) = if delta > 0.0 {
            (dimension.over, "exceeded")
        } else {
            (dimension.under, "came in under")
        };
        insights.push(Insight {
            kind,
            message: format!(
                "{noun} {verb} the route figure by {delta:.1}{unit} (expected {expected:.1}{unit}, actual {actual:.1}{unit})",
                noun = dimension.noun,
                verb = verb,
                delta = delta.abs(),
                unit = dimension.unit,
                expected = expected,
                actual = actual,
            ),
        });
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Expense, ExpenseType, Route, Trip, Vehicle, VehicleExpectation};

    fn vehicle(vehicle_type: &str) -> Vehicle {
        Vehicle {
            vehicle_type: Some(vehicle_type.to_string()),
            ..Default::default()
        }
    }

    fn route() -> Route {
        Route {
            route_name: "NMK-BLR".to_string(),
            salary: vec![VehicleExpectation {
                vehicle_type: "10-Wheeler".to_string(),
                fixed_salary: 3000.0,
                diesel: 100.0,
                ad_blue: 5.0,
                advance_amt: 1000.0,
            }],
            toll_amt: Some(850.0),
            distance: Some(420.0),
            ..Default::default()
        }
    }

    fn diesel_expense(amount: f64, liters: f64) -> Expense {
        Expense {
            expense_type: ExpenseType::Diesel,
            amount,
            diesel_ltr: Some(liters),
            ..Default::default()
        }
    }

    fn full_subtrip() -> Subtrip {
        Subtrip {
            route_cd: Some(route()),
            trip: Some(Trip {
                vehicle: Some(vehicle("10-wheeler")),
                ..Default::default()
            }),
            start_km: Some(0.0),
            end_km: Some(420.0),
            expenses: vec![
                diesel_expense(9000.0, 100.0),
                Expense {
                    expense_type: ExpenseType::Toll,
                    amount: 850.0,
                    ..Default::default()
                },
                Expense {
                    expense_type: ExpenseType::DriverSalary,
                    amount: 3000.0,
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_references_yield_nothing() {
        let base = full_subtrip();

        let mut no_route = base.clone();
        no_route.route_cd = None;
        assert!(generate_insights(&no_route).is_empty());

        let mut no_trip = base.clone();
        no_trip.trip = None;
        assert!(generate_insights(&no_trip).is_empty());

        let mut no_vehicle = base.clone();
        no_vehicle.trip.as_mut().unwrap().vehicle = None;
        assert!(generate_insights(&no_vehicle).is_empty());

        let mut none_at_all = base;
        none_at_all.route_cd = None;
        none_at_all.trip = None;
        assert!(generate_insights(&none_at_all).is_empty());
    }

    #[test]
    fn test_exact_match_emits_nothing() {
        assert!(generate_insights(&full_subtrip()).is_empty());
    }

    #[test]
    fn test_fuel_overuse_names_all_three_values() {
        let mut subtrip = full_subtrip();
        subtrip.expenses[0] = diesel_expense(11700.0, 130.0);
        let insights = generate_insights(&subtrip);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::FuelOveruse);
        assert!(insights[0].message.contains("30"));
        assert!(insights[0].message.contains("100"));
        assert!(insights[0].message.contains("130"));
    }

    #[test]
    fn test_underrun_reports_absolute_delta() {
        let mut subtrip = full_subtrip();
        subtrip.end_km = Some(400.0);
        let insights = generate_insights(&subtrip);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::DistanceUnderrun);
        assert!(insights[0].message.contains("20.0"));
        assert!(insights[0].message.contains("420.0"));
        assert!(insights[0].message.contains("400.0"));
    }

    #[test]
    fn test_all_four_dimensions_deviating() {
        let mut subtrip = full_subtrip();
        subtrip.expenses = vec![
            diesel_expense(10000.0, 110.0),
            Expense {
                expense_type: ExpenseType::Toll,
                amount: 700.0,
                ..Default::default()
            },
            Expense {
                expense_type: ExpenseType::DriverSalary,
                amount: 3200.0,
                ..Default::default()
            },
        ];
        subtrip.end_km = Some(450.0);
        let insights = generate_insights(&subtrip);
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0].kind, InsightKind::FuelOveruse);
        assert_eq!(insights[1].kind, InsightKind::TollUnderrun);
        assert_eq!(insights[2].kind, InsightKind::SalaryOverpaid);
        assert_eq!(insights[3].kind, InsightKind::DistanceOverrun);
    }

    #[test]
    fn test_unknown_vehicle_type_uses_zero_expectations() {
        let mut subtrip = full_subtrip();
        subtrip.trip.as_mut().unwrap().vehicle = Some(vehicle("6-Wheeler"));
        let insights = generate_insights(&subtrip);
        // everything actual is an overrun against zero except toll/distance
        // which the route defines lane-wide
        assert!(insights
            .iter()
            .any(|i| i.kind == InsightKind::FuelOveruse));
        assert!(insights
            .iter()
            .any(|i| i.kind == InsightKind::SalaryOverpaid));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let mut subtrip = full_subtrip();
        subtrip.expenses[0] = diesel_expense(11700.0, 130.0);
        assert_eq!(generate_insights(&subtrip), generate_insights(&subtrip));
    }
}
