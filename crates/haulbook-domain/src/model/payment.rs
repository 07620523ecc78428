//! Transporter payment and payroll adjustment types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::party::Transporter;
use super::subtrip::Subtrip;

/// A transporter's settlement over one billing period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransporterPayment {
    #[serde(alias = "_id")]
    pub payment_no: String,
    #[serde(rename = "transporterId")]
    pub transporter: Option<Transporter>,
    pub associated_subtrips: Vec<Subtrip>,
    /// Advances already paid out during the period
    pub repayments: Vec<Repayment>,
    pub period_start_date: Option<NaiveDate>,
    pub period_end_date: Option<NaiveDate>,
}

/// A prior advance netted against the period's income
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Repayment {
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub remarks: Option<String>,
}

/// Ad-hoc payroll credit entered by a back-office user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalPayment {
    pub label: String,
    pub amount: f64,
}

/// Ad-hoc payroll debit entered by a back-office user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalDeduction {
    pub label: String,
    pub amount: f64,
}
