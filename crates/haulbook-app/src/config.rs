//! Configuration management for haulbook
//!
//! Config stored at: ~/.config/haulbook/config.json
//!
//! Billing rates differ per tenant, so they live here and are handed to
//! the aggregators as an explicit `BillingRates` value.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use haulbook_domain::service::BillingRates;
use haulbook_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Commission deducted from the freight rate per ton on transporter
    /// settlements
    #[serde(default)]
    pub transporter_commission_rate: f64,

    /// CGST/SGST half-rate percentage applied to invoice totals
    #[serde(default = "default_invoice_tax_percent")]
    pub invoice_tax_percent: f64,

    /// Fallback TDS percentage for transporters without one on record
    #[serde(default)]
    pub default_tds_percent: f64,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_invoice_tax_percent() -> f64 {
    9.0
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transporter_commission_rate: 0.0,
            invoice_tax_percent: default_invoice_tax_percent(),
            default_tds_percent: 0.0,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulbook");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Billing rates to inject into the aggregators
    pub fn billing_rates(&self) -> BillingRates {
        BillingRates {
            transporter_commission_rate: self.transporter_commission_rate,
            invoice_tax_percent: self.invoice_tax_percent,
            default_tds_percent: self.default_tds_percent,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulbook Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Commission rate:   {:.2}", self.transporter_commission_rate)?;
        writeln!(f, "Tax (CGST/SGST):   {:.2}% each", self.invoice_tax_percent)?;
        writeln!(f, "Default TDS:       {:.2}%", self.default_tds_percent)?;
        writeln!(f, "Output format:     {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
