//! Route master data loader from TOML configuration
//!
//! Key names follow the ops API export (camelCase), so the same route
//! shape round-trips between the master file and JSON documents.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use haulbook_domain::model::Route;
use haulbook_types::{Error, Result};

/// Container for parsing routes.toml
#[derive(Debug, Deserialize)]
struct RouteMasterConfig {
    routes: Vec<Route>,
}

/// Route master data loaded from TOML, indexed by route name
#[derive(Debug)]
pub struct RouteMasterLoader {
    routes: HashMap<String, Route>,
}

impl RouteMasterLoader {
    /// Load route master data from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::RouteMaster(format!("Failed to read route master file: {}", e)))?;
        Self::load_from_str(&content)
    }

    /// Load route master data from TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: RouteMasterConfig = toml::from_str(toml_content)
            .map_err(|e| Error::RouteMaster(format!("Failed to parse route master TOML: {}", e)))?;

        let routes = config
            .routes
            .into_iter()
            .map(|r| (r.route_name.clone(), r))
            .collect();

        Ok(Self { routes })
    }

    /// Look up a route by name
    pub fn get_route(&self, route_name: &str) -> Option<&Route> {
        self.routes.get(route_name)
    }

    /// Get all routes
    pub fn all_routes(&self) -> Vec<&Route> {
        self.routes.values().collect()
    }

    /// Check if a route name exists in the master data
    pub fn has_route(&self, route_name: &str) -> bool {
        self.routes.contains_key(route_name)
    }

    /// Get the total number of routes
    pub fn count(&self) -> usize {
        self.routes.len()
    }
}
