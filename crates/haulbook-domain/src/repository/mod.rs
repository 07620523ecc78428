//! Repository trait definitions for document access

use chrono::NaiveDate;

use crate::model::{Route, Subtrip};
use haulbook_types::Error;

/// Repository over a collection of subtrip documents
pub trait SubtripRepository {
    /// Load all subtrips
    fn find_all(&self) -> Result<Vec<Subtrip>, Error>;

    /// Find subtrips by vehicle registration number
    fn find_by_vehicle(&self, vehicle_no: &str) -> Result<Vec<Subtrip>, Error>;

    /// Find subtrips starting on a date
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Subtrip>, Error>;
}

/// Repository for route master data
pub trait RouteMasterRepository {
    /// Load all route master entries
    fn find_all(&self) -> Result<Vec<Route>, Error>;

    /// Find by route name
    fn find_by_name(&self, route_name: &str) -> Result<Option<Route>, Error>;
}
