//! Infrastructure layer: document loaders and file-backed repositories

pub mod adjustments_csv;
pub mod documents;
pub mod persistence;
pub mod route_master_loader;
