//! File-based implementation of RouteMasterRepository

use std::path::PathBuf;

use haulbook_domain::model::Route;
use haulbook_domain::repository::RouteMasterRepository;
use haulbook_types::Error;

use crate::route_master_loader::RouteMasterLoader;

/// File-based route master repository (TOML)
pub struct FileRouteMasterRepository {
    toml_path: PathBuf,
    loader: RouteMasterLoader,
}

impl FileRouteMasterRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = RouteMasterLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    /// Get the TOML path
    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload data from TOML
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = RouteMasterLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }

    /// Borrow the underlying loader
    pub fn loader(&self) -> &RouteMasterLoader {
        &self.loader
    }
}

impl RouteMasterRepository for FileRouteMasterRepository {
    fn find_all(&self) -> Result<Vec<Route>, Error> {
        Ok(self.loader.all_routes().into_iter().cloned().collect())
    }

    fn find_by_name(&self, route_name: &str) -> Result<Option<Route>, Error> {
        Ok(self.loader.get_route(route_name).cloned())
    }
}
