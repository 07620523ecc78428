//! Repository open helpers

use std::path::PathBuf;

use haulbook_infra::persistence::{FileRouteMasterRepository, FileSubtripRepository};
use haulbook_types::Result;

/// Open a file-based subtrip repository over a JSON export
pub fn open_subtrip_repo(json_path: PathBuf) -> Result<FileSubtripRepository> {
    FileSubtripRepository::new(json_path)
}

/// Open a route master repository from TOML
pub fn open_route_master_repo(toml_path: PathBuf) -> Result<FileRouteMasterRepository> {
    FileRouteMasterRepository::new(toml_path)
}
