//! File-backed repository implementations

mod file_route_master_repo;
mod file_subtrip_repo;

pub use file_route_master_repo::FileRouteMasterRepository;
pub use file_subtrip_repo::FileSubtripRepository;
