//! File-based implementation of SubtripRepository

use std::path::PathBuf;

use haulbook_domain::model::Subtrip;
use haulbook_domain::repository::SubtripRepository;
use haulbook_types::Error;

use crate::documents::load_subtrips;

/// Subtrip repository over one exported JSON collection
pub struct FileSubtripRepository {
    json_path: PathBuf,
    subtrips: Vec<Subtrip>,
}

impl FileSubtripRepository {
    /// Create a new repository from a JSON export path
    pub fn new(json_path: PathBuf) -> Result<Self, Error> {
        let subtrips = load_subtrips(&json_path)?;
        Ok(Self {
            json_path,
            subtrips,
        })
    }

    /// Get the JSON path
    pub fn json_path(&self) -> &PathBuf {
        &self.json_path
    }

    /// Reload data from the export file
    pub fn reload(&mut self) -> Result<(), Error> {
        self.subtrips = load_subtrips(&self.json_path)?;
        Ok(())
    }
}

impl SubtripRepository for FileSubtripRepository {
    fn find_all(&self) -> Result<Vec<Subtrip>, Error> {
        Ok(self.subtrips.clone())
    }

    fn find_by_vehicle(&self, vehicle_no: &str) -> Result<Vec<Subtrip>, Error> {
        Ok(self
            .subtrips
            .iter()
            .filter(|s| s.vehicle_no().is_some_and(|v| v.eq_ignore_ascii_case(vehicle_no)))
            .cloned()
            .collect())
    }

    fn find_by_date(&self, date: chrono::NaiveDate) -> Result<Vec<Subtrip>, Error> {
        Ok(self
            .subtrips
            .iter()
            .filter(|s| s.start_date == Some(date))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("subtrips.json");
        std::fs::write(
            &path,
            r#"[
                {"_id": "ST-1", "startDate": "2024-03-18",
                 "tripId": {"vehicleId": {"vehicleNo": "KA-01-AB-1234"}}},
                {"_id": "ST-2", "startDate": "2024-03-19",
                 "tripId": {"vehicleId": {"vehicleNo": "KA-05-XY-9999"}}}
            ]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_find_all() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSubtripRepository::new(write_fixture(&dir)).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn test_find_by_vehicle_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSubtripRepository::new(write_fixture(&dir)).unwrap();
        let found = repo.find_by_vehicle("ka-01-ab-1234").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subtrip_id, "ST-1");
    }

    #[test]
    fn test_find_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSubtripRepository::new(write_fixture(&dir)).unwrap();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 19).unwrap();
        let found = repo.find_by_date(date).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].subtrip_id, "ST-2");
    }
}
