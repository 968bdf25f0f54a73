//! JSON-based sweep result storage.
//!
//! Stores each sweep as a separate JSON file for simplicity and
//! durability. Supports listing, prefix lookup and one-off export of
//! reports; all of it operates on a finished [`SweepReport`], after the
//! sweep itself has returned.

use crate::config::Paths;
use crate::error::{StorageError, StorageResult};
use crate::scanner::SweepReport;
use crate::types::SweepId;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON file-based sweep storage.
pub struct ReportStore {
    reports_dir: PathBuf,
}

impl ReportStore {
    /// Create a store rooted at the given directory.
    pub fn new(reports_dir: PathBuf) -> StorageResult<Self> {
        fs::create_dir_all(&reports_dir)
            .map_err(|e| StorageError::DirectoryError(e.to_string()))?;

        Ok(Self { reports_dir })
    }

    /// Create a store at the application's default data location.
    pub fn open_default(paths: &Paths) -> StorageResult<Self> {
        Self::new(paths.reports_dir())
    }

    /// Save a sweep report.
    pub fn save(&self, report: &SweepReport) -> StorageResult<()> {
        let file = self.report_file(&report.id);
        let content = serde_json::to_string_pretty(report)?;

        fs::write(&file, content).map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        debug!(id = %report.id, path = %file.display(), "sweep saved");
        Ok(())
    }

    /// Load a sweep report by ID.
    pub fn load(&self, id: &SweepId) -> StorageResult<SweepReport> {
        let file = self.report_file(id);

        if !file.exists() {
            return Err(StorageError::NotFound(id.to_string()));
        }

        let content =
            fs::read_to_string(&file).map_err(|e| StorageError::LoadFailed(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| StorageError::LoadFailed(e.to_string()))
    }

    /// Find a sweep by short ID prefix.
    pub fn find_by_prefix(&self, prefix: &str) -> StorageResult<SweepReport> {
        let matches: Vec<_> = self
            .list_ids()?
            .into_iter()
            .filter(|id| id.to_string().starts_with(prefix))
            .collect();

        match matches.len() {
            0 => Err(StorageError::NotFound(prefix.to_string())),
            1 => self.load(&matches[0]),
            n => Err(StorageError::LoadFailed(format!(
                "ambiguous prefix '{}': {} matches",
                prefix, n
            ))),
        }
    }

    /// List all stored sweep IDs.
    pub fn list_ids(&self) -> StorageResult<Vec<SweepId>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.reports_dir)
            .map_err(|e| StorageError::DirectoryError(e.to_string()))?
        {
            let entry = entry.map_err(|e| StorageError::DirectoryError(e.to_string()))?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    if let Ok(id) = stem.to_string_lossy().parse::<SweepId>() {
                        ids.push(id);
                    }
                }
            }
        }

        Ok(ids)
    }

    /// List all stored reports, most recent first.
    pub fn list(&self) -> StorageResult<Vec<SweepReport>> {
        let mut reports = Vec::new();

        for id in self.list_ids()? {
            if let Ok(report) = self.load(&id) {
                reports.push(report);
            }
        }

        reports.sort_by(|a, b| b.started_at.cmp(&a.started_at));

        Ok(reports)
    }

    /// List recent sweeps (last n).
    pub fn list_recent(&self, count: usize) -> StorageResult<Vec<SweepReport>> {
        let mut reports = self.list()?;
        reports.truncate(count);
        Ok(reports)
    }

    /// Delete a stored sweep.
    pub fn delete(&self, id: &SweepId) -> StorageResult<()> {
        let file = self.report_file(id);

        if !file.exists() {
            return Err(StorageError::NotFound(id.to_string()));
        }

        fs::remove_file(&file).map_err(|e| StorageError::SaveFailed(e.to_string()))
    }

    /// Delete every stored sweep, returning how many were removed.
    pub fn clear(&self) -> StorageResult<usize> {
        let ids = self.list_ids()?;
        for id in &ids {
            self.delete(id)?;
        }
        Ok(ids.len())
    }

    /// Get the file path for a sweep.
    fn report_file(&self, id: &SweepId) -> PathBuf {
        self.reports_dir.join(format!("{}.json", id))
    }
}

/// Write a report as pretty JSON to an explicit path.
pub fn export_to_file(report: &SweepReport, path: &Path) -> StorageResult<()> {
    let content = serde_json::to_string_pretty(report)?;
    fs::write(path, content).map_err(|e| StorageError::SaveFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortList;

    fn sample_report(network: &str) -> SweepReport {
        let ports: PortList = "80,443".parse().unwrap();
        SweepReport::new(network, &ports).finalize(Vec::new(), 2, 10)
    }

    fn temp_store() -> (tempfile::TempDir, ReportStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ReportStore::new(dir.path().join("reports")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_dir, store) = temp_store();
        let report = sample_report("10.0.0.0/30");

        store.save(&report).unwrap();
        let loaded = store.load(&report.id).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.network, report.network);
        assert_eq!(loaded.hosts_scanned, 2);
    }

    #[test]
    fn test_load_missing_report() {
        let (_dir, store) = temp_store();
        assert!(matches!(
            store.load(&SweepId::new()),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_find_by_prefix() {
        let (_dir, store) = temp_store();
        let report = sample_report("10.0.0.0/30");
        store.save(&report).unwrap();

        let found = store.find_by_prefix(&report.id.short()).unwrap();
        assert_eq!(found.id, report.id);

        assert!(store.find_by_prefix("zzzzzzzz").is_err());
    }

    #[test]
    fn test_list_recent_truncates() {
        let (_dir, store) = temp_store();
        for i in 0..5 {
            store
                .save(&sample_report(&format!("10.0.{}.0/30", i)))
                .unwrap();
        }

        assert_eq!(store.list().unwrap().len(), 5);
        assert_eq!(store.list_recent(3).unwrap().len(), 3);
    }

    #[test]
    fn test_delete_and_clear() {
        let (_dir, store) = temp_store();
        let report = sample_report("10.0.0.0/30");
        store.save(&report).unwrap();
        store.save(&sample_report("10.0.1.0/30")).unwrap();

        store.delete(&report.id).unwrap();
        assert!(store.load(&report.id).is_err());

        assert_eq!(store.clear().unwrap(), 1);
        assert!(store.list_ids().unwrap().is_empty());
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        let report = sample_report("192.168.1.0/24");

        export_to_file(&report, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: SweepReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.id, report.id);
    }
}
