// src/storage/mod.rs
use crate::dashboard::DocxDashboard;
use crate::dataset::StaticDataset;
use crate::extractors::Table;
use crate::utils::error::StorageError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory for results of one source document: /base_dir/<doc stem>/
    fn document_dir(&self, source: &Path) -> Result<PathBuf, StorageError> {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let target_dir = self.base_dir.join(stem);

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    fn write_json<T: Serialize + ?Sized>(&self, file_path: PathBuf, value: &T) -> Result<PathBuf, StorageError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved {}", file_path.display());
        Ok(file_path)
    }

    /// Saves every extracted table, in document order
    pub fn save_tables(&self, source: &Path, tables: &[Table]) -> Result<PathBuf, StorageError> {
        let dir = self.document_dir(source)?;
        self.write_json(dir.join("tables.json"), tables)
    }

    /// Saves bullet lists keyed by the section marker used to extract them
    pub fn save_bullets(
        &self,
        source: &Path,
        bullets: &BTreeMap<String, Vec<String>>,
    ) -> Result<PathBuf, StorageError> {
        let dir = self.document_dir(source)?;
        self.write_json(dir.join("bullets.json"), bullets)
    }

    /// Saves the role-bound, scored dashboard data
    pub fn save_dashboard(&self, source: &Path, dashboard: &DocxDashboard) -> Result<PathBuf, StorageError> {
        let dir = self.document_dir(source)?;
        self.write_json(dir.join("dashboard.json"), dashboard)
    }

    /// Saves metadata about the extraction run in JSON format
    pub fn save_extraction_metadata(
        &self,
        source: &Path,
        tables: &[Table],
        bullets: &BTreeMap<String, Vec<String>>,
    ) -> Result<PathBuf, StorageError> {
        let dir = self.document_dir(source)?;

        let table_summaries: Vec<serde_json::Value> = tables
            .iter()
            .map(|t| serde_json::json!({ "columns": t.columns(), "row_count": t.len() }))
            .collect();
        let bullet_counts: BTreeMap<&str, usize> = bullets
            .iter()
            .map(|(marker, items)| (marker.as_str(), items.len()))
            .collect();

        // Create metadata structure
        let metadata = serde_json::json!({
            "source": source.display().to_string(),
            "table_count": tables.len(),
            "tables": table_summaries,
            "bullet_counts": bullet_counts,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        self.write_json(dir.join("extraction_meta.json"), &metadata)
    }

    /// Saves the static dataset to /base_dir/static/dataset.json
    pub fn save_static_dataset(&self, dataset: &StaticDataset) -> Result<PathBuf, StorageError> {
        let dir = self.base_dir.join("static");
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(StorageError::IoError)?;
        }
        self.write_json(dir.join("dataset.json"), dataset)
    }
}
