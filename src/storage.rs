use crate::models::AnalysisResult;
use serde_json::Value;
use std::{
    collections::BTreeMap,
    env,
    io,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{debug, error};

/// Key the last structured result is stored under.
pub const RESULTS_KEY: &str = "results";

pub fn resolve_results_path() -> PathBuf {
    if let Ok(path) = env::var("WC_RESULTS_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/results.json")
}

/// Write-only key-value file holding the last analysis result.
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn save_result(&self, result: &AnalysisResult) -> io::Result<()> {
        let mut entries = load_entries(&self.path).await;
        entries.insert(RESULTS_KEY.to_string(), serde_json::to_value(result)?);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_json::to_vec_pretty(&entries)?;
        fs::write(&self.path, payload).await?;
        debug!(path = %self.path.display(), "stored last result");
        Ok(())
    }
}

async fn load_entries(path: &Path) -> BTreeMap<String, Value> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse results file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read results file: {err}");
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(filename: &str) -> AnalysisResult {
        AnalysisResult {
            mode: "API".to_string(),
            filename: filename.to_string(),
            lines: 1,
            words: 2,
            bytes: 3,
            chars: 3,
        }
    }

    #[tokio::test]
    async fn save_overwrites_results_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.json");
        let store = ResultStore::new(&path);

        store.save_result(&sample("first.txt")).await.unwrap();
        let mut raw: BTreeMap<String, Value> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        raw.insert("theme".to_string(), Value::from("dark"));
        std::fs::write(&path, serde_json::to_vec(&raw).unwrap()).unwrap();

        store.save_result(&sample("second.txt")).await.unwrap();
        let raw: BTreeMap<String, Value> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        let stored: AnalysisResult = serde_json::from_value(raw[RESULTS_KEY].clone()).unwrap();
        assert_eq!(stored, sample("second.txt"));
    }

    #[tokio::test]
    async fn corrupt_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(&path, b"not json").unwrap();

        ResultStore::new(&path).save_result(&sample("a.txt")).await.unwrap();
        let raw: BTreeMap<String, Value> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[RESULTS_KEY]["filename"], "a.txt");
    }
}
