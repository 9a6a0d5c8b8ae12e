//! Implements PreferencesPort using a JSON file.
//!
//! Holds the last-used username and timeframe between sessions.

use crate::domain::{DomainError, Preferences};
use crate::ports::PreferencesPort;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// JSON file-based preference storage.
pub struct PrefsJson {
    path: PathBuf,
}

impl PrefsJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl PreferencesPort for PrefsJson {
    async fn load(&self) -> Result<Preferences, DomainError> {
        match fs::read_to_string(&self.path).await {
            Ok(s) => Ok(serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "unreadable preferences, using defaults");
                Preferences::default()
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(DomainError::Preferences(format!(
                "read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Write-replace: temp file, fsync, rename over the target.
    async fn save(&self, prefs: &Preferences) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| DomainError::Preferences(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Preferences(format!("create dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Preferences(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Preferences(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Preferences(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Preferences(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timeframe;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PrefsJson::new(dir.path().join("preferences.json"));
        let loaded = prefs.load().await.unwrap();
        assert_eq!(loaded.username, "limbero");
        assert_eq!(loaded.timeframe, Timeframe::Anytime);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = PrefsJson::new(&path);
        let wanted = Preferences {
            username: "cinephile".to_string(),
            timeframe: Timeframe::ThisWeek,
        };

        prefs.save(&wanted).await.unwrap();

        assert_eq!(prefs.load().await.unwrap(), wanted);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"this_week\""));
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();
        let loaded = PrefsJson::new(&path).load().await.unwrap();
        assert_eq!(loaded, Preferences::default());
    }
}
