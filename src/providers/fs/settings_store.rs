use crate::{
    errors::{AppError, IOError},
    providers::{
        fs::path::get_config_file_path,
        settings_store::{SettingsReader, SettingsWriter},
    },
    shapes::settings::Settings,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs, task::spawn_blocking};

/// `config.json` inside the app directory.
pub struct FileSystemSettingsStore {
    config_path: PathBuf,
}

impl FileSystemSettingsStore {
    pub fn new(base_path: &Path) -> Self {
        Self {
            config_path: get_config_file_path(base_path),
        }
    }
}

#[async_trait]
impl SettingsReader for FileSystemSettingsStore {
    async fn read(&self) -> Result<Settings, AppError> {
        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(IOError::from)?;
        Ok(serde_json::from_str(&content).map_err(IOError::from)?)
    }
}

#[async_trait]
impl SettingsWriter for FileSystemSettingsStore {
    async fn save(&self, settings: Settings) -> Result<Settings, AppError> {
        let (settings, bytes) = spawn_blocking(move || {
            let bytes = serde_json::to_vec_pretty(&settings);
            (settings, bytes)
        })
        .await
        .map_err(|e| IOError::Msg(format!("settings encoder stopped: {}", e)))?;
        fs::write(&self.config_path, bytes.map_err(IOError::from)?)
            .await
            .map_err(IOError::from)?;
        Ok(settings)
    }
}
