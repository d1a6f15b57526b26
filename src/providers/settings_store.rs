use crate::{errors::AppError, shapes::settings::Settings};
use async_trait::async_trait;

/// Source of the persisted [`Settings`].
///
/// A missing store must surface as `IOError::NotFound`, so the caller can
/// tell a first run from a broken file.
#[async_trait]
pub trait SettingsReader {
    async fn read(&self) -> Result<Settings, AppError>;
}

#[async_trait]
pub trait SettingsWriter {
    /// Persists `settings` and hands them back.
    async fn save(&self, settings: Settings) -> Result<Settings, AppError>;
}
