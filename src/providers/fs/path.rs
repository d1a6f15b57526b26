use crate::{
    constants::{APP_DIRECTORY_NAME, CONFIG_FILE_NAME, LOG_FILE_NAME},
    errors::{AppError, IOError},
    localization::current_labels,
};
use dirs::home_dir;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

pub fn get_base_path() -> Result<PathBuf, AppError> {
    let mut path = home_dir().ok_or(AppError::IO(IOError::Msg(
        current_labels()
            .could_not_recognize_home_directory
            .to_string(),
    )))?;
    path.push(APP_DIRECTORY_NAME);
    if !path.exists() {
        create_dir_all(&path).map_err(|_| {
            AppError::IO(IOError::Msg(
                current_labels().could_not_create_app_directory.to_string(),
            ))
        })?;
    }
    Ok(path)
}

pub fn get_config_file_path(base_path: &Path) -> PathBuf {
    base_path.join(CONFIG_FILE_NAME)
}

pub fn get_log_file_path(base_path: &Path) -> PathBuf {
    base_path.join(LOG_FILE_NAME)
}
