use crate::error::{DatasetError, Result};
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "leadboard";
const DATASET_FILENAME: &str = "leads.json";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(DatasetError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(DatasetError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn default_dataset_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DATASET_FILENAME))
}

/// Flag beats config beats the XDG data directory.
pub fn resolve_dataset_path(cli: Option<PathBuf>, configured: Option<PathBuf>) -> Result<PathBuf> {
    match cli.or(configured) {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(DatasetError::InvalidDataPath(path));
            }
            Ok(path)
        }
        None => default_dataset_path(),
    }
}
