use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use leadboard_core::{LeadQuery, SortKey};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "leadboard";
const CONFIG_FILENAME: &str = "config.toml";
const NO_SORT: &str = "none";

pub const DEFAULT_SORT: SortKey = SortKey::Company;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub dataset: Option<PathBuf>,
    pub query: QueryDefaults,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub sort: Option<SortKey>,
    pub min_contacts: usize,
    pub require_head_of_data: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportConfig {
    pub dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            query: QueryDefaults {
                sort: Some(DEFAULT_SORT),
                min_contacts: 0,
                require_head_of_data: false,
            },
            export: ExportConfig::default(),
        }
    }
}

impl QueryDefaults {
    /// Starting point for a query before command-line overrides.
    pub fn to_query(&self) -> LeadQuery {
        LeadQuery {
            search_text: String::new(),
            min_contacts: self.min_contacts,
            require_head_of_data: self.require_head_of_data,
            sort_by: self.sort,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid query.sort value: {0}")]
    InvalidSort(String),
    #[error("invalid dataset path: {0}")]
    InvalidDatasetPath(PathBuf),
    #[error("invalid export.dir value: {0}")]
    InvalidExportDir(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    dataset: Option<PathBuf>,
    query: Option<QueryFile>,
    export: Option<ExportFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct QueryFile {
    sort: Option<String>,
    min_contacts: Option<usize>,
    require_head_of_data: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExportFile {
    dir: Option<PathBuf>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(dataset) = parsed.dataset {
        if dataset.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDatasetPath(dataset));
        }
        config.dataset = Some(dataset);
    }

    if let Some(query) = parsed.query {
        if let Some(sort) = query.sort {
            config.query.sort = parse_sort(&sort)?;
        }
        if let Some(min_contacts) = query.min_contacts {
            config.query.min_contacts = min_contacts;
        }
        if let Some(require) = query.require_head_of_data {
            config.query.require_head_of_data = require;
        }
    }

    if let Some(export) = parsed.export {
        if let Some(dir) = export.dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidExportDir(dir));
            }
            config.export.dir = Some(dir);
        }
    }

    Ok(config)
}

fn parse_sort(raw: &str) -> Result<Option<SortKey>> {
    let trimmed = raw.trim();
    if trimmed == NO_SORT {
        return Ok(None);
    }
    SortKey::parse(trimmed)
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidSort(raw.to_string()))
}
