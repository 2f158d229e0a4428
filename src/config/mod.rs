use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod check; // use submodule at src/config/check.rs

/// Longest name a deployment may allow.
pub const MAX_NAME_CHARS_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub workbook: String,
    #[serde(default = "default_sheet")]
    pub sheet: String,
    #[serde(default = "default_header")]
    pub header: Vec<String>,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_max_name_chars")]
    pub max_name_chars: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
}

pub(crate) fn default_sheet() -> String {
    "milk".to_string()
}
pub(crate) fn default_header() -> Vec<String> {
    vec!["name".to_string(), "timestamp".to_string()]
}
pub(crate) fn default_cache_ttl() -> u64 {
    60
}
pub(crate) fn default_max_name_chars() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        let wb_path = Self::workbook_file();
        Self {
            workbook: wb_path.to_string_lossy().to_string(),
            sheet: default_sheet(),
            header: default_header(),
            cache_ttl_secs: default_cache_ttl(),
            max_name_chars: default_max_name_chars(),
            admin_password: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("milklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".milklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("milklog.conf")
    }

    /// Return the full path of the default SQLite workbook
    pub fn workbook_file() -> PathBuf {
        Self::config_dir().join("milklog.sqlite")
    }

    /// Load configuration from the standard location.
    ///
    /// A missing file is `ConfigurationMissing` unless the caller supplies a
    /// workbook override, in which case defaults are used around it.
    pub fn load(workbook_override: Option<&str>) -> AppResult<Self> {
        Self::load_from(&Self::config_file(), workbook_override)
    }

    pub fn load_from(path: &Path, workbook_override: Option<&str>) -> AppResult<Self> {
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
            serde_yaml::from_str::<Config>(&content)
                .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?
        } else if workbook_override.is_some() {
            Config::default()
        } else {
            return Err(AppError::ConfigurationMissing);
        };

        if let Some(wb) = workbook_override {
            cfg.workbook = crate::utils::path::expand_tilde(wb)
                .to_string_lossy()
                .to_string();
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the store cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.workbook.trim().is_empty() {
            return Err(AppError::ConfigurationMissing);
        }
        if self.sheet.trim().is_empty() {
            return Err(AppError::Config("`sheet` must not be empty".into()));
        }
        if self.header.len() < 2 {
            return Err(AppError::Config(
                "`header` needs at least two columns (name, timestamp)".into(),
            ));
        }
        if self.max_name_chars == 0 || self.max_name_chars > MAX_NAME_CHARS_LIMIT {
            return Err(AppError::Config(format!(
                "`max_name_chars` must be between 1 and {MAX_NAME_CHARS_LIMIT}"
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and workbook files.
    /// Returns the configuration that was written (or would have been, in
    /// test mode).
    pub fn init_all(
        custom_name: Option<String>,
        custom_sheet: Option<String>,
        is_test: bool,
    ) -> AppResult<Config> {
        let dir = Self::config_dir();

        // Workbook: user provided (relative to the working directory, like
        // every other command resolves --workbook) or default
        let wb_path = if let Some(name) = custom_name {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() {
                p
            } else {
                env::current_dir()?.join(p)
            }
        } else {
            dir.join("milklog.sqlite")
        };

        if let Some(parent) = wb_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            workbook: wb_path.to_string_lossy().to_string(),
            sheet: custom_sheet.unwrap_or_else(default_sheet),
            ..Config::default()
        };
        config.validate()?;

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !wb_path.exists() {
            fs::File::create(&wb_path).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot create {}: {e}", wb_path.display()))
            })?;
        }

        Ok(config)
    }
}
