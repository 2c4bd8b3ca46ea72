//! # Configuration
//!
//! Configuration is managed by [`confique`], layered from environment variables
//! and TOML files.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `CLAFAMATT_DEFAULT_NAMESPACE`, `CLAFAMATT_LINEARIZATION`.
//! 2. **Explicit file**: passed with `--config`; must exist.
//! 3. **Project file**: `./.clafamatt.toml`.
//! 4. **Global file**: `config.toml` in the OS config directory (via `directories`).
//! 5. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_namespace` | `default` | Namespace used by `read`/`write` without an explicit one |
//! | `linearization` | `depth-first` | Ancestry order strategy: `depth-first` or `c3` |

use crate::error::{FamilyError, Result};
use crate::host::linearize::Linearization;
use crate::model::Namespace;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILE: &str = ".clafamatt.toml";
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FamiliesConfig {
    /// Namespace used when none is given explicitly.
    #[config(default = "default", env = "CLAFAMATT_DEFAULT_NAMESPACE")]
    pub default_namespace: String,

    /// Ancestry linearization: "depth-first" or "c3".
    #[config(default = "depth-first", env = "CLAFAMATT_LINEARIZATION")]
    pub linearization: Linearization,
}

impl Default for FamiliesConfig {
    fn default() -> Self {
        Self {
            default_namespace: Namespace::DEFAULT.to_string(),
            linearization: Linearization::default(),
        }
    }
}

impl FamiliesConfig {
    /// Load with the standard file locations; `explicit` must exist when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut files = Vec::new();
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(FamilyError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            files.push(path.to_path_buf());
        }
        files.push(PathBuf::from(PROJECT_CONFIG_FILE));
        if let Some(global) = global_config_path() {
            files.push(global);
        }
        Self::load_layered(&files)
    }

    /// Environment first, then `files` in priority order; missing files are skipped.
    pub fn load_layered(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.clone());
        }
        let config = builder.load()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_namespace.trim().is_empty() {
            return Err(FamilyError::InvalidConfig(
                "default_namespace must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn namespace(&self) -> Namespace {
        Namespace::new(self.default_namespace.clone())
    }

    pub fn with_linearization(mut self, strategy: Linearization) -> Self {
        self.linearization = strategy;
        self
    }
}

pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "clafamatt", "clafamatt")
        .map(|dirs| dirs.config_dir().join(GLOBAL_CONFIG_FILE))
}
