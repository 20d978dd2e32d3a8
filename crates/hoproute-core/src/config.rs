//! Optional configuration file for hoproute
//!
//! Looked up from an explicit path, then `$HOPROUTE_CONFIG_DIR/config.toml`,
//! then `<config dir>/hoproute/config.toml`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::format::OutputFormat;
use crate::routing::DEFAULT_UNREACHABLE;

const CONFIG_DIR: &str = "hoproute";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "HOPROUTE_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print the adjacency matrix before routing (human format only)
    pub show_matrix: bool,
    /// Print the per-vertex edge table before routing (human format only)
    pub show_edge_table: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Human,
            show_matrix: true,
            show_edge_table: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Adjacency matrix cell for a missing edge
    pub missing_edge: String,
    /// First-hop cell for an unreachable destination
    pub unreachable: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            missing_edge: "-".to_string(),
            unreachable: DEFAULT_UNREACHABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    pub output: OutputConfig,
    pub display: DisplayConfig,
}

impl RouterConfig {
    /// Default location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `explicit`, or from the default location when `None`.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|e| RouteError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let config = Self::parse(&content).map_err(|e| RouteError::Config {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
