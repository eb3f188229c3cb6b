//! Filesystem locations
//!
//! The data file resolves in order: explicit override, `BCP_DATA_FILE`,
//! then `bcp_data.json` in the current working directory.

use std::path::{Path, PathBuf};

use crate::constants::{data, dirs as layout};

/// Base config directory (~/.bcp)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(layout::CONFIG_DIR_NAME)
}

/// Log directory (~/.bcp/logs)
pub fn logs_dir() -> PathBuf {
    config_dir().join(layout::LOGS_DIR_NAME)
}

/// Resolve the data file from an optional override and the environment
pub fn resolve_data_file(explicit: Option<&Path>) -> PathBuf {
    let from_env = std::env::var_os(data::FILE_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_with(explicit, from_env)
}

fn resolve_with(explicit: Option<&Path>, from_env: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    from_env.unwrap_or_else(|| PathBuf::from(data::DEFAULT_FILE_NAME))
}
