//! Configuration loading and data path resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Resolve the SQLite database path following the priority order:
/// 1. Command-line argument (highest priority)
/// 2. AWARDS_DATABASE environment variable
/// 3. `database` key in the TOML config file
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_database_path(cli_arg: Option<&str>) -> PathBuf {
    resolve_path(cli_arg, "AWARDS_DATABASE", "database")
        .unwrap_or_else(default_database_path)
}

/// Resolve the nomination CSV path with the same priority order as
/// [`resolve_database_path`], using AWARDS_MOVIE_CSV / the `movie_csv`
/// config key. Falls back to `documents/movielist.csv` relative to the
/// working directory.
pub fn resolve_movie_csv_path(cli_arg: Option<&str>) -> PathBuf {
    resolve_path(cli_arg, "AWARDS_MOVIE_CSV", "movie_csv")
        .unwrap_or_else(|| PathBuf::from("documents/movielist.csv"))
}

fn resolve_path(
    cli_arg: Option<&str>,
    env_var_name: &str,
    config_file_key: &str,
) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return Some(PathBuf::from(path));
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(path) = config.get(config_file_key).and_then(|v| v.as_str()) {
                    return Some(PathBuf::from(path));
                }
            }
        }
    }

    None
}

/// Get the configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/awards/config.toml first, then /etc/awards/config.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("awards").join("config.toml")) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/awards/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("awards").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

/// OS-dependent default database location
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("awards"))
        .unwrap_or_else(|| PathBuf::from("/var/lib/awards"))
        .join("awards.db")
}
