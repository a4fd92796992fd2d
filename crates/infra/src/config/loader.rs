//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Reads the file named by `UOACAL_CONFIG`, or the first probed config file
//! 2. Falls back to built-in defaults when no file exists
//! 3. Applies environment variable overrides on top
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `UOACAL_CONFIG`: Explicit config file path
//! - `UOACAL_BIND_ADDRESS`: Listener address (`host:port`)
//! - `UOACAL_DB_PATH`: Database file path (empty selects the in-memory store)
//! - `UOACAL_DB_POOL_SIZE`: Connection pool size
//! - `UOACAL_CLIENT_ID`: Cognito app client id
//! - `UOACAL_REDIRECT_URI`: Cognito redirect URI
//! - `UOACAL_AUTHORIZE_URL`: Cognito authorize endpoint
//! - `UOACAL_TOKEN_URL`: Cognito token endpoint
//! - `UOACAL_CALENDAR_URL`: Timetable endpoint
//! - `UOACAL_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `UOACAL_HTTP_MAX_ATTEMPTS`: Attempts per request (1 disables retries)
//! - `UOACAL_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json` (current working directory)
//! 2. `./uoacal.toml` or `./uoacal.json` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use uoacal_domain::{Config, Result, UoaCalError};

/// Environment variable holding an explicit config file path.
pub const CONFIG_PATH_VAR: &str = "UOACAL_CONFIG";

const FILE_NAMES: [&str; 4] = ["config.toml", "config.json", "uoacal.toml", "uoacal.json"];

/// Load configuration: file (or defaults), then environment overrides.
///
/// # Errors
/// Returns `UoaCalError::Config` if:
/// - `UOACAL_CONFIG` names a file that does not exist
/// - The file format is unsupported or invalid
/// - An override variable has an unparsable value
pub fn load() -> Result<Config> {
    let explicit = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);

    let mut config = match explicit.or_else(probe_config_paths) {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension). Missing
/// sections and fields keep their defaults.
///
/// # Errors
/// Returns `UoaCalError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(UoaCalError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            UoaCalError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| UoaCalError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| UoaCalError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| UoaCalError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(UoaCalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join("..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Apply `UOACAL_*` overrides from the process environment.
///
/// # Errors
/// Returns `UoaCalError::Config` for unparsable numeric values.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary key lookup.
///
/// Unset keys leave the current value untouched.
///
/// # Errors
/// Returns `UoaCalError::Config` for unparsable numeric values.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let strings: [(&str, &mut String); 7] = [
        ("UOACAL_BIND_ADDRESS", &mut config.server.bind_address),
        ("UOACAL_DB_PATH", &mut config.database.path),
        ("UOACAL_CLIENT_ID", &mut config.identity.client_id),
        ("UOACAL_REDIRECT_URI", &mut config.identity.redirect_uri),
        ("UOACAL_AUTHORIZE_URL", &mut config.identity.authorize_url),
        ("UOACAL_TOKEN_URL", &mut config.identity.token_url),
        ("UOACAL_CALENDAR_URL", &mut config.timetable.calendar_url),
    ];
    for (key, slot) in strings {
        if let Some(value) = lookup(key) {
            *slot = value;
        }
    }

    if let Some(value) = lookup("UOACAL_DB_POOL_SIZE") {
        config.database.pool_size = parse_number("UOACAL_DB_POOL_SIZE", &value)?;
    }
    if let Some(value) = lookup("UOACAL_HTTP_TIMEOUT_SECS") {
        config.http.timeout_seconds = parse_number("UOACAL_HTTP_TIMEOUT_SECS", &value)?;
    }
    if let Some(value) = lookup("UOACAL_HTTP_MAX_ATTEMPTS") {
        config.http.max_attempts = parse_number("UOACAL_HTTP_MAX_ATTEMPTS", &value)?;
    }
    if let Some(value) = lookup("UOACAL_LOG_JSON") {
        config.logging.json = parse_bool(&value);
    }

    Ok(())
}

fn parse_number<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| UoaCalError::Config(format!("Invalid {key}: {e}")))
}

/// Parse a boolean flag
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Anything else is `false`.
fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
