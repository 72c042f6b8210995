use std::collections::BTreeMap;
use std::path::Path;

use hoist_util::errors::HoistError;

/// Name of the per-project build properties file.
pub const PROPERTIES_FILE: &str = "hoist.properties";

/// Name of the per-project secrets file.
pub const ENV_FILE: &str = ".hoist.env";

/// Load a `KEY=value` file (`hoist.properties` or `.hoist.env`).
///
/// `hoist.properties` holds non-secret build properties checked into the
/// repository; `.hoist.env` holds secrets (registry credentials, CI tokens)
/// and acts as an override layer for process environment variables.
/// A missing file yields an empty map.
pub fn load_key_values(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(HoistError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}

/// Look up an environment variable, preferring `.hoist.env` overrides.
///
/// Values from the overrides map (populated from `.hoist.env`) shadow the
/// actual process environment.
pub fn env_lookup(var: &str, overrides: &BTreeMap<String, String>) -> Option<String> {
    overrides
        .get(var)
        .cloned()
        .or_else(|| std::env::var(var).ok())
}
