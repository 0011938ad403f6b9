//! Configuration file discovery and parsing.
//!
//! Searches a directory for well-known configuration filenames, falling back
//! to the `release` member of `package.json` and finally to built-in
//! defaults when nothing is found.
use std::{fs, path::Path};

use crate::{
    config::Config,
    error::{RelcheckError, Result},
};

/// Filenames searched, in order, for release configuration.
pub const DEFAULT_CONFIG_FILES: [&str; 5] = [
    ".releaserc",
    ".releaserc.json",
    ".releaserc.toml",
    "release.config.json",
    "release.config.toml",
];

/// Package manifest consulted for an embedded `release` member when no
/// dedicated configuration file exists.
pub const PACKAGE_MANIFEST_FILE: &str = "package.json";

const PACKAGE_RELEASE_KEY: &str = "release";

/// Loads configuration from `dir`, walking [`DEFAULT_CONFIG_FILES`] in
/// order. Returns [`Config::default`] when no configuration exists.
pub fn load(dir: &Path) -> Result<Config> {
    for name in DEFAULT_CONFIG_FILES {
        let path = dir.join(name);

        if path.is_file() {
            log::debug!("loading configuration from {}", path.display());
            return load_file(&path);
        }
    }

    if let Some(config) = load_package_manifest(dir)? {
        return Ok(config);
    }

    log::debug!(
        "no configuration file found in {}: using defaults",
        dir.display()
    );

    Ok(Config::default())
}

/// Parses one explicit configuration file. The format is chosen by
/// extension: `.toml` parses as TOML, everything else as JSON. The original
/// runner also evaluates JavaScript and YAML configuration files; those are
/// rejected with a dedicated error.
pub fn load_file(path: &Path) -> Result<Config> {
    if !path.is_file() {
        return Err(RelcheckError::config_not_found(
            path.display().to_string(),
        ));
    }

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    match extension {
        "js" | "cjs" | "mjs" => Err(RelcheckError::unsupported_format(format!(
            "{}: JavaScript configuration files are not supported, convert to JSON or TOML",
            path.display()
        ))),
        "yaml" | "yml" => Err(RelcheckError::unsupported_format(format!(
            "{}: YAML configuration files are not supported, convert to JSON or TOML",
            path.display()
        ))),
        "toml" => {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        }
        _ => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
    }
}

fn load_package_manifest(dir: &Path) -> Result<Option<Config>> {
    let path = dir.join(PACKAGE_MANIFEST_FILE);

    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let manifest: serde_json::Value = serde_json::from_str(&content)?;

    let Some(release) = manifest.get(PACKAGE_RELEASE_KEY) else {
        return Ok(None);
    };

    log::debug!(
        "loading configuration from the '{}' member of {}",
        PACKAGE_RELEASE_KEY,
        path.display()
    );

    Ok(Some(serde_json::from_value(release.clone())?))
}
