//! Project defaults for resource generation
//!
//! A project can pin its preferred options in a `resgen.toml` (or
//! `resgen.yaml` / `resgen.yml`) at its root, so every `resgen generate`
//! run agrees on transport style, layout and stub suffix without repeating
//! flags.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::options::{ResourceOptions, TransportStyle};

/// File names probed during auto-detection, in priority order
pub const CONFIG_FILE_NAMES: [&str; 3] = ["resgen.toml", "resgen.yaml", "resgen.yml"];

/// Option defaults; every key is optional and mirrors a `ResourceOptions` field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigDefaults {
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub transport_style: Option<TransportStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crud: Option<bool>,
    #[serde(alias = "spec", skip_serializing_if = "Option::is_none")]
    pub generate_test_stubs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<bool>,
    #[serde(alias = "specFileSuffix", skip_serializing_if = "Option::is_none")]
    pub test_stub_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orm_integration_available: Option<bool>,
    #[serde(alias = "isSwaggerInstalled", skip_serializing_if = "Option::is_none")]
    pub validation_decorators_available: Option<bool>,
}

impl ConfigDefaults {
    /// Overlay the configured values onto `options`
    pub fn apply_to(&self, options: &mut ResourceOptions) {
        if let Some(style) = self.transport_style {
            options.transport_style = style;
        }
        if let Some(crud) = self.crud {
            options.crud = crud;
        }
        if let Some(stubs) = self.generate_test_stubs {
            options.generate_test_stubs = stubs;
        }
        if let Some(flat) = self.flat {
            options.flat = flat;
        }
        if let Some(suffix) = &self.test_stub_suffix {
            options.test_stub_suffix = suffix.clone();
        }
        if let Some(orm) = self.orm_integration_available {
            options.orm_integration_available = orm;
        }
        if let Some(validation) = self.validation_decorators_available {
            options.validation_decorators_available = validation;
        }
    }
}

/// Contents of a `resgen.toml` / `resgen.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Option defaults applied before command-line flags
    #[serde(default)]
    pub defaults: ConfigDefaults,
    /// Output directory used when `--output` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl DefaultsConfig {
    /// Options for `name`: built-in defaults overlaid with this config
    pub fn resource_options(&self, name: &str) -> ResourceOptions {
        let mut options = ResourceOptions::new(name);
        self.defaults.apply_to(&mut options);
        options
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load a defaults config file
///
/// The format follows the extension: `.yaml`/`.yml` are YAML, anything
/// else is TOML.
///
/// # Returns
///
/// `Ok(Some(config))` if the file exists and parses,
/// `Ok(None)` if it doesn't exist (not an error),
/// `Err` if it exists but can't be read or parsed.
pub fn load_defaults_config(config_path: &Path) -> anyhow::Result<Option<DefaultsConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read resgen config: {}", config_path.display()))?;

    let config: DefaultsConfig = if is_yaml(config_path) {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse resgen config: {}", config_path.display()))?
    } else {
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse resgen config: {}", config_path.display()))?
    };

    Ok(Some(config))
}

/// Find the first config file present in `dir`
pub fn auto_detect_config_path(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Resolve the config to use and load it
///
/// Priority:
/// 1. Explicitly provided path (via CLI); it must exist
/// 2. Auto-detected in `project_dir`
/// 3. None (built-in defaults)
pub fn resolve_defaults_config(
    explicit_path: Option<&Path>,
    project_dir: &Path,
) -> anyhow::Result<Option<DefaultsConfig>> {
    if let Some(path) = explicit_path {
        if !path.exists() {
            anyhow::bail!("resgen config not found: {}", path.display());
        }
        return load_defaults_config(path);
    }

    match auto_detect_config_path(project_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Auto-detected resgen config");
            load_defaults_config(&path)
        }
        None => Ok(None),
    }
}
