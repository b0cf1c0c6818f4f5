//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lockin/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::Prompts;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LockinConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub prompts: PromptConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog: Option<String>,
    pub columns: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PromptConfig {
    pub open: Option<String>,
    pub locked: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Catalog file to load. None = built-in roster.
    pub catalog_path: Option<PathBuf>,
    /// Fixed grid column count. None = fit to terminal width.
    pub columns: Option<u16>,
    pub prompts: Prompts,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub catalog: Option<&'a Path>,
    pub columns: Option<u16>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lockin/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lockin").join("config.toml"))
}

/// Load config from `~/.lockin/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LockinConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LockinConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LockinConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LockinConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<LockinConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Lockin Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog = "roster.toml"            # Or set LOCKIN_CATALOG; omit for the built-in roster
# columns = 6                        # Or set LOCKIN_COLUMNS; omit to fit the terminal width

# [prompts]
# open = "Choose your character"
# locked = "Locked in! Rule out the rest"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LockinConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &LockinConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config → built-in
    let catalog_path = cli
        .catalog
        .map(Path::to_path_buf)
        .or_else(|| env("LOCKIN_CATALOG").map(PathBuf::from))
        .or_else(|| config.general.catalog.as_ref().map(PathBuf::from));

    // Columns: CLI → env → config → auto. Zero means auto.
    let columns = cli
        .columns
        .or_else(|| {
            env("LOCKIN_COLUMNS").and_then(|raw| match raw.trim().parse::<u16>() {
                Ok(n) => Some(n),
                Err(e) => {
                    warn!("Ignoring LOCKIN_COLUMNS={:?}: {}", raw, e);
                    None
                }
            })
        })
        .or(config.general.columns)
        .filter(|&n| n > 0);

    let defaults = Prompts::default();
    let prompts = Prompts {
        open: config.prompts.open.clone().unwrap_or(defaults.open),
        locked: config.prompts.locked.clone().unwrap_or(defaults.locked),
    };

    ResolvedConfig {
        catalog_path,
        columns,
        prompts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{DEFAULT_LOCKED_PROMPT, DEFAULT_OPEN_PROMPT};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = LockinConfig::default();
        assert!(config.general.catalog.is_none());
        assert!(config.prompts.open.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&LockinConfig::default(), &CliOverrides::default(), no_env);
        assert!(resolved.catalog_path.is_none());
        assert!(resolved.columns.is_none());
        assert_eq!(resolved.prompts.open, DEFAULT_OPEN_PROMPT);
        assert_eq!(resolved.prompts.locked, DEFAULT_LOCKED_PROMPT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = parse_config(
            r#"
[general]
catalog = "roster.toml"
columns = 4

[prompts]
open = "Pick one"
"#,
        )
        .unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("roster.toml")));
        assert_eq!(resolved.columns, Some(4));
        assert_eq!(resolved.prompts.open, "Pick one");
        assert_eq!(resolved.prompts.locked, DEFAULT_LOCKED_PROMPT);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = parse_config("[general]\ncatalog = \"file.toml\"\ncolumns = 3\n").unwrap();
        let env = |key: &str| match key {
            "LOCKIN_CATALOG" => Some("env.toml".to_string()),
            "LOCKIN_COLUMNS" => Some("5".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("env.toml")));
        assert_eq!(resolved.columns, Some(5));

        let cli = CliOverrides {
            catalog: Some(Path::new("cli.toml")),
            columns: Some(8),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("cli.toml")));
        assert_eq!(resolved.columns, Some(8));
    }

    #[test]
    fn test_bad_env_columns_falls_through_to_config() {
        let config = parse_config("[general]\ncolumns = 3\n").unwrap();
        let env = |key: &str| (key == "LOCKIN_COLUMNS").then(|| "lots".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.columns, Some(3));
    }

    #[test]
    fn test_zero_columns_means_auto() {
        let cli = CliOverrides {
            catalog: None,
            columns: Some(0),
        };
        let resolved = resolve_with_env(&LockinConfig::default(), &cli, no_env);
        assert!(resolved.columns.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\ncolumns = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
