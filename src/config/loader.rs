//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `--config <FILE>`, or `.cal.toml` in the working directory
//! 4. `~/.config/cal/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_PRECISION, ENV_FORMAT, ENV_ON_INVALID, ENV_PRECISION,
    MAX_PRECISION,
};
use crate::env::Env;
use crate::models::{InvalidInputPolicy, OutputFormat};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value in config file {path}: {message}")]
    InvalidValue { path: PathBuf, message: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub input: InputConfig,
}

/// How results are printed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places of the quotient.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// How operands are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub on_invalid: InvalidInputPolicy,
}

/// One config file as written on disk. Only keys present in the file
/// override the layers below it.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    output: OutputSection,
    input: InputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
    format: Option<OutputFormat>,
    precision: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InputSection {
    on_invalid: Option<InvalidInputPolicy>,
}

/// Values given on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub precision: Option<usize>,
    pub on_invalid: Option<InvalidInputPolicy>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the working-directory `.cal.toml` lookup and
    /// must exist. Environment variables are applied last.
    pub fn load(explicit: Option<&Path>, cwd: &Path, env: &Env) -> Result<Self, ConfigError> {
        let local = match explicit {
            Some(path) => LocalConfig::Required(path.to_path_buf()),
            None => LocalConfig::Optional(cwd.join(CONFIG_FILENAME)),
        };
        Self::load_layers(Self::global_config_path().as_deref(), local, env)
    }

    fn load_layers(
        global: Option<&Path>,
        local: LocalConfig,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global {
            if global_path.exists() {
                config.merge_file(global_path)?;
            }
        }

        // Layer 3: explicit or working-directory config
        match local {
            LocalConfig::Required(path) => config.merge_file(&path)?,
            LocalConfig::Optional(path) => {
                if path.exists() {
                    config.merge_file(&path)?;
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Apply command-line values (layer 1).
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(precision) = overrides.precision {
            self.output.precision = precision;
        }
        if let Some(policy) = overrides.on_invalid {
            self.input.on_invalid = policy;
        }
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Read `path` and overlay every key it sets.
    fn merge_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let file = Self::load_file(path)?;
        debug!(path = %path.display(), "loaded config file");

        if let Some(format) = file.output.format {
            self.output.format = format;
        }
        if let Some(precision) = file.output.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::InvalidValue {
                    path: path.to_path_buf(),
                    message: format!(
                        "output.precision must be at most {MAX_PRECISION}, got {precision}"
                    ),
                });
            }
            self.output.precision = precision;
        }
        if let Some(policy) = file.input.on_invalid {
            self.input.on_invalid = policy;
        }
        Ok(())
    }

    fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply environment variable overrides. Invalid values are ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => warn!("ignoring invalid {ENV_FORMAT} value: {val}"),
            }
        }
        if let Some(val) = env.var(ENV_PRECISION) {
            match val.trim().parse::<usize>() {
                Ok(p) if p <= MAX_PRECISION => self.output.precision = p,
                _ => warn!("ignoring invalid {ENV_PRECISION} value: {val}"),
            }
        }
        if let Some(val) = env.var(ENV_ON_INVALID) {
            match val.parse::<InvalidInputPolicy>() {
                Ok(policy) => self.input.on_invalid = policy,
                Err(_) => warn!("ignoring invalid {ENV_ON_INVALID} value: {val}"),
            }
        }
    }
}

/// Where the layer-3 config file comes from.
enum LocalConfig {
    /// Named with `--config`; missing is an error.
    Required(PathBuf),
    /// The working-directory `.cal.toml`; skipped if absent.
    Optional(PathBuf),
}
