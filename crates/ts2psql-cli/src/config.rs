//! Configuration file and command-line overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use ts2psql_core::ErrorPolicy;
use ts2psql_core::metadata::lowercase_keys;
use ts2psql_core::scanner::DEFAULT_TAG;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./ts2psqlconfig.json";

/// Output path when neither the config file nor the command line names one
pub const DEFAULT_OUT_FILE: &str = "./schema.sql";

/// Contents of a `ts2psqlconfig.json` file
///
/// Keys are matched case-insensitively, so `outFile`, `OutFile` and `outfile`
/// all name the output path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob patterns selecting input files
    pub include: Vec<String>,
    /// A single input file; takes precedence over `include`
    pub file: Option<PathBuf>,
    /// Destination of the generated script
    #[serde(rename = "outfile")]
    pub out_file: Option<PathBuf>,
    pub verbose: bool,
    /// Fail instead of writing markers for unknown types and foreign keys
    pub strict: bool,
    /// Annotation tag, `ts2psql` by default
    pub tag: Option<String>,
}

impl Config {
    /// Read a config file. Returns `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file: {}", path.display()));
            }
        };

        let config = Self::parse(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(Some(config))
    }

    /// Parse config file text
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        serde_json::from_value(lowercase_keys(value))
    }
}

/// Values given on the command line; each one replaces the config file's
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub inputs: Vec<PathBuf>,
    pub include: Vec<String>,
    pub out_file: Option<PathBuf>,
    pub verbose: bool,
    pub strict: bool,
    pub tag: Option<String>,
}

/// Where the run's inputs come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    /// Explicit paths, used as given
    Files(Vec<PathBuf>),
    /// Glob patterns, expanded by discovery
    Globs(Vec<String>),
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inputs: InputSelection,
    pub out_file: PathBuf,
    pub verbose: bool,
    pub policy: ErrorPolicy,
    pub tag: String,
}

impl Settings {
    /// Merge the config file with command-line overrides.
    ///
    /// Inputs are chosen in order: positional paths, `--include`, the config's
    /// `file`, the config's `include`.
    pub fn resolve(config: Config, overrides: Overrides) -> Self {
        let config_file = config.file.filter(|f| !f.as_os_str().is_empty());

        let inputs = if !overrides.inputs.is_empty() {
            InputSelection::Files(overrides.inputs)
        } else if !overrides.include.is_empty() {
            InputSelection::Globs(overrides.include)
        } else if let Some(file) = config_file {
            InputSelection::Files(vec![file])
        } else {
            InputSelection::Globs(config.include)
        };

        let out_file = overrides
            .out_file
            .or(config.out_file)
            .filter(|f| !f.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE));

        let tag = overrides
            .tag
            .or(config.tag)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TAG.to_string());

        Self {
            inputs,
            out_file,
            verbose: overrides.verbose || config.verbose,
            policy: ErrorPolicy::from_strict(overrides.strict || config.strict),
            tag,
        }
    }
}
