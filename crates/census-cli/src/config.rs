//! Configuration file and setting resolution.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, the TOML config file, and the report variant's built-in defaults.
//! The config file is `--config PATH` when given, otherwise `census.toml` in
//! the platform config directory:
//! - macOS: ~/Library/Application Support/com.census-board.Census-Board/
//! - Windows: %APPDATA%/census-board/Census Board/config/
//! - Linux: ~/.config/censusboard/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use census_model::{Column, ReportVariant, SortKey, SortKeys};
use census_parse::ParserProfile;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "census-board";
const APP_NAME: &str = "Census Board";
const CONFIG_FILENAME: &str = "census.toml";

/// Contents of `census.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CensusConfig {
    pub variant: Option<ReportVariant>,
    pub sort: Option<SortKeys>,
    pub partition_below: Option<f64>,
    /// Keys overriding the variant's parser preset.
    pub parser: Option<toml::Table>,
}

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub variant: Option<ReportVariant>,
    /// Replaces the configured sort list when non-empty.
    pub sort: Vec<SortKey>,
    /// Applied in order after the sort list is chosen.
    pub toggles: Vec<Column>,
    pub partition_below: Option<f64>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub variant: ReportVariant,
    pub keys: SortKeys,
    pub partition_below: Option<f64>,
    pub profile: ParserProfile,
}

/// Path to the implicit config file.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load the config file.
///
/// An explicit path must exist and parse. The implicit default file is
/// optional; when it is missing the built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<CensusConfig> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        return parse_config(&content).with_context(|| format!("parse config {}", path.display()));
    }

    let Some(path) = default_config_path() else {
        tracing::warn!("could not determine config path, using defaults");
        return Ok(CensusConfig::default());
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded config");
            parse_config(&content).with_context(|| format!("parse config {}", path.display()))
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(CensusConfig::default())
        }
        Err(error) => Err(error).with_context(|| format!("read config {}", path.display())),
    }
}

pub fn parse_config(content: &str) -> Result<CensusConfig> {
    Ok(toml::from_str(content)?)
}

impl Settings {
    pub fn resolve(config: &CensusConfig, overrides: &Overrides) -> Result<Self> {
        let variant = overrides
            .variant
            .or(config.variant)
            .unwrap_or_default();

        let mut keys = if overrides.sort.is_empty() {
            config
                .sort
                .clone()
                .unwrap_or_else(|| variant.default_sort_keys())
        } else {
            SortKeys::new(overrides.sort.clone()).context("invalid --sort list")?
        };
        for &column in &overrides.toggles {
            keys.toggle(column);
        }

        let partition_below = overrides.partition_below.or(config.partition_below);
        if let Some(days) = partition_below
            && (!days.is_finite() || days < 0.0)
        {
            return Err(anyhow!(
                "partition threshold must be a non-negative number, got {days}"
            ));
        }

        let profile = resolve_profile(variant, config.parser.as_ref())?;
        Ok(Self {
            variant,
            keys,
            partition_below,
            profile,
        })
    }
}

/// Overlay config keys onto the variant's parser preset.
pub fn resolve_profile(
    variant: ReportVariant,
    overrides: Option<&toml::Table>,
) -> Result<ParserProfile> {
    let preset = ParserProfile::for_variant(variant);
    let Some(overrides) = overrides else {
        return Ok(preset);
    };
    let toml::Value::Table(mut merged) =
        toml::Value::try_from(&preset).context("serialize parser preset")?
    else {
        return Err(anyhow!("parser preset did not serialize to a table"));
    };
    merged.extend(overrides.clone());
    toml::Value::Table(merged)
        .try_into()
        .context("invalid [parser] section")
}
