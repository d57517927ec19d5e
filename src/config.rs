use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level psfmat configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PsfmatConfig {
    /// Filter settings.
    #[serde(default)]
    pub psf: PsfToml,

    /// Matrix build settings.
    #[serde(default)]
    pub build: BuildToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PsfToml {
    #[serde(default)]
    pub coefficients: Option<CoefficientsToml>,
}

/// Filter or signal values; an all-integer list selects the integer rounding contract.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoefficientsToml {
    Integer(Vec<i64>),
    Real(Vec<f64>),
}

impl CoefficientsToml {
    /// Widens integer values to `f64`.
    pub fn to_real(&self) -> Vec<f64> {
        match self {
            Self::Integer(v) => v.iter().map(|&x| x as f64).collect(),
            Self::Real(v) => v.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildToml {
    #[serde(default)]
    pub n: Option<usize>,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub asymmetric_centering: bool,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for BuildToml {
    fn default() -> Self {
        Self {
            n: None,
            mode: default_mode(),
            tolerance: default_tolerance(),
            asymmetric_centering: false,
            parallel: false,
        }
    }
}

fn default_mode() -> String {
    "all".to_string()
}
fn default_tolerance() -> f64 {
    1e-6
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Reads the TOML file at `path`, or returns the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<PsfmatConfig> {
    let Some(path) = path else {
        return Ok(PsfmatConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
