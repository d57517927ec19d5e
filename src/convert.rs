//! Pure conversion functions: TOML config and CLI strings -> crate API types.

use anyhow::{Context, Result, bail};

use psfmat_matrix::{BuildConfig, ConvMode};

use crate::cli::FilterArgs;
use crate::config::{BuildToml, CoefficientsToml, PsfmatConfig};

/// Which matrices a `build` run produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSelection {
    /// All four, in set order.
    All,
    /// A single mode.
    One(ConvMode),
}

/// How results are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses a mode label, accepting `all` in addition to the four modes.
pub fn parse_mode_selection(s: &str) -> Result<ModeSelection> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(ModeSelection::All);
    }
    let mode = s.parse::<ConvMode>()?;
    Ok(ModeSelection::One(mode))
}

/// Parses an output format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a comma- or whitespace-separated list of numbers.
///
/// All-integer lists stay integers; anything else is read as `f64`.
pub fn parse_values(s: &str) -> Result<CoefficientsToml> {
    let tokens: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        bail!("no values in {s:?}");
    }

    if let Ok(ints) = tokens
        .iter()
        .map(|t| t.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
    {
        return Ok(CoefficientsToml::Integer(ints));
    }

    let reals = tokens
        .iter()
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("invalid number: {t:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CoefficientsToml::Real(reals))
}

/// Builds a [`BuildConfig`] from the TOML build section and CLI overrides.
pub fn build_config(build: &BuildToml, args: &FilterArgs) -> Result<BuildConfig> {
    let config = BuildConfig::new()
        .with_tolerance(args.tolerance.unwrap_or(build.tolerance))
        .with_asymmetric_centering(args.asymmetric_centering || build.asymmetric_centering)
        .with_parallel(args.parallel || build.parallel);
    config.validate()?;
    Ok(config)
}

/// Resolves the filter: the `--psf` flag wins over `[psf].coefficients`.
pub fn resolve_coefficients(config: &PsfmatConfig, args: &FilterArgs) -> Result<CoefficientsToml> {
    if let Some(ref s) = args.psf {
        return parse_values(s).context("failed to parse --psf");
    }
    config
        .psf
        .coefficients
        .clone()
        .ok_or_else(|| anyhow::anyhow!("no filter: set [psf].coefficients in config or use --psf"))
}

/// Resolves the output format: the `--format` flag wins over `[output].format`.
pub fn resolve_format(config: &PsfmatConfig, args: &FilterArgs) -> Result<OutputFormat> {
    parse_format(args.format.as_deref().unwrap_or(&config.output.format))
}
