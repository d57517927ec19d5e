//! Apply command: multiply a signal by a convolution matrix.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use psfmat_matrix::{BuildConfig, Coefficient, ConvMode, Psf, build_matrix};

use crate::cli::ApplyArgs;
use crate::config::{self, CoefficientsToml};
use crate::convert::{self, OutputFormat};
use crate::output::{ApplyReport, to_json};

/// Run the apply pipeline.
pub fn run(args: ApplyArgs) -> Result<()> {
    let _cmd = info_span!("apply").entered();
    let config = config::load(args.filter.config.as_deref())?;
    let coefficients = convert::resolve_coefficients(&config, &args.filter)?;
    let signal = convert::parse_values(&args.signal).context("failed to parse --signal")?;
    let mode: ConvMode = args.mode.parse()?;
    let build_cfg = convert::build_config(&config.build, &args.filter)?;
    let format = convert::resolve_format(&config, &args.filter)?;

    // Integer arithmetic only when both sides are integers
    let rendered = match (coefficients, signal) {
        (CoefficientsToml::Integer(h), CoefficientsToml::Integer(x)) => {
            apply(h, x, mode, &build_cfg, format)?
        }
        (h, x) => apply(h.to_real(), x.to_real(), mode, &build_cfg, format)?,
    };
    print!("{rendered}");
    Ok(())
}

fn apply<T: Coefficient>(
    coeffs: Vec<T>,
    signal: Vec<T>,
    mode: ConvMode,
    build_cfg: &BuildConfig,
    format: OutputFormat,
) -> Result<String> {
    let psf = Psf::new(coeffs).context("invalid filter")?;
    let matrix = build_matrix(mode, &psf, signal.len(), build_cfg)
        .with_context(|| format!("failed to build {mode} matrix"))?;
    let output = matrix.apply(&signal)?;
    debug!(%mode, rows = output.len(), "signal applied");

    let report = ApplyReport {
        mode,
        filter: psf.coefficients(),
        signal: &signal,
        output,
    };
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => to_json(&report),
    }
}
