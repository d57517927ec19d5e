//! Build command: materialise convolution matrices for a filter.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use psfmat_matrix::{
    BuildConfig, Coefficient, ConvMatrix, Psf, build_matrix, build_matrix_set,
};

use crate::cli::BuildArgs;
use crate::config::{self, CoefficientsToml};
use crate::convert::{self, ModeSelection, OutputFormat};
use crate::output::{MatrixReport, to_json};

/// Run the build pipeline.
pub fn run(args: BuildArgs) -> Result<()> {
    let _cmd = info_span!("build").entered();
    // 1. Load project TOML and merge flags
    let config = config::load(args.filter.config.as_deref())?;
    let coefficients = convert::resolve_coefficients(&config, &args.filter)?;
    let n = args.n.or(config.build.n).ok_or_else(|| {
        anyhow::anyhow!("no signal length: set [build].n in config or use --length")
    })?;
    let selection =
        convert::parse_mode_selection(args.mode.as_deref().unwrap_or(&config.build.mode))?;
    let build_cfg = convert::build_config(&config.build, &args.filter)?;
    let format = convert::resolve_format(&config, &args.filter)?;

    // 2. Build and render
    let rendered = match coefficients {
        CoefficientsToml::Integer(c) => render(c, n, selection, &build_cfg, format)?,
        CoefficientsToml::Real(c) => render(c, n, selection, &build_cfg, format)?,
    };

    // 3. Write
    match args.output.or(config.output.path) {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "matrices written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render<T: Coefficient>(
    coeffs: Vec<T>,
    n: usize,
    selection: ModeSelection,
    build_cfg: &BuildConfig,
    format: OutputFormat,
) -> Result<String> {
    let psf = Psf::new(coeffs).context("invalid filter")?;
    info!(k = psf.len(), n, integer = T::IS_INTEGER, "building convolution matrices");

    let matrices: Vec<ConvMatrix<T>> = match selection {
        ModeSelection::All => {
            let set = build_matrix_set(&psf, n, build_cfg).context("failed to build matrix set")?;
            set.check_consistency()
                .context("same/valid rows disagree with full")?;
            let (full, circular, same, valid) = set.into_parts();
            vec![full, circular, same, valid]
        }
        ModeSelection::One(mode) => vec![
            build_matrix(mode, &psf, n, build_cfg)
                .with_context(|| format!("failed to build {mode} matrix"))?,
        ],
    };
    info!(n_matrices = matrices.len(), "matrices built");

    let report = MatrixReport::new(psf.coefficients(), n, &matrices);
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => to_json(&report),
    }
}
