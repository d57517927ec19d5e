//! Report structures and their text/JSON rendering.

use anyhow::{Context, Result};
use serde::Serialize;

use psfmat_matrix::{Coefficient, ConvMatrix, ConvMode};

/// Matrices built for one filter and signal length.
#[derive(Debug, Serialize)]
pub struct MatrixReport<'a, T: Coefficient> {
    pub filter: &'a [T],
    pub signal_len: usize,
    pub integer: bool,
    pub matrices: &'a [ConvMatrix<T>],
}

impl<'a, T: Coefficient> MatrixReport<'a, T> {
    pub fn new(filter: &'a [T], signal_len: usize, matrices: &'a [ConvMatrix<T>]) -> Self {
        Self {
            filter,
            signal_len,
            integer: T::IS_INTEGER,
            matrices,
        }
    }

    /// Renders each matrix under a `mode (rows x cols)` heading.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, matrix) in self.matrices.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let (rows, cols) = matrix.shape();
            out.push_str(&format!("{} ({rows} x {cols})\n{matrix}\n", matrix.mode()));
        }
        out
    }
}

/// A signal multiplied by one convolution matrix.
#[derive(Debug, Serialize)]
pub struct ApplyReport<'a, T: Coefficient> {
    pub mode: ConvMode,
    pub filter: &'a [T],
    pub signal: &'a [T],
    pub output: Vec<T>,
}

impl<T: Coefficient> ApplyReport<'_, T> {
    pub fn to_text(&self) -> String {
        format!(
            "mode: {}\nfilter: {:?}\nsignal: {:?}\noutput: {:?}\n",
            self.mode, self.filter, self.signal, self.output
        )
    }
}

/// Serialize a report to a pretty JSON string.
pub fn to_json<S: Serialize>(report: &S) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    json.push('\n');
    Ok(json)
}
