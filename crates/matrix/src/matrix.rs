//! Dense convolution matrix and operator materialisation.

use std::fmt;

use ndarray::{Array2, ArrayView1, s};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::coefficient::{Coefficient, Unsettled};
use crate::error::MatrixError;
use crate::mode::ConvMode;

/// A dense convolution matrix tagged with the boundary convention it encodes.
///
/// The matrix has one column per input sample; multiplying it by a signal of
/// that length yields the convolution in its mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvMatrix<T> {
    mode: ConvMode,
    data: Array2<T>,
}

impl<T: Coefficient> ConvMatrix<T> {
    /// Creates a new `ConvMatrix` (crate-internal constructor).
    pub(crate) fn new(mode: ConvMode, data: Array2<T>) -> Self {
        Self { mode, data }
    }

    /// Returns the boundary convention.
    pub fn mode(&self) -> ConvMode {
        self.mode
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Returns the number of rows (output samples).
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Returns the number of columns (input samples).
    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    /// Returns the entry at 0-based `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.data.get((row, col)).copied()
    }

    /// Returns row `row`, or `None` if out of range.
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, T>> {
        (row < self.n_rows()).then(|| self.data.row(row))
    }

    /// Returns the underlying array.
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    /// Consumes the matrix and returns the underlying array.
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Returns the entries as a row-major nested `Vec`.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.rows().into_iter().map(|r| r.to_vec()).collect()
    }

    /// Multiplies the matrix by `x`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`MatrixError::DimensionMismatch`] | `x.len() != n_cols()` |
    /// | [`MatrixError::Overflow`] | an integer product or partial sum leaves the range of `T` |
    pub fn apply(&self, x: &[T]) -> Result<Vec<T>, MatrixError> {
        if x.len() != self.n_cols() {
            return Err(MatrixError::DimensionMismatch {
                expected: self.n_cols(),
                got: x.len(),
            });
        }
        self.data
            .rows()
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .zip(x.iter())
                    .try_fold(T::ZERO, |acc, (&a, &b)| {
                        a.checked_mul(b).and_then(|p| acc.checked_add(p))
                    })
                    .ok_or(MatrixError::Overflow { row })
            })
            .collect()
    }

    /// Copies rows `start..end` into a new matrix of mode `mode`.
    pub(crate) fn slice_rows(
        &self,
        mode: ConvMode,
        start: usize,
        end: usize,
    ) -> Result<ConvMatrix<T>, MatrixError> {
        let rows = self.n_rows();
        if start > end || end > rows {
            return Err(MatrixError::SliceOutOfRange { start, end, rows });
        }
        Ok(ConvMatrix::new(
            mode,
            self.data.slice(s![start..end, ..]).to_owned(),
        ))
    }
}

/// Evaluates a linear operator on every standard basis vector of length
/// `n_in` and stores result `j` as column `j` of an `n_out × n_in` matrix.
///
/// Each entry is settled onto `T` under `tolerance`, which the builders
/// scale to the filter magnitude (see [`Psf::residual_bound`]).
///
/// [`Psf::residual_bound`]: crate::Psf::residual_bound
pub(crate) fn materialize<T, F>(
    mode: ConvMode,
    n_in: usize,
    n_out: usize,
    tolerance: f64,
    mut operator: F,
) -> Result<ConvMatrix<T>, MatrixError>
where
    T: Coefficient,
    F: FnMut(&[f64]) -> Result<Vec<f64>, MatrixError>,
{
    let mut data = Array2::from_elem((n_out, n_in), T::ZERO);
    let mut basis = vec![0.0; n_in];

    for col in 0..n_in {
        basis[col] = 1.0;
        let column = operator(&basis)?;
        basis[col] = 0.0;

        if column.len() != n_out {
            return Err(MatrixError::DimensionMismatch {
                expected: n_out,
                got: column.len(),
            });
        }
        for (row, &value) in column.iter().enumerate() {
            data[[row, col]] = T::settle(value, tolerance).map_err(|cause| match cause {
                Unsettled::Residual => MatrixError::RoundingResidual {
                    row,
                    col,
                    value,
                    tolerance,
                },
                Unsettled::OutOfRange => MatrixError::EntryOutOfRange { row, col, value },
            })?;
        }
    }

    Ok(ConvMatrix::new(mode, data))
}

impl<T: Coefficient> fmt::Display for ConvMatrix<T> {
    /// Renders a right-aligned table, one matrix row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .data
            .rows()
            .into_iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect();
        let width = cells
            .iter()
            .flatten()
            .map(|c| c.len())
            .max()
            .unwrap_or(0);

        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
        }
        Ok(())
    }
}

impl<T: Coefficient> Serialize for ConvMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ConvMatrix", 4)?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("rows", &self.n_rows())?;
        state.serialize_field("cols", &self.n_cols())?;
        state.serialize_field("data", &self.to_rows())?;
        state.end()
    }
}
