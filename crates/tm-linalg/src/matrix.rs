use std::fmt;

use crate::error::{LinalgError, Result};
use crate::vector::Vector;

/// A dense square matrix of f64 values.
///
/// Holds contiguous, row-major data with a fixed side length. Decoders
/// populate a matrix in one pass; afterwards it is treated as immutable by
/// convention, with no shared state between instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    dim: usize,
}

impl Matrix {
    /// Create a matrix from row-major data and a side length.
    ///
    /// # Panics
    /// Panics if `data.len() != dim * dim`.
    pub fn from_vec(data: Vec<f64>, dim: usize) -> Self {
        assert_eq!(
            data.len(),
            dim * dim,
            "data length {} does not match a {}x{} matrix",
            data.len(),
            dim,
            dim
        );
        Matrix { data, dim }
    }

    /// Create a zero-filled matrix with the given side length.
    pub fn zeros(dim: usize) -> Self {
        Matrix {
            data: vec![0.0; dim * dim],
            dim,
        }
    }

    /// Create an identity matrix with the given side length.
    pub fn identity(dim: usize) -> Self {
        let mut m = Matrix::zeros(dim);
        for i in 0..dim {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Side length of the matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dim && col < self.dim);
        self.data[row * self.dim + col]
    }

    /// Set the value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(row < self.dim && col < self.dim);
        self.data[row * self.dim + col] = value;
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Matrix-vector multiplication: `y[i] = sum_j self[i, j] * x[j]`.
    ///
    /// Fails when the vector length does not match the matrix side.
    pub fn matvec(&self, x: &Vector) -> Result<Vector> {
        if x.len() != self.dim {
            return Err(LinalgError::DimensionMismatch {
                side: self.dim,
                len: x.len(),
            });
        }

        let mut y = vec![0.0f64; self.dim];
        for (i, out) in y.iter_mut().enumerate() {
            let mut sum = 0.0f64;
            for (a, b) in self.row(i).iter().zip(x.as_slice()) {
                sum += a * b;
            }
            *out = sum;
        }
        Ok(Vector::from_vec(y))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            for col in 0..self.dim {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:8.2}", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(m.dim(), 2);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.get(1, 1), 4.0);
    }

    #[test]
    #[should_panic]
    fn test_from_vec_length_mismatch_panics() {
        let _m = Matrix::from_vec(vec![1.0, 2.0, 3.0], 2);
    }

    #[test]
    fn test_zeros_and_set() {
        let mut m = Matrix::zeros(3);
        assert_eq!(m.data(), &[0.0; 9]);
        m.set(1, 2, 7.5);
        assert_eq!(m.get(1, 2), 7.5);
        assert_eq!(m.row(1), &[0.0, 0.0, 7.5]);
    }

    #[test]
    fn test_matvec() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2);
        let x = Vector::from_vec(vec![5.0, 6.0]);
        let y = m.matvec(&x).unwrap();
        assert_relative_eq!(y.as_slice()[0], 17.0);
        assert_relative_eq!(y.as_slice()[1], 39.0);
    }

    #[test]
    fn test_matvec_identity() {
        let m = Matrix::identity(20);
        let x = Vector::from_vec((0..20).map(|i| i as f64 * 0.5).collect());
        let y = m.matvec(&x).unwrap();
        assert_eq!(y, x);
    }

    #[test]
    fn test_matvec_dimension_mismatch() {
        let m = Matrix::zeros(3);
        let x = Vector::from_vec(vec![1.0, 2.0]);
        let err = m.matvec(&x).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::DimensionMismatch { side: 3, len: 2 }
        ));
    }

    #[test]
    fn test_display_two_decimals() {
        let m = Matrix::from_vec(vec![1.0, 2.5, 3.0, 4.0], 2);
        let rendered = m.to_string();
        assert!(rendered.contains("2.50"));
        assert_eq!(rendered.lines().count(), 2);
    }
}
