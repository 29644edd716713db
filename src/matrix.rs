// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense vector and matrix algebra over GF(16).
//!
//! Matrices are flat row-major buffers of [`GfElement`] plus a
//! `(rows, cols)` shape; no distinct upper-triangular runtime
//! representation is kept here (the codec mirrors a triangle into a
//! dense matrix once, at decode time).

use crate::error::{Error, Result};
use crate::gf16::GfElement;

/// A fixed-length vector of GF(16) elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct GfVector {
    data: Vec<GfElement>,
}

impl GfVector {
    pub(crate) fn zero(len: usize) -> Self {
        Self {
            data: vec![GfElement::ZERO; len],
        }
    }

    pub(crate) fn from_elements(data: Vec<GfElement>) -> Self {
        Self { data }
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn as_slice(&self) -> &[GfElement] {
        &self.data
    }

    pub(crate) fn get(&self, index: usize) -> GfElement {
        self.data[index]
    }

    /// Element-wise XOR; fails if lengths differ.
    pub(crate) fn sub(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(Error::DimensionMismatch("vec_sub: length mismatch"));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        })
    }

    /// Dot product; empty vectors dot to zero.
    pub(crate) fn dot(&self, other: &Self) -> Result<GfElement> {
        if self.len() != other.len() {
            return Err(Error::DimensionMismatch("dot: length mismatch"));
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(GfElement::ZERO, |acc, (&a, &b)| acc + a * b))
    }

    /// Concatenate two vectors.
    pub(crate) fn concat(&self, other: &Self) -> Self {
        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Self { data }
    }
}

/// A dense, row-major `rows x cols` matrix of GF(16) elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GfMatrix {
    rows: usize,
    cols: usize,
    data: Vec<GfElement>,
}

impl GfMatrix {
    pub(crate) fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![GfElement::ZERO; rows * cols],
        }
    }

    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<GfElement>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DimensionMismatch(
                "from_row_major: data length does not match rows*cols",
            ));
        }
        Ok(Self { rows, cols, data })
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub(crate) fn get(&self, r: usize, c: usize) -> GfElement {
        self.data[r * self.cols + c]
    }

    #[inline]
    pub(crate) fn set(&mut self, r: usize, c: usize, value: GfElement) {
        self.data[r * self.cols + c] = value;
    }

    /// Element-wise XOR; fails `DimensionMismatch` if shapes differ.
    pub(crate) fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::DimensionMismatch("add: shape mismatch"));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Element-wise XOR; identical to [`GfMatrix::add`] in characteristic
    /// 2, kept as its own named operation.
    pub(crate) fn sub(&self, other: &Self) -> Result<Self> {
        self.add(other)
    }

    /// Multiply every entry by `scalar`.
    pub(crate) fn scalar_mul(&self, scalar: GfElement) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&a| a * scalar).collect(),
        }
    }

    /// Standard matrix product `self * rhs`.
    pub(crate) fn mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch(
                "mul: left cols must equal right rows",
            ));
        }
        let mut out = Self::zero(self.rows, rhs.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a_ik = self.get(i, k);
                if a_ik == GfElement::ZERO {
                    continue;
                }
                for j in 0..rhs.cols {
                    let acc = out.get(i, j) + a_ik * rhs.get(k, j);
                    out.set(i, j, acc);
                }
            }
        }
        Ok(out)
    }

    pub(crate) fn transpose(&self) -> Self {
        let mut out = Self::zero(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.set(c, r, self.get(r, c));
            }
        }
        out
    }

    /// `self * v`, treating `v` as a column vector.
    pub(crate) fn mat_vec(&self, v: &GfVector) -> Result<GfVector> {
        if self.cols != v.len() {
            return Err(Error::DimensionMismatch(
                "mat_vec: matrix cols must equal vector length",
            ));
        }
        let mut out = GfVector::zero(self.rows);
        for r in 0..self.rows {
            let mut acc = GfElement::ZERO;
            for c in 0..self.cols {
                acc = acc + self.get(r, c) * v.get(c);
            }
            out.data[r] = acc;
        }
        Ok(out)
    }

    /// `v^t * self`, returning a row vector.
    pub(crate) fn vec_mat(v: &GfVector, m: &Self) -> Result<GfVector> {
        if v.len() != m.rows {
            return Err(Error::DimensionMismatch(
                "vec_mat: vector length must equal matrix rows",
            ));
        }
        let mut out = GfVector::zero(m.cols);
        for c in 0..m.cols {
            let mut acc = GfElement::ZERO;
            for r in 0..m.rows {
                acc = acc + v.get(r) * m.get(r, c);
            }
            out.data[c] = acc;
        }
        Ok(out)
    }

    /// Mirror a matrix that is populated only on and above the
    /// diagonal (strictly-lower entries zero) into a full symmetric
    /// matrix, copying each upper entry (including the diagonal) to
    /// its transposed position.
    pub(crate) fn mirror_upper(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(Error::DimensionMismatch("mirror_upper: matrix must be square"));
        }
        let mut out = self.clone();
        for r in 0..self.rows {
            for c in (r + 1)..self.cols {
                out.set(c, r, self.get(r, c));
            }
        }
        Ok(out)
    }

    /// `self + self^t`; requires a square matrix.
    pub(crate) fn symmetrize(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(Error::DimensionMismatch("symmetrize: matrix must be square"));
        }
        self.add(&self.transpose())
    }

    /// Fold a (possibly non-symmetric) square matrix into the
    /// symmetric upper-triangular convention used for `P3` on disk:
    /// diagonal entries are kept as-is, and each off-diagonal pair
    /// `(r, c)`/`(c, r)` is combined into a single entry `a[r,c] + a[c,r]`
    /// stored (and mirrored) at both positions.
    pub(crate) fn symmetrize_upper_fold(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(Error::DimensionMismatch(
                "symmetrize_upper_fold: matrix must be square",
            ));
        }
        let mut out = Self::zero(self.rows, self.cols);
        for r in 0..self.rows {
            out.set(r, r, self.get(r, r));
            for c in (r + 1)..self.cols {
                let folded = self.get(r, c) + self.get(c, r);
                out.set(r, c, folded);
                out.set(c, r, folded);
            }
        }
        Ok(out)
    }
}
