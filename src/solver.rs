// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauss-Jordan linear solver over GF(16) with column pivoting.

use crate::error::{Error, Result};
use crate::gf16::GfElement;
use crate::matrix::{GfMatrix, GfVector};

/// The outcome of [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SolveResult {
    /// A unique solution `x` with `A·x = y`.
    Unique(GfVector),
    /// The system is consistent but underdetermined.
    NotUnique,
    /// The system is inconsistent.
    NoSolution,
}

/// Solve `A·x = y` for `A ∈ F₁₆^{m×o}`, `y ∈ F₁₆^m`, via Gauss-Jordan
/// elimination with column pivoting (smallest-index row pivot search).
pub(crate) fn solve(a: &GfMatrix, y: &GfVector) -> Result<SolveResult> {
    let m = a.rows();
    let o = a.cols();
    if y.len() != m {
        return Err(Error::DimensionMismatch("solve: y length must equal A's row count"));
    }

    if o == 0 {
        return Ok(if y.as_slice().iter().all(|&e| e == GfElement::ZERO) {
            SolveResult::Unique(GfVector::zero(0))
        } else {
            SolveResult::NoSolution
        });
    }
    if m == 0 {
        return Ok(SolveResult::NotUnique);
    }

    // Augmented matrix [A | y], one extra column for y.
    let mut aug = GfMatrix::zero(m, o + 1);
    for r in 0..m {
        for c in 0..o {
            aug.set(r, c, a.get(r, c));
        }
        aug.set(r, o, y.get(r));
    }

    let mut pr = 0usize;
    let mut pc = 0usize;
    while pr < m && pc < o {
        let pivot_row = (pr..m).find(|&r| aug.get(r, pc) != GfElement::ZERO);
        let Some(pivot_row) = pivot_row else {
            pc += 1;
            continue;
        };
        if pivot_row != pr {
            swap_rows(&mut aug, pr, pivot_row);
        }

        let inv = aug.get(pr, pc).inverse()?;
        scale_row(&mut aug, pr, inv);

        for q in 0..m {
            if q == pr {
                continue;
            }
            let f = aug.get(q, pc);
            if f != GfElement::ZERO {
                add_scaled_row(&mut aug, q, pr, f);
            }
        }

        pr += 1;
        pc += 1;
    }

    let rank = pr;

    for r in rank..m {
        if aug.get(r, o) != GfElement::ZERO {
            return Ok(SolveResult::NoSolution);
        }
    }

    if rank < o {
        return Ok(SolveResult::NotUnique);
    }

    // rank == o: every column got a pivot row 0..o, in order.
    let mut x = vec![GfElement::ZERO; o];
    for r in (0..o).rev() {
        let mut acc = aug.get(r, o);
        for c in (r + 1)..o {
            acc = acc - aug.get(r, c) * x[c];
        }
        x[r] = acc;
    }

    Ok(SolveResult::Unique(GfVector::from_elements(x)))
}

fn swap_rows(m: &mut GfMatrix, a: usize, b: usize) {
    for c in 0..m.cols() {
        let tmp = m.get(a, c);
        m.set(a, c, m.get(b, c));
        m.set(b, c, tmp);
    }
}

fn scale_row(m: &mut GfMatrix, row: usize, scalar: GfElement) {
    for c in 0..m.cols() {
        let v = m.get(row, c) * scalar;
        m.set(row, c, v);
    }
}

fn add_scaled_row(m: &mut GfMatrix, dst: usize, src: usize, scalar: GfElement) {
    for c in 0..m.cols() {
        let v = m.get(dst, c) - m.get(src, c) * scalar;
        m.set(dst, c, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf(values: &[u8]) -> Vec<GfElement> {
        values.iter().map(|&v| GfElement::new(v)).collect()
    }

    #[test]
    fn unique_solution_matches_scenario() {
        // §8 scenario 5: A = [[1,1],[1,2]], y=[3,5] => x=[1,2].
        let a = GfMatrix::from_row_major(2, 2, gf(&[1, 1, 1, 2])).expect("shape");
        let y = GfVector::from_elements(gf(&[3, 5]));
        let result = solve(&a, &y).expect("solve");
        assert_eq!(result, SolveResult::Unique(GfVector::from_elements(gf(&[1, 2]))));
    }

    #[test]
    fn inconsistent_system_is_no_solution() {
        let a = GfMatrix::from_row_major(2, 1, gf(&[1, 1])).expect("shape");
        let y = GfVector::from_elements(gf(&[1, 2]));
        assert_eq!(solve(&a, &y).expect("solve"), SolveResult::NoSolution);
    }

    #[test]
    fn underdetermined_system_is_not_unique() {
        let a = GfMatrix::from_row_major(1, 2, gf(&[1, 1])).expect("shape");
        let y = GfVector::from_elements(gf(&[1]));
        assert_eq!(solve(&a, &y).expect("solve"), SolveResult::NotUnique);
    }

    #[test]
    fn zero_by_zero_system_has_empty_solution() {
        let a = GfMatrix::zero(0, 0);
        let y = GfVector::zero(0);
        assert_eq!(solve(&a, &y).expect("solve"), SolveResult::Unique(GfVector::zero(0)));
    }

    #[test]
    fn zero_columns_with_nonzero_y_is_no_solution() {
        let a = GfMatrix::zero(2, 0);
        let y = GfVector::from_elements(gf(&[0, 1]));
        assert_eq!(solve(&a, &y).expect("solve"), SolveResult::NoSolution);
    }

    #[test]
    fn zero_rows_with_positive_columns_is_not_unique() {
        let a = GfMatrix::zero(0, 2);
        let y = GfVector::zero(0);
        assert_eq!(solve(&a, &y).expect("solve"), SolveResult::NotUnique);
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let a = GfMatrix::zero(2, 2);
        let y = GfVector::zero(3);
        assert!(matches!(solve(&a, &y), Err(Error::DimensionMismatch(_))));
    }
}
