//! # Two-phase simplex for equality constraints
//!
//! [`solve_equal_min`] finds a non-negative `x` minimizing `c·x` subject to
//! `A·x = b`. Phase 1 starts from one artificial variable per row and drives
//! their total to zero; phase 2 then optimizes the real objective from that
//! basis with the artificial columns barred from re-entering.
//!
//! The result is the continuous relaxation. [`minimize_integer`] wraps it in a
//! depth-first branch and bound when an integral `x` is required.

use thiserror::Error;

/// Tolerance for sign and pivot tests.
pub const EPS: f64 = 1e-9;

/// Phase 1 must leave less artificial mass than this, scaled by `1 + Σ|b|`.
const FEASIBILITY_TOL: f64 = 1e-9;

/// A value this close to an integer counts as integral.
const INTEGRALITY_TOL: f64 = 1e-6;

/// Pivots allowed per phase, per row and column of the tableau.
const PIVOTS_PER_DIM: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimplexError {
    /// A column with negative reduced cost has no positive entry to pivot on.
    #[error("unbounded solution")]
    Unbounded,
    /// Phase 1 could not drive the artificial variables to zero.
    #[error("no feasible solution")]
    Infeasible,
    #[error("no optimum after {0} pivots")]
    IterationLimit(usize),
}

/// Working tableau: `m` constraint rows plus the objective row; columns are
/// the `n` variables, `m` artificials and the right-hand side.
struct Tableau {
    rows: Vec<Vec<f64>>,
    basis: Vec<usize>,
    m: usize,
    n: usize,
}

impl Tableau {
    fn phase_one(a: &[Vec<f64>], b: &[f64], n: usize) -> Self {
        let m = a.len();
        let width = n + m + 1;
        let mut rows = mat![0.0; m + 1; width];
        for i in 0..m {
            // the artificial basis needs b >= 0
            let sign = if b[i] < 0.0 { -1.0 } else { 1.0 };
            for j in 0..n {
                rows[i][j] = sign * a[i][j];
            }
            rows[i][n + i] = 1.0;
            rows[i][width - 1] = sign * b[i];
        }
        for j in n..n + m {
            rows[m][j] = 1.0;
        }
        for i in 0..m {
            for j in 0..width {
                rows[m][j] -= rows[i][j];
            }
        }
        Self {
            rows,
            basis: (n..n + m).collect(),
            m,
            n,
        }
    }

    fn last(&self) -> usize {
        self.n + self.m
    }

    fn corner(&self) -> f64 {
        self.rows[self.m][self.last()]
    }

    /// Most negative reduced cost among the first `cols` columns.
    fn entering(&self, cols: usize) -> Option<usize> {
        let obj = &self.rows[self.m];
        let mut best: Option<usize> = None;
        for j in 0..cols {
            if obj[j] < -EPS && best.is_none_or(|b| obj[j] < obj[b]) {
                best = Some(j);
            }
        }
        best
    }

    /// Minimum ratio test; the first row reaching the minimum wins.
    fn leaving(&self, col: usize) -> Option<usize> {
        let last = self.last();
        let mut best: Option<(usize, f64)> = None;
        for i in 0..self.m {
            let e = self.rows[i][col];
            if e > EPS {
                let ratio = self.rows[i][last] / e;
                if best.is_none_or(|(_, r)| ratio < r) {
                    best = Some((i, ratio));
                }
            }
        }
        best.map(|(i, _)| i)
    }

    fn pivot(&mut self, row: usize, col: usize) {
        let p = self.rows[row][col];
        for v in self.rows[row].iter_mut() {
            *v /= p;
        }
        let pivot_row = self.rows[row].clone();
        for (i, r) in self.rows.iter_mut().enumerate() {
            let f = r[col];
            if i == row || f == 0.0 {
                continue;
            }
            for (x, &y) in r.iter_mut().zip(&pivot_row) {
                *x -= f * y;
            }
        }
        self.basis[row] = col;
    }

    /// Pivots until no column below `cols` has a negative reduced cost.
    fn run(&mut self, cols: usize) -> Result<(), SimplexError> {
        let limit = PIVOTS_PER_DIM * (self.m + cols + 1);
        for _ in 0..limit {
            let Some(col) = self.entering(cols) else {
                return Ok(());
            };
            let row = self.leaving(col).ok_or(SimplexError::Unbounded)?;
            self.pivot(row, col);
        }
        Err(SimplexError::IterationLimit(limit))
    }

    /// Artificials left in the basis at level zero would let phase 2 push
    /// them positive; swap them for any original column of their row. Rows
    /// with none are redundant and never change again.
    fn drive_out_artificials(&mut self) {
        for i in 0..self.m {
            if self.basis[i] < self.n {
                continue;
            }
            let row = &self.rows[i];
            let col = (0..self.n)
                .filter(|&j| row[j].abs() > EPS)
                .max_by(|&x, &y| row[x].abs().total_cmp(&row[y].abs()));
            if let Some(col) = col {
                self.pivot(i, col);
            }
        }
    }

    /// Installs `c` as the objective, priced out against the current basis.
    fn set_objective(&mut self, c: &[f64]) {
        let width = self.last() + 1;
        let mut obj = vec![0.0; width];
        obj[..self.n].copy_from_slice(c);
        for i in 0..self.m {
            let bj = self.basis[i];
            if bj < self.n && c[bj] != 0.0 {
                for j in 0..width {
                    obj[j] -= c[bj] * self.rows[i][j];
                }
            }
        }
        self.rows[self.m] = obj;
    }

    fn solution(&self) -> Vec<f64> {
        let last = self.last();
        let mut x = vec![0.0; self.n];
        for (i, &bj) in self.basis.iter().enumerate() {
            if bj < self.n {
                x[bj] = self.rows[i][last];
            }
        }
        x
    }
}

/// Minimizes `c·x` subject to `A·x = b`, `x >= 0`.
///
/// Returns `x` and the optimal objective value. Panics if the dimensions of
/// `a`, `b` and `c` disagree.
pub fn solve_equal_min(
    a: &[Vec<f64>],
    b: &[f64],
    c: &[f64],
) -> Result<(Vec<f64>, f64), SimplexError> {
    let m = a.len();
    let n = c.len();
    assert_eq!(b.len(), m, "one target per constraint row");
    assert!(
        a.iter().all(|row| row.len() == n),
        "every constraint row needs {} coefficients",
        n
    );

    let mut t = Tableau::phase_one(a, b, n);
    t.run(n + m)?;
    let mass: f64 = b.iter().map(|v| v.abs()).sum();
    if -t.corner() > FEASIBILITY_TOL * (1.0 + mass) {
        return Err(SimplexError::Infeasible);
    }
    t.drive_out_artificials();

    t.set_objective(c);
    t.run(n)?;
    Ok((t.solution(), 0.0 - t.corner()))
}

/// Integral variant of [`solve_equal_min`]: branch and bound on the first
/// fractional variable, each branch adding one equality row with a fresh
/// slack column (`xᵢ + s = ⌊xᵢ⌋` or `xᵢ - s = ⌈xᵢ⌉`).
///
/// The returned `x` is rounded; the value is `c·x` for that `x`.
pub fn minimize_integer(
    a: &[Vec<f64>],
    b: &[f64],
    c: &[f64],
) -> Result<(Vec<f64>, f64), SimplexError> {
    let mut best = None;
    branch(a.to_vec(), b.to_vec(), c.to_vec(), c.len(), &mut best)?;
    best.ok_or(SimplexError::Infeasible)
}

fn branch(
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    c: Vec<f64>,
    n: usize,
    best: &mut Option<(Vec<f64>, f64)>,
) -> Result<(), SimplexError> {
    let (x, value) = match solve_equal_min(&a, &b, &c) {
        Ok(sol) => sol,
        Err(SimplexError::Infeasible) => return Ok(()),
        Err(e) => return Err(e),
    };
    if best.as_ref().is_some_and(|(_, v)| value >= v - EPS) {
        return Ok(());
    }
    let fractional = x[..n]
        .iter()
        .position(|&xi| (xi - xi.round()).abs() > INTEGRALITY_TOL);
    let Some(i) = fractional else {
        let x = x[..n].iter().map(|v| v.round()).collect::<Vec<_>>();
        let value = x.iter().zip(&c).map(|(x, c)| x * c).sum();
        *best = Some((x, value));
        return Ok(());
    };

    for (slack, bound) in [(1.0, x[i].floor()), (-1.0, x[i].ceil())] {
        let mut a = a.clone();
        let mut b = b.clone();
        let mut c = c.clone();
        for row in a.iter_mut() {
            row.push(0.0);
        }
        let mut row = vec![0.0; c.len() + 1];
        row[i] = 1.0;
        row[c.len()] = slack;
        a.push(row);
        b.push(bound);
        c.push(0.0);
        branch(a, b, c, n, best)?;
    }
    Ok(())
}
