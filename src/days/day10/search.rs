use num::integer::{gcd, lcm};

use super::Machine;
use crate::SetMinMax;

/// Augmented integer matrix in row echelon form: `rows[r][pivots[r]]` is the
/// leading positive entry of row `r`, the last column is the target.
struct Echelon {
    rows: Vec<Vec<i64>>,
    pivots: Vec<usize>,
}

fn normalize(row: &mut [i64]) {
    let g = row.iter().fold(0, |g, &v| gcd(g, v));
    if g > 1 {
        for v in row.iter_mut() {
            *v /= g;
        }
    }
}

/// Eliminates column `col` from `row` using `pivot`, scaling both to the lcm
/// of their leading entries so everything stays integral.
fn reduce(row: &mut [i64], pivot: &[i64], col: usize) {
    if row[col] == 0 {
        return;
    }
    if row[col] < 0 {
        row.iter_mut().for_each(|v| *v = -*v);
    }
    let l = lcm(row[col], pivot[col]);
    let (sr, sp) = (l / row[col], l / pivot[col]);
    for (v, p) in row.iter_mut().zip(pivot) {
        *v = *v * sr - p * sp;
    }
    normalize(row);
}

/// Returns `None` when some all-zero row still has a non-zero target.
fn echelon(mut rows: Vec<Vec<i64>>, n: usize) -> Option<Echelon> {
    let mut pivots = vec![];
    for col in 0..n {
        let rank = pivots.len();
        let Some(r) = (rank..rows.len()).find(|&r| rows[r][col] != 0) else {
            continue;
        };
        rows.swap(rank, r);
        if rows[rank][col] < 0 {
            rows[rank].iter_mut().for_each(|v| *v = -*v);
        }
        normalize(&mut rows[rank]);
        let (top, rest) = rows.split_at_mut(rank + 1);
        for row in rest {
            reduce(row, &top[rank], col);
        }
        pivots.push(col);
    }
    if rows[pivots.len()..].iter().any(|row| row[n] != 0) {
        return None;
    }
    rows.truncate(pivots.len());
    Some(Echelon { rows, pivots })
}

/// Per-button press limit: no button can be pressed more often than the
/// smallest target among the counters it touches.
pub fn press_bounds(m: &Machine) -> Vec<i64> {
    (0..m.buttons.len())
        .map(|b| m.touches(b).map(|r| m.jolts[r]).min().unwrap_or(0))
        .collect()
}

struct Search<'a> {
    machine: &'a Machine,
    ech: Echelon,
    free: Vec<usize>,
    bounds: Vec<i64>,
    presses: Vec<i64>,
    best: Option<i64>,
}

impl Search<'_> {
    /// Tries every value of the free presses from `k` on, then solves the
    /// pivot presses bottom up.
    fn guess(&mut self, k: usize, partial: i64) {
        if self.best.is_some_and(|b| partial >= b) {
            return;
        }
        if k < self.free.len() {
            let f = self.free[k];
            for p in 0..=self.bounds[f] {
                self.presses[f] = p;
                self.guess(k + 1, partial + p);
            }
            return;
        }
        let Some(total) = self.back_substitute() else {
            return;
        };
        if self.machine.apply(&self.presses) != self.machine.jolts {
            return;
        }
        match &mut self.best {
            Some(b) => {
                b.setmin(total);
            }
            None => self.best = Some(total),
        }
    }

    fn back_substitute(&mut self) -> Option<i64> {
        let n = self.presses.len();
        for (row, &col) in self.ech.rows.iter().zip(&self.ech.pivots).rev() {
            let known = (col + 1..n).map(|j| row[j] * self.presses[j]).sum::<i64>();
            let rest = row[n] - known;
            if rest % row[col] != 0 {
                return None;
            }
            let p = rest / row[col];
            if p < 0 || p > self.bounds[col] {
                return None;
            }
            self.presses[col] = p;
        }
        Some(self.presses.iter().sum())
    }
}

/// Fewest presses bringing every counter to its target, without floating
/// point: integer elimination, then a search over the presses of buttons that
/// did not get a pivot.
pub fn fewest_presses(m: &Machine) -> Option<i64> {
    let n = m.buttons.len();
    let mut rows = vec![vec![0; n + 1]; m.jolts.len()];
    for b in 0..n {
        for r in m.touches(b) {
            rows[r][b] = 1;
        }
    }
    for (row, &j) in rows.iter_mut().zip(&m.jolts) {
        row[n] = j;
    }
    let ech = echelon(rows, n)?;
    let free = (0..n).filter(|c| !ech.pivots.contains(c)).collect();
    let mut s = Search {
        machine: m,
        ech,
        free,
        bounds: press_bounds(m),
        presses: vec![0; n],
        best: None,
    };
    s.guess(0, 0);
    s.best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::day10::{parse, tests::EXAMPLE};

    #[test]
    fn example() {
        let machines = parse(EXAMPLE);
        let presses = machines.iter().map(fewest_presses).collect::<Vec<_>>();
        assert_eq!(presses, vec![Some(10), Some(12), Some(11)]);
    }

    #[test]
    fn bounds_from_smallest_counter() {
        let m = &parse(EXAMPLE)[0];
        assert_eq!(press_bounds(m), vec![7, 5, 4, 4, 3, 3]);
    }

    #[test]
    fn echelon_leading_entries() {
        let rows = vec![vec![0, 2, 4], vec![3, 3, 9], vec![3, 5, 13]];
        let e = echelon(rows, 2).unwrap();
        assert_eq!(e.pivots, vec![0, 1]);
        assert_eq!(e.rows, vec![vec![1, 1, 3], vec![0, 1, 2]]);
        assert!(echelon(vec![vec![1, 1], vec![2, 3]], 1).is_none());
    }

    #[test]
    fn infeasible_and_trivial() {
        let m: Machine = "[..] (0) {1,1}".parse().unwrap();
        assert_eq!(fewest_presses(&m), None);
        let m: Machine = "[..] (0) (1) {0,0}".parse().unwrap();
        assert_eq!(fewest_presses(&m), Some(0));
        let m: Machine = "[.] (0) (0) {4}".parse().unwrap();
        assert_eq!(fewest_presses(&m), Some(4));
    }
}
