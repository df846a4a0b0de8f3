//! Day 7: a tachyon beam falling from `S` through `^` splitters.

use anyhow::{Context as _, Result, ensure};

pub struct Manifold {
    pub rows: Vec<Vec<u8>>,
    pub start: usize,
}

pub fn parse(input: &str) -> Result<Manifold> {
    let rows = input
        .lines()
        .map(str::trim_end)
        .filter(|ln| !ln.is_empty())
        .map(|ln| ln.as_bytes().to_vec())
        .collect::<Vec<_>>();
    let first = rows.first().context("empty manifold")?;
    ensure!(rows.iter().all(|r| r.len() == first.len()), "ragged rows");
    let start = first.iter().position(|&c| c == b'S').context("no S on the first row")?;
    Ok(Manifold { rows, start })
}

/// Returns (splitters hit, timelines). Each split sends one beam to either
/// side; timelines count every path separately.
pub fn solve(m: &Manifold) -> (usize, u64) {
    let width = m.rows[0].len();
    let mut beams = vec![0u64; width];
    beams[m.start] = 1;
    let mut hits = 0;
    for row in &m.rows[1..] {
        let mut next = vec![0u64; width];
        for (x, &n) in beams.iter().enumerate() {
            if n == 0 {
                continue;
            }
            if row[x] == b'^' {
                hits += 1;
                if x > 0 {
                    next[x - 1] += n;
                }
                if x + 1 < width {
                    next[x + 1] += n;
                }
            } else {
                next[x] += n;
            }
        }
        beams = next;
    }
    (hits, beams.iter().sum())
}
