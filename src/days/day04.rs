//! Day 4: paper rolls a forklift can reach.

use anyhow::{Result, bail, ensure};

use crate::graph::grid::Grid8;
use crate::graph::{Graph, VertexId};

/// Row-major `@` cells.
pub struct Floor {
    pub rolls: Vec<bool>,
    pub stride: usize,
}

pub fn parse(input: &str) -> Result<Floor> {
    let mut rolls = vec![];
    let mut stride = 0;
    for ln in input.lines().map(str::trim_end).filter(|ln| !ln.is_empty()) {
        if stride == 0 {
            stride = ln.len();
        }
        ensure!(ln.len() == stride, "ragged row {:?}", ln);
        for c in ln.chars() {
            rolls.push(match c {
                '@' => true,
                '.' => false,
                _ => bail!("unexpected {:?}", c),
            });
        }
    }
    Ok(Floor { rolls, stride })
}

const CROWDED: usize = 4;

fn accessible(g: &Grid8, rolls: &[bool]) -> Vec<VertexId> {
    (0..g.len())
        .filter(|&v| rolls[v] && g.neighbors(v).into_iter().filter(|&u| rolls[u]).count() < CROWDED)
        .collect()
}

/// Returns (rolls accessible now, rolls removed by repeatedly taking every
/// accessible one).
pub fn solve(floor: &Floor) -> (usize, usize) {
    if floor.stride == 0 {
        return (0, 0);
    }
    let g = Grid8::new(floor.rolls.len(), floor.stride);
    let mut rolls = floor.rolls.clone();
    let mut reachable = accessible(&g, &rolls);
    let p1 = reachable.len();
    let mut p2 = 0;
    while !reachable.is_empty() {
        p2 += reachable.len();
        for &v in &reachable {
            rolls[v] = false;
        }
        reachable = accessible(&g, &rolls);
    }
    (p1, p2)
}
