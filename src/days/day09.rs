//! Day 9: the largest rectangle of tiles with red tiles at opposite corners.

use anyhow::Context as _;
use itertools::Itertools;

use crate::SetMinMax;
use crate::input::{parse_lines, parse_number};

pub type Tile = (i64, i64);

/// Red tiles in loop order.
pub fn parse(input: &str) -> Vec<Tile> {
    parse_lines(input, |ln| {
        let (x, y) = ln.split_once(',').context("expected x,y")?;
        Ok((parse_number(x)?, parse_number(y)?))
    })
}

/// Tiles covered by the rectangle with corners `a` and `b`, edges included.
pub fn area(a: Tile, b: Tile) -> i64 {
    ((a.0 - b.0).abs() + 1) * ((a.1 - b.1).abs() + 1)
}

pub fn part1(tiles: &[Tile]) -> i64 {
    let mut best = 0i64;
    for (&a, &b) in tiles.iter().tuple_combinations() {
        best.setmax(area(a, b));
    }
    best
}

fn between(t: i64, a: i64, b: i64) -> bool {
    a.min(b) <= t && t <= a.max(b)
}

/// Point in polygon by crossing parity; points on an edge count as inside.
/// `ring` repeats its first vertex at the end.
pub fn inside(p: Tile, ring: &[Tile]) -> bool {
    let mut rv = false;
    for (&a, &b) in ring.iter().tuple_windows() {
        if p == a || p == b {
            return true;
        }
        if a.1 == b.1 && p.1 == a.1 && between(p.0, a.0, b.0) {
            return true;
        }
        if between(p.1, a.1, b.1) {
            // each vertex is counted by one of its two edges only
            if (p.1 == a.1 && b.1 >= a.1) || (p.1 == b.1 && a.1 >= b.1) {
                continue;
            }
            let c = (a.0 - p.0) * (b.1 - p.1) - (b.0 - p.0) * (a.1 - p.1);
            if c == 0 {
                return true;
            }
            if (a.1 < b.1) == (c > 0) {
                rv = !rv;
            }
        }
    }
    rv
}

/// Distinct x and y coordinates of the loop.
pub struct Coordinates {
    xs: Vec<i64>,
    ys: Vec<i64>,
}

impl Coordinates {
    pub fn new(tiles: &[Tile]) -> Self {
        Self {
            xs: tiles.iter().map(|t| t.0).sorted_unstable().dedup().collect(),
            ys: tiles.iter().map(|t| t.1).sorted_unstable().dedup().collect(),
        }
    }
}

/// The far corners, and every point where a rectangle edge meets a loop
/// coordinate, lie inside the loop.
pub fn all_inside(a: Tile, b: Tile, ring: &[Tile], c: &Coordinates) -> bool {
    if !inside((a.0, b.1), ring) || !inside((b.0, a.1), ring) {
        return false;
    }
    let rows = c.ys.iter().filter(|&&y| between(y, a.1, b.1));
    for &y in rows {
        if !inside((a.0, y), ring) || !inside((b.0, y), ring) {
            return false;
        }
    }
    let cols = c.xs.iter().filter(|&&x| between(x, a.0, b.0));
    for &x in cols {
        if !inside((x, a.1), ring) || !inside((x, b.1), ring) {
            return false;
        }
    }
    true
}

/// The largest rectangle that stays within the red/green loop.
pub fn part2(tiles: &[Tile]) -> i64 {
    let Some(&first) = tiles.first() else {
        return 0;
    };
    let mut ring = tiles.to_vec();
    ring.push(first);
    let coords = Coordinates::new(tiles);
    let mut candidates = tiles
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| (area(a, b), a, b))
        .collect::<Vec<_>>();
    candidates.sort_unstable_by(|p, q| q.0.cmp(&p.0));
    candidates
        .into_iter()
        .find(|&(_, a, b)| all_inside(a, b, &ring, &coords))
        .map_or(0, |(ar, _, _)| ar)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";

    #[test]
    fn example() {
        let tiles = parse(EXAMPLE);
        assert_eq!(part1(&tiles), 50);
        assert_eq!(part2(&tiles), 24);
    }

    #[test]
    fn inside_square() {
        let ring = [(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)];
        assert!(inside((2, 2), &ring));
        assert!(inside((0, 0), &ring));
        assert!(inside((4, 2), &ring));
        assert!(inside((2, 4), &ring));
        assert!(!inside((5, 2), &ring));
        assert!(!inside((2, -1), &ring));
        assert!(!inside((-1, 0), &ring));
    }

    #[test]
    fn l_shape_excludes_the_notch() {
        // an L: the top right quadrant is missing
        let tiles = parse("0,0\n10,0\n10,4\n4,4\n4,10\n0,10\n");
        assert_eq!(part1(&tiles), 11 * 11);
        assert_eq!(part2(&tiles), 11 * 5);
    }

    #[test]
    fn fewer_than_two_tiles() {
        assert_eq!(part1(&[]), 0);
        assert_eq!(part2(&[(3, 3)]), 0);
    }
}
