//! Day 8: junction boxes joined into circuits, closest pairs first.

use anyhow::Context as _;
use itertools::Itertools;

use crate::input::{parse_lines, parse_number};

pub type Point = [i64; 3];

pub fn parse(input: &str) -> Vec<Point> {
    parse_lines(input, |ln| {
        let (x, y, z) = ln.split(',').collect_tuple().context("expected x,y,z")?;
        Ok([parse_number(x)?, parse_number(y)?, parse_number(z)?])
    })
}

fn dist2(a: &Point, b: &Point) -> i64 {
    a.iter().zip(b).map(|(p, q)| (p - q) * (p - q)).sum()
}

/// Every pair `(i, j)`, `i < j`, nearest first.
pub fn pairs_by_distance(points: &[Point]) -> Vec<(usize, usize)> {
    let mut rv = (0..points.len()).tuple_combinations().collect::<Vec<(usize, usize)>>();
    rv.sort_by_cached_key(|&(i, j)| dist2(&points[i], &points[j]));
    rv
}

/// Disjoint sets with union by size and path compression.
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Returns the size of the merged set, or `None` if already joined.
    pub fn union(&mut self, x: usize, y: usize) -> Option<usize> {
        let (mut px, mut py) = (self.find(x), self.find(y));
        if px == py {
            return None;
        }
        if self.size[px] < self.size[py] {
            std::mem::swap(&mut px, &mut py);
        }
        self.parent[py] = px;
        self.size[px] += self.size[py];
        Some(self.size[px])
    }

    /// Sizes of all sets, one per root.
    pub fn set_sizes(&mut self) -> Vec<usize> {
        let mut rv = vec![];
        for x in 0..self.parent.len() {
            if self.find(x) == x {
                rv.push(self.size[x]);
            }
        }
        rv
    }
}

/// Pairs joined for part 1; the small example uses fewer.
pub fn connections_for(points: usize) -> usize {
    if points < 1000 { 10 } else { 1000 }
}

/// Product of the three largest circuits after joining the `n` closest pairs.
pub fn part1(points: &[Point], pairs: &[(usize, usize)], n: usize) -> usize {
    let mut uf = UnionFind::new(points.len());
    for &(i, j) in pairs.iter().take(n) {
        uf.union(i, j);
    }
    uf.set_sizes().into_iter().sorted_unstable_by(|a, b| b.cmp(a)).take(3).product()
}

/// Product of the x coordinates of the pair that makes everything one circuit.
pub fn part2(points: &[Point], pairs: &[(usize, usize)]) -> Option<i64> {
    let mut uf = UnionFind::new(points.len());
    for &(i, j) in pairs {
        if uf.union(i, j) == Some(points.len()) {
            return Some(points[i][0] * points[j][0]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn example() {
        let points = parse(EXAMPLE);
        assert_eq!(points.len(), 20);
        let pairs = pairs_by_distance(&points);
        assert_eq!(pairs.len(), 190);
        assert_eq!(pairs[0], (0, 19));
        assert_eq!(part1(&points, &pairs, connections_for(points.len())), 40);
        assert_eq!(part2(&points, &pairs), Some(25272));
    }

    #[test]
    fn union_find_sizes() {
        let mut uf = UnionFind::new(6);
        assert_eq!(uf.union(0, 1), Some(2));
        assert_eq!(uf.union(2, 3), Some(2));
        assert_eq!(uf.union(1, 3), Some(4));
        assert_eq!(uf.union(0, 2), None);
        assert_eq!(uf.find(3), uf.find(0));
        let mut sizes = uf.set_sizes();
        sizes.sort();
        assert_eq!(sizes, vec![1, 1, 4]);
    }

    #[test]
    fn single_box_never_joins() {
        let points = parse("1,2,3\n");
        let pairs = pairs_by_distance(&points);
        assert_eq!(part1(&points, &pairs, 10), 1);
        assert_eq!(part2(&points, &pairs), None);
    }
}
