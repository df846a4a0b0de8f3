//! Day 5: fresh ingredient id ranges.

use anyhow::Context as _;

use crate::input::{parse_lines, parse_number};

/// Inclusive.
pub type Interval = (i64, i64);

pub struct Inventory {
    /// Sorted, disjoint.
    pub fresh: Vec<Interval>,
    pub ids: Vec<i64>,
}

/// Ranges, a blank line, then ids.
pub fn parse(input: &str) -> Inventory {
    let input = input.replace("\r\n", "\n");
    let (ranges, ids) = input.split_once("\n\n").unwrap_or((input.as_str(), ""));
    let fresh = parse_lines(ranges, |ln| {
        let (a, b) = ln.split_once('-').context("missing '-'")?;
        Ok((parse_number(a)?, parse_number(b)?))
    });
    Inventory {
        fresh: condense(fresh),
        ids: parse_lines(ids, parse_number),
    }
}

/// Sorts and merges overlapping intervals.
pub fn condense(mut v: Vec<Interval>) -> Vec<Interval> {
    v.sort();
    let mut rv: Vec<Interval> = Vec::with_capacity(v.len());
    for (a, b) in v {
        match rv.last_mut() {
            Some(last) if a <= last.1 => last.1 = last.1.max(b),
            _ => rv.push((a, b)),
        }
    }
    rv
}

fn contains(&(a, b): &Interval, x: i64) -> bool {
    a <= x && x <= b
}

pub fn part1(inv: &Inventory) -> usize {
    inv.ids
        .iter()
        .filter(|&&x| {
            // first interval ending at or after x
            let i = inv.fresh.partition_point(|r| r.1 < x);
            inv.fresh.get(i).is_some_and(|r| contains(r, x))
        })
        .count()
}

pub fn part2(inv: &Inventory) -> i64 {
    inv.fresh.iter().map(|(a, b)| b - a + 1).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

    #[test]
    fn example() {
        let inv = parse(EXAMPLE);
        assert_eq!(inv.fresh, vec![(3, 5), (10, 20)]);
        assert_eq!(inv.ids.len(), 6);
        assert_eq!(part1(&inv), 3);
        assert_eq!(part2(&inv), 14);
    }

    #[test]
    fn condense_nested_and_touching() {
        assert_eq!(condense(vec![(5, 6), (1, 10), (2, 3)]), vec![(1, 10)]);
        assert_eq!(condense(vec![(4, 6), (1, 3)]), vec![(1, 3), (4, 6)]);
        assert_eq!(condense(vec![(1, 3), (3, 3)]), vec![(1, 3)]);
        assert!(condense(vec![]).is_empty());
    }

    #[test]
    fn no_ids() {
        let inv = parse("1-2\n");
        assert_eq!(part1(&inv), 0);
        assert_eq!(part2(&inv), 2);
    }
}
