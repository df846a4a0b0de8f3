//! Day 12: presents under the trees.
//!
//! Only part 1 exists. A region is counted when its presents fit by area and
//! also fit side by side with each present given its own 3×3 cell; on the
//! real inputs no region needs any interlocking to be decided.

use anyhow::{Context as _, Result, bail, ensure};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::{parse_number, report_parse_fail};

static REGION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)x(\d+):((?: +\d+)*)$").expect("region pattern"));
static SHAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):$").expect("shape pattern"));

/// Presents are drawn in this many rows and columns.
pub const CELL: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub width: usize,
    pub height: usize,
    /// Presents wanted, per shape.
    pub quantities: Vec<usize>,
}

pub struct Farm {
    /// Cells covered by each shape.
    pub areas: Vec<usize>,
    pub regions: Vec<Region>,
}

/// Shapes `i:` followed by rows of `#`/`.`, then regions `WxH: q0 q1 ..`.
/// Lines that do not fit are reported and skipped.
pub fn parse(input: &str) -> Farm {
    let mut farm = Farm {
        areas: vec![],
        regions: vec![],
    };
    let mut shape = None;
    for ln in input.lines().map(str::trim).filter(|ln| !ln.is_empty()) {
        if let Err(e) = farm.parse_line(ln, &mut shape) {
            report_parse_fail(ln, &e);
        }
    }
    farm
}

impl Farm {
    /// `shape` is the shape whose rows are being read.
    fn parse_line(&mut self, ln: &str, shape: &mut Option<usize>) -> Result<()> {
        if let Some(caps) = REGION_RE.captures(ln) {
            *shape = None;
            let quantities = caps[3]
                .split_whitespace()
                .map(parse_number)
                .collect::<Result<Vec<usize>>>()?;
            ensure!(
                quantities.len() <= self.areas.len(),
                "{} quantities for {} shapes",
                quantities.len(),
                self.areas.len()
            );
            self.regions.push(Region {
                width: parse_number(&caps[1])?,
                height: parse_number(&caps[2])?,
                quantities,
            });
        } else if let Some(caps) = SHAPE_RE.captures(ln) {
            *shape = None;
            let index = parse_number::<usize>(&caps[1])?;
            ensure!(index == self.areas.len(), "shape {} out of order", index);
            self.areas.push(0);
            *shape = Some(index);
        } else if ln.bytes().all(|c| c == b'#' || c == b'.') {
            let index = (*shape).context("shape row outside a shape")?;
            self.areas[index] += ln.bytes().filter(|&c| c == b'#').count();
        } else {
            bail!("unexpected line");
        }
        Ok(())
    }

    pub fn fits(&self, r: &Region) -> bool {
        let needed: usize = r.quantities.iter().zip(&self.areas).map(|(q, a)| q * a).sum();
        let cells = (r.width / CELL) * (r.height / CELL);
        needed <= r.width * r.height && cells >= r.quantities.iter().sum::<usize>()
    }
}

pub fn part1(farm: &Farm) -> usize {
    farm.regions.iter().filter(|r| farm.fits(r)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FARM: &str = "\
0:
###
##.
##.

1:
###
#..
###

6x6: 2 2
6x5: 2 2
3x3: 0 1
12x12: 0 0
4x4: 1 1
";

    #[test]
    fn parse_shapes_and_regions() {
        let farm = parse(FARM);
        assert_eq!(farm.areas, vec![7, 7]);
        assert_eq!(farm.regions.len(), 5);
        assert_eq!(
            farm.regions[1],
            Region {
                width: 6,
                height: 5,
                quantities: vec![2, 2]
            }
        );
    }

    #[test]
    fn regions_that_fit() {
        let farm = parse(FARM);
        let fits = farm.regions.iter().map(|r| farm.fits(r)).collect::<Vec<_>>();
        assert_eq!(fits, vec![true, false, true, true, false]);
        assert_eq!(part1(&farm), 3);
    }

    #[test]
    fn area_alone_is_not_enough() {
        // 8 cells of area but only one 3x3 slot
        let farm = parse("0:\n#.\n.#\n\n5x4: 4\n");
        assert_eq!(farm.areas, vec![2]);
        assert_eq!(part1(&farm), 0);
    }

    #[test]
    fn bad_lines_are_skipped() {
        let farm = parse("0:\n###\n\n3x3: 1\nhello\n3x3: 1\n");
        assert_eq!(farm.areas, vec![3]);
        assert_eq!(farm.regions.len(), 2);
        assert_eq!(part1(&farm), 2);
    }

    #[test]
    fn malformed() {
        // rows with no shape header
        assert!(parse("###\n").areas.is_empty());
        // out of order header, and its rows with it
        assert!(parse("1:\n###\n").areas.is_empty());
        // more quantities than shapes
        let farm = parse("0:\n#\n3x3: 1 1\n");
        assert_eq!(farm.areas, vec![1]);
        assert!(farm.regions.is_empty());
        // a region line ends the shape before it
        let farm = parse("0:\n#\n2x2:\n##\n");
        assert_eq!(farm.areas, vec![1]);
        assert_eq!(farm.regions.len(), 1);
    }
}
