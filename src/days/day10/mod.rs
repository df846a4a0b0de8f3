//! Day 10: factory machines.
//!
//! A machine line reads `[.##.] (3) (1,3) (2) {3,5,4,7}`: the light pattern to
//! reach, then buttons listing the lights (and joltage counters) they touch,
//! then the joltage targets. Part 1 toggles lights, so it is a shortest path
//! over the `2^lights` light states. Part 2 adds one to each touched counter
//! per press, which makes it an integer program:
//!
//! ```text
//! minimize Σ pᵢ  subject to  Σ pᵢ·[button i touches counter r] = jolts[r],  pᵢ ∈ ℕ
//! ```

use std::fmt;

use anyhow::{Context as _, Result, bail, ensure};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::graph::{self, Graph, UNREACHED, VertexId};
use crate::input::{parse_lines, parse_number};
use crate::simplex;

/// Exact integer elimination with a bounded search over free presses.
pub mod search;

/// Lights are bits of a `u32`.
pub const MAX_LIGHTS: usize = 20;

static MACHINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([.#]+)\] ([^{}]+) \{([^}]+)\}$").expect("machine pattern"));
static BUTTON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([\d,]+)\)").expect("button pattern"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    pub lights: usize,
    /// Bit `i` set when light `i` must end up on.
    pub target: u32,
    /// Bit `i` set when the button touches light / counter `i`.
    pub buttons: Vec<u32>,
    pub jolts: Vec<i64>,
}

impl Machine {
    /// Counter indices touched by button `b`.
    pub fn touches(&self, b: usize) -> impl Iterator<Item = usize> + '_ {
        let mask = self.buttons[b];
        (0..self.lights).filter(move |&i| mask >> i & 1 == 1)
    }

    /// Counter values after pressing button `i` `presses[i]` times.
    pub fn apply(&self, presses: &[i64]) -> Vec<i64> {
        let mut rv = vec![0; self.jolts.len()];
        for (b, &p) in presses.iter().enumerate() {
            for r in self.touches(b) {
                rv[r] += p;
            }
        }
        rv
    }
}

impl std::str::FromStr for Machine {
    type Err = anyhow::Error;

    fn from_str(ln: &str) -> Result<Self> {
        let caps = MACHINE_RE.captures(ln.trim()).context("not a machine")?;
        let pattern = &caps[1];
        let lights = pattern.len();
        ensure!(lights <= MAX_LIGHTS, "{} lights, at most {}", lights, MAX_LIGHTS);
        let target = pattern
            .bytes()
            .enumerate()
            .filter(|&(_, c)| c == b'#')
            .fold(0, |m, (i, _)| m | 1 << i);
        let mut buttons = vec![];
        for b in BUTTON_RE.captures_iter(&caps[2]) {
            let mut mask = 0u32;
            for i in b[1].split(',') {
                let i = parse_number::<usize>(i)?;
                ensure!(i < lights, "button touches light {} of {}", i, lights);
                mask |= 1 << i;
            }
            buttons.push(mask);
        }
        let jolts = caps[3].split(',').map(parse_number).collect::<Result<Vec<i64>>>()?;
        ensure!(jolts.len() == lights, "{} counters for {} lights", jolts.len(), lights);
        ensure!(jolts.iter().all(|&j| j >= 0), "negative joltage");
        Ok(Machine {
            lights,
            target,
            buttons,
            jolts,
        })
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = (0..self.lights)
            .map(|i| if self.target >> i & 1 == 1 { '#' } else { '.' })
            .collect::<String>();
        write!(f, "[{}]", pattern)?;
        for b in 0..self.buttons.len() {
            write!(f, " ({})", self.touches(b).join(","))?;
        }
        write!(f, " {{{}}}", self.jolts.iter().join(","))
    }
}

pub fn parse(input: &str) -> Vec<Machine> {
    parse_lines(input, str::parse)
}

/// Light states as vertices; pressing a button XORs its mask.
pub struct LightGraph<'a> {
    machine: &'a Machine,
}

impl<'a> LightGraph<'a> {
    pub fn new(machine: &'a Machine) -> Self {
        Self { machine }
    }
}

pub struct Toggles<'a> {
    state: VertexId,
    buttons: std::slice::Iter<'a, u32>,
}

impl Iterator for Toggles<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        self.buttons.next().map(|&b| self.state ^ b as VertexId)
    }
}

impl Graph for LightGraph<'_> {
    type Neighbors<'b>
        = Toggles<'b>
    where
        Self: 'b;

    fn len(&self) -> usize {
        1 << self.machine.lights
    }

    fn neighbors(&self, v: VertexId) -> Toggles<'_> {
        Toggles {
            state: v,
            buttons: self.machine.buttons.iter(),
        }
    }
}

/// Fewest presses turning the lights from all off to the target pattern.
pub fn fewest_toggles(m: &Machine) -> Result<i64> {
    let dist = graph::bfs(&LightGraph::new(m), 0);
    match dist[m.target as usize] {
        UNREACHED => bail!("lights {:#b} unreachable", m.target),
        d => Ok(d),
    }
}

/// Rows are counters, columns are buttons.
pub fn build_coeff(m: &Machine) -> Vec<Vec<f64>> {
    let mut a = vec![vec![0.0; m.buttons.len()]; m.jolts.len()];
    for b in 0..m.buttons.len() {
        for r in m.touches(b) {
            a[r][b] = 1.0;
        }
    }
    a
}

/// Fewest presses bringing every counter to its target, by LP branch and bound.
pub fn fewest_presses(m: &Machine) -> Result<i64> {
    let a = build_coeff(m);
    let b = m.jolts.iter().map(|&j| j as f64).collect::<Vec<_>>();
    let c = vec![1.0; m.buttons.len()];
    let (_, value) =
        simplex::minimize_integer(&a, &b, &c).with_context(|| format!("machine {}", m))?;
    Ok(value.round() as i64)
}

pub fn part1(machines: &[Machine]) -> Result<i64> {
    machines.iter().map(fewest_toggles).sum()
}

pub fn part2(machines: &[Machine]) -> Result<i64> {
    machines.iter().map(fewest_presses).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

    #[test]
    fn parse_example() {
        let machines = parse(EXAMPLE);
        assert_eq!(machines.len(), 3);
        let m = &machines[0];
        assert_eq!(m.lights, 4);
        assert_eq!(m.target, 0b0110);
        assert_eq!(m.buttons, vec![0b1000, 0b1010, 0b0100, 0b1100, 0b0101, 0b0011]);
        assert_eq!(m.jolts, vec![3, 5, 4, 7]);
        assert_eq!(m.to_string(), EXAMPLE.lines().next().unwrap());
    }

    #[test]
    fn example() -> Result<()> {
        let machines = parse(EXAMPLE);
        let toggles = machines.iter().map(fewest_toggles).collect::<Result<Vec<_>>>()?;
        assert_eq!(toggles, vec![2, 3, 2]);
        assert_eq!(part1(&machines)?, 7);
        let presses = machines.iter().map(fewest_presses).collect::<Result<Vec<_>>>()?;
        assert_eq!(presses, vec![10, 12, 11]);
        assert_eq!(part2(&machines)?, 33);
        Ok(())
    }

    #[test]
    fn light_graph_neighbors() {
        let m = &parse(EXAMPLE)[0];
        let g = LightGraph::new(m);
        assert_eq!(g.len(), 16);
        let n = g.neighbors(0b0110).into_iter().collect::<Vec<_>>();
        assert_eq!(n, vec![0b1110, 0b1100, 0b0010, 0b1010, 0b0011, 0b0101]);
    }

    #[test]
    fn coefficients_match_buttons() {
        let m = &parse(EXAMPLE)[0];
        let a = build_coeff(m);
        assert_eq!(a.len(), 4);
        assert_eq!(a[3], vec![1.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m.apply(&[1, 3, 0, 3, 1, 2]), m.jolts);
    }

    #[test]
    fn unreachable_and_malformed() {
        let m: Machine = "[#.] (1) {0,0}".parse().unwrap();
        assert!(fewest_toggles(&m).is_err());
        assert!(fewest_presses(&m).is_ok());
        assert!("[#.] (2) {1,1}".parse::<Machine>().is_err());
        assert!("[#.] (0) {1}".parse::<Machine>().is_err());
        assert!("#. (0) {1,1}".parse::<Machine>().is_err());
        let impossible: Machine = "[..] (0) {1,1}".parse().unwrap();
        assert!(fewest_presses(&impossible).is_err());
    }
}
