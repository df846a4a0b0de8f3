//! Day 6: cephalopod math worksheet.

use std::str::FromStr;

use anyhow::{Result, bail, ensure};

use crate::input::{parse_items, parse_number, report_parse_fail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    pub fn apply(self, values: &[i64]) -> i64 {
        match self {
            Op::Add => values.iter().sum(),
            Op::Mul => values.iter().product(),
        }
    }
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Op> {
        match s {
            "+" => Ok(Op::Add),
            "*" => Ok(Op::Mul),
            _ => bail!("unknown operator"),
        }
    }
}

/// Number rows as written (whitespace kept), and the operator per problem.
pub struct Worksheet {
    pub rows: Vec<String>,
    /// `None` for a problem whose operator did not parse; it is left out of
    /// both answers.
    pub ops: Vec<Option<Op>>,
}

/// The last non-blank line holds the operators. Rows with anything but digits
/// and spaces are reported and skipped.
pub fn parse(input: &str) -> Worksheet {
    let mut lines = input.lines().filter(|ln| !ln.trim().is_empty()).collect::<Vec<_>>();
    let ops = match lines.pop() {
        Some(last) => last
            .split_whitespace()
            .map(|s| s.parse::<Op>().inspect_err(|e| report_parse_fail(s, e)).ok())
            .collect(),
        None => vec![],
    };
    let mut rows = parse_items(lines, |ln| {
        if let Some(c) = ln.chars().find(|&c| c != ' ' && !c.is_ascii_digit()) {
            bail!("unexpected {:?}", c);
        }
        Ok(ln.to_string())
    });
    let width = rows.iter().map(String::len).max().unwrap_or(0);
    for row in &mut rows {
        let pad = width - row.len();
        row.extend(std::iter::repeat_n(' ', pad));
    }
    Worksheet { rows, ops }
}

fn total(ops: &[Option<Op>], problems: &[Vec<i64>]) -> i64 {
    ops.iter()
        .zip(problems)
        .filter(|(_, p)| !p.is_empty())
        .filter_map(|(op, p)| op.map(|op| op.apply(p)))
        .sum()
}

/// Numbers read left to right within each row. Rows with the wrong count of
/// numbers are reported and skipped.
pub fn part1(w: &Worksheet) -> i64 {
    let n = w.ops.len();
    let rows = parse_items(w.rows.iter().map(String::as_str), |row| {
        let values = row.split_whitespace().map(parse_number).collect::<Result<Vec<i64>>>()?;
        ensure!(values.len() == n, "{} numbers for {} problems", values.len(), n);
        Ok(values)
    });
    let mut problems = vec![vec![]; n];
    for values in rows {
        for (p, v) in problems.iter_mut().zip(values) {
            p.push(v);
        }
    }
    total(&w.ops, &problems)
}

/// Numbers read top to bottom within each column; a blank column ends a problem.
pub fn part2(w: &Worksheet) -> i64 {
    let width = w.rows.first().map_or(0, String::len);
    let mut problems: Vec<Vec<i64>> = vec![vec![]];
    for col in 0..width {
        let mut value = None;
        for row in &w.rows {
            let c = row.as_bytes()[col];
            if c.is_ascii_digit() {
                value = Some(value.unwrap_or(0) * 10 + (c - b'0') as i64);
            }
        }
        match (value, problems.last_mut()) {
            (Some(v), Some(p)) => p.push(v),
            _ => problems.push(vec![]),
        }
    }
    problems.retain(|p| !p.is_empty());
    total(&w.ops, &problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "123 328  51 64 \n 45 64  387 23 \n  6 98  215 314\n*   +   *   +  \n";

    #[test]
    fn example() {
        let w = parse(EXAMPLE);
        assert_eq!(w.ops, vec![Some(Op::Mul), Some(Op::Add), Some(Op::Mul), Some(Op::Add)]);
        assert_eq!(part1(&w), 4277556);
        assert_eq!(part2(&w), 3263827);
    }

    #[test]
    fn ragged_columns() {
        let w = parse("12 3\n4  5\n+ *\n");
        assert_eq!(part1(&w), 16 + 15);
        // columns "14", "2", then "35"
        assert_eq!(part2(&w), 16 + 35);
    }

    #[test]
    fn unknown_operator_skips_its_problem() {
        let w = parse("1 2\n3 4\n+ -\n");
        assert_eq!(w.ops, vec![Some(Op::Add), None]);
        assert_eq!(part1(&w), 4);
        assert_eq!(part2(&w), 13);
    }

    #[test]
    fn bad_rows_are_skipped() {
        let w = parse("1 2\nx 3\n4 5\n* +\n");
        assert_eq!(w.rows.len(), 2);
        assert_eq!(part1(&w), 4 + 7);
        // a row with too many numbers only drops out of part 1
        let w = parse("1 2 3\n+ *\n");
        assert_eq!(part1(&w), 0);
    }

    #[test]
    fn empty() {
        let w = parse("");
        assert_eq!((part1(&w), part2(&w)), (0, 0));
    }
}
