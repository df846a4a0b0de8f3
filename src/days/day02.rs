//! Day 2: sum the ids in the given ranges that are a digit pattern repeated.

use anyhow::{Context as _, Result};
use itertools::Itertools;

use crate::input::{parse_items, parse_number};

pub type IdRange = (u64, u64);

/// Ranges `a-b`, separated by commas and/or newlines.
pub fn parse(input: &str) -> Vec<IdRange> {
    parse_items(input.split([',', '\n']).map(str::trim), parse_range)
}

fn parse_range(s: &str) -> Result<IdRange> {
    let (from, to) = s.split_once('-').context("missing '-'")?;
    Ok((parse_number(from)?, parse_number(to)?))
}

/// The first half equals the second half.
pub fn repeated_twice(digits: &str) -> bool {
    let n = digits.len();
    n % 2 == 0 && digits[..n / 2] == digits[n / 2..]
}

/// Some prefix, repeated two or more times, makes up the whole string.
pub fn repeated_any(digits: &str) -> bool {
    let n = digits.len();
    (1..=n / 2).any(|k| n % k == 0 && digits.as_bytes().chunks(k).all_equal())
}

/// Returns (sum of ids repeated exactly twice, sum of ids repeated any number of times).
pub fn solve(ranges: &[IdRange]) -> (u64, u64) {
    let mut p1 = 0;
    let mut p2 = 0;
    for &(from, to) in ranges {
        for id in from..=to {
            let buf = id.to_string();
            if repeated_twice(&buf) {
                p1 += id;
            }
            if repeated_any(&buf) {
                p2 += id;
            }
        }
    }
    (p1, p2)
}

/// Same answers without formatting: everything is done on the digits
/// arithmetically.
pub mod digits {
    use super::IdRange;

    fn num_digits(x: u64) -> u32 {
        x.checked_ilog10().map_or(1, |d| d + 1)
    }

    /// `x` is `k` digits repeated `n / k` times.
    fn is_made_of(x: u64, n: u32, k: u32) -> bool {
        let unit = 10u64.pow(k);
        let block = x % unit;
        let mut rest = x / unit;
        for _ in 1..n / k {
            if rest % unit != block {
                return false;
            }
            rest /= unit;
        }
        true
    }

    pub fn repeated_twice(x: u64) -> bool {
        let n = num_digits(x);
        n % 2 == 0 && is_made_of(x, n, n / 2)
    }

    pub fn repeated_any(x: u64) -> bool {
        let n = num_digits(x);
        (1..=n / 2).any(|k| n % k == 0 && is_made_of(x, n, k))
    }

    pub fn solve(ranges: &[IdRange]) -> (u64, u64) {
        ranges
            .iter()
            .flat_map(|&(from, to)| from..=to)
            .fold((0, 0), |(p1, p2), id| {
                (
                    p1 + if repeated_twice(id) { id } else { 0 },
                    p2 + if repeated_any(id) { id } else { 0 },
                )
            })
    }
}
