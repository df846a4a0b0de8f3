//! Day 3: the largest number made of `k` digits of a bank, kept in order.

use anyhow::{Result, ensure};

use crate::input::parse_lines;

pub fn parse(input: &str) -> Vec<Vec<u8>> {
    parse_lines(input, |ln| {
        let ln = ln.trim();
        ensure!(ln.bytes().all(|b| b.is_ascii_digit()), "not a digit string");
        Ok(ln.bytes().map(|b| b - b'0').collect())
    })
}

/// Greedy: the i-th digit is the leftmost maximum among the positions that
/// still leave room for the remaining `k - i - 1` digits.
pub fn joltage(bank: &[u8], k: usize) -> Result<u64> {
    ensure!(bank.len() >= k, "bank of {} digits is shorter than {}", bank.len(), k);
    let mut start = 0;
    let mut rv = 0;
    for i in 0..k {
        let end = bank.len() - (k - i - 1);
        let mut best = start;
        for j in start + 1..end {
            if bank[j] > bank[best] {
                best = j;
            }
        }
        rv = rv * 10 + bank[best] as u64;
        start = best + 1;
    }
    Ok(rv)
}

pub fn total(banks: &[Vec<u8>], k: usize) -> Result<u64> {
    banks.iter().map(|b| joltage(b, k)).sum()
}

pub fn part1(banks: &[Vec<u8>]) -> Result<u64> {
    total(banks, 2)
}

pub fn part2(banks: &[Vec<u8>]) -> Result<u64> {
    total(banks, 12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const EXAMPLE: &str = "987654321111111\n811111111111119\n234234234234278\n818181911112111\n";

    #[test]
    fn example() -> Result<()> {
        let banks = parse(EXAMPLE);
        assert_eq!(part1(&banks)?, 357);
        assert_eq!(part2(&banks)?, 3121910778619);
        Ok(())
    }

    #[test]
    fn single_banks() -> Result<()> {
        let banks = parse(EXAMPLE);
        let twos = banks.iter().map(|b| joltage(b, 2)).collect::<Result<Vec<_>>>()?;
        assert_eq!(twos, vec![98, 89, 78, 92]);
        assert_eq!(joltage(&banks[0], 12)?, 987654321111);
        Ok(())
    }

    #[test]
    fn greedy_matches_all_choices() -> Result<()> {
        let bank = parse("3141592653589793")[0].clone();
        for k in 1..=4 {
            let best = (0..bank.len())
                .combinations(k)
                .map(|ix| ix.iter().fold(0u64, |a, &i| a * 10 + bank[i] as u64))
                .max()
                .unwrap_or(0);
            assert_eq!(joltage(&bank, k)?, best, "k = {}", k);
        }
        Ok(())
    }

    #[test]
    fn short_bank_is_an_error() {
        assert!(joltage(&[1, 2], 3).is_err());
        assert_eq!(parse("12a\n45"), vec![vec![4, 5]]);
    }
}
