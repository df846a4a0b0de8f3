//! Day 1: a 100-position dial starting at 50, turned by `L<n>` / `R<n>`.

use anyhow::{Result, bail};

use crate::input::{parse_lines, parse_number};

const POSITIONS: i64 = 100;
const START: i64 = 50;

/// Signed rotations, left negative.
pub fn parse(input: &str) -> Vec<i64> {
    parse_lines(input, parse_rotation)
}

fn parse_rotation(ln: &str) -> Result<i64> {
    let ln = ln.trim();
    let (dir, n) = ln.split_at(ln.find(|c: char| c.is_ascii_digit()).unwrap_or(ln.len()));
    let n = parse_number::<i64>(n)?;
    match dir {
        "L" => Ok(-n),
        "R" => Ok(n),
        _ => bail!("unknown direction {:?}", dir),
    }
}

/// Returns (rotations ending on 0, clicks landing on 0).
pub fn solve(rotations: &[i64]) -> (i64, i64) {
    let mut p = START;
    let mut p1 = 0;
    let mut p2 = 0;
    for &t in rotations {
        let (turns, rest) = (t.abs() / POSITIONS, t.abs() % POSITIONS);
        p2 += turns;
        if t < 0 {
            // from 0 the partial turn cannot reach 0 again
            if p != 0 && rest >= p {
                p2 += 1;
            }
            p = (p - rest).rem_euclid(POSITIONS);
        } else {
            if p + rest >= POSITIONS {
                p2 += 1;
            }
            p = (p + rest) % POSITIONS;
        }
        if p == 0 {
            p1 += 1;
        }
    }
    (p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    /// One click at a time.
    fn clicks(rotations: &[i64]) -> (i64, i64) {
        let (mut p, mut p1, mut p2) = (START, 0, 0);
        for &t in rotations {
            for _ in 0..t.abs() {
                p = (p + t.signum()).rem_euclid(POSITIONS);
                p2 += (p == 0) as i64;
            }
            p1 += (p == 0) as i64;
        }
        (p1, p2)
    }

    #[test]
    fn example() {
        let rotations = parse(EXAMPLE);
        assert_eq!(rotations[..3], [-68, -30, 48]);
        assert_eq!(solve(&rotations), (3, 6));
    }

    #[test]
    fn full_turns_count_every_pass() {
        assert_eq!(solve(&[1000]), (0, 10));
        assert_eq!(solve(&[-50, -300]), (2, 4));
        assert_eq!(solve(&[50, 100]), (2, 2));
    }

    #[test]
    fn matches_click_by_click() {
        let rotations = [-68, 432, -250, -1, 1, 99, -100, 7, -57, 350, -999];
        assert_eq!(solve(&rotations), clicks(&rotations));
    }

    #[test]
    fn bad_direction_is_skipped() {
        assert_eq!(parse("R5\nU7\nL3\nL"), vec![5, -3]);
    }
}
