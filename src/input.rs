use std::io::{Read as _, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context as _, Result};
use clap::Parser;

/// Solves one Advent of Code 2025 puzzle and prints `pt1 = ..` / `pt2 = ..`.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Puzzle input file (reads stdin when omitted)
    pub input: Option<PathBuf>,
}

impl Cli {
    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("failed to read stdin")?;
                Ok(input)
            }
        }
    }
}

/// Writes `parse fail <item>: <error chain>` to `out`.
pub fn log_parse_fail(out: &mut impl Write, item: &str, err: &anyhow::Error) {
    writeln!(out, "parse fail {}: {:#}", item, err).ok();
}

/// Reports a skipped item on stdout, next to the answers.
pub fn report_parse_fail(item: &str, err: &anyhow::Error) {
    log_parse_fail(&mut std::io::stdout().lock(), item, err);
}

/// Runs `parse` on every non-blank item, logging failures to `out` and
/// skipping them.
pub fn parse_items_to<'a, T>(
    items: impl IntoIterator<Item = &'a str>,
    mut parse: impl FnMut(&str) -> Result<T>,
    out: &mut impl Write,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| match parse(s) {
            Ok(v) => Some(v),
            Err(e) => {
                log_parse_fail(out, s, &e);
                None
            }
        })
        .collect()
}

/// [`parse_items_to`] with failures reported on stdout.
pub fn parse_items<'a, T>(
    items: impl IntoIterator<Item = &'a str>,
    parse: impl FnMut(&str) -> Result<T>,
) -> Vec<T> {
    parse_items_to(items, parse, &mut std::io::stdout())
}

/// Runs `parse` on every non-blank line. Lines that fail are reported on
/// stdout and skipped.
pub fn parse_lines<T>(input: &str, parse: impl FnMut(&str) -> Result<T>) -> Vec<T> {
    parse_items(input.lines(), parse)
}

pub fn parse_number<T>(s: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim()
        .parse::<T>()
        .with_context(|| format!("not a number: {:?}", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[test]
    fn bad_lines_are_skipped() {
        let input = "1\n\nx\n  \n3\n";
        let v = parse_lines(input, parse_number::<i64>);
        assert_eq!(v, vec![1, 3]);
    }

    #[test]
    fn failures_are_logged_with_their_line() {
        let mut out = Vec::new();
        let v = parse_items_to(["7", "x", "", "9"], parse_number::<u8>, &mut out);
        assert_eq!(v, vec![7, 9]);
        assert_eq!(
            String::from_utf8_lossy(&out),
            "parse fail x: not a number: \"x\": invalid digit found in string\n"
        );
    }

    #[test]
    fn parser_errors_carry_context() {
        let err = parse_number::<u32>("-4").unwrap_err();
        assert!(format!("{:#}", err).contains("not a number"));
    }

    #[test]
    fn closures_can_reject_lines() {
        let v = parse_lines("a\nbb\nccc", |ln| {
            if ln.len() == 2 {
                bail!("two letters");
            }
            Ok(ln.len())
        });
        assert_eq!(v, vec![1, 3]);
    }

    #[test]
    fn input_file_is_read() -> Result<()> {
        let name = format!("aoc2025-input-{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "L68\nR48\n")?;
        let cli = Cli::try_parse_from(["aoc1", path.to_str().context("utf-8 path")?])?;
        assert_eq!(cli.read_input()?, "L68\nR48\n");
        std::fs::remove_file(&path)?;
        Ok(())
    }
}
