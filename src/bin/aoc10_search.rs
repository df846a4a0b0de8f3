use aoc2025::days::day10::{self, search};
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use anyhow::Context as _;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let machines = day10::parse(&input);
    let p1 = timed("p1", || day10::part1(&machines))?;
    let p2 = timed("p2", || {
        machines
            .iter()
            .map(|m| search::fewest_presses(m).with_context(|| format!("no presses reach {}", m)))
            .sum::<anyhow::Result<i64>>()
    })?;
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
