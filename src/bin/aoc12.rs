use aoc2025::days::day12;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let farm = day12::parse(&input);
    let p1 = timed("p1", || day12::part1(&farm));
    println!("pt1 = {}", p1);
    Ok(())
}
