use aoc2025::days::day11;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let reactor = day11::parse(&input);
    let p1 = timed("p1", || day11::part1(&reactor))?;
    let p2 = timed("p2", || day11::part2(&reactor))?;
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
