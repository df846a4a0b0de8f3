use aoc2025::days::day03;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let banks = day03::parse(&input);
    let p1 = timed("p1", || day03::part1(&banks))?;
    let p2 = timed("p2", || day03::part2(&banks))?;
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
