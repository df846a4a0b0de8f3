use aoc2025::days::day05;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let inventory = day05::parse(&input);
    let p1 = timed("p1", || day05::part1(&inventory));
    let p2 = timed("p2", || day05::part2(&inventory));
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
