use aoc2025::days::day10;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let machines = day10::parse(&input);
    let p1 = timed("p1", || day10::part1(&machines))?;
    let p2 = timed("p2", || day10::part2(&machines))?;
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
