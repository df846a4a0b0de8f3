//! Machines are built backwards from a random press vector, so every one of
//! them has at least one solution for both parts.

use rand::{Rng, SeedableRng};

use crate::days::day10::{MAX_LIGHTS, Machine};

pub struct Generated {
    pub machine: Machine,
    /// Presses that reach the joltage targets; not necessarily the fewest.
    pub presses: Vec<i64>,
}

/// One machine with `lights` lights and `buttons` buttons, each pressed up to
/// `max_presses` times.
pub fn generate_one<R: Rng>(
    rng: &mut R,
    lights: usize,
    buttons: usize,
    max_presses: i64,
) -> Generated {
    assert!((1..=MAX_LIGHTS).contains(&lights), "1 to {} lights", MAX_LIGHTS);
    let full = (1u32 << lights) - 1;
    let masks = (0..buttons).map(|_| rng.random_range(1..=full)).collect::<Vec<_>>();
    let target = masks
        .iter()
        .filter(|_| rng.random_bool(0.5))
        .fold(0, |t, &m| t ^ m);
    let mut machine = Machine {
        lights,
        target,
        buttons: masks,
        jolts: vec![0; lights],
    };
    let presses = (0..buttons)
        .map(|_| rng.random_range(0..=max_presses))
        .collect::<Vec<_>>();
    machine.jolts = machine.apply(&presses);
    Generated { machine, presses }
}

/// `n` machines of mixed sizes, like a puzzle input.
pub fn generate(n: usize, seed: Option<u64>) -> Vec<Machine> {
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    };
    (0..n)
        .map(|_| {
            let lights = rng.random_range(3..=10);
            let buttons = rng.random_range(lights - 1..=lights + 3);
            generate_one(&mut rng, lights, buttons, 40).machine
        })
        .collect()
}
