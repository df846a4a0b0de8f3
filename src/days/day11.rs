//! Day 11: counting paths through the reactor's device graph.

use anyhow::{Context as _, Result, ensure};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::graph::{self, UNREACHED, VertexId};
use crate::input::parse_lines;

/// Three lowercase letters, five bits each.
pub const NAME_SPACE: usize = 1 << 15;

pub const fn encode(n: &[u8; 3]) -> VertexId {
    ((n[0] - b'a') as usize) | ((n[1] - b'a') as usize) << 5 | ((n[2] - b'a') as usize) << 10
}

pub fn decode(v: VertexId) -> String {
    let mut buf = [0u8; 3];
    for (i, c) in buf.iter_mut().enumerate() {
        *c = b'a' + (v >> (5 * i) & 0x1f) as u8;
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn parse_name(s: &str) -> Result<VertexId> {
    let name: &[u8; 3] = s.as_bytes().try_into().with_context(|| format!("bad name {:?}", s))?;
    ensure!(name.iter().all(u8::is_ascii_lowercase), "bad name {:?}", s);
    Ok(encode(name))
}

pub const YOU: VertexId = encode(b"you");
pub const OUT: VertexId = encode(b"out");
pub const SVR: VertexId = encode(b"svr");
pub const DAC: VertexId = encode(b"dac");
pub const FFT: VertexId = encode(b"fft");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Infinitely many paths: a loop the target is reachable from.
    #[error("cycle through {0} reaches the target")]
    Cycle(String),
}

pub struct Reactor {
    outputs: Vec<Vec<VertexId>>,
    inputs: Vec<Vec<VertexId>>,
}

/// Lines `abc: def ghi`.
pub fn parse(input: &str) -> Reactor {
    let mut outputs = vec![vec![]; NAME_SPACE];
    let mut inputs = vec![vec![]; NAME_SPACE];
    let edges = parse_lines(input, |ln| {
        let (from, to) = ln.split_once(':').context("missing ':'")?;
        let from = parse_name(from.trim())?;
        let to = to.split_whitespace().map(parse_name).collect::<Result<Vec<_>>>()?;
        Ok((from, to))
    });
    for (from, to) in edges {
        for t in to {
            graph::add_edge(&mut outputs, from, t);
            graph::add_edge(&mut inputs, t, from);
        }
    }
    Reactor { outputs, inputs }
}

impl Reactor {
    /// Number of distinct paths `from` → `to`. Paths stop at `to`.
    pub fn paths(&self, from: VertexId, to: VertexId) -> Result<u64, PathError> {
        // only devices that can still reach `to` matter
        let reach = graph::bfs(&self.inputs, to);
        if reach[from] == UNREACHED {
            return Ok(0);
        }
        let mut memo = FxHashMap::default();
        let mut on_path = FxHashSet::default();
        self.count(from, to, &reach, &mut memo, &mut on_path)
    }

    fn count(
        &self,
        v: VertexId,
        to: VertexId,
        reach: &[i64],
        memo: &mut FxHashMap<VertexId, u64>,
        on_path: &mut FxHashSet<VertexId>,
    ) -> Result<u64, PathError> {
        if v == to {
            return Ok(1);
        }
        if let Some(&c) = memo.get(&v) {
            return Ok(c);
        }
        on_path.insert(v);
        let mut total = 0;
        for &u in &self.outputs[v] {
            if reach[u] == UNREACHED {
                continue;
            }
            if on_path.contains(&u) {
                return Err(PathError::Cycle(decode(u)));
            }
            total += self.count(u, to, reach, memo, on_path)?;
        }
        on_path.remove(&v);
        memo.insert(v, total);
        Ok(total)
    }

    /// Paths `from` → `to` passing both `a` and `b`, in either order.
    pub fn paths_via(
        &self,
        from: VertexId,
        a: VertexId,
        b: VertexId,
        to: VertexId,
    ) -> Result<u64, PathError> {
        let ab = self.paths(from, a)? * self.paths(a, b)? * self.paths(b, to)?;
        let ba = self.paths(from, b)? * self.paths(b, a)? * self.paths(a, to)?;
        Ok(ab + ba)
    }
}

pub fn part1(r: &Reactor) -> Result<u64, PathError> {
    r.paths(YOU, OUT)
}

pub fn part2(r: &Reactor) -> Result<u64, PathError> {
    r.paths_via(SVR, DAC, FFT, OUT)
}
