//! # Graph traversal
//!
//! Anything that can answer "how many vertices" and "who are the neighbors of
//! `v`" implements [`Graph`]. Plain adjacency lists implement it directly; the
//! adapters in [`grid`] present a flat cell array with a stride as one.
//!
//! [`bfs`] and [`bfs_with_previous`] share one traversal, parametrized at
//! compile time by a [`Recorder`] that decides what is kept per vertex.

use std::collections::VecDeque;

pub mod grid;

pub type VertexId = usize;

/// Marks "no vertex", e.g. the predecessor of the source.
pub const INVALID_VERTEX: VertexId = VertexId::MAX;

/// Distance recorded for vertices the search never reached.
pub const UNREACHED: i64 = -1;

pub fn is_valid_vertex(v: VertexId) -> bool {
    v != INVALID_VERTEX
}

/// A container indexable by vertex id that yields neighbor ids.
pub trait Graph {
    type Neighbors<'a>: IntoIterator<Item = VertexId>
    where
        Self: 'a;

    /// Number of vertices; valid ids are `0..len()`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn neighbors(&self, v: VertexId) -> Self::Neighbors<'_>;
}

impl Graph for [Vec<VertexId>] {
    type Neighbors<'a> = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

    fn len(&self) -> usize {
        <[Vec<VertexId>]>::len(self)
    }

    fn neighbors(&self, v: VertexId) -> Self::Neighbors<'_> {
        self[v].iter().copied()
    }
}

impl Graph for Vec<Vec<VertexId>> {
    type Neighbors<'a> = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn neighbors(&self, v: VertexId) -> Self::Neighbors<'_> {
        self.as_slice().neighbors(v)
    }
}

/// What a traversal keeps for every vertex it reaches.
pub trait Recorder {
    type Output;

    fn with_len(len: usize) -> Self;
    fn set_source(&mut self, v: VertexId);
    /// `v` was reached for the first time, from `u`.
    fn reached(&mut self, v: VertexId, u: VertexId);
    fn finish(self) -> Self::Output;
}

/// Hop distances only.
pub struct Distances(Vec<i64>);

impl Recorder for Distances {
    type Output = Vec<i64>;

    fn with_len(len: usize) -> Self {
        Self(vec![UNREACHED; len])
    }
    fn set_source(&mut self, v: VertexId) {
        self.0[v] = 0;
    }
    fn reached(&mut self, v: VertexId, u: VertexId) {
        self.0[v] = self.0[u] + 1;
    }
    fn finish(self) -> Self::Output {
        self.0
    }
}

/// Hop distances plus the predecessor each vertex was reached from.
pub struct DistancesWithPrevious {
    distance: Vec<i64>,
    previous: Vec<VertexId>,
}

impl Recorder for DistancesWithPrevious {
    type Output = (Vec<i64>, Vec<VertexId>);

    fn with_len(len: usize) -> Self {
        Self {
            distance: vec![UNREACHED; len],
            previous: vec![INVALID_VERTEX; len],
        }
    }
    fn set_source(&mut self, v: VertexId) {
        self.distance[v] = 0;
    }
    fn reached(&mut self, v: VertexId, u: VertexId) {
        self.distance[v] = self.distance[u] + 1;
        self.previous[v] = u;
    }
    fn finish(self) -> Self::Output {
        (self.distance, self.previous)
    }
}

/// Breadth-first search from `from`, recording through `R`.
///
/// Every vertex is visited at most once. Panics if an id is out of range.
pub fn bfs_by<G, R>(g: &G, from: VertexId) -> R::Output
where
    G: Graph + ?Sized,
    R: Recorder,
{
    let mut recorder = R::with_len(g.len());
    let mut visited = vec![false; g.len()];
    let mut queue = VecDeque::new();
    recorder.set_source(from);
    visited[from] = true;
    queue.push_back(from);
    while let Some(u) = queue.pop_front() {
        for e in g.neighbors(u) {
            if !visited[e] {
                visited[e] = true;
                recorder.reached(e, u);
                queue.push_back(e);
            }
        }
    }
    recorder.finish()
}

/// Hop distance from `from` to every vertex, [`UNREACHED`] where there is no path.
pub fn bfs<G: Graph + ?Sized>(g: &G, from: VertexId) -> Vec<i64> {
    bfs_by::<G, Distances>(g, from)
}

/// Like [`bfs`], also returning the predecessor of each vertex
/// ([`INVALID_VERTEX`] for the source and unreached vertices).
pub fn bfs_with_previous<G: Graph + ?Sized>(g: &G, from: VertexId) -> (Vec<i64>, Vec<VertexId>) {
    bfs_by::<G, DistancesWithPrevious>(g, from)
}

/// Walks `previous` back from `to` and returns the path in forward order.
///
/// The path starts at the first vertex without a predecessor, which is the
/// source when `to` was reached. Check the distance first for unreached vertices.
pub fn path_to(previous: &[VertexId], to: VertexId) -> Vec<VertexId> {
    let mut path = vec![to];
    let mut v = to;
    while is_valid_vertex(previous[v]) {
        v = previous[v];
        path.push(v);
    }
    path.reverse();
    path
}

/// Appends the edge `from -> to`, growing the list so both ends are valid ids.
pub fn add_edge(g: &mut Vec<Vec<VertexId>>, from: VertexId, to: VertexId) {
    let need = from.max(to) + 1;
    if g.len() < need {
        g.resize_with(need, Vec::new);
    }
    g[from].push(to);
}

pub fn add_edge_undirected(g: &mut Vec<Vec<VertexId>>, a: VertexId, b: VertexId) {
    add_edge(g, a, b);
    add_edge(g, b, a);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle4() -> Vec<Vec<VertexId>> {
        let mut g = vec![];
        for v in 0..4 {
            add_edge(&mut g, v, (v + 1) % 4);
        }
        g
    }

    #[test]
    fn directed_cycle_distances_and_path() {
        let g = cycle4();
        assert_eq!(bfs(&g, 0), vec![0, 1, 2, 3]);
        let (dist, prev) = bfs_with_previous(&g, 0);
        assert_eq!(dist, vec![0, 1, 2, 3]);
        assert_eq!(prev, vec![INVALID_VERTEX, 0, 1, 2]);
        assert_eq!(path_to(&prev, 3), vec![0, 1, 2, 3]);

        // from another source the distances rotate
        assert_eq!(bfs(&g, 2), vec![2, 3, 0, 1]);
    }

    #[test]
    fn disconnected_vertices_stay_unreached() {
        let mut g = vec![];
        add_edge_undirected(&mut g, 0, 1);
        add_edge_undirected(&mut g, 2, 3);
        add_edge(&mut g, 4, 4);
        let (dist, prev) = bfs_with_previous(&g, 0);
        assert_eq!(dist, vec![0, 1, UNREACHED, UNREACHED, UNREACHED]);
        assert!(prev[2..].iter().all(|&p| !is_valid_vertex(p)));
    }

    #[test]
    fn self_loop_keeps_source_at_zero() {
        let mut g = vec![];
        add_edge(&mut g, 0, 0);
        add_edge(&mut g, 0, 1);
        assert_eq!(bfs(&g, 0), vec![0, 1]);
    }

    #[test]
    fn shortest_hop_count_wins() {
        // 0 -> 1 -> 2 -> 3 and a shortcut 0 -> 3
        let mut g = vec![];
        add_edge(&mut g, 0, 1);
        add_edge(&mut g, 1, 2);
        add_edge(&mut g, 2, 3);
        add_edge(&mut g, 0, 3);
        let (dist, prev) = bfs_with_previous(&g, 0);
        assert_eq!(dist[3], 1);
        assert_eq!(path_to(&prev, 3), vec![0, 3]);
    }

    #[test]
    fn slices_are_graphs_too() {
        let g = cycle4();
        let s: &[Vec<VertexId>] = &g;
        assert_eq!(Graph::len(s), 4);
        assert_eq!(bfs(s, 1), vec![3, 0, 1, 2]);
    }
}
