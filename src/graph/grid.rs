//! Grid adapters for maze-like inputs.
//!
//! Each adapter borrows a flat cell slice laid out row by row with a fixed
//! `stride` (row width) and presents it as a [`Graph`] whose vertex ids are
//! cell indices. Traversability is decided by a caller supplied predicate;
//! what the predicate sees differs per adapter.

use super::{Graph, VertexId};

/// 4-neighbor grid; the predicate sees `(from_cell, to_cell)` contents.
///
/// Neighbors are produced left, right, up, down.
pub struct Grid<'d, T, P> {
    data: &'d [T],
    stride: usize,
    passable: P,
}

impl<'d, T, P> Grid<'d, T, P>
where
    P: Fn(&T, &T) -> bool,
{
    pub fn new(data: &'d [T], stride: usize, passable: P) -> Self {
        Self {
            data,
            stride,
            passable,
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    fn rows(&self) -> usize {
        self.data.len() / self.stride
    }

    pub fn to_xy(&self, v: VertexId) -> (usize, usize) {
        (v % self.stride, v / self.stride)
    }

    pub fn from_xy(&self, x: usize, y: usize) -> VertexId {
        x + y * self.stride
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && (x as usize) < self.stride && y >= 0 && (y as usize) < self.rows()
    }

    fn passes(&self, from: VertexId, to: VertexId) -> bool {
        (self.passable)(&self.data[from], &self.data[to])
    }

    /// Cells two steps away in a straight line whose middle cell is blocked
    /// but which are themselves reachable, i.e. a jump through one wall.
    pub fn two_step(&self, v: VertexId) -> Vec<VertexId> {
        let (x, y) = self.to_xy(v);
        let s = self.stride;
        let mut rv = vec![];
        if x > 1 && !self.passes(v, v - 1) && self.passes(v, v - 2) {
            rv.push(v - 2);
        }
        if x + 2 < s && !self.passes(v, v + 1) && self.passes(v, v + 2) {
            rv.push(v + 2);
        }
        if y > 1 && !self.passes(v, v - s) && self.passes(v, v - 2 * s) {
            rv.push(v - 2 * s);
        }
        if y + 2 < self.rows() && !self.passes(v, v + s) && self.passes(v, v + 2 * s) {
            rv.push(v + 2 * s);
        }
        rv
    }

    /// Cells within Manhattan radius `N` (but at least 2 away) that pass the
    /// predicate, paired with their distance.
    pub fn n_step<const N: usize>(&self, v: VertexId) -> Vec<(VertexId, usize)> {
        let (x, y) = self.to_xy(v);
        let n = N as i64;
        let mut rv = vec![];
        for dx in -n..=n {
            for dy in -n..=n {
                let d = (dx.abs() + dy.abs()) as usize;
                let (tx, ty) = (x as i64 + dx, y as i64 + dy);
                if d <= N && d > 1 && self.in_bounds(tx, ty) {
                    let t = self.from_xy(tx as usize, ty as usize);
                    if self.passes(v, t) {
                        rv.push((t, d));
                    }
                }
            }
        }
        rv
    }
}

impl<T, P> Graph for Grid<'_, T, P>
where
    P: Fn(&T, &T) -> bool,
{
    type Neighbors<'a>
        = Vec<VertexId>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let s = self.stride;
        let mut rv = Vec::with_capacity(4);
        if v % s != 0 && self.passes(v, v - 1) {
            rv.push(v - 1);
        }
        if v % s != s - 1 && self.passes(v, v + 1) {
            rv.push(v + 1);
        }
        if v >= s && self.passes(v, v - s) {
            rv.push(v - s);
        }
        if v + s < self.data.len() && self.passes(v, v + s) {
            rv.push(v + s);
        }
        rv
    }
}

/// 4-neighbor grid; the predicate sees `(from_id, to_id)`.
pub struct GridDirect<'d, T, P> {
    data: &'d [T],
    stride: usize,
    passable: P,
}

impl<'d, T, P> GridDirect<'d, T, P>
where
    P: Fn(VertexId, VertexId) -> bool,
{
    pub fn new(data: &'d [T], stride: usize, passable: P) -> Self {
        Self {
            data,
            stride,
            passable,
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn value(&self, v: VertexId) -> &T {
        &self.data[v]
    }
}

impl<T, P> Graph for GridDirect<'_, T, P>
where
    P: Fn(VertexId, VertexId) -> bool,
{
    type Neighbors<'a>
        = Vec<VertexId>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let s = self.stride;
        let ok = &self.passable;
        let mut rv = Vec::with_capacity(4);
        if v % s != 0 && ok(v, v - 1) {
            rv.push(v - 1);
        }
        if v % s != s - 1 && ok(v, v + 1) {
            rv.push(v + 1);
        }
        if v >= s && ok(v, v - s) {
            rv.push(v - s);
        }
        if v + s < self.data.len() && ok(v, v + s) {
            rv.push(v + s);
        }
        rv
    }
}

/// Grid surrounded by a border of impassable cells, so no bounds checks are
/// done; the predicate sees the target id only and must reject the border.
///
/// Neighbors come left, right, up, down, or up, left, right, down
/// ("reading order") after [`GridBorder::reading_order`].
pub struct GridBorder<'d, T, P> {
    data: &'d [T],
    stride: usize,
    passable: P,
    reading_order: bool,
}

impl<'d, T, P> GridBorder<'d, T, P>
where
    P: Fn(VertexId) -> bool,
{
    pub fn new(data: &'d [T], stride: usize, passable: P) -> Self {
        Self {
            data,
            stride,
            passable,
            reading_order: false,
        }
    }

    pub fn reading_order(mut self) -> Self {
        self.reading_order = true;
        self
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn value(&self, v: VertexId) -> &T {
        &self.data[v]
    }
}

impl<T, P> Graph for GridBorder<'_, T, P>
where
    P: Fn(VertexId) -> bool,
{
    type Neighbors<'a>
        = Vec<VertexId>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let s = self.stride;
        let order = if self.reading_order {
            [v - s, v - 1, v + 1, v + s]
        } else {
            [v - 1, v + 1, v - s, v + s]
        };
        order.into_iter().filter(|&t| (self.passable)(t)).collect()
    }
}

/// 4-neighbor grid with fixed slots: left, up, right, down.
///
/// [`Grid4::doors`] keeps closed directions as `None`, which is what
/// direction-aware walkers want; as a [`Graph`] the closed slots are skipped.
pub struct Grid4<'d, T, P> {
    data: &'d [T],
    stride: usize,
    passable: P,
}

impl<'d, T, P> Grid4<'d, T, P>
where
    P: Fn(&T, &T) -> bool,
{
    pub fn new(data: &'d [T], stride: usize, passable: P) -> Self {
        Self {
            data,
            stride,
            passable,
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[T] {
        self.data
    }

    pub fn doors(&self, v: VertexId) -> [Option<VertexId>; 4] {
        let s = self.stride;
        let ok = |t: VertexId| (self.passable)(&self.data[v], &self.data[t]);
        [
            (v % s != 0 && ok(v - 1)).then(|| v - 1),
            (v >= s && ok(v - s)).then(|| v - s),
            (v % s != s - 1 && ok(v + 1)).then(|| v + 1),
            (v + s < self.data.len() && ok(v + s)).then(|| v + s),
        ]
    }
}

impl<T, P> Graph for Grid4<'_, T, P>
where
    P: Fn(&T, &T) -> bool,
{
    type Neighbors<'a>
        = std::iter::Flatten<std::array::IntoIter<Option<VertexId>, 4>>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn neighbors(&self, v: VertexId) -> Self::Neighbors<'_> {
        self.doors(v).into_iter().flatten()
    }
}

/// Square grid with no backing data, `stride * stride` cells; the predicate
/// sees `(from_id, to_id)`.
pub struct GridVirtual<P> {
    stride: usize,
    passable: P,
}

impl<P> GridVirtual<P>
where
    P: Fn(VertexId, VertexId) -> bool,
{
    pub fn new(stride: usize, passable: P) -> Self {
        Self { stride, passable }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl<P> Graph for GridVirtual<P>
where
    P: Fn(VertexId, VertexId) -> bool,
{
    type Neighbors<'a>
        = Vec<VertexId>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.stride * self.stride
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let s = self.stride;
        let ok = &self.passable;
        let mut rv = Vec::with_capacity(4);
        if v % s != 0 && ok(v, v - 1) {
            rv.push(v - 1);
        }
        if v % s != s - 1 && ok(v, v + 1) {
            rv.push(v + 1);
        }
        if v >= s && ok(v, v - s) {
            rv.push(v - s);
        }
        if v + s < self.len() && ok(v, v + s) {
            rv.push(v + s);
        }
        rv
    }
}

/// All eight surrounding cells, no predicate.
pub struct Grid8 {
    len: usize,
    stride: usize,
}

impl Grid8 {
    pub fn new(len: usize, stride: usize) -> Self {
        Self { len, stride }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl Graph for Grid8 {
    type Neighbors<'a>
        = Vec<VertexId>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let s = self.stride;
        let l = v % s != 0;
        let r = v % s != s - 1;
        let u = v >= s;
        let d = v + s < self.len;
        let mut rv = Vec::with_capacity(8);
        if l {
            if u {
                rv.push(v - s - 1);
            }
            rv.push(v - 1);
            if d {
                rv.push(v + s - 1);
            }
        }
        if u {
            rv.push(v - s);
        }
        if d {
            rv.push(v + s);
        }
        if r {
            if u {
                rv.push(v - s + 1);
            }
            rv.push(v + 1);
            if d {
                rv.push(v + s + 1);
            }
        }
        rv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{UNREACHED, bfs, bfs_with_previous, path_to};

    const MAZE: &str = "\
#######
#S..#.#
#.#.#.#
#.#...#
#######";

    fn maze() -> (Vec<u8>, usize) {
        let stride = MAZE.lines().next().map_or(0, str::len);
        (MAZE.bytes().filter(|&b| b != b'\n').collect(), stride)
    }

    #[test]
    fn grid_walks_open_cells() {
        let (cells, stride) = maze();
        let g = Grid::new(&cells, stride, |_, &to| to != b'#');
        let start = g.from_xy(1, 1);
        let (dist, prev) = bfs_with_previous(&g, start);
        let goal = g.from_xy(5, 1);
        assert_eq!(dist[goal], 8);
        let path = path_to(&prev, goal);
        assert_eq!(path.len(), 9);
        assert!(path.iter().all(|&v| cells[v] != b'#'));
        assert_eq!(dist[0], UNREACHED);
        assert_eq!(g.to_xy(goal), (5, 1));
    }

    #[test]
    fn grid_two_step_jumps_single_walls() {
        let (cells, stride) = maze();
        let g = Grid::new(&cells, stride, |_, &to| to != b'#');
        // (3,1) has a wall to the right at (4,1) and open (5,1) behind it
        let v = g.from_xy(3, 1);
        assert_eq!(g.two_step(v), vec![g.from_xy(5, 1)]);
    }

    #[test]
    fn grid_n_step_lists_cells_in_radius() {
        let cells = vec![b'.'; 25];
        let g = Grid::new(&cells, 5, |_, _| true);
        let centre = g.from_xy(2, 2);
        let reach = g.n_step::<2>(centre);
        // radius 2 diamond has 12 cells, minus the 4 at distance 1
        assert_eq!(reach.len(), 8);
        assert!(reach.iter().all(|&(_, d)| d == 2));
        let corner = g.n_step::<2>(0);
        assert_eq!(corner.len(), 3);
    }

    #[test]
    fn grid_direct_uses_ids() {
        let cells = vec![0u8; 9];
        // only allow moves to a larger id
        let g = GridDirect::new(&cells, 3, |from, to| to > from);
        assert_eq!(bfs(&g, 0), vec![0, 1, 2, 1, 2, 3, 2, 3, 4]);
        assert_eq!(*g.value(4), 0);
    }

    #[test]
    fn grid_border_orders() {
        let (cells, stride) = maze();
        let open = |t: VertexId| cells[t] != b'#';
        let v = 3 * stride + 3;
        let g = GridBorder::new(&cells, stride, open);
        assert_eq!(g.neighbors(v), vec![v + 1, v - stride]);
        let ro = GridBorder::new(&cells, stride, open).reading_order();
        assert_eq!(ro.neighbors(v), vec![v - stride, v + 1]);
        assert_eq!(bfs(&ro, stride + 1)[v], 4);
    }

    #[test]
    fn grid4_keeps_slots() {
        let cells = b"ab.cd.".to_vec();
        let g = Grid4::new(&cells, 3, |_, &to| to != b'.');
        assert_eq!(g.doors(0), [None, None, Some(1), Some(3)]);
        assert_eq!(g.doors(4), [Some(3), Some(1), None, None]);
        assert_eq!(g.neighbors(4).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn grid_virtual_is_square() {
        let g = GridVirtual::new(4, |_, _| true);
        assert_eq!(g.len(), 16);
        let dist = bfs(&g, 0);
        assert_eq!(dist[15], 6);
        assert!(dist.iter().all(|&d| d >= 0));
    }

    #[test]
    fn grid8_counts_edges_and_corners() {
        let g = Grid8::new(12, 4);
        assert_eq!(g.neighbors(0), vec![4, 1, 5]);
        assert_eq!(g.neighbors(5).len(), 8);
        assert_eq!(g.neighbors(11).len(), 3);
        assert_eq!(bfs(&g, 0)[11], 3);
    }
}
