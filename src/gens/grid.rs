use super::*;

/// Flow network over the pixels of a `width x height` image.
///
/// Pixel `(x, y)` is vertex `width * y + x + 1`; the source is vertex `0` and the sink is
/// vertex `width * height + 1`. Every pixel has an arc to each of its (up to four) neighbours,
/// an arc from the source and an arc into the sink. After solving, the pixels on the source
/// side of the minimum cut form the foreground.
///
/// ```
/// use preflow::{gens::*, prelude::*};
///
/// let grid = GridNetwork::new(2, 1).unwrap();
/// // the left pixel prefers the source, the right one the sink
/// let edges = grid.edges(|_, _| 1u32, |u| if u == 1 { 5 } else { 0 }, |u| if u == 2 { 5 } else { 0 });
///
/// let mut solver = PushRelabel::<u32>::new(grid.number_of_nodes(), edges).unwrap();
/// assert_eq!(solver.max_flow(), 1);
/// assert_eq!(grid.mask(solver.min_cut()), vec![true, false]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridNetwork {
    width: u32,
    height: u32,
}

impl GridNetwork {
    /// Creates a grid of `width x height` pixels.
    /// Returns `None` if the grid is empty or its vertices do not fit into [`Node`].
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        width.checked_mul(height)?.checked_add(2)?;
        Some(Self { width, height })
    }

    /// Width of the grid in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the grid in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels
    pub fn number_of_pixels(&self) -> NumNodes {
        self.width * self.height
    }

    /// Returns the vertex of pixel `(x, y)`.
    /// ** Panics (in debug builds) if the pixel is outside of the grid **
    pub fn vertex_of(&self, x: u32, y: u32) -> Node {
        debug_assert!(x < self.width && y < self.height);
        self.width * y + x + 1
    }

    /// Returns the pixel `(x, y)` of a vertex or `None` if the vertex is a terminal
    pub fn pixel_of(&self, u: Node) -> Option<(u32, u32)> {
        if u == 0 || u > self.number_of_pixels() {
            return None;
        }

        let idx = u - 1;
        Some((idx % self.width, idx / self.width))
    }

    /// Emits the edges of the network. Per pixel in row-major order, these are the arcs to the
    /// right, left, lower and upper neighbour (if present), followed by the arc from the source
    /// and the arc into the sink.
    ///
    /// Capacities are computed by the supplied closures, all of which receive vertices:
    /// `neighbour(u, v)` for the arc `u -> v` between pixels, `source(u)` for the arc
    /// `source -> u` and `sink(u)` for the arc `u -> sink`.
    pub fn edges<C, N, S, T>(
        &self,
        mut neighbour: N,
        mut source: S,
        mut sink: T,
    ) -> Vec<CapacitatedEdge<C>>
    where
        C: Capacity,
        N: FnMut(Node, Node) -> C,
        S: FnMut(Node) -> C,
        T: FnMut(Node) -> C,
    {
        let (w, h) = (self.width, self.height);
        let mut edges = Vec::with_capacity(6 * self.number_of_pixels() as usize);

        for y in 0..h {
            for x in 0..w {
                let u = self.vertex_of(x, y);

                let neighbours = [
                    (x + 1 < w).then(|| u + 1),
                    (x > 0).then(|| u - 1),
                    (y + 1 < h).then(|| u + w),
                    (y > 0).then(|| u - w),
                ];
                for v in neighbours.into_iter().flatten() {
                    edges.push(CapacitatedEdge::new(u, v, neighbour(u, v)));
                }

                edges.push(CapacitatedEdge::new(self.source(), u, source(u)));
                edges.push(CapacitatedEdge::new(u, self.sink(), sink(u)));
            }
        }

        edges
    }

    /// Turns the source side of a cut into a row-major foreground mask
    pub fn mask(&self, cut: &[Node]) -> Vec<bool> {
        let mut mask = vec![false; self.number_of_pixels() as usize];
        for &u in cut {
            if self.pixel_of(u).is_some() {
                mask[u as usize - 1] = true;
            }
        }
        mask
    }
}

impl GraphNodeOrder for GridNetwork {
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_pixels() + 2
    }
}

impl Terminals for GridNetwork {}
