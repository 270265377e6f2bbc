//! Random edge-list generation over the upper triangle of an adjacency matrix.

use rand::Rng;
use std::io::{self, Write};

// ============================================================================
// Pair counting
// ============================================================================

/// Returns `n * (n - 1) / 2`, the number of ordered pairs `(i, j)` with
/// `i < j < n`, and hence the maximum number of edges a single draw can emit.
#[inline]
pub const fn max_edges(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

// ============================================================================
// RandomEdges
// ============================================================================

/// Lazy iterator over the edges of a fresh \(G(n, p)\) draw.
///
/// Walks the strict upper triangle of a conceptual `n x n` adjacency matrix in
/// row-major order (`i` ascending, `j` ascending within each row) and keeps
/// each pair independently with probability `p`. The diagonal is never
/// visited, so no self-loop can appear, and each pair is visited exactly once,
/// so no edge can repeat.
///
/// Nothing is materialized: the matrix exists only as the iteration order, and
/// a random draw is consumed only for the pairs actually visited.
pub struct RandomEdges<R> {
    n: usize,
    p: f64,
    rng: R,
    i: usize,
    j: usize,
}

impl<R: Rng> RandomEdges<R> {
    /// Creates an iterator over a fresh draw on `n` vertices.
    ///
    /// # Panics
    /// Panics in debug builds if `p` is outside `[0, 1]`.
    pub fn new(n: usize, p: f64, rng: R) -> Self {
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
        Self {
            n,
            p,
            rng,
            i: 0,
            j: 1,
        }
    }
}

impl<R: Rng> Iterator for RandomEdges<R> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        while self.i + 1 < self.n {
            while self.j < self.n {
                let pair = (self.i, self.j);
                self.j += 1;
                if self.rng.random_bool(self.p) {
                    return Some(pair);
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

// ============================================================================
// Edge-list output
// ============================================================================

/// Streams a fresh \(G(n, p)\) edge list to `w`, one `i<TAB>j` line per kept
/// pair, and returns the number of lines written.
///
/// Lines appear in row-major upper-triangle order: `i` ascending, `j`
/// ascending within each `i`. `n = 0` and `n = 1` write nothing.
///
/// # Errors
/// Returns an error if writing to `w` fails.
pub fn write_edge_list<W: Write, R: Rng>(
    mut w: W,
    n: usize,
    p: f64,
    rng: &mut R,
) -> io::Result<usize> {
    let mut written = 0;
    for (i, j) in RandomEdges::new(n, p, rng) {
        writeln!(w, "{i}\t{j}")?;
        written += 1;
    }
    Ok(written)
}

// ============================================================================
// Tests
// ============================================================================
