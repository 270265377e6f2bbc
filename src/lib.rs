//! # G(n, p) edge-list generator
//!
//! A small library (and CLI) that draws a random graph on `n` vertices by
//! flipping an independent coin for every vertex pair, and emits the result
//! as a tab-separated edge list.
//!
//! Each pair `(i, j)` with `0 <= i < j < n` is kept with probability `p`
//! (0.5 by default). Pairs are visited in row-major upper-triangle order, so
//! the output is lexicographically sorted, free of duplicates, and free of
//! self-loops by construction.
//!
//! ## Quick Start
//!
//! ```
//! use gnp::graph::RandomEdges;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let rng = SmallRng::seed_from_u64(1);
//! let edges: Vec<(usize, usize)> = RandomEdges::new(6, 0.5, rng).collect();
//! assert!(edges.iter().all(|&(i, j)| i < j && j < 6));
//! ```
//!
//! ## Writing Directly to a Sink
//!
//! ```
//! use gnp::graph::write_edge_list;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut buf = Vec::new();
//! let lines = write_edge_list(&mut buf, 10, 0.5, &mut rng).unwrap();
//! assert!(lines <= gnp::graph::max_edges(10));
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Upper-triangle pair traversal, random edge iteration, and
//!   edge-list output.
//! - [`cli`]: Argument parsing and the `InvalidInput` error type.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod cli;
pub mod graph;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::cli::{parse_args, InvalidInput, Options, DEFAULT_EDGE_PROBABILITY};
    pub use crate::graph::{max_edges, write_edge_list, RandomEdges};
}
