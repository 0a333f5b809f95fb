// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! All-pairs shortest paths over a dense directed graph.
//!
//! `warshall-core` runs the Floyd–Warshall relaxation with a next-hop table,
//! keeps a snapshot of the distance matrix after every round, and rebuilds an
//! explicit shortest path for every reachable ordered pair.
//!
//! # Usage
//!
//! ```
//! use warshall_core::{parse_adjacency, Distance, PathEngine, WeightPolicy};
//!
//! let adjacency = parse_adjacency("0 4 10\ninf 0 3\ninf inf 0\n", WeightPolicy::Lenient)?;
//! let solution = PathEngine::default().solve(&adjacency)?;
//!
//! assert_eq!(solution.distances[(0, 2)], Distance::Finite(7.0));
//! assert_eq!(solution.snapshots.len(), 3);
//! assert_eq!(solution.paths[1].path, vec![0, 1, 2]);
//! # Ok::<(), warshall_core::EngineError>(())
//! ```
//!
//! # Known Limitations
//!
//! Negative edge weights are allowed; negative cycles are not detected. Pairs
//! affected by one get whatever the `order` bounded rounds produce, and any
//! path whose next-hop chain loops is omitted from the output.
//!
//! Memory is `O(order³)` because every round is snapshotted eagerly. The
//! [`EngineConfig::max_vertices`] limit bounds it.
#![forbid(unsafe_code)]

mod config;
mod distance;
mod engine;
mod error;
mod matrix;
mod parse;
mod path;
mod shard;

pub use config::{EngineConfig, WeightPolicy, DEFAULT_MAX_VERTICES};
pub use distance::Distance;
pub use engine::{InitialState, IterationSnapshot, PathEngine, RelaxedState, Solution};
pub use error::EngineError;
pub use matrix::{AdjacencyMatrix, DistanceMatrix, NextHopMatrix, SquareMatrix};
pub use parse::{adjacency_from_weights, parse_adjacency, parse_vertex_count, parse_weight};
pub use path::PathRecord;
