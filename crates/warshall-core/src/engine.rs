// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The all-pairs shortest-path engine.
//!
//! Three phases, each a distinct type so results cannot be observed early:
//!
//! ```text
//! AdjacencyMatrix ──initialize──▶ InitialState ──relax──▶ RelaxedState ──▶ Solution
//! ```
//!
//! Relaxation runs exactly `order` rounds with vertex `k` as the fixed pivot
//! of round `k`, and snapshots the whole distance matrix after each round.

use tracing::{debug, debug_span};

use crate::config::EngineConfig;
use crate::distance::Distance;
use crate::error::EngineError;
use crate::matrix::{AdjacencyMatrix, DistanceMatrix, NextHopMatrix};
use crate::path::{self, PathRecord};
use crate::shard;

/// Distance matrix as it stood after one relaxation round.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IterationSnapshot {
    /// Zero-based pivot vertex of the round.
    pub round: usize,
    /// Entries the round shortened.
    pub improvements: usize,
    /// Deep copy of the distances after the round.
    pub distances: DistanceMatrix,
}

/// Everything a display layer needs from one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final shortest distances.
    pub distances: DistanceMatrix,
    /// One snapshot per round, in round order.
    pub snapshots: Vec<IterationSnapshot>,
    /// One record per reachable ordered pair, row-major.
    pub paths: Vec<PathRecord>,
}

/// Entry point: validates input against its [`EngineConfig`] and seeds the
/// distance and next-hop tables.
#[derive(Debug, Clone, Default)]
pub struct PathEngine {
    config: EngineConfig,
}

impl PathEngine {
    /// Engine with the given limits.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed distances and next hops from `adjacency`.
    ///
    /// The diagonal becomes 0 with no next hop whatever the input says. Every
    /// finite off-diagonal weight is a direct edge.
    pub fn initialize(&self, adjacency: &AdjacencyMatrix) -> Result<InitialState, EngineError> {
        let order = adjacency.order();
        if order > self.config.max_vertices {
            return Err(EngineError::VertexLimitExceeded {
                order,
                max: self.config.max_vertices,
            });
        }

        let mut distances = DistanceMatrix::filled(order, Distance::Infinite);
        let mut next_hops = NextHopMatrix::filled(order, None);
        for source in 0..order {
            for target in 0..order {
                if source == target {
                    distances[(source, target)] = Distance::ZERO;
                    continue;
                }
                let weight = adjacency[(source, target)];
                if weight.is_finite() {
                    distances[(source, target)] = weight;
                    next_hops[(source, target)] = Some(target);
                }
            }
        }

        Ok(InitialState {
            distances,
            next_hops,
            workers: self.config.effective_workers(order),
        })
    }

    /// Initialize, relax and reconstruct in one call.
    pub fn solve(&self, adjacency: &AdjacencyMatrix) -> Result<Solution, EngineError> {
        let span = debug_span!("solve", order = adjacency.order());
        let _guard = span.enter();

        let relaxed = self.initialize(adjacency)?.relax();
        let solution = relaxed.into_solution();
        debug!(paths = solution.paths.len(), "solve complete");
        Ok(solution)
    }
}

/// Tables after initialization, before any round has run.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialState {
    distances: DistanceMatrix,
    next_hops: NextHopMatrix,
    workers: usize,
}

impl InitialState {
    /// Seeded distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Seeded next hops.
    pub fn next_hops(&self) -> &NextHopMatrix {
        &self.next_hops
    }

    /// Run all `order` rounds. Never exits early.
    pub fn relax(self) -> RelaxedState {
        let Self {
            mut distances,
            mut next_hops,
            workers,
        } = self;
        let order = distances.order();
        let mut snapshots = Vec::with_capacity(order);

        for round in 0..order {
            let improvements = shard::relax_round(round, &mut distances, &mut next_hops, workers);
            debug!(round, improvements, workers, "relaxation round complete");
            snapshots.push(IterationSnapshot {
                round,
                improvements,
                distances: distances.clone(),
            });
        }

        RelaxedState {
            distances,
            next_hops,
            snapshots,
        }
    }
}

/// Tables after every round has run.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxedState {
    distances: DistanceMatrix,
    next_hops: NextHopMatrix,
    snapshots: Vec<IterationSnapshot>,
}

impl RelaxedState {
    /// Final distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Final next hops.
    pub fn next_hops(&self) -> &NextHopMatrix {
        &self.next_hops
    }

    /// Per-round snapshots, in round order.
    pub fn snapshots(&self) -> &[IterationSnapshot] {
        &self.snapshots
    }

    /// Shortest path for one pair. `None` for the diagonal, for out-of-range
    /// vertices and for unreachable pairs.
    pub fn path(&self, source: usize, target: usize) -> Option<PathRecord> {
        path::record(&self.distances, &self.next_hops, source, target)
    }

    /// Records for every reachable ordered pair, row-major, diagonal skipped.
    pub fn reconstruct_all_paths(&self) -> Vec<PathRecord> {
        path::all_records(&self.distances, &self.next_hops)
    }

    /// Reconstruct all paths and package the results.
    pub fn into_solution(self) -> Solution {
        let paths = self.reconstruct_all_paths();
        Solution {
            distances: self.distances,
            snapshots: self.snapshots,
            paths,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::matrix::SquareMatrix;

    fn d(v: f64) -> Distance {
        Distance::Finite(v)
    }

    #[test]
    fn initialize_zeroes_diagonal_and_seeds_direct_edges() {
        let inf = Distance::Infinite;
        let adjacency =
            SquareMatrix::from_rows(vec![vec![d(9.0), d(2.0)], vec![inf, inf]]).unwrap();
        let state = PathEngine::default().initialize(&adjacency).unwrap();

        assert_eq!(state.distances()[(0, 0)], Distance::ZERO);
        assert_eq!(state.distances()[(1, 1)], Distance::ZERO);
        assert_eq!(state.distances()[(0, 1)], d(2.0));
        assert_eq!(state.distances()[(1, 0)], inf);
        assert_eq!(state.next_hops()[(0, 1)], Some(1));
        assert_eq!(state.next_hops()[(1, 0)], None);
        assert_eq!(state.next_hops()[(0, 0)], None);
    }

    #[test]
    fn vertex_limit_is_enforced() {
        let engine = PathEngine::new(EngineConfig {
            max_vertices: 2,
            ..EngineConfig::default()
        });
        let adjacency = SquareMatrix::filled(3, Distance::Infinite);
        assert_eq!(
            engine.initialize(&adjacency).unwrap_err(),
            EngineError::VertexLimitExceeded { order: 3, max: 2 }
        );
    }

    #[test]
    fn empty_graph_solves_to_empty_outputs() {
        let adjacency: AdjacencyMatrix = SquareMatrix::from_rows(Vec::new()).unwrap();
        let solution = PathEngine::default().solve(&adjacency).unwrap();
        assert!(solution.distances.is_empty());
        assert!(solution.snapshots.is_empty());
        assert!(solution.paths.is_empty());
    }

    #[test]
    fn single_vertex_has_one_snapshot_and_no_paths() {
        let adjacency = SquareMatrix::filled(1, d(5.0));
        let solution = PathEngine::default().solve(&adjacency).unwrap();
        assert_eq!(solution.snapshots.len(), 1);
        assert_eq!(solution.distances[(0, 0)], Distance::ZERO);
        assert!(solution.paths.is_empty());
    }

    #[test]
    fn path_lookup_handles_out_of_range_and_diagonal() {
        let adjacency =
            SquareMatrix::from_rows(vec![vec![d(0.0), d(1.0)], vec![d(1.0), d(0.0)]]).unwrap();
        let relaxed = PathEngine::default().initialize(&adjacency).unwrap().relax();
        assert!(relaxed.path(0, 0).is_none());
        assert!(relaxed.path(0, 5).is_none());
        assert_eq!(relaxed.path(1, 0).unwrap().path, vec![1, 0]);
    }
}
