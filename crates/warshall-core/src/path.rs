// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shortest-path reconstruction from the next-hop table.

use tracing::warn;

use crate::distance::Distance;
use crate::matrix::{DistanceMatrix, NextHopMatrix};

/// Shortest path for one ordered pair of distinct vertices.
///
/// Indices are zero-based; relabel at the display layer with
/// [`PathRecord::describe`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathRecord {
    /// First vertex of the path.
    pub source: usize,
    /// Last vertex of the path.
    pub target: usize,
    /// Every vertex visited, `source` first and `target` last.
    pub path: Vec<usize>,
    /// Total weight along `path`.
    pub distance: Distance,
}

impl PathRecord {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Render the vertex sequence as `a -> b -> c`, offsetting every label by
    /// `base` (pass `1` for one-based labels).
    pub fn describe(&self, base: usize) -> String {
        self.path
            .iter()
            .map(|v| (v + base).to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Follow next hops from `source` toward `target`.
///
/// Returns `None` when the pair is unreachable, when a hop is missing along
/// the way, or when the walk exceeds `order` vertices (a cyclic table, which
/// only negative cycles can produce).
pub(crate) fn trace(next_hops: &NextHopMatrix, source: usize, target: usize) -> Option<Vec<usize>> {
    next_hops.get(source, target).copied().flatten()?;

    let limit = next_hops.order();
    let mut path = vec![source];
    let mut cursor = source;
    while cursor != target {
        let Some(hop) = next_hops.get(cursor, target).copied().flatten() else {
            warn!(source, target, cursor, "next-hop chain broken; pair omitted");
            return None;
        };
        cursor = hop;
        path.push(cursor);
        if path.len() > limit {
            warn!(source, target, "next-hop chain cycles; pair omitted");
            return None;
        }
    }
    Some(path)
}

/// Build the record for one pair, or `None` for the diagonal and
/// unreachable pairs.
pub(crate) fn record(
    distances: &DistanceMatrix,
    next_hops: &NextHopMatrix,
    source: usize,
    target: usize,
) -> Option<PathRecord> {
    if source == target {
        return None;
    }
    let distance = *distances.get(source, target)?;
    let path = trace(next_hops, source, target)?;
    Some(PathRecord {
        source,
        target,
        path,
        distance,
    })
}

/// Records for every reachable ordered pair, row-major, diagonal skipped.
pub(crate) fn all_records(distances: &DistanceMatrix, next_hops: &NextHopMatrix) -> Vec<PathRecord> {
    let order = next_hops.order();
    (0..order)
        .flat_map(|source| (0..order).map(move |target| (source, target)))
        .filter_map(|(source, target)| record(distances, next_hops, source, target))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::matrix::SquareMatrix;

    #[test]
    fn trace_walks_hops_in_order() {
        let next = SquareMatrix::from_rows(vec![
            vec![None, Some(1), Some(1)],
            vec![None, None, Some(2)],
            vec![None, None, None],
        ])
        .unwrap();
        assert_eq!(trace(&next, 0, 2), Some(vec![0, 1, 2]));
        assert_eq!(trace(&next, 2, 0), None);
    }

    #[test]
    fn trace_gives_up_on_cycles() {
        // 0 -> 1 -> 0 -> ... never reaches 2.
        let next = SquareMatrix::from_rows(vec![
            vec![None, Some(1), Some(1)],
            vec![Some(0), None, Some(0)],
            vec![None, None, None],
        ])
        .unwrap();
        assert_eq!(trace(&next, 0, 2), None);
    }

    #[test]
    fn trace_gives_up_on_broken_chain() {
        let next = SquareMatrix::from_rows(vec![
            vec![None, Some(1), Some(1)],
            vec![None, None, None],
            vec![None, None, None],
        ])
        .unwrap();
        assert_eq!(trace(&next, 0, 2), None);
    }

    #[test]
    fn describe_relabels() {
        let rec = PathRecord {
            source: 0,
            target: 2,
            path: vec![0, 1, 2],
            distance: Distance::Finite(7.0),
        };
        assert_eq!(rec.describe(1), "1 -> 2 -> 3");
        assert_eq!(rec.describe(0), "0 -> 1 -> 2");
        assert_eq!(rec.hops(), 2);
    }
}
