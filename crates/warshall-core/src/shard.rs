// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One relaxation round, serial or split across row shards.
//!
//! Round `k` only reads row `k` and column `k`. Neither changes during the
//! round: `dist[k][k]` stays 0 and the diagonal is never rewritten, so routing
//! `k` through itself is a no-op. Each shard therefore owns a contiguous block
//! of rows outright and reads a private copy of row `k`; column `k` lives in
//! the shard's own rows. Rounds themselves remain strictly sequential.

use crate::distance::Distance;
use crate::matrix::{DistanceMatrix, NextHopMatrix};

/// Relax every pair through `pivot`. Returns the number of improved entries.
pub(crate) fn relax_round(
    pivot: usize,
    distances: &mut DistanceMatrix,
    next_hops: &mut NextHopMatrix,
    workers: usize,
) -> usize {
    let order = distances.order();
    if order == 0 {
        return 0;
    }
    let pivot_row = distances.row(pivot).to_vec();
    let dist_cells = distances.as_mut_slice();
    let hop_cells = next_hops.as_mut_slice();

    if workers <= 1 {
        return relax_rows(0, order, pivot, &pivot_row, dist_cells, hop_cells);
    }

    let rows_per_shard = order.div_ceil(workers);
    let shard_len = rows_per_shard * order;
    let shards: Vec<_> = dist_cells
        .chunks_mut(shard_len)
        .zip(hop_cells.chunks_mut(shard_len))
        .enumerate()
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = shards
            .into_iter()
            .map(|(shard, (dist_block, hop_block))| {
                let pivot_row = &pivot_row;
                s.spawn(move || {
                    relax_rows(
                        shard * rows_per_shard,
                        order,
                        pivot,
                        pivot_row,
                        dist_block,
                        hop_block,
                    )
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(improved) => improved,
                Err(e) => std::panic::resume_unwind(e),
            })
            .sum()
    })
}

/// Relax a block of whole rows, the first of which is vertex `first_row`.
fn relax_rows(
    first_row: usize,
    order: usize,
    pivot: usize,
    pivot_row: &[Distance],
    dist_block: &mut [Distance],
    hop_block: &mut [Option<usize>],
) -> usize {
    let mut improved = 0;
    for (offset, (dist_row, hop_row)) in dist_block
        .chunks_mut(order)
        .zip(hop_block.chunks_mut(order))
        .enumerate()
    {
        let source = first_row + offset;
        if source == pivot {
            continue;
        }
        let via = dist_row[pivot];
        if via.is_infinite() {
            continue;
        }
        let hop = hop_row[pivot];

        for (target, ((cell, next), &tail)) in dist_row
            .iter_mut()
            .zip(hop_row.iter_mut())
            .zip(pivot_row)
            .enumerate()
        {
            if target == source {
                continue;
            }
            let candidate = via.saturating_add(tail);
            if candidate.improves_on(*cell) {
                *cell = candidate;
                *next = hop;
                improved += 1;
            }
        }
    }
    improved
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::matrix::SquareMatrix;

    fn chain() -> (DistanceMatrix, NextHopMatrix) {
        let inf = Distance::Infinite;
        let d = |v: f64| Distance::Finite(v);
        let distances = SquareMatrix::from_rows(vec![
            vec![d(0.0), d(4.0), d(10.0)],
            vec![inf, d(0.0), d(3.0)],
            vec![inf, inf, d(0.0)],
        ])
        .unwrap();
        let next_hops = SquareMatrix::from_rows(vec![
            vec![None, Some(1), Some(2)],
            vec![None, None, Some(2)],
            vec![None, None, None],
        ])
        .unwrap();
        (distances, next_hops)
    }

    #[test]
    fn round_through_middle_vertex_shortens_outer_pair() {
        let (mut distances, mut next_hops) = chain();
        assert_eq!(relax_round(0, &mut distances, &mut next_hops, 1), 0);
        assert_eq!(relax_round(1, &mut distances, &mut next_hops, 1), 1);
        assert_eq!(distances[(0, 2)], Distance::Finite(7.0));
        assert_eq!(next_hops[(0, 2)], Some(1));
    }

    #[test]
    fn sharded_round_matches_serial_round() {
        let (mut serial_d, mut serial_h) = chain();
        let (mut sharded_d, mut sharded_h) = chain();
        for pivot in 0..3 {
            let a = relax_round(pivot, &mut serial_d, &mut serial_h, 1);
            let b = relax_round(pivot, &mut sharded_d, &mut sharded_h, 2);
            assert_eq!(a, b);
        }
        assert_eq!(serial_d, sharded_d);
        assert_eq!(serial_h, sharded_h);
    }

    #[test]
    fn diagonal_is_never_rewritten() {
        let d = |v: f64| Distance::Finite(v);
        let mut distances =
            SquareMatrix::from_rows(vec![vec![d(0.0), d(1.0)], vec![d(-5.0), d(0.0)]]).unwrap();
        let mut next_hops =
            SquareMatrix::from_rows(vec![vec![None, Some(1)], vec![Some(0), None]]).unwrap();
        relax_round(0, &mut distances, &mut next_hops, 1);
        relax_round(1, &mut distances, &mut next_hops, 1);
        assert_eq!(distances[(0, 0)], Distance::ZERO);
        assert_eq!(distances[(1, 1)], Distance::ZERO);
        assert_eq!(next_hops[(0, 0)], None);
    }
}
