// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Dense square matrices stored row-major.

use std::ops::{Index, IndexMut};

use crate::distance::Distance;
use crate::error::EngineError;

/// Edge weights supplied by the caller. The diagonal is ignored.
pub type AdjacencyMatrix = SquareMatrix<Distance>;
/// Best-known distances between every ordered pair.
pub type DistanceMatrix = SquareMatrix<Distance>;
/// `next[i][j]`: vertex after `i` on the best-known path to `j`, `None` when
/// `j` is unreachable from `i` (and on the diagonal).
pub type NextHopMatrix = SquareMatrix<Option<usize>>;

/// An `order × order` grid in a single row-major allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    order: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Matrix with every cell set to `value`.
    pub fn filled(order: usize, value: T) -> Self {
        Self {
            order,
            cells: vec![value; order * order],
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Build from explicit rows.
    ///
    /// The row count is the order; every row must have exactly that many
    /// cells. Zero rows is a valid (empty) matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, EngineError> {
        let order = rows.len();
        let mut cells = Vec::with_capacity(order * order);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != order {
                return Err(EngineError::DimensionMismatch {
                    row,
                    expected: order,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self { order, cells })
    }

    /// Number of vertices (rows, columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns `true` for the 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Cell `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.order && col < self.order {
            self.cells.get(row * self.order + col)
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= order`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.order;
        &self.cells[start..start + self.order]
    }

    /// Rows in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.order.max(1))
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.order, "column {col} out of range for order {}", self.order);
        &self.cells[row * self.order + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.order, "column {col} out of range for order {}", self.order);
        &mut self.cells[row * self.order + col]
    }
}

/// Serializes as a sequence of rows.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SquareMatrix<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.order))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
