// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Construction errors surfaced to callers.

/// Errors raised while building the engine's input.
///
/// Relaxation and path reconstruction never fail: unreachable pairs are
/// omitted, and negative cycles are not detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A declared vertex count was not a positive integer.
    #[error("[INVALID_VERTEX_COUNT] vertex count must be a positive integer, got `{token}`")]
    InvalidVertexCount {
        /// The offending text.
        token: String,
    },
    /// A declared vertex count disagrees with the rows supplied.
    #[error("[VERTEX_COUNT_MISMATCH] declared {declared} vertices but found {rows} rows")]
    VertexCountMismatch {
        /// Count from the header.
        declared: usize,
        /// Rows actually present.
        rows: usize,
    },
    /// A row does not have one cell per vertex.
    #[error("[DIMENSION_MISMATCH] row {row} has {found} cells, expected {expected}")]
    DimensionMismatch {
        /// Zero-based row index.
        row: usize,
        /// Expected cell count (the matrix order).
        expected: usize,
        /// Cells actually present.
        found: usize,
    },
    /// A cell is neither a finite number nor the infinity marker (strict policy only).
    #[error("[MALFORMED_WEIGHT] cell ({row}, {col}) has malformed weight `{token}`")]
    MalformedWeight {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending text.
        token: String,
    },
    /// The graph is larger than the configured limit.
    #[error("[VERTEX_LIMIT_EXCEEDED] {order} vertices exceeds the limit of {max}")]
    VertexLimitExceeded {
        /// Vertices in the input.
        order: usize,
        /// Configured maximum.
        max: usize,
    },
}
