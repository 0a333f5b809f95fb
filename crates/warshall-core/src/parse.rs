// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Adjacency input from text and from raw floats.
//!
//! Text format: one row per line, cells separated by whitespace and/or commas.
//! Blank lines and lines starting with `#` are skipped. An optional
//! `n = <count>` line before the first row declares the vertex count.
//!
//! ```text
//! # three vertices
//! n = 3
//! 0    4    10
//! inf  0    3
//! inf  inf  0
//! ```

use tracing::warn;

use crate::config::WeightPolicy;
use crate::distance::Distance;
use crate::error::EngineError;
use crate::matrix::{AdjacencyMatrix, SquareMatrix};

/// Parse one cell.
///
/// `inf` / `infinity` (any case) mean "no edge". Numbers must be finite;
/// anything else (including `nan` and `-inf`) returns `None`.
pub fn parse_weight(token: &str) -> Option<Distance> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("inf") || token.eq_ignore_ascii_case("infinity") {
        return Some(Distance::Infinite);
    }
    token.parse::<f64>().ok().and_then(Distance::from_f64)
}

/// Parse a declared vertex count. Must be a positive integer.
pub fn parse_vertex_count(token: &str) -> Result<usize, EngineError> {
    let token = token.trim();
    token
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| EngineError::InvalidVertexCount {
            token: token.to_owned(),
        })
}

/// Parse a whole adjacency matrix from text. See the module docs for the format.
pub fn parse_adjacency(text: &str, policy: WeightPolicy) -> Result<AdjacencyMatrix, EngineError> {
    let mut declared = None;
    let mut rows: Vec<Vec<&str>> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if rows.is_empty() && declared.is_none() {
            if let Some(count) = header_value(line) {
                declared = Some(parse_vertex_count(count)?);
                continue;
            }
        }
        rows.push(
            line.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .collect(),
        );
    }

    if let Some(declared) = declared {
        if declared != rows.len() {
            return Err(EngineError::VertexCountMismatch {
                declared,
                rows: rows.len(),
            });
        }
    }

    let order = rows.len();
    let mut cells = Vec::with_capacity(order);
    for (row, tokens) in rows.into_iter().enumerate() {
        if tokens.len() != order {
            return Err(EngineError::DimensionMismatch {
                row,
                expected: order,
                found: tokens.len(),
            });
        }
        let parsed = tokens
            .into_iter()
            .enumerate()
            .map(|(col, token)| coerce(parse_weight(token), row, col, token, policy))
            .collect::<Result<Vec<_>, _>>()?;
        cells.push(parsed);
    }
    SquareMatrix::from_rows(cells)
}

/// Build an adjacency matrix from raw floats.
///
/// `f64::INFINITY` means "no edge". NaN and `-∞` are malformed and handled by
/// `policy`.
pub fn adjacency_from_weights(
    rows: &[Vec<f64>],
    policy: WeightPolicy,
) -> Result<AdjacencyMatrix, EngineError> {
    let mut cells = Vec::with_capacity(rows.len());
    for (row, values) in rows.iter().enumerate() {
        let parsed = values
            .iter()
            .enumerate()
            .map(|(col, &v)| coerce(Distance::from_f64(v), row, col, &v.to_string(), policy))
            .collect::<Result<Vec<_>, _>>()?;
        cells.push(parsed);
    }
    SquareMatrix::from_rows(cells)
}

fn header_value(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('n').or_else(|| line.strip_prefix('N'))?;
    rest.trim_start().strip_prefix('=')
}

fn coerce(
    parsed: Option<Distance>,
    row: usize,
    col: usize,
    token: &str,
    policy: WeightPolicy,
) -> Result<Distance, EngineError> {
    match (parsed, policy) {
        (Some(weight), _) => Ok(weight),
        (None, WeightPolicy::Lenient) => {
            warn!(row, col, token, "malformed weight treated as no edge");
            Ok(Distance::Infinite)
        }
        (None, WeightPolicy::Strict) => Err(EngineError::MalformedWeight {
            row,
            col,
            token: token.to_owned(),
        }),
    }
}
