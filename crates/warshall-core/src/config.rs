// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Engine limits and input policy.

/// Default upper bound on the vertex count.
///
/// Snapshots alone hold `order³` distances, so 512 vertices is roughly 2 GiB.
pub const DEFAULT_MAX_VERTICES: usize = 512;

/// How malformed weight cells are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WeightPolicy {
    /// Coerce anything that is not a number to "no edge".
    #[default]
    Lenient,
    /// Reject the whole input on the first malformed cell.
    Strict,
}

/// Tunables for [`PathEngine`](crate::PathEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Largest accepted graph.
    pub max_vertices: usize,
    /// Worker threads per relaxation round. `0` and `1` both mean serial.
    pub workers: usize,
    /// Treatment of malformed weight cells when parsing text input.
    pub weight_policy: WeightPolicy,
}

impl EngineConfig {
    /// Workers actually used for a graph of `order` vertices.
    ///
    /// Never more than one worker per row.
    pub fn effective_workers(&self, order: usize) -> usize {
        self.workers.clamp(1, order.max(1))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            workers: 1,
            weight_policy: WeightPolicy::Lenient,
        }
    }
}
