// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved preferences for the warshall command-line front-end.

use serde::{Deserialize, Serialize};
use warshall_core::EngineConfig;

/// Config key the CLI stores its preferences under.
pub const CLI_PREFS_KEY: &str = "warshall-cli";

/// How vertex indices are shown to people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelBase {
    /// First vertex is `1`.
    #[default]
    One,
    /// First vertex is `0`.
    Zero,
}

impl LabelBase {
    /// Offset added to a zero-based index.
    pub fn offset(self) -> usize {
        match self {
            Self::One => 1,
            Self::Zero => 0,
        }
    }
}

/// Preferences persisted between CLI runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliPrefs {
    /// Engine limits and parsing policy.
    pub engine: EngineConfig,
    /// Vertex labelling in rendered output.
    pub labels: LabelBase,
    /// Render one table per relaxation round.
    pub show_iterations: bool,
}

impl Default for CliPrefs {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            labels: LabelBase::One,
            show_iterations: true,
        }
    }
}
