// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for warshall tools (config, prefs).
//! Keeps front-ends thin; storage lives behind the [`config::ConfigStore`] port.

pub mod config;
pub mod prefs;
