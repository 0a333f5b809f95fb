// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Path lengths with a first-class "no path" case.
//!
//! Distances never rely on IEEE infinity arithmetic. An absent edge or an
//! unreachable pair is [`Distance::Infinite`]; sums involving it stay infinite
//! and never register as an improvement.

use std::cmp::Ordering;
use std::fmt;

/// Length of a path (or weight of an edge).
///
/// `Finite` must hold a finite `f64`; build values from raw floats with
/// [`Distance::from_f64`] to keep that invariant. Ordering places every finite
/// value below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// A reachable distance or a direct edge weight. May be negative.
    Finite(f64),
    /// No path (or no direct edge).
    Infinite,
}

impl Distance {
    /// Distance from a vertex to itself.
    pub const ZERO: Self = Self::Finite(0.0);

    /// Lift a raw float.
    ///
    /// Finite values map to `Finite`, `+∞` maps to `Infinite`. `-∞` and NaN
    /// have no meaning as a weight and return `None`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            Some(Self::Finite(value))
        } else if value.is_infinite() && value.is_sign_positive() {
            Some(Self::Infinite)
        } else {
            None
        }
    }

    /// Returns `true` for `Finite`.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns `true` for `Infinite`.
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// The finite value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Infinite => None,
        }
    }

    /// Add two distances without leaving the domain.
    ///
    /// Any infinite operand yields `Infinite`. A finite sum that overflows
    /// upward becomes `Infinite`; one that overflows downward (only reachable
    /// through negative cycles) saturates at `f64::MIN`.
    pub fn saturating_add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => {
                let sum = a + b;
                if sum.is_finite() {
                    Self::Finite(sum)
                } else if sum > 0.0 {
                    Self::Infinite
                } else {
                    Self::Finite(f64::MIN)
                }
            }
            _ => Self::Infinite,
        }
    }

    /// Returns `true` if `self` is strictly shorter than `current`.
    pub fn improves_on(self, current: Self) -> bool {
        match (self, current) {
            (Self::Finite(candidate), Self::Finite(best)) => candidate < best,
            (Self::Finite(_), Self::Infinite) => true,
            (Self::Infinite, _) => false,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.partial_cmp(b),
            (Self::Finite(_), Self::Infinite) => Some(Ordering::Less),
            (Self::Infinite, Self::Finite(_)) => Some(Ordering::Greater),
            (Self::Infinite, Self::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

/// Finite values serialize as numbers, `Infinite` as the string `"inf"`.
#[cfg(feature = "serde")]
impl serde::Serialize for Distance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Finite(v) => serializer.serialize_f64(*v),
            Self::Infinite => serializer.serialize_str("inf"),
        }
    }
}
