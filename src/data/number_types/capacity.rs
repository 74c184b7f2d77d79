//! # Capacities
//!
//! An arc either has a finite capacity or can carry any amount of flow.
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops::Add;

use crate::data::number_types::traits::FlowNumber;

/// Upper bound on the flow through an arc.
///
/// The derived ordering places `Unbounded` above every finite value, which is what the bottleneck
/// computation needs.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Debug, Hash)]
pub enum Capacity<F> {
    /// At most this amount can flow through the arc.
    Finite(F),
    /// Any amount can flow through the arc.
    Unbounded,
}

impl<F: FlowNumber> Capacity<F> {
    /// The capacity of an arc that isn't there.
    #[must_use]
    pub fn zero() -> Self {
        Capacity::Finite(F::zero())
    }

    /// Whether no flow can pass.
    pub fn is_zero(&self) -> bool {
        match self {
            Capacity::Finite(value) => value.is_zero(),
            Capacity::Unbounded => false,
        }
    }

    /// Whether this capacity is a negative finite value, which is never valid.
    pub fn is_negative(&self) -> bool {
        match self {
            Capacity::Finite(value) => value.is_negative(),
            Capacity::Unbounded => false,
        }
    }

    /// The finite value, if there is one.
    pub fn finite(&self) -> Option<&F> {
        match self {
            Capacity::Finite(value) => Some(value),
            Capacity::Unbounded => None,
        }
    }

    /// Whether any amount of flow is allowed.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Capacity::Unbounded)
    }

    /// Capacity that remains when `flow` is already sent over the arc.
    ///
    /// The flow can be negative, in which case flow in the opposite direction can be cancelled and
    /// the residual capacity exceeds the capacity.
    #[must_use]
    pub fn residual(&self, flow: &F) -> Self {
        match self {
            Capacity::Finite(capacity) => Capacity::Finite(capacity.clone() - flow.clone()),
            Capacity::Unbounded => Capacity::Unbounded,
        }
    }

    /// Whether more flow can be sent when `flow` is already sent over the arc.
    pub fn admits_more_than(&self, flow: &F) -> bool {
        match self {
            Capacity::Finite(capacity) => capacity > flow,
            Capacity::Unbounded => true,
        }
    }

    /// Whether `flow` uses all of this capacity.
    pub fn is_saturated_by(&self, flow: &F) -> bool {
        match self {
            Capacity::Finite(capacity) => capacity == flow,
            Capacity::Unbounded => false,
        }
    }

    /// Compare with a finite value.
    pub fn cmp_value(&self, value: &F) -> Ordering {
        match self {
            Capacity::Finite(capacity) => capacity.cmp(value),
            Capacity::Unbounded => Ordering::Greater,
        }
    }
}

impl<F> From<F> for Capacity<F> {
    fn from(value: F) -> Self {
        Capacity::Finite(value)
    }
}

impl<F: FlowNumber> Add for Capacity<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Capacity::Finite(left), Capacity::Finite(right)) => Capacity::Finite(left + right),
            _ => Capacity::Unbounded,
        }
    }
}

impl<F: Display> Display for Capacity<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Finite(value) => value.fmt(f),
            Capacity::Unbounded => f.write_str("inf"),
        }
    }
}
