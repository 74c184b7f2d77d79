//! # Number types
//!
//! Capacities and flows are exact. The algorithms in this crate are written against the
//! `FlowNumber` trait, so that they can be tested with machine integers while the same code runs
//! without adaptation on the arbitrary precision rationals of `relp_num`.
//!
//! Capacities can be unbounded. That is not expressed with a large sentinel value but with the
//! `Capacity` type, such that residual capacities are always computed exactly.
pub mod capacity;
pub mod traits;
