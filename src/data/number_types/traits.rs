//! # Traits
//!
//! The operations that flow computations need from a number type.
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

/// Values in which capacities and flows are expressed.
///
/// Arithmetic is assumed to be exact: the algorithms rely on `x + y - y == x`. Floating point types
/// don't satisfy the `Ord` bound for that reason (amongst others).
///
/// Automatically implemented for all types satisfying the trait's bounds, such as `i64`,
/// `relp_num::Rational64` and `relp_num::RationalBig`.
pub trait FlowNumber:
    Zero + // Additive identity
    Neg<Output=Self> + // Reverse arcs carry negative flow
    Add<Self, Output=Self> +
    AddAssign<Self> +
    Sub<Self, Output=Self> +
    SubAssign<Self> +
    Ord +
    // Practicalities
    Clone +
    Display +
    Debug +
{
    /// Whether this value is strictly larger than zero.
    fn is_positive(&self) -> bool {
        self > &Self::zero()
    }

    /// Whether this value is strictly smaller than zero.
    fn is_negative(&self) -> bool {
        self < &Self::zero()
    }
}
impl<T> FlowNumber for T
where
    T: Zero + Neg<Output=T> + Add<T, Output=T> + AddAssign<T> + Sub<T, Output=T> + SubAssign<T> + Ord + Clone + Display + Debug,
{
}
