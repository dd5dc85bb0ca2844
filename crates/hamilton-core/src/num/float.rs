// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Solver Float Trait
//!
//! Edge weights and tour costs are floating point values. A pair of vertices
//! without an edge carries the weight `+∞`, which keeps the dense weight
//! matrix a single flat buffer of `T` and lets sums over missing edges
//! saturate to `+∞` on their own.
//!
//! `SolverFloat` collects the bounds the solver needs into a single alias and
//! adds a few helpers that name the operations the bounding code relies on.
//! It is implemented for every type satisfying the bounds, so `f32` and `f64`
//! both qualify.

use num_traits::Float;

/// A trait alias for the floating point types usable as edge weights.
///
/// # Note
///
/// Only `+∞` means "no edge". Negative weights and NaN are accepted by the
/// model but make the bounds used during search meaningless.
pub trait SolverFloat:
    Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// The weight of an absent edge.
    #[inline(always)]
    fn unreachable() -> Self {
        Self::infinity()
    }

    /// Returns `true` unless `self` is the absent-edge weight `+∞`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hamilton_core::num::float::SolverFloat;
    ///
    /// assert!(3.5f64.is_reachable());
    /// assert!(!f64::INFINITY.is_reachable());
    /// ```
    #[inline(always)]
    fn is_reachable(self) -> bool {
        self != Self::infinity()
    }

    /// Returns `self / 2`.
    #[inline(always)]
    fn half(self) -> Self {
        self / (Self::one() + Self::one())
    }
}

impl<T> SolverFloat for T where
    T: Float + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}
