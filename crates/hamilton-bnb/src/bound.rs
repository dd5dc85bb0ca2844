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

//! Lower bound estimators.
//!
//! A bound estimator maps a search state to a value that no tour completing
//! the state's path can undercut. The search prunes any state whose bound
//! reaches the incumbent cost, so an estimator that overestimates may cut
//! the optimal tour away.
//!
//! Both estimators here use the half-sum of cheapest edges. Every vertex of
//! a tour has one incoming and one outgoing tour edge, and each edge is
//! counted once as an outgoing and once as an incoming edge, so half the sum
//! of per-vertex cheapest in/out weights never exceeds the tour length. The
//! estimators differ in which edges may serve as the cheapest connection of
//! a vertex that is not yet on the path.

use crate::state::SearchState;
use hamilton_core::num::float::SolverFloat;
use hamilton_model::{index::VertexIndex, matrix::CostMatrix};

/// Computes a lower bound on the cost of any tour completing a partial path.
pub trait BoundEstimator<T>
where
    T: SolverFloat,
{
    /// Returns the name of the estimator.
    fn name(&self) -> &str;

    /// Returns a lower bound on the cost of any Hamiltonian cycle of `matrix`.
    ///
    /// The default sums, over all vertices, the cheapest edge leaving the
    /// vertex and halves the total. A vertex without any outgoing edge makes
    /// the bound `+∞`.
    fn root_bound(&mut self, matrix: &CostMatrix<T>) -> T {
        root_half_sum(matrix)
    }

    /// Returns a lower bound on the cost of any tour completing the path of `state`.
    ///
    /// `state` always contains at least the start vertex.
    fn state_bound(&mut self, matrix: &CostMatrix<T>, state: &SearchState<T>) -> T;
}

impl<T, E> BoundEstimator<T> for &mut E
where
    T: SolverFloat,
    E: BoundEstimator<T> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn root_bound(&mut self, matrix: &CostMatrix<T>) -> T {
        (**self).root_bound(matrix)
    }

    #[inline]
    fn state_bound(&mut self, matrix: &CostMatrix<T>, state: &SearchState<T>) -> T {
        (**self).state_bound(matrix, state)
    }
}

/// Half the sum over all vertices of their cheapest outgoing edge.
pub fn root_half_sum<T>(matrix: &CostMatrix<T>) -> T
where
    T: SolverFloat,
{
    let n = matrix.size();
    if n < 2 {
        return T::zero();
    }

    let mut total = T::zero();
    for i in 0..n {
        let cheapest = matrix
            .row(VertexIndex::new(i))
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(T::unreachable(), |acc, (_, &w)| acc.min(w));
        total = total + cheapest;
    }
    total.half()
}

/// Sums `(min_out + min_in) / 2` over `unvisited`.
///
/// `min_out` ranges over edges to the other unvisited vertices and to `exit`;
/// `min_in` ranges over edges from the other unvisited vertices and from
/// `entry`. A vertex whose cheapest incoming or outgoing edge is missing
/// contributes nothing.
fn half_sum_over<T>(
    matrix: &CostMatrix<T>,
    unvisited: &[VertexIndex],
    entry: Option<VertexIndex>,
    exit: Option<VertexIndex>,
) -> T
where
    T: SolverFloat,
{
    let mut total = T::zero();
    for &i in unvisited {
        let mut min_out = exit.map_or_else(T::unreachable, |e| matrix.weight(i, e));
        let mut min_in = entry.map_or_else(T::unreachable, |e| matrix.weight(e, i));

        for &j in unvisited {
            if j == i {
                continue;
            }
            min_out = min_out.min(matrix.weight(i, j));
            min_in = min_in.min(matrix.weight(j, i));
        }

        if min_out.is_reachable() && min_in.is_reachable() {
            total = total + (min_out + min_in).half();
        }
    }
    total
}

/// Path cost plus the half-sum of cheapest edges among the unvisited vertices only.
///
/// # Note
///
/// This estimator ignores the edges that connect the unvisited vertices back
/// to the path. When those connectors are cheap and the edges among the
/// unvisited vertices are expensive it overestimates, so a search driven by
/// it is not guaranteed to return an optimal tour. Prefer
/// [`ConnectedHalfSumBound`].
#[derive(Debug, Clone, Default)]
pub struct UnvisitedHalfSumBound {
    unvisited: Vec<VertexIndex>,
}

impl UnvisitedHalfSumBound {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            unvisited: Vec::with_capacity(num_vertices),
        }
    }
}

impl<T> BoundEstimator<T> for UnvisitedHalfSumBound
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "UnvisitedHalfSumBound"
    }

    fn state_bound(&mut self, matrix: &CostMatrix<T>, state: &SearchState<T>) -> T {
        if state.is_complete() {
            return matrix.weight(state.tail(), state.start());
        }

        self.unvisited.clear();
        self.unvisited.extend(state.unvisited());
        state.current_cost() + half_sum_over(matrix, &self.unvisited, None, None)
    }
}

/// Path cost plus a half-sum of cheapest edges in which every unvisited vertex
/// may also be entered from the path tail and may also leave to the start vertex.
///
/// Any completion enters each unvisited vertex either from the tail or from
/// another unvisited vertex, and leaves it either to another unvisited vertex
/// or back to the start. The half-sum therefore never exceeds the cost of the
/// remaining tour edges. A complete path is bounded by its closed tour cost.
#[derive(Debug, Clone, Default)]
pub struct ConnectedHalfSumBound {
    unvisited: Vec<VertexIndex>,
}

impl ConnectedHalfSumBound {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            unvisited: Vec::with_capacity(num_vertices),
        }
    }
}

impl<T> BoundEstimator<T> for ConnectedHalfSumBound
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "ConnectedHalfSumBound"
    }

    fn state_bound(&mut self, matrix: &CostMatrix<T>, state: &SearchState<T>) -> T {
        let tail = state.tail();
        let start = state.start();
        if state.is_complete() {
            return state.current_cost() + matrix.weight(tail, start);
        }

        self.unvisited.clear();
        self.unvisited.extend(state.unvisited());
        state.current_cost() + half_sum_over(matrix, &self.unvisited, Some(tail), Some(start))
    }
}
