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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait and `PruneReason`. Callbacks track
//! the solver lifecycle:
//! enter → {lower-bound | prune | candidates/descend/backtrack} → tour found → exit.
//!
//! Methods take `&mut self`; monitors are assumed single-threaded. Callbacks
//! sit on the hot path of the search, so keep them lightweight.

use crate::{
    state::{Candidate, SearchState},
    stats::BnbSolverStatistics,
};
use hamilton_core::num::float::SolverFloat;
use hamilton_model::{matrix::CostMatrix, tour::Tour};

/// Reasons for pruning a search state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The lower bound cannot beat the incumbent tour.
    BoundDominated,
    /// The path visits every vertex but cannot be closed back to the start.
    DeadEnd,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
            PruneReason::DeadEnd => write!(f, "DeadEnd"),
        }
    }
}

/// Trait for observing the search process of the solver.
pub trait TreeSearchMonitor<T>
where
    T: SolverFloat,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called when the search starts.
    fn on_enter_search(&mut self, matrix: &CostMatrix<T>, statistics: &BnbSolverStatistics<T>);

    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>);

    /// Called when a lower bound is computed for a search state.
    fn on_lower_bound_computed(
        &mut self,
        state: &SearchState<T>,
        lower_bound: T,
        statistics: &BnbSolverStatistics<T>,
    );

    /// Called when a search state or pending candidate is pruned.
    fn on_prune(
        &mut self,
        state: &SearchState<T>,
        reason: PruneReason,
        statistics: &BnbSolverStatistics<T>,
    );

    /// Called when the children of a state are enqueued for exploration.
    fn on_candidates_enqueued(
        &mut self,
        state: &SearchState<T>,
        count: usize,
        statistics: &BnbSolverStatistics<T>,
    );

    /// Called after descending into a child state.
    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        candidate: Candidate<T>,
        statistics: &BnbSolverStatistics<T>,
    );

    /// Called when backtracking to a parent state.
    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &BnbSolverStatistics<T>);

    /// Called when a new incumbent tour is found.
    fn on_tour_found(&mut self, tour: &Tour<T>, statistics: &BnbSolverStatistics<T>);
}

impl<T, M> TreeSearchMonitor<T> for &mut M
where
    T: SolverFloat,
    M: TreeSearchMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_search(&mut self, matrix: &CostMatrix<T>, statistics: &BnbSolverStatistics<T>) {
        (**self).on_enter_search(matrix, statistics)
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>) {
        (**self).on_exit_search(statistics)
    }

    #[inline(always)]
    fn on_lower_bound_computed(
        &mut self,
        state: &SearchState<T>,
        lower_bound: T,
        statistics: &BnbSolverStatistics<T>,
    ) {
        (**self).on_lower_bound_computed(state, lower_bound, statistics)
    }

    #[inline(always)]
    fn on_prune(
        &mut self,
        state: &SearchState<T>,
        reason: PruneReason,
        statistics: &BnbSolverStatistics<T>,
    ) {
        (**self).on_prune(state, reason, statistics)
    }

    #[inline(always)]
    fn on_candidates_enqueued(
        &mut self,
        state: &SearchState<T>,
        count: usize,
        statistics: &BnbSolverStatistics<T>,
    ) {
        (**self).on_candidates_enqueued(state, count, statistics)
    }

    #[inline(always)]
    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        candidate: Candidate<T>,
        statistics: &BnbSolverStatistics<T>,
    ) {
        (**self).on_descend(state, candidate, statistics)
    }

    #[inline(always)]
    fn on_backtrack(&mut self, state: &SearchState<T>, statistics: &BnbSolverStatistics<T>) {
        (**self).on_backtrack(state, statistics)
    }

    #[inline(always)]
    fn on_tour_found(&mut self, tour: &Tour<T>, statistics: &BnbSolverStatistics<T>) {
        (**self).on_tour_found(tour, statistics)
    }
}

impl<T> std::fmt::Debug for dyn TreeSearchMonitor<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TreeSearchMonitor<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}
