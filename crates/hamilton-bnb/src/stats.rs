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

use hamilton_core::num::float::SolverFloat;
use std::time::Duration;

/// Statistics collected during the execution of the Hamilton-BnB solver.
#[derive(Debug, Clone, PartialEq)]
pub struct BnbSolverStatistics<T> {
    /// Total search states entered, the root included.
    pub nodes_explored: u64,
    /// Total returns from a fully explored state to its parent.
    pub backtracks: u64,
    /// Total candidate children generated.
    pub candidates_generated: u64,
    /// The longest partial tour reached.
    pub max_depth: u64,
    /// Candidates and states abandoned because their bound could not beat the incumbent.
    pub prunings_bound: u64,
    /// Complete paths without an edge back to the start.
    pub dead_ends: u64,
    /// Total improving tours found during the search.
    pub solutions_found: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
    /// The lower bound at the root node.
    pub root_lower_bound: T,
}

impl<T> Default for BnbSolverStatistics<T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            backtracks: 0,
            candidates_generated: 0,
            max_depth: 0,
            prunings_bound: 0,
            dead_ends: 0,
            solutions_found: 0,
            time_total: Duration::ZERO,
            root_lower_bound: T::zero(),
        }
    }
}

impl<T> BnbSolverStatistics<T> {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_candidates_generated(&mut self, count: usize) {
        self.candidates_generated = self.candidates_generated.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Records a pruning event caused by the incumbent bound.
    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_dead_end(&mut self) {
        self.dead_ends = self.dead_ends.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn set_root_lower_bound(&mut self, bound: T) {
        self.root_lower_bound = bound;
    }
}

impl<T> std::fmt::Display for BnbSolverStatistics<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hamilton-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:           {}", self.backtracks)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Candidates generated: {}", self.candidates_generated)?;
        writeln!(f, "  Prunings (bound):     {}", self.prunings_bound)?;
        writeln!(f, "  Dead ends:            {}", self.dead_ends)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Root lower bound:     {}", self.root_lower_bound)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
