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

use crate::stats::BnbSolverStatistics;
use hamilton_core::num::float::SolverFloat;
use hamilton_model::tour::Tour;

/// The answer produced by a completed search.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverResult<T> {
    /// A minimum-cost Hamiltonian cycle.
    Optimal(Tour<T>),
    /// The instance admits no Hamiltonian cycle.
    Infeasible,
}

impl<T> std::fmt::Display for SolverResult<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverResult::Optimal(tour) => write!(f, "Optimal(cost: {})", tour.cost()),
            SolverResult::Infeasible => write!(f, "Infeasible"),
        }
    }
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search space was exhausted with an incumbent tour.
    OptimalityProven,
    /// The search space was exhausted without finding any tour.
    InfeasibilityProven,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "OptimalityProven"),
            TerminationReason::InfeasibilityProven => write!(f, "InfeasibilityProven"),
        }
    }
}

/// Result of the solver after termination.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome<T> {
    result: SolverResult<T>,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics<T>,
}

impl<T> BnbSolverOutcome<T> {
    #[inline]
    pub fn optimal(tour: Tour<T>, statistics: BnbSolverStatistics<T>) -> Self {
        Self {
            result: SolverResult::Optimal(tour),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: BnbSolverStatistics<T>) -> Self {
        Self {
            result: SolverResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            statistics,
        }
    }

    /// Returns the solver result.
    #[inline]
    pub fn result(&self) -> &SolverResult<T> {
        &self.result
    }

    /// Returns the optimal tour, if one exists.
    #[inline]
    pub fn tour(&self) -> Option<&Tour<T>> {
        match &self.result {
            SolverResult::Optimal(tour) => Some(tour),
            SolverResult::Infeasible => None,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> TerminationReason {
        self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics<T> {
        &self.statistics
    }

    /// Splits the outcome into its result and statistics.
    #[inline]
    pub fn into_parts(self) -> (SolverResult<T>, BnbSolverStatistics<T>) {
        (self.result, self.statistics)
    }
}
