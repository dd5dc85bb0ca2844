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

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::{Candidate, SearchState},
    stats::BnbSolverStatistics,
};
use hamilton_core::num::float::SolverFloat;
use hamilton_model::{matrix::CostMatrix, tour::Tour};
use std::time::{Duration, Instant};

/// Periodic progress reporting through the `log` facade.
///
/// A progress line is emitted at `info` level at most once per `log_interval`.
/// The clock is only consulted when `nodes_explored & clock_check_mask == 0`.
/// Incumbent improvements are reported at `debug` level.
#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_cost: Option<T>,
}

impl<T> LogTreeSearchMonitor<T>
where
    T: SolverFloat,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_cost: None,
        }
    }

    /// Returns the cost of the best tour reported so far.
    #[inline]
    pub fn best_cost(&self) -> Option<T> {
        self.best_cost
    }

    #[inline(always)]
    fn log_header(&self) {
        log::info!(
            "{:<9} | {:<14} | {:<7} | {:<14} | {:<14} | {:<10} | {:<10}",
            "Elapsed",
            "Nodes",
            "Depth",
            "Best Tour",
            "Path Cost",
            "Backtracks",
            "Pruned"
        );
    }

    #[inline(always)]
    fn log_line(&mut self, state: &SearchState<T>, stats: &BnbSolverStatistics<T>) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let best = match self.best_cost {
            Some(cost) => format!("{}", cost),
            None => "Inf".to_string(),
        };

        log::info!(
            "{:<9} | {:<14} | {:<7} | {:<14} | {:<14} | {:<10} | {:<10}",
            format!("{:.1}s", elapsed),
            stats.nodes_explored,
            state.len(),
            best,
            state.current_cost(),
            stats.backtracks,
            stats.prunings_bound
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogTreeSearchMonitor<T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: SolverFloat,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, matrix: &CostMatrix<T>, _statistics: &BnbSolverStatistics<T>) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_cost = None;
        log::info!("Searching {} vertices", matrix.size());
        self.log_header();
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics<T>) {
        match self.best_cost {
            Some(cost) => log::info!(
                "Search finished: best tour {} after {} nodes",
                cost,
                statistics.nodes_explored
            ),
            None => log::info!(
                "Search finished: no tour after {} nodes",
                statistics.nodes_explored
            ),
        }
    }

    fn on_lower_bound_computed(
        &mut self,
        _state: &SearchState<T>,
        _lower_bound: T,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }

    fn on_prune(
        &mut self,
        state: &SearchState<T>,
        reason: PruneReason,
        _statistics: &BnbSolverStatistics<T>,
    ) {
        log::trace!("Pruned at depth {}: {}", state.len(), reason);
    }

    fn on_candidates_enqueued(
        &mut self,
        _state: &SearchState<T>,
        _count: usize,
        _statistics: &BnbSolverStatistics<T>,
    ) {
    }

    fn on_descend(
        &mut self,
        state: &SearchState<T>,
        _candidate: Candidate<T>,
        statistics: &BnbSolverStatistics<T>,
    ) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(state, statistics);
        }
    }

    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &BnbSolverStatistics<T>) {}

    fn on_tour_found(&mut self, tour: &Tour<T>, statistics: &BnbSolverStatistics<T>) {
        self.best_cost = Some(tour.cost());
        log::debug!(
            "New incumbent {} at node {}",
            tour.cost(),
            statistics.nodes_explored
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamilton_model::index::VertexIndex;

    #[test]
    fn test_tracks_best_cost_and_resets_on_enter() {
        let mut monitor = LogTreeSearchMonitor::<f64>::default();
        let stats = BnbSolverStatistics::default();
        let tour = Tour::new(12.0, vec![VertexIndex::new(0), VertexIndex::new(1)]);

        monitor.on_tour_found(&tour, &stats);
        assert_eq!(monitor.best_cost(), Some(12.0));

        let matrix = CostMatrix::from_rows(&[vec![0.0, 6.0], vec![6.0, 0.0]]);
        monitor.on_enter_search(&matrix, &stats);
        assert_eq!(monitor.best_cost(), None);
    }

    #[test]
    fn test_display() {
        let monitor = LogTreeSearchMonitor::<f64>::new(Duration::from_secs(2), 1023);
        assert_eq!(
            format!("{}", monitor),
            "LogTreeSearchMonitor(log_interval: 2s, clock_check_mask: 1023)"
        );
        assert_eq!(monitor.name(), "LogTreeSearchMonitor");
    }
}
