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

//! Branch-and-Bound solver for the symmetric Travelling Salesman Problem.
//!
//! This module implements a stateful search engine that grows Hamiltonian
//! paths from vertex `0` one vertex at a time, pruning every partial path
//! whose lower bound cannot beat the incumbent tour. The `BnbSolver` owns
//! the reusable candidate stack and scratch buffers; a preallocation path
//! minimizes memory churn across repeated solves, and a fast `reset` keeps
//! capacities while clearing per-run state.
//!
//! A search session object encapsulates per-run state, statistics, and
//! timing. The traversal is iterative: each depth owns one frame of the
//! candidate stack, filled with the children of the current path ordered so
//! that the child with the smallest lower bound is entered first. A child
//! whose bound no longer beats the incumbent when its turn comes is skipped
//! without being counted. The traversal, and therefore the returned tour and
//! node count, is fully deterministic.

use crate::{
    bound::BoundEstimator,
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    result::BnbSolverOutcome,
    stack::SearchStack,
    state::{Candidate, SearchState},
    stats::BnbSolverStatistics,
};
use hamilton_core::num::float::SolverFloat;
use hamilton_model::{index::VertexIndex, matrix::CostMatrix, tour::Tour};

/// The vertex every tour starts from.
const START_VERTEX: VertexIndex = VertexIndex::new(0);

/// A depth-first branch-and-bound solver for minimum-cost Hamiltonian cycles.
///
/// This is only the execution engine: lower bounds are supplied by a
/// `BoundEstimator` and progress is reported to a `TreeSearchMonitor`.
#[derive(Clone, Debug)]
pub struct BnbSolver<T> {
    stack: SearchStack<T>,
    frontier: Vec<VertexIndex>,
}

impl<T> Default for BnbSolver<T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BnbSolver<T>
where
    T: SolverFloat,
{
    /// Create a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            stack: SearchStack::new(),
            frontier: Vec::new(),
        }
    }

    /// Create a new solver instance with storage preallocated for
    /// instances of `num_vertices` vertices.
    ///
    /// # Note
    ///
    /// The solver grows its buffers on demand when invoked, so this only
    /// moves the allocation cost to construction time.
    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            stack: SearchStack::preallocated(num_vertices),
            frontier: Vec::with_capacity(num_vertices),
        }
    }

    /// Finds a minimum-cost Hamiltonian cycle of `matrix`, or proves that none exists.
    ///
    /// Instances with fewer than two vertices are answered without searching:
    /// the tour visits the vertices present at cost zero and no node is counted.
    pub fn solve<E, S>(
        &mut self,
        matrix: &CostMatrix<T>,
        estimator: &mut E,
        mut monitor: S,
    ) -> BnbSolverOutcome<T>
    where
        E: BoundEstimator<T>,
        S: TreeSearchMonitor<T>,
    {
        if matrix.size() < 2 {
            let vertices = (0..matrix.size()).map(VertexIndex::new).collect();
            return BnbSolverOutcome::optimal(
                Tour::new(T::zero(), vertices),
                BnbSolverStatistics::default(),
            );
        }

        let session = BnbSolverSearchSession::new(self, matrix, estimator, &mut monitor);
        let outcome = session.run();
        self.reset();
        outcome
    }

    /// Clears the per-run buffers while keeping their capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.stack.reset();
        self.frontier.clear();
    }
}

/// A search session for the solver.
/// This struct encapsulates the state and logic
/// of a single search run.
struct BnbSolverSearchSession<'a, T, E, S>
where
    T: SolverFloat,
{
    solver: &'a mut BnbSolver<T>,
    matrix: &'a CostMatrix<T>,
    estimator: &'a mut E,
    monitor: &'a mut S,
    state: SearchState<T>,
    best_cost: T,
    best_tour: Option<Tour<T>>,
    stats: BnbSolverStatistics<T>,
    start_time: std::time::Instant,
}

impl<'a, T, E, S> std::fmt::Debug for BnbSolverSearchSession<'a, T, E, S>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("state", &self.state)
            .field("best_cost", &self.best_cost)
            .field("best_tour", &self.best_tour)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, T, E, S> BnbSolverSearchSession<'a, T, E, S>
where
    T: SolverFloat,
    E: BoundEstimator<T>,
    S: TreeSearchMonitor<T>,
{
    #[inline]
    fn new(
        solver: &'a mut BnbSolver<T>,
        matrix: &'a CostMatrix<T>,
        estimator: &'a mut E,
        monitor: &'a mut S,
    ) -> Self {
        Self {
            solver,
            matrix,
            estimator,
            monitor,
            state: SearchState::new(matrix.size()),
            best_cost: T::unreachable(),
            best_tour: None,
            stats: BnbSolverStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session to exhaustion.
    fn run(mut self) -> BnbSolverOutcome<T> {
        self.monitor.on_enter_search(self.matrix, &self.stats);
        self.initialize();

        loop {
            if self.solver.stack.is_current_level_empty() {
                if self.solver.stack.depth() <= 1 {
                    break;
                }
                self.backtrack_step();
            } else {
                self.process_next_candidate();
            }
        }

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        match self.best_tour {
            Some(tour) => BnbSolverOutcome::optimal(tour, self.stats),
            None => BnbSolverOutcome::infeasible(self.stats),
        }
    }

    /// Sets up the root state `[0]` and its frame, then expands it
    /// unless the root bound already rules out every tour.
    fn initialize(&mut self) {
        let n = self.matrix.size();
        self.solver.stack.ensure_capacity(n);
        if self.solver.frontier.capacity() < n {
            self.solver.frontier.reserve(n - self.solver.frontier.len());
        }

        self.state.reset(n);
        self.state.push(START_VERTEX, T::zero());
        self.solver.stack.push_frame();
        self.stats.on_node_explored();
        self.stats.on_depth_update(1);

        let root_bound = self.estimator.root_bound(self.matrix);
        self.stats.set_root_lower_bound(root_bound);
        self.monitor
            .on_lower_bound_computed(&self.state, root_bound, &self.stats);

        if root_bound >= self.best_cost {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
            return;
        }

        self.expand();
    }

    #[inline]
    fn backtrack_step(&mut self) {
        self.stats.on_backtrack();
        self.solver.stack.pop_frame();
        self.state.pop();
        self.monitor.on_backtrack(&self.state, &self.stats);
    }

    /// Takes the next candidate of the current frame and enters it,
    /// unless the incumbent has meanwhile caught up with its bound.
    #[inline]
    fn process_next_candidate(&mut self) {
        let Some(candidate) = self.solver.stack.pop() else {
            return;
        };

        if candidate.lower_bound() >= self.best_cost {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
            return;
        }

        self.descend(candidate);
    }

    fn descend(&mut self, candidate: Candidate<T>) {
        debug_assert!(
            !self.state.is_visited(candidate.vertex()),
            "called `BnbSolverSearchSession::descend` with already visited vertex {}",
            candidate.vertex()
        );

        self.state.push(candidate.vertex(), candidate.cost());
        self.solver.stack.push_frame();
        self.stats.on_node_explored();
        self.stats.on_depth_update(self.state.len() as u64);
        self.monitor.on_descend(&self.state, candidate, &self.stats);

        if self.state.is_complete() {
            self.handle_complete_path();
        } else {
            self.expand();
        }
    }

    /// Closes a path that visits every vertex. The frame of a complete
    /// path stays empty, so the next iteration backtracks out of it.
    fn handle_complete_path(&mut self) {
        let closing = self.matrix.weight(self.state.tail(), self.state.start());
        if !closing.is_reachable() {
            self.stats.on_dead_end();
            self.monitor
                .on_prune(&self.state, PruneReason::DeadEnd, &self.stats);
            return;
        }

        let total = self.state.current_cost() + closing;
        if total < self.best_cost {
            self.best_cost = total;
            self.stats.on_solution_found();
            let tour = Tour::new(total, self.state.path().to_vec());
            self.monitor.on_tour_found(&tour, &self.stats);
            self.best_tour = Some(tour);
        } else {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
        }
    }

    /// Fills the current frame with one candidate per unvisited vertex that
    /// the path tail reaches by a finite edge, ordered by ascending bound.
    fn expand(&mut self) {
        let tail = self.state.tail();
        let current_cost = self.state.current_cost();

        self.solver.frontier.clear();
        self.solver.frontier.extend(self.state.unvisited());

        let mut generated = 0usize;
        for index in 0..self.solver.frontier.len() {
            let next = self.solver.frontier[index];
            let weight = self.matrix.weight(tail, next);
            if !weight.is_reachable() {
                continue;
            }

            let cost = current_cost + weight;
            self.state.push(next, cost);
            let lower_bound = self.estimator.state_bound(self.matrix, &self.state);
            self.monitor
                .on_lower_bound_computed(&self.state, lower_bound, &self.stats);
            self.state.pop();

            self.solver
                .stack
                .push(Candidate::new(next, cost, lower_bound));
            generated += 1;
        }

        self.solver.stack.order_current_frame();
        self.stats.on_candidates_generated(generated);
        self.monitor
            .on_candidates_enqueued(&self.state, generated, &self.stats);
    }
}
