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

//! Caller-facing solving API.
//!
//! [`solve`] answers one graph with a fresh engine. [`TspSolver`] keeps the
//! engine and bound estimator around so their buffers are reused across
//! solves, and exposes the monitored and detailed variants.
//!
//! A graph without a Hamiltonian cycle is not an error: the report then has
//! an empty route and a total distance of `+∞`.

use hamilton_bnb::{
    bnb::BnbSolver,
    bound::ConnectedHalfSumBound,
    monitor::{no_op::NoOperationMonitor, tree_search_monitor::TreeSearchMonitor},
    result::BnbSolverOutcome,
};
use hamilton_core::num::float::SolverFloat;
use hamilton_model::{graph::Graph, matrix::CostMatrix};
use std::time::{Duration, Instant};

/// The answer to one solve request.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport<T> {
    /// Vertex names in visiting order, starting at the first added vertex.
    /// The return to the start is implied. Empty when no tour exists.
    pub route: Vec<String>,
    /// The length of the cycle, `+∞` when no tour exists.
    pub total_distance: T,
    /// Wall-clock time spent solving.
    pub execution_time: Duration,
    /// Search states entered by the engine.
    pub nodes_explored: u64,
}

impl<T> SolveReport<T>
where
    T: SolverFloat,
{
    /// Builds the report of `outcome`, translating vertex indices into the
    /// names they have in `graph`.
    pub fn from_outcome(
        graph: &Graph<T>,
        outcome: &BnbSolverOutcome<T>,
        execution_time: Duration,
    ) -> Self {
        let (route, total_distance) = match outcome.tour() {
            Some(tour) => (
                tour.vertices()
                    .iter()
                    .map(|&v| graph.vertex_name(v).to_string())
                    .collect(),
                tour.cost(),
            ),
            None => (Vec::new(), T::unreachable()),
        };

        Self {
            route,
            total_distance,
            execution_time,
            nodes_explored: outcome.statistics().nodes_explored,
        }
    }

    /// Returns `true` if a Hamiltonian cycle was found.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.total_distance.is_reachable()
    }

    /// Returns the execution time in seconds.
    #[inline]
    pub fn execution_time_secs(&self) -> f64 {
        self.execution_time.as_secs_f64()
    }
}

impl<T> std::fmt::Display for SolveReport<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_solved() {
            writeln!(f, "Route:          no tour exists")?;
        } else if self.route.is_empty() {
            writeln!(f, "Route:          (empty)")?;
        } else {
            write!(f, "Route:          {}", self.route.join(" -> "))?;
            if self.route.len() > 1 {
                write!(f, " -> {}", self.route[0])?;
            }
            writeln!(f)?;
        }
        if self.is_solved() {
            writeln!(f, "Total distance: {}", self.total_distance)?;
        }
        writeln!(f, "Nodes explored: {}", self.nodes_explored)?;
        write!(f, "Execution time: {:.6}s", self.execution_time_secs())
    }
}

/// A reusable exact TSP solver.
#[derive(Debug, Clone)]
pub struct TspSolver<T> {
    engine: BnbSolver<T>,
    estimator: ConnectedHalfSumBound,
}

impl<T> Default for TspSolver<T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TspSolver<T>
where
    T: SolverFloat,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            engine: BnbSolver::new(),
            estimator: ConnectedHalfSumBound::new(),
        }
    }

    /// Creates a solver with buffers sized for graphs of `num_vertices` vertices.
    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            engine: BnbSolver::preallocated(num_vertices),
            estimator: ConnectedHalfSumBound::preallocated(num_vertices),
        }
    }

    /// Finds a minimum-length Hamiltonian cycle of `graph`.
    pub fn solve(&mut self, graph: &Graph<T>) -> SolveReport<T> {
        self.solve_with_monitor(graph, NoOperationMonitor::new())
    }

    /// Like [`TspSolver::solve`], reporting search progress to `monitor`.
    pub fn solve_with_monitor<S>(&mut self, graph: &Graph<T>, monitor: S) -> SolveReport<T>
    where
        S: TreeSearchMonitor<T>,
    {
        let start = Instant::now();
        let outcome = self.solve_detailed(graph, monitor);
        SolveReport::from_outcome(graph, &outcome, start.elapsed())
    }

    /// Solves `graph` and returns the engine outcome with its full statistics.
    pub fn solve_detailed<S>(&mut self, graph: &Graph<T>, monitor: S) -> BnbSolverOutcome<T>
    where
        S: TreeSearchMonitor<T>,
    {
        log::debug!("Solving {}", graph);

        let matrix = CostMatrix::from_graph(graph);
        let outcome = self.engine.solve(&matrix, &mut self.estimator, monitor);

        log::debug!(
            "Search finished with {} after {} nodes",
            outcome.result(),
            outcome.statistics().nodes_explored
        );
        outcome
    }
}

/// Finds a minimum-length Hamiltonian cycle of `graph` with a fresh solver.
///
/// # Examples
///
/// ```rust
/// use hamilton_model::graph::Graph;
/// use hamilton_solver::solver::solve;
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 10.0);
/// graph.add_edge("A", "C", 15.0);
/// graph.add_edge("A", "D", 20.0);
/// graph.add_edge("B", "C", 35.0);
/// graph.add_edge("B", "D", 25.0);
/// graph.add_edge("C", "D", 30.0);
///
/// let report = solve(&graph);
/// assert_eq!(report.total_distance, 80.0);
/// assert_eq!(report.route.len(), 4);
/// ```
pub fn solve<T>(graph: &Graph<T>) -> SolveReport<T>
where
    T: SolverFloat,
{
    TspSolver::preallocated(graph.vertex_count()).solve(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::random_complete_graph;
    use hamilton_bnb::monitor::log::LogTreeSearchMonitor;
    use hamilton_model::sample::vietnam_cities;

    fn four_cities() -> Graph<f64> {
        let mut graph = Graph::new();
        for name in ["A", "B", "C", "D"] {
            graph.add_vertex(name);
        }
        graph.add_edge("A", "B", 10.0);
        graph.add_edge("A", "C", 15.0);
        graph.add_edge("A", "D", 20.0);
        graph.add_edge("B", "C", 35.0);
        graph.add_edge("B", "D", 25.0);
        graph.add_edge("C", "D", 30.0);
        graph
    }

    #[test]
    fn test_four_city_report() {
        let report = solve(&four_cities());
        assert!(report.is_solved());
        assert_eq!(report.total_distance, 80.0);
        assert_eq!(report.route, vec!["A", "B", "D", "C"]);
        assert_eq!(report.nodes_explored, 11);
        assert!(report.execution_time_secs() >= 0.0);
    }

    #[test]
    fn test_empty_graph() {
        let report = solve(&Graph::<f64>::new());
        assert!(report.route.is_empty());
        assert_eq!(report.total_distance, 0.0);
        assert_eq!(report.nodes_explored, 0);
        assert!(report.is_solved());

        let rendered = format!("{}", report);
        assert!(rendered.contains("Route:          (empty)"));
        assert!(rendered.contains("Total distance: 0"));
    }

    #[test]
    fn test_single_city() {
        let mut graph = Graph::<f64>::new();
        graph.add_vertex("Huế");
        let report = solve(&graph);
        assert_eq!(report.route, vec!["Huế"]);
        assert_eq!(report.total_distance, 0.0);
        assert_eq!(report.nodes_explored, 0);
    }

    #[test]
    fn test_disconnected_pair() {
        let mut graph = Graph::<f64>::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        let report = solve(&graph);
        assert!(!report.is_solved());
        assert!(report.route.is_empty());
        assert_eq!(report.total_distance, f64::INFINITY);
        assert_eq!(report.nodes_explored, 1);
    }

    #[test]
    fn test_sample_has_no_tour() {
        let report = solve(&vietnam_cities());
        assert!(!report.is_solved());
        assert!(report.route.is_empty());
        assert!(report.nodes_explored >= 1);
        let rendered = format!("{}", report);
        assert!(rendered.contains("no tour exists"));
        assert!(!rendered.contains("Total distance"));
    }

    #[test]
    fn test_sample_with_closing_road_has_tour() {
        let mut graph = vietnam_cities();
        // A second road out of Vũng Tàu makes a cycle through all cities possible.
        graph.add_edge("Vũng Tàu", "Cần Thơ", 200.0);
        let report = solve(&graph);
        assert!(report.is_solved());
        assert_eq!(report.route.len(), 8);
        assert_eq!(report.route[0], "Hà Nội");
    }

    #[test]
    fn test_display_solved_report() {
        let report = SolveReport {
            route: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            total_distance: 12.0,
            execution_time: Duration::from_millis(5),
            nodes_explored: 4,
        };
        let rendered = format!("{}", report);
        assert!(rendered.contains("Route:          A -> B -> C -> A"));
        assert!(rendered.contains("Total distance: 12"));
        assert!(rendered.contains("Nodes explored: 4"));
        assert!(rendered.contains("Execution time: 0.005000s"));
    }

    #[test]
    fn test_reused_solver_matches_fresh_solve() {
        let mut solver = TspSolver::new();
        for seed in 0..5 {
            let graph = random_complete_graph(7, 60, seed);
            let reused = solver.solve(&graph);
            let fresh = solve(&graph);
            assert_eq!(reused.route, fresh.route);
            assert_eq!(reused.total_distance, fresh.total_distance);
            assert_eq!(reused.nodes_explored, fresh.nodes_explored);
        }
    }

    #[test]
    fn test_solve_with_log_monitor_matches_plain_solve() {
        let graph = random_complete_graph(7, 60, 21);
        let mut solver = TspSolver::preallocated(7);
        let logged = solver.solve_with_monitor(&graph, LogTreeSearchMonitor::default());
        let plain = solver.solve(&graph);
        assert_eq!(logged.route, plain.route);
        assert_eq!(logged.nodes_explored, plain.nodes_explored);
    }

    #[test]
    fn test_solve_detailed_exposes_statistics() {
        let graph = four_cities();
        let outcome = TspSolver::new().solve_detailed(&graph, NoOperationMonitor::new());
        assert_eq!(outcome.statistics().nodes_explored, 11);
        assert_eq!(outcome.statistics().max_depth, 4);
        assert_eq!(outcome.tour().map(|t| t.cost()), Some(80.0));
    }

    #[test]
    fn test_concurrent_solves_share_graph() {
        let graph = random_complete_graph(8, 100, 5);
        let expected = solve(&graph);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| solve(&graph))).collect();
            for handle in handles {
                let report = handle.join().expect("solver thread panicked");
                assert_eq!(report.route, expected.route);
                assert_eq!(report.total_distance, expected.total_distance);
            }
        });
    }

    #[test]
    fn test_single_precision_weights() {
        let mut graph = Graph::<f32>::new();
        graph.add_edge("x", "y", 1.5);
        graph.add_edge("y", "z", 2.5);
        graph.add_edge("x", "z", 3.0);
        let report = solve(&graph);
        assert_eq!(report.total_distance, 7.0f32);
        assert_eq!(report.route, vec!["x", "y", "z"]);
    }
}
