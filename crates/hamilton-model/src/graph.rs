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

//! Name-addressed weighted graph.
//!
//! `Graph` is the construction-side representation of a TSP instance. The
//! caller adds cities by name and road distances between pairs of names;
//! every name receives a dense `VertexIndex` in first-insertion order. The
//! weights live in an N×N matrix of rows that grows by one row and one column
//! per new vertex. Pairs that were never connected keep the weight `+∞`.
//!
//! The solver never reads the graph during search. It takes a `CostMatrix`
//! snapshot first, so a `Graph` can be shared read-only between concurrent
//! solves.

use crate::index::VertexIndex;
use hamilton_core::num::float::SolverFloat;
use rustc_hash::FxHashMap;

/// An undirected graph with named vertices and a dense symmetric weight matrix.
///
/// Invariants:
/// - `weights[i][j] == weights[j][i]` for all `i`, `j`.
/// - `weights[i][i] == 0`.
/// - a pair without an edge has weight `+∞`.
///
/// Weights are not validated. Negative weights are stored as given, but the
/// lower bounds used by the solver assume non-negative weights.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    names: Vec<String>,
    lookup: FxHashMap<String, VertexIndex>,
    weights: Vec<Vec<T>>,
}

impl<T> Default for Graph<T>
where
    T: SolverFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    T: SolverFloat,
{
    /// Creates an empty graph.
    #[inline]
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            lookup: FxHashMap::default(),
            weights: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `num_vertices` vertices.
    #[inline]
    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            names: Vec::with_capacity(num_vertices),
            lookup: FxHashMap::with_capacity_and_hasher(num_vertices, Default::default()),
            weights: Vec::with_capacity(num_vertices),
        }
    }

    /// Adds a vertex called `name` and returns its index.
    ///
    /// If the name is already known, the graph is left untouched and the
    /// existing index is returned. Otherwise the vertex gets the next free
    /// index and is disconnected from every other vertex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hamilton_model::graph::Graph;
    ///
    /// let mut graph = Graph::<f64>::new();
    /// let hanoi = graph.add_vertex("Hanoi");
    /// let hue = graph.add_vertex("Hue");
    /// assert_eq!(hanoi.get(), 0);
    /// assert_eq!(hue.get(), 1);
    /// assert_eq!(graph.add_vertex("Hanoi"), hanoi);
    /// assert_eq!(graph.weight(hanoi, hue), f64::INFINITY);
    /// ```
    pub fn add_vertex(&mut self, name: &str) -> VertexIndex {
        if let Some(&index) = self.lookup.get(name) {
            return index;
        }

        let index = VertexIndex::new(self.names.len());

        for row in self.weights.iter_mut() {
            row.push(T::unreachable());
        }
        let mut row = vec![T::unreachable(); index.get() + 1];
        row[index.get()] = T::zero();
        self.weights.push(row);

        self.names.push(name.to_owned());
        self.lookup.insert(name.to_owned(), index);

        index
    }

    /// Sets the weight of the edge between `from` and `to` in both directions,
    /// creating missing endpoints first. A previously set weight is overwritten.
    ///
    /// A self-loop (`from == to`) only creates the vertex; the diagonal stays `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hamilton_model::graph::Graph;
    ///
    /// let mut graph = Graph::<f64>::new();
    /// graph.add_edge("Hue", "Da Nang", 103.0);
    /// let hue = graph.vertex_index("Hue").unwrap();
    /// let da_nang = graph.vertex_index("Da Nang").unwrap();
    /// assert_eq!(graph.weight(hue, da_nang), 103.0);
    /// assert_eq!(graph.weight(da_nang, hue), 103.0);
    /// ```
    pub fn add_edge(&mut self, from: &str, to: &str, weight: T) {
        let from_index = self.add_vertex(from);
        let to_index = self.add_vertex(to);

        if from_index == to_index {
            return;
        }

        self.weights[from_index.get()][to_index.get()] = weight;
        self.weights[to_index.get()][from_index.get()] = weight;
    }

    /// Returns the weight between two vertices, `+∞` if they are not connected.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn weight(&self, from: VertexIndex, to: VertexIndex) -> T {
        debug_assert!(
            from.get() < self.vertex_count() && to.get() < self.vertex_count(),
            "called `Graph::weight` with index out of bounds: the len is {} but the indices are {} and {}",
            self.vertex_count(),
            from.get(),
            to.get()
        );

        self.weights[from.get()][to.get()]
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the index of the vertex called `name`, if any.
    #[inline]
    pub fn vertex_index(&self, name: &str) -> Option<VertexIndex> {
        self.lookup.get(name).copied()
    }

    /// Returns the name of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn vertex_name(&self, index: VertexIndex) -> &str {
        &self.names[index.get()]
    }

    /// Returns all vertex names ordered by index.
    #[inline]
    pub fn vertex_names(&self) -> &[String] {
        &self.names
    }

    /// Returns an iterator over all vertex indices.
    #[inline]
    pub fn vertices(&self) -> impl Iterator<Item = VertexIndex> + use<T> {
        (0..self.vertex_count()).map(VertexIndex::new)
    }

    /// Returns `true` if two distinct vertices are joined by an edge.
    #[inline]
    pub fn has_edge(&self, from: VertexIndex, to: VertexIndex) -> bool {
        from != to && self.weight(from, to).is_reachable()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, row)| row[i + 1..].iter().filter(|w| w.is_reachable()).count())
            .sum()
    }
}

impl<T> std::fmt::Display for Graph<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph(vertices: {}, edges: {})",
            self.vertex_count(),
            self.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vi(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    #[test]
    fn test_add_vertex_assigns_indices_in_insertion_order() {
        let mut graph = Graph::<f64>::new();
        assert_eq!(graph.add_vertex("A"), vi(0));
        assert_eq!(graph.add_vertex("B"), vi(1));
        assert_eq!(graph.add_vertex("C"), vi(2));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertex_names(), &["A", "B", "C"]);
    }

    #[test]
    fn test_add_existing_vertex_is_noop() {
        let mut graph = Graph::<f64>::new();
        graph.add_edge("A", "B", 4.0);
        assert_eq!(graph.add_vertex("A"), vi(0));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.weight(vi(0), vi(1)), 4.0);
    }

    #[test]
    fn test_new_vertex_is_disconnected_with_zero_diagonal() {
        let mut graph = Graph::<f64>::new();
        graph.add_edge("A", "B", 1.0);
        let c = graph.add_vertex("C");

        assert_eq!(graph.weight(c, c), 0.0);
        for v in [vi(0), vi(1)] {
            assert_eq!(graph.weight(c, v), f64::INFINITY);
            assert_eq!(graph.weight(v, c), f64::INFINITY);
        }
    }

    #[test]
    fn test_add_edge_is_symmetric_and_overwrites() {
        let mut graph = Graph::<f64>::new();
        graph.add_edge("A", "B", 10.0);
        graph.add_edge("B", "A", 7.5);

        assert_eq!(graph.weight(vi(0), vi(1)), 7.5);
        assert_eq!(graph.weight(vi(1), vi(0)), 7.5);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_creates_missing_endpoints() {
        let mut graph = Graph::<f64>::new();
        graph.add_vertex("A");
        graph.add_edge("B", "C", 2.0);

        assert_eq!(graph.vertex_index("B"), Some(vi(1)));
        assert_eq!(graph.vertex_index("C"), Some(vi(2)));
        assert_eq!(graph.vertex_index("D"), None);
        assert!(graph.has_edge(vi(1), vi(2)));
        assert!(!graph.has_edge(vi(0), vi(1)));
    }

    #[test]
    fn test_self_loop_keeps_zero_diagonal() {
        let mut graph = Graph::<f64>::new();
        graph.add_edge("A", "A", 5.0);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.weight(vi(0), vi(0)), 0.0);
        assert!(!graph.has_edge(vi(0), vi(0)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_negative_weights_are_stored_verbatim() {
        let mut graph = Graph::<f64>::new();
        graph.add_edge("A", "B", -3.0);
        assert_eq!(graph.weight(vi(0), vi(1)), -3.0);
    }

    #[test]
    fn test_matrix_stays_symmetric_under_growth() {
        let mut graph = Graph::<f32>::with_capacity(4);
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("C", "A", 2.0);
        graph.add_vertex("D");
        graph.add_edge("D", "B", 3.0);

        for i in graph.vertices() {
            for j in graph.vertices() {
                assert_eq!(graph.weight(i, j), graph.weight(j, i));
            }
            assert_eq!(graph.weight(i, i), 0.0);
        }
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_display() {
        let mut graph = Graph::<f64>::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_vertex("C");
        assert_eq!(format!("{}", graph), "Graph(vertices: 3, edges: 1)");
    }
}
