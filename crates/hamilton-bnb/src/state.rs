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

//! Search state for the branch-and-bound traversal.
//!
//! A `SearchState` is the partial tour under construction: the ordered path
//! starting at the root vertex, a bitset of the vertices it contains, and a
//! trail of cumulative path costs (one entry per path vertex). Extending the
//! path pushes onto all three; backtracking pops, which restores the previous
//! cost exactly without re-summing.
//!
//! `Candidate` describes one pending child of a state: the vertex to append,
//! the cost of the path after appending it, and the lower bound computed for
//! that child.

use fixedbitset::FixedBitSet;
use hamilton_core::num::float::SolverFloat;
use hamilton_model::index::VertexIndex;

/// A pending extension of the current path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<T> {
    vertex: VertexIndex,
    cost: T,
    lower_bound: T,
}

impl<T> Candidate<T>
where
    T: Copy,
{
    /// Creates a new `Candidate` appending `vertex` at path cost `cost`.
    #[inline]
    pub fn new(vertex: VertexIndex, cost: T, lower_bound: T) -> Self {
        Self {
            vertex,
            cost,
            lower_bound,
        }
    }

    /// The vertex appended by this candidate.
    #[inline]
    pub fn vertex(&self) -> VertexIndex {
        self.vertex
    }

    /// The cost of the path once the vertex is appended.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// The lower bound on any tour completing the extended path.
    #[inline]
    pub fn lower_bound(&self) -> T {
        self.lower_bound
    }
}

impl<T> std::fmt::Display for Candidate<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Candidate(vertex: {}, cost: {}, lower_bound: {})",
            self.vertex, self.cost, self.lower_bound
        )
    }
}

/// The partial tour under construction.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    num_vertices: usize,
    path: Vec<VertexIndex>,
    costs: Vec<T>,
    visited: FixedBitSet,
}

impl<T> SearchState<T>
where
    T: SolverFloat,
{
    /// Creates an empty `SearchState` for an instance with `num_vertices` vertices.
    #[inline]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            path: Vec::with_capacity(num_vertices),
            costs: Vec::with_capacity(num_vertices),
            visited: FixedBitSet::with_capacity(num_vertices),
        }
    }

    /// Creates a `SearchState` whose path holds only `start`, at cost zero.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `start` is out of bounds.
    #[inline]
    pub fn rooted_at(num_vertices: usize, start: VertexIndex) -> Self {
        let mut state = Self::new(num_vertices);
        state.push(start, T::zero());
        state
    }

    /// Clears the path and resizes the state for `num_vertices` vertices.
    pub fn reset(&mut self, num_vertices: usize) {
        self.num_vertices = num_vertices;
        self.path.clear();
        self.costs.clear();
        self.visited.clear();
        self.visited.grow(num_vertices);
    }

    /// Returns the number of vertices of the instance.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Returns the ordered path from the start vertex.
    #[inline]
    pub fn path(&self) -> &[VertexIndex] {
        &self.path
    }

    /// Returns the number of vertices on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the path is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns `true` if the path contains every vertex.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.num_vertices
    }

    /// Returns the number of vertices not yet on the path.
    #[inline]
    pub fn num_unvisited(&self) -> usize {
        self.num_vertices - self.path.len()
    }

    /// Returns the first vertex of the path.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    #[inline]
    pub fn start(&self) -> VertexIndex {
        debug_assert!(
            !self.path.is_empty(),
            "called `SearchState::start` on an empty path"
        );

        self.path[0]
    }

    /// Returns the last vertex of the path.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    #[inline]
    pub fn tail(&self) -> VertexIndex {
        debug_assert!(
            !self.path.is_empty(),
            "called `SearchState::tail` on an empty path"
        );

        self.path[self.path.len() - 1]
    }

    /// Returns the sum of the edge weights along the path.
    #[inline]
    pub fn current_cost(&self) -> T {
        self.costs.last().copied().unwrap_or_else(T::zero)
    }

    /// Returns `true` if `vertex` is on the path.
    #[inline]
    pub fn is_visited(&self, vertex: VertexIndex) -> bool {
        debug_assert!(
            vertex.get() < self.num_vertices,
            "called `SearchState::is_visited` with vertex index out of bounds: the len is {} but the index is {}",
            self.num_vertices,
            vertex.get()
        );

        self.visited.contains(vertex.get())
    }

    /// Iterates the vertices not yet on the path in ascending index order.
    #[inline]
    pub fn unvisited(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        (0..self.num_vertices)
            .filter(|&i| !self.visited.contains(i))
            .map(VertexIndex::new)
    }

    /// Appends `vertex` to the path; `cost` is the cost of the extended path.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `vertex` is out of bounds or already visited.
    #[inline]
    pub fn push(&mut self, vertex: VertexIndex, cost: T) {
        debug_assert!(
            vertex.get() < self.num_vertices,
            "called `SearchState::push` with vertex index out of bounds: the len is {} but the index is {}",
            self.num_vertices,
            vertex.get()
        );
        debug_assert!(
            !self.visited.contains(vertex.get()),
            "called `SearchState::push` with already visited vertex {}",
            vertex
        );

        self.visited.insert(vertex.get());
        self.path.push(vertex);
        self.costs.push(cost);
    }

    /// Removes the last vertex of the path and returns it.
    #[inline]
    pub fn pop(&mut self) -> Option<VertexIndex> {
        let vertex = self.path.pop()?;
        self.costs.pop();
        self.visited.set(vertex.get(), false);
        Some(vertex)
    }
}

impl<T> std::fmt::Display for SearchState<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState(depth: {}/{}, cost: {})",
            self.path.len(),
            self.num_vertices,
            self.current_cost()
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
    fn test_rooted_state() {
        let state = SearchState::<f64>::rooted_at(4, vi(0));
        assert_eq!(state.len(), 1);
        assert_eq!(state.start(), vi(0));
        assert_eq!(state.tail(), vi(0));
        assert_eq!(state.current_cost(), 0.0);
        assert!(state.is_visited(vi(0)));
        assert!(!state.is_complete());
        assert_eq!(state.num_unvisited(), 3);
    }

    #[test]
    fn test_push_pop_restores_cost_and_visited() {
        let mut state = SearchState::<f64>::rooted_at(4, vi(0));
        state.push(vi(2), 15.0);
        state.push(vi(1), 50.0);

        assert_eq!(state.path(), &[vi(0), vi(2), vi(1)]);
        assert_eq!(state.current_cost(), 50.0);
        assert_eq!(state.tail(), vi(1));

        assert_eq!(state.pop(), Some(vi(1)));
        assert_eq!(state.current_cost(), 15.0);
        assert!(!state.is_visited(vi(1)));
        assert!(state.is_visited(vi(2)));
    }

    #[test]
    fn test_unvisited_is_ascending() {
        let mut state = SearchState::<f64>::rooted_at(5, vi(0));
        state.push(vi(3), 1.0);
        let unvisited: Vec<usize> = state.unvisited().map(|v| v.get()).collect();
        assert_eq!(unvisited, vec![1, 2, 4]);
    }

    #[test]
    fn test_complete_state() {
        let mut state = SearchState::<f64>::rooted_at(3, vi(0));
        state.push(vi(1), 1.0);
        state.push(vi(2), 2.0);
        assert!(state.is_complete());
        assert_eq!(state.unvisited().count(), 0);
    }

    #[test]
    fn test_pop_on_empty_is_none() {
        let mut state = SearchState::<f64>::new(3);
        assert!(state.is_empty());
        assert_eq!(state.pop(), None);
        assert_eq!(state.current_cost(), 0.0);
    }

    #[test]
    fn test_reset_resizes() {
        let mut state = SearchState::<f64>::rooted_at(3, vi(0));
        state.push(vi(2), 4.0);
        state.reset(6);

        assert!(state.is_empty());
        assert_eq!(state.num_vertices(), 6);
        assert_eq!(state.unvisited().count(), 6);
    }

    #[test]
    fn test_candidate_accessors() {
        let candidate = Candidate::new(vi(3), 12.0, 40.0);
        assert_eq!(candidate.vertex(), vi(3));
        assert_eq!(candidate.cost(), 12.0);
        assert_eq!(candidate.lower_bound(), 40.0);
        assert_eq!(
            format!("{}", candidate),
            "Candidate(vertex: VertexIndex(3), cost: 12, lower_bound: 40)"
        );
    }
}
