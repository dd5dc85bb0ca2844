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

//! Immutable cost matrix used during search.
//!
//! `CostMatrix` is a snapshot of a `Graph`'s weights taken when a solve
//! starts. It drops the name indirection and stores the N×N weights in a
//! single row-major buffer, so the search reads one contiguous slice per
//! vertex. The diagonal is `0` and absent edges are `+∞`.

use crate::{graph::Graph, index::VertexIndex};
use hamilton_core::num::float::SolverFloat;

#[inline(always)]
fn flatten_index(size: usize, from: VertexIndex, to: VertexIndex) -> usize {
    from.get() * size + to.get()
}

/// A dense, row-major N×N weight matrix.
#[derive(Clone, PartialEq)]
pub struct CostMatrix<T> {
    size: usize,
    weights: Vec<T>, // len = size * size
}

impl<T> CostMatrix<T>
where
    T: SolverFloat,
{
    /// Builds the cost matrix of `graph`.
    ///
    /// Entry `[i][i]` is `0`; entry `[i][j]` is the graph's weight for the pair,
    /// `+∞` if they are not connected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hamilton_model::{graph::Graph, matrix::CostMatrix, index::VertexIndex};
    ///
    /// let mut graph = Graph::<f64>::new();
    /// graph.add_edge("A", "B", 2.0);
    /// graph.add_vertex("C");
    ///
    /// let matrix = CostMatrix::from_graph(&graph);
    /// let (a, b, c) = (VertexIndex::new(0), VertexIndex::new(1), VertexIndex::new(2));
    /// assert_eq!(matrix.size(), 3);
    /// assert_eq!(matrix.weight(a, b), 2.0);
    /// assert_eq!(matrix.weight(a, c), f64::INFINITY);
    /// assert_eq!(matrix.weight(c, c), 0.0);
    /// ```
    pub fn from_graph(graph: &Graph<T>) -> Self {
        let size = graph.vertex_count();
        let mut weights = Vec::with_capacity(size * size);

        for from in graph.vertices() {
            for to in graph.vertices() {
                let weight = if from == to {
                    T::zero()
                } else {
                    graph.weight(from, to)
                };
                weights.push(weight);
            }
        }

        Self { size, weights }
    }

    /// Builds a cost matrix from explicit rows. The diagonal is forced to `0`.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is not square.
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                size,
                "called `CostMatrix::from_rows` with a non-square matrix: row {} has {} entries but {} rows were given",
                i,
                row.len(),
                size
            );

            weights.extend(
                row.iter()
                    .enumerate()
                    .map(|(j, &w)| if i == j { T::zero() } else { w }),
            );
        }

        Self { size, weights }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the weight of the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline(always)]
    pub fn weight(&self, from: VertexIndex, to: VertexIndex) -> T {
        debug_assert!(
            from.get() < self.size && to.get() < self.size,
            "called `CostMatrix::weight` with index out of bounds: the size is {} but the indices are {} and {}",
            self.size,
            from.get(),
            to.get()
        );

        self.weights[flatten_index(self.size, from, to)]
    }

    /// Returns `true` if `from -> to` is a finite edge.
    #[inline(always)]
    pub fn is_reachable(&self, from: VertexIndex, to: VertexIndex) -> bool {
        self.weight(from, to).is_reachable()
    }

    /// Returns the outgoing weights of `from`, indexed by target vertex.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    #[inline]
    pub fn row(&self, from: VertexIndex) -> &[T] {
        let start = from.get() * self.size;
        &self.weights[start..start + self.size]
    }
}

impl<T> From<&Graph<T>> for CostMatrix<T>
where
    T: SolverFloat,
{
    fn from(graph: &Graph<T>) -> Self {
        Self::from_graph(graph)
    }
}

impl<T> std::fmt::Debug for CostMatrix<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CostMatrix(size: {})", self.size)
    }
}

impl<T> std::fmt::Display for CostMatrix<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.size {
            let row = self.row(VertexIndex::new(i));
            for (j, weight) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if weight.is_reachable() {
                    write!(f, "{:>8}", weight)?;
                } else {
                    write!(f, "{:>8}", "inf")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vi(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    #[test]
    fn test_from_graph_copies_weights() {
        let mut graph = Graph::<f64>::new();
        graph.add_edge("A", "B", 10.0);
        graph.add_edge("A", "C", 15.0);
        graph.add_edge("B", "C", 35.0);

        let matrix = CostMatrix::from_graph(&graph);

        assert_eq!(matrix.size(), 3);
        for i in graph.vertices() {
            for j in graph.vertices() {
                assert_eq!(matrix.weight(i, j), graph.weight(i, j));
            }
        }
    }

    #[test]
    fn test_from_graph_keeps_missing_edges_infinite() {
        let mut graph = Graph::<f64>::new();
        graph.add_vertex("X");
        graph.add_vertex("Y");

        let matrix: CostMatrix<f64> = (&graph).into();

        assert_eq!(matrix.weight(vi(0), vi(1)), f64::INFINITY);
        assert!(!matrix.is_reachable(vi(1), vi(0)));
        assert_eq!(matrix.weight(vi(0), vi(0)), 0.0);
    }

    #[test]
    fn test_empty_graph_gives_empty_matrix() {
        let graph = Graph::<f64>::new();
        let matrix = CostMatrix::from_graph(&graph);
        assert!(matrix.is_empty());
        assert_eq!(matrix.size(), 0);
    }

    #[test]
    fn test_from_rows_forces_zero_diagonal() {
        let matrix = CostMatrix::from_rows(&[vec![9.0, 1.0], vec![1.0, 9.0]]);
        assert_eq!(matrix.weight(vi(0), vi(0)), 0.0);
        assert_eq!(matrix.weight(vi(1), vi(1)), 0.0);
        assert_eq!(matrix.weight(vi(0), vi(1)), 1.0);
    }

    #[test]
    #[should_panic(expected = "non-square matrix")]
    fn test_from_rows_rejects_ragged_input() {
        let _ = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]);
    }

    #[test]
    fn test_row_slices_match_weights() {
        let matrix = CostMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ]);
        assert_eq!(matrix.row(vi(1)), &[1.0, 0.0, 3.0]);
        assert_eq!(matrix.row(vi(2)), &[2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_display_marks_missing_edges() {
        let matrix = CostMatrix::from_rows(&[vec![0.0, f64::INFINITY], vec![f64::INFINITY, 0.0]]);
        let rendered = format!("{}", matrix);
        assert!(rendered.contains("inf"));
        assert_eq!(rendered.lines().count(), 2);
    }
}
