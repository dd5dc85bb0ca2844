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

//! Complete tours and their validation.

use crate::{index::VertexIndex, matrix::CostMatrix};
use hamilton_core::num::float::SolverFloat;

/// Reasons a vertex sequence is not a valid tour of a cost matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// The tour does not visit as many vertices as the matrix has.
    LengthMismatch { expected: usize, actual: usize },
    /// A vertex index is not part of the matrix.
    VertexOutOfBounds {
        vertex: VertexIndex,
        num_vertices: usize,
    },
    /// A vertex is visited more than once.
    DuplicateVertex(VertexIndex),
    /// Two consecutive vertices (or the last and the first) are not connected.
    MissingEdge { from: VertexIndex, to: VertexIndex },
}

impl std::fmt::Display for TourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "Tour visits {} vertices but the graph has {}",
                actual, expected
            ),
            Self::VertexOutOfBounds {
                vertex,
                num_vertices,
            } => write!(
                f,
                "Vertex {} is out of bounds for a graph with {} vertices",
                vertex.get(),
                num_vertices
            ),
            Self::DuplicateVertex(vertex) => {
                write!(f, "Vertex {} is visited more than once", vertex.get())
            }
            Self::MissingEdge { from, to } => write!(
                f,
                "No edge between vertex {} and vertex {}",
                from.get(),
                to.get()
            ),
        }
    }
}

impl std::error::Error for TourError {}

/// A Hamiltonian cycle: the visiting order and its total cost.
///
/// The cycle closes implicitly; the last vertex connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour<T> {
    cost: T,
    vertices: Vec<VertexIndex>,
}

impl<T> Tour<T>
where
    T: SolverFloat,
{
    /// Constructs a new `Tour`. The cost is taken as given; use
    /// [`Tour::evaluate`] to check it against a matrix.
    #[inline]
    pub fn new(cost: T, vertices: Vec<VertexIndex>) -> Self {
        Self { cost, vertices }
    }

    /// Returns the total cost of the cycle.
    #[inline]
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Returns the visiting order.
    #[inline]
    pub fn vertices(&self) -> &[VertexIndex] {
        &self.vertices
    }

    /// Consumes the tour and returns the visiting order.
    #[inline]
    pub fn into_vertices(self) -> Vec<VertexIndex> {
        self.vertices
    }

    /// Returns the number of vertices visited.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the tour visits no vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the first vertex of the tour.
    #[inline]
    pub fn start(&self) -> Option<VertexIndex> {
        self.vertices.first().copied()
    }

    /// Returns the edges of the cycle in visiting order, including the
    /// closing edge. A tour with fewer than two vertices has no edges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hamilton_model::{index::VertexIndex, tour::Tour};
    ///
    /// let order = [0, 2, 1].map(VertexIndex::new).to_vec();
    /// let tour = Tour::new(6.0f64, order);
    /// let edges: Vec<(usize, usize)> = tour.edges().map(|(a, b)| (a.get(), b.get())).collect();
    /// assert_eq!(edges, vec![(0, 2), (2, 1), (1, 0)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        let num_edges = if self.vertices.len() < 2 {
            0
        } else {
            self.vertices.len()
        };

        self.vertices
            .iter()
            .copied()
            .zip(self.vertices.iter().copied().cycle().skip(1))
            .take(num_edges)
    }

    /// Checks that the tour visits every vertex of `matrix` exactly once over
    /// finite edges and returns the recomputed cycle cost.
    pub fn evaluate(&self, matrix: &CostMatrix<T>) -> Result<T, TourError> {
        let num_vertices = matrix.size();
        if self.vertices.len() != num_vertices {
            return Err(TourError::LengthMismatch {
                expected: num_vertices,
                actual: self.vertices.len(),
            });
        }

        let mut seen = vec![false; num_vertices];
        for &vertex in &self.vertices {
            if vertex.get() >= num_vertices {
                return Err(TourError::VertexOutOfBounds {
                    vertex,
                    num_vertices,
                });
            }
            if std::mem::replace(&mut seen[vertex.get()], true) {
                return Err(TourError::DuplicateVertex(vertex));
            }
        }

        let mut total = T::zero();
        for (from, to) in self.edges() {
            let weight = matrix.weight(from, to);
            if !weight.is_reachable() {
                return Err(TourError::MissingEdge { from, to });
            }
            total = total + weight;
        }

        Ok(total)
    }
}

impl<T> std::fmt::Display for Tour<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tour Summary")?;
        writeln!(f, "   Cost: {}", self.cost)?;

        if self.vertices.is_empty() {
            return writeln!(f, "   (No vertices visited)");
        }

        write!(f, "   Order: ")?;
        for vertex in &self.vertices {
            write!(f, "{} -> ", vertex.get())?;
        }
        // The cycle closes on the first vertex.
        writeln!(f, "{}", self.vertices[0].get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour(order: &[usize], cost: f64) -> Tour<f64> {
        Tour::new(cost, order.iter().copied().map(VertexIndex::new).collect())
    }

    fn square() -> CostMatrix<f64> {
        // A-B=10, A-C=15, A-D=20, B-C=35, B-D=25, C-D=30
        CostMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
    }

    #[test]
    fn test_accessors() {
        let t = tour(&[0, 1, 3, 2], 80.0);
        assert_eq!(t.cost(), 80.0);
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
        assert_eq!(t.start(), Some(VertexIndex::new(0)));
        assert_eq!(t.clone().into_vertices().len(), 4);
    }

    #[test]
    fn test_edges_close_the_cycle() {
        let t = tour(&[0, 1, 3, 2], 80.0);
        let edges: Vec<(usize, usize)> = t.edges().map(|(a, b)| (a.get(), b.get())).collect();
        assert_eq!(edges, vec![(0, 1), (1, 3), (3, 2), (2, 0)]);
    }

    #[test]
    fn test_edges_of_degenerate_tours() {
        assert_eq!(tour(&[], 0.0).edges().count(), 0);
        assert_eq!(tour(&[0], 0.0).edges().count(), 0);
    }

    #[test]
    fn test_evaluate_recomputes_cost() {
        let matrix = square();
        assert_eq!(tour(&[0, 1, 3, 2], 80.0).evaluate(&matrix), Ok(80.0));
        assert_eq!(tour(&[0, 2, 3, 1], 80.0).evaluate(&matrix), Ok(80.0));
        assert_eq!(tour(&[0, 1, 2, 3], 95.0).evaluate(&matrix), Ok(95.0));
    }

    #[test]
    fn test_evaluate_rejects_wrong_length() {
        let err = tour(&[0, 1, 2], 0.0).evaluate(&square()).unwrap_err();
        assert_eq!(
            err,
            TourError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_evaluate_rejects_duplicates_and_out_of_bounds() {
        let matrix = square();
        assert_eq!(
            tour(&[0, 1, 1, 2], 0.0).evaluate(&matrix),
            Err(TourError::DuplicateVertex(VertexIndex::new(1)))
        );
        assert_eq!(
            tour(&[0, 1, 2, 9], 0.0).evaluate(&matrix),
            Err(TourError::VertexOutOfBounds {
                vertex: VertexIndex::new(9),
                num_vertices: 4
            })
        );
    }

    #[test]
    fn test_evaluate_rejects_missing_edges() {
        let matrix = CostMatrix::from_rows(&[
            vec![0.0, 1.0, f64::INFINITY],
            vec![1.0, 0.0, 1.0],
            vec![f64::INFINITY, 1.0, 0.0],
        ]);
        assert_eq!(
            tour(&[0, 1, 2], 0.0).evaluate(&matrix),
            Err(TourError::MissingEdge {
                from: VertexIndex::new(2),
                to: VertexIndex::new(0)
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = TourError::MissingEdge {
            from: VertexIndex::new(2),
            to: VertexIndex::new(0),
        };
        assert_eq!(format!("{}", err), "No edge between vertex 2 and vertex 0");
    }

    #[test]
    fn test_display_lists_cycle() {
        let rendered = format!("{}", tour(&[0, 2, 1], 6.0));
        assert!(rendered.contains("Cost: 6"));
        assert!(rendered.contains("0 -> 2 -> 1 -> 0"));
    }
}
