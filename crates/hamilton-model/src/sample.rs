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

//! Built-in sample instance: eight Vietnamese cities and the road distances
//! (in kilometres) between the pairs that have a direct road.
//!
//! The instance is sparse on purpose. Vũng Tàu is only reachable from
//! TP. Hồ Chí Minh, so no Hamiltonian cycle exists and a solver must report
//! that no tour was found.

use crate::graph::Graph;

/// City names in insertion order. Hà Nội receives index `0`.
pub const VIETNAM_CITIES: [&str; 8] = [
    "Hà Nội",
    "TP. Hồ Chí Minh",
    "Đà Nẵng",
    "Hải Phòng",
    "Cần Thơ",
    "Nha Trang",
    "Huế",
    "Vũng Tàu",
];

/// Direct roads as `(from, to, kilometres)`.
pub const VIETNAM_ROADS: [(&str, &str, f64); 12] = [
    ("Hà Nội", "Hải Phòng", 102.0),
    ("Hà Nội", "Đà Nẵng", 764.0),
    ("Hà Nội", "Huế", 688.0),
    ("Hà Nội", "TP. Hồ Chí Minh", 1726.0),
    ("Hải Phòng", "Đà Nẵng", 662.0),
    ("Đà Nẵng", "Huế", 103.0),
    ("Đà Nẵng", "Nha Trang", 531.0),
    ("Huế", "TP. Hồ Chí Minh", 1038.0),
    ("Nha Trang", "TP. Hồ Chí Minh", 441.0),
    ("TP. Hồ Chí Minh", "Vũng Tàu", 95.0),
    ("TP. Hồ Chí Minh", "Cần Thơ", 169.0),
    ("Cần Thơ", "Nha Trang", 610.0),
];

/// Builds the sample graph: one vertex per city, one edge per road.
pub fn vietnam_cities() -> Graph<f64> {
    let mut graph = Graph::with_capacity(VIETNAM_CITIES.len());

    for city in VIETNAM_CITIES {
        graph.add_vertex(city);
    }
    for (from, to, km) in VIETNAM_ROADS {
        graph.add_edge(from, to, km);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::VertexIndex;

    #[test]
    fn test_sample_dimensions() {
        let graph = vietnam_cities();
        assert_eq!(graph.vertex_count(), VIETNAM_CITIES.len());
        assert_eq!(graph.edge_count(), VIETNAM_ROADS.len());
        assert_eq!(graph.vertex_index("Hà Nội"), Some(VertexIndex::new(0)));
    }

    #[test]
    fn test_sample_roads_are_symmetric() {
        let graph = vietnam_cities();
        for (from, to, km) in VIETNAM_ROADS {
            let a = graph.vertex_index(from).unwrap();
            let b = graph.vertex_index(to).unwrap();
            assert_eq!(graph.weight(a, b), km);
            assert_eq!(graph.weight(b, a), km);
        }
    }

    #[test]
    fn test_vung_tau_is_a_dead_end() {
        let graph = vietnam_cities();
        let vung_tau = graph.vertex_index("Vũng Tàu").unwrap();
        let degree = graph
            .vertices()
            .filter(|&v| graph.has_edge(vung_tau, v))
            .count();
        assert_eq!(degree, 1);
    }
}
