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

use hamilton_model::graph::Graph;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Returns the vertex name used by [`random_complete_graph`] for index `i`.
#[inline]
pub fn city_name(i: usize) -> String {
    format!("City {}", i + 1)
}

/// Builds a complete symmetric graph of `num_cities` cities whose road
/// lengths are drawn uniformly from `1..=max_weight`.
///
/// The same `seed` always yields the same graph.
///
/// # Panics
///
/// Panics if `max_weight` is zero.
pub fn random_complete_graph(num_cities: usize, max_weight: u32, seed: u64) -> Graph<f64> {
    assert!(
        max_weight > 0,
        "called `random_complete_graph` with a zero `max_weight`"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let names: Vec<String> = (0..num_cities).map(city_name).collect();

    let mut graph = Graph::with_capacity(num_cities);
    for name in &names {
        graph.add_vertex(name);
    }
    for i in 0..num_cities {
        for j in (i + 1)..num_cities {
            let weight = rng.random_range(1..=max_weight);
            graph.add_edge(&names[i], &names[j], f64::from(weight));
        }
    }
    graph
}
