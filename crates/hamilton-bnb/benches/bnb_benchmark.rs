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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hamilton_bnb::bnb::BnbSolver;
use hamilton_bnb::bound::{ConnectedHalfSumBound, UnvisitedHalfSumBound};
use hamilton_bnb::monitor::no_op::NoOperationMonitor;
use hamilton_model::matrix::CostMatrix;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// A complete symmetric instance with integral weights in `1..=max_weight`.
fn random_complete(n: usize, max_weight: u32, seed: u64) -> CostMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let w = rng.random_range(1..=max_weight) as f64;
            rows[i][j] = w;
            rows[j][i] = w;
        }
    }
    CostMatrix::from_rows(&rows)
}

fn bench_complete_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_complete");
    group.sample_size(20);

    for &n in &[6usize, 8, 10, 12] {
        let matrix = random_complete(n, 100, 0xC0FFEE + n as u64);

        group.bench_with_input(BenchmarkId::new("connected", n), &matrix, |b, m| {
            let mut solver = BnbSolver::preallocated(n);
            let mut estimator = ConnectedHalfSumBound::preallocated(n);
            b.iter(|| {
                let outcome = solver.solve(m, &mut estimator, NoOperationMonitor::new());
                black_box(outcome.statistics().nodes_explored)
            });
        });

        group.bench_with_input(BenchmarkId::new("unvisited", n), &matrix, |b, m| {
            let mut solver = BnbSolver::preallocated(n);
            let mut estimator = UnvisitedHalfSumBound::preallocated(n);
            b.iter(|| {
                let outcome = solver.solve(m, &mut estimator, NoOperationMonitor::new());
                black_box(outcome.statistics().nodes_explored)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_complete_graphs);
criterion_main!(benches);
