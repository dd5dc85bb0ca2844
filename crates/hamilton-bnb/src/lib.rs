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

//! Hamilton-BnB: branch-and-bound for the symmetric TSP
//!
//! Implements an exact, deterministic depth-first branch-and-bound search for
//! minimum-cost Hamiltonian cycles over a `hamilton_model::matrix::CostMatrix`.
//!
//! Core flow
//! - Build a `CostMatrix<T>` from a `Graph<T>`.
//! - Choose a `bound::BoundEstimator` (admissible lower bounds).
//! - Optionally attach monitors.
//! - Run `bnb::BnbSolver`, which returns a `result::BnbSolverOutcome`.
//!
//! Design highlights
//! - The search starts at vertex `0` and extends the path one vertex at a time.
//! - Children are ordered by ascending lower bound before they are entered,
//!   so good tours are found early and tighten the incumbent.
//! - A single path/cost trail is mutated in place; pending children live in a
//!   frame-structured stack, one frame per depth. No recursion is involved,
//!   so deep instances cannot overflow the call stack.
//! - All per-run state lives in a search session created by `solve` and
//!   dropped at its end, so solves never share state.
//!
//! Assumptions and guarantees
//! - Edge weights are non-negative; `+∞` marks a missing edge.
//! - Lower bounds must be admissible (no overestimation) for the result to
//!   be optimal.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `bound`: lower bound estimators.
//! - `monitor`: observation hooks (log, composite, no-op).
//! - `result`: solver outcomes with termination reasons.
//! - `state`: the partial tour under construction and pending candidates.
//! - `stats`: counters and timing.

pub mod bnb;
pub mod bound;
pub mod monitor;
pub mod result;
mod stack;
pub mod state;
pub mod stats;
