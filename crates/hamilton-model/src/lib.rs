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

//! # Hamilton Model
//!
//! **The domain model for the Hamilton TSP solver.**
//!
//! This crate defines the data the branch-and-bound engine (`hamilton_bnb`)
//! consumes and produces. It is the layer between the caller that knows
//! city names and road distances and the search that only sees indices and
//! a dense weight buffer.
//!
//! ## Architecture
//!
//! * **`index`**: the strongly typed `VertexIndex`.
//! * **`graph`**: the mutable, name-addressed `Graph` the caller builds one
//!   vertex and one edge at a time.
//! * **`matrix`**: the immutable `CostMatrix` snapshot of a `Graph`, flattened
//!   row-major for the search.
//! * **`tour`**: the `Tour` output type and its validation errors.
//! * **`sample`**: a small built-in instance.
//!
//! ## Conventions
//!
//! Weights are `SolverFloat`s. A vertex pair without an edge has weight `+∞`
//! and the diagonal is always `0`.

pub mod graph;
pub mod index;
pub mod matrix;
pub mod sample;
pub mod tour;
