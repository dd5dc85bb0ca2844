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

use crate::state::Candidate;
use hamilton_core::num::float::SolverFloat;
use std::cmp::Ordering;

/// A frame-structured LIFO stack of pending candidates.
///
/// All candidates live in one linear `entries` buffer. `frames` records where
/// each depth begins; popping a frame truncates `entries` back to that start.
/// The frame of depth `d` holds the untried children of the path prefix of
/// length `d`, so the stack depth always equals the current path length.
#[derive(Clone, Debug)]
pub struct SearchStack<T> {
    entries: Vec<Candidate<T>>,
    /// `frames[d]` is the index in `entries` where depth `d` began.
    frames: Vec<usize>,
}

impl<T> Default for SearchStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn capacity_for(num_vertices: usize) -> (usize, usize) {
    // Along one path the frames hold at most (n - 1) + (n - 2) + ... + 1 entries.
    let entries = num_vertices.saturating_mul(num_vertices.saturating_sub(1)) / 2;
    let frames = num_vertices.saturating_add(1);
    (entries, frames)
}

impl<T> SearchStack<T> {
    /// Creates a new, empty `SearchStack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Creates a `SearchStack` large enough to never reallocate for an
    /// instance of `num_vertices` vertices.
    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        let (entry_capacity, frame_capacity) = capacity_for(num_vertices);
        Self {
            entries: Vec::with_capacity(entry_capacity),
            frames: Vec::with_capacity(frame_capacity),
        }
    }

    /// Ensures the stack has capacity for an instance of `num_vertices` vertices.
    #[inline]
    pub fn ensure_capacity(&mut self, num_vertices: usize) {
        let (entry_capacity, frame_capacity) = capacity_for(num_vertices);
        if self.entries.capacity() < entry_capacity {
            self.entries.reserve(entry_capacity - self.entries.len());
        }
        if self.frames.capacity() < frame_capacity {
            self.frames.reserve(frame_capacity - self.frames.len());
        }
    }

    /// Returns the number of pending candidates over all frames.
    #[cfg(test)]
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of frames, which is the current search depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frame is tracked.
    #[cfg(test)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Opens a new, empty frame.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Pops the current frame, discarding its remaining candidates.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<()> {
        let start = self.frames.pop()?;
        self.entries.truncate(start);
        Some(())
    }

    /// Pushes a candidate onto the current frame.
    #[inline]
    pub fn push(&mut self, candidate: Candidate<T>) {
        debug_assert!(
            !self.frames.is_empty(),
            "called `SearchStack::push` without an open frame"
        );

        self.entries.push(candidate);
    }

    /// Pops the next candidate of the current frame, if any remain.
    #[inline]
    pub fn pop(&mut self) -> Option<Candidate<T>> {
        if self.is_current_level_empty() {
            return None;
        }
        self.entries.pop()
    }

    /// Returns `true` if the current frame has no remaining candidates.
    #[inline]
    pub fn is_current_level_empty(&self) -> bool {
        match self.frames.last() {
            Some(&start) => self.entries.len() == start,
            None => true,
        }
    }

    /// Returns the candidates of the current frame.
    #[cfg(test)]
    #[inline]
    pub fn current_frame_entries(&self) -> &[Candidate<T>] {
        match self.frames.last() {
            Some(&start) => &self.entries[start..],
            None => &[],
        }
    }

    /// Clears all entries and frames, keeping the allocations.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }
}

impl<T> SearchStack<T>
where
    T: SolverFloat,
{
    /// Orders the current frame so that `pop` yields candidates by ascending
    /// lower bound. Equal bounds pop in the order they were pushed.
    pub fn order_current_frame(&mut self) {
        let Some(&start) = self.frames.last() else {
            return;
        };
        let frame = &mut self.entries[start..];
        frame.sort_by(|a, b| {
            a.lower_bound()
                .partial_cmp(&b.lower_bound())
                .unwrap_or(Ordering::Equal)
        });
        frame.reverse();
    }
}

impl<T> std::fmt::Display for SearchStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchStack(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamilton_model::index::VertexIndex;

    fn c(vertex: usize, lower_bound: f64) -> Candidate<f64> {
        Candidate::new(VertexIndex::new(vertex), 0.0, lower_bound)
    }

    #[test]
    fn test_new_and_preallocated_basic_props() {
        let s = SearchStack::<f64>::new();
        assert_eq!(s.num_entries(), 0);
        assert_eq!(s.depth(), 0);
        assert!(s.is_empty());
        assert!(s.is_current_level_empty());
        assert_eq!(s.current_frame_entries(), &[]);

        let s2 = SearchStack::<f64>::preallocated(6);
        assert!(s2.entries.capacity() >= 15);
        assert!(s2.frames.capacity() >= 7);
        assert_eq!(format!("{}", s), "SearchStack(entries: 0, frames: 0)");
    }

    #[test]
    fn test_ensure_capacity_is_monotonic() {
        let mut s = SearchStack::<f64>::preallocated(2);
        s.ensure_capacity(8);
        let ecap = s.entries.capacity();
        let fcap = s.frames.capacity();
        assert!(ecap >= 28);
        assert!(fcap >= 9);

        s.ensure_capacity(1);
        assert_eq!(s.entries.capacity(), ecap);
        assert_eq!(s.frames.capacity(), fcap);
    }

    #[test]
    fn test_frames_isolate_entries() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.push(c(1, 10.0));
        s.push(c(2, 20.0));

        s.push_frame();
        assert!(s.is_current_level_empty());
        assert_eq!(s.pop(), None);
        s.push(c(3, 5.0));
        assert_eq!(s.depth(), 2);
        assert_eq!(s.num_entries(), 3);

        assert_eq!(s.pop(), Some(c(3, 5.0)));
        assert_eq!(s.pop(), None);
        assert!(s.pop_frame().is_some());

        assert_eq!(s.current_frame_entries(), &[c(1, 10.0), c(2, 20.0)]);
        assert_eq!(s.pop(), Some(c(2, 20.0)));
    }

    #[test]
    fn test_pop_frame_discards_remaining() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.push(c(1, 1.0));
        s.push_frame();
        s.push(c(2, 2.0));
        s.push(c(3, 3.0));

        assert!(s.pop_frame().is_some());
        assert_eq!(s.num_entries(), 1);
        assert!(s.pop_frame().is_some());
        assert!(s.is_empty());
        assert_eq!(s.pop_frame(), None);
    }

    #[test]
    fn test_order_current_frame_pops_ascending_and_stable() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.push(c(9, 0.0));

        s.push_frame();
        s.push(c(1, 30.0));
        s.push(c(2, 10.0));
        s.push(c(3, 20.0));
        s.push(c(4, 10.0));
        s.order_current_frame();

        let popped: Vec<usize> = std::iter::from_fn(|| s.pop())
            .map(|cand| cand.vertex().get())
            .collect();
        assert_eq!(popped, vec![2, 4, 3, 1]);

        // The parent frame is untouched.
        assert!(s.pop_frame().is_some());
        assert_eq!(s.current_frame_entries(), &[c(9, 0.0)]);
    }

    #[test]
    fn test_order_infinite_bounds_last() {
        let mut s = SearchStack::new();
        s.push_frame();
        s.push(c(1, f64::INFINITY));
        s.push(c(2, 3.0));
        s.order_current_frame();
        assert_eq!(s.pop().map(|cand| cand.vertex().get()), Some(2));
        assert_eq!(s.pop().map(|cand| cand.vertex().get()), Some(1));
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let mut s = SearchStack::preallocated(5);
        let ecap = s.entries.capacity();
        s.push_frame();
        s.push(c(0, 1.0));
        s.reset();
        assert!(s.is_empty());
        assert_eq!(s.num_entries(), 0);
        assert_eq!(s.entries.capacity(), ecap);
    }
}
