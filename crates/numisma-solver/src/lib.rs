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

//! # Numisma Solver
//!
//! **The Allocation Engine of the Numisma Album Planner.**
//!
//! This crate turns an unordered coin collection into a finished album: a
//! [`Book`](numisma_model::book::Book) of pages from the fixed layout
//! catalog, every coin in a pocket wide enough for it. The packing is a
//! deterministic greedy heuristic, not an optimizer; it runs in a single
//! pass and trades a page or two against guaranteed placement of every
//! placeable coin.
//!
//! ## Architecture
//!
//! * **`class`**: The four pocket size classes and the per-class FIFO
//!   queues the run works from.
//! * **`plan`**: The residual planner that prices MIX-only coverage
//!   against one extra dedicated page, on coin counts alone.
//! * **`allocator`**: The five-phase `PageAllocator` that sorts, segments,
//!   bulk-fills, plans, and materializes.
//! * **`audit`**: Independent re-verification of a finished book against
//!   the placement invariants and the input coin set.
//! * **`stats`**: Counters and timing collected across a run.
//! * **`result`**: The `AllocationOutcome` transport object handed back to
//!   the caller.

pub mod allocator;
pub mod audit;
pub mod class;
pub mod plan;
pub mod result;
pub mod stats;
