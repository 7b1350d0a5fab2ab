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

//! # Numisma Model
//!
//! **The Core Domain Model for the Numisma Album Planner.**
//!
//! This crate defines the data structures used to represent a coin
//! collection and the album it is packed into. It serves as the data
//! interchange layer between collection ingestion (user input) and the
//! allocation engine (`numisma_solver`).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`SlotIndex`, `PocketIndex`,
//!   `PageIndex`) to prevent logical indexing errors across the three nested
//!   index spaces of an album.
//! * **`coin`**: The immutable `Coin` record with its deterministic ordering
//!   key, plus the `CoinKind` and `Grade` vocabulary enums.
//! * **`slot`**: A fixed-capacity, size-limited group of pockets, the one
//!   mutable container in the album, together with the insertion/removal
//!   error types shared with `page`.
//! * **`page`**: An ordered sequence of slots identified by a `PageKind`
//!   from the fixed layout catalog, with first-fit insertion.
//! * **`book`**: The append-only ordered list of pages an allocation run
//!   produces.
//! * **`region`**: A static country-to-region table for grouping a
//!   collection geographically.
//! * **`loading`**: The `CollectionLoader` that turns Numista-style CSV
//!   exports into validated `Coin` records.
//!
//! ## Design Philosophy
//!
//! 1. **Type Safety**: Indices are distinct types. You cannot accidentally
//!    address pocket 2 of slot 0 when you meant pocket 0 of slot 2.
//! 2. **Structural Capacity**: A slot's pockets are a fixed-length array
//!    allocated once; capacity violations are unrepresentable rather than
//!    checked after the fact.
//! 3. **Errors As Signals**: Insertion rejections ("slot full", "coin too
//!    large") are ordinary `Result` values the allocator steers by, never
//!    panics, and they hand the coin back to the caller.

pub mod book;
pub mod coin;
pub mod index;
pub mod loading;
pub mod page;
pub mod region;
pub mod slot;
