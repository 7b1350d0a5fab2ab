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

//! # Numisma Core
//!
//! Foundational support types for the Numisma album-planning ecosystem.
//! This crate holds the small, domain-independent building blocks that the
//! model and allocation crates are written against.
//!
//! ## Modules
//!
//! - `index`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`) to
//!   keep the pocket, slot, and page index spaces from being mixed up.
//! - `measure`: The `Millimeters` length measure with a total order, used
//!   for coin diameters and slot size limits throughout.
//!
//! Refer to each module for detailed APIs and examples.

pub mod index;
pub mod measure;
