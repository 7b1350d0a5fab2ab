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

//! Allocation outcome reporting.
//!
//! This module encapsulates the final result of an allocation run: the book
//! that was built and the aggregate statistics describing how. The
//! `AllocationOutcome` is the single transport object handed to callers such
//! as CLI tools or tests; an allocation either produces one or fails with a
//! caller-visible error, so no termination reason accompanies it.

use crate::stats::AllocationStatistics;
use numisma_model::book::Book;

/// Result of a completed allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationOutcome {
    book: Book,
    statistics: AllocationStatistics,
}

impl AllocationOutcome {
    /// Creates a new outcome from a finished book and its run statistics.
    #[inline]
    pub fn new(book: Book, statistics: AllocationStatistics) -> Self {
        Self { book, statistics }
    }

    /// Returns the book.
    #[inline]
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Returns the statistics.
    #[inline]
    pub fn statistics(&self) -> &AllocationStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the book.
    #[inline]
    pub fn into_book(self) -> Book {
        self.book
    }
}
