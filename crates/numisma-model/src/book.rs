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

//! The book: an ordered list of pages produced by one allocation run.
//!
//! Append-only while the allocator builds it, read-only afterwards.

use crate::{coin::Coin, index::PageIndex, page::Page};

/// An ordered collection of album pages.
///
/// The allocator only ever appends pages that hold at least one coin; the
/// book itself does not enforce that, the audit re-checks it.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::{book::Book, page::{Page, PageKind}};
///
/// let mut book = Book::new();
/// book.push_page(Page::new(PageKind::D44));
/// assert_eq!(book.num_pages(), 1);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Book {
    pages: Vec<Page>,
}

impl Book {
    /// Creates an empty book.
    #[inline]
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Appends a page to the end of the book.
    #[inline]
    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Returns the number of pages.
    #[inline]
    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the book has no pages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the pages in book order.
    #[inline]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Returns the page at the given index, if it exists.
    #[inline]
    pub fn page(&self, index: PageIndex) -> Option<&Page> {
        self.pages.get(index.get())
    }

    /// Returns the number of coins held across all pages.
    #[inline]
    pub fn total_coins(&self) -> usize {
        self.pages.iter().map(Page::occupied_count).sum()
    }

    /// Returns the total pocket count across all pages.
    #[inline]
    pub fn total_capacity(&self) -> usize {
        self.pages.iter().map(Page::capacity).sum()
    }

    /// Iterates over every coin in the book, page and slot order preserved.
    #[inline]
    pub fn coins(&self) -> impl Iterator<Item = &Coin> {
        self.pages.iter().flat_map(Page::occupied_coins)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Book Summary")?;
        writeln!(
            f,
            "   Pages: {} | Coins: {} | Free pockets: {}",
            self.num_pages(),
            self.total_coins(),
            self.total_capacity() - self.total_coins()
        )?;
        writeln!(f)?;

        if self.pages.is_empty() {
            writeln!(f, "   (No pages)")?;
            return Ok(());
        }

        writeln!(
            f,
            "   {:<6} | {:<10} | {:<6} | {:<8}",
            "Page", "Layout", "Coins", "Capacity"
        )?;
        writeln!(f, "   {:-<6}-+-{:-<10}-+-{:-<6}-+-{:-<8}", "", "", "", "")?;
        for (i, page) in self.pages.iter().enumerate() {
            writeln!(
                f,
                "   {:<6} | {:<10} | {:<6} | {:<8}",
                i,
                page.kind().product_name(),
                page.occupied_count(),
                page.capacity()
            )?;
        }

        Ok(())
    }
}
