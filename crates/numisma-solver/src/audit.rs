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

//! Book audits.
//!
//! The audit walks a finished book pocket by pocket and re-derives the
//! placement invariants from what it finds, trusting none of the
//! allocator's own bookkeeping. [`verify_book`] checks the structural
//! invariants alone; [`verify_book_against`] additionally compares the
//! book's contents against the coin set it was built from, as a multiset.

use numisma_core::measure::Millimeters;
use numisma_model::{
    book::Book,
    coin::Coin,
    index::{PageIndex, SlotIndex},
};
use rustc_hash::FxHashMap;

/// The error type for book audits. The first violation found aborts the
/// audit and is reported; later ones stay hidden until it is fixed.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditError {
    /// A pocket holds a coin wider than its slot allows.
    OversizedPlacement(OversizedPlacementError),
    /// The book contains a page without a single coin.
    EmptyPage(EmptyPageError),
    /// The book holds a different number of coins than expected.
    CoinCountMismatch(CoinCountMismatchError),
    /// A coin appears a different number of times in the book than in the
    /// expected set.
    CoinMismatch(CoinMismatchError),
}

/// Details about a coin sitting in a slot too narrow for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OversizedPlacementError {
    /// The page the coin sits on.
    pub page: PageIndex,
    /// The slot within that page.
    pub slot: SlotIndex,
    /// The coin's diameter.
    pub diameter: Millimeters,
    /// The widest diameter the slot accepts.
    pub limit: Millimeters,
}

/// Details about a page that carries no coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPageError {
    /// The index of the empty page.
    pub page: PageIndex,
}

/// Details about a coin count that does not match the expected set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinCountMismatchError {
    /// How many coins the expected set holds.
    pub expected: usize,
    /// How many coins the book holds.
    pub found: usize,
}

/// Details about a coin whose multiplicity differs between the book and
/// the expected set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinMismatchError {
    /// A rendering of the offending coin.
    pub coin: String,
    /// Positive when the expected set holds more copies than the book,
    /// negative when the book holds more.
    pub excess: i64,
}

impl std::fmt::Display for OversizedPlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Page {} slot {} holds a {} coin but only accepts up to {}",
            self.page.get(),
            self.slot.get(),
            self.diameter,
            self.limit
        )
    }
}

impl std::error::Error for OversizedPlacementError {}

impl std::fmt::Display for EmptyPageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Page {} holds no coins", self.page.get())
    }
}

impl std::error::Error for EmptyPageError {}

impl std::fmt::Display for CoinCountMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expected {} coins but the book holds {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for CoinCountMismatchError {}

impl std::fmt::Display for CoinMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.excess > 0 {
            write!(
                f,
                "Coin '{}' is missing from the book ({} occurrence(s) unplaced)",
                self.coin, self.excess
            )
        } else {
            write!(
                f,
                "Coin '{}' appears {} extra time(s) in the book",
                self.coin, -self.excess
            )
        }
    }
}

impl std::error::Error for CoinMismatchError {}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OversizedPlacement(e) => write!(f, "Oversized placement: {}", e),
            Self::EmptyPage(e) => write!(f, "Empty page: {}", e),
            Self::CoinCountMismatch(e) => write!(f, "Coin count mismatch: {}", e),
            Self::CoinMismatch(e) => write!(f, "Coin mismatch: {}", e),
        }
    }
}

impl std::error::Error for AuditError {}

impl From<OversizedPlacementError> for AuditError {
    fn from(e: OversizedPlacementError) -> Self {
        Self::OversizedPlacement(e)
    }
}

impl From<EmptyPageError> for AuditError {
    fn from(e: EmptyPageError) -> Self {
        Self::EmptyPage(e)
    }
}

impl From<CoinCountMismatchError> for AuditError {
    fn from(e: CoinCountMismatchError) -> Self {
        Self::CoinCountMismatch(e)
    }
}

impl From<CoinMismatchError> for AuditError {
    fn from(e: CoinMismatchError) -> Self {
        Self::CoinMismatch(e)
    }
}

/// The fields that make two coins interchangeable for audit purposes.
type CoinKey<'a> = (Millimeters, &'a str, Option<i32>, &'a str, Option<u32>);

fn key_of(coin: &Coin) -> CoinKey<'_> {
    (
        coin.diameter(),
        coin.issuer(),
        coin.gregorian_year(),
        coin.title(),
        coin.numista_id(),
    )
}

/// Checks the structural invariants of a finished book.
///
/// Every page must hold at least one coin, and every placed coin must fit
/// the slot it sits in. An empty book passes trivially.
pub fn verify_book(book: &Book) -> Result<(), AuditError> {
    for (page_index, page) in book.pages().iter().enumerate() {
        if page.is_empty() {
            return Err(EmptyPageError {
                page: PageIndex::new(page_index),
            }
            .into());
        }
        for (slot_index, slot) in page.slots().iter().enumerate() {
            let limit = slot.max_diameter();
            for coin in slot.pockets().iter().flatten() {
                if coin.diameter() > limit {
                    return Err(OversizedPlacementError {
                        page: PageIndex::new(page_index),
                        slot: SlotIndex::new(slot_index),
                        diameter: coin.diameter(),
                        limit,
                    }
                    .into());
                }
            }
        }
    }
    Ok(())
}

/// Checks the structural invariants and that the book holds exactly the
/// coins in `expected`, each one exactly once.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::coin::Coin;
/// # use numisma_core::measure::Millimeters;
/// # use numisma_solver::{allocator::PageAllocator, audit::verify_book_against};
///
/// let coins = vec![
///     Coin::builder("Norway", "Norway", "1 Krone", Millimeters::new(21.0)).build(),
/// ];
/// let outcome = PageAllocator::new().allocate(coins.clone()).unwrap();
/// assert!(verify_book_against(outcome.book(), &coins).is_ok());
/// ```
pub fn verify_book_against(book: &Book, expected: &[Coin]) -> Result<(), AuditError> {
    verify_book(book)?;

    let found = book.total_coins();
    if found != expected.len() {
        return Err(CoinCountMismatchError {
            expected: expected.len(),
            found,
        }
        .into());
    }

    // Multiset balance: +1 per expected occurrence, -1 per placed one.
    let mut balance: FxHashMap<CoinKey<'_>, i64> = FxHashMap::default();
    for coin in expected {
        *balance.entry(key_of(coin)).or_default() += 1;
    }
    for coin in book.coins() {
        *balance.entry(key_of(coin)).or_default() -= 1;
    }
    for coin in expected.iter().chain(book.coins()) {
        let excess = balance.get(&key_of(coin)).copied().unwrap_or(0);
        if excess != 0 {
            return Err(CoinMismatchError {
                coin: coin.to_string(),
                excess,
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::PageAllocator;
    use numisma_model::page::{Page, PageKind};

    fn mm(v: f64) -> Millimeters {
        Millimeters::new(v)
    }

    fn coin(id: u32, diameter: f64) -> Coin {
        Coin::builder("T", "T", format!("coin-{id}"), mm(diameter))
            .numista_id(id)
            .build()
    }

    fn sample_coins() -> Vec<Coin> {
        let mut input = Vec::new();
        input.extend((0..7).map(|i| coin(i, 16.0)));
        input.extend((10..25).map(|i| coin(i, 23.0)));
        input.extend((30..33).map(|i| coin(i, 39.0)));
        input
    }

    #[test]
    fn test_empty_book_passes() {
        assert!(verify_book(&Book::new()).is_ok());
        assert!(verify_book_against(&Book::new(), &[]).is_ok());
    }

    #[test]
    fn test_allocated_book_passes() {
        let input = sample_coins();
        let outcome = PageAllocator::new()
            .allocate(input.clone())
            .expect("allocation failed");

        assert!(verify_book(outcome.book()).is_ok());
        assert!(verify_book_against(outcome.book(), &input).is_ok());
    }

    #[test]
    fn test_empty_page_is_flagged() {
        let outcome = PageAllocator::new()
            .allocate(sample_coins())
            .expect("allocation failed");
        let mut book = outcome.into_book();
        book.push_page(Page::new(PageKind::D17));

        match verify_book(&book) {
            Err(AuditError::EmptyPage(e)) => {
                assert_eq!(e.page, PageIndex::new(book.num_pages() - 1));
            }
            other => panic!("Expected EmptyPage, got {:?}", other),
        }
    }

    #[test]
    fn test_count_mismatch_is_flagged() {
        let input = sample_coins();
        let outcome = PageAllocator::new()
            .allocate(input.clone())
            .expect("allocation failed");

        match verify_book_against(outcome.book(), &input[..input.len() - 1]) {
            Err(AuditError::CoinCountMismatch(e)) => {
                assert_eq!(e.expected, input.len() - 1);
                assert_eq!(e.found, input.len());
            }
            other => panic!("Expected CoinCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_substituted_coin_is_flagged() {
        let input = sample_coins();
        let outcome = PageAllocator::new()
            .allocate(input.clone())
            .expect("allocation failed");

        // Same count, but one coin swapped for one the book never saw.
        let mut tampered = input;
        tampered[0] = coin(999, 16.0);

        match verify_book_against(outcome.book(), &tampered) {
            Err(AuditError::CoinMismatch(e)) => {
                assert!(e.excess > 0, "the swapped-in coin is missing from the book");
            }
            other => panic!("Expected CoinMismatch, got {:?}", other),
        }
    }
}
