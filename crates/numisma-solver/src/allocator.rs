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

//! The page allocator.
//!
//! Given a collection of coins, the allocator builds a book of album pages
//! that holds every coin in a pocket wide enough for it, using as few pages
//! as the packing scheme allows. The run proceeds in five phases, none of
//! which is ever revisited:
//!
//! 1. **Sort** the coins by diameter, with issuer, Gregorian year, and title
//!    as tie breakers, so identical inputs always produce identical books.
//! 2. **Segment** the sorted coins into size classes. A coin wider than the
//!    largest catalog pocket fails the run here, before any page exists.
//! 3. **Bulk fill**, largest class first. Class 44 drains completely into
//!    dedicated "44" pages, the only layout that holds it. Classes 34, 25,
//!    and 17 open dedicated pages only while they can fill one completely.
//! 4. **Plan the remainder** with [`plan_residual`](crate::plan::plan_residual),
//!    choosing between MIX-only coverage and one extra dedicated page.
//! 5. **Materialize** the plan: the extra dedicated page first, then MIX
//!    pages until the queues are empty, each taking a fixed per-class quota.
//!
//! The allocator takes the coin list by value and owns all working state for
//! the duration of the call; the caller gets back an
//! [`AllocationOutcome`](crate::result::AllocationOutcome) carrying the book
//! and run statistics, or an [`AllocationError`] naming the coin that cannot
//! be placed.

use crate::{
    class::{ClassQueues, SizeClass},
    plan::{plan_residual, ResidualCounts},
    result::AllocationOutcome,
    stats::AllocationStatistics,
};
use numisma_core::measure::Millimeters;
use numisma_model::{
    book::Book,
    coin::Coin,
    page::{Page, PageKind},
};
use std::{collections::VecDeque, time::Instant};

/// Per-class fill quotas for one MIX page. The large slot takes four coins
/// of its own class and leaves its fifth pocket to first-fit spillover from
/// class 25; the smaller slots fill to capacity.
const MIX_FILL_34: usize = 4;
const MIX_FILL_25: usize = 12;
const MIX_FILL_17: usize = 16;

/// The error type for allocation runs.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// A coin is wider than every pocket in the catalog.
    UnplaceableCoin(UnplaceableCoinError),
}

/// Details about a coin no catalog page can hold.
#[derive(Debug, Clone, PartialEq)]
pub struct UnplaceableCoinError {
    /// The rejected coin.
    pub coin: Coin,
    /// The widest pocket any layout offers.
    pub limit: Millimeters,
}

impl std::fmt::Display for UnplaceableCoinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Coin '{}' has diameter {} but the widest catalog pocket is {}",
            self.coin,
            self.coin.diameter(),
            self.limit
        )
    }
}

impl std::error::Error for UnplaceableCoinError {}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnplaceableCoin(e) => write!(f, "Unplaceable coin: {}", e),
        }
    }
}

impl std::error::Error for AllocationError {}

impl From<UnplaceableCoinError> for AllocationError {
    fn from(e: UnplaceableCoinError) -> Self {
        Self::UnplaceableCoin(e)
    }
}

/// The greedy page allocator.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::coin::Coin;
/// # use numisma_core::measure::Millimeters;
/// # use numisma_solver::allocator::PageAllocator;
///
/// let coins = vec![
///     Coin::builder("Chile", "Chile", "1 Peso", Millimeters::new(27.0)).build(),
///     Coin::builder("Japan", "Japan", "1 Yen", Millimeters::new(20.0)).build(),
/// ];
/// let outcome = PageAllocator::new().allocate(coins).unwrap();
/// assert_eq!(outcome.book().num_pages(), 1);
/// assert_eq!(outcome.book().total_coins(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageAllocator;

impl PageAllocator {
    /// Creates a new `PageAllocator`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Packs `coins` into a book.
    ///
    /// Returns the finished book with run statistics, or
    /// [`AllocationError::UnplaceableCoin`] if any coin exceeds the widest
    /// catalog pocket. On error no partial book escapes.
    pub fn allocate(&self, mut coins: Vec<Coin>) -> Result<AllocationOutcome, AllocationError> {
        let start = Instant::now();
        let mut statistics = AllocationStatistics::default();
        statistics.set_coins_total(coins.len() as u64);

        // Phase 1: deterministic order. Diameter ascending, ties broken by
        // issuer, Gregorian year, and title.
        coins.sort_by(|a, b| a.order_key().cmp(&b.order_key()));

        // Phase 2: segment into size classes. The sort puts any oversized
        // coin behind every placeable one, so the first unclassifiable coin
        // is the smallest offender.
        let mut queues = ClassQueues::new();
        for coin in coins {
            match SizeClass::of(coin.diameter()) {
                Some(class) => queues.push(class, coin),
                None => {
                    return Err(UnplaceableCoinError {
                        coin,
                        limit: SizeClass::D44.limit(),
                    }
                    .into())
                }
            }
        }

        // Phase 3: bulk fill, largest class first. Class 44 drains
        // completely, partial last page included; the smaller classes open
        // dedicated pages only while a full one is guaranteed.
        let mut book = Book::new();
        while queues.len(SizeClass::D44) > 0 {
            let mut page = Page::new(PageKind::D44);
            let capacity = page.capacity();
            fill_page(&mut page, queues.queue_mut(SizeClass::D44), capacity);
            statistics.on_bulk_page();
            book.push_page(page);
        }
        for class in [SizeClass::D34, SizeClass::D25, SizeClass::D17] {
            let kind = class.dedicated_kind();
            let capacity = kind.capacity();
            while queues.len(class) >= capacity {
                let mut page = Page::new(kind);
                fill_page(&mut page, queues.queue_mut(class), capacity);
                statistics.on_bulk_page();
                book.push_page(page);
            }
        }

        // Phase 4: plan the remainder on counts alone.
        let residual = ResidualCounts::new(
            queues.len(SizeClass::D34),
            queues.len(SizeClass::D25),
            queues.len(SizeClass::D17),
        );
        let plan = plan_residual(residual);
        statistics.set_residual_plan(plan);

        // Phase 5: materialize the plan.
        debug_assert!(
            queues.len(SizeClass::D44) == 0,
            "bulk fill must drain the 44 class"
        );
        if let Some(class) = plan.extra() {
            let kind = class.dedicated_kind();
            let mut page = Page::new(kind);
            let capacity = kind.capacity();
            fill_page(&mut page, queues.queue_mut(class), capacity);
            if !page.is_empty() {
                statistics.on_residual_page();
                book.push_page(page);
            }
        }
        // The plan's MIX count is a simulation. The loop keys on the queues
        // instead, so the quota slack in the large slot can never strand a
        // coin; it costs at most one extra page.
        while !queues.is_empty() {
            let mut page = Page::new(PageKind::Mix);
            for (class, quota) in [
                (SizeClass::D34, MIX_FILL_34),
                (SizeClass::D25, MIX_FILL_25),
                (SizeClass::D17, MIX_FILL_17),
            ] {
                fill_page(&mut page, queues.queue_mut(class), quota);
            }
            if page.is_empty() {
                // Nothing placeable remains in the three residual classes.
                break;
            }
            statistics.on_residual_page();
            book.push_page(page);
        }

        statistics.set_total_time(start.elapsed());
        Ok(AllocationOutcome::new(book, statistics))
    }
}

/// Moves up to `quota` coins from the front of `queue` into `page`,
/// stopping early when the page fills or the queue drains.
fn fill_page(page: &mut Page, queue: &mut VecDeque<Coin>, quota: usize) {
    for _ in 0..quota {
        if page.is_full() {
            return;
        }
        let Some(coin) = queue.pop_front() else {
            return;
        };
        if let Err(err) = page.push(coin) {
            // Segmentation guarantees a compatible pocket below capacity.
            debug_assert!(false, "compatible coin rejected by a non-full page");
            queue.push_front(err.into_coin());
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mm(v: f64) -> Millimeters {
        Millimeters::new(v)
    }

    fn coin(id: u32, diameter: f64) -> Coin {
        Coin::builder("T", "T", format!("coin-{id}"), mm(diameter))
            .numista_id(id)
            .build()
    }

    fn coins(count: u32, diameter: f64) -> Vec<Coin> {
        (0..count).map(|i| coin(i, diameter)).collect()
    }

    fn allocate(coins: Vec<Coin>) -> AllocationOutcome {
        PageAllocator::new()
            .allocate(coins)
            .expect("allocation failed")
    }

    #[test]
    fn test_empty_input_yields_empty_book() {
        let outcome = allocate(Vec::new());
        assert!(outcome.book().is_empty());
        assert_eq!(outcome.statistics().coins_total, 0);
        assert_eq!(outcome.statistics().total_pages(), 0);
    }

    #[test]
    fn test_fifty_small_coins_take_two_pages() {
        let outcome = allocate(coins(50, 17.0));
        let book = outcome.book();

        assert_eq!(book.num_pages(), 2);
        assert_eq!(book.pages()[0].kind(), PageKind::D17);
        assert!(book.pages()[0].is_full());
        assert_eq!(book.pages()[0].occupied_count(), 48);
        assert_eq!(book.pages()[1].kind(), PageKind::Mix);
        assert_eq!(book.pages()[1].occupied_count(), 2);

        assert_eq!(outcome.statistics().bulk_pages, 1);
        assert_eq!(outcome.statistics().residual_pages, 1);
        assert_eq!(book.total_coins(), 50);
    }

    #[test]
    fn test_oversized_coin_is_rejected() {
        let mut input = coins(3, 20.0);
        input.push(coin(99, 50.0));

        match PageAllocator::new().allocate(input) {
            Err(AllocationError::UnplaceableCoin(e)) => {
                assert_eq!(e.coin.diameter(), mm(50.0));
                assert_eq!(e.limit, mm(44.0));
            }
            _ => panic!("Expected UnplaceableCoin"),
        }
    }

    #[test]
    fn test_class_44_drains_into_dedicated_pages() {
        // 30 class-44 coins: two full "44" pages and one partial one. No
        // other layout takes them, so the partial page opens in bulk fill.
        let outcome = allocate(coins(30, 40.0));
        let book = outcome.book();

        assert_eq!(book.num_pages(), 3);
        assert!(book.pages().iter().all(|p| p.kind() == PageKind::D44));
        assert_eq!(book.pages()[2].occupied_count(), 6);
        assert_eq!(outcome.statistics().bulk_pages, 3);
        assert_eq!(outcome.statistics().residual_pages, 0);
    }

    #[test]
    fn test_residual_opens_partial_dedicated_page() {
        // 45 class-25 coins: bulk fill takes one full "25" page, and the
        // 15-coin remainder is cheaper on a second "25" page than on two MIX.
        let outcome = allocate(coins(45, 24.0));
        let book = outcome.book();

        assert_eq!(book.num_pages(), 2);
        assert!(book.pages()[0].is_full());
        assert_eq!(book.pages()[1].kind(), PageKind::D25);
        assert_eq!(book.pages()[1].occupied_count(), 15);
        assert_eq!(
            outcome.statistics().residual_plan.and_then(|p| p.extra()),
            Some(SizeClass::D25)
        );
    }

    #[test]
    fn test_mix_page_fills_with_spillover() {
        // A full MIX complement: 4 large, 12 medium, 16 small. First-fit
        // placement pushes one 24 mm coin into the 34 mm slot's free pocket
        // and one 16 mm coin into the 25 mm slot's.
        let mut input = Vec::new();
        input.extend((0..4).map(|i| coin(i, 30.0)));
        input.extend((100..112).map(|i| coin(i, 24.0)));
        input.extend((200..216).map(|i| coin(i, 16.0)));

        let outcome = allocate(input);
        let book = outcome.book();
        assert_eq!(book.num_pages(), 1);

        let page = &book.pages()[0];
        assert_eq!(page.kind(), PageKind::Mix);
        assert_eq!(page.occupied_count(), 32);
        assert_eq!(page.slots()[0].occupied_count(), 5);
        assert_eq!(page.slots()[1].occupied_count(), 12);
        assert_eq!(page.slots()[2].occupied_count(), 15);
    }

    #[test]
    fn test_mix_quota_slack_opens_second_page() {
        // Five residual class-34 coins: the simulation promises one MIX page
        // (capacity five), but the fill quota is four, so the fifth coin
        // lands on a second MIX page rather than nowhere.
        let outcome = allocate(coins(5, 30.0));
        let book = outcome.book();

        assert_eq!(book.num_pages(), 2);
        assert!(book.pages().iter().all(|p| p.kind() == PageKind::Mix));
        assert_eq!(book.pages()[0].occupied_count(), 4);
        assert_eq!(book.pages()[1].occupied_count(), 1);
        assert_eq!(
            outcome.statistics().residual_plan.map(|p| p.mix_pages()),
            Some(1)
        );
        assert_eq!(outcome.statistics().residual_pages, 2);
        assert_eq!(book.total_coins(), 5);
    }

    #[test]
    fn test_every_coin_lands_exactly_once() {
        let mut input = Vec::new();
        input.extend((0..13).map(|i| coin(i, 16.5)));
        input.extend((100..123).map(|i| coin(i, 24.0)));
        input.extend((200..207).map(|i| coin(i, 31.0)));
        input.extend((300..305).map(|i| coin(i, 43.0)));
        let expected_total = input.len();

        let outcome = allocate(input);
        assert_eq!(outcome.book().total_coins(), expected_total);

        let mut ids: Vec<u32> = outcome.book().coins().filter_map(Coin::numista_id).collect();
        ids.sort_unstable();
        let want: Vec<u32> = (0..13).chain(100..123).chain(200..207).chain(300..305).collect();
        assert_eq!(ids, want);
    }

    #[test]
    fn test_allocation_is_deterministic() {
        use rand::{seq::SliceRandom, Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let input: Vec<Coin> = (0..120)
            .map(|i| coin(i, rng.gen_range(15.0..=44.0)))
            .collect();

        let first = allocate(input.clone());
        let second = allocate(input.clone());
        assert_eq!(first.book(), second.book());

        // The sort also makes the outcome independent of input order.
        let mut shuffled = input;
        shuffled.shuffle(&mut rng);
        assert_eq!(allocate(shuffled).book(), first.book());
    }

    #[test]
    fn test_reallocating_a_book_reproduces_its_page_count() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let input: Vec<Coin> = (0..80)
            .map(|i| coin(i, rng.gen_range(15.0..=44.0)))
            .collect();

        let first = allocate(input);
        let flattened: Vec<Coin> = first.book().coins().cloned().collect();
        let second = allocate(flattened);

        assert_eq!(second.book().num_pages(), first.book().num_pages());
    }
}
