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

//! Slots: fixed-capacity, size-limited pocket groups.
//!
//! A slot is the one mutable container in the album model. Its pocket array
//! is allocated once at construction and never resized, so the capacity
//! invariant is structural rather than checked after the fact. Insertion
//! and removal failures are ordinary `Result` values that hand the coin
//! back; the allocator steers by them ("slot full, try the next one")
//! instead of unwinding.

use crate::{
    coin::Coin,
    index::{PocketIndex, SlotIndex},
};
use numisma_core::measure::Millimeters;

/// The error type for failed insertions into slots and pages.
///
/// Every variant returns the rejected coin to the caller, so a failed push
/// never loses or clones it.
#[derive(Clone, PartialEq, Debug)]
pub enum PushError {
    /// Every pocket of the destination is already occupied.
    OverCapacity(Coin),
    /// The coin's diameter exceeds the slot's size limit.
    Oversized {
        /// The rejected coin.
        coin: Coin,
        /// The size limit of the slot that rejected it.
        limit: Millimeters,
    },
    /// The page is not full, yet no slot can take the coin (every slot that
    /// has room is too small). Only produced by page-level insertion.
    NoCompatibleSlot(Coin),
}

impl PushError {
    /// Recovers the rejected coin, whatever the failure was.
    #[inline]
    pub fn into_coin(self) -> Coin {
        match self {
            Self::OverCapacity(coin) => coin,
            Self::Oversized { coin, .. } => coin,
            Self::NoCompatibleSlot(coin) => coin,
        }
    }
}

impl std::fmt::Display for PushError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OverCapacity(coin) => {
                write!(f, "Cannot insert coin '{}': every pocket is occupied", coin.title())
            }
            Self::Oversized { coin, limit } => write!(
                f,
                "Cannot insert coin '{}': {} exceeds the slot limit of {}",
                coin.title(),
                coin.diameter(),
                limit
            ),
            Self::NoCompatibleSlot(coin) => write!(
                f,
                "Cannot insert coin '{}': no slot on the page accepts {}",
                coin.title(),
                coin.diameter()
            ),
        }
    }
}

impl std::error::Error for PushError {}

/// The error type for failed removals from slots and pages.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PopError {
    /// No occupied pocket to remove.
    Underflow,
    /// The pocket index is beyond the slot's capacity.
    PocketOutOfRange {
        /// The offending index.
        index: PocketIndex,
        /// The slot's capacity.
        capacity: usize,
    },
    /// The slot index is beyond the page's slot count. Only produced by
    /// page-level removal.
    SlotOutOfRange {
        /// The offending index.
        index: SlotIndex,
        /// The page's slot count.
        len: usize,
    },
    /// The addressed pocket exists but is vacant.
    EmptyPocket {
        /// The vacant pocket.
        index: PocketIndex,
    },
}

impl std::fmt::Display for PopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underflow => write!(f, "Cannot remove a coin: the container is empty"),
            Self::PocketOutOfRange { index, capacity } => write!(
                f,
                "Pocket index {} out of range for a slot of capacity {}",
                index.get(),
                capacity
            ),
            Self::SlotOutOfRange { index, len } => write!(
                f,
                "Slot index {} out of range for a page with {} slots",
                index.get(),
                len
            ),
            Self::EmptyPocket { index } => write!(f, "Pocket {} is vacant", index.get()),
        }
    }
}

impl std::error::Error for PopError {}

/// A fixed-capacity group of pockets that only accepts coins up to a
/// maximum diameter.
///
/// # Invariants
///
/// The pocket array's length equals the capacity for the slot's whole
/// lifetime, and no occupied pocket ever holds a coin wider than
/// `max_diameter`. Both are enforced by construction and by `push`.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::{coin::Coin, slot::Slot};
/// # use numisma_core::measure::Millimeters;
///
/// let mut slot = Slot::new(4, Millimeters::new(25.0));
/// let coin = Coin::builder("Norway", "Norway", "1 Krone", Millimeters::new(25.0)).build();
/// let pocket = slot.push(coin).unwrap();
/// assert_eq!(pocket.get(), 0);
/// assert_eq!(slot.occupied_count(), 1);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Slot {
    max_diameter: Millimeters,
    pockets: Box<[Option<Coin>]>,
}

impl Slot {
    /// Creates an empty slot with the given pocket count and size limit.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, max_diameter: Millimeters) -> Self {
        assert!(capacity > 0, "Invalid slot: capacity must be positive");
        Self {
            max_diameter,
            pockets: vec![None; capacity].into_boxed_slice(),
        }
    }

    /// Returns the number of pockets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pockets.len()
    }

    /// Returns the largest coin diameter this slot accepts.
    #[inline]
    pub fn max_diameter(&self) -> Millimeters {
        self.max_diameter
    }

    /// Returns the number of occupied pockets.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.pockets.iter().filter(|p| p.is_some()).count()
    }

    /// Returns `true` if every pocket is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pockets.iter().all(Option::is_some)
    }

    /// Returns `true` if no pocket is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pockets.iter().all(Option::is_none)
    }

    /// Returns the fixed-length pocket view, vacant pockets included.
    #[inline]
    pub fn pockets(&self) -> &[Option<Coin>] {
        &self.pockets
    }

    /// Returns the coin at the given pocket, if the index is in range and
    /// the pocket is occupied.
    #[inline]
    pub fn coin_at(&self, pocket: PocketIndex) -> Option<&Coin> {
        self.pockets.get(pocket.get()).and_then(Option::as_ref)
    }

    /// Inserts a coin into the lowest-index vacant pocket.
    ///
    /// Fails with [`PushError::OverCapacity`] if every pocket is occupied,
    /// or with [`PushError::Oversized`] if the coin is wider than the slot's
    /// limit. The slot is unchanged on failure and the coin travels back in
    /// the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_model::{coin::Coin, slot::{PushError, Slot}};
    /// # use numisma_core::measure::Millimeters;
    ///
    /// let mut slot = Slot::new(1, Millimeters::new(17.0));
    /// let wide = Coin::builder("", "", "Thaler", Millimeters::new(41.0)).build();
    /// match slot.push(wide) {
    ///     Err(PushError::Oversized { coin, .. }) => assert_eq!(coin.title(), "Thaler"),
    ///     other => panic!("expected an oversize rejection, got {:?}", other),
    /// }
    /// ```
    pub fn push(&mut self, coin: Coin) -> Result<PocketIndex, PushError> {
        let Some(free) = self.pockets.iter().position(Option::is_none) else {
            return Err(PushError::OverCapacity(coin));
        };
        if coin.diameter() > self.max_diameter {
            return Err(PushError::Oversized {
                coin,
                limit: self.max_diameter,
            });
        }
        self.pockets[free] = Some(coin);
        Ok(PocketIndex::new(free))
    }

    /// Removes and returns the occupied pocket of highest index.
    ///
    /// Fails with [`PopError::Underflow`] if the slot is empty.
    pub fn pop_last(&mut self) -> Result<Coin, PopError> {
        self.pockets
            .iter_mut()
            .rev()
            .find_map(Option::take)
            .ok_or(PopError::Underflow)
    }

    /// Removes and returns the coin at the given pocket.
    ///
    /// Fails with [`PopError::Underflow`] if the slot holds nothing at all,
    /// with [`PopError::PocketOutOfRange`] if the index is beyond the
    /// capacity, or with [`PopError::EmptyPocket`] if that pocket is vacant.
    pub fn pop_at(&mut self, pocket: PocketIndex) -> Result<Coin, PopError> {
        if self.is_empty() {
            return Err(PopError::Underflow);
        }
        let capacity = self.capacity();
        let Some(p) = self.pockets.get_mut(pocket.get()) else {
            return Err(PopError::PocketOutOfRange {
                index: pocket,
                capacity,
            });
        };
        p.take().ok_or(PopError::EmptyPocket { index: pocket })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(title: &str, diameter: f64) -> Coin {
        Coin::builder("Test", "Test", title, Millimeters::new(diameter)).build()
    }

    fn pi(i: usize) -> PocketIndex {
        PocketIndex::new(i)
    }

    #[test]
    fn test_new_slot_is_empty() {
        let slot = Slot::new(4, Millimeters::new(25.0));
        assert_eq!(slot.capacity(), 4);
        assert_eq!(slot.occupied_count(), 0);
        assert!(slot.is_empty());
        assert!(!slot.is_full());
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        let _ = Slot::new(0, Millimeters::new(25.0));
    }

    #[test]
    fn test_push_fills_lowest_pocket_first() {
        let mut slot = Slot::new(3, Millimeters::new(25.0));
        assert_eq!(slot.push(coin("a", 20.0)), Ok(pi(0)));
        assert_eq!(slot.push(coin("b", 20.0)), Ok(pi(1)));

        // Vacating pocket 0 makes it the next insertion target again.
        slot.pop_at(pi(0)).unwrap();
        assert_eq!(slot.push(coin("c", 20.0)), Ok(pi(0)));
    }

    #[test]
    fn test_push_over_capacity_returns_coin() {
        let mut slot = Slot::new(1, Millimeters::new(25.0));
        slot.push(coin("a", 20.0)).unwrap();
        match slot.push(coin("b", 20.0)) {
            Err(PushError::OverCapacity(c)) => assert_eq!(c.title(), "b"),
            other => panic!("expected OverCapacity, got {:?}", other),
        }
        assert_eq!(slot.occupied_count(), 1);
    }

    #[test]
    fn test_push_oversized_returns_coin() {
        let mut slot = Slot::new(2, Millimeters::new(17.0));
        match slot.push(coin("big", 30.0)) {
            Err(PushError::Oversized { coin: c, limit }) => {
                assert_eq!(c.title(), "big");
                assert_eq!(limit, Millimeters::new(17.0));
            }
            other => panic!("expected Oversized, got {:?}", other),
        }
        assert!(slot.is_empty());
    }

    #[test]
    fn test_full_slot_rejects_before_size_check() {
        // A full slot reports OverCapacity even for a coin that would also
        // have been too wide.
        let mut slot = Slot::new(1, Millimeters::new(17.0));
        slot.push(coin("a", 17.0)).unwrap();
        match slot.push(coin("big", 30.0)) {
            Err(PushError::OverCapacity(_)) => {}
            other => panic!("expected OverCapacity, got {:?}", other),
        }
    }

    #[test]
    fn test_push_accepts_exact_limit() {
        let mut slot = Slot::new(1, Millimeters::new(25.0));
        assert!(slot.push(coin("edge", 25.0)).is_ok());
    }

    #[test]
    fn test_pop_last_removes_highest_index() {
        let mut slot = Slot::new(3, Millimeters::new(25.0));
        slot.push(coin("a", 20.0)).unwrap();
        slot.push(coin("b", 20.0)).unwrap();

        assert_eq!(slot.pop_last().unwrap().title(), "b");
        assert_eq!(slot.pop_last().unwrap().title(), "a");
        assert_eq!(slot.pop_last(), Err(PopError::Underflow));
    }

    #[test]
    fn test_pop_at() {
        let mut slot = Slot::new(3, Millimeters::new(25.0));
        slot.push(coin("a", 20.0)).unwrap();
        slot.push(coin("b", 20.0)).unwrap();

        assert_eq!(slot.pop_at(pi(0)).unwrap().title(), "a");
        assert_eq!(
            slot.pop_at(pi(0)),
            Err(PopError::EmptyPocket { index: pi(0) })
        );
        assert_eq!(
            slot.pop_at(pi(9)),
            Err(PopError::PocketOutOfRange {
                index: pi(9),
                capacity: 3
            })
        );
    }

    #[test]
    fn test_pop_at_on_empty_slot_underflows() {
        // Underflow takes precedence over the bounds check, so even an
        // out-of-range index reports the emptier condition first.
        let mut slot = Slot::new(2, Millimeters::new(25.0));
        assert_eq!(slot.pop_at(pi(9)), Err(PopError::Underflow));
    }

    #[test]
    fn test_coin_at() {
        let mut slot = Slot::new(2, Millimeters::new(25.0));
        slot.push(coin("a", 20.0)).unwrap();
        assert_eq!(slot.coin_at(pi(0)).map(Coin::title), Some("a"));
        assert_eq!(slot.coin_at(pi(1)), None);
        assert_eq!(slot.coin_at(pi(5)), None);
    }

    #[test]
    fn test_is_full_and_empty_transitions() {
        let mut slot = Slot::new(2, Millimeters::new(25.0));
        assert!(slot.is_empty());
        slot.push(coin("a", 20.0)).unwrap();
        assert!(!slot.is_empty());
        assert!(!slot.is_full());
        slot.push(coin("b", 20.0)).unwrap();
        assert!(slot.is_full());
        assert_eq!(slot.occupied_count(), 2);
    }
}
