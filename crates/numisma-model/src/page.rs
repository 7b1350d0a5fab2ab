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

//! Pages and the fixed layout catalog.
//!
//! A page is an ordered sequence of slots drawn from one of five fixed
//! layouts, the NUMIS album sheet line. Every layout orders its slots
//! largest size limit first, which is what makes first-fit insertion
//! correct: a coin lands in the leftmost slot that has room and accepts its
//! diameter, so smaller coins spill into larger slots only when their own
//! slots are full.
//!
//! The catalog is compile-time constant data; `Page::new` and `get_page`
//! are pure factories over it.

use crate::{
    coin::Coin,
    index::{PocketIndex, SlotIndex},
    slot::{PopError, PushError, Slot},
};
use numisma_core::measure::Millimeters;
use smallvec::SmallVec;

/// One slot's shape within a page layout.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SlotSpec {
    /// The number of pockets.
    pub capacity: usize,
    /// The size limit in millimeters.
    pub max_diameter: f64,
}

const LAYOUT_44: [SlotSpec; 3] = [SlotSpec {
    capacity: 4,
    max_diameter: 44.0,
}; 3];

const LAYOUT_34: [SlotSpec; 2] = [SlotSpec {
    capacity: 10,
    max_diameter: 34.0,
}; 2];

const LAYOUT_25: [SlotSpec; 3] = [
    SlotSpec {
        capacity: 12,
        max_diameter: 25.0,
    },
    SlotSpec {
        capacity: 6,
        max_diameter: 25.0,
    },
    SlotSpec {
        capacity: 12,
        max_diameter: 25.0,
    },
];

const LAYOUT_17: [SlotSpec; 3] = [SlotSpec {
    capacity: 16,
    max_diameter: 17.0,
}; 3];

const LAYOUT_MIX: [SlotSpec; 3] = [
    SlotSpec {
        capacity: 5,
        max_diameter: 34.0,
    },
    SlotSpec {
        capacity: 12,
        max_diameter: 25.0,
    },
    SlotSpec {
        capacity: 16,
        max_diameter: 17.0,
    },
];

/// The identity of a page layout in the fixed catalog.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::page::PageKind;
///
/// assert_eq!(PageKind::from_name("MIX"), Some(PageKind::Mix));
/// assert_eq!(PageKind::D44.capacity(), 12);
/// assert_eq!(PageKind::Mix.capacity(), 33);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PageKind {
    /// Three slots of 4 pockets each, up to 44 mm.
    D44,
    /// Two slots of 10 pockets each, up to 34 mm.
    D34,
    /// Slots of 12, 6, and 12 pockets, up to 25 mm.
    D25,
    /// Three slots of 16 pockets each, up to 17 mm.
    D17,
    /// One mixed sheet: 5 pockets up to 34 mm, 12 up to 25 mm, 16 up to 17 mm.
    Mix,
}

impl PageKind {
    /// All catalog layouts, largest size limit first.
    pub const ALL: [PageKind; 5] = [Self::D44, Self::D34, Self::D25, Self::D17, Self::Mix];

    /// Returns the catalog name ("44", "34", "25", "17", "MIX").
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::D44 => "44",
            Self::D34 => "34",
            Self::D25 => "25",
            Self::D17 => "17",
            Self::Mix => "MIX",
        }
    }

    /// Returns the manufacturer's sheet name (e.g. "NUMIS 44").
    #[inline]
    pub const fn product_name(&self) -> &'static str {
        match self {
            Self::D44 => "NUMIS 44",
            Self::D34 => "NUMIS 34",
            Self::D25 => "NUMIS 25",
            Self::D17 => "NUMIS 17",
            Self::Mix => "NUMIS MIX",
        }
    }

    /// Parses a catalog name into a `PageKind`.
    ///
    /// Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "44" => Some(Self::D44),
            "34" => Some(Self::D34),
            "25" => Some(Self::D25),
            "17" => Some(Self::D17),
            "MIX" => Some(Self::Mix),
            _ => None,
        }
    }

    /// Returns the layout's slot shapes in page order.
    #[inline]
    pub const fn layout(&self) -> &'static [SlotSpec] {
        match self {
            Self::D44 => &LAYOUT_44,
            Self::D34 => &LAYOUT_34,
            Self::D25 => &LAYOUT_25,
            Self::D17 => &LAYOUT_17,
            Self::Mix => &LAYOUT_MIX,
        }
    }

    /// Returns the total pocket count across the layout's slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.layout().iter().map(|spec| spec.capacity).sum()
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns a fresh, empty page for a recognized catalog name.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::page::get_page;
///
/// let page = get_page("25").unwrap();
/// assert_eq!(page.capacity(), 30);
/// assert!(get_page("NUMIS 99").is_none());
/// ```
#[inline]
pub fn get_page(name: &str) -> Option<Page> {
    PageKind::from_name(name).map(Page::new)
}

/// An album page: an ordered sequence of slots with a fixed layout.
///
/// The slot structure is immutable after construction; only pocket contents
/// change, through `push` and the `pop` methods.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::{coin::Coin, page::{Page, PageKind}};
/// # use numisma_core::measure::Millimeters;
///
/// let mut page = Page::new(PageKind::Mix);
/// let coin = Coin::builder("Chile", "Chile", "1 Peso", Millimeters::new(27.0)).build();
/// let (slot, pocket) = page.push(coin).unwrap();
/// assert_eq!(slot.get(), 0); // the 34 mm slot is the first that fits it
/// assert_eq!(pocket.get(), 0);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Page {
    kind: PageKind,
    slots: SmallVec<[Slot; 3]>,
}

impl Page {
    /// Creates an empty page of the given layout.
    pub fn new(kind: PageKind) -> Self {
        let slots = kind
            .layout()
            .iter()
            .map(|spec| Slot::new(spec.capacity, Millimeters::new(spec.max_diameter)))
            .collect();
        Self { kind, slots }
    }

    /// Returns the layout identity.
    #[inline]
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Returns the catalog name of the layout.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns the slots in page order.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the number of slots.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the total pocket count across all slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.iter().map(Slot::capacity).sum()
    }

    /// Returns the number of occupied pockets across all slots.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().map(Slot::occupied_count).sum()
    }

    /// Returns `true` if every slot is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Slot::is_full)
    }

    /// Returns `true` if every slot is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    /// Inserts a coin into the first slot that has room and accepts its
    /// diameter, scanning slots in page order.
    ///
    /// Size rejections skip to the next slot; they are not fatal. Fails with
    /// [`PushError::OverCapacity`] when the page is full, or with
    /// [`PushError::NoCompatibleSlot`] when the page still has room but
    /// every slot with a vacant pocket is too small for the coin.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_model::{coin::Coin, page::{Page, PageKind}, slot::PushError};
    /// # use numisma_core::measure::Millimeters;
    ///
    /// // A 30 mm coin fits no slot of the "17" layout even though the page
    /// // is completely empty.
    /// let mut page = Page::new(PageKind::D17);
    /// let coin = Coin::builder("", "", "Crown", Millimeters::new(30.0)).build();
    /// assert!(matches!(page.push(coin), Err(PushError::NoCompatibleSlot(_))));
    /// ```
    pub fn push(&mut self, coin: Coin) -> Result<(SlotIndex, PocketIndex), PushError> {
        if self.is_full() {
            return Err(PushError::OverCapacity(coin));
        }
        let mut coin = coin;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            match slot.push(coin) {
                Ok(pocket) => return Ok((SlotIndex::new(i), pocket)),
                // Full or too small; either way the next slot may take it.
                Err(err) => coin = err.into_coin(),
            }
        }
        Err(PushError::NoCompatibleSlot(coin))
    }

    /// Removes and returns the last coin on the page: scanning slots in
    /// reverse page order, the occupied pocket of highest index within the
    /// first non-empty slot.
    ///
    /// Fails with [`PopError::Underflow`] if the page is empty.
    pub fn pop_last(&mut self) -> Result<Coin, PopError> {
        self.slots
            .iter_mut()
            .rev()
            .find_map(|slot| slot.pop_last().ok())
            .ok_or(PopError::Underflow)
    }

    /// Removes and returns the coin at the given slot and pocket.
    ///
    /// Fails with [`PopError::Underflow`] if the whole page is empty, with
    /// [`PopError::SlotOutOfRange`] if the slot index is invalid, and
    /// otherwise delegates to [`Slot::pop_at`].
    pub fn pop_at(&mut self, slot: SlotIndex, pocket: PocketIndex) -> Result<Coin, PopError> {
        if self.is_empty() {
            return Err(PopError::Underflow);
        }
        let len = self.slots.len();
        let Some(s) = self.slots.get_mut(slot.get()) else {
            return Err(PopError::SlotOutOfRange { index: slot, len });
        };
        s.pop_at(pocket)
    }

    /// Returns the coin at the given slot and pocket, if both indices are in
    /// range and the pocket is occupied.
    #[inline]
    pub fn coin_at(&self, slot: SlotIndex, pocket: PocketIndex) -> Option<&Coin> {
        self.slots.get(slot.get()).and_then(|s| s.coin_at(pocket))
    }

    /// Iterates over every pocket (occupied or vacant) across all slots,
    /// slot order preserved. The iterator always yields exactly
    /// [`Page::capacity`] items.
    #[inline]
    pub fn coins(&self) -> impl Iterator<Item = Option<&Coin>> {
        self.slots
            .iter()
            .flat_map(|slot| slot.pockets().iter().map(Option::as_ref))
    }

    /// Iterates over the occupied pockets only, slot order preserved.
    #[inline]
    pub fn occupied_coins(&self) -> impl Iterator<Item = &Coin> {
        self.coins().flatten()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}/{})",
            self.kind.product_name(),
            self.occupied_count(),
            self.capacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(title: &str, diameter: f64) -> Coin {
        Coin::builder("Test", "Test", title, Millimeters::new(diameter)).build()
    }

    fn si(i: usize) -> SlotIndex {
        SlotIndex::new(i)
    }

    fn pi(i: usize) -> PocketIndex {
        PocketIndex::new(i)
    }

    #[test]
    fn test_catalog_capacities() {
        assert_eq!(PageKind::D44.capacity(), 12);
        assert_eq!(PageKind::D34.capacity(), 20);
        assert_eq!(PageKind::D25.capacity(), 30);
        assert_eq!(PageKind::D17.capacity(), 48);
        assert_eq!(PageKind::Mix.capacity(), 33);
    }

    #[test]
    fn test_catalog_slot_order_is_largest_first() {
        for kind in PageKind::ALL {
            let layout = kind.layout();
            for pair in layout.windows(2) {
                assert!(
                    pair[0].max_diameter >= pair[1].max_diameter,
                    "layout {} is not ordered largest first",
                    kind
                );
            }
        }
    }

    #[test]
    fn test_get_page() {
        assert_eq!(get_page("44").map(|p| p.capacity()), Some(12));
        assert_eq!(get_page("MIX").map(|p| p.num_slots()), Some(3));
        assert!(get_page("NUMIS 44").is_none());
        assert!(get_page("77").is_none());
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in PageKind::ALL {
            assert_eq!(PageKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_push_first_fit() {
        let mut page = Page::new(PageKind::D25);
        // 12 coins fill slot 0, the 13th spills into slot 1.
        for i in 0..12 {
            let (slot, _) = page.push(coin(&format!("c{i}"), 24.0)).unwrap();
            assert_eq!(slot, si(0));
        }
        let (slot, pocket) = page.push(coin("c12", 24.0)).unwrap();
        assert_eq!(slot, si(1));
        assert_eq!(pocket, pi(0));
    }

    #[test]
    fn test_push_skips_undersized_slots() {
        // On a MIX page a 30 mm coin only fits the 34 mm slot; once that
        // slot is full the page has room but no compatible slot.
        let mut page = Page::new(PageKind::Mix);
        for i in 0..5 {
            let (slot, _) = page.push(coin(&format!("c{i}"), 30.0)).unwrap();
            assert_eq!(slot, si(0));
        }
        match page.push(coin("c5", 30.0)) {
            Err(PushError::NoCompatibleSlot(c)) => assert_eq!(c.title(), "c5"),
            other => panic!("expected NoCompatibleSlot, got {:?}", other),
        }
        assert!(!page.is_full());
    }

    #[test]
    fn test_push_small_coin_lands_in_large_slot_first() {
        // First-fit means a 25 mm coin occupies the MIX page's 34 mm slot
        // while it has room.
        let mut page = Page::new(PageKind::Mix);
        let (slot, _) = page.push(coin("small", 20.0)).unwrap();
        assert_eq!(slot, si(0));
    }

    #[test]
    fn test_push_oversized_for_every_slot() {
        let mut page = Page::new(PageKind::D17);
        assert!(matches!(
            page.push(coin("wide", 30.0)),
            Err(PushError::NoCompatibleSlot(_))
        ));
        assert!(page.is_empty());
    }

    #[test]
    fn test_push_full_page() {
        let mut page = Page::new(PageKind::D44);
        for i in 0..12 {
            page.push(coin(&format!("c{i}"), 40.0)).unwrap();
        }
        assert!(page.is_full());
        assert!(matches!(
            page.push(coin("extra", 40.0)),
            Err(PushError::OverCapacity(_))
        ));
    }

    #[test]
    fn test_pop_last_scans_slots_in_reverse() {
        let mut page = Page::new(PageKind::D25);
        // Both coins land in slot 0; the reverse scan skips the empty rear
        // slots and pops slot 0's highest occupied pocket first.
        page.push(coin("a", 24.0)).unwrap();
        page.push(coin("b", 24.0)).unwrap();
        assert_eq!(page.pop_last().unwrap().title(), "b");
        assert_eq!(page.pop_last().unwrap().title(), "a");
        assert_eq!(page.pop_last(), Err(PopError::Underflow));
    }

    #[test]
    fn test_pop_at_delegates() {
        let mut page = Page::new(PageKind::D25);
        page.push(coin("a", 24.0)).unwrap();
        page.push(coin("b", 24.0)).unwrap();

        assert_eq!(page.pop_at(si(0), pi(0)).unwrap().title(), "a");
        assert_eq!(
            page.pop_at(si(9), pi(0)),
            Err(PopError::SlotOutOfRange {
                index: si(9),
                len: 3
            })
        );
        assert_eq!(
            page.pop_at(si(1), pi(0)),
            Err(PopError::Underflow),
            "delegated pop on an empty slot reports underflow"
        );
    }

    #[test]
    fn test_pop_at_empty_page() {
        let mut page = Page::new(PageKind::D34);
        assert_eq!(page.pop_at(si(0), pi(0)), Err(PopError::Underflow));
    }

    #[test]
    fn test_coins_yields_every_pocket() {
        let mut page = Page::new(PageKind::Mix);
        page.push(coin("a", 30.0)).unwrap();
        page.push(coin("b", 12.0)).unwrap();

        let pockets: Vec<_> = page.coins().collect();
        assert_eq!(pockets.len(), page.capacity());
        assert_eq!(pockets.iter().filter(|p| p.is_some()).count(), 2);
        assert_eq!(page.occupied_coins().count(), 2);
    }

    #[test]
    fn test_coin_at() {
        let mut page = Page::new(PageKind::Mix);
        page.push(coin("a", 30.0)).unwrap();
        assert_eq!(page.coin_at(si(0), pi(0)).map(Coin::title), Some("a"));
        assert_eq!(page.coin_at(si(1), pi(0)), None);
        assert_eq!(page.coin_at(si(7), pi(0)), None);
    }

    #[test]
    fn test_display() {
        let mut page = Page::new(PageKind::D44);
        page.push(coin("a", 40.0)).unwrap();
        assert_eq!(format!("{}", page), "NUMIS 44 (1/12)");
    }
}
