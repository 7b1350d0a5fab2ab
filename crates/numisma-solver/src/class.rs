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

//! Diameter classes and the allocator's per-class working queues.
//!
//! Every coin the catalog can hold belongs to exactly one size class, named
//! after the smallest pocket limit that still accepts it. Classification is
//! first-fit over the limits in ascending order, so a 20 mm coin is class 25
//! even though a 34 mm or 44 mm pocket would also take it. Coins wider than
//! the largest limit have no class; the allocator rejects them before
//! opening any page.
//!
//! `ClassQueues` holds the segmented coins between allocation phases. Coins
//! enter in sorted order and leave from the front, so each queue preserves
//! the deterministic order the sort phase established.

use numisma_core::measure::Millimeters;
use numisma_model::{coin::Coin, page::PageKind};
use std::collections::VecDeque;

/// A diameter class, named after the pocket limit it fills.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SizeClass {
    /// Diameter of at most 17 mm.
    D17,
    /// Diameter of at most 25 mm.
    D25,
    /// Diameter of at most 34 mm.
    D34,
    /// Diameter of at most 44 mm.
    D44,
}

impl SizeClass {
    /// All classes, smallest limit first. Classification order.
    pub const ALL: [SizeClass; 4] = [Self::D17, Self::D25, Self::D34, Self::D44];

    /// Classifies a diameter, or returns `None` when no catalog pocket is
    /// wide enough.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_solver::class::SizeClass;
    /// # use numisma_core::measure::Millimeters;
    ///
    /// assert_eq!(SizeClass::of(Millimeters::new(20.5)), Some(SizeClass::D25));
    /// assert_eq!(SizeClass::of(Millimeters::new(50.0)), None);
    /// ```
    #[inline]
    pub fn of(diameter: Millimeters) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| diameter <= class.limit())
    }

    /// Returns the class's pocket limit.
    #[inline]
    pub fn limit(&self) -> Millimeters {
        Millimeters::new(match self {
            Self::D17 => 17.0,
            Self::D25 => 25.0,
            Self::D34 => 34.0,
            Self::D44 => 44.0,
        })
    }

    /// Returns the catalog layout dedicated to this class.
    #[inline]
    pub const fn dedicated_kind(&self) -> PageKind {
        match self {
            Self::D17 => PageKind::D17,
            Self::D25 => PageKind::D25,
            Self::D34 => PageKind::D34,
            Self::D44 => PageKind::D44,
        }
    }

    /// Returns the class name ("17", "25", "34", "44").
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::D17 => "17",
            Self::D25 => "25",
            Self::D34 => "34",
            Self::D44 => "44",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The segmented coins, one FIFO queue per size class.
#[derive(Debug, Clone, Default)]
pub struct ClassQueues {
    d17: VecDeque<Coin>,
    d25: VecDeque<Coin>,
    d34: VecDeque<Coin>,
    d44: VecDeque<Coin>,
}

impl ClassQueues {
    /// Creates empty queues.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a coin to the back of its class queue.
    #[inline]
    pub fn push(&mut self, class: SizeClass, coin: Coin) {
        self.queue_mut(class).push_back(coin);
    }

    /// Removes and returns the front coin of a class queue.
    #[inline]
    pub fn pop_front(&mut self, class: SizeClass) -> Option<Coin> {
        self.queue_mut(class).pop_front()
    }

    /// Returns the number of coins waiting in one class.
    #[inline]
    pub fn len(&self, class: SizeClass) -> usize {
        match class {
            SizeClass::D17 => self.d17.len(),
            SizeClass::D25 => self.d25.len(),
            SizeClass::D34 => self.d34.len(),
            SizeClass::D44 => self.d44.len(),
        }
    }

    /// Returns the number of coins waiting across all classes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.d17.len() + self.d25.len() + self.d34.len() + self.d44.len()
    }

    /// Returns `true` when every queue is drained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Borrows one class queue mutably.
    #[inline]
    pub fn queue_mut(&mut self, class: SizeClass) -> &mut VecDeque<Coin> {
        match class {
            SizeClass::D17 => &mut self.d17,
            SizeClass::D25 => &mut self.d25,
            SizeClass::D34 => &mut self.d34,
            SizeClass::D44 => &mut self.d44,
        }
    }
}
