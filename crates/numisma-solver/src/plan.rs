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

//! Residual planning: packaging what the bulk fill leaves behind.
//!
//! After the bulk fill, each of the 17, 25, and 34 classes holds fewer coins
//! than one dedicated page of its size, and the question is how to cover
//! that remainder with the fewest pages. The planner simulates four
//! candidate strategies on the counts alone, without touching a coin:
//!
//! - MIX pages only;
//! - one extra dedicated "34" page, then MIX pages for the rest;
//! - one extra dedicated "25" page, then MIX pages;
//! - one extra dedicated "17" page, then MIX pages.
//!
//! The first strategy seeds the best plan, and a later candidate replaces it
//! only with strictly fewer pages, so equal page counts always resolve to
//! the earliest strategy and the outcome is deterministic. The returned
//! [`ResidualPlan`] records the choice; materializing it is the allocator's
//! job.

use crate::class::SizeClass;

/// Coins of each class one MIX page absorbs in the simulation, matching its
/// three slots.
const MIX_PLAN_34: usize = 5;
const MIX_PLAN_25: usize = 12;
const MIX_PLAN_17: usize = 16;

/// Coin capacity of the one extra dedicated page a strategy may open. Fixed
/// numbers of the packing scheme, not derived from the catalog.
const EXTRA_PAGE_34: usize = 20;
const EXTRA_PAGE_25: usize = 30;
const EXTRA_PAGE_17: usize = 48;

/// The per-class coin counts left over after the bulk fill.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ResidualCounts {
    /// Remaining coins of class 34.
    pub class_34: usize,
    /// Remaining coins of class 25.
    pub class_25: usize,
    /// Remaining coins of class 17.
    pub class_17: usize,
}

impl ResidualCounts {
    /// Creates residual counts from the three small classes.
    #[inline]
    pub const fn new(class_34: usize, class_25: usize, class_17: usize) -> Self {
        Self {
            class_34,
            class_25,
            class_17,
        }
    }

    /// Returns `true` when nothing remains to place.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.class_34 == 0 && self.class_25 == 0 && self.class_17 == 0
    }
}

/// The pages chosen to cover a remainder: at most one extra dedicated page,
/// then MIX pages.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResidualPlan {
    extra: Option<SizeClass>,
    mix_pages: usize,
}

impl ResidualPlan {
    /// The class whose dedicated layout gets one extra page, if any.
    #[inline]
    pub fn extra(&self) -> Option<SizeClass> {
        self.extra
    }

    /// The number of MIX pages the simulation required.
    #[inline]
    pub fn mix_pages(&self) -> usize {
        self.mix_pages
    }

    /// The total page count of the plan.
    #[inline]
    pub fn total_pages(&self) -> usize {
        self.mix_pages + usize::from(self.extra.is_some())
    }
}

impl std::fmt::Display for ResidualPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.extra, self.mix_pages) {
            (None, 0) => write!(f, "no extra pages"),
            (None, pages) => write!(f, "{} MIX", pages),
            (Some(class), 0) => write!(f, "1 {}", class.dedicated_kind().product_name()),
            (Some(class), pages) => write!(
                f,
                "1 {} + {} MIX",
                class.dedicated_kind().product_name(),
                pages
            ),
        }
    }
}

/// Chooses the fewest-page way to package the remainder.
///
/// Ties keep the earlier candidate; with all four candidates equal, that is
/// the MIX-only plan. A zero remainder plans zero pages.
///
/// # Examples
///
/// ```rust
/// # use numisma_solver::plan::{plan_residual, ResidualCounts};
///
/// // Two stray 17 mm coins fit one MIX page; a dedicated page gains nothing.
/// let plan = plan_residual(ResidualCounts::new(0, 0, 2));
/// assert_eq!(plan.extra(), None);
/// assert_eq!(plan.mix_pages(), 1);
/// ```
pub fn plan_residual(counts: ResidualCounts) -> ResidualPlan {
    let mut best = ResidualPlan {
        extra: None,
        mix_pages: mix_pages_needed(counts),
    };

    for class in [SizeClass::D34, SizeClass::D25, SizeClass::D17] {
        let candidate = ResidualPlan {
            extra: Some(class),
            mix_pages: mix_pages_needed(after_dedicated(counts, class)),
        };
        if candidate.total_pages() < best.total_pages() {
            best = candidate;
        }
    }

    best
}

/// Simulates covering `counts` with MIX pages alone and returns the page
/// count.
fn mix_pages_needed(mut counts: ResidualCounts) -> usize {
    let mut pages = 0;
    while !counts.is_zero() {
        counts.class_34 = counts.class_34.saturating_sub(MIX_PLAN_34);
        counts.class_25 = counts.class_25.saturating_sub(MIX_PLAN_25);
        counts.class_17 = counts.class_17.saturating_sub(MIX_PLAN_17);
        pages += 1;
    }
    pages
}

/// The counts left after one extra dedicated page absorbs its class.
fn after_dedicated(mut counts: ResidualCounts, class: SizeClass) -> ResidualCounts {
    match class {
        SizeClass::D34 => counts.class_34 = counts.class_34.saturating_sub(EXTRA_PAGE_34),
        SizeClass::D25 => counts.class_25 = counts.class_25.saturating_sub(EXTRA_PAGE_25),
        SizeClass::D17 => counts.class_17 = counts.class_17.saturating_sub(EXTRA_PAGE_17),
        // 44 mm coins never reach the residual phase.
        SizeClass::D44 => {}
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_remainder_plans_zero_pages() {
        let plan = plan_residual(ResidualCounts::default());
        assert_eq!(plan.extra(), None);
        assert_eq!(plan.mix_pages(), 0);
        assert_eq!(plan.total_pages(), 0);
    }

    #[test]
    fn test_small_remainder_takes_one_mix_page() {
        let plan = plan_residual(ResidualCounts::new(0, 0, 2));
        assert_eq!(plan.extra(), None);
        assert_eq!(plan.mix_pages(), 1);
    }

    #[test]
    fn test_tie_keeps_mix_only() {
        // Five class-34 coins: one MIX page and one dedicated "34" page both
        // cost a single page, so the MIX-only seed survives.
        let plan = plan_residual(ResidualCounts::new(5, 0, 0));
        assert_eq!(plan.extra(), None);
        assert_eq!(plan.total_pages(), 1);
    }

    #[test]
    fn test_dedicated_34_beats_mix_cascade() {
        // 18 class-34 coins need four MIX pages (5 per page) but fit one
        // dedicated "34" page outright.
        let plan = plan_residual(ResidualCounts::new(18, 0, 0));
        assert_eq!(plan.extra(), Some(SizeClass::D34));
        assert_eq!(plan.mix_pages(), 0);
        assert_eq!(plan.total_pages(), 1);
    }

    #[test]
    fn test_dedicated_25_beats_mix_cascade() {
        let plan = plan_residual(ResidualCounts::new(0, 25, 0));
        assert_eq!(plan.extra(), Some(SizeClass::D25));
        assert_eq!(plan.total_pages(), 1);
    }

    #[test]
    fn test_dedicated_17_beats_mix_cascade() {
        let plan = plan_residual(ResidualCounts::new(0, 0, 20));
        assert_eq!(plan.extra(), Some(SizeClass::D17));
        assert_eq!(plan.total_pages(), 1);
    }

    #[test]
    fn test_full_mix_remainder_takes_one_page() {
        let plan = plan_residual(ResidualCounts::new(5, 12, 16));
        assert_eq!(plan.extra(), None);
        assert_eq!(plan.mix_pages(), 1);
    }

    #[test]
    fn test_chosen_plan_never_beaten_by_a_candidate() {
        // Independent re-simulation of all four candidates.
        fn mix(mut a: usize, mut b: usize, mut c: usize) -> usize {
            let mut pages = 0;
            while a > 0 || b > 0 || c > 0 {
                a = a.saturating_sub(5);
                b = b.saturating_sub(12);
                c = c.saturating_sub(16);
                pages += 1;
            }
            pages
        }

        for class_34 in 0..=24 {
            for class_25 in 0..=34 {
                for class_17 in 0..=52 {
                    let candidates = [
                        mix(class_34, class_25, class_17),
                        1 + mix(class_34.saturating_sub(20), class_25, class_17),
                        1 + mix(class_34, class_25.saturating_sub(30), class_17),
                        1 + mix(class_34, class_25, class_17.saturating_sub(48)),
                    ];
                    let best = candidates.iter().copied().min().unwrap_or(0);

                    let plan =
                        plan_residual(ResidualCounts::new(class_34, class_25, class_17));
                    assert_eq!(
                        plan.total_pages(),
                        best,
                        "suboptimal plan for remainder ({}, {}, {})",
                        class_34,
                        class_25,
                        class_17
                    );
                    // Equal counts never replace the seed.
                    if candidates[0] == best {
                        assert_eq!(plan.extra(), None);
                    }
                }
            }
        }
    }

    #[test]
    fn test_plan_display() {
        assert_eq!(
            format!("{}", plan_residual(ResidualCounts::default())),
            "no extra pages"
        );
        assert_eq!(
            format!("{}", plan_residual(ResidualCounts::new(0, 0, 2))),
            "1 MIX"
        );
        assert_eq!(
            format!("{}", plan_residual(ResidualCounts::new(18, 0, 0))),
            "1 NUMIS 34"
        );
        // (18, 0, 17) costs four MIX pages straight, but one "34" page plus
        // two MIX pages covers it in three.
        assert_eq!(
            format!("{}", plan_residual(ResidualCounts::new(18, 0, 17))),
            "1 NUMIS 34 + 2 MIX"
        );
    }
}
