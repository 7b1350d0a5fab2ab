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

//! Statistics reporting for allocation runs.
//!
//! This module defines a lightweight container for tracking aggregate metrics
//! during an allocation: the input size, pages opened per phase, the residual
//! strategy that won the planning step, and total elapsed time. Updates use
//! saturating arithmetic and inline methods for per-event accounting, and the
//! resulting `AllocationStatistics` can be printed by CLI tools or inspected
//! by tests to audit how a book came to be.

use crate::plan::ResidualPlan;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationStatistics {
    /// Number of coins handed to the allocator.
    pub coins_total: u64,

    /// Pages opened during the bulk fill phase.
    pub bulk_pages: u64,

    /// Pages opened while materializing the residual plan.
    pub residual_pages: u64,

    /// The residual strategy the planner selected, once planning ran.
    pub residual_plan: Option<ResidualPlan>,

    /// Total time taken by the allocation.
    pub time_total: Duration,
}

impl Default for AllocationStatistics {
    fn default() -> Self {
        Self {
            coins_total: 0,
            bulk_pages: 0,
            residual_pages: 0,
            residual_plan: None,
            time_total: Duration::ZERO,
        }
    }
}

impl AllocationStatistics {
    /// Sets the number of coins in the input.
    #[inline]
    pub fn set_coins_total(&mut self, count: u64) {
        self.coins_total = count;
    }

    /// Called when the bulk fill opens a page.
    #[inline]
    pub fn on_bulk_page(&mut self) {
        self.bulk_pages = self.bulk_pages.saturating_add(1);
    }

    /// Called when materialization opens a page.
    #[inline]
    pub fn on_residual_page(&mut self) {
        self.residual_pages = self.residual_pages.saturating_add(1);
    }

    /// Records the residual plan the planner chose.
    #[inline]
    pub fn set_residual_plan(&mut self, plan: ResidualPlan) {
        self.residual_plan = Some(plan);
    }

    /// Sets the total time taken by the allocation.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Total pages opened across both phases.
    #[inline]
    pub fn total_pages(&self) -> u64 {
        self.bulk_pages.saturating_add(self.residual_pages)
    }
}

impl std::fmt::Display for AllocationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Numisma-Allocator Statistics:")?;
        writeln!(f, "   Coins:           {}", self.coins_total)?;
        writeln!(f, "   Bulk Pages:      {}", self.bulk_pages)?;
        writeln!(f, "   Residual Pages:  {}", self.residual_pages)?;
        match &self.residual_plan {
            Some(plan) => writeln!(f, "   Residual Plan:   {}", plan)?,
            None => writeln!(f, "   Residual Plan:   -")?,
        }
        writeln!(f, "   Total Time:      {:?}", self.time_total)?;
        Ok(())
    }
}
