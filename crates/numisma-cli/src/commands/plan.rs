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

//! The `plan` subcommand: allocate and print the book.

use crate::args::PlanArgs;
use anyhow::{Context, Result};
use numisma_solver::{allocator::PageAllocator, audit::verify_book_against};
use tracing::info;

pub fn run(args: PlanArgs) -> Result<()> {
    let coins = super::load_collection(&args.load)?;

    // The allocator consumes the collection; keep a copy only when the
    // audit needs one to compare against.
    let expected = args.verify.then(|| coins.clone());
    let outcome = PageAllocator::new()
        .allocate(coins)
        .context("allocation failed")?;

    println!("{}", outcome.book());
    println!("{}", outcome.statistics());

    if let Some(expected) = expected {
        verify_book_against(outcome.book(), &expected).context("book audit failed")?;
        info!("Audit passed: every coin sits in a pocket that fits it");
    }
    Ok(())
}
