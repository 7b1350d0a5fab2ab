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

//! The `browse` subcommand: a line-oriented pager over the planned book.

use crate::args::BrowseArgs;
use anyhow::{Context, Result};
use numisma_model::book::Book;
use numisma_solver::allocator::PageAllocator;
use std::io::{self, BufRead, Write};

pub fn run(args: BrowseArgs) -> Result<()> {
    let coins = super::load_collection(&args.load)?;
    let outcome = PageAllocator::new()
        .allocate(coins)
        .context("allocation failed")?;

    let book = outcome.book();
    if book.is_empty() {
        println!("The collection is empty; there is nothing to browse.");
        return Ok(());
    }
    browse_book(book)
}

/// One parsed line of pager input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseCommand {
    Next,
    Prev,
    Goto(usize),
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> BrowseCommand {
    let line = line.trim();
    match line {
        "n" => BrowseCommand::Next,
        "p" => BrowseCommand::Prev,
        "q" => BrowseCommand::Quit,
        _ => {
            if let Some(rest) = line.strip_prefix('g') {
                if let Ok(page) = rest.trim().parse::<usize>() {
                    return BrowseCommand::Goto(page);
                }
            }
            BrowseCommand::Unknown
        }
    }
}

fn browse_book(book: &Book) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let last = book.num_pages() - 1;
    let mut current = 0_usize;

    loop {
        render_page(current, book);
        print!("[n]ext [p]rev [g]oto <page> [q]uit > ");
        io::stdout().flush()?;

        let mut line = String::new();
        // EOF ends the session, so piped input terminates cleanly.
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        match parse_command(&line) {
            BrowseCommand::Next => current = (current + 1).min(last),
            BrowseCommand::Prev => current = current.saturating_sub(1),
            BrowseCommand::Goto(page) if (1..=book.num_pages()).contains(&page) => {
                current = page - 1;
            }
            BrowseCommand::Goto(_) => {
                println!("Pages run from 1 to {}", book.num_pages());
            }
            BrowseCommand::Quit => return Ok(()),
            BrowseCommand::Unknown => println!("Unknown command: {}", line.trim()),
        }
    }
}

fn render_page(index: usize, book: &Book) {
    let page = &book.pages()[index];
    println!();
    println!("Page {}/{}: {}", index + 1, book.num_pages(), page);
    for (slot_number, slot) in page.slots().iter().enumerate() {
        println!(
            "  Slot {} (up to {}): {}/{}",
            slot_number + 1,
            slot.max_diameter(),
            slot.occupied_count(),
            slot.capacity()
        );
        for coin in slot.pockets().iter().flatten() {
            println!("    {} [{}]", coin, coin.diameter());
        }
    }
}
