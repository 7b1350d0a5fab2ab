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

//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Plans and inspects coin album books from Numista collection exports.
#[derive(Debug, Parser)]
#[command(name = "numisma", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Packs the collection into album pages and prints the book.
    Plan(PlanArgs),
    /// Steps through the planned book page by page.
    Browse(BrowseArgs),
    /// Groups the collection by world region.
    Regions(RegionsArgs),
}

/// Arguments shared by every subcommand that reads a collection export.
#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Path to the Numista CSV export.
    pub csv: PathBuf,

    /// Skips rows whose Collection column matches (repeatable).
    #[arg(long = "exclude", value_name = "COLLECTION")]
    pub exclude: Vec<String>,

    /// Skips malformed rows instead of failing on them.
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Re-checks the finished book against the input collection.
    #[arg(long)]
    pub verify: bool,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}

#[derive(Debug, Args)]
pub struct RegionsArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}
