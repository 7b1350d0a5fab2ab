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

//! Subcommand implementations.

pub mod browse;
pub mod plan;
pub mod regions;

use crate::args::LoadArgs;
use anyhow::{Context, Result};
use numisma_model::{coin::Coin, loading::CollectionLoader};
use tracing::info;

/// Loads the collection named by `args`, with exclusions and leniency
/// applied.
fn load_collection(args: &LoadArgs) -> Result<Vec<Coin>> {
    let loader = CollectionLoader::new()
        .exclude_collections(args.exclude.iter().cloned())
        .lenient(args.lenient);
    let coins = loader
        .from_path(&args.csv)
        .with_context(|| format!("failed to load collection from {}", args.csv.display()))?;
    info!(coins = coins.len(), "Collection loaded");
    Ok(coins)
}
