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

//! The `regions` subcommand: group the collection geographically.

use crate::args::RegionsArgs;
use anyhow::Result;
use numisma_model::{
    coin::Coin,
    region::{region_of, Region},
};
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

pub fn run(args: RegionsArgs) -> Result<()> {
    let coins = super::load_collection(&args.load)?;
    let breakdown = breakdown(&coins);

    println!("Collection by region ({} coins)", coins.len());
    println!();
    for region in Region::ALL {
        let Some(countries) = breakdown.countries.get(&region) else {
            continue;
        };
        let count = breakdown.counts.get(&region).copied().unwrap_or(0);
        let names: Vec<&str> = countries.iter().copied().collect();
        println!("   {:<16} {:>5} coins   ({})", region, count, names.join(", "));
    }
    if !breakdown.unassigned.is_empty() {
        println!();
        println!("   Not mapped to a region:");
        for (country, count) in &breakdown.unassigned {
            println!("      {:<20} {:>5} coins", country, count);
        }
    }
    Ok(())
}

/// Per-region coin counts and country sets, plus countries the region
/// table does not know.
#[derive(Debug, Default)]
struct RegionBreakdown<'a> {
    counts: FxHashMap<Region, usize>,
    countries: FxHashMap<Region, BTreeSet<&'a str>>,
    unassigned: BTreeMap<&'a str, usize>,
}

fn breakdown(coins: &[Coin]) -> RegionBreakdown<'_> {
    let mut breakdown = RegionBreakdown::default();
    for coin in coins {
        match region_of(coin.country()) {
            Some(region) => {
                *breakdown.counts.entry(region).or_default() += 1;
                breakdown
                    .countries
                    .entry(region)
                    .or_default()
                    .insert(coin.country());
            }
            None => *breakdown.unassigned.entry(coin.country()).or_default() += 1,
        }
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use numisma_core::measure::Millimeters;

    fn coin(country: &str) -> Coin {
        Coin::builder(country, country, "1 Unit", Millimeters::new(20.0)).build()
    }

    #[test]
    fn test_breakdown_groups_by_region() {
        let coins = vec![
            coin("Japan"),
            coin("Japan"),
            coin("France"),
            coin("Atlantis"),
        ];
        let breakdown = breakdown(&coins);

        assert_eq!(breakdown.counts.get(&Region::Asia), Some(&2));
        assert_eq!(breakdown.counts.get(&Region::WesternEurope), Some(&1));
        assert!(breakdown.countries[&Region::Asia].contains("Japan"));
        assert_eq!(breakdown.unassigned.get("Atlantis"), Some(&1));
    }

    #[test]
    fn test_breakdown_of_empty_collection() {
        let breakdown = breakdown(&[]);
        assert!(breakdown.counts.is_empty());
        assert!(breakdown.unassigned.is_empty());
    }
}
