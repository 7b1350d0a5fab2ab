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

//! Collection loader for Numista-style CSV exports.
//!
//! This module turns a CSV export of a coin collection into a list of typed
//! [`Coin`] records, mapping the export's columns onto the model and
//! validating up front that every required column is present.
//!
//! The `CollectionLoader` emphasizes precise error reporting. A missing
//! header column fails the whole load and names the column; a cell that
//! cannot be parsed fails with the line number, the field, and the offending
//! text. Rows can be excluded by their `Collection` tag (swap lists,
//! duplicates, and so on), and a lenient mode skips unparsable rows instead
//! of aborting, for exports that mix coins with unmeasured exonumia.
//!
//! The loader accepts any reader, a file path, or a string slice, making it
//! convenient to integrate with tests and tooling. Columns beyond the
//! required set are optional and honored when present; in particular the
//! `Gregorian year` column covers issuers on non-Gregorian calendars, and
//! the `N# number (with link)` column tolerates the `N# 12345` prefix form
//! Numista writes.

use crate::coin::{Coin, CoinKind, Grade};
use numisma_core::measure::Millimeters;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path, str::FromStr};

/// The columns every usable export must carry.
const REQUIRED_COLUMNS: [&str; 12] = [
    "Country",
    "Issuer",
    "Face value",
    "Reference",
    "N# number (with link)",
    "Title",
    "Composition",
    "Weight",
    "Diameter",
    "Thickness",
    "Year",
    "Collection",
];

/// The error type for the collection loading process.
#[derive(Debug)]
pub enum LoadError {
    /// An I/O error occurred while opening or reading the input.
    Io(std::io::Error),
    /// The CSV layer rejected the input (malformed quoting, bad encoding).
    Csv(csv::Error),
    /// A required header column is absent.
    MissingColumn(MissingColumnError),
    /// A row carried a cell that could not be parsed.
    Row(RowError),
}

/// Details about a required column missing from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumnError {
    /// The name of the missing column.
    pub column: &'static str,
}

impl std::fmt::Display for MissingColumnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Input is missing the required column '{}'", self.column)
    }
}

impl std::error::Error for MissingColumnError {}

/// Details about a cell that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// The 1-based line the row starts on.
    pub line: u64,
    /// The column the failing cell belongs to.
    pub field: &'static str,
    /// The cell text that failed to parse.
    pub value: String,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line {}: could not parse field '{}' from '{}'",
            self.line, self.field, self.value
        )
    }
}

impl std::error::Error for RowError {}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Csv(e) => write!(f, "CSV error: {e}"),
            Self::MissingColumn(e) => write!(f, "Header error: {}", e),
            Self::Row(e) => write!(f, "Row error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<MissingColumnError> for LoadError {
    fn from(e: MissingColumnError) -> Self {
        Self::MissingColumn(e)
    }
}

impl From<RowError> for LoadError {
    fn from(e: RowError) -> Self {
        Self::Row(e)
    }
}

/// One CSV row as the export writes it, before typing.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "Issuer")]
    issuer: Option<String>,
    #[serde(rename = "Face value")]
    face_value: Option<String>,
    #[serde(rename = "Reference")]
    reference: Option<String>,
    #[serde(rename = "N# number (with link)")]
    numista_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Composition")]
    composition: Option<String>,
    #[serde(rename = "Weight")]
    weight: Option<String>,
    #[serde(rename = "Diameter")]
    diameter: Option<String>,
    #[serde(rename = "Thickness")]
    thickness: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Gregorian year")]
    gregorian_year: Option<String>,
    #[serde(rename = "Collection")]
    collection: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    #[serde(rename = "Mintmark")]
    mintmark: Option<String>,
    #[serde(rename = "Grade")]
    grade: Option<String>,
    #[serde(rename = "Comment")]
    comment: Option<String>,
}

/// A configurable loader for Numista-style collection exports.
///
/// # Configuration
/// * `exclude_collection`: rows whose `Collection` cell equals one of the
///   configured names are dropped before they become coins.
/// * `lenient`: if true, rows with unparsable cells (a missing or garbled
///   diameter, a non-numeric year) are skipped instead of failing the load.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::loading::CollectionLoader;
///
/// let csv = "\
/// Country,Issuer,Face value,Reference,N# number (with link),Title,Composition,Weight,Diameter,Thickness,Year,Collection
/// Canada,Canada,5 Cents,KM# 60.1,N# 270,5 Cents,Nickel,4.54,21.21,1.7,1963,Main
/// ";
/// let coins = CollectionLoader::new().from_str(csv).unwrap();
/// assert_eq!(coins.len(), 1);
/// assert_eq!(coins[0].numista_id(), Some(270));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectionLoader {
    excluded_collections: Vec<String>,
    lenient: bool,
}

impl CollectionLoader {
    /// Creates a new `CollectionLoader` with default settings: no exclusions,
    /// strict row handling.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Excludes rows whose `Collection` cell equals `name`. May be called
    /// repeatedly to exclude several collections.
    #[inline]
    pub fn exclude_collection(mut self, name: impl Into<String>) -> Self {
        self.excluded_collections.push(name.into());
        self
    }

    /// Excludes every collection name in `names`.
    #[inline]
    pub fn exclude_collections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_collections
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Configures whether unparsable rows are skipped (`true`) or fail the
    /// load (`false`, the default).
    #[inline]
    pub fn lenient(mut self, yes: bool) -> Self {
        self.lenient = yes;
        self
    }

    /// Loads a collection from a generic reader.
    pub fn from_reader<R: Read>(&self, rdr: R) -> Result<Vec<Coin>, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(self.lenient)
            .from_reader(rdr);

        let headers = reader.headers()?.clone();
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(MissingColumnError { column: required }.into());
            }
        }

        let mut coins = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let row: RawRow = record.deserialize(Some(&headers))?;

            match self.coin_from_row(&row, line) {
                Ok(Some(coin)) => coins.push(coin),
                Ok(None) => {}
                Err(_) if self.lenient => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(coins)
    }

    /// Loads a collection from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Coin>, LoadError> {
        let file = File::open(path)?;
        self.from_reader(file)
    }

    /// Loads a collection from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<Coin>, LoadError> {
        self.from_reader(s.as_bytes())
    }

    /// Types one raw row, or filters it out.
    ///
    /// Returns `Ok(None)` when the row's collection is excluded; `Err` when a
    /// cell fails to parse (the caller decides whether that skips or aborts).
    fn coin_from_row(&self, row: &RawRow, line: u64) -> Result<Option<Coin>, RowError> {
        let collection = cell(&row.collection);
        if self.excluded_collections.iter().any(|ex| ex == collection) {
            return Ok(None);
        }

        let diameter_text = cell(&row.diameter);
        let diameter = diameter_text
            .parse::<f64>()
            .ok()
            .and_then(Millimeters::try_new)
            .ok_or_else(|| RowError {
                line,
                field: "Diameter",
                value: diameter_text.to_owned(),
            })?;

        let mut builder = Coin::builder(
            cell(&row.country),
            cell(&row.issuer),
            cell(&row.title),
            diameter,
        )
        .face_value(cell(&row.face_value))
        .reference(cell(&row.reference))
        .composition(cell(&row.composition))
        .mintmark(cell(&row.mintmark))
        .comment(cell(&row.comment));

        if let Some(weight) = parse_cell::<f64>(&row.weight, "Weight", line)? {
            builder = builder.weight_grams(weight);
        }
        if let Some(thickness) = parse_mm_cell(&row.thickness, "Thickness", line)? {
            builder = builder.thickness(thickness);
        }
        if let Some(year) = parse_cell::<i32>(&row.year, "Year", line)? {
            builder = builder.year(year);
        }
        if let Some(year) = parse_cell::<i32>(&row.gregorian_year, "Gregorian year", line)? {
            builder = builder.gregorian_year(year);
        }
        if let Some(id) = parse_numista_id(cell(&row.numista_id)) {
            builder = builder.numista_id(id);
        }
        if let Some(kind) = CoinKind::from_label(cell(&row.kind)) {
            builder = builder.kind(kind);
        }
        if let Some(grade) = Grade::from_code(cell(&row.grade)) {
            builder = builder.grade(grade);
        }

        Ok(Some(builder.build()))
    }
}

/// Borrows a cell's text, trimmed; absent cells read as empty.
#[inline]
fn cell(raw: &Option<String>) -> &str {
    raw.as_deref().map(str::trim).unwrap_or("")
}

/// Parses an optional cell into `T`. Empty cells are `None`; non-empty cells
/// that fail to parse are a `RowError` naming the field.
fn parse_cell<T: FromStr>(
    raw: &Option<String>,
    field: &'static str,
    line: u64,
) -> Result<Option<T>, RowError> {
    let text = cell(raw);
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<T>().map(Some).map_err(|_| RowError {
        line,
        field,
        value: text.to_owned(),
    })
}

/// Like [`parse_cell`], but produces a validated length.
fn parse_mm_cell(
    raw: &Option<String>,
    field: &'static str,
    line: u64,
) -> Result<Option<Millimeters>, RowError> {
    let text = cell(raw);
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<f64>().ok().and_then(Millimeters::try_new) {
        Some(value) => Ok(Some(value)),
        None => Err(RowError {
            line,
            field,
            value: text.to_owned(),
        }),
    }
}

/// Extracts the numeric catalog id from an `N# number (with link)` cell.
///
/// Accepts the bare number, the `N# 12345` prefix form, and trailing link
/// text after the digits. Cells without a leading number read as unknown.
fn parse_numista_id(raw: &str) -> Option<u32> {
    let rest = raw.strip_prefix("N#").unwrap_or(raw).trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_EXPORT: &str = "\
Country,Issuer,Face value,Reference,N# number (with link),Title,Composition,Weight,Diameter,Thickness,Year,Gregorian year,Mintmark,Type,Grade,Comment,Collection
Canada,Canada,5 Cents,KM# 60.1,N# 270,5 Cents,Nickel,4.54,21.21,1.7,1963,,,Standard circulation coin,VF,,Main
Japan,Japan,100 Yen,Y# 79,N# 1322,100 Yen,Silver (.600),4.8,22.6,1.7,39,1964,,Standard circulation coin,XF,,Main
France,France,1 Franc,KM# 925.1,N# 534,1 Franc,Nickel,6,24,1.83,1978,,,Standard circulation coin,,,Duplicates
";

    #[test]
    fn test_loads_and_maps_correctly() {
        let coins = CollectionLoader::new()
            .from_str(SMALL_EXPORT)
            .expect("Failed to load");
        assert_eq!(coins.len(), 3);

        let canada = &coins[0];
        assert_eq!(canada.country(), "Canada");
        assert_eq!(canada.diameter(), Millimeters::new(21.21));
        assert_eq!(canada.numista_id(), Some(270));
        assert_eq!(canada.weight_grams(), Some(4.54));
        assert_eq!(canada.thickness(), Some(Millimeters::new(1.7)));
        assert_eq!(canada.grade(), Grade::VeryFine);
        assert_eq!(canada.kind(), CoinKind::Standard);
        // No Gregorian year cell, so it falls back to the struck year.
        assert_eq!(canada.gregorian_year(), Some(1963));

        // Showa 39 carries its own Gregorian year.
        let japan = &coins[1];
        assert_eq!(japan.year(), Some(39));
        assert_eq!(japan.gregorian_year(), Some(1964));
    }

    #[test]
    fn test_exclusion_filter() {
        let coins = CollectionLoader::new()
            .exclude_collection("Duplicates")
            .from_str(SMALL_EXPORT)
            .expect("Failed to load");
        assert_eq!(coins.len(), 2);
        assert!(coins.iter().all(|c| c.country() != "France"));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let data = "\
Country,Issuer,Face value,Reference,N# number (with link),Title,Composition,Weight,Thickness,Year,Collection
Canada,Canada,5 Cents,KM# 60.1,N# 270,5 Cents,Nickel,4.54,1.7,1963,Main
";
        let res = CollectionLoader::new().from_str(data);
        match res {
            Err(LoadError::MissingColumn(e)) => assert_eq!(e.column, "Diameter"),
            _ => panic!("Expected MissingColumn error"),
        }
    }

    #[test]
    fn test_strict_mode_rejects_bad_diameter() {
        let data = "\
Country,Issuer,Face value,Reference,N# number (with link),Title,Composition,Weight,Diameter,Thickness,Year,Collection
Canada,Canada,5 Cents,KM# 60.1,N# 270,5 Cents,Nickel,4.54,unknown,1.7,1963,Main
";
        let res = CollectionLoader::new().from_str(data);
        match res {
            Err(LoadError::Row(e)) => {
                assert_eq!(e.line, 2);
                assert_eq!(e.field, "Diameter");
                assert_eq!(e.value, "unknown");
            }
            _ => panic!("Expected Row error with context"),
        }
    }

    #[test]
    fn test_lenient_mode_skips_bad_rows() {
        let data = "\
Country,Issuer,Face value,Reference,N# number (with link),Title,Composition,Weight,Diameter,Thickness,Year,Collection
Canada,Canada,5 Cents,KM# 60.1,N# 270,5 Cents,Nickel,4.54,21.21,1.7,1963,Main
Medalia,Medalia,,,,Award medal,Bronze,,,,,Main
";
        let coins = CollectionLoader::new()
            .lenient(true)
            .from_str(data)
            .expect("Failed to load");
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].country(), "Canada");
    }

    #[test]
    fn test_numista_id_forms() {
        assert_eq!(parse_numista_id("N# 1758"), Some(1758));
        assert_eq!(parse_numista_id("N#1758"), Some(1758));
        assert_eq!(parse_numista_id("1758"), Some(1758));
        assert_eq!(parse_numista_id("N# 1758 (en.numista.com)"), Some(1758));
        assert_eq!(parse_numista_id(""), None);
        assert_eq!(parse_numista_id("pending"), None);
    }

    #[test]
    fn test_empty_export_yields_no_coins() {
        let data = "Country,Issuer,Face value,Reference,N# number (with link),Title,Composition,Weight,Diameter,Thickness,Year,Collection\n";
        let coins = CollectionLoader::new().from_str(data).expect("Failed to load");
        assert!(coins.is_empty());
    }
}
