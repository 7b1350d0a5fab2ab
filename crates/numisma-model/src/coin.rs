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

//! The immutable coin record and its vocabulary enums.
//!
//! A `Coin` carries everything a Numista-style collection export knows about
//! a piece. The allocation engine only ever reads the diameter and the
//! deterministic ordering key; the remaining fields exist for display,
//! grouping, and round-tripping the collection.

use numisma_core::measure::Millimeters;

/// The type of a coin, as Numista categorizes it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CoinKind {
    /// A standard circulation coin.
    #[default]
    Standard,
    /// A circulating commemorative coin.
    Commemorative,
    /// A non-circulating coin (collector issues, bullion).
    NonCirculating,
    /// A pattern (trial striking, never issued).
    Pattern,
    /// A token (non-governmental issue).
    Token,
}

impl CoinKind {
    /// Returns the label Numista uses for this kind in its exports.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard circulation coin",
            Self::Commemorative => "Circulating commemorative coin",
            Self::NonCirculating => "Non-circulating coin",
            Self::Pattern => "Pattern",
            Self::Token => "Token",
        }
    }

    /// Parses a Numista export label into a `CoinKind`.
    ///
    /// Returns `None` for unrecognized labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Standard circulation coin" => Some(Self::Standard),
            "Circulating commemorative coin" => Some(Self::Commemorative),
            "Non-circulating coin" => Some(Self::NonCirculating),
            "Pattern" => Some(Self::Pattern),
            "Token" => Some(Self::Token),
            _ => None,
        }
    }
}

impl std::fmt::Display for CoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The grade assigned to a coin, on the usual adjectival scale.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Grade {
    /// No grade recorded.
    #[default]
    Ungraded,
    /// Good.
    Good,
    /// Very Good.
    VeryGood,
    /// Fine.
    Fine,
    /// Very Fine.
    VeryFine,
    /// Extremely Fine.
    ExtremelyFine,
    /// Almost Uncirculated.
    AlmostUncirculated,
    /// Uncirculated.
    Uncirculated,
}

impl Grade {
    /// Returns the short grading code ("G", "VG", ..., "UNC"), or the empty
    /// string for `Ungraded`.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ungraded => "",
            Self::Good => "G",
            Self::VeryGood => "VG",
            Self::Fine => "F",
            Self::VeryFine => "VF",
            Self::ExtremelyFine => "XF",
            Self::AlmostUncirculated => "AU",
            Self::Uncirculated => "UNC",
        }
    }

    /// Parses a short grading code into a `Grade`.
    ///
    /// The empty string parses as `Ungraded`; unrecognized codes return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "" => Some(Self::Ungraded),
            "G" => Some(Self::Good),
            "VG" => Some(Self::VeryGood),
            "F" => Some(Self::Fine),
            "VF" => Some(Self::VeryFine),
            "XF" => Some(Self::ExtremelyFine),
            "AU" => Some(Self::AlmostUncirculated),
            "UNC" => Some(Self::Uncirculated),
            _ => None,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An immutable record describing one coin in the collection.
///
/// Coins are created through [`CoinBuilder`] (or the collection loader) and
/// never mutated afterwards. The allocation engine treats a coin as an
/// opaque item comparable by diameter; everything else is carried along for
/// presentation and grouping.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::coin::Coin;
/// # use numisma_core::measure::Millimeters;
///
/// let coin = Coin::builder("Canada", "Canada", "5 Cents", Millimeters::new(21.2))
///     .year(1963)
///     .composition("Nickel")
///     .build();
/// assert_eq!(coin.diameter(), Millimeters::new(21.2));
/// assert_eq!(coin.gregorian_year(), Some(1963));
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Coin {
    country: String,
    issuer: String,
    face_value: String,
    numista_id: Option<u32>,
    title: String,
    composition: String,
    weight_grams: Option<f64>,
    diameter: Millimeters,
    thickness: Option<Millimeters>,
    year: Option<i32>,
    gregorian_year: Option<i32>,
    reference: String,
    kind: CoinKind,
    mintmark: String,
    grade: Grade,
    comment: String,
}

impl Coin {
    /// Starts building a coin from its required fields.
    #[inline]
    pub fn builder(
        country: impl Into<String>,
        issuer: impl Into<String>,
        title: impl Into<String>,
        diameter: Millimeters,
    ) -> CoinBuilder {
        CoinBuilder::new(country, issuer, title, diameter)
    }

    /// The country the coin circulated in.
    #[inline]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The issuing authority (may differ from the country).
    #[inline]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// The face value, as exported (free text such as "5 Cents").
    #[inline]
    pub fn face_value(&self) -> &str {
        &self.face_value
    }

    /// The Numista catalog number, if known.
    #[inline]
    pub fn numista_id(&self) -> Option<u32> {
        self.numista_id
    }

    /// The coin's title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The metal or alloy the coin is struck in.
    #[inline]
    pub fn composition(&self) -> &str {
        &self.composition
    }

    /// The weight in grams, if known.
    #[inline]
    pub fn weight_grams(&self) -> Option<f64> {
        self.weight_grams
    }

    /// The diameter. Drives allocation.
    #[inline]
    pub fn diameter(&self) -> Millimeters {
        self.diameter
    }

    /// The thickness, if known.
    #[inline]
    pub fn thickness(&self) -> Option<Millimeters> {
        self.thickness
    }

    /// The year as struck on the coin, if dated.
    #[inline]
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// The Gregorian year, defaulting to [`Coin::year`] when not set
    /// separately (relevant for non-Gregorian calendars).
    #[inline]
    pub fn gregorian_year(&self) -> Option<i32> {
        self.gregorian_year
    }

    /// The collector's reference (e.g., a KM number).
    #[inline]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The kind of coin.
    #[inline]
    pub fn kind(&self) -> CoinKind {
        self.kind
    }

    /// The mintmark, or the empty string if none.
    #[inline]
    pub fn mintmark(&self) -> &str {
        &self.mintmark
    }

    /// The recorded grade.
    #[inline]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// A free-form comment.
    #[inline]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The deterministic ordering key used to keep allocation reproducible.
    ///
    /// Coins sort ascending by diameter; issuer, Gregorian year, and title
    /// only break ties, so two runs over the same multiset always place
    /// coins identically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use numisma_model::coin::Coin;
    /// # use numisma_core::measure::Millimeters;
    ///
    /// let small = Coin::builder("Japan", "Japan", "1 Yen", Millimeters::new(20.0)).build();
    /// let large = Coin::builder("Japan", "Japan", "500 Yen", Millimeters::new(26.5)).build();
    /// assert!(small.order_key() < large.order_key());
    /// ```
    #[inline]
    pub fn order_key(&self) -> (Millimeters, &str, Option<i32>, &str) {
        (
            self.diameter,
            self.issuer.as_str(),
            self.gregorian_year,
            self.title.as_str(),
        )
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} {} ({})", self.issuer, self.title, year),
            None => write!(f, "{} {}", self.issuer, self.title),
        }
    }
}

/// A mutable builder for [`Coin`] records.
///
/// Required fields are taken up front; everything else defaults to empty or
/// unknown. `gregorian_year` falls back to `year` at build time unless set
/// explicitly.
#[derive(Clone, Debug)]
pub struct CoinBuilder {
    country: String,
    issuer: String,
    face_value: String,
    numista_id: Option<u32>,
    title: String,
    composition: String,
    weight_grams: Option<f64>,
    diameter: Millimeters,
    thickness: Option<Millimeters>,
    year: Option<i32>,
    gregorian_year: Option<i32>,
    reference: String,
    kind: CoinKind,
    mintmark: String,
    grade: Grade,
    comment: String,
}

impl CoinBuilder {
    /// Creates a builder from the fields every coin must have.
    pub fn new(
        country: impl Into<String>,
        issuer: impl Into<String>,
        title: impl Into<String>,
        diameter: Millimeters,
    ) -> Self {
        Self {
            country: country.into(),
            issuer: issuer.into(),
            face_value: String::new(),
            numista_id: None,
            title: title.into(),
            composition: String::new(),
            weight_grams: None,
            diameter,
            thickness: None,
            year: None,
            gregorian_year: None,
            reference: String::new(),
            kind: CoinKind::Standard,
            mintmark: String::new(),
            grade: Grade::Ungraded,
            comment: String::new(),
        }
    }

    /// Sets the face value text.
    #[inline]
    pub fn face_value(mut self, v: impl Into<String>) -> Self {
        self.face_value = v.into();
        self
    }

    /// Sets the Numista catalog number.
    #[inline]
    pub fn numista_id(mut self, id: u32) -> Self {
        self.numista_id = Some(id);
        self
    }

    /// Sets the composition.
    #[inline]
    pub fn composition(mut self, v: impl Into<String>) -> Self {
        self.composition = v.into();
        self
    }

    /// Sets the weight in grams.
    #[inline]
    pub fn weight_grams(mut self, grams: f64) -> Self {
        self.weight_grams = Some(grams);
        self
    }

    /// Sets the thickness.
    #[inline]
    pub fn thickness(mut self, t: Millimeters) -> Self {
        self.thickness = Some(t);
        self
    }

    /// Sets the year as struck on the coin.
    #[inline]
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the Gregorian year when it differs from the struck year.
    #[inline]
    pub fn gregorian_year(mut self, year: i32) -> Self {
        self.gregorian_year = Some(year);
        self
    }

    /// Sets the collector's reference.
    #[inline]
    pub fn reference(mut self, v: impl Into<String>) -> Self {
        self.reference = v.into();
        self
    }

    /// Sets the coin kind.
    #[inline]
    pub fn kind(mut self, kind: CoinKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the mintmark.
    #[inline]
    pub fn mintmark(mut self, v: impl Into<String>) -> Self {
        self.mintmark = v.into();
        self
    }

    /// Sets the grade.
    #[inline]
    pub fn grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    /// Sets a free-form comment.
    #[inline]
    pub fn comment(mut self, v: impl Into<String>) -> Self {
        self.comment = v.into();
        self
    }

    /// Finalizes the coin. `gregorian_year` defaults to `year` when unset.
    pub fn build(self) -> Coin {
        Coin {
            country: self.country,
            issuer: self.issuer,
            face_value: self.face_value,
            numista_id: self.numista_id,
            title: self.title,
            composition: self.composition,
            weight_grams: self.weight_grams,
            diameter: self.diameter,
            thickness: self.thickness,
            year: self.year,
            gregorian_year: self.gregorian_year.or(self.year),
            reference: self.reference,
            kind: self.kind,
            mintmark: self.mintmark,
            grade: self.grade,
            comment: self.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mm(v: f64) -> Millimeters {
        Millimeters::new(v)
    }

    #[test]
    fn test_builder_defaults() {
        let coin = Coin::builder("Canada", "Canada", "5 Cents", mm(21.2)).build();
        assert_eq!(coin.country(), "Canada");
        assert_eq!(coin.year(), None);
        assert_eq!(coin.gregorian_year(), None);
        assert_eq!(coin.kind(), CoinKind::Standard);
        assert_eq!(coin.grade(), Grade::Ungraded);
        assert_eq!(coin.mintmark(), "");
    }

    #[test]
    fn test_gregorian_year_falls_back_to_year() {
        let coin = Coin::builder("Japan", "Japan", "100 Yen", mm(22.6))
            .year(1964)
            .build();
        assert_eq!(coin.gregorian_year(), Some(1964));

        let coin = Coin::builder("Japan", "Japan", "100 Yen", mm(22.6))
            .year(39)
            .gregorian_year(1964)
            .build();
        assert_eq!(coin.year(), Some(39));
        assert_eq!(coin.gregorian_year(), Some(1964));
    }

    #[test]
    fn test_order_key_diameter_dominates() {
        let small = Coin::builder("Z", "Z", "Z", mm(17.0)).year(2020).build();
        let large = Coin::builder("A", "A", "A", mm(25.0)).year(1900).build();
        assert!(small.order_key() < large.order_key());
    }

    #[test]
    fn test_order_key_tie_breaks() {
        let a = Coin::builder("X", "Austria", "1 Schilling", mm(22.5))
            .year(1960)
            .build();
        let b = Coin::builder("X", "Austria", "1 Schilling", mm(22.5))
            .year(1961)
            .build();
        let c = Coin::builder("X", "Belgium", "1 Franc", mm(22.5))
            .year(1950)
            .build();
        assert!(a.order_key() < b.order_key());
        assert!(b.order_key() < c.order_key());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(
            CoinKind::from_label("Standard circulation coin"),
            Some(CoinKind::Standard)
        );
        assert_eq!(
            CoinKind::from_label("Circulating commemorative coin"),
            Some(CoinKind::Commemorative)
        );
        assert_eq!(CoinKind::from_label("Banknote"), None);
        assert_eq!(CoinKind::NonCirculating.label(), "Non-circulating coin");
    }

    #[test]
    fn test_grade_codes() {
        assert_eq!(Grade::from_code("XF"), Some(Grade::ExtremelyFine));
        assert_eq!(Grade::from_code(""), Some(Grade::Ungraded));
        assert_eq!(Grade::from_code("MS-65"), None);
        assert_eq!(Grade::Uncirculated.code(), "UNC");
    }

    #[test]
    fn test_display() {
        let coin = Coin::builder("Canada", "Canada", "5 Cents", mm(21.2))
            .year(1963)
            .build();
        assert_eq!(format!("{}", coin), "Canada 5 Cents (1963)");
    }
}
