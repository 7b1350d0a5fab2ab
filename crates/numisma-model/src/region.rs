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

//! World regions and the country lookup table.
//!
//! Country names follow the spelling Numista uses in its exports, historical
//! issuers included. Unknown countries resolve to `None` rather than a
//! sentinel, so callers must decide how to group the unmapped remainder.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// A region of the world, for grouping a collection geographically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Region {
    /// Asia.
    Asia,
    /// Africa.
    Africa,
    /// North America.
    NorthAmerica,
    /// Central America.
    CentralAmerica,
    /// The Caribbean.
    Caribbean,
    /// South America.
    SouthAmerica,
    /// Western Europe.
    WesternEurope,
    /// Eastern Europe.
    EasternEurope,
    /// Oceania.
    Oceania,
}

impl Region {
    /// All regions, in display order.
    pub const ALL: [Region; 9] = [
        Self::Asia,
        Self::Africa,
        Self::NorthAmerica,
        Self::CentralAmerica,
        Self::Caribbean,
        Self::SouthAmerica,
        Self::WesternEurope,
        Self::EasternEurope,
        Self::Oceania,
    ];

    /// Returns the human-readable region name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
            Self::CentralAmerica => "Central America",
            Self::Caribbean => "Caribbean",
            Self::SouthAmerica => "South America",
            Self::WesternEurope => "Western Europe",
            Self::EasternEurope => "Eastern Europe",
            Self::Oceania => "Oceania",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[rustfmt::skip]
static COUNTRIES: &[(&str, Region)] = &[
    ("Abkhazia", Region::Asia),
    ("Afghanistan", Region::Asia),
    ("Albania", Region::EasternEurope),
    ("Algeria", Region::Africa),
    ("Andorra", Region::WesternEurope),
    ("Angola", Region::Africa),
    ("Anguilla", Region::Caribbean),
    ("Antigua and Barbuda", Region::Caribbean),
    ("Argentina", Region::SouthAmerica),
    ("Armenia", Region::Asia),
    ("Artsakh", Region::Asia),
    ("Aruba", Region::Caribbean),
    ("Australia", Region::Oceania),
    ("Austria", Region::WesternEurope),
    ("Azerbaijan", Region::Asia),
    ("Bahamas, The", Region::Caribbean),
    ("Bahrain", Region::Asia),
    ("Bangladesh", Region::Asia),
    ("Barbados", Region::Caribbean),
    ("Belarus", Region::EasternEurope),
    ("Belgium", Region::WesternEurope),
    ("Belize", Region::CentralAmerica),
    ("Benin", Region::Africa),
    ("Bermuda", Region::Caribbean),
    ("Bhutan", Region::Asia),
    ("Bohemia", Region::EasternEurope),
    ("Bolivia", Region::SouthAmerica),
    ("Bosnia and Herzegovina", Region::EasternEurope),
    ("Botswana", Region::Africa),
    ("Brazil", Region::SouthAmerica),
    ("British Virgin Islands", Region::Caribbean),
    ("British West Africa", Region::Africa),
    ("British West Indies", Region::Asia),
    ("Brunei", Region::Asia),
    ("Bulgaria", Region::EasternEurope),
    ("Burkina Faso", Region::Africa),
    ("Burundi", Region::Africa),
    ("Cambodia", Region::Asia),
    ("Cameroon", Region::Africa),
    ("Canada", Region::NorthAmerica),
    ("Cape Verde", Region::Africa),
    ("Cayman Islands", Region::Caribbean),
    ("Central African Republic", Region::Africa),
    ("Central African States", Region::Africa),
    ("Central American Republic", Region::CentralAmerica),
    ("Central Asia and Caucasia", Region::Asia),
    ("Chad", Region::Africa),
    ("Chile", Region::SouthAmerica),
    ("China", Region::Asia),
    ("Colombia", Region::SouthAmerica),
    ("Comoro Islands", Region::Africa),
    ("Congo, Democratic Republic of the", Region::Africa),
    ("Congo, Republic of the", Region::Africa),
    ("Cook Islands", Region::Oceania),
    ("Costa Rica", Region::CentralAmerica),
    ("Croatia", Region::EasternEurope),
    ("Cuba", Region::Caribbean),
    ("Cyprus", Region::EasternEurope),
    ("Czech Republic", Region::EasternEurope),
    ("Czechoslovakia", Region::EasternEurope),
    ("Denmark", Region::WesternEurope),
    ("Djibouti", Region::Africa),
    ("Dominica", Region::Caribbean),
    ("Dominican Republic", Region::Caribbean),
    ("East Africa", Region::Africa),
    ("Eastern Caribbean States", Region::Caribbean),
    ("Ecuador", Region::SouthAmerica),
    ("Egypt", Region::Africa),
    ("El Salvador", Region::CentralAmerica),
    ("Equatorial African States", Region::Africa),
    ("Equatorial Guinea", Region::Africa),
    ("Eritrea", Region::Africa),
    ("Estonia", Region::EasternEurope),
    ("Eswatini", Region::Africa),
    ("Ethiopia", Region::Africa),
    ("Falkland Islands", Region::SouthAmerica),
    ("Fiji", Region::Oceania),
    ("Finland", Region::WesternEurope),
    ("France", Region::WesternEurope),
    ("French Equatorial Africa", Region::Africa),
    ("French Polynesia", Region::Oceania),
    ("French West Africa", Region::Africa),
    ("Gabon", Region::Africa),
    ("Gambia, The", Region::Africa),
    ("Georgia", Region::Asia),
    ("German East Africa", Region::Africa),
    ("Germany", Region::WesternEurope),
    ("Ghana", Region::Africa),
    ("Gibraltar", Region::WesternEurope),
    ("Greece", Region::EasternEurope),
    ("Grenada", Region::Caribbean),
    ("Guatemala", Region::CentralAmerica),
    ("Guernsey", Region::WesternEurope),
    ("Guinea", Region::Africa),
    ("Guinea-Bissau", Region::Africa),
    ("Guyana", Region::SouthAmerica),
    ("Haiti", Region::Caribbean),
    ("Honduras", Region::CentralAmerica),
    ("Hungary", Region::EasternEurope),
    ("Iceland", Region::WesternEurope),
    ("India", Region::Asia),
    ("Indonesia", Region::Asia),
    ("Iran", Region::Asia),
    ("Iraq", Region::Asia),
    ("Ireland", Region::WesternEurope),
    ("Isle of Man", Region::WesternEurope),
    ("Israel", Region::Asia),
    ("Italy", Region::WesternEurope),
    ("Ivory Coast", Region::Africa),
    ("Jamaica", Region::Caribbean),
    ("Japan", Region::Asia),
    ("Jersey", Region::WesternEurope),
    ("Jordan", Region::Asia),
    ("Kazakhstan", Region::Asia),
    ("Kenya", Region::Africa),
    ("Kievan Rus", Region::EasternEurope),
    ("Kiribati", Region::Oceania),
    ("Korea", Region::Asia),
    ("Kuwait", Region::Asia),
    ("Kyrgyzstan", Region::Asia),
    ("Laos", Region::Asia),
    ("Latvia", Region::EasternEurope),
    ("Lebanon", Region::Asia),
    ("Lesotho", Region::Africa),
    ("Liberia", Region::Africa),
    ("Libya", Region::Africa),
    ("Liechtenstein", Region::WesternEurope),
    ("Lithuania", Region::EasternEurope),
    ("Luxembourg", Region::WesternEurope),
    ("Madagascar", Region::Africa),
    ("Malawi", Region::Africa),
    ("Malaysia", Region::Asia),
    ("Maldives", Region::Asia),
    ("Mali", Region::Africa),
    ("Malta", Region::WesternEurope),
    ("Malta, Order of", Region::WesternEurope),
    ("Marshall Islands", Region::Oceania),
    ("Mauritania", Region::Africa),
    ("Mauritius", Region::Africa),
    ("Mexico", Region::NorthAmerica),
    ("Moldova", Region::EasternEurope),
    ("Monaco", Region::WesternEurope),
    ("Mongol States", Region::Asia),
    ("Mongolia", Region::Asia),
    ("Montenegro", Region::EasternEurope),
    ("Montserrat", Region::Caribbean),
    ("Morocco", Region::Africa),
    ("Mozambique", Region::Africa),
    ("Myanmar", Region::Asia),
    ("Namibia", Region::Africa),
    ("Nauru", Region::Oceania),
    ("Nepal", Region::Asia),
    ("Netherlands", Region::WesternEurope),
    ("Netherlands Antilles", Region::Caribbean),
    ("New Caledonia", Region::Oceania),
    ("New Zealand", Region::Oceania),
    ("Nicaragua", Region::CentralAmerica),
    ("Niger", Region::Africa),
    ("Nigeria", Region::Africa),
    ("Niue", Region::Oceania),
    ("North Korea", Region::Asia),
    ("North Macedonia", Region::EasternEurope),
    ("Norway", Region::WesternEurope),
    ("Oman", Region::Asia),
    ("Ottoman Empire", Region::EasternEurope),
    ("Pakistan", Region::Asia),
    ("Palau", Region::Oceania),
    ("Panama", Region::CentralAmerica),
    ("Papua New Guinea", Region::Oceania),
    ("Paraguay", Region::SouthAmerica),
    ("Peru", Region::SouthAmerica),
    ("Philippines", Region::Asia),
    ("Pitcairn Islands", Region::Oceania),
    ("Poland", Region::EasternEurope),
    ("Portugal", Region::WesternEurope),
    ("Puerto Rico", Region::Caribbean),
    ("Qatar", Region::Asia),
    ("Rhodesia and Nyasaland", Region::Africa),
    ("Romania", Region::EasternEurope),
    ("Russia", Region::EasternEurope),
    ("Rwanda", Region::Africa),
    ("Rwanda-Burundi", Region::Africa),
    ("Saint Barthelemy", Region::Caribbean),
    ("Saint Helena, Ascension and Tristan da Cunha", Region::Africa),
    ("Saint Kitts and Nevis", Region::Caribbean),
    ("Saint Lucia", Region::Caribbean),
    ("Saint Vincent", Region::Caribbean),
    ("Samoa", Region::Oceania),
    ("San Marino", Region::WesternEurope),
    ("São Tomé and Príncipe", Region::Africa),
    ("Saudi Arabia", Region::Asia),
    ("Senegal", Region::Africa),
    ("Serbia", Region::EasternEurope),
    ("Seychelles", Region::Africa),
    ("Sierra Leone", Region::Africa),
    ("Singapore", Region::Asia),
    ("Sint Maarten", Region::Caribbean),
    ("Slovakia", Region::EasternEurope),
    ("Slovenia", Region::EasternEurope),
    ("Solomon Islands", Region::Oceania),
    ("Somalia", Region::Africa),
    ("Somaliland", Region::Africa),
    ("South Africa", Region::Africa),
    ("South Georgia and the South Sandwich Islands", Region::SouthAmerica),
    ("South Korea", Region::Asia),
    ("South Ossetia", Region::Asia),
    ("South Sudan", Region::Africa),
    ("Spain", Region::WesternEurope),
    ("Sri Lanka", Region::Asia),
    ("Sudan", Region::Africa),
    ("Suriname", Region::Caribbean),
    ("Sweden", Region::WesternEurope),
    ("Switzerland", Region::WesternEurope),
    ("Syria", Region::Asia),
    ("Taiwan", Region::Asia),
    ("Tajikistan", Region::Asia),
    ("Tanzania", Region::Africa),
    ("Thailand", Region::Asia),
    ("Timor-Leste", Region::Oceania),
    ("Togo", Region::Africa),
    ("Tokelau", Region::Oceania),
    ("Tonga", Region::Oceania),
    ("Transnistria", Region::Asia),
    ("Trinidad and Tobago", Region::Caribbean),
    ("Tunisia", Region::Africa),
    ("Turkey", Region::EasternEurope),
    ("Turkmenistan", Region::Asia),
    ("Turks and Caicos Islands", Region::Caribbean),
    ("Tuvalu", Region::Oceania),
    ("Uganda", Region::Africa),
    ("Ukraine", Region::EasternEurope),
    ("United Arab Emirates", Region::Asia),
    ("United Kingdom", Region::WesternEurope),
    ("United States", Region::NorthAmerica),
    ("Uruguay", Region::SouthAmerica),
    ("Uzbekistan", Region::Asia),
    ("Vanuatu", Region::Oceania),
    ("Vatican City", Region::WesternEurope),
    ("Venezuela", Region::SouthAmerica),
    ("Vietnam", Region::Asia),
    ("Western African States", Region::Africa),
    ("Western Sahara", Region::Africa),
    ("Windward Islands", Region::Caribbean),
    ("Yemen", Region::Asia),
    ("Yugoslavia", Region::EasternEurope),
    ("Zambia", Region::Africa),
    ("Zimbabwe", Region::Africa),
];

fn region_table() -> &'static FxHashMap<&'static str, Region> {
    static TABLE: OnceLock<FxHashMap<&'static str, Region>> = OnceLock::new();
    TABLE.get_or_init(|| COUNTRIES.iter().copied().collect())
}

/// Looks up the region a country belongs to.
///
/// Returns `None` for countries the table does not know.
///
/// # Examples
///
/// ```rust
/// # use numisma_model::region::{region_of, Region};
///
/// assert_eq!(region_of("Japan"), Some(Region::Asia));
/// assert_eq!(region_of("Atlantis"), None);
/// ```
#[inline]
pub fn region_of(country: &str) -> Option<Region> {
    region_table().get(country).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_countries() {
        assert_eq!(region_of("Canada"), Some(Region::NorthAmerica));
        assert_eq!(region_of("Belize"), Some(Region::CentralAmerica));
        assert_eq!(region_of("Cuba"), Some(Region::Caribbean));
        assert_eq!(region_of("Chile"), Some(Region::SouthAmerica));
        assert_eq!(region_of("Portugal"), Some(Region::WesternEurope));
        assert_eq!(region_of("Ukraine"), Some(Region::EasternEurope));
        assert_eq!(region_of("New Zealand"), Some(Region::Oceania));
        assert_eq!(region_of("Morocco"), Some(Region::Africa));
        assert_eq!(region_of("Vietnam"), Some(Region::Asia));
    }

    #[test]
    fn test_lookup_historical_issuers() {
        assert_eq!(region_of("Czechoslovakia"), Some(Region::EasternEurope));
        assert_eq!(region_of("Ottoman Empire"), Some(Region::EasternEurope));
        assert_eq!(region_of("German East Africa"), Some(Region::Africa));
        assert_eq!(region_of("Kievan Rus"), Some(Region::EasternEurope));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert_eq!(region_of("Atlantis"), None);
        assert_eq!(region_of("japan"), None);
        assert_eq!(region_of(""), None);
        assert_eq!(region_of("Bahamas"), None); // the table spells it "Bahamas, The"
    }

    #[test]
    fn test_table_has_no_duplicate_countries() {
        assert_eq!(region_table().len(), COUNTRIES.len());
    }

    #[test]
    fn test_region_names() {
        assert_eq!(Region::NorthAmerica.name(), "North America");
        assert_eq!(format!("{}", Region::Caribbean), "Caribbean");
        assert_eq!(Region::ALL.len(), 9);
    }
}
