//! Country-name to ISO-3166 alpha-3 resolution
//!
//! The world view needs an alpha-3 code per country for choropleth
//! mapping. Resolution sits behind a trait so the built-in static
//! table can be swapped for an external service; a caching wrapper
//! memoizes lookups per distinct name, since the country set is
//! static for a given dataset.
//!
//! A name that does not resolve is not an error: the caller leaves
//! that row's ISO-3 null so one bad name never aborts a view.

use std::cell::RefCell;
use std::collections::HashMap;

/// Resolves a country display name to an ISO-3166 alpha-3 code
pub trait CountryResolver {
    /// Resolve a display name; `None` when the name is unknown
    fn resolve(&self, name: &str) -> Option<String>;
}

/// UN display name to alpha-3, covering the names used by the
/// UN energy statistics exports (including their abbreviated forms).
const COUNTRY_TABLE: &[(&str, &str)] = &[
    ("Afghanistan", "AFG"),
    ("Albania", "ALB"),
    ("Algeria", "DZA"),
    ("Angola", "AGO"),
    ("Argentina", "ARG"),
    ("Armenia", "ARM"),
    ("Australia", "AUS"),
    ("Austria", "AUT"),
    ("Azerbaijan", "AZE"),
    ("Bahamas", "BHS"),
    ("Bahrain", "BHR"),
    ("Bangladesh", "BGD"),
    ("Belarus", "BLR"),
    ("Belgium", "BEL"),
    ("Benin", "BEN"),
    ("Bolivia (Plur. State of)", "BOL"),
    ("Bosnia and Herzegovina", "BIH"),
    ("Botswana", "BWA"),
    ("Brazil", "BRA"),
    ("Brunei Darussalam", "BRN"),
    ("Bulgaria", "BGR"),
    ("Cambodia", "KHM"),
    ("Cameroon", "CMR"),
    ("Canada", "CAN"),
    ("Chile", "CHL"),
    ("China", "CHN"),
    ("China, Hong Kong SAR", "HKG"),
    ("China, Macao SAR", "MAC"),
    ("Colombia", "COL"),
    ("Congo", "COG"),
    ("Costa Rica", "CRI"),
    ("Croatia", "HRV"),
    ("Cuba", "CUB"),
    ("Cyprus", "CYP"),
    ("Czechia", "CZE"),
    ("Côte d'Ivoire", "CIV"),
    ("Dem. People's Rep. of Korea", "PRK"),
    ("Dem. Rep. of the Congo", "COD"),
    ("Denmark", "DNK"),
    ("Dominican Republic", "DOM"),
    ("Ecuador", "ECU"),
    ("Egypt", "EGY"),
    ("El Salvador", "SLV"),
    ("Eritrea", "ERI"),
    ("Estonia", "EST"),
    ("Ethiopia", "ETH"),
    ("Finland", "FIN"),
    ("France", "FRA"),
    ("Gabon", "GAB"),
    ("Georgia", "GEO"),
    ("Germany", "DEU"),
    ("Ghana", "GHA"),
    ("Greece", "GRC"),
    ("Guatemala", "GTM"),
    ("Haiti", "HTI"),
    ("Honduras", "HND"),
    ("Hungary", "HUN"),
    ("Iceland", "ISL"),
    ("India", "IND"),
    ("Indonesia", "IDN"),
    ("Iran (Islamic Rep. of)", "IRN"),
    ("Iraq", "IRQ"),
    ("Ireland", "IRL"),
    ("Israel", "ISR"),
    ("Italy", "ITA"),
    ("Jamaica", "JAM"),
    ("Japan", "JPN"),
    ("Jordan", "JOR"),
    ("Kazakhstan", "KAZ"),
    ("Kenya", "KEN"),
    ("Kuwait", "KWT"),
    ("Kyrgyzstan", "KGZ"),
    ("Lao People's Dem. Rep.", "LAO"),
    ("Latvia", "LVA"),
    ("Lebanon", "LBN"),
    ("Libya", "LBY"),
    ("Lithuania", "LTU"),
    ("Luxembourg", "LUX"),
    ("Madagascar", "MDG"),
    ("Malaysia", "MYS"),
    ("Malta", "MLT"),
    ("Mexico", "MEX"),
    ("Mongolia", "MNG"),
    ("Montenegro", "MNE"),
    ("Morocco", "MAR"),
    ("Mozambique", "MOZ"),
    ("Myanmar", "MMR"),
    ("Namibia", "NAM"),
    ("Nepal", "NPL"),
    ("Netherlands", "NLD"),
    ("New Zealand", "NZL"),
    ("Nicaragua", "NIC"),
    ("Niger", "NER"),
    ("Nigeria", "NGA"),
    ("North Macedonia", "MKD"),
    ("Norway", "NOR"),
    ("Oman", "OMN"),
    ("Pakistan", "PAK"),
    ("Panama", "PAN"),
    ("Paraguay", "PRY"),
    ("Peru", "PER"),
    ("Philippines", "PHL"),
    ("Poland", "POL"),
    ("Portugal", "PRT"),
    ("Qatar", "QAT"),
    ("Rep. of Korea", "KOR"),
    ("Rep. of Moldova", "MDA"),
    ("Romania", "ROU"),
    ("Russian Federation", "RUS"),
    ("Saudi Arabia", "SAU"),
    ("Senegal", "SEN"),
    ("Serbia", "SRB"),
    ("Singapore", "SGP"),
    ("Slovakia", "SVK"),
    ("Slovenia", "SVN"),
    ("South Africa", "ZAF"),
    ("South Sudan", "SSD"),
    ("Spain", "ESP"),
    ("Sri Lanka", "LKA"),
    ("Sudan", "SDN"),
    ("Sweden", "SWE"),
    ("Switzerland", "CHE"),
    ("Syrian Arab Republic", "SYR"),
    ("Tajikistan", "TJK"),
    ("Thailand", "THA"),
    ("Togo", "TGO"),
    ("Trinidad and Tobago", "TTO"),
    ("Tunisia", "TUN"),
    ("Turkmenistan", "TKM"),
    ("Türkiye", "TUR"),
    ("Uganda", "UGA"),
    ("Ukraine", "UKR"),
    ("United Arab Emirates", "ARE"),
    ("United Kingdom", "GBR"),
    ("United Rep. of Tanzania", "TZA"),
    ("United States", "USA"),
    ("Uruguay", "URY"),
    ("Uzbekistan", "UZB"),
    ("Venezuela (Bolivar. Rep. of)", "VEN"),
    ("Viet Nam", "VNM"),
    ("Yemen", "YEM"),
    ("Zambia", "ZMB"),
    ("Zimbabwe", "ZWE"),
];

/// Static table resolver over the UN display names
///
/// Lookups are case-insensitive to tolerate provider casing drift.
pub struct StaticCountryResolver {
    codes: HashMap<String, &'static str>,
}

impl StaticCountryResolver {
    /// Build the lookup table
    pub fn new() -> Self {
        let codes = COUNTRY_TABLE
            .iter()
            .map(|(name, code)| (name.to_lowercase(), *code))
            .collect();
        Self { codes }
    }
}

impl Default for StaticCountryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryResolver for StaticCountryResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        self.codes
            .get(&name.trim().to_lowercase())
            .map(|code| (*code).to_string())
    }
}

/// Memoizing wrapper around any resolver
///
/// Caches both hits and misses per distinct display name, so repeated
/// view builds over the same dataset resolve each name at most once.
pub struct CachedResolver<R: CountryResolver> {
    inner: R,
    cache: RefCell<HashMap<String, Option<String>>>,
}

impl<R: CountryResolver> CachedResolver<R> {
    /// Wrap a resolver with a per-name cache
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl<R: CountryResolver> CountryResolver for CachedResolver<R> {
    fn resolve(&self, name: &str) -> Option<String> {
        if let Some(cached) = self.cache.borrow().get(name) {
            return cached.clone();
        }

        let resolved = self.inner.resolve(name);
        self.cache
            .borrow_mut()
            .insert(name.to_string(), resolved.clone());
        resolved
    }
}
