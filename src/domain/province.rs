//! Province reference dataset for the travel incentive campaign.
//!
//! The catalog is loaded once at startup and shared read-only across all
//! requests. Entries keep their insertion order, which doubles as the
//! addressable index space for lookup-by-position.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

/// Campaign classification of a province.
///
/// Secondary provinces carry the enhanced tax-reduction incentive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProvinceCategory {
    Primary,
    Secondary,
}

/// Tax-reduction metadata for a single province.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvinceInfo {
    pub category: ProvinceCategory,
    pub tax_reduction: f64,
}

/// Province entry as returned by the lookup endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProvinceTaxInfo {
    /// Canonical province name
    #[schema(example = "น่าน")]
    pub province_name: String,
    /// Tax reduction percentage granted for travel to this province
    #[schema(example = 20.0)]
    pub tax_reduction_percentage: f64,
    /// Campaign classification
    pub province_type: ProvinceCategory,
}

impl ProvinceTaxInfo {
    pub fn new(name: &str, info: &ProvinceInfo) -> Self {
        Self {
            province_name: name.to_string(),
            tax_reduction_percentage: info.tax_reduction,
            province_type: info.category,
        }
    }
}

/// Immutable catalog of campaign provinces.
///
/// Lookups come in three flavors: by canonical (Thai) name, by romanized
/// alias, and by position in the catalog's stable ordering.
pub struct ProvinceCatalog {
    entries: Vec<(String, ProvinceInfo)>,
    by_name: HashMap<String, usize>,
    aliases: HashMap<&'static str, &'static str>,
}

/// Campaign dataset: 5 secondary provinces at 20%, 4 primary at 15%.
const PROVINCES: &[(&str, ProvinceCategory, f64)] = &[
    ("เชียงราย", ProvinceCategory::Secondary, 20.0),
    ("น่าน", ProvinceCategory::Secondary, 20.0),
    ("ลำพูน", ProvinceCategory::Secondary, 20.0),
    ("ตราด", ProvinceCategory::Secondary, 20.0),
    ("สตูล", ProvinceCategory::Secondary, 20.0),
    ("กรุงเทพมหานคร", ProvinceCategory::Primary, 15.0),
    ("เชียงใหม่", ProvinceCategory::Primary, 15.0),
    ("ภูเก็ต", ProvinceCategory::Primary, 15.0),
    ("สงขลา", ProvinceCategory::Primary, 15.0),
];

/// Romanized name -> canonical name. Alias keys are lowercase.
const ALIASES: &[(&str, &str)] = &[
    ("chiang rai", "เชียงราย"),
    ("nan", "น่าน"),
    ("lamphun", "ลำพูน"),
    ("trat", "ตราด"),
    ("satun", "สตูล"),
    ("bangkok", "กรุงเทพมหานคร"),
    ("chiang mai", "เชียงใหม่"),
    ("phuket", "ภูเก็ต"),
    ("songkhla", "สงขลา"),
];

impl ProvinceCatalog {
    /// Build the campaign catalog.
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(PROVINCES.len());
        let mut by_name = HashMap::with_capacity(PROVINCES.len());

        for (name, category, tax_reduction) in PROVINCES {
            by_name.insert(name.to_string(), entries.len());
            entries.push((
                name.to_string(),
                ProvinceInfo {
                    category: *category,
                    tax_reduction: *tax_reduction,
                },
            ));
        }

        Self {
            entries,
            by_name,
            aliases: ALIASES.iter().copied().collect(),
        }
    }

    /// Exact-match lookup by canonical name.
    pub fn get(&self, name: &str) -> Option<&ProvinceInfo> {
        self.by_name.get(name).map(|&i| &self.entries[i].1)
    }

    /// Whether `name` is a canonical key of the catalog.
    ///
    /// This is the membership test used when accepting a registration; the
    /// alias/index fallback of `resolve` intentionally does not apply.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Lookup through the fixed romanized-alias table (case-insensitive).
    pub fn get_by_alias(&self, alias: &str) -> Option<(&str, &ProvinceInfo)> {
        let canonical = self.aliases.get(alias.trim().to_lowercase().as_str())?;
        let &i = self.by_name.get(*canonical)?;
        let (name, info) = &self.entries[i];
        Some((name.as_str(), info))
    }

    /// Lookup by position in the catalog's stable ordering.
    pub fn get_by_index(&self, index: usize) -> Option<(&str, &ProvinceInfo)> {
        self.entries
            .get(index)
            .map(|(name, info)| (name.as_str(), info))
    }

    /// Resolve a lookup key: canonical name, then alias, then numeric index.
    ///
    /// First success wins; a key that is none of the three is `None`.
    pub fn resolve(&self, key: &str) -> Option<(&str, &ProvinceInfo)> {
        if let Some(&i) = self.by_name.get(key) {
            let (name, info) = &self.entries[i];
            return Some((name.as_str(), info));
        }
        if let Some(found) = self.get_by_alias(key) {
            return Some(found);
        }
        key.parse::<usize>()
            .ok()
            .and_then(|index| self.get_by_index(index))
    }

    /// Iterate all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProvinceInfo)> {
        self.entries.iter().map(|(name, info)| (name.as_str(), info))
    }

    /// Number of provinces in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProvinceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_all_nine_provinces() {
        let catalog = ProvinceCatalog::new();
        assert_eq!(catalog.len(), 9);
        assert_eq!(
            catalog
                .iter()
                .filter(|(_, info)| info.category == ProvinceCategory::Secondary)
                .count(),
            5
        );
    }

    #[test]
    fn iteration_order_is_stable() {
        let catalog = ProvinceCatalog::new();
        let names: Vec<&str> = catalog.iter().map(|(name, _)| name).collect();
        assert_eq!(names[0], "เชียงราย");
        assert_eq!(names[5], "กรุงเทพมหานคร");
        assert_eq!(names[8], "สงขลา");
    }

    #[test]
    fn canonical_alias_and_index_agree() {
        let catalog = ProvinceCatalog::new();

        let by_name = catalog.get("น่าน").unwrap();
        let (alias_name, by_alias) = catalog.get_by_alias("nan").unwrap();
        let (index_name, by_index) = catalog.get_by_index(1).unwrap();

        assert_eq!(alias_name, "น่าน");
        assert_eq!(index_name, "น่าน");
        assert_eq!(by_name, by_alias);
        assert_eq!(by_name, by_index);
    }

    #[test]
    fn alias_lookup_is_case_insensitive() {
        let catalog = ProvinceCatalog::new();
        assert!(catalog.get_by_alias("Bangkok").is_some());
        assert!(catalog.get_by_alias("  PHUKET ").is_some());
    }

    #[test]
    fn resolve_tries_canonical_then_alias_then_index() {
        let catalog = ProvinceCatalog::new();

        let (name, _) = catalog.resolve("ภูเก็ต").unwrap();
        assert_eq!(name, "ภูเก็ต");

        let (name, _) = catalog.resolve("phuket").unwrap();
        assert_eq!(name, "ภูเก็ต");

        let (name, _) = catalog.resolve("7").unwrap();
        assert_eq!(name, "ภูเก็ต");
    }

    #[test]
    fn resolve_misses_yield_none() {
        let catalog = ProvinceCatalog::new();
        assert!(catalog.resolve("atlantis").is_none());
        // Out-of-range and non-integer indices are misses, not errors
        assert!(catalog.resolve("9").is_none());
        assert!(catalog.resolve("-1").is_none());
        assert!(catalog.resolve("1.5").is_none());
    }

    #[test]
    fn contains_accepts_canonical_names_only() {
        let catalog = ProvinceCatalog::new();
        assert!(catalog.contains("น่าน"));
        assert!(!catalog.contains("nan"));
        assert!(!catalog.contains("1"));
    }
}
