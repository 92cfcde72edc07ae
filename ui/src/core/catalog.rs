//! Static product catalog and the query operations listing pages run over it.
//!
//! All query functions are pure: they take a slice, never touch it, and return
//! a fresh vector. Callers compose them as filter -> search -> sort, which is
//! exactly what [`query_catalog`] does.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Compiled-in catalog source.
const CATALOG_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/products.json"));

/// Sentinel category value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Signs,
    Tubes,
    Lamps,
    Custom,
    /// Anything the catalog file carries that is not in the published set.
    #[serde(other)]
    Other,
}

impl Category {
    /// Published set, in display order. Does not include the `all` sentinel.
    pub const PUBLISHED: [Category; 4] = [
        Category::Signs,
        Category::Tubes,
        Category::Lamps,
        Category::Custom,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Signs => "signs",
            Self::Tubes => "tubes",
            Self::Lamps => "lamps",
            Self::Custom => "custom",
            Self::Other => "other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::PUBLISHED.into_iter().find(|c| c.slug() == slug)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Immutable catalog record. Missing, `null` or mistyped fields in the source
/// degrade to empty values so one bad record cannot take the listing down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Category,
    /// Non-negative; anything else reads as `0`.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub reviews: u32,
}

/// Take the field as raw JSON and fall back to `T::default()` when it does not
/// fit (`null`, wrong type, out of range).
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price: f64 = lenient(deserializer)?;
    Ok(if price.is_finite() && price > 0.0 { price } else { 0.0 })
}

/// Category selector as chosen in the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// A value outside the published set. Matches nothing.
    Unknown(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            return Self::All;
        }
        match Category::from_slug(value) {
            Some(category) => Self::Only(category),
            None => Self::Unknown(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category.slug(),
            Self::Unknown(value) => value,
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
            Self::Unknown(_) => false,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Input order, untouched.
    #[default]
    Default,
    Name,
    Price,
    /// Ascending by `id`. The record has no creation timestamp, so id order
    /// is the only "newest" signal available.
    Newest,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Default,
        SortMode::Name,
        SortMode::Price,
        SortMode::Newest,
    ];

    /// Unknown values fall back to [`SortMode::Default`].
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "price" => Self::Price,
            "newest" => Self::Newest,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Name => "name",
            Self::Price => "price",
            Self::Newest => "newest",
        }
    }
}

/// Everything a listing page asks the catalog for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search_text: String,
    pub sort_mode: SortMode,
}

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| match parse_catalog(CATALOG_JSON) {
    Ok(products) => {
        tracing::debug!(count = products.len(), "catalog loaded");
        products
    }
    Err(err) => {
        tracing::error!(%err, "failed to parse embedded catalog; serving an empty one");
        Vec::new()
    }
});

/// Parse a JSON array of product records. Only a document that is not an array
/// is an error; entries that are not objects are skipped with a warning.
pub fn parse_catalog(raw: &str) -> Result<Vec<Product>, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(raw)?;
    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(product) => Some(product),
            Err(err) => {
                tracing::warn!(index, %err, "skipping unreadable catalog record");
                None
            }
        })
        .collect())
}

/// Read-only view of the compiled-in catalog.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

/// Published categories, without the `all` sentinel.
pub fn categories() -> &'static [Category] {
    &Category::PUBLISHED
}

pub fn filter_by_category(products: &[Product], filter: &CategoryFilter) -> Vec<Product> {
    products.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// Case-insensitive substring match on name OR description. An empty or
/// all-whitespace query matches everything; any other query is matched as
/// typed, surrounding spaces included.
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    if query.trim().is_empty() {
        return products.to_vec();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort; equal keys keep their input order.
pub fn sort(products: &[Product], mode: SortMode) -> Vec<Product> {
    let mut out = products.to_vec();
    match mode {
        SortMode::Default => {}
        SortMode::Name => out.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::Price => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::Newest => out.sort_by(|a, b| compare_ids(&a.id, &b.id)),
    }
    out
}

/// filter -> search -> sort, then drop repeated ids (first one wins).
pub fn query_catalog(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let filtered = filter_by_category(products, &query.category);
    let matched = search(&filtered, &query.search_text);
    let mut seen = HashSet::new();
    sort(&matched, query.sort_mode)
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}

pub fn find_product(products: &[Product], id: &str) -> Option<Product> {
    products.iter().find(|p| p.id == id).cloned()
}

/// Same-category products other than `product`, in catalog order.
pub fn related_products(products: &[Product], product: &Product, limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(limit)
        .cloned()
        .collect()
}

/// Most-reviewed products first; ties keep catalog order.
pub fn trending(products: &[Product], limit: usize) -> Vec<Product> {
    let mut out = products.to_vec();
    out.sort_by(|a, b| b.reviews.cmp(&a.reviews));
    out.truncate(limit);
    out
}

fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Primary-strength key: case-folded, Latin diacritics stripped. Enough to
/// order French names the way a reader expects (`é` next to `e`).
fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Numeric ids compare numerically (`"2" < "10"`); anything else lexically.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: &str, name: &str, category: Category, price: f64) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            category,
            price,
            ..Product::default()
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn embedded_catalog_parses() {
        assert_eq!(catalog().len(), 6);
        let unique: HashSet<_> = catalog().iter().map(|p| &p.id).collect();
        assert_eq!(unique.len(), catalog().len());
        assert!(catalog()
            .iter()
            .all(|p| Category::PUBLISHED.contains(&p.category)));
    }

    #[test]
    fn all_returns_input_unchanged() {
        assert_eq!(filter_by_category(catalog(), &CategoryFilter::All), catalog());
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let filter = CategoryFilter::parse("chairs");
        assert_eq!(filter, CategoryFilter::Unknown("chairs".into()));
        assert!(filter_by_category(catalog(), &filter).is_empty());
    }

    #[test]
    fn search_ignores_case_and_checks_description() {
        let hits = search(catalog(), "ROMANTIC");
        assert_eq!(ids(&hits), vec!["1"]);
        assert_eq!(search(catalog(), "").len(), catalog().len());
        assert_eq!(search(catalog(), "   ").len(), catalog().len());
    }

    #[test]
    fn search_keeps_surrounding_spaces() {
        // "Light" ends both names it appears in, so "light " matches neither.
        assert!(search(catalog(), "light ").is_empty());
        assert_eq!(ids(&search(catalog(), "light")), vec!["2", "4"]);
        assert_eq!(ids(&search(catalog(), " love ")), vec!["1"]);
    }

    #[test]
    fn malformed_records_do_not_fault() {
        let raw = r#"[
            {"id": "a", "name": "Neon Sign", "category": "signs", "price": 10},
            {"id": "b", "category": "furniture"},
            {"id": "c", "description": "neon lamp"}
        ]"#;
        let products = parse_catalog(raw).unwrap();
        assert_eq!(products[1].category, Category::Other);
        assert_eq!(products[1].price, 0.0);
        assert_eq!(ids(&search(&products, "neon")), vec!["a", "c"]);
        assert_eq!(ids(&sort(&products, SortMode::Name)), vec!["b", "c", "a"]);
        assert_eq!(ids(&sort(&products, SortMode::Price)), vec!["b", "c", "a"]);
    }

    #[test]
    fn null_and_mistyped_fields_default_per_record() {
        let raw = r#"[
            {"id": "a", "name": "Neon Sign", "category": "signs", "price": 10},
            {"id": "b", "name": null, "category": 7, "price": "cheap", "features": null, "reviews": -3},
            "not a record",
            {"id": "c", "name": "Half Price", "price": -5, "images": ["x.png", 3]}
        ]"#;
        let products = parse_catalog(raw).unwrap();
        assert_eq!(ids(&products), vec!["a", "b", "c"]);

        let b = &products[1];
        assert_eq!(b.name, "");
        assert_eq!(b.category, Category::Other);
        assert_eq!(b.price, 0.0);
        assert!(b.features.is_empty());
        assert_eq!(b.reviews, 0);

        assert_eq!(products[2].price, 0.0);
        assert!(products[2].images.is_empty());
        assert_eq!(ids(&sort(&products, SortMode::Name)), vec!["b", "c", "a"]);
    }

    #[test]
    fn fractional_prices_are_kept_and_ordered() {
        let raw = r#"[
            {"id": "1", "name": "Full", "price": 399},
            {"id": "2", "name": "Half", "price": 399.5},
            {"id": "3", "name": "Under", "price": 398.99}
        ]"#;
        let products = parse_catalog(raw).unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[1].price, 399.5);
        assert_eq!(ids(&sort(&products, SortMode::Price)), vec!["3", "1", "2"]);
    }

    #[test]
    fn non_array_document_is_an_error() {
        assert!(parse_catalog(r#"{"id": "1"}"#).is_err());
    }

    #[test]
    fn name_sort_folds_case_and_accents() {
        let products = vec![
            product("1", "zèbre", Category::Signs, 1.0),
            product("2", "Étoile", Category::Signs, 1.0),
            product("3", "arc", Category::Signs, 1.0),
            product("4", "etoile", Category::Signs, 1.0),
        ];
        assert_eq!(ids(&sort(&products, SortMode::Name)), vec!["3", "2", "4", "1"]);
    }

    #[test]
    fn newest_orders_ids_naturally() {
        let products = vec![
            product("10", "a", Category::Signs, 1.0),
            product("2", "b", Category::Signs, 1.0),
            product("1", "c", Category::Signs, 1.0),
        ];
        assert_eq!(ids(&sort(&products, SortMode::Newest)), vec!["1", "2", "10"]);
    }

    #[test]
    fn query_drops_duplicate_ids() {
        let mut products = catalog().to_vec();
        products.push(catalog()[0].clone());
        let result = query_catalog(&products, &CatalogQuery::default());
        assert_eq!(result, catalog());
    }

    #[test]
    fn related_excludes_the_product_itself() {
        let love = find_product(catalog(), "1").unwrap();
        assert_eq!(ids(&related_products(catalog(), &love, 4)), vec!["3", "5"]);
        assert_eq!(ids(&related_products(catalog(), &love, 1)), vec!["3"]);
        assert!(find_product(catalog(), "999").is_none());
    }

    #[test]
    fn trending_prefers_reviews() {
        assert_eq!(ids(&trending(catalog(), 3)), vec!["4", "1", "5"]);
    }

    #[test]
    fn sort_mode_round_trips_and_defaults() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::parse(mode.as_str()), mode);
        }
        assert_eq!(SortMode::parse("popularity"), SortMode::Default);
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (
            "[0-9]{1,3}",
            "[A-Za-zé ]{0,12}",
            prop::sample::select(Category::PUBLISHED.to_vec()),
            (0u32..2000).prop_map(|half| f64::from(half) / 2.0),
            "[a-z ]{0,16}",
        )
            .prop_map(|(id, name, category, price, description)| Product {
                description,
                ..product(&id, &name, category, price)
            })
    }

    proptest! {
        #[test]
        fn filter_keeps_only_matching_category(
            products in prop::collection::vec(arb_product(), 0..20),
            category in prop::sample::select(Category::PUBLISHED.to_vec()),
        ) {
            let out = filter_by_category(&products, &CategoryFilter::Only(category));
            prop_assert!(out.iter().all(|p| p.category == category));
            let expected = products.iter().filter(|p| p.category == category).count();
            prop_assert_eq!(out.len(), expected);
        }

        #[test]
        fn search_hits_contain_the_query(
            products in prop::collection::vec(arb_product(), 0..20),
            query in "[a-zA-Z ]{1,4}",
        ) {
            let hits = search(&products, &query);
            if query.trim().is_empty() {
                prop_assert_eq!(hits, products);
            } else {
                let needle = query.to_lowercase();
                for p in hits {
                    prop_assert!(
                        p.name.to_lowercase().contains(&needle)
                            || p.description.to_lowercase().contains(&needle)
                    );
                }
            }
        }

        #[test]
        fn default_sort_is_identity(products in prop::collection::vec(arb_product(), 0..20)) {
            prop_assert_eq!(sort(&products, SortMode::Default), products);
        }

        #[test]
        fn price_sort_is_ordered_and_stable(products in prop::collection::vec(arb_product(), 0..20)) {
            let sorted = sort(&products, SortMode::Price);
            prop_assert_eq!(sorted.len(), products.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].price <= pair[1].price);
            }
            for price in sorted.iter().map(|p| p.price) {
                let before: Vec<_> = products.iter().filter(|p| p.price == price).collect();
                let after: Vec<_> = sorted.iter().filter(|p| p.price == price).collect();
                prop_assert_eq!(before, after);
            }
        }

        #[test]
        fn name_sort_is_non_decreasing(products in prop::collection::vec(arb_product(), 0..20)) {
            let sorted = sort(&products, SortMode::Name);
            for pair in sorted.windows(2) {
                prop_assert_ne!(compare_names(&pair[0].name, &pair[1].name), Ordering::Greater);
            }
        }
    }
}
