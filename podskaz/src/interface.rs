//! Boundary types for the suggestion core.
//!
//! Everything the crate receives from the search/category services and
//! everything it hands to the rendering layer lives here, so the rest of the
//! crate stays free of wire concerns. Collection fields default to empty when
//! absent from a payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// A single ranked candidate offered to the user while typing.
///
/// Closed tagged union: each variant carries only the fields meaningful for
/// it, rather than one flat record with optionals for everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    Tag {
        name: String,
        count: u64,
    },
    Category {
        name: String,
        count: u64,
    },
    Product {
        name: String,
        sku: Option<String>,
        supplier_id: Option<String>,
        supplier_name: Option<String>,
        score: Option<f64>,
    },
}

impl Suggestion {
    /// The display name of the suggestion.
    pub fn name(&self) -> &str {
        match self {
            Suggestion::Tag { name, .. } => name,
            Suggestion::Category { name, .. } => name,
            Suggestion::Product { name, .. } => name,
        }
    }

    /// Identity key for deduplication. Products key on sku-or-empty plus
    /// name; tags and categories key on the name alone.
    pub fn dedupe_key(&self) -> String {
        match self {
            Suggestion::Product { name, sku, .. } => {
                format!("{}_{}", sku.as_deref().unwrap_or(""), name)
            }
            other => other.name().to_string(),
        }
    }

    /// The term a scoped follow-up search is issued for when this suggestion
    /// is selected: tag name, category name, or product sku-else-name.
    pub fn search_term(&self) -> &str {
        match self {
            Suggestion::Product { name, sku, .. } => sku.as_deref().unwrap_or(name),
            other => other.name(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// One run of characters from a highlighted text, in original order.
/// Concatenating a highlight run's segments reconstructs the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    pub matched: bool,
}

/// A tag with its backend-computed occurrence count, already ranked by the
/// backend in descending count order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// A sample product attached to a supplier result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleProduct {
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
}

/// One entry of the backend's flat product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductHit {
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// One matching supplier from the search backend, with the tag and category
/// keys its products carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierHit {
    pub supplier_id: String,
    pub supplier_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub example_products: Vec<ExampleProduct>,
}

/// The raw payload a search call returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub results: Vec<SupplierHit>,
    #[serde(default)]
    pub top_tags: Vec<TagCount>,
    #[serde(default)]
    pub all_products: Vec<ProductHit>,
}

/// Display metadata for a category key from the category service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// The three capped, deduplicated suggestion lists plus the combined count.
///
/// `products` is the displayed list; `product_pool` is the larger
/// deduplicated set that additionally feeds the compose-email flow, with
/// `has_more_products` as the view-full-set affordance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionLists {
    pub tags: Vec<Suggestion>,
    pub categories: Vec<Suggestion>,
    pub products: Vec<Suggestion>,
    pub product_pool: Vec<Suggestion>,
    pub has_more_products: bool,
    pub total: usize,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Error type for suggestion session operations.
///
/// The matching core itself is total and never fails; only backend calls and
/// superseded work produce errors.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Search backend error: {0}")]
    Backend(String),
    #[error("Operation superseded by a newer query")]
    Cancelled,
}
