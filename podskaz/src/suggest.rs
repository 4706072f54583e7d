//! Ranking, capping, and deduplication of raw search payloads.
//!
//! Pure functions: one payload plus the category display-name map in, one
//! [`SuggestionLists`] out. The debounce/trigger half lives in
//! [`crate::session`].

use std::collections::{HashMap, HashSet};

use crate::interface::{CategoryInfo, SearchPayload, Suggestion, SuggestionLists};

/// Displayed tag suggestions cap.
pub const MAX_TAG_SUGGESTIONS: usize = 5;
/// Displayed category suggestions cap.
pub const MAX_CATEGORY_SUGGESTIONS: usize = 5;
/// Displayed product suggestions cap.
pub const MAX_PRODUCT_SUGGESTIONS: usize = 5;
/// Deduplicated product pool cap; the pool also feeds the compose-email flow.
pub const PRODUCT_POOL_LIMIT: usize = 20;

/// Build the three ranked, capped, deduplicated suggestion lists plus the
/// combined count from one search payload.
///
/// An empty `category_map` is the degraded mode after a failed category-name
/// lookup: every key falls back to itself.
pub fn aggregate(
    payload: &SearchPayload,
    category_map: &HashMap<String, CategoryInfo>,
) -> SuggestionLists {
    let tags = rank_tags(payload);
    let categories = rank_categories(payload, category_map);
    let (product_pool, products, has_more_products) = dedupe_products(payload);

    let total = tags.len() + categories.len() + products.len();
    SuggestionLists {
        tags,
        categories,
        products,
        product_pool,
        has_more_products,
        total,
    }
}

/// Top tags in backend order (already by descending count), capped.
fn rank_tags(payload: &SearchPayload) -> Vec<Suggestion> {
    payload
        .top_tags
        .iter()
        .take(MAX_TAG_SUGGESTIONS)
        .map(|t| Suggestion::Tag {
            name: t.tag.clone(),
            count: t.count,
        })
        .collect()
}

/// Category counts derived client-side: every result's category keys mapped
/// through the display-name map (raw key when unmapped), counted per name,
/// ordered by count descending with name ascending as the tie-break.
fn rank_categories(
    payload: &SearchPayload,
    category_map: &HashMap<String, CategoryInfo>,
) -> Vec<Suggestion> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for hit in &payload.results {
        for key in &hit.categories {
            let name = category_map
                .get(key)
                .map(|info| info.name.clone())
                .unwrap_or_else(|| key.clone());
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .take(MAX_CATEGORY_SUGGESTIONS)
        .map(|(name, count)| Suggestion::Category { name, count })
        .collect()
}

/// Walk the flat product list in order, dedupe by sku-or-empty plus name
/// keeping the first occurrence. Returns (pool, displayed, has_more):
/// the pool capped at [`PRODUCT_POOL_LIMIT`], the displayed list as the
/// pool's first [`MAX_PRODUCT_SUGGESTIONS`] entries.
fn dedupe_products(payload: &SearchPayload) -> (Vec<Suggestion>, Vec<Suggestion>, bool) {
    let supplier_names: HashMap<&str, &str> = payload
        .results
        .iter()
        .map(|hit| (hit.supplier_id.as_str(), hit.supplier_name.as_str()))
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut pool: Vec<Suggestion> = Vec::new();

    for product in &payload.all_products {
        if pool.len() >= PRODUCT_POOL_LIMIT {
            break;
        }
        let key = format!("{}_{}", product.sku.as_deref().unwrap_or(""), product.name);
        if !seen.insert(key) {
            continue;
        }
        let supplier_name = product
            .supplier_id
            .as_deref()
            .and_then(|id| supplier_names.get(id))
            .map(|name| name.to_string());
        pool.push(Suggestion::Product {
            name: product.name.clone(),
            sku: product.sku.clone(),
            supplier_id: product.supplier_id.clone(),
            supplier_name,
            score: product.score,
        });
    }

    let displayed: Vec<Suggestion> = pool.iter().take(MAX_PRODUCT_SUGGESTIONS).cloned().collect();
    let has_more = pool.len() > displayed.len();
    (pool, displayed, has_more)
}
