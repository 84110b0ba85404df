//! Catalog bindings: filter_cards_json.

use wasm_bindgen::prelude::*;

use insight_catalog::{filter_and_sort, CancerCard};
use insight_core::errors::InsightResult;
use insight_observability::catalog_span;

use crate::conversions::respond;

/// Filter and sort a JSON array of cards.
#[wasm_bindgen]
pub fn filter_cards_json(cards: &str, gender: &str, sort: &str) -> String {
    respond(filter(cards, gender, sort))
}

fn filter(cards: &str, gender: &str, sort: &str) -> InsightResult<Vec<CancerCard>> {
    let _span = catalog_span!(gender, sort).entered();
    let cards: Vec<CancerCard> = serde_json::from_str(cards)?;
    Ok(filter_and_sort(&cards, gender, sort))
}
