//! # insight-catalog
//!
//! Filtering and ordering of the cancer information cards shown on the
//! catalog page.

pub mod card;
pub mod filter;
pub mod sort;

pub use card::{CancerCard, CardGender};
pub use filter::GenderFilter;
pub use sort::SortKey;

/// Cards visible under `gender`, ordered by `sort`.
///
/// An empty sort key sorts by prevalence; any other unrecognised key keeps
/// the input order. Sorting is stable, so
/// cards with equal keys also keep their relative input order.
pub fn filter_and_sort(cards: &[CancerCard], gender: &str, sort: &str) -> Vec<CancerCard> {
    let gender = GenderFilter::parse(gender);
    let sort_key = SortKey::from_code(sort);
    if sort_key.is_none() {
        tracing::debug!(sort, "unrecognised sort key, keeping input order");
    }

    let mut visible: Vec<CancerCard> = cards
        .iter()
        .filter(|card| gender.admits(card.gender))
        .cloned()
        .collect();
    if let Some(key) = sort_key {
        key.sort(&mut visible);
    }

    tracing::debug!(
        total = cards.len(),
        visible = visible.len(),
        gender = %gender,
        "filtered catalog"
    );
    visible
}
