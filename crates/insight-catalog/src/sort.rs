use std::cmp::Reverse;

use insight_core::constants::UNRANKED_PREVALENCE;

use crate::card::CancerCard;

/// Catalog ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most common first. Unranked cards, and cards ranked 0, go last.
    #[default]
    Prevalence,
    /// Best survival first. Cards without a survival figure go last.
    Survival,
    /// By name, ignoring case.
    Alpha,
}

impl SortKey {
    /// An empty value selects the default order; any other unrecognised
    /// value yields `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "" => Some(Self::default()),
            "prevalence" => Some(Self::Prevalence),
            "survival" => Some(Self::Survival),
            "alpha" => Some(Self::Alpha),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Prevalence => "prevalence",
            Self::Survival => "survival",
            Self::Alpha => "alpha",
        }
    }

    /// Stable in-place sort.
    pub fn sort(self, cards: &mut [CancerCard]) {
        match self {
            Self::Prevalence => cards.sort_by_key(prevalence_key),
            Self::Survival => cards.sort_by_key(|c| Reverse(c.survival.unwrap_or(0))),
            Self::Alpha => cards.sort_by_cached_key(|c| c.name.to_lowercase()),
        }
    }
}

/// Rank 0 is not a valid rank and counts as unranked.
fn prevalence_key(card: &CancerCard) -> u32 {
    card.prevalence_rank
        .filter(|rank| *rank != 0)
        .unwrap_or(UNRANKED_PREVALENCE)
}
