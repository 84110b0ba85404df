use std::fmt;

use crate::card::CardGender;

/// Gender filter selected on the catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    /// Parse the filter control value. Anything other than `male` or
    /// `female` shows every card.
    pub fn parse(value: &str) -> Self {
        match value {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::All,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Cards for both genders are always shown.
    pub fn admits(self, gender: CardGender) -> bool {
        match (self, gender) {
            (Self::All, _) | (_, CardGender::Both) => true,
            (Self::Male, CardGender::Male) | (Self::Female, CardGender::Female) => true,
            _ => false,
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
