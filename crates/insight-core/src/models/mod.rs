//! Value types passed into and returned from the calculators.

/// Implements `from_code`, `Display` and `FromStr` for a closed categorical
/// enum that already provides `ALL` and `code()`.
macro_rules! code_enum {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// Parse from the wire code. Returns `None` when unrecognised.
            pub fn from_code(code: &str) -> Option<Self> {
                Self::ALL.into_iter().find(|v| v.code() == code)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = crate::errors::InsightError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_code(s).ok_or_else(|| crate::errors::InsightError::UnknownCode {
                    kind: $kind,
                    code: s.to_string(),
                })
            }
        }
    };
}

pub mod cancer;
pub mod comorbidity;
pub mod cost;

pub use cancer::{CancerStage, CancerType, TimePoint};
pub use comorbidity::{Comorbidity, ComorbidityProfile, SmokingStatus};
pub use cost::{CareTier, CostBreakdown, CostExplanation, CostInputs, IncomeBand, Stage, Treatment};
