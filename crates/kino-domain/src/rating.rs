//! Content-maturity ratings.
//!
//! The vocabulary is closed and totally ordered: a profile cleared for a
//! rating may view everything at or below it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maturity rating of a catalog item, or the clearance of a profile.
///
/// Declaration order is the access order: `All < Twelve < Fifteen < Nineteen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ContentRating {
    All,
    Twelve,
    Fifteen,
    Nineteen,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content rating: {0:?}")]
pub struct UnknownRating(pub String);

impl ContentRating {
    pub const LEVELS: [Self; 4] = [Self::All, Self::Twelve, Self::Fifteen, Self::Nineteen];

    /// Stored and wire form, e.g. `"15+"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Twelve => "12+",
            Self::Fifteen => "15+",
            Self::Nineteen => "19+",
        }
    }

    /// Whether a profile cleared for `self` may view content rated `required`.
    pub fn permits(self, required: ContentRating) -> bool {
        self >= required
    }
}

impl fmt::Display for ContentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentRating {
    type Err = UnknownRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12+" => Ok(Self::Twelve),
            "15+" => Ok(Self::Fifteen),
            "19+" => Ok(Self::Nineteen),
            other if other.eq_ignore_ascii_case("all") => Ok(Self::All),
            other => Err(UnknownRating(other.to_owned())),
        }
    }
}

impl From<ContentRating> for String {
    fn from(rating: ContentRating) -> Self {
        rating.as_str().to_owned()
    }
}

impl TryFrom<String> for ContentRating {
    type Error = UnknownRating;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
