//! The closed set of emoji a photo can be reacted with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A reaction symbol.
///
/// Only these six are accepted by the reactions API; anything else is
/// rejected before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReactionSymbol {
    #[serde(rename = "👍")]
    ThumbsUp,
    #[serde(rename = "😍")]
    HeartEyes,
    #[serde(rename = "🔥")]
    Fire,
    #[serde(rename = "👏")]
    Clap,
    #[serde(rename = "🌟")]
    Star,
    #[serde(rename = "🙌")]
    RaisedHands,
}

/// Returned when a string is not one of the six reaction symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported reaction symbol '{0}'")]
pub struct UnknownSymbol(pub String);

impl ReactionSymbol {
    /// All symbols in display order.
    pub const ALL: [ReactionSymbol; 6] = [
        ReactionSymbol::ThumbsUp,
        ReactionSymbol::HeartEyes,
        ReactionSymbol::Fire,
        ReactionSymbol::Clap,
        ReactionSymbol::Star,
        ReactionSymbol::RaisedHands,
    ];

    /// The emoji sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ReactionSymbol::ThumbsUp => "👍",
            ReactionSymbol::HeartEyes => "😍",
            ReactionSymbol::Fire => "🔥",
            ReactionSymbol::Clap => "👏",
            ReactionSymbol::Star => "🌟",
            ReactionSymbol::RaisedHands => "🙌",
        }
    }
}

impl fmt::Display for ReactionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionSymbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == s)
            .ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}
