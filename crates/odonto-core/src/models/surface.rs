use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the five anatomical faces of a tooth a procedure can target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Surface {
    Oclusal,
    Vestibular,
    Lingual,
    Mesial,
    Distal,
}

impl Surface {
    pub const ALL: [Surface; 5] = [
        Surface::Oclusal,
        Surface::Vestibular,
        Surface::Lingual,
        Surface::Mesial,
        Surface::Distal,
    ];

    /// Wire code, e.g. `"vestibular"`.
    pub fn code(self) -> &'static str {
        match self {
            Surface::Oclusal => "oclusal",
            Surface::Vestibular => "vestibular",
            Surface::Lingual => "lingual",
            Surface::Mesial => "mesial",
            Surface::Distal => "distal",
        }
    }

    /// All five surfaces as a set.
    pub fn all() -> BTreeSet<Surface> {
        Self::ALL.into_iter().collect()
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Surface {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|surface| surface.code() == s)
            .ok_or_else(|| CoreError::UnknownSurface(s.to_string()))
    }
}
