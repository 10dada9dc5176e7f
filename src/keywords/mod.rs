//! Operator compatibility table
//!
//! Maps every known query/aggregation operator token to its support status
//! under each target profile, plus the upstream server version that
//! introduced the operator. The table is literal data (`table.rs`), loaded
//! once and never mutated; adding an operator or a profile column is a data
//! change, not a scan-logic change.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

mod table;

pub use table::OPERATORS;

/// Target compatibility profile selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// 4.0-compatible target
    V4_0,
    /// 5.0-compatible target
    V5_0,
    /// 6.0-compatible target
    V6_0,
}

impl Profile {
    /// All recognized profiles, in support-column order.
    pub const ALL: [Profile; 3] = [Profile::V4_0, Profile::V5_0, Profile::V6_0];

    /// Number of support columns each keyword entry carries.
    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::V4_0 => "4.0",
            Profile::V5_0 => "5.0",
            Profile::V6_0 => "6.0",
        }
    }

    fn column(self) -> usize {
        match self {
            Profile::V4_0 => 0,
            Profile::V5_0 => 1,
            Profile::V6_0 => 2,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::V6_0
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Profile::ALL.iter().map(|p| p.as_str()).collect();
                format!("unknown profile '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Support status of an operator under one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Yes,
    No,
}

impl Support {
    pub fn is_supported(self) -> bool {
        matches!(self, Support::Yes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Support::Yes => "supported",
            Support::No => "unsupported",
        }
    }
}

/// One operator row: the literal token (sigil included), the upstream server
/// version that introduced it, and one status per profile in
/// `Profile::ALL` order. The fixed-size array makes "a status for every
/// recognized profile" a structural invariant rather than a runtime check.
#[derive(Debug, Clone)]
pub struct KeywordEntry {
    pub token: &'static str,
    pub introduced: &'static str,
    pub support: [Support; Profile::COUNT],
}

impl KeywordEntry {
    pub fn status(&self, profile: Profile) -> Support {
        self.support[profile.column()]
    }
}

/// Indexed view over [`OPERATORS`], built once at first use.
pub struct KeywordTable {
    index: HashMap<&'static str, &'static KeywordEntry>,
}

impl KeywordTable {
    pub fn global() -> &'static KeywordTable {
        static TABLE: OnceLock<KeywordTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let mut index = HashMap::with_capacity(OPERATORS.len());
            for entry in OPERATORS {
                let previous = index.insert(entry.token, entry);
                debug_assert!(previous.is_none(), "duplicate operator token {}", entry.token);
            }
            KeywordTable { index }
        })
    }

    pub fn lookup(&self, token: &str) -> Option<&'static KeywordEntry> {
        self.index.get(token).copied()
    }

    /// Status of a known token under a profile.
    ///
    /// Panics when `token` is not in the table: callers iterate `entries()`
    /// or go through `lookup()`, so an absent token here is a caller bug,
    /// not a runtime condition to recover from.
    pub fn status_for(&self, token: &str, profile: Profile) -> Support {
        match self.lookup(token) {
            Some(entry) => entry.status(profile),
            None => panic!("operator {} is not in the compatibility table", token),
        }
    }

    /// All rows, in table (lexicographic) order.
    pub fn entries(&self) -> &'static [KeywordEntry] {
        OPERATORS
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
