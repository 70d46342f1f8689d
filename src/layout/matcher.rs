use std::collections::HashMap;

use crate::{
    chart::model::{EntityRecord, Frame},
    foundation::error::{RaceError, RaceResult},
};

/// Result of looking up an entity in the previous frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Match<'a> {
    /// The entity existed at `rank` with `record`.
    Found {
        /// Rank (row index) in the previous frame.
        rank: usize,
        /// The previous record.
        record: &'a EntityRecord,
    },
    /// The entity is a new entrant.
    Absent,
}

impl<'a> Match<'a> {
    /// Previous record, if matched.
    pub fn record(self) -> Option<&'a EntityRecord> {
        match self {
            Self::Found { record, .. } => Some(record),
            Self::Absent => None,
        }
    }

    /// Previous rank, if matched.
    pub fn rank(self) -> Option<usize> {
        match self {
            Self::Found { rank, .. } => Some(rank),
            Self::Absent => None,
        }
    }
}

/// Previous-frame records indexed by entity key.
///
/// Matching is by identity, never by position: a reordered frame still pairs every record
/// with its own history.
#[derive(Clone, Debug, Default)]
pub struct PreviousIndex<'a> {
    by_key: HashMap<&'a str, (usize, &'a EntityRecord)>,
}

impl<'a> PreviousIndex<'a> {
    /// Index `previous`; `None` (first frame) yields an index where every lookup is absent.
    pub fn build(previous: Option<&'a Frame>) -> RaceResult<Self> {
        let Some(frame) = previous else {
            return Ok(Self::default());
        };
        let mut by_key = HashMap::with_capacity(frame.entities.len());
        for (rank, record) in frame.entities.iter().enumerate() {
            if by_key.insert(record.key.as_str(), (rank, record)).is_some() {
                return Err(RaceError::duplicate_key(
                    record.key.as_str(),
                    format!("previous {}", frame.describe()),
                ));
            }
        }
        Ok(Self { by_key })
    }

    /// Find `key` in the previous frame.
    pub fn lookup(&self, key: &str) -> Match<'a> {
        match self.by_key.get(key) {
            Some(&(rank, record)) => Match::Found { rank, record },
            None => Match::Absent,
        }
    }

    /// Number of indexed previous records.
    pub(crate) fn len(&self) -> usize {
        self.by_key.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/matcher.rs"]
mod tests;
