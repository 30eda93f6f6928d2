//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a part record ("part number").
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u32);

impl PartId {
    /// First part number handed out by a fresh sequence.
    pub const FIRST: PartId = PartId(1000);

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for PartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for PartId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PartId> for u32 {
    fn from(value: PartId) -> Self {
        value.0
    }
}

impl FromStr for PartId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("PartId: {e}")))?;
        Ok(Self(raw))
    }
}

/// Monotonic part-number generator.
///
/// Owned by whoever assigns ids (the ledger), never shared process-wide. Ids start at
/// [`PartId::FIRST`] and increase by one per call, up to and including `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartIdSequence {
    /// `None` once `u32::MAX` has been handed out.
    next: Option<u32>,
}

impl PartIdSequence {
    pub fn new() -> Self {
        Self::starting_at(PartId::FIRST)
    }

    pub fn starting_at(first: PartId) -> Self {
        Self { next: Some(first.0) }
    }

    /// The id the next call to [`PartIdSequence::next_id`] will return, if any.
    pub fn peek(&self) -> Option<PartId> {
        self.next.map(PartId)
    }

    /// Hand out the next id, or `None` once the `u32` space is exhausted.
    pub fn next_id(&mut self) -> Option<PartId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(PartId(current))
    }
}

impl Default for PartIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sequence_starts_at_one_thousand() {
        let mut seq = PartIdSequence::new();
        assert_eq!(seq.next_id(), Some(PartId::from(1000)));
        assert_eq!(seq.next_id(), Some(PartId::from(1001)));
        assert_eq!(seq.peek(), Some(PartId::from(1002)));
    }

    #[test]
    fn last_id_is_issued_before_exhaustion() {
        let mut seq = PartIdSequence::starting_at(PartId::from(u32::MAX - 1));
        assert_eq!(seq.next_id(), Some(PartId::from(u32::MAX - 1)));
        assert_eq!(seq.peek(), Some(PartId::from(u32::MAX)));
        assert_eq!(seq.next_id(), Some(PartId::from(u32::MAX)));
        assert_eq!(seq.peek(), None);
        assert_eq!(seq.next_id(), None);
        assert_eq!(seq.next_id(), None);
    }

    #[test]
    fn parses_part_numbers() {
        assert_eq!(" 1002 ".parse::<PartId>(), Ok(PartId::from(1002)));
        assert!(matches!(
            "abc".parse::<PartId>(),
            Err(DomainError::InvalidId(msg)) if msg.starts_with("PartId:")
        ));
        assert!("-5".parse::<PartId>().is_err());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&PartId::from(1000)).unwrap();
        assert_eq!(json, "1000");
        let back: PartId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PartId::from(1000));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: ids handed out by one sequence are strictly increasing.
        #[test]
        fn ids_strictly_increase(count in 1usize..200) {
            let mut seq = PartIdSequence::new();
            let mut prev: Option<PartId> = None;
            for _ in 0..count {
                let id = seq.next_id().unwrap();
                if let Some(p) = prev {
                    prop_assert!(id > p);
                }
                prev = Some(id);
            }
        }
    }
}
