//! Domain identifier types with proper encapsulation.

use std::fmt;

use super::Outcome;

/// Match identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors. Opaque to this crate; the backend assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchId(String);

impl MatchId {
    /// Create a new MatchId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the match ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MatchId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MatchId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Composite identity of a slip selection: one outcome of one match.
///
/// A slip holds at most one selection per key; re-picking the same
/// match and outcome updates the existing selection's odds in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutcomeKey {
    match_id: MatchId,
    outcome: Outcome,
}

impl OutcomeKey {
    /// Create a new key from a match and an outcome.
    #[must_use]
    pub fn new(match_id: MatchId, outcome: Outcome) -> Self {
        Self { match_id, outcome }
    }

    /// Get the match ID.
    #[must_use]
    pub fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    /// Get the outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl fmt::Display for OutcomeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.match_id, self.outcome)
    }
}
