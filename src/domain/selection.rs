//! A single leg of a bet: one chosen outcome for one match.

use super::{MatchId, Odds, Outcome, OutcomeKey};

/// One slip selection with its odds at time of selection.
///
/// The matchup, pick, and league labels are carried for rendering only;
/// payout arithmetic uses nothing but the odds.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    key: OutcomeKey,
    matchup: String,
    pick: String,
    league: String,
    odds: Odds,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub fn new(
        match_id: MatchId,
        matchup: impl Into<String>,
        pick: impl Into<String>,
        outcome: Outcome,
        odds: Odds,
        league: impl Into<String>,
    ) -> Self {
        Self {
            key: OutcomeKey::new(match_id, outcome),
            matchup: matchup.into(),
            pick: pick.into(),
            league: league.into(),
            odds,
        }
    }

    /// Get the composite identity (match + outcome).
    #[must_use]
    pub fn key(&self) -> &OutcomeKey {
        &self.key
    }

    /// Get the match identifier.
    #[must_use]
    pub fn match_id(&self) -> &MatchId {
        self.key.match_id()
    }

    /// Get the chosen outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.key.outcome()
    }

    /// Get the display label for the match (e.g. "Arsenal vs Chelsea").
    #[must_use]
    pub fn matchup(&self) -> &str {
        &self.matchup
    }

    /// Get the display label for the pick (e.g. "Arsenal Win").
    #[must_use]
    pub fn pick(&self) -> &str {
        &self.pick
    }

    /// Get the competition label (e.g. "Premier League").
    #[must_use]
    pub fn league(&self) -> &str {
        &self.league
    }

    /// Get the decimal odds.
    #[must_use]
    pub fn odds(&self) -> Odds {
        self.odds
    }

    /// Replace the odds, modelling a price move before the bet is placed.
    pub(crate) fn set_odds(&mut self, odds: Odds) {
        self.odds = odds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn selection() -> Selection {
        Selection::new(
            MatchId::new("m1"),
            "Arsenal vs Chelsea",
            "Arsenal Win",
            Outcome::Home,
            dec!(2.1),
            "Premier League",
        )
    }

    #[test]
    fn selection_accessors() {
        let sel = selection();
        assert_eq!(sel.match_id().as_str(), "m1");
        assert_eq!(sel.outcome(), Outcome::Home);
        assert_eq!(sel.matchup(), "Arsenal vs Chelsea");
        assert_eq!(sel.pick(), "Arsenal Win");
        assert_eq!(sel.league(), "Premier League");
        assert_eq!(sel.odds(), dec!(2.1));
    }

    #[test]
    fn set_odds_leaves_identity_untouched() {
        let mut sel = selection();
        let key_before = sel.key().clone();
        sel.set_odds(dec!(2.4));
        assert_eq!(sel.odds(), dec!(2.4));
        assert_eq!(sel.key(), &key_before);
    }
}
