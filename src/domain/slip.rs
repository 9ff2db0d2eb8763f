//! The bet slip: in-progress selections plus a single shared stake.

use rust_decimal::Decimal;

use super::{Odds, OutcomeKey, Selection, Stake};

/// Derived slip totals, recomputed on every call and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlipTotals {
    combined_odds: Odds,
    potential_payout: Decimal,
}

impl SlipTotals {
    /// Product of all legs' decimal odds; 1 for an empty slip
    /// (empty-product identity, neutral rather than zero).
    #[must_use]
    pub fn combined_odds(&self) -> Odds {
        self.combined_odds
    }

    /// Gross return if every leg were to win as a parlay: stake times
    /// combined odds. Zero when the stake is missing, non-numeric,
    /// non-positive, or the slip is empty.
    #[must_use]
    pub fn potential_payout(&self) -> Decimal {
        self.potential_payout
    }
}

/// The aggregate root of in-progress betting: an ordered, key-unique set of
/// selections and the raw stake input shared across all of them.
///
/// One slip exists per authenticated session. It lives in memory only and
/// is never persisted; it is reset on successful submission or explicit
/// clear.
#[derive(Debug, Default)]
pub struct BetSlip {
    /// Insertion order preserved for display; uniqueness by `OutcomeKey`
    /// enforced by [`BetSlip::add_or_update`].
    selections: Vec<Selection>,
    /// Raw user input, validated only at submission time.
    stake: String,
}

impl BetSlip {
    /// Create an empty slip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selection, or update the odds of the existing one with the
    /// same key. An update leaves the selection's position unchanged.
    /// Always succeeds.
    pub fn add_or_update(&mut self, selection: Selection) {
        if let Some(existing) = self
            .selections
            .iter_mut()
            .find(|s| s.key() == selection.key())
        {
            existing.set_odds(selection.odds());
        } else {
            self.selections.push(selection);
        }
    }

    /// Update the odds of an existing selection. Returns false when no
    /// selection carries the key; never inserts.
    pub fn update_odds(&mut self, key: &OutcomeKey, odds: Odds) -> bool {
        match self.selections.iter_mut().find(|s| s.key() == key) {
            Some(selection) => {
                selection.set_odds(odds);
                true
            }
            None => false,
        }
    }

    /// Remove the selection with the given key; no-op when absent.
    pub fn remove(&mut self, key: &OutcomeKey) {
        self.selections.retain(|s| s.key() != key);
    }

    /// Empty the selections and reset the stake, atomically.
    pub fn clear(&mut self) {
        self.selections.clear();
        self.stake.clear();
    }

    /// Store the raw stake input verbatim. No validation happens at write
    /// time; parsing is deferred to submission.
    pub fn set_stake(&mut self, raw: impl Into<String>) {
        self.stake = raw.into();
    }

    /// Get the raw stake input as entered.
    #[must_use]
    pub fn stake_input(&self) -> &str {
        &self.stake
    }

    /// Parse the stake, returning it only when it is a number > 0.
    #[must_use]
    pub fn parsed_stake(&self) -> Option<Stake> {
        self.stake
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|stake| *stake > Decimal::ZERO)
    }

    /// Get the selections in insertion order.
    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Number of selections on the slip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// True when no selections are on the slip.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Compute the derived totals from the current state.
    ///
    /// Pure function of the slip: no side effects, no caching. Odds
    /// accumulate at full precision; rounding is left to display code.
    #[must_use]
    pub fn totals(&self) -> SlipTotals {
        let combined_odds = self
            .selections
            .iter()
            .fold(Decimal::ONE, |acc, s| acc * s.odds());

        let potential_payout = if self.selections.is_empty() {
            Decimal::ZERO
        } else {
            self.parsed_stake()
                .map_or(Decimal::ZERO, |stake| stake * combined_odds)
        };

        SlipTotals {
            combined_odds,
            potential_payout,
        }
    }
}
