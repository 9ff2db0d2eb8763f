//! Shared handle to the session's single bet slip.
//!
//! Selection events originate from decoupled callers (match cards, live
//! feed listeners) that hold no reference to each other. Instead of a
//! process-wide mutable entry point, every caller receives a clone of
//! [`SlipHandle`] and funnels its selections into the one slip behind it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::api::{Match, OddsUpdate};
use crate::domain::{BetSlip, MatchId, Odds, Outcome, OutcomeKey, Selection, SlipTotals, Stake};

/// Cloneable handle to the single active [`BetSlip`].
///
/// All mutations are synchronous and immediately visible to subsequent
/// reads. The handle also carries the submission in-flight flag: while a
/// submission is running, stake edits are rejected.
#[derive(Clone, Default)]
pub struct SlipHandle {
    slip: Arc<Mutex<BetSlip>>,
    submitting: Arc<AtomicBool>,
}

impl SlipHandle {
    /// Create a handle over an empty slip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selection, or update the existing one's odds in place.
    pub fn add_selection(&self, selection: Selection) {
        debug!(key = %selection.key(), odds = %selection.odds(), "selection added");
        self.slip.lock().add_or_update(selection);
    }

    /// Add a selection built from a match listing, deriving the display
    /// labels from the team names. Callers that render odds buttons use
    /// this instead of assembling a [`Selection`] by hand.
    pub fn add_from_match(&self, m: &Match, outcome: Outcome, odds: Odds) {
        let selection = Selection::new(
            MatchId::new(m.id.clone()),
            m.matchup(),
            m.pick_label(outcome),
            outcome,
            odds,
            m.league.clone(),
        );
        self.add_selection(selection);
    }

    /// Refresh the odds of any selections this update concerns. Selections
    /// not on the slip are ignored; nothing is ever inserted.
    pub fn apply_odds_update(&self, update: &OddsUpdate) {
        let mut slip = self.slip.lock();
        for outcome in [Outcome::Home, Outcome::Draw, Outcome::Away] {
            if let Some(odds) = update.odds_for(outcome) {
                let key = OutcomeKey::new(MatchId::new(update.match_id.clone()), outcome);
                if slip.update_odds(&key, odds) {
                    debug!(%key, %odds, "selection odds refreshed from feed");
                }
            }
        }
    }

    /// Remove a selection; no-op when absent.
    pub fn remove_selection(&self, key: &OutcomeKey) {
        self.slip.lock().remove(key);
    }

    /// Empty the slip: selections and stake reset together.
    pub fn clear(&self) {
        self.slip.lock().clear();
    }

    /// Store the raw stake input. Rejected while a submission is in
    /// flight; returns whether the edit was applied.
    pub fn set_stake(&self, raw: &str) -> bool {
        if self.is_submitting() {
            debug!("stake edit rejected: submission in flight");
            return false;
        }
        self.slip.lock().set_stake(raw);
        true
    }

    /// The raw stake input as entered.
    #[must_use]
    pub fn stake_input(&self) -> String {
        self.slip.lock().stake_input().to_string()
    }

    /// The stake parsed as a number > 0, when it is one.
    #[must_use]
    pub fn parsed_stake(&self) -> Option<Stake> {
        self.slip.lock().parsed_stake()
    }

    /// Derived totals of the current slip state.
    #[must_use]
    pub fn totals(&self) -> SlipTotals {
        self.slip.lock().totals()
    }

    /// Clone of the current selections, in insertion order.
    #[must_use]
    pub fn selections(&self) -> Vec<Selection> {
        self.slip.lock().selections().to_vec()
    }

    /// Number of selections on the slip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slip.lock().len()
    }

    /// True when the slip holds no selections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slip.lock().is_empty()
    }

    /// True while a submission is running.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Claim the in-flight flag. Returns false when a submission already
    /// holds it.
    pub(crate) fn begin_submission(&self) -> bool {
        !self.submitting.swap(true, Ordering::SeqCst)
    }

    /// Release the in-flight flag.
    pub(crate) fn end_submission(&self) {
        self.submitting.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn selection(match_id: &str, outcome: Outcome, odds: rust_decimal::Decimal) -> Selection {
        Selection::new(
            MatchId::new(match_id),
            "Home vs Away",
            "Pick",
            outcome,
            odds,
            "League",
        )
    }

    #[test]
    fn clones_share_one_slip() {
        let handle = SlipHandle::new();
        let other = handle.clone();

        other.add_selection(selection("m1", Outcome::Home, dec!(2.0)));

        assert_eq!(handle.len(), 1);
        assert_eq!(handle.selections()[0].odds(), dec!(2.0));
    }

    #[test]
    fn stake_edit_rejected_while_submitting() {
        let handle = SlipHandle::new();
        assert!(handle.set_stake("50"));

        assert!(handle.begin_submission());
        assert!(!handle.set_stake("100"));
        assert_eq!(handle.stake_input(), "50");

        handle.end_submission();
        assert!(handle.set_stake("100"));
        assert_eq!(handle.stake_input(), "100");
    }

    #[test]
    fn begin_submission_claims_flag_once() {
        let handle = SlipHandle::new();
        assert!(handle.begin_submission());
        assert!(!handle.begin_submission());
        handle.end_submission();
        assert!(handle.begin_submission());
    }

    #[test]
    fn odds_update_touches_only_held_selections() {
        let handle = SlipHandle::new();
        handle.add_selection(selection("m1", Outcome::Home, dec!(2.0)));

        let update = OddsUpdate {
            match_id: "m1".into(),
            home_odds: Some(dec!(2.4)),
            draw_odds: Some(dec!(3.1)),
            away_odds: None,
        };
        handle.apply_odds_update(&update);

        // Home odds refreshed; no draw selection appeared.
        assert_eq!(handle.len(), 1);
        assert_eq!(handle.selections()[0].odds(), dec!(2.4));
    }

    #[test]
    fn odds_update_for_other_match_is_ignored() {
        let handle = SlipHandle::new();
        handle.add_selection(selection("m1", Outcome::Home, dec!(2.0)));

        let update = OddsUpdate {
            match_id: "m2".into(),
            home_odds: Some(dec!(9.9)),
            draw_odds: None,
            away_odds: None,
        };
        handle.apply_odds_update(&update);

        assert_eq!(handle.selections()[0].odds(), dec!(2.0));
    }
}
