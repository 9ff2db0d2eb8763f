//! Gate and execute submission of the current slip.
//!
//! The coordinator walks Idle → Validating → Submitting → terminal state
//! and back to Idle. Validation is synchronous and local; the submitting
//! phase issues one placement call per selection, strictly in slip order,
//! awaiting each before the next. A mid-sequence failure therefore leaves
//! a well-defined prefix of placed bets and is reported as such; there is
//! no compensating rollback.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::handle::SlipHandle;
use super::traits::{AccountProvider, BetPlacer};
use crate::api::{Bet, PlaceBetRequest};
use crate::domain::{Selection, Stake};
use crate::error::SubmissionError;

/// Observable coordinator state. Validation is synchronous, so from the
/// outside the coordinator is either idle or mid-submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Submitting,
}

/// What a successful submission produced.
#[derive(Debug)]
pub struct SubmissionReceipt {
    per_leg_stake: Decimal,
    bets: Vec<Bet>,
}

impl SubmissionReceipt {
    /// The even share of the stake each leg carried.
    #[must_use]
    pub fn per_leg_stake(&self) -> Decimal {
        self.per_leg_stake
    }

    /// The bet records the backend created, in slip order.
    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }
}

/// Coordinates validation and sequential placement of the slip's legs.
///
/// Each selection is submitted as an independent single bet carrying an
/// even share of the stake (`stake / legs`). This matches a backend that
/// only understands single-outcome bets; it is not parlay math, even
/// though the slip displays a combined multiplier.
pub struct SubmissionCoordinator<P, A> {
    slip: SlipHandle,
    placer: Arc<P>,
    accounts: Arc<A>,
}

impl<P, A> SubmissionCoordinator<P, A>
where
    P: BetPlacer,
    A: AccountProvider,
{
    /// Create a coordinator over the session's slip.
    #[must_use]
    pub fn new(slip: SlipHandle, placer: Arc<P>, accounts: Arc<A>) -> Self {
        Self {
            slip,
            placer,
            accounts,
        }
    }

    /// The slip this coordinator gates.
    #[must_use]
    pub fn slip(&self) -> &SlipHandle {
        &self.slip
    }

    /// Current observable state.
    #[must_use]
    pub fn state(&self) -> CoordinatorState {
        if self.slip.is_submitting() {
            CoordinatorState::Submitting
        } else {
            CoordinatorState::Idle
        }
    }

    /// Validate the slip and submit its legs.
    ///
    /// On success the slip is cleared and the account snapshot refreshed.
    /// On failure the slip and stake are left untouched so the user can
    /// edit and retry. Either way the coordinator returns to idle.
    ///
    /// # Errors
    ///
    /// Validation failures ([`SubmissionError::NotAuthenticated`],
    /// [`SubmissionError::InvalidStake`], [`SubmissionError::EmptySlip`],
    /// [`SubmissionError::InsufficientBalance`]) are raised before any
    /// network call. [`SubmissionError::Remote`] reports a placement
    /// failure along with how many legs were already placed.
    pub async fn submit(&self) -> Result<SubmissionReceipt, SubmissionError> {
        // Re-entrancy guard: one submission at a time, and stake edits are
        // rejected until it resolves.
        if !self.slip.begin_submission() {
            return Err(SubmissionError::AlreadySubmitting);
        }

        let result = self.run().await;
        self.slip.end_submission();
        result
    }

    async fn run(&self) -> Result<SubmissionReceipt, SubmissionError> {
        let (selections, stake) = self.validate()?;

        let total = selections.len();
        let per_leg_stake = stake / Decimal::from(total as u64);

        info!(legs = total, %stake, %per_leg_stake, "submitting slip");

        let mut bets = Vec::with_capacity(total);
        for (placed, selection) in selections.iter().enumerate() {
            let request = PlaceBetRequest::new(
                selection.match_id(),
                selection.outcome(),
                per_leg_stake,
                selection.odds(),
            );

            match self.placer.place_bet(&request).await {
                Ok(bet) => bets.push(bet),
                Err(err) => {
                    // Legs placed so far stay placed; remaining legs are
                    // never issued.
                    warn!(
                        placed,
                        total,
                        leg = %selection.key(),
                        error = %err,
                        "placement failed mid-sequence, aborting remaining legs"
                    );
                    return Err(SubmissionError::Remote {
                        message: err.to_string(),
                        placed,
                        total,
                    });
                }
            }
        }

        self.slip.clear();
        if let Err(err) = self.accounts.refresh().await {
            // The bets are placed; a stale balance view is recoverable.
            warn!(error = %err, "account refresh after submission failed");
        }

        info!(legs = total, "slip submitted");
        Ok(SubmissionReceipt {
            per_leg_stake,
            bets,
        })
    }

    /// Synchronous checks, in order, short-circuiting on the first failure.
    /// No network call happens before these pass.
    fn validate(&self) -> Result<(Vec<Selection>, Stake), SubmissionError> {
        let account = self
            .accounts
            .account()
            .ok_or(SubmissionError::NotAuthenticated)?;

        let stake = self
            .slip
            .parsed_stake()
            .ok_or(SubmissionError::InvalidStake)?;

        let selections = self.slip.selections();
        if selections.is_empty() {
            return Err(SubmissionError::EmptySlip);
        }

        if account.balance < stake {
            return Err(SubmissionError::InsufficientBalance {
                stake,
                balance: account.balance,
            });
        }

        Ok((selections, stake))
    }
}
