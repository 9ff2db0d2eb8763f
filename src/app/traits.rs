//! Seams between the submission coordinator and its collaborators.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::api::{Bet, PlaceBetRequest, SportsbookClient};
use crate::error::ApiError;

/// Read-only view of the authenticated account at validation time.
#[derive(Debug, Clone)]
pub struct AccountSnapshot {
    /// Current balance as last fetched. The backend owns the source of
    /// truth; this is only a snapshot.
    pub balance: Decimal,
}

/// Places a single-outcome bet with the backend.
#[async_trait]
pub trait BetPlacer: Send + Sync {
    /// Issue one placement call. A returned error aborts any remaining
    /// legs of the submission it belongs to.
    async fn place_bet(&self, request: &PlaceBetRequest) -> Result<Bet, ApiError>;
}

/// Supplies the account snapshot used for validation and refreshes it
/// after a successful submission.
#[async_trait]
pub trait AccountProvider: Send + Sync {
    /// Snapshot of the authenticated account; None when no session exists.
    fn account(&self) -> Option<AccountSnapshot>;

    /// Re-fetch the account from the backend. Invoked after a submission
    /// succeeds, replacing the storefront's full-page reload.
    async fn refresh(&self) -> Result<(), ApiError>;
}

#[async_trait]
impl BetPlacer for SportsbookClient {
    async fn place_bet(&self, request: &PlaceBetRequest) -> Result<Bet, ApiError> {
        SportsbookClient::place_bet(self, request).await
    }
}
