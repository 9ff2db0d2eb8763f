//! Authenticated session state.
//!
//! Holds the account snapshot for the lifetime of the session and keeps it
//! in step with the backend: login and registration populate it, logout
//! clears it even when the remote call fails, and `refresh` re-fetches the
//! profile (the submission coordinator calls this after a success).

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{info, warn};

use super::traits::{AccountProvider, AccountSnapshot};
use crate::api::{SportsbookClient, User};
use crate::error::ApiError;

/// Session over a [`SportsbookClient`], owning the current account
/// snapshot.
pub struct Session {
    client: Arc<SportsbookClient>,
    user: RwLock<Option<User>>,
}

impl Session {
    /// Create an unauthenticated session.
    #[must_use]
    pub fn new(client: Arc<SportsbookClient>) -> Self {
        Self {
            client,
            user: RwLock::new(None),
        }
    }

    /// Log in and store the returned account.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let user = self.client.login(email, password).await?;
        *self.user.write() = Some(user);
        Ok(())
    }

    /// Register and store the returned account.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<(), ApiError> {
        let user = self.client.register(email, password, full_name).await?;
        *self.user.write() = Some(user);
        Ok(())
    }

    /// End the session. Local state is cleared first so the session ends
    /// even when the remote logout fails.
    pub async fn logout(&self) {
        *self.user.write() = None;
        if let Err(err) = self.client.logout().await {
            warn!(error = %err, "remote logout failed, local session cleared anyway");
        } else {
            info!("logged out");
        }
    }

    /// Re-fetch the account snapshot from the backend.
    pub async fn refresh_user(&self) -> Result<(), ApiError> {
        let user = self.client.profile().await?;
        *self.user.write() = Some(user);
        Ok(())
    }

    /// Clone of the current account, when authenticated.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }

    /// True when an account is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }
}

#[async_trait]
impl AccountProvider for Session {
    fn account(&self) -> Option<AccountSnapshot> {
        self.user.read().as_ref().map(|user| AccountSnapshot {
            balance: user.balance,
        })
    }

    async fn refresh(&self) -> Result<(), ApiError> {
        self.refresh_user().await
    }
}
