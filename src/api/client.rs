//! Sports-book REST API client.
//!
//! Thin wrapper over the backend's JSON API. The bearer token obtained at
//! login is kept in memory for the lifetime of the client and attached to
//! every subsequent request.

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::types::{
    AuthPayload, BalanceData, Bet, BetData, BetsData, Credentials, Envelope, ErrorBody, Match,
    MatchesData, PlaceBetRequest, RegisterRequest, User, UserData,
};
use crate::error::ApiError;

/// Optional query parameters for list endpoints.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub league: Option<String>,
}

impl ListQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(status) = &self.status {
            params.push(("status", status.clone()));
        }
        if let Some(league) = &self.league {
            params.push(("league", league.clone()));
        }
        params
    }
}

/// HTTP client for the sports-book backend.
pub struct SportsbookClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl SportsbookClient {
    /// Create a new client against the given API base URL
    /// (e.g. `http://localhost:5000/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token: RwLock::new(None),
        }
    }

    /// Store a bearer token (e.g. one restored from an external store).
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Drop the bearer token.
    pub fn clear_token(&self) {
        *self.token.write() = None;
    }

    /// True when a bearer token is held.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, attaching the bearer token when one is held, and
    /// check the status.
    ///
    /// Non-2xx responses surface the backend's error message verbatim when
    /// the body carries one, else a status-code fallback.
    async fn send_checked(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let builder = match self.token.read().clone() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("HTTP error, status: {status}"));
            warn!(status = status.as_u16(), message = %message, "API request rejected");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Send a request and unwrap the response envelope.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let response = self.send_checked(builder).await?;
        Ok(response.json::<Envelope<T>>().await?)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, ApiError> {
        debug!(path, "GET");
        self.execute(self.http.get(self.url(path)).query(query)).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        debug!(path, "POST");
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    // Auth

    /// Unwrap an auth response, refusing the token when the envelope says
    /// the request did not succeed even though the status was 2xx.
    fn accept_auth(envelope: Envelope<AuthPayload>) -> Result<AuthPayload, ApiError> {
        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "authentication rejected".to_string());
            return Err(ApiError::Rejected {
                status: 200,
                message,
            });
        }
        Ok(envelope.data)
    }

    /// Log in and keep the returned token for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let envelope: Envelope<AuthPayload> = self.post("/auth/login", &credentials).await?;
        let payload = Self::accept_auth(envelope)?;

        self.set_token(payload.token);
        info!(email, "logged in");
        Ok(payload.user)
    }

    /// Register a new account and keep the returned token.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<User, ApiError> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.map(str::to_string),
        };
        let envelope: Envelope<AuthPayload> = self.post("/auth/register", &request).await?;
        let payload = Self::accept_auth(envelope)?;

        self.set_token(payload.token);
        info!(email, "registered");
        Ok(payload.user)
    }

    /// Log out: the local token is dropped first, so the session ends even
    /// when the remote call fails. The response body is discarded.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.clear_token();
        debug!(path = "/auth/logout", "POST");
        self.send_checked(self.http.post(self.url("/auth/logout")).json(&()))
            .await?;
        Ok(())
    }

    // Account

    /// Fetch the authenticated account.
    pub async fn profile(&self) -> Result<User, ApiError> {
        if !self.has_token() {
            return Err(ApiError::NoSession);
        }
        let envelope: Envelope<UserData> = self.get("/users/profile", &[]).await?;
        Ok(envelope.data.user)
    }

    /// Fetch the current account balance.
    pub async fn balance(&self) -> Result<Decimal, ApiError> {
        if !self.has_token() {
            return Err(ApiError::NoSession);
        }
        let envelope: Envelope<BalanceData> = self.get("/users/balance", &[]).await?;
        Ok(envelope.data.balance)
    }

    // Matches

    /// Fetch matches, optionally filtered and paginated.
    pub async fn matches(&self, query: &ListQuery) -> Result<Vec<Match>, ApiError> {
        let envelope: Envelope<MatchesData> = self.get("/matches", &query.params()).await?;
        Ok(envelope.data.matches)
    }

    /// Fetch matches currently in play.
    pub async fn live_matches(&self) -> Result<Vec<Match>, ApiError> {
        let envelope: Envelope<MatchesData> = self.get("/matches/live", &[]).await?;
        Ok(envelope.data.matches)
    }

    /// Fetch matches that have not started yet.
    pub async fn upcoming_matches(&self, query: &ListQuery) -> Result<Vec<Match>, ApiError> {
        let envelope: Envelope<MatchesData> =
            self.get("/matches/upcoming", &query.params()).await?;
        Ok(envelope.data.matches)
    }

    // Bets

    /// Place a single-outcome bet and return the created record.
    pub async fn place_bet(&self, request: &PlaceBetRequest) -> Result<Bet, ApiError> {
        let envelope: Envelope<BetData> = self.post("/bets", request).await?;
        info!(
            bet_id = %envelope.data.bet.id,
            match_id = %request.match_id,
            bet_type = %request.bet_type,
            stake = %request.stake,
            odds = %request.odds,
            "bet placed"
        );
        Ok(envelope.data.bet)
    }

    /// Fetch the authenticated user's bets.
    pub async fn my_bets(&self, query: &ListQuery) -> Result<Vec<Bet>, ApiError> {
        let envelope: Envelope<BetsData> = self.get("/bets/my-bets", &query.params()).await?;
        Ok(envelope.data.bets)
    }

    /// Fetch a single bet by id.
    pub async fn bet(&self, id: &str) -> Result<Bet, ApiError> {
        let envelope: Envelope<BetData> = self.get(&format!("/bets/{id}"), &[]).await?;
        Ok(envelope.data.bet)
    }

    /// Cancel a pending bet. The backend owns the refund.
    pub async fn cancel_bet(&self, id: &str) -> Result<Bet, ApiError> {
        debug!(bet_id = id, "PATCH /bets/:id/cancel");
        let envelope: Envelope<BetData> = self
            .execute(self.http.patch(self.url(&format!("/bets/{id}/cancel"))))
            .await?;
        info!(bet_id = %envelope.data.bet.id, "bet cancelled");
        Ok(envelope.data.bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_held_and_cleared() {
        let client = SportsbookClient::new("http://localhost:5000/api");
        assert!(!client.has_token());

        client.set_token("abc");
        assert!(client.has_token());

        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = SportsbookClient::new("http://localhost:5000/api");
        assert_eq!(client.url("/bets"), "http://localhost:5000/api/bets");
    }

    #[test]
    fn list_query_emits_only_set_params() {
        let query = ListQuery {
            page: Some(2),
            limit: None,
            status: Some("live".into()),
            league: None,
        };
        assert_eq!(
            query.params(),
            vec![("page", "2".to_string()), ("status", "live".to_string())]
        );
    }

    #[test]
    fn empty_list_query_emits_nothing() {
        assert!(ListQuery::default().params().is_empty());
    }

    #[test]
    fn url_joins_nested_bet_paths() {
        let client = SportsbookClient::new("http://localhost:5000/api");
        assert_eq!(
            client.url("/bets/b1/cancel"),
            "http://localhost:5000/api/bets/b1/cancel"
        );
    }

    #[test]
    fn unsuccessful_auth_envelope_yields_no_token() {
        let envelope: Envelope<AuthPayload> = serde_json::from_str(
            r#"{
                "success": false,
                "message": "Invalid credentials",
                "data": { "user": {
                    "id": "u1", "email": "a@b.c", "balance": "0", "role": "user"
                }, "token": "should-not-be-kept" }
            }"#,
        )
        .unwrap();

        let err = SportsbookClient::accept_auth(envelope).unwrap_err();
        match err {
            ApiError::Rejected { message, .. } => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn successful_auth_envelope_yields_payload() {
        let envelope: Envelope<AuthPayload> = serde_json::from_str(
            r#"{
                "success": true,
                "data": { "user": {
                    "id": "u1", "email": "a@b.c", "balance": "500", "role": "user"
                }, "token": "tok-1" }
            }"#,
        )
        .unwrap();

        let payload = SportsbookClient::accept_auth(envelope).unwrap();
        assert_eq!(payload.token, "tok-1");
        assert_eq!(payload.user.id, "u1");
    }
}
