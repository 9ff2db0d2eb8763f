//! Wire types for the sports-book REST API.
//!
//! The backend wraps every payload in a `{ success, message, data }`
//! envelope, camelCases its field names, and nests collections one level
//! deep (e.g. `data.matches`). The DTOs here mirror that shape exactly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, Odds, Outcome};

/// Standard response envelope returned by every endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination metadata attached to list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// The authenticated account as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub balance: Decimal,
    pub role: String,
}

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Finished,
}

/// A match with its current 1X2 odds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub start_time: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    /// Elapsed play time as the backend formats it (e.g. "73'").
    #[serde(default)]
    pub current_time: Option<String>,
    #[serde(default)]
    pub home_odds: Option<Odds>,
    #[serde(default)]
    pub draw_odds: Option<Odds>,
    #[serde(default)]
    pub away_odds: Option<Odds>,
    #[serde(default)]
    pub odds_updated_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Get this match's identifier as a domain id.
    #[must_use]
    pub fn match_id(&self) -> MatchId {
        MatchId::new(self.id.clone())
    }

    /// The currently offered odds for one outcome, when the book has
    /// priced it.
    #[must_use]
    pub fn odds_for(&self, outcome: Outcome) -> Option<Odds> {
        match outcome {
            Outcome::Home => self.home_odds,
            Outcome::Draw => self.draw_odds,
            Outcome::Away => self.away_odds,
        }
    }

    /// Display label for the matchup (e.g. "Arsenal vs Chelsea").
    #[must_use]
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    /// Display label for picking one outcome of this match.
    #[must_use]
    pub fn pick_label(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Home => format!("{} Win", self.home_team),
            Outcome::Draw => "Draw".to_string(),
            Outcome::Away => format!("{} Win", self.away_team),
        }
    }
}

/// Settlement state of a placed bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
    Cancelled,
}

/// A bet record created by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    pub id: String,
    pub user_id: String,
    pub match_id: String,
    pub bet_type: Outcome,
    pub odds: Decimal,
    pub stake: Decimal,
    pub potential_win: Decimal,
    pub status: BetStatus,
    pub placed_at: DateTime<Utc>,
    #[serde(default)]
    pub settled_at: Option<DateTime<Utc>>,
}

/// Request body for placing a single-outcome bet.
///
/// The backend expects `stake` and `odds` as JSON numbers, not the
/// string form `Decimal` serializes to by default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetRequest {
    pub match_id: String,
    pub bet_type: Outcome,
    #[serde(with = "rust_decimal::serde::float")]
    pub stake: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub odds: Decimal,
}

impl PlaceBetRequest {
    /// Build a placement request for one leg.
    #[must_use]
    pub fn new(match_id: &MatchId, bet_type: Outcome, stake: Decimal, odds: Decimal) -> Self {
        Self {
            match_id: match_id.as_str().to_string(),
            bet_type,
            stake,
            odds,
        }
    }
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Payload of a successful login or registration.
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

// Nesting wrappers for `data` payloads.

#[derive(Debug, Deserialize)]
pub(crate) struct MatchesData {
    pub matches: Vec<Match>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserData {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BalanceData {
    pub balance: Decimal,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BetData {
    pub bet: Bet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BetsData {
    pub bets: Vec<Bet>,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn envelope_decodes_with_pagination() {
        let json = r#"{
            "success": true,
            "data": { "matches": [] },
            "pagination": {
                "currentPage": 1,
                "totalPages": 3,
                "totalItems": 42,
                "itemsPerPage": 20,
                "hasNextPage": true,
                "hasPrevPage": false
            }
        }"#;

        let envelope: Envelope<MatchesData> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.message.is_none());
        assert!(envelope.data.matches.is_empty());
        assert_eq!(envelope.pagination.unwrap().total_items, 42);
    }

    #[test]
    fn match_decodes_camel_case_odds() {
        let json = r#"{
            "id": "m1",
            "homeTeam": "Arsenal",
            "awayTeam": "Chelsea",
            "league": "Premier League",
            "startTime": "2024-05-01T18:30:00Z",
            "status": "upcoming",
            "homeOdds": "2.10",
            "drawOdds": "3.40",
            "awayOdds": "3.10"
        }"#;

        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.odds_for(Outcome::Home), Some(dec!(2.10)));
        assert_eq!(m.odds_for(Outcome::Draw), Some(dec!(3.40)));
        assert_eq!(m.matchup(), "Arsenal vs Chelsea");
        assert_eq!(m.pick_label(Outcome::Away), "Chelsea Win");
        assert_eq!(m.pick_label(Outcome::Draw), "Draw");
    }

    #[test]
    fn match_without_odds_reports_none() {
        let json = r#"{
            "id": "m2",
            "homeTeam": "A",
            "awayTeam": "B",
            "league": "L",
            "startTime": "2024-05-01T18:30:00Z",
            "status": "finished"
        }"#;

        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.odds_for(Outcome::Home), None);
        assert_eq!(m.status, MatchStatus::Finished);
    }

    #[test]
    fn place_bet_request_serializes_camel_case_with_numeric_amounts() {
        let request = PlaceBetRequest::new(
            &MatchId::new("m1"),
            Outcome::Draw,
            dec!(50),
            dec!(3.4),
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["matchId"], "m1");
        assert_eq!(json["betType"], "draw");
        // Amounts go to the wire as JSON numbers, never strings.
        assert!(json["stake"].is_number());
        assert!(json["odds"].is_number());
        assert_eq!(json["stake"].as_f64(), Some(50.0));
        assert_eq!(json["odds"].as_f64(), Some(3.4));
    }

    #[test]
    fn bet_decodes_settlement_fields() {
        let json = r#"{
            "id": "b1",
            "userId": "u1",
            "matchId": "m1",
            "betType": "home",
            "odds": "2.0",
            "stake": "50",
            "potentialWin": "100",
            "status": "pending",
            "placedAt": "2024-05-01T18:45:00Z"
        }"#;

        let bet: Bet = serde_json::from_str(json).unwrap();
        assert_eq!(bet.bet_type, Outcome::Home);
        assert_eq!(bet.status, BetStatus::Pending);
        assert!(bet.settled_at.is_none());
        assert_eq!(bet.potential_win, dec!(100));
    }

    #[test]
    fn cancelled_bet_decodes_with_settlement_time() {
        let json = r#"{
            "id": "b2",
            "userId": "u1",
            "matchId": "m1",
            "betType": "away",
            "odds": "3.1",
            "stake": "25",
            "potentialWin": "77.5",
            "status": "cancelled",
            "placedAt": "2024-05-01T18:45:00Z",
            "settledAt": "2024-05-01T19:00:00Z"
        }"#;

        let bet: Bet = serde_json::from_str(json).unwrap();
        assert_eq!(bet.status, BetStatus::Cancelled);
        assert!(bet.settled_at.is_some());
    }

    #[test]
    fn register_request_skips_missing_full_name() {
        let request = RegisterRequest {
            email: "a@b.c".into(),
            password: "pw".into(),
            full_name: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("fullName").is_none());
    }
}
