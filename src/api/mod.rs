//! Remote sports-book API: REST client, wire types, and the live odds feed.

mod client;
mod stream;
mod types;

pub use client::{ListQuery, SportsbookClient};
pub use stream::{FeedMessage, OddsStream, OddsUpdate, ScoreUpdate};
pub use types::{
    AuthPayload, Bet, BetStatus, Credentials, Envelope, Match, MatchStatus, Pagination,
    PlaceBetRequest, RegisterRequest, User,
};
