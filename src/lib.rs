//! Punter - bet-slip aggregation and submission for a sports-book API.
//!
//! This crate implements the client-side core of a sports-betting
//! storefront: it maintains the user's in-progress bet slip, computes
//! combined odds and potential payout, and submits the slip to a remote
//! sports-book backend as a sequence of independent single bets.
//!
//! # Architecture
//!
//! Two cooperating components form the core:
//!
//! - **`domain::BetSlip`** - the aggregator: an ordered, key-unique set of
//!   selections plus a single shared stake, with derived totals.
//! - **`app::SubmissionCoordinator`** - validates the slip against the
//!   account (authentication, stake, balance) and places one bet per
//!   selection, sequentially, splitting the stake evenly across legs.
//!
//! Selection events reach the slip through a cloneable [`app::SlipHandle`]
//! injected into every caller, so decoupled UI pieces share the one active
//! slip without ambient global state.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Backend-agnostic types: selections, slip, odds math
//! - [`error`] - Error types for the crate
//! - [`api`] - REST client and wire types for the sports-book backend,
//!   plus the live odds WebSocket feed
//! - [`app`] - Session state and submission coordination
//!
//! # Example
//!
//! ```no_run
//! use punter::app::SlipHandle;
//! use punter::domain::{MatchId, Outcome, Selection};
//! use rust_decimal_macros::dec;
//!
//! let slip = SlipHandle::new();
//! slip.add_selection(Selection::new(
//!     MatchId::new("match-1"),
//!     "Arsenal vs Chelsea",
//!     "Arsenal Win",
//!     Outcome::Home,
//!     dec!(2.10),
//!     "Premier League",
//! ));
//! slip.set_stake("100");
//!
//! let totals = slip.totals();
//! assert_eq!(totals.combined_odds(), dec!(2.10));
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
