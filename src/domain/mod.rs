//! Backend-agnostic domain logic for bet-slip aggregation.

mod ids;
mod money;
mod outcome;
mod selection;
mod slip;

// Core domain types
pub use ids::{MatchId, OutcomeKey};
pub use money::{display_amount, Odds, Stake};
pub use outcome::Outcome;
pub use selection::Selection;
pub use slip::{BetSlip, SlipTotals};
