use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised by the remote sports-book API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend rejected the request; carries its message verbatim when
    /// the error body had one, else a generic status-code fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("not logged in")]
    NoSession,
}

/// Submission failures surfaced to the user.
///
/// All variants are non-fatal and user-recoverable: the slip is left intact
/// on failure so the user can edit and retry.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("please login to place bets")]
    NotAuthenticated,

    #[error("please enter a valid stake amount")]
    InvalidStake,

    #[error("please add at least one selection")]
    EmptySlip,

    #[error("insufficient balance: stake {stake} exceeds balance {balance}")]
    InsufficientBalance { stake: Decimal, balance: Decimal },

    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// A placement call failed mid-sequence. `placed` counts the legs that
    /// were already accepted by the backend and stay placed; there is no
    /// compensating rollback.
    #[error("bet placement failed after {placed} of {total} legs: {message}")]
    Remote {
        message: String,
        placed: usize,
        total: usize,
    },
}

impl SubmissionError {
    /// True when some legs were placed before the failure, i.e. the user
    /// holds fewer bets than selections. Distinct from a clean failure
    /// where nothing was placed.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Remote { placed, .. } if *placed > 0)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("WebSocket error: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Error::WebSocket(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn remote_error_with_placed_legs_is_partial() {
        let err = SubmissionError::Remote {
            message: "stale odds".into(),
            placed: 1,
            total: 3,
        };
        assert!(err.is_partial());
    }

    #[test]
    fn remote_error_with_no_placed_legs_is_not_partial() {
        let err = SubmissionError::Remote {
            message: "server error".into(),
            placed: 0,
            total: 2,
        };
        assert!(!err.is_partial());
    }

    #[test]
    fn validation_errors_are_not_partial() {
        assert!(!SubmissionError::NotAuthenticated.is_partial());
        assert!(!SubmissionError::InvalidStake.is_partial());
        assert!(!SubmissionError::EmptySlip.is_partial());
        assert!(!SubmissionError::InsufficientBalance {
            stake: dec!(100),
            balance: dec!(50),
        }
        .is_partial());
    }

    #[test]
    fn insufficient_balance_message_names_both_amounts() {
        let err = SubmissionError::InsufficientBalance {
            stake: dec!(100),
            balance: dec!(50),
        };
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }
}
