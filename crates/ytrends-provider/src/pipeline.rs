//! The per-query state machine: validate, fetch, shape.
//!
//! ```text
//! Idle -> Validating -> { Rejected | Fetching }
//! Fetching -> { Succeeded | Empty | RateLimited | ProviderError }
//! ```
//!
//! Terminal states have no outgoing edges; the next query starts at `Idle`.

use ytrends_core::{normalize, AppConfig, ValidationError};

use crate::client::TrendsClient;
use crate::fetch::{fetch_and_shape, FetchError};
use crate::shape::{ShapedTrends, TrendReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Idle,
    Validating,
    Rejected,
    Fetching,
    Succeeded,
    Empty,
    RateLimited,
    ProviderError,
}

impl QueryState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Rejected | Self::Succeeded | Self::Empty | Self::RateLimited | Self::ProviderError
        )
    }

    /// Whether `self -> next` is an edge of the query state machine.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        match self {
            Self::Idle => next == Self::Validating,
            Self::Validating => matches!(next, Self::Rejected | Self::Fetching),
            Self::Fetching => matches!(
                next,
                Self::Succeeded | Self::Empty | Self::RateLimited | Self::ProviderError
            ),
            Self::Rejected
            | Self::Succeeded
            | Self::Empty
            | Self::RateLimited
            | Self::ProviderError => false,
        }
    }
}

/// Terminal result of one query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Rejected(ValidationError),
    Succeeded(TrendReport),
    Empty,
    RateLimited,
    ProviderError(String),
}

impl QueryOutcome {
    #[must_use]
    pub fn state(&self) -> QueryState {
        match self {
            Self::Rejected(_) => QueryState::Rejected,
            Self::Succeeded(_) => QueryState::Succeeded,
            Self::Empty => QueryState::Empty,
            Self::RateLimited => QueryState::RateLimited,
            Self::ProviderError(_) => QueryState::ProviderError,
        }
    }
}

impl From<Result<ShapedTrends, FetchError>> for QueryOutcome {
    fn from(result: Result<ShapedTrends, FetchError>) -> Self {
        match result {
            Ok(ShapedTrends::Data(report)) => Self::Succeeded(report),
            Ok(ShapedTrends::Empty) => Self::Empty,
            Err(FetchError::RateLimited) => Self::RateLimited,
            Err(FetchError::ProviderError(message)) => Self::ProviderError(message),
        }
    }
}

/// Runs one query from raw user text to a terminal outcome.
///
/// A fresh [`TrendsClient`] (and therefore a fresh provider session) is
/// built for every call. Nothing is cached between calls.
pub async fn run_query(config: &AppConfig, raw_text: &str) -> QueryOutcome {
    let mut state = QueryState::Idle;
    advance(&mut state, QueryState::Validating);

    let keywords = match normalize(raw_text) {
        Ok(keywords) => keywords,
        Err(err) => {
            advance(&mut state, QueryState::Rejected);
            tracing::info!(error = %err, "keyword input rejected");
            return QueryOutcome::Rejected(err);
        }
    };
    if keywords.has_blank() {
        tracing::warn!(keywords = %keywords, "keyword list contains an empty entry");
    }

    advance(&mut state, QueryState::Fetching);
    let outcome = match TrendsClient::new(config) {
        Ok(client) => QueryOutcome::from(fetch_and_shape(&client, &keywords).await),
        Err(err) => QueryOutcome::from(Err::<ShapedTrends, _>(FetchError::from(err))),
    };
    advance(&mut state, outcome.state());

    tracing::info!(keywords = %keywords, outcome = ?outcome.state(), "query finished");
    outcome
}

fn advance(state: &mut QueryState, next: QueryState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal query transition {state:?} -> {next:?}"
    );
    tracing::debug!(from = ?*state, to = ?next, "query state");
    *state = next;
}
