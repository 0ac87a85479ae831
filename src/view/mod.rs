//! Transient view state for the search page and the controllers that drive it.
//!
//! Both controllers follow the same lifecycle: `begin` takes a [`Ticket`] and
//! prepares the state, the caller performs the remote call, and `finish` folds
//! the outcome back in. Only the most recently issued ticket may change state,
//! so a slow response can never overwrite a newer one.

pub mod ask;
pub mod search;

use crate::catalog::ApiRecord;
use serde::Serialize;

pub use ask::AskView;
pub use search::SearchView;

/// Shown in place of the table when the agent produced SQL but no rows.
pub const EMPTY_STATE_MESSAGE: &str = "No APIs matched your query.";

/// Shown when the call to the agent itself fails.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    pub sql: Option<String>,
    pub rows: Vec<ApiRecord>,
    pub clarification: Option<String>,
}

impl ViewState {
    pub fn show_empty_state(&self) -> bool {
        self.sql.is_some() && self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

// Hands out tickets and remembers which one is current
#[derive(Debug, Default)]
struct Sequencer {
    issued: u64,
}

impl Sequencer {
    fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequencer_only_latest_is_current() {
        let mut seq = Sequencer::default();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_empty_state_requires_sql() {
        let mut state = ViewState::default();
        assert!(!state.show_empty_state());

        state.sql = Some("SELECT 1".to_string());
        assert!(state.show_empty_state());

        state.rows.push(ApiRecord::default());
        assert!(!state.show_empty_state());
    }
}
