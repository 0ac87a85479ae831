use super::{REQUEST_FAILED_MESSAGE, Sequencer, Ticket, ViewState};
use crate::catalog::QueryResponse;
use crate::client::{CatalogBackend, ClientError};
use tracing::{debug, info, warn};

/// Natural-language variant: forwards the question to the agent behind `/query`.
#[derive(Debug, Default)]
pub struct AskView {
    state: ViewState,
    seq: Sequencer,
}

impl AskView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        let mut view = Self::new();
        view.set_query(query);
        view
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    /// Starts a submission. Returns `None` without touching state when the
    /// query is blank.
    pub(crate) fn begin(&mut self) -> Option<(Ticket, String)> {
        if self.state.query.trim().is_empty() {
            return None;
        }

        self.state.loading = true;
        self.state.error = None;
        self.state.sql = None;
        self.state.rows.clear();
        self.state.clarification = None;

        Some((self.seq.issue(), self.state.query.clone()))
    }

    /// Applies the outcome of the call started with `ticket`. Returns `false`
    /// if a newer submission has been issued since, in which case nothing changes.
    pub(crate) fn finish(&mut self, ticket: Ticket, outcome: Result<QueryResponse, ClientError>) -> bool {
        if !self.seq.is_current(ticket) {
            debug!("Discarding stale /query response {:?}", ticket);
            return false;
        }

        match outcome {
            Ok(response) => {
                if let Some(error) = response.error {
                    info!("Agent returned an error: {}", error);
                    self.state.error = Some(error);
                } else {
                    self.state.sql = response.sql;
                    self.state.rows = response.results.unwrap_or_default();
                    if response.clarification_needed {
                        self.state.clarification = response.clarification_question;
                    }
                    info!("Agent returned {} rows", self.state.rows.len());
                }
            }
            Err(e) => {
                warn!("/query request failed: {}", e);
                self.state.error = Some(REQUEST_FAILED_MESSAGE.to_string());
            }
        }

        self.state.loading = false;
        true
    }

    /// Runs one full submission against `backend`. Returns whether a request was made.
    pub async fn submit(&mut self, backend: &dyn CatalogBackend) -> bool {
        let Some((ticket, query)) = self.begin() else {
            return false;
        };

        let outcome = backend.ask(&query).await;
        self.finish(ticket, outcome);
        true
    }
}
