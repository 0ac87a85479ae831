use super::{Sequencer, Ticket, ViewState};
use crate::catalog::{ApiRecord, SearchFilters};
use crate::client::{CatalogBackend, ClientError};
use tracing::{debug, info};

/// Keyword variant: a plain query against `/catalog/search`.
///
/// Failures are not folded into the view; they go back to the caller and the
/// rows from the last successful search stay in place.
#[derive(Debug, Default)]
pub struct SearchView {
    state: ViewState,
    filters: SearchFilters,
    seq: Sequencer,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>, filters: SearchFilters) -> Self {
        let mut view = Self::new();
        view.set_query(query);
        view.set_filters(filters);
        view
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
    }

    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    pub(crate) fn begin(&mut self) -> (Ticket, String, SearchFilters) {
        (self.seq.issue(), self.state.query.clone(), self.filters.clone())
    }

    /// Replaces the rows on success. Returns `Ok(false)` for a stale ticket.
    pub(crate) fn finish(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<ApiRecord>, ClientError>,
    ) -> Result<bool, ClientError> {
        if !self.seq.is_current(ticket) {
            debug!("Discarding stale /catalog/search response {:?}", ticket);
            return Ok(false);
        }

        let rows = outcome?;
        info!("Catalog search returned {} rows", rows.len());
        self.state.rows = rows;
        Ok(true)
    }

    pub async fn submit(&mut self, backend: &dyn CatalogBackend) -> Result<(), ClientError> {
        let (ticket, query, filters) = self.begin();
        let outcome = backend.search(&query, &filters).await;
        self.finish(ticket, outcome).map(|_| ())
    }
}
