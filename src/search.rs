//! Search state machine: query/offset bookkeeping, fetch-cycle
//! sequencing, and derived pagination affordances.
//!
//! The controller is the single owner of search state. It never touches
//! the network itself: state-changing user actions return a sequence-
//! tagged [`FetchTicket`], the caller (TUI worker thread or CLI) performs
//! the fetch, and the outcome comes back through [`SearchController::apply`].
//! An outcome whose sequence number is not the latest issued one is
//! discarded, so the displayed page always reflects the most recently
//! initiated query even when an earlier request resolves late.

use crate::catalog::{CatalogResult, ResultPage};
use crate::query::Query;

/// Status of the current fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No search submitted yet.
    #[default]
    Idle,
    /// A fetch is in flight for the latest (query, offset) pair.
    Loading,
    /// The latest fetch completed and overwrote the result page.
    Succeeded,
    /// The latest fetch failed; the message is shown as the error line.
    Failed(String),
}

/// Direction of a pagination action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// A sequence-tagged fetch to be executed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Matches this cycle's outcome back to the controller.
    pub seq: u64,
    pub query: Query,
    pub offset: u64,
}

/// Outcome of one fetch cycle, tagged with its ticket's sequence number.
#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub result: CatalogResult<ResultPage>,
}

/// Owns the query string, pagination offset, last fetched page, and
/// fetch status; derives pagination affordances on demand.
#[derive(Debug)]
pub struct SearchController {
    page_size: u64,
    query: Option<Query>,
    offset: u64,
    page: Option<ResultPage>,
    status: FetchStatus,
    seq: u64,
}

impl SearchController {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size,
            query: None,
            offset: 0,
            page: None,
            status: FetchStatus::Idle,
            seq: 0,
        }
    }

    /// Submit a new query: offset resets to 0 and a fresh cycle starts,
    /// even when the query is textually identical to the previous one.
    ///
    /// The previously fetched page is intentionally left in place while
    /// the fetch is pending.
    pub fn begin_search(&mut self, query: Query) -> FetchTicket {
        self.query = Some(query.clone());
        self.offset = 0;
        self.issue(query)
    }

    /// Move one page backward or forward, gated on the derived
    /// affordances. Returns `None` (and changes nothing) when the gate
    /// is closed or no query has been submitted yet, so calling this
    /// directly is as safe as a disabled button.
    pub fn page(&mut self, direction: PageDirection) -> Option<FetchTicket> {
        let query = self.query.clone()?;
        match direction {
            PageDirection::Previous if self.has_prev() => {
                self.offset = self.offset.saturating_sub(self.page_size);
                Some(self.issue(query))
            }
            PageDirection::Next if self.has_next() => {
                self.offset += self.page_size;
                Some(self.issue(query))
            }
            _ => None,
        }
    }

    /// Start a cycle: bump the sequence number and enter Loading,
    /// clearing any prior error message.
    fn issue(&mut self, query: Query) -> FetchTicket {
        self.seq += 1;
        self.status = FetchStatus::Loading;
        FetchTicket {
            seq: self.seq,
            query,
            offset: self.offset,
        }
    }

    /// Apply a fetch outcome.
    ///
    /// Outcomes from superseded cycles are discarded without touching
    /// state. For the latest cycle, success overwrites the result page
    /// atomically and failure leaves the stale page visible; either way
    /// Loading terminates.
    pub fn apply(&mut self, seq: u64, result: CatalogResult<ResultPage>) {
        if seq != self.seq {
            tracing::debug!(seq, latest = self.seq, "discarding superseded fetch outcome");
            return;
        }
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.status = FetchStatus::Succeeded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "fetch cycle failed");
                self.status = FetchStatus::Failed(e.to_string());
            }
        }
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// The submitted query, if any.
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Zero-based index of the first result in the current window.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// The last fetched page; stays in place across later cycles until
    /// overwritten by a success.
    pub fn current_page(&self) -> Option<&ResultPage> {
        self.page.as_ref()
    }

    /// Server-reported total for the last fetched page, 0 before any.
    pub fn total(&self) -> u64 {
        self.page.as_ref().map(|p| p.total).unwrap_or(0)
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn has_next(&self) -> bool {
        self.offset + self.page_size < self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResultPage;
    use crate::query::QueryComposer;

    fn query(text: &str) -> Query {
        let mut composer = QueryComposer::new();
        composer.replace_text(text);
        composer.submit().unwrap()
    }

    fn page_with_total(total: u64) -> ResultPage {
        ResultPage {
            books: vec![],
            total,
        }
    }

    #[test]
    fn derived_booleans_from_offset_and_total() {
        let mut controller = SearchController::new(12);
        let ticket = controller.begin_search(query("dune"));
        controller.apply(ticket.seq, Ok(page_with_total(37)));

        assert!(!controller.has_prev());
        assert!(controller.has_next()); // 0 + 12 < 37
    }

    #[test]
    fn has_next_false_at_window_end() {
        let mut controller = SearchController::new(12);
        let ticket = controller.begin_search(query("dune"));
        controller.apply(ticket.seq, Ok(page_with_total(10)));

        assert!(!controller.has_next()); // 0 + 12 >= 10
    }

    #[test]
    fn loading_always_terminates() {
        let mut controller = SearchController::new(12);
        let ticket = controller.begin_search(query("dune"));
        assert_eq!(*controller.status(), FetchStatus::Loading);

        controller.apply(ticket.seq, Ok(page_with_total(1)));
        assert_eq!(*controller.status(), FetchStatus::Succeeded);
    }
}
