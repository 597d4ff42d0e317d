//! Order list state: fetch lifecycle, error banner, selection, auto-refresh.
//!
//! DESIGN
//! ======
//! Two independent channels are tracked. `fetch_state` is what the user
//! sees (idle, loading, success, error) and is only driven by visible
//! fetches. Background polls are silent: they replace the list on success
//! and are otherwise invisible, so the table never blanks while polling.
//!
//! Every fetch is issued a monotonically increasing sequence number. A
//! completion older than the last one applied is discarded, which keeps an
//! out-of-order poll from overwriting a newer list.

use crate::net::types::{ClientError, Order};

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

/// Banner text used when a failure carries no message of its own.
pub const FETCH_ERROR_FALLBACK: &str = "Failed to load orders.";

/// Visible lifecycle of the order list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Whether a fetch reports its progress and failures to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// Initial load or manual refresh.
    Visible,
    /// Auto-refresh poll.
    Silent,
}

/// Handle for one in-flight fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub mode: FetchMode,
}

/// What applying a completion did to the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The order list was replaced.
    Replaced,
    /// A visible fetch failed; the banner now shows this message.
    Failed(String),
    /// A silent fetch failed and was swallowed.
    Suppressed,
    /// A newer completion was already applied; this one was ignored.
    Stale,
}

#[derive(Clone, Debug, Default)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub fetch_state: FetchState,
    pub error: Option<String>,
    pub selected: Option<String>,
    pub auto_refresh: bool,
    next_seq: u64,
    applied_seq: u64,
    visible_in_flight: Option<u64>,
    in_flight: usize,
}

impl OrdersState {
    /// Start a fetch. Visible fetches flip the display to `Loading`.
    pub fn begin_fetch(&mut self, mode: FetchMode) -> FetchTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.in_flight += 1;
        if mode == FetchMode::Visible {
            self.fetch_state = FetchState::Loading;
            self.visible_in_flight = Some(seq);
        }
        FetchTicket { seq, mode }
    }

    /// Apply a fetch completion.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Order>, ClientError>) -> FetchOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        let was_visible = self.visible_in_flight == Some(ticket.seq);
        if was_visible {
            self.visible_in_flight = None;
        }

        if ticket.seq < self.applied_seq {
            // A stale visible fetch must still release the loading state it set.
            if was_visible && self.fetch_state == FetchState::Loading {
                self.fetch_state = if self.error.is_some() { FetchState::Error } else { FetchState::Success };
            }
            return FetchOutcome::Stale;
        }

        match (ticket.mode, result) {
            (FetchMode::Visible, Ok(orders)) => {
                self.applied_seq = ticket.seq;
                self.orders = orders;
                self.error = None;
                if self.visible_in_flight.is_none() {
                    self.fetch_state = FetchState::Success;
                }
                FetchOutcome::Replaced
            }
            (FetchMode::Visible, Err(err)) => {
                self.applied_seq = ticket.seq;
                let message = super::message_or(&err, FETCH_ERROR_FALLBACK);
                self.orders.clear();
                self.error = Some(message.clone());
                if self.visible_in_flight.is_none() {
                    self.fetch_state = FetchState::Error;
                }
                FetchOutcome::Failed(message)
            }
            (FetchMode::Silent, Ok(orders)) => {
                self.applied_seq = ticket.seq;
                self.orders = orders;
                FetchOutcome::Replaced
            }
            (FetchMode::Silent, Err(_)) => FetchOutcome::Suppressed,
        }
    }

    /// Manual refresh is disabled while a visible fetch is in flight.
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.visible_in_flight.is_none()
    }

    /// True while any fetch, visible or silent, is outstanding.
    #[must_use]
    pub fn fetch_in_flight(&self) -> bool {
        self.in_flight > 0
    }

    /// The poll timer runs only while auto-refresh is on and the last
    /// visible fetch succeeded.
    #[must_use]
    pub fn poll_active(&self) -> bool {
        self.auto_refresh && self.fetch_state == FetchState::Success
    }

    /// Select an order. The id is kept even if a later list no longer has it.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// True when the selected id is missing from the current list.
    #[must_use]
    pub fn selection_missing(&self) -> bool {
        self.selected
            .as_deref()
            .is_some_and(|id| !self.orders.iter().any(|o| o.id == id))
    }
}
