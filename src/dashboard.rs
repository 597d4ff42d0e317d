//! Dashboard controller: fetch/poll lifecycle, selection, and chat wiring.
//!
//! DESIGN
//! ======
//! The controller is single-owner and event driven. Network calls run on
//! spawned tokio tasks that post a [`DashboardEvent`] back over an unbounded
//! channel; every state transition happens in [`Dashboard::handle`] on the
//! owning task, so no locking is needed around `OrdersState`/`ChatState`.
//!
//! The auto-refresh timer is a spawned interval task that only posts
//! `PollTick`. It is armed or aborted after every state change according to
//! `OrdersState::poll_active`, which ties it to the same triggers as the
//! visible state: toggle off, leaving success, or unmount.
//!
//! LIFECYCLE
//! =========
//! `unmount` clears the shared liveness flag, aborts the timer, and closes
//! the channel. In-flight requests are not cancelled, but their completions
//! are dropped before they can touch state.

use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::DashboardConfig;
use crate::net::assistant::AssistantClient;
use crate::net::orders::OrderClient;
use crate::net::types::{AssistantSource, ClientError, Order, OrderSource};
use crate::state::chat::{ChatState, ChatSubmission};
use crate::state::orders::{FetchMode, FetchOutcome, FetchState, FetchTicket, OrdersState};
use crate::views::{assistant_chat, order_list};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

pub const TITLE: &str = "Orders";
pub const LOADING_TEXT: &str = "Loading orders…";

/// Completion or timer notification delivered to the controller.
#[derive(Debug)]
pub enum DashboardEvent {
    OrdersFetched { ticket: FetchTicket, result: Result<Vec<Order>, ClientError> },
    PollTick,
    ChatReplied { result: Result<String, ClientError> },
}

pub struct Dashboard {
    order_source: Arc<dyn OrderSource>,
    assistant: Arc<dyn AssistantSource>,
    poll_interval: Duration,
    orders: OrdersState,
    chat: ChatState,
    tx: mpsc::UnboundedSender<DashboardEvent>,
    rx: mpsc::UnboundedReceiver<DashboardEvent>,
    alive: Arc<AtomicBool>,
    poll: Option<JoinHandle<()>>,
}

impl Dashboard {
    #[must_use]
    pub fn new(
        order_source: Arc<dyn OrderSource>,
        assistant: Arc<dyn AssistantSource>,
        poll_interval: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            order_source,
            assistant,
            poll_interval,
            orders: OrdersState::default(),
            chat: ChatState::default(),
            tx,
            rx,
            alive: Arc::new(AtomicBool::new(true)),
            poll: None,
        }
    }

    /// Build a dashboard backed by the real HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpClientBuild`] if either client fails to build.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ClientError> {
        let orders = OrderClient::new(config.orders_url.clone(), config.timeouts)?;
        let assistant = AssistantClient::new(config.assistant_url.clone(), config.timeouts)?;
        Ok(Self::new(Arc::new(orders), Arc::new(assistant), config.poll_interval))
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn orders(&self) -> &OrdersState {
        &self.orders
    }

    #[must_use]
    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn poll_running(&self) -> bool {
        self.poll.is_some()
    }

    // =========================================================================
    // USER ACTIONS
    // =========================================================================

    /// Initial visible load.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            self.spawn_fetch(FetchMode::Visible);
        }
    }

    /// Manual refresh. Returns `false` when disabled (a visible fetch is
    /// already in flight, or the dashboard is unmounted).
    pub fn refresh(&mut self) -> bool {
        if !self.is_mounted() || !self.orders.can_refresh() {
            return false;
        }
        self.spawn_fetch(FetchMode::Visible);
        true
    }

    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.orders.auto_refresh = enabled;
        tracing::debug!(enabled, "auto-refresh toggled");
        self.sync_poll_timer();
    }

    pub fn select_order(&mut self, id: impl Into<String>) {
        self.orders.select(id);
    }

    /// Select by 0-based table row. Returns `false` if the row does not exist.
    pub fn select_row(&mut self, index: usize) -> bool {
        let mut picked = None;
        let view = order_list::OrderListView::new(&self.orders.orders, self.orders.selected_id(), false);
        let found = view.select_row(index, |id| picked = Some(id.to_owned()));
        if let Some(id) = picked {
            self.orders.select(id);
        }
        found
    }

    pub fn set_chat_input(&mut self, text: impl Into<String>) {
        self.chat.set_input(text);
    }

    pub fn toggle_chat(&mut self) {
        self.chat.toggle_open();
    }

    /// Submit the chat input for the selected order. Returns `false` and
    /// changes nothing when there is no selection or the input is blank.
    pub fn submit_chat(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let Some(submission) = self.chat.begin_submit(self.orders.selected_id()) else {
            return false;
        };
        self.spawn_chat(submission);
        true
    }

    /// Tear down: stop the timer and drop any completion still in flight.
    pub fn unmount(&mut self) {
        if !self.alive.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(handle) = self.poll.take() {
            handle.abort();
        }
        self.rx.close();
        while self.rx.try_recv().is_ok() {}
        tracing::debug!("dashboard unmounted");
    }

    // =========================================================================
    // EVENT LOOP
    // =========================================================================

    /// Wait for the next event. Returns `None` once unmounted.
    pub async fn next_event(&mut self) -> Option<DashboardEvent> {
        if !self.is_mounted() {
            return None;
        }
        self.rx.recv().await
    }

    /// Wait for and apply one event. Returns `false` once unmounted.
    pub async fn step(&mut self) -> bool {
        match self.next_event().await {
            Some(event) => {
                self.handle(event);
                true
            }
            None => false,
        }
    }

    /// Apply one event to state.
    pub fn handle(&mut self, event: DashboardEvent) {
        if !self.is_mounted() {
            return;
        }
        match event {
            DashboardEvent::OrdersFetched { ticket, result } => {
                match self.orders.apply_fetch(ticket, result) {
                    FetchOutcome::Replaced => {
                        tracing::debug!(seq = ticket.seq, count = self.orders.orders.len(), "order list replaced");
                    }
                    FetchOutcome::Failed(message) => {
                        tracing::warn!(seq = ticket.seq, error = %message, "order fetch failed");
                    }
                    FetchOutcome::Suppressed => {
                        tracing::debug!(seq = ticket.seq, "background poll failed; keeping current list");
                    }
                    FetchOutcome::Stale => {
                        tracing::debug!(seq = ticket.seq, "discarding stale order fetch");
                    }
                }
                self.sync_poll_timer();
            }
            DashboardEvent::PollTick => {
                if !self.orders.poll_active() || self.orders.fetch_in_flight() {
                    return;
                }
                self.spawn_fetch(FetchMode::Silent);
            }
            DashboardEvent::ChatReplied { result } => {
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "assistant chat failed");
                }
                self.chat.apply_reply(result);
            }
        }
    }

    // =========================================================================
    // TASKS
    // =========================================================================

    fn spawn_fetch(&mut self, mode: FetchMode) {
        let ticket = self.orders.begin_fetch(mode);
        let source = Arc::clone(&self.order_source);
        let tx = self.tx.clone();
        let alive = Arc::clone(&self.alive);

        tokio::spawn(async move {
            let result = source.fetch_orders().await;
            if alive.load(Ordering::Acquire) {
                let _ = tx.send(DashboardEvent::OrdersFetched { ticket, result });
            }
        });

        self.sync_poll_timer();
    }

    fn spawn_chat(&mut self, submission: ChatSubmission) {
        let assistant = Arc::clone(&self.assistant);
        let tx = self.tx.clone();
        let alive = Arc::clone(&self.alive);

        tokio::spawn(async move {
            let result = assistant.post_chat(&submission.order_id, &submission.message).await;
            if alive.load(Ordering::Acquire) {
                let _ = tx.send(DashboardEvent::ChatReplied { result });
            }
        });
    }

    fn sync_poll_timer(&mut self) {
        let wanted = self.is_mounted() && self.orders.poll_active();
        match (self.poll.is_some(), wanted) {
            (false, true) => {
                self.poll = Some(spawn_poll_timer(self.poll_interval, self.tx.clone(), Arc::clone(&self.alive)));
                tracing::debug!(interval = ?self.poll_interval, "poll timer armed");
            }
            (true, false) => {
                if let Some(handle) = self.poll.take() {
                    handle.abort();
                }
                tracing::debug!("poll timer stopped");
            }
            _ => {}
        }
    }

    // =========================================================================
    // RENDER
    // =========================================================================

    /// Compose the full screen: header, error banner, table, chat panel.
    #[must_use]
    pub fn render(&self) -> String {
        let state = &self.orders;
        let status = match state.fetch_state {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Success => "ok",
            FetchState::Error => "error",
        };
        let auto = if state.auto_refresh { "on" } else { "off" };

        let mut out = format!("{TITLE}  [status: {status}] [auto-refresh: {auto}]\n");
        if let Some(error) = &state.error {
            let _ = writeln!(out, "! {error}");
        }

        if state.fetch_state == FetchState::Loading {
            out.push_str(LOADING_TEXT);
            out.push('\n');
        } else if state.fetch_state != FetchState::Error {
            let live = order_list::live_tracking(state.auto_refresh, &state.orders);
            let view = order_list::OrderListView::new(&state.orders, state.selected_id(), live);
            out.push_str(&view.render());
            if !out.ends_with('\n') {
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str(&assistant_chat::render(&self.chat, state.selected_id()));
        out
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn spawn_poll_timer(
    period: Duration,
    tx: mpsc::UnboundedSender<DashboardEvent>,
    alive: Arc<AtomicBool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if !alive.load(Ordering::Acquire) || tx.send(DashboardEvent::PollTick).is_err() {
                break;
            }
        }
    })
}
