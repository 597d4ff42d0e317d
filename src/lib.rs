//! # order-dashboard
//!
//! Polling dashboard for the order-tracking backend, with a per-order
//! logistics assistant chat.
//!
//! The crate holds the HTTP clients (`net`), the pure panel state
//! (`state`), text renderers (`views`), the event-driven controller that
//! owns the fetch/poll lifecycle (`dashboard`), and the console command
//! layer used by the binary (`console`).

pub mod config;
pub mod console;
pub mod dashboard;
pub mod net;
pub mod state;
pub mod views;
