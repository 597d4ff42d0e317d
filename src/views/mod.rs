//! Pure renderers for the dashboard panels.
//!
//! Views take borrowed state and produce text. They hold no state of their
//! own; selection and panel visibility are passed in by the caller.

pub mod assistant_chat;
pub mod order_list;

/// Shown in place of any value the backend has not set or computed.
pub const PLACEHOLDER: &str = "—";
