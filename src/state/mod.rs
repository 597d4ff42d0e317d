//! Client-side dashboard state.
//!
//! DESIGN
//! ======
//! State is split by panel (`orders`, `chat`) so each view depends on a
//! small focused model. Both are plain data with synchronous transitions;
//! the async plumbing lives in `crate::dashboard`.

pub mod chat;
pub mod orders;


/// Display text for a failure, or `fallback` when the failure renders empty.
pub(crate) fn message_or(err: &dyn std::fmt::Display, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}
