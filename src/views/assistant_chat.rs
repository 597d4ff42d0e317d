//! Logistics assistant panel renderer.

use std::fmt::Write as _;

use crate::state::chat::{ChatRole, ChatState};

#[cfg(test)]
#[path = "assistant_chat_test.rs"]
mod assistant_chat_test;

pub const TITLE: &str = "Logistics Assistant";
pub const EMPTY_TEXT: &str = "No messages yet. Say hello.";
pub const THINKING_TEXT: &str = "Assistant is thinking…";
pub const NO_SELECTION_TEXT: &str = "Select an order to ask about it.";

/// Render the chat panel. A closed panel collapses to its toggle line.
#[must_use]
pub fn render(chat: &ChatState, selected: Option<&str>) -> String {
    if !chat.open {
        return format!("[+] {TITLE} (closed)");
    }

    let mut out = String::new();
    let _ = writeln!(out, "[-] {TITLE}");
    match selected {
        Some(id) => {
            let _ = writeln!(out, "    order: {id}");
        }
        None => {
            let _ = writeln!(out, "    {NO_SELECTION_TEXT}");
        }
    }

    if chat.messages.is_empty() && !chat.loading {
        let _ = writeln!(out, "    {EMPTY_TEXT}");
    }
    for msg in &chat.messages {
        let prefix = match msg.role {
            ChatRole::User => "you",
            ChatRole::Assistant => "assistant",
        };
        let _ = writeln!(out, "    {prefix:>9}: {}", msg.text);
    }
    if chat.loading {
        let _ = writeln!(out, "    {THINKING_TEXT}");
    }

    if chat.input_enabled(selected) {
        let _ = write!(out, "    > {}", chat.input);
    } else {
        let _ = write!(out, "    > (input disabled)");
    }
    out
}
