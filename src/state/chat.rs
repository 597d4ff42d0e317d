#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ClientError;

/// Log text used when an assistant failure carries no message.
pub const CHAT_ERROR_FALLBACK: &str = "Failed to get a response.";

/// State for the logistics assistant panel.
///
/// Messages live only for the lifetime of the process. Closing the panel
/// hides the log without clearing it.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
    pub open: bool,
}

/// Who authored a chat line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single committed chat line. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    fn new(role: ChatRole, text: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, text }
    }
}

/// A question ready to send to the assistant backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSubmission {
    pub order_id: String,
    pub message: String,
}

impl ChatState {
    /// Input is disabled with no selection or while a reply is pending.
    #[must_use]
    pub fn input_enabled(&self, selected: Option<&str>) -> bool {
        selected.is_some() && !self.loading
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Commit the current input as a user message and hand back the request
    /// to send. Returns `None` (and changes nothing) when the trimmed input
    /// is empty, no order is selected, or a reply is still pending.
    pub fn begin_submit(&mut self, selected: Option<&str>) -> Option<ChatSubmission> {
        let order_id = selected.filter(|_| !self.loading)?;
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let submission = ChatSubmission { order_id: order_id.to_owned(), message: trimmed.to_owned() };
        self.messages.push(ChatMessage::new(ChatRole::User, submission.message.clone()));
        self.input.clear();
        self.loading = true;
        Some(submission)
    }

    /// Append the assistant's reply, or the failure text in its place.
    /// A blank reply is committed as the fallback text so no message is empty.
    pub fn apply_reply(&mut self, result: Result<String, ClientError>) {
        let text = match result {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => CHAT_ERROR_FALLBACK.to_owned(),
            Err(err) => super::message_or(&err, CHAT_ERROR_FALLBACK),
        };
        self.messages.push(ChatMessage::new(ChatRole::Assistant, text));
        self.loading = false;
    }
}
