use super::*;

fn roles_and_text(state: &ChatState) -> Vec<(ChatRole, &str)> {
    state.messages.iter().map(|m| (m.role, m.text.as_str())).collect()
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_closed_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.input.is_empty());
    assert!(!state.loading);
    assert!(!state.open);
}

// =============================================================
// Submission gating
// =============================================================

#[test]
fn submit_without_selection_is_noop() {
    let mut state = ChatState::default();
    state.set_input("Where is my package?");
    assert!(state.begin_submit(None).is_none());
    assert!(state.messages.is_empty());
    assert_eq!(state.input, "Where is my package?");
    assert!(!state.loading);
}

#[test]
fn submit_blank_input_is_noop() {
    let mut state = ChatState::default();
    state.set_input("   \t ");
    assert!(state.begin_submit(Some("abc")).is_none());
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn submit_while_loading_is_noop() {
    let mut state = ChatState::default();
    state.set_input("first");
    state.begin_submit(Some("abc")).unwrap();
    state.set_input("second");
    assert!(state.begin_submit(Some("abc")).is_none());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn input_enabled_tracks_selection_and_loading() {
    let mut state = ChatState::default();
    assert!(!state.input_enabled(None));
    assert!(state.input_enabled(Some("abc")));
    state.loading = true;
    assert!(!state.input_enabled(Some("abc")));
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn submit_appends_user_message_and_trims() {
    let mut state = ChatState::default();
    state.set_input("  Where is my package?  ");
    let submission = state.begin_submit(Some("abc")).unwrap();

    assert_eq!(submission, ChatSubmission { order_id: "abc".into(), message: "Where is my package?".into() });
    assert_eq!(roles_and_text(&state), [(ChatRole::User, "Where is my package?")]);
    assert!(state.input.is_empty());
    assert!(state.loading);
}

#[test]
fn reply_appends_assistant_message_in_order() {
    let mut state = ChatState::default();
    state.set_input("Where is my package?");
    state.begin_submit(Some("abc")).unwrap();
    state.apply_reply(Ok("About 25 minutes out.".into()));

    assert_eq!(
        roles_and_text(&state),
        [(ChatRole::User, "Where is my package?"), (ChatRole::Assistant, "About 25 minutes out.")]
    );
    assert!(!state.loading);
}

#[test]
fn failure_appends_error_text_as_assistant() {
    let mut state = ChatState::default();
    state.set_input("hi");
    state.begin_submit(Some("abc")).unwrap();
    state.apply_reply(Err(ClientError::Transport {
        api: "Assistant",
        status: 502,
        reason: "Bad Gateway".into(),
    }));

    assert_eq!(
        roles_and_text(&state),
        [(ChatRole::User, "hi"), (ChatRole::Assistant, "Assistant API error: 502 Bad Gateway")]
    );
    assert!(!state.loading);
}

#[test]
fn blank_reply_commits_fallback_text() {
    let mut state = ChatState::default();
    for reply in ["", "  \n\t"] {
        state.set_input("hi");
        state.begin_submit(Some("abc")).unwrap();
        state.apply_reply(Ok(reply.to_owned()));

        let last = state.messages.last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.text, CHAT_ERROR_FALLBACK);
        assert!(!state.loading);
    }
    assert!(state.messages.iter().all(|m| !m.text.trim().is_empty()));
}

#[test]
fn message_ids_are_unique() {
    let mut state = ChatState::default();
    state.set_input("a");
    state.begin_submit(Some("abc")).unwrap();
    state.apply_reply(Ok("b".into()));
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

// =============================================================
// Panel open/closed
// =============================================================

#[test]
fn toggling_panel_keeps_history() {
    let mut state = ChatState::default();
    state.toggle_open();
    state.set_input("hi");
    state.begin_submit(Some("abc")).unwrap();
    state.apply_reply(Ok("hello".into()));

    state.toggle_open();
    assert!(!state.open);
    assert_eq!(state.messages.len(), 2);
    state.toggle_open();
    assert!(state.open);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn role_labels() {
    assert_eq!(ChatRole::User.label(), "user");
    assert_eq!(ChatRole::Assistant.label(), "assistant");
}
