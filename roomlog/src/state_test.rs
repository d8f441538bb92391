use super::*;

fn log_of(lines: &[(&str, &str)]) -> String {
    lines
        .iter()
        .map(|(user, text)| format!("[2024-01-01 10:00] {user}: {text}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn joined() -> ChatState {
    let mut state = ChatState::default();
    state.join("lobby", "ann").expect("join should succeed");
    state
}

fn apply(state: &mut ChatState, body: &str) -> RenderOutcome {
    let fetch = state.begin_fetch().expect("joined state issues fetch tickets");
    state.apply_log(&fetch, body)
}

fn ids(state: &ChatState) -> Vec<u64> {
    state.messages().iter().map(|m| m.id).collect()
}

fn contents(state: &ChatState) -> Vec<String> {
    state.messages().iter().map(|m| m.line.content.clone()).collect()
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = ChatState::default();
    assert!(!state.is_joined());
    assert!(state.ticket().is_none());
    assert!(state.shows_placeholder());
    assert_eq!(state.room_info(), ROOM_INFO_IDLE);
}

#[test]
fn join_trims_and_stores_session() {
    let mut state = ChatState::default();
    let ticket = state.join("  lobby ", " ann ").expect("join should succeed");
    assert_eq!(ticket.room, "lobby");
    assert_eq!(ticket.username, "ann");
    assert_eq!(state.room_info(), "Room: lobby | User: ann");
    assert!(state.is_current(&ticket));
}

#[test]
fn join_rejects_blank_fields() {
    let mut state = ChatState::default();
    assert_eq!(state.join("   ", "ann"), Err(ChatError::Validation(MSG_JOIN_FIELDS_REQUIRED)));
    assert_eq!(state.join("lobby", ""), Err(ChatError::Validation(MSG_JOIN_FIELDS_REQUIRED)));
    assert!(!state.is_joined());
}

#[test]
fn begin_fetch_requires_session() {
    let mut state = ChatState::default();
    assert!(state.begin_fetch().is_none());
}

#[test]
fn leave_then_join_other_room_starts_clean() {
    let mut state = joined();
    apply(&mut state, &log_of(&[("ann", "hi"), ("bob", "yo")]));
    assert_eq!(state.cached_len(), 2);
    assert_eq!(state.last_count(), 2);

    state.leave();
    assert!(!state.is_joined());
    assert!(state.messages().is_empty());
    assert!(state.shows_placeholder());
    assert_eq!(state.room_info(), ROOM_INFO_IDLE);

    state.join("garden", "ann").expect("join should succeed");
    assert_eq!(state.cached_len(), 0);
    assert_eq!(state.last_count(), 0);
    assert_eq!(state.fingerprint(), "");
}

// =============================================================
// Reconcile gating
// =============================================================

#[test]
fn empty_body_clears_everything() {
    let mut state = joined();
    apply(&mut state, &log_of(&[("ann", "hi")]));

    assert_eq!(apply(&mut state, "  \n "), RenderOutcome::Cleared);
    assert!(state.messages().is_empty());
    assert!(state.shows_placeholder());
    assert_eq!(state.cached_len(), 0);
    assert_eq!(state.last_count(), 0);
    assert_eq!(state.fingerprint(), "");
}

#[test]
fn first_snapshot_replaces_and_records_baseline() {
    let mut state = joined();
    let outcome = apply(&mut state, &log_of(&[("ann", "hi"), ("bob", "yo")]));
    assert_eq!(outcome, RenderOutcome::Replaced(2));
    assert!(!state.shows_placeholder());
    assert_eq!(state.last_count(), 2);
    assert_eq!(state.fingerprint(), "ann|bob");
    assert_eq!(state.scroll_seq(), 1);
}

#[test]
fn identical_snapshot_does_no_work() {
    let mut state = joined();
    let body = log_of(&[("ann", "hi"), ("bob", "yo")]);
    apply(&mut state, &body);
    let before = ids(&state);

    assert_eq!(apply(&mut state, &body), RenderOutcome::Unchanged);
    assert_eq!(ids(&state), before);
    assert_eq!(state.scroll_seq(), 1);
}

#[test]
fn strict_append_renders_only_the_tail() {
    let mut state = joined();
    apply(&mut state, &log_of(&[("ann", "one"), ("bob", "two")]));
    let prefix = ids(&state);

    let outcome = apply(&mut state, &log_of(&[("ann", "one"), ("bob", "two"), ("ann", "three"), ("bob", "four")]));
    assert_eq!(outcome, RenderOutcome::Appended(2));
    assert_eq!(&ids(&state)[..2], prefix.as_slice());
    assert_eq!(contents(&state), vec!["one", "two", "three", "four"]);
    assert_eq!(state.cached_len(), 4);
    assert_eq!(state.scroll_seq(), 2);
}

#[test]
fn shrinking_log_triggers_full_replace_of_parseable_subset() {
    let mut state = joined();
    apply(&mut state, &log_of(&[("ann", "one"), ("bob", "two"), ("ann", "three"), ("bob", "four")]));
    let old = ids(&state);

    let body = "[2024-01-01 10:00] ann: one\nnot a message\n[2024-01-01 10:00] bob: two\n";
    let outcome = apply(&mut state, body);
    assert_eq!(outcome, RenderOutcome::Replaced(2));
    assert_eq!(contents(&state), vec!["one", "two"]);
    assert!(ids(&state).iter().all(|id| !old.contains(id)));
    assert_eq!(state.last_count(), 3);
    assert_eq!(state.cached_len(), 2);
}

#[test]
fn unparseable_lines_are_dropped_in_order() {
    let mut state = joined();
    let body = "[d t] ann: a\ngarbage\n[d t] bob: b\n[d t] nocolon\n[d t] ann: c";
    assert_eq!(apply(&mut state, body), RenderOutcome::Replaced(3));
    assert_eq!(contents(&state), vec!["a", "b", "c"]);
    assert_eq!(state.messages()[1].source, "[d t] bob: b");
}

#[test]
fn author_set_change_forces_replace_at_same_count() {
    let mut state = joined();
    apply(&mut state, &log_of(&[("ann", "hi"), ("bob", "yo")]));
    let old = ids(&state);

    let outcome = apply(&mut state, &log_of(&[("ann", "hi"), ("robert", "yo")]));
    assert_eq!(outcome, RenderOutcome::Replaced(2));
    assert!(ids(&state).iter().all(|id| !old.contains(id)));
    assert_eq!(state.messages()[1].line.username, "robert");
    assert_eq!(state.fingerprint(), "ann|robert");
}

#[test]
fn reordered_authors_do_not_force_refresh() {
    let mut state = joined();
    apply(&mut state, &log_of(&[("ann", "hi"), ("bob", "yo")]));
    assert_eq!(apply(&mut state, &log_of(&[("bob", "yo"), ("ann", "hi")])), RenderOutcome::Unchanged);
}

#[test]
fn equal_length_with_new_line_count_leaves_view_alone() {
    let mut state = joined();
    // Two lines, one unparseable: one message cached, count 2.
    apply(&mut state, "[d t] ann: a\ngarbage");
    let before = ids(&state);

    // Three lines, still one parseable message by the same author.
    let outcome = apply(&mut state, "[d t] ann: a\ngarbage\nmore garbage");
    assert_eq!(outcome, RenderOutcome::Unchanged);
    assert_eq!(ids(&state), before);
    assert_eq!(state.last_count(), 3);
}

#[test]
fn rendered_html_is_escaped() {
    let mut state = joined();
    apply(&mut state, "[d t] mallory: <img src=x onerror=alert(1)>");
    let html = &state.messages()[0].html;
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img"));
}

// =============================================================
// Invalidation and stale completions
// =============================================================

#[test]
fn rename_updates_session_and_forces_replace() {
    let mut state = joined();
    let body = log_of(&[("ann", "hi")]);
    apply(&mut state, &body);
    let ticket = state.ticket().expect("joined");

    assert!(state.apply_rename(&ticket, "anna"));
    assert_eq!(state.session().username, "anna");
    assert_eq!(state.room_info(), "Room: lobby | User: anna");
    assert_eq!(state.cached_len(), 0);
    assert_eq!(state.last_count(), 0);
    // Displayed list stays until the next reconcile rebuilds it.
    assert_eq!(state.messages().len(), 1);

    assert_eq!(apply(&mut state, &log_of(&[("anna", "hi")])), RenderOutcome::Replaced(1));
}

#[test]
fn invalidate_then_same_snapshot_replaces() {
    let mut state = joined();
    let body = log_of(&[("ann", "hi"), ("bob", "yo")]);
    apply(&mut state, &body);
    state.invalidate();
    assert_eq!(apply(&mut state, &body), RenderOutcome::Replaced(2));
}

#[test]
fn completion_from_previous_session_is_discarded() {
    let mut state = joined();
    let old_fetch = state.begin_fetch().expect("joined");
    state.leave();
    state.join("garden", "ann").expect("join should succeed");

    assert_eq!(state.apply_log(&old_fetch, &log_of(&[("ann", "old room")])), RenderOutcome::Stale);
    assert!(state.messages().is_empty());
    assert!(!state.apply_rename(&old_fetch.session, "ghost"));
    assert_eq!(state.session().username, "ann");
}

#[test]
fn older_fetch_resolving_late_is_discarded() {
    let mut state = joined();
    let first = state.begin_fetch().expect("joined");
    let second = state.begin_fetch().expect("joined");

    let newer = log_of(&[("ann", "one"), ("bob", "two")]);
    assert_eq!(state.apply_log(&second, &newer), RenderOutcome::Replaced(2));
    assert_eq!(state.apply_log(&first, &log_of(&[("ann", "one")])), RenderOutcome::Stale);
    assert_eq!(state.messages().len(), 2);
}

#[test]
fn changed_view_covers_visible_outcomes() {
    assert!(RenderOutcome::Cleared.changed_view());
    assert!(RenderOutcome::Appended(1).changed_view());
    assert!(RenderOutcome::Replaced(0).changed_view());
    assert!(!RenderOutcome::Unchanged.changed_view());
    assert!(!RenderOutcome::Stale.changed_view());
}
