use super::*;

#[test]
fn closed_by_default() {
    let state = ConfirmState::<String>::default();
    assert!(!state.is_open());
}

#[test]
fn confirm_releases_requested_action_once() {
    let mut state = ConfirmState::default();
    state.request("delete o1");
    assert!(state.is_open());
    assert_eq!(state.confirm(), Some("delete o1"));
    assert!(!state.is_open());
    assert_eq!(state.confirm(), None);
}

#[test]
fn cancel_yields_no_action() {
    let mut state = ConfirmState::default();
    state.request("delete u1");
    state.cancel();
    assert_eq!(state.confirm(), None);
}

#[test]
fn later_request_replaces_earlier() {
    let mut state = ConfirmState::default();
    state.request(1);
    state.request(2);
    assert_eq!(state.pending(), Some(&2));
}
