use super::*;

#[test]
fn push_assigns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.success("saved");
    let b = state.error("failed");
    assert_ne!(a, b);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.success("one");
    state.success("two");
    state.dismiss(&a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "two");
}

#[test]
fn overflow_drops_oldest() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.error(format!("e{i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "e2");
}
