use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = NotifyState::default();
    let a = state.error("first");
    let b = state.success("second");
    assert!(b > a);
    assert_eq!(state.notices.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NotifyState::default();
    let a = state.error("first");
    let b = state.warning("second");
    state.dismiss(a);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].id, b);
    // Unknown ids are ignored.
    state.dismiss(999);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn cap_evicts_oldest_notice() {
    let mut state = NotifyState::default();
    for i in 0..NOTICE_CAP + 2 {
        state.push(NoticeKind::Info, format!("notice {i}"));
    }
    assert_eq!(state.notices.len(), NOTICE_CAP);
    assert_eq!(state.notices[0].text, "notice 2");
}

#[test]
fn kinds_distinguish_partial_from_full_failure() {
    let mut state = NotifyState::default();
    state.warning("Deleted 2 of 5 records (3 not found)");
    state.error("bulk delete request failed: 500");
    assert_eq!(state.notices[0].kind, NoticeKind::Warning);
    assert_eq!(state.notices[1].kind, NoticeKind::Error);
}
