use super::*;

// Each test runs on its own thread, so the thread-local token cell starts
// absent for every case.

#[test]
fn get_starts_absent() {
    assert_eq!(get(), None);
}

#[test]
fn set_then_get_roundtrips() {
    set("abc");
    assert_eq!(get(), Some("abc".to_owned()));
}

#[test]
fn overwrite_replaces_token() {
    set("abc");
    set("def");
    assert_eq!(get(), Some("def".to_owned()));
}

#[test]
fn clear_then_get_is_absent() {
    set("abc");
    clear();
    assert_eq!(get(), None);
}

#[test]
fn clear_is_idempotent() {
    clear();
    clear();
    assert_eq!(get(), None);
}

#[test]
fn empty_token_is_rejected() {
    set("");
    assert_eq!(get(), None);
}

#[test]
fn empty_token_does_not_clobber_existing_session() {
    set("abc");
    set("");
    assert_eq!(get(), Some("abc".to_owned()));
}
