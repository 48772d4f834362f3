use super::*;

#[test]
fn default_is_idle_and_loading() {
    let state = FetchState::<Vec<u32>>::default();
    assert_eq!(state, FetchState::Idle);
    assert!(state.is_loading());
}

#[test]
fn loaded_is_not_loading() {
    let state = FetchState::Loaded(vec![1, 2]);
    assert!(!state.is_loading());
    assert_eq!(state.error(), None);
}

#[test]
fn failed_exposes_message() {
    let state = FetchState::<Vec<u32>>::Failed("boom".to_owned());
    assert_eq!(state.error(), Some("boom"));
    assert!(!state.is_loading());
}
