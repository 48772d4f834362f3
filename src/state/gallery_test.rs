use super::*;

fn image(id: &str, title: &str) -> Image {
    Image {
        id: id.to_owned(),
        title: title.to_owned(),
        url: format!("https://cdn.example/{id}.png"),
        created_at: String::new(),
        storage_id: String::new(),
    }
}

#[test]
fn prepend_puts_newest_first() {
    let mut state = GalleryState::default();
    state.loaded(vec![image("1", "old")]);
    state.prepend(image("2", "new"));

    let FetchState::Loaded(images) = &state.list else {
        panic!("expected loaded list");
    };
    assert_eq!(images[0].id, "2");
    assert_eq!(images[1].id, "1");
}

#[test]
fn prepend_before_first_load_creates_list() {
    let mut state = GalleryState::default();
    state.prepend(image("7", "only"));

    let FetchState::Loaded(images) = &state.list else {
        panic!("expected loaded list");
    };
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].id, "7");
}

#[test]
fn remove_drops_only_the_matching_id() {
    let mut state = GalleryState::default();
    state.loaded(vec![image("1", "a"), image("2", "b"), image("3", "c")]);
    state.remove("2");

    let FetchState::Loaded(images) = &state.list else {
        panic!("expected loaded list");
    };
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].id, "1");
    assert_eq!(images[1].id, "3");
}

#[test]
fn remove_outside_loaded_is_a_noop() {
    let mut state = GalleryState::default();
    state.remove("1");
    assert_eq!(state.list, FetchState::Idle);
}
