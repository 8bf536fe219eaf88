use super::fixture::Fixture;
use crate::image_source::interface::ImageRef;
use crate::session::core::ModelLoadState;
use crate::user_input::interface::UserInputEvent;
use std::path::PathBuf;

#[test]
fn test_select_classify_and_close() {
    let f = Fixture::new(false);
    let handle = f.start();

    f.wait_for_view(|view| !view.loading);

    f.user_input
        .send(UserInputEvent::FilesPicked(vec![PathBuf::from("cat.jpg")]));
    let view = f.wait_for_view(|view| view.can_classify);
    let active_image = view.active_image.clone().unwrap();
    assert!(active_image.starts_with("blob:"));
    assert_eq!(view.history, vec![active_image.clone()]);

    f.user_input.send(UserInputEvent::ClassifyClicked);
    let view = f.wait_for_view(|view| !view.results.is_empty());
    assert_eq!(view.results[0].label, "cat");
    assert!(view.results[0].best_guess);

    f.user_input
        .send(UserInputEvent::UrlChanged("https://example.com/dog.png".to_string()));
    let view = f.wait_for_view(|view| view.history.len() == 2);
    assert!(view.results.is_empty());

    f.user_input.send(UserInputEvent::HistoryClicked(1));
    f.wait_for_view(|view| view.active_image.as_deref() == Some(active_image.as_str()));

    f.user_input.send(UserInputEvent::Closed);
    let session = handle.join().unwrap();

    assert!(session.closed);
    assert_eq!(session.active_image_ref, Some(ImageRef::new(active_image)));
    assert_eq!(session.history.len(), 2);
    assert!(session.results.is_empty());
    assert_eq!(f.model_provider.model.classify_calls(), 1);
    assert_eq!(f.user_input.url_input_clears(), 1);
    assert_eq!(f.image_source.live_references(), 0);
}

#[test]
fn test_failed_model_load_never_classifies() {
    let f = Fixture::new(true);
    let handle = f.start();

    let view = f.wait_for_view(|view| !view.loading);
    assert!(view.status.is_some());

    f.user_input
        .send(UserInputEvent::UrlChanged("https://example.com/dog.png".to_string()));
    let view = f.wait_for_view(|view| view.active_image.is_some());
    assert!(view.show_classify);
    assert!(!view.can_classify);

    f.user_input.send(UserInputEvent::ClassifyClicked);
    f.user_input.send(UserInputEvent::Closed);
    let session = handle.join().unwrap();

    assert!(matches!(session.model_load_state, ModelLoadState::Failed(_)));
    assert!(session.results.is_empty());
    assert_eq!(f.model_provider.model.classify_calls(), 0);
    assert_eq!(f.user_input.url_input_clears(), 0);
}

#[test]
fn test_empty_file_pick_clears_the_image() {
    let f = Fixture::new(false);
    let handle = f.start();

    f.wait_for_view(|view| !view.loading);
    f.user_input
        .send(UserInputEvent::FilesPicked(vec![PathBuf::from("cat.jpg")]));
    f.wait_for_view(|view| view.active_image.is_some());

    f.user_input.send(UserInputEvent::FilesPicked(vec![]));
    let view = f.wait_for_view(|view| view.active_image.is_none());
    assert_eq!(view.history.len(), 1);

    f.user_input.send(UserInputEvent::Closed);
    let session = handle.join().unwrap();

    assert_eq!(session.history.len(), 1);
    assert_eq!(f.image_source.live_references(), 0);
}
