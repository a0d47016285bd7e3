mod common;

use common::RecordingNavigator;
use sdui::action::{ActionResolver, NavigationOutcome};
use sdui::decode::decode;
use sdui::model::Action;
use sdui::render::interactive_targets;

fn action(url: &str) -> Action {
    Action {
        kind: "navigate".to_string(),
        url: url.to_string(),
    }
}

#[test]
fn absent_action_is_a_no_op() {
    let resolver = ActionResolver::new(RecordingNavigator::default());
    resolver.resolve_and_navigate(None);

    assert!(resolver.navigator().visited().is_empty());
    assert!(resolver.history().is_empty());
    assert!(resolver.last_attempt().is_none());
}

#[test]
fn present_action_forwards_url_and_records_attempt() {
    let resolver = ActionResolver::new(RecordingNavigator::default());
    resolver.resolve_and_navigate(Some(&action("https://example.com/orders")));

    assert_eq!(
        resolver.navigator().visited(),
        vec!["https://example.com/orders".to_string()]
    );
    let attempt = resolver.last_attempt().unwrap();
    assert_eq!(attempt.kind, "navigate");
    assert_eq!(attempt.url, "https://example.com/orders");
    assert_eq!(attempt.outcome, NavigationOutcome::Dispatched);
}

#[test]
fn action_type_does_not_change_behaviour() {
    let resolver = ActionResolver::new(RecordingNavigator::default());
    resolver.resolve_and_navigate(Some(&Action {
        kind: "deeplink".to_string(),
        url: "app:profile".to_string(),
    }));
    assert_eq!(resolver.navigator().visited(), vec!["app:profile".to_string()]);
}

#[test]
fn navigation_failure_does_not_propagate() {
    let resolver = ActionResolver::new(RecordingNavigator::refusing());
    resolver.resolve_and_navigate(Some(&action("https://example.com/a")));
    resolver.resolve_and_navigate(Some(&action("https://example.com/b")));

    let history = resolver.history();
    assert_eq!(history.len(), 2);
    assert!(history
        .iter()
        .all(|attempt| matches!(attempt.outcome, NavigationOutcome::Failed(_))));
}

#[test]
fn every_interactive_leaf_can_be_activated() {
    let screen = decode(&common::mixed_document()).unwrap();
    let resolver = ActionResolver::new(RecordingNavigator::default());

    for target in interactive_targets(&screen) {
        resolver.resolve_and_navigate(Some(target));
    }

    assert_eq!(
        resolver.navigator().visited(),
        vec![
            "https://example.com/sale".to_string(),
            "https://example.com/news".to_string(),
            "https://example.com/orders".to_string(),
        ]
    );
}
