//! Clipboard and search dispatch against recording test doubles.

mod common;
use common::*;

#[test]
fn copy_exact_query() {
    init_logger();
    let clipboard = RecordingClipboard::default();
    let mut assembler = QueryAssembler::default();

    assembler.copy_current_query(&clipboard).unwrap();
    assembler.add_fragment(FragmentKind::Exact, "a b");
    assembler.copy_current_query(&clipboard).unwrap();
    assembler.set_query_directly("  spaced  ");
    assembler.copy_current_query(&clipboard).unwrap();

    assert_eq!(*clipboard.writes.borrow(), ["", "\"a b\"", "  spaced  "]);
}

#[test]
fn copy_failure_is_reported() {
    init_logger();
    let clipboard = RecordingClipboard::denying();
    let mut assembler = QueryAssembler::default();
    assembler.add_fragment(FragmentKind::Keyword, "React");

    let result = assembler.copy_current_query(&clipboard);
    assert!(matches!(result, Err(ActionError::Clipboard(_))));
    assert_eq!(assembler.query(), "React");
    assert_eq!(assembler.fragments().len(), 1);
}

#[test]
fn search_opens_encoded_url() {
    init_logger();
    let navigator = RecordingNavigator::default();
    let mut assembler = QueryAssembler::default();
    assembler.add_fragment(FragmentKind::Keyword, "React");
    assembler.add_fragment(FragmentKind::Exclude, "Vue");

    assert_eq!(assembler.dispatch_search(&navigator), Ok(true));
    assert_eq!(
        *navigator.opened.borrow(),
        [(String::from("https://www.google.com/search?q=React%20-Vue"), String::from("_blank"))]
    );
}

#[test]
fn blank_query_does_not_navigate() {
    init_logger();
    let navigator = RecordingNavigator::default();
    let mut assembler = QueryAssembler::default();

    assert_eq!(assembler.dispatch_search(&navigator), Ok(false));
    assembler.set_query_directly(" \t  ");
    assert_eq!(assembler.dispatch_search(&navigator), Ok(false));
    assembler.apply_template("   ");
    assert_eq!(assembler.dispatch_search(&navigator), Ok(false));

    assert!(navigator.opened.borrow().is_empty());
}

#[test]
fn blocked_navigation() {
    init_logger();
    let navigator = RecordingNavigator::blocking();
    let mut assembler = QueryAssembler::default();
    assembler.apply_template("site:github.com");

    assert!(matches!(assembler.dispatch_search(&navigator), Err(ActionError::Navigation(_))));
    assert_eq!(assembler.query(), "site:github.com");
}

#[test]
fn custom_endpoint() {
    let config = BuilderConfig {
        search_endpoint: String::from("https://search.example/find"),
        ..Default::default()
    };
    let navigator = RecordingNavigator::default();
    let mut assembler = QueryAssembler::new(config);
    assembler.add_fragment(FragmentKind::Site, "github.com");

    assembler.dispatch_search(&navigator).unwrap();
    assert_eq!(navigator.opened.borrow()[0].0, "https://search.example/find?q=site%3Agithub.com");
}
