use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::test_support::{FakeElement, FakePage, StaticSource};

fn english() -> serde_json::Value {
    json!({
        "a": {"b": "Hello"},
        "buttons": {"download": "Download"},
        "summary": {"title": "Summary"}
    })
}

fn spanish() -> serde_json::Value {
    json!({
        "a": {"b": "Hola"},
        "buttons": {"download": "Descargar"},
        "summary": {"title": "Resumen"}
    })
}

// =============================================================
// load + apply
// =============================================================

#[test]
fn load_writes_resolved_values_and_skips_missing_keys() {
    let hit = FakeElement::new("a.b", "placeholder");
    let miss = FakeElement::new("a.c", "untouched");
    let page = FakePage::with_elements(vec![hit.clone(), miss.clone()]);
    let source = StaticSource::new().with(Language::En, english());
    let translator = Translator::new();

    let outcome = block_on(translator.load(Language::En, &source, &page));

    assert_eq!(outcome, LoadOutcome::Applied { written: 1 });
    assert_eq!(hit.text(), "Hello");
    assert_eq!(miss.text(), "untouched");
    assert!(miss.last.borrow().is_none());
    assert_eq!(translator.language(), Some(Language::En));
}

#[test]
fn duplicate_keys_update_independently() {
    let first = FakeElement::new("summary.title", "x");
    let second = FakeElement::new("summary.title", "y");
    let page = FakePage::with_elements(vec![first.clone(), second.clone()]);
    let source = StaticSource::new().with(Language::Es, spanish());
    let translator = Translator::new();

    block_on(translator.load(Language::Es, &source, &page));

    assert_eq!(first.text(), "Resumen");
    assert_eq!(second.text(), "Resumen");
}

#[test]
fn icon_button_keeps_icon_and_sets_trailing_text() {
    let button = FakeElement::icon_button("buttons.download", "<i class=\"fas fa-download\"></i>", " Get CV");
    let page = FakePage::with_elements(vec![button.clone()]);
    let source = StaticSource::new().with(Language::En, english());
    let translator = Translator::new();

    block_on(translator.load(Language::En, &source, &page));

    assert_eq!(*button.last.borrow(), Some(Content::IconLabel("Download".to_owned())));
    assert_eq!(button.text(), "<i class=\"fas fa-download\"></i> Download");
}

#[test]
fn failed_load_keeps_previous_dictionary_and_text() {
    let el = FakeElement::new("a.b", "start");
    let page = FakePage::with_elements(vec![el.clone()]);
    let source = StaticSource::new().with(Language::En, english());
    let translator = Translator::new();

    block_on(translator.load(Language::En, &source, &page));
    let outcome = block_on(translator.load(Language::Es, &source, &page));

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(el.text(), "Hello");
    assert_eq!(translator.language(), Some(Language::En));
}

#[test]
fn new_dictionary_replaces_old_without_merging() {
    let el = FakeElement::new("only.english", "seed");
    let page = FakePage::with_elements(vec![el.clone()]);
    let source = StaticSource::new()
        .with(Language::En, json!({"only": {"english": "Yes"}}))
        .with(Language::Es, spanish());
    let translator = Translator::new();

    block_on(translator.load(Language::En, &source, &page));
    block_on(translator.load(Language::Es, &source, &page));

    let dictionary = translator.dictionary().unwrap();
    assert_eq!(dictionary.lookup("only.english"), None);
    assert_eq!(el.text(), "Yes");
}

#[test]
fn apply_without_dictionary_is_noop() {
    let el = FakeElement::new("a.b", "seed");
    let page = FakePage::with_elements(vec![el.clone()]);
    assert_eq!(Translator::new().apply(&page), 0);
    assert_eq!(el.text(), "seed");
}

// =============================================================
// sequencing
// =============================================================

#[test]
fn stale_response_is_discarded() {
    let el = FakeElement::new("a.b", "seed");
    let page = FakePage::with_elements(vec![el.clone()]);
    let source = StaticSource::new()
        .with(Language::En, english())
        .with(Language::Es, spanish())
        .slow(Language::Es, 3);
    let translator = Translator::new();

    let (older, newer) = block_on(async {
        futures::join!(
            translator.load(Language::Es, &source, &page),
            translator.load(Language::En, &source, &page)
        )
    });

    assert_eq!(older, LoadOutcome::Superseded);
    assert_eq!(newer, LoadOutcome::Applied { written: 1 });
    assert_eq!(translator.language(), Some(Language::En));
    assert_eq!(el.text(), "Hello");
}

#[test]
fn in_order_responses_settle_on_last_request() {
    let el = FakeElement::new("a.b", "seed");
    let page = FakePage::with_elements(vec![el.clone()]);
    let source = StaticSource::new()
        .with(Language::En, english())
        .with(Language::Es, spanish())
        .slow(Language::Es, 2);
    let translator = Translator::new();

    block_on(async {
        futures::join!(
            translator.load(Language::En, &source, &page),
            translator.load(Language::Es, &source, &page)
        )
    });

    assert_eq!(translator.language(), Some(Language::Es));
    assert_eq!(el.text(), "Hola");
    assert_eq!(source.fetches.get(), 2);
}

#[test]
fn superseded_failure_is_not_reported_as_failure() {
    let page = FakePage::default();
    let source = StaticSource::new().with(Language::En, english()).slow(Language::Es, 1);
    let translator = Translator::new();

    let (older, _) = block_on(async {
        futures::join!(
            translator.load(Language::Es, &source, &page),
            translator.load(Language::En, &source, &page)
        )
    });

    assert_eq!(older, LoadOutcome::Superseded);
}
