//! In-memory fakes for the page, the dictionary source and slow fetches.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use serde_json::Value;

use crate::controller::PreferenceView;
use crate::i18n::{Content, Dictionary, DictionarySource, LoadError, Shape, TaggedElement, TranslationTarget};
use crate::state::prefs::{Language, Theme};

// =============================================================
// Page
// =============================================================

#[derive(Debug)]
pub struct FakeElement {
    pub key: Option<String>,
    pub shape: Shape,
    pub icon: Option<String>,
    pub text: RefCell<String>,
    pub last: RefCell<Option<Content>>,
}

impl FakeElement {
    pub fn new(key: &str, text: &str) -> Rc<Self> {
        Self::shaped(key, text, Shape::Plain, None)
    }

    pub fn icon_button(key: &str, icon: &str, text: &str) -> Rc<Self> {
        Self::shaped(key, text, Shape::IconButton, Some(icon))
    }

    pub fn shaped(key: &str, text: &str, shape: Shape, icon: Option<&str>) -> Rc<Self> {
        Rc::new(Self {
            key: Some(key.to_owned()),
            shape,
            icon: icon.map(str::to_owned),
            text: RefCell::new(text.to_owned()),
            last: RefCell::new(None),
        })
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TaggedElement for Rc<FakeElement> {
    fn lookup_key(&self) -> Option<String> {
        self.key.clone()
    }

    fn shape(&self) -> Shape {
        self.shape.clone()
    }

    fn write(&self, content: &Content) {
        *self.text.borrow_mut() = match (content, &self.icon) {
            (Content::IconLabel(_), Some(icon)) => format!("{icon}{}", content.text()),
            _ => content.text(),
        };
        *self.last.borrow_mut() = Some(content.clone());
    }
}

#[derive(Debug, Default)]
pub struct FakePage {
    pub elements: Vec<Rc<FakeElement>>,
    pub theme_marker: RefCell<Option<String>>,
    pub theme_icon: RefCell<String>,
    pub language_label: RefCell<String>,
}

impl FakePage {
    pub fn with_elements(elements: Vec<Rc<FakeElement>>) -> Self {
        Self { elements, ..Self::default() }
    }
}

impl TranslationTarget for FakePage {
    type Element = Rc<FakeElement>;

    fn tagged_elements(&self) -> Vec<Self::Element> {
        self.elements.clone()
    }
}

impl PreferenceView for FakePage {
    fn show_theme(&self, theme: Theme) {
        *self.theme_marker.borrow_mut() = match theme {
            Theme::Dark => Some("dark".to_owned()),
            Theme::Light => None,
        };
        *self.theme_icon.borrow_mut() = theme.icon_class().to_owned();
    }

    fn show_language(&self, language: Language) {
        *self.language_label.borrow_mut() = language.toggle_label();
    }
}

// =============================================================
// Dictionary source
// =============================================================

/// Serves fixed JSON per language, optionally after a number of yields.
#[derive(Debug, Default)]
pub struct StaticSource {
    entries: HashMap<Language, Value>,
    delays: HashMap<Language, u32>,
    pub fetches: Cell<usize>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, language: Language, value: Value) -> Self {
        self.entries.insert(language, value);
        self
    }

    /// Make fetches for `language` stay pending for `polls` extra polls.
    pub fn slow(mut self, language: Language, polls: u32) -> Self {
        self.delays.insert(language, polls);
        self
    }
}

impl DictionarySource for StaticSource {
    fn fetch(&self, language: Language) -> impl Future<Output = Result<Dictionary, LoadError>> {
        self.fetches.set(self.fetches.get() + 1);
        let entry = self.entries.get(&language).cloned();
        let delay = self.delays.get(&language).copied().unwrap_or(0);
        async move {
            YieldNow(delay).await;
            match entry {
                Some(value) => Dictionary::from_value(value),
                None => Err(LoadError::Status { status: 404 }),
            }
        }
    }
}

/// Returns `Pending` a fixed number of times, waking itself each time.
pub struct YieldNow(pub u32);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            Poll::Ready(())
        } else {
            self.0 -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
