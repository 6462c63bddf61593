//! The résumé page as seen by the controller.
//!
//! Binds the fixed DOM contract: `data-i18n` keyed elements, the
//! `data-theme` marker on `<body>`, the `.theme-toggle` icon and the
//! `.language-toggle` button.

use web_sys::{Document, Element, HtmlElement};

use super::{DomError, query_all};
use crate::controller::PreferenceView;
use crate::i18n::{Content, KEY_ATTRIBUTE, Shape, TaggedElement, TranslationTarget};
use crate::state::prefs::{Language, Theme};

pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const THEME_ICON_SELECTOR: &str = ".theme-toggle i";
pub const LANGUAGE_TOGGLE_SELECTOR: &str = ".language-toggle";
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub struct BrowserPage {
    document: Document,
    body: Option<HtmlElement>,
    theme_icon: Option<Element>,
    language_button: Option<Element>,
}

impl BrowserPage {
    /// Look up the toggle indicators once.
    ///
    /// A missing element is logged here and the matching indicator becomes a
    /// no-op for the rest of the page's life.
    pub fn bind(document: Document) -> Self {
        let body = document.body();
        if body.is_none() {
            log::error!("{}", DomError::MissingElement("body".into()));
        }
        let theme_icon = required(&document, THEME_ICON_SELECTOR);
        let language_button = required(&document, LANGUAGE_TOGGLE_SELECTOR);
        Self { document, body, theme_icon, language_button }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn required(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(Some(el)) => Some(el),
        Ok(None) => {
            log::error!("{}", DomError::MissingElement(selector.to_owned()));
            None
        }
        Err(e) => {
            log::error!("{}", DomError::from(e));
            None
        }
    }
}

impl PreferenceView for BrowserPage {
    fn show_theme(&self, theme: Theme) {
        if let Some(body) = &self.body {
            let result = match theme {
                Theme::Dark => body.set_attribute(THEME_ATTRIBUTE, theme.as_str()),
                Theme::Light => body.remove_attribute(THEME_ATTRIBUTE),
            };
            if let Err(e) = result {
                log::warn!("failed to set theme marker: {}", DomError::from(e));
            }
        }
        if let Some(icon) = &self.theme_icon {
            icon.set_class_name(theme.icon_class());
        }
    }

    fn show_language(&self, language: Language) {
        if let Some(button) = &self.language_button {
            button.set_text_content(Some(&language.toggle_label()));
        }
    }
}

impl TranslationTarget for BrowserPage {
    type Element = BrowserElement;

    fn tagged_elements(&self) -> Vec<BrowserElement> {
        match query_all(&self.document, &format!("[{KEY_ATTRIBUTE}]")) {
            Ok(elements) => elements.into_iter().map(BrowserElement).collect(),
            Err(e) => {
                log::error!("failed to collect translatable elements: {e}");
                Vec::new()
            }
        }
    }
}

/// A `data-i18n` element.
pub struct BrowserElement(Element);

impl BrowserElement {
    fn child(&self, selector: &str) -> Option<Element> {
        self.0.query_selector(selector).ok().flatten()
    }

    fn write_nodes(&self, content: &Content) -> Result<(), DomError> {
        let el = &self.0;
        match content {
            Content::IconLabel(label) => {
                let icon = self.child("i");
                el.set_text_content(None);
                if let Some(icon) = icon {
                    el.append_child(&icon)?;
                }
                el.append_with_str_1(&format!(" {label}"))?;
            }
            Content::Emphasized { before, emphasis, after } => {
                let document = el.owner_document().ok_or(DomError::NoDocument)?;
                let strong = document.create_element("strong")?;
                strong.set_text_content(Some(emphasis));
                el.set_text_content(None);
                el.append_with_str_1(before)?;
                el.append_child(&strong)?;
                el.append_with_str_1(after)?;
            }
            Content::Text(text) => el.set_text_content(Some(text)),
        }
        Ok(())
    }
}

impl TaggedElement for BrowserElement {
    fn lookup_key(&self) -> Option<String> {
        self.0.get_attribute(KEY_ATTRIBUTE)
    }

    fn shape(&self) -> Shape {
        if self.0.tag_name().eq_ignore_ascii_case("button") && self.child("i").is_some() {
            return Shape::IconButton;
        }
        match self.child("strong") {
            Some(strong) => Shape::Emphasis { text: strong.text_content().unwrap_or_default() },
            None => Shape::Plain,
        }
    }

    fn write(&self, content: &Content) {
        if let Err(e) = self.write_nodes(content) {
            let key = self.lookup_key().unwrap_or_default();
            log::warn!("failed to write translation for {key}: {e}");
        }
    }
}
