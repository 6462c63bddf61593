//! Theme and language toggles.
//!
//! The controller owns the resolved [`UiPreferences`] and the
//! [`Translator`]. Storage, dictionary source and page are injected so the
//! same code drives the browser and the tests.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::Cell;

use crate::i18n::{DictionarySource, LoadOutcome, TranslationTarget, Translator};
use crate::state::prefs::{self, Language, PreferenceStore, Theme, UiPreferences};

/// Page-side indicators for the two preferences.
pub trait PreferenceView {
    /// Set the theme marker on the document root and the toggle icon.
    fn show_theme(&self, theme: Theme);
    /// Set the language button label to the language a click switches to.
    fn show_language(&self, language: Language);
}

pub struct Controller<S, D, P> {
    store: S,
    source: D,
    page: P,
    prefs: Cell<UiPreferences>,
    translator: Translator,
}

impl<S, D, P> Controller<S, D, P>
where
    S: PreferenceStore,
    D: DictionarySource,
    P: PreferenceView + TranslationTarget,
{
    /// Build a controller, reading persisted preferences once.
    pub fn new(store: S, source: D, page: P) -> Self {
        let prefs = UiPreferences::load(&store);
        Self { store, source, page, prefs: Cell::new(prefs), translator: Translator::new() }
    }

    pub fn preferences(&self) -> UiPreferences {
        self.prefs.get()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Reflect the startup preferences on the page and load the dictionary.
    pub async fn init(&self) -> LoadOutcome {
        let prefs = self.prefs.get();
        self.page.show_theme(prefs.theme);
        self.page.show_language(prefs.language);
        self.translator.load(prefs.language, &self.source, &self.page).await
    }

    /// Flip the theme, update the page and persist the new value.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.prefs.get().with_theme_toggled();
        self.prefs.set(next);
        self.page.show_theme(next.theme);
        prefs::persist_theme(&self.store, next.theme);
        next.theme
    }

    /// Flip the language, persist it, update the button and reload text.
    ///
    /// Preferences and label change before the fetch suspends, so a second
    /// toggle issued while this one is in flight flips from the new state.
    pub async fn toggle_language(&self) -> LoadOutcome {
        let next = self.prefs.get().with_language_toggled();
        self.prefs.set(next);
        prefs::persist_language(&self.store, next.language);
        self.page.show_language(next.language);
        self.translator.load(next.language, &self.source, &self.page).await
    }
}
