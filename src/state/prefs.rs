#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";
/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Color scheme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything but `"dark"` reads as light.
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Font Awesome class for the theme toggle icon. The icon shows the
    /// scheme the button switches to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Display language of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// Language code, also the dictionary file stem.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }

    /// Label for the language button: the code of the language a click
    /// would switch to, upper-cased.
    pub fn toggle_label(self) -> String {
        self.toggled().code().to_ascii_uppercase()
    }
}

/// Both user preferences, resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPreferences {
    pub theme: Theme,
    pub language: Language,
}

impl UiPreferences {
    #[must_use]
    pub fn with_theme_toggled(self) -> Self {
        Self { theme: self.theme.toggled(), ..self }
    }

    #[must_use]
    pub fn with_language_toggled(self) -> Self {
        Self { language: self.language.toggled(), ..self }
    }

    /// Resolve preferences from storage, falling back to defaults for absent
    /// or unrecognized values.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let theme = store.get(THEME_KEY).map_or_else(Theme::default, |raw| Theme::from_stored(&raw));
        let language = match store.get(LANGUAGE_KEY) {
            Some(raw) => Language::from_code(&raw).unwrap_or_else(|| {
                log::warn!("ignoring stored language {raw:?}");
                Language::default()
            }),
            None => Language::default(),
        };
        Self { theme, language }
    }
}

/// Persisted string key/value storage.
///
/// Implemented over `window.localStorage` in the browser and over a map in
/// tests. Writes are best-effort; storage being unavailable is not an error
/// the page can act on.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub fn persist_theme(store: &impl PreferenceStore, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

pub fn persist_language(store: &impl PreferenceStore, language: Language) {
    store.set(LANGUAGE_KEY, language.code());
}

/// In-memory store for tests and for pages where `localStorage` is blocked.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
