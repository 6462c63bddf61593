//! Runtime localization.
//!
//! A [`dictionary::Dictionary`] is fetched per language and swapped
//! wholesale. [`translator::Translator`] owns the current dictionary and
//! writes values into tagged page elements, shaping each write with
//! [`template::Content`] so icon and emphasis decorations survive.

pub mod dictionary;
pub mod template;
pub mod translator;

pub use dictionary::{Dictionary, LoadError};
pub use template::{Content, Shape};
pub use translator::{DictionarySource, LoadOutcome, TaggedElement, TranslationTarget, Translator};

/// Attribute carrying an element's lookup key.
pub const KEY_ATTRIBUTE: &str = "data-i18n";
