//! Sequenced dictionary loading and application.
//!
//! DESIGN
//! ======
//! Every [`Translator::load`] takes a fresh sequence token before it
//! suspends on the fetch. When the fetch completes, the result is only
//! applied if no newer load has started in the meantime, so rapid language
//! toggles always settle on the last request regardless of response order.
//!
//! ERROR HANDLING
//! ==============
//! Fetch and parse failures are logged and reported as
//! [`LoadOutcome::Failed`]; the previous dictionary and page text stay as
//! they were. Nothing is propagated to the caller as an error.

#[cfg(test)]
#[path = "translator_test.rs"]
mod translator_test;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use super::dictionary::{Dictionary, LoadError};
use super::template::{self, Content, Shape};
use crate::state::prefs::Language;

/// Where dictionaries come from.
pub trait DictionarySource {
    fn fetch(&self, language: Language) -> impl Future<Output = Result<Dictionary, LoadError>>;
}

/// A page element tagged with a lookup key.
pub trait TaggedElement {
    /// Current value of the lookup-key attribute.
    fn lookup_key(&self) -> Option<String>;
    /// Structure of the element before writing.
    fn shape(&self) -> Shape;
    fn write(&self, content: &Content);
}

/// The set of translatable elements on a page.
pub trait TranslationTarget {
    type Element: TaggedElement;

    /// Every element currently carrying a lookup key, in document order.
    fn tagged_elements(&self) -> Vec<Self::Element>;
}

/// Result of a [`Translator::load`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The dictionary replaced the current one and was applied.
    Applied { written: usize },
    /// A newer load started while this one was in flight; result dropped.
    Superseded,
    /// The dictionary could not be obtained; nothing changed.
    Failed,
}

/// Holds the active dictionary and the load sequence counter.
#[derive(Debug, Default)]
pub struct Translator {
    latest: Cell<u64>,
    current: RefCell<Option<Active>>,
}

#[derive(Debug)]
struct Active {
    language: Language,
    dictionary: Rc<Dictionary>,
}

impl Translator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Language of the dictionary currently applied, if any.
    pub fn language(&self) -> Option<Language> {
        self.current.borrow().as_ref().map(|a| a.language)
    }

    /// Snapshot of the dictionary currently applied, if any.
    pub fn dictionary(&self) -> Option<Rc<Dictionary>> {
        self.current.borrow().as_ref().map(|a| Rc::clone(&a.dictionary))
    }

    /// Fetch the dictionary for `language` and apply it to `target`.
    pub async fn load<S, T>(&self, language: Language, source: &S, target: &T) -> LoadOutcome
    where
        S: DictionarySource,
        T: TranslationTarget,
    {
        let token = self.latest.get() + 1;
        self.latest.set(token);
        log::debug!("loading {} dictionary (request {token})", language.code());

        let result = source.fetch(language).await;

        if self.latest.get() != token {
            log::debug!("dropping {} dictionary from superseded request {token}", language.code());
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(dictionary) => {
                *self.current.borrow_mut() = Some(Active { language, dictionary: Rc::new(dictionary) });
                let written = self.apply(target);
                log::info!("applied {} dictionary to {written} elements", language.code());
                LoadOutcome::Applied { written }
            }
            Err(e) => {
                log::error!("error loading {} translations: {e}", language.code());
                LoadOutcome::Failed
            }
        }
    }

    /// Write the current dictionary into every tagged element.
    ///
    /// Elements whose key does not resolve are left untouched. Returns the
    /// number of elements written.
    pub fn apply<T: TranslationTarget>(&self, target: &T) -> usize {
        let Some(dictionary) = self.dictionary() else {
            return 0;
        };

        let mut written = 0;
        for element in target.tagged_elements() {
            let Some(key) = element.lookup_key() else {
                continue;
            };
            let Some(value) = dictionary.lookup(&key) else {
                continue;
            };
            element.write(&template::render(&element.shape(), &value));
            written += 1;
        }
        written
    }
}
