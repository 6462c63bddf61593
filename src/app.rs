//! Startup wiring for the browser.
//!
//! Runs once when the WASM module is instantiated: logging, configuration,
//! the preference controller, click handlers, the `window` functions
//! inline `onclick` attributes call, and effects. Every step that
//! can fail logs and lets the rest of the page come up.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{CONFIG_ELEMENT_ID, ConfigError, DownloadConfig, SiteConfig};
use crate::controller::Controller;
use crate::dom::download::{button_from, download};
use crate::dom::effects::{attach_hover, attach_scroll_reveal};
use crate::dom::page::{BrowserPage, LANGUAGE_TOGGLE_SELECTOR, THEME_TOGGLE_SELECTOR};
use crate::dom::storage::LocalStore;
use crate::dom::{self, DomError, listen, query_all};
use crate::net::locales::HttpDictionarySource;

type PageController = Controller<LocalStore, HttpDictionarySource, BrowserPage>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = dom::document().ok();
    let (config, config_error) = match document.as_ref().map(read_config) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (SiteConfig::default(), Some(e)),
        None => (SiteConfig::default(), None),
    };

    let level = config.level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    if let Some(e) = config_error {
        log::error!("{e}; using default configuration");
    }

    let Some(document) = document else {
        log::error!("{}", DomError::NoDocument);
        return;
    };

    run(&document, &config);
}

/// Parse the inline config block, if the page has one.
fn read_config(document: &Document) -> Result<SiteConfig, ConfigError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(text) if !text.trim().is_empty() => SiteConfig::from_json(&text),
        _ => Ok(SiteConfig::default()),
    }
}

fn run(document: &Document, config: &SiteConfig) {
    let controller: Rc<PageController> = Rc::new(Controller::new(
        LocalStore::open(),
        HttpDictionarySource::from_config(config),
        BrowserPage::bind(document.clone()),
    ));

    let c = Rc::clone(&controller);
    spawn_local(async move {
        c.init().await;
    });

    if let Err(e) = expose_globals(&controller, config) {
        log::warn!("inline handlers not installed: {e}");
    }
    if let Err(e) = bind_toggles(document, &controller) {
        log::warn!("toggle buttons not bound: {e}");
    }
    if let Err(e) = bind_downloads(document, config) {
        log::warn!("download buttons not bound: {e}");
    }
    for target in &config.hover {
        if let Err(e) = attach_hover(document, &target.selector, &target.color) {
            log::warn!("hover effect for {} not attached: {e}", target.selector);
        }
    }
    match attach_scroll_reveal(document, &config.reveal) {
        Ok(revealed) => log::debug!("observing {revealed} elements for reveal"),
        Err(e) => log::warn!("scroll reveal not attached: {e}"),
    }

    log::info!("CV page loaded");
}

/// `window.toggleTheme`, `window.toggleLanguage` and `window.downloadPDF`,
/// for markup that wires buttons with `onclick` attributes.
fn expose_globals(controller: &Rc<PageController>, config: &SiteConfig) -> Result<(), DomError> {
    let c = Rc::clone(controller);
    dom::expose_global("toggleTheme", Closure::wrap(Box::new(move || toggle_theme(&c)) as Box<dyn FnMut()>))?;

    let c = Rc::clone(controller);
    dom::expose_global("toggleLanguage", Closure::wrap(Box::new(move || toggle_language(&c)) as Box<dyn FnMut()>))?;

    let download_config = config.download.clone();
    dom::expose_global(
        "downloadPDF",
        Closure::wrap(Box::new(move |arg: JsValue| match button_from(&arg) {
            Some(button) => start_download(&button, &download_config),
            None => log::error!("downloadPDF called without a button"),
        }) as Box<dyn FnMut(JsValue)>),
    )
}

fn toggle_theme(controller: &PageController) {
    let theme = controller.toggle_theme();
    log::debug!("theme switched to {}", theme.as_str());
}

fn toggle_language(controller: &Rc<PageController>) {
    let c = Rc::clone(controller);
    spawn_local(async move {
        c.toggle_language().await;
    });
}

fn start_download(button: &HtmlElement, config: &DownloadConfig) {
    if let Err(e) = download(button, config) {
        log::error!("download failed: {e}");
    }
}

/// Elements with an inline handler already reach the globals above.
fn has_inline_handler(element: &Element) -> bool {
    element.has_attribute("onclick")
}

fn bind_toggles(document: &Document, controller: &Rc<PageController>) -> Result<(), DomError> {
    for toggle in query_all(document, THEME_TOGGLE_SELECTOR)? {
        if has_inline_handler(&toggle) {
            continue;
        }
        let c = Rc::clone(controller);
        listen(&toggle, "click", move |_| toggle_theme(&c))?;
    }

    for toggle in query_all(document, LANGUAGE_TOGGLE_SELECTOR)? {
        if has_inline_handler(&toggle) {
            continue;
        }
        let c = Rc::clone(controller);
        listen(&toggle, "click", move |_| toggle_language(&c))?;
    }
    Ok(())
}

fn bind_downloads(document: &Document, config: &SiteConfig) -> Result<(), DomError> {
    for element in query_all(document, &config.download.selector)? {
        if has_inline_handler(&element) {
            continue;
        }
        let Ok(button) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        let target = button.clone();
        let download_config = config.download.clone();
        listen(&button, "click", move |_| start_download(&target, &download_config))?;
    }
    Ok(())
}
