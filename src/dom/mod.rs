//! web-sys bindings for the static page.
//!
//! Requires a browser environment; compiled only with the `browser`
//! feature. Everything here is glue: decisions are made in the
//! browser-independent modules and this layer turns them into DOM calls.

pub mod download;
pub mod effects;
pub mod page;
pub mod storage;

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

/// Error raised by DOM glue.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    /// An element the page contract requires is absent.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// The current page's document.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] / [`DomError::NoDocument`] outside a page.
pub fn document() -> Result<Document, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)?.document().ok_or(DomError::NoDocument)
}

/// Every element matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`DomError::Js`] for an invalid selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach a listener for the page's lifetime.
///
/// # Errors
///
/// Returns [`DomError::Js`] if the listener cannot be registered.
pub fn listen(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Publish `closure` as `window.<name>` for inline `onclick` handlers.
///
/// # Errors
///
/// Returns [`DomError::NoWindow`] outside a page, or [`DomError::Js`] if the
/// property cannot be set.
pub fn expose_global<F: ?Sized + WasmClosure>(name: &str, closure: Closure<F>) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}
