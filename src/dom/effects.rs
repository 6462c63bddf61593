//! Decorative effects: hover background and scroll reveal.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{DomError, listen, query_all};
use crate::config::RevealConfig;

/// Marks elements that already carry hover listeners.
const HOVER_BOUND_ATTRIBUTE: &str = "data-hover-bound";
const HOVER_TRANSITION: &str = "background-color 0.3s ease";
const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Set `color` as background while the pointer is over a matching element.
///
/// Elements bound by an earlier call are skipped. Returns how many elements
/// were newly bound.
///
/// # Errors
///
/// Returns [`DomError::Js`] for an invalid selector or a failed listener
/// registration.
pub fn attach_hover(document: &Document, selector: &str, color: &str) -> Result<usize, DomError> {
    let mut bound = 0;
    for element in query_all(document, selector)? {
        if element.has_attribute(HOVER_BOUND_ATTRIBUTE) {
            continue;
        }
        let Ok(el) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        el.set_attribute(HOVER_BOUND_ATTRIBUTE, "")?;

        let target = el.clone();
        let color = color.to_owned();
        listen(&el, "mouseenter", move |_| {
            let style = target.style();
            let _ = style.set_property("background-color", &color);
            let _ = style.set_property("transition", HOVER_TRANSITION);
        })?;

        let target = el.clone();
        listen(&el, "mouseleave", move |_| {
            let _ = target.style().remove_property("background-color");
        })?;

        bound += 1;
    }
    Ok(bound)
}

/// Hide matching elements and fade them in once they scroll into view.
///
/// Each element is revealed once and then unobserved.
///
/// # Errors
///
/// Returns [`DomError::Js`] if the observer cannot be created or an
/// element cannot be styled.
pub fn attach_scroll_reveal(document: &Document, config: &RevealConfig) -> Result<usize, DomError> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if let Some(el) = target.dyn_ref::<HtmlElement>() {
                let style = el.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            }
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let mut observed = 0;
    for element in query_all(document, &config.selector)? {
        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            let style = el.style();
            style.set_property("opacity", "0")?;
            style.set_property("transform", "translateY(20px)")?;
            style.set_property("transition", REVEAL_TRANSITION)?;
        }
        observer.observe(&element);
        observed += 1;
    }
    Ok(observed)
}
