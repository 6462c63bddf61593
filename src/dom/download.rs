//! "Download CV" button.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlAnchorElement, HtmlElement};

use super::DomError;
use crate::config::DownloadConfig;
use crate::state::download::{self, DownloadButton};

const SPINNER_CLASS: &str = "fas fa-spinner fa-spin";
/// Present while a download started from the button awaits its reset.
const BUSY_ATTRIBUTE: &str = "data-download-busy";

impl DownloadButton for HtmlElement {
    fn is_busy(&self) -> bool {
        self.has_attribute(BUSY_ATTRIBUTE)
    }

    fn markup(&self) -> String {
        self.inner_html()
    }

    fn show_busy(&self, label: &str) {
        if let Err(e) = render_busy(self, label) {
            log::warn!("failed to show download progress: {e}");
        }
    }

    fn restore(&self, markup: &str) {
        self.set_inner_html(markup);
        let _ = self.style().set_property("cursor", "pointer");
        let _ = self.remove_attribute(BUSY_ATTRIBUTE);
    }
}

fn render_busy(button: &HtmlElement, label: &str) -> Result<(), DomError> {
    button.set_attribute(BUSY_ATTRIBUTE, "")?;
    let document = button.owner_document().ok_or(DomError::NoDocument)?;
    let spinner = document.create_element("i")?;
    spinner.set_class_name(SPINNER_CLASS);
    button.set_text_content(None);
    button.append_child(&spinner)?;
    button.append_with_str_1(&format!(" {label}"))?;
    button.style().set_property("cursor", "wait")?;
    Ok(())
}

/// Start a download of the configured file from `button`.
///
/// The button shows a spinner and a busy label, then gets its original
/// markup back after `reset_delay_ms`. The browser gives no completion
/// signal, so the reset is purely timed and happens whether or not the
/// download went through. Clicks on a busy button are ignored.
///
/// # Errors
///
/// Returns [`DomError`] if the temporary anchor cannot be built or attached.
/// The label reset is scheduled before anything can fail.
pub fn download(button: &HtmlElement, config: &DownloadConfig) -> Result<(), DomError> {
    let Some(pending) = download::begin(button, &config.busy_label) else {
        log::debug!("download already in progress");
        return Ok(());
    };
    let restore = button.clone();
    Timeout::new(config.reset_delay_ms, move || pending.finish(&restore)).forget();

    let document = button.owner_document().ok_or(DomError::NoDocument)?;
    let body = document.body().ok_or_else(|| DomError::MissingElement("body".into()))?;
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DomError::Js("created <a> is not an anchor".into()))?;
    link.set_href(&config.url);
    link.set_download(&config.file_name);
    link.set_target("_blank");

    body.append_child(&link)?;
    link.click();
    link.remove();

    log::info!("download requested for {}", config.url);
    Ok(())
}

/// Resolve the button behind an inline handler argument.
///
/// Accepts the button itself (`downloadPDF(this)`), any element inside it,
/// or the click event (`downloadPDF(event)`). A bare `downloadPDF()` falls
/// back to the focused element, which is the button that was just clicked.
pub fn button_from(arg: &JsValue) -> Option<HtmlElement> {
    let element = if let Some(event) = arg.dyn_ref::<Event>() {
        event.current_target().or_else(|| event.target())?.dyn_into::<Element>().ok()?
    } else if let Some(element) = arg.dyn_ref::<Element>() {
        element.clone()
    } else {
        super::document().ok()?.active_element()?
    };
    let button = element.closest("button").ok().flatten().unwrap_or(element);
    button.dyn_into::<HtmlElement>().ok()
}
