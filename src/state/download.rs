//! Busy state of a "download CV" button.
//!
//! A click swaps the button's markup for a busy label and schedules a timed
//! reset. Clicks that land while the button is busy are ignored, so the
//! markup captured for the reset is always the button's own label and never
//! the busy label.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// The button a download was triggered from.
pub trait DownloadButton {
    /// Whether a download started from this button is still pending reset.
    fn is_busy(&self) -> bool;
    /// Current markup of the button.
    fn markup(&self) -> String;
    /// Mark busy and show `label` with a spinner.
    fn show_busy(&self, label: &str);
    /// Put `markup` back and clear the busy mark.
    fn restore(&self, markup: &str);
}

/// Markup to put back once the reset delay has elapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "the button stays busy until the reset is finished"]
pub struct PendingReset {
    markup: String,
}

impl PendingReset {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn finish(self, button: &impl DownloadButton) {
        button.restore(&self.markup);
    }
}

/// Switch `button` to its busy label.
///
/// Returns `None` when the button is already busy; the caller must not
/// start a second download then.
pub fn begin(button: &impl DownloadButton, busy_label: &str) -> Option<PendingReset> {
    if button.is_busy() {
        return None;
    }
    let markup = button.markup();
    button.show_busy(busy_label);
    Some(PendingReset { markup })
}
