//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The page has exactly two persisted preferences. They are modeled as plain
//! `Copy` values so toggles are pure functions, with persistence pushed out to
//! the [`prefs::PreferenceStore`] seam.

pub mod download;
pub mod prefs;
