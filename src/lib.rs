//! # cv-site
//!
//! WASM interactivity layer for a static résumé page: light/dark theme,
//! runtime localization from per-language JSON dictionaries, hover and
//! scroll-reveal decoration, and the "download CV" button.
//!
//! The page markup is authored by hand; this crate only binds to it. All
//! decision logic (preferences, dictionary lookup, content shaping, load
//! sequencing) lives in browser-independent modules so it runs under plain
//! `cargo test`. The `browser` feature adds the web-sys shell in [`dom`] and
//! the `#[wasm_bindgen(start)]` entry point in [`app`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `SiteConfig`, read once at startup |
//! | [`state`] | Theme/language preferences and their storage seam |
//! | [`i18n`] | Dictionary, content templates, sequenced translator |
//! | [`controller`] | Toggle handlers wiring preferences, storage and page |
//! | [`net`] | Locale dictionary fetching |
//! | [`dom`] | web-sys bindings: page, storage, effects, download (`browser`) |
//! | [`app`] | Startup wiring (`browser`) |

pub mod config;
pub mod controller;
pub mod i18n;
pub mod net;
pub mod state;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;

#[cfg(test)]
mod test_support;
