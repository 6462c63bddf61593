//! Network access: locale dictionaries only.

pub mod locales;
