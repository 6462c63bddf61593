//! Dictionary fetching over HTTP.
//!
//! Client-side (browser): real requests via `gloo-net`.
//! Native builds: every fetch fails with a transport error, since there is
//! no page to fetch relative to.

#![allow(clippy::unused_async)]

use std::future::Future;

use crate::config::SiteConfig;
use crate::i18n::{Dictionary, DictionarySource, LoadError};
use crate::state::prefs::Language;

/// Fetches `<locales_path>/<code>.json` relative to the page.
#[derive(Clone, Debug)]
pub struct HttpDictionarySource {
    locales_path: String,
}

impl HttpDictionarySource {
    pub fn new(locales_path: impl Into<String>) -> Self {
        Self { locales_path: locales_path.into() }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.locales_path.clone())
    }

    pub fn url(&self, language: Language) -> String {
        format!("{}/{}.json", self.locales_path.trim_end_matches('/'), language.code())
    }
}

impl DictionarySource for HttpDictionarySource {
    fn fetch(&self, language: Language) -> impl Future<Output = Result<Dictionary, LoadError>> {
        fetch_dictionary(self.url(language))
    }
}

async fn fetch_dictionary(url: String) -> Result<Dictionary, LoadError> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(LoadError::Status { status: resp.status() });
        }
        let body = resp.text().await.map_err(|e| LoadError::Transport(e.to_string()))?;
        Dictionary::from_json(&body)
    }
    #[cfg(not(feature = "browser"))]
    {
        Err(LoadError::Transport(format!("no browser available to fetch {url}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_path_and_code() {
        let source = HttpDictionarySource::new("locales/");
        assert_eq!(source.url(Language::En), "locales/en.json");
        assert_eq!(source.url(Language::Es), "locales/es.json");
    }

    #[test]
    fn url_follows_configured_locales_path() {
        let config = SiteConfig::from_json(r#"{ "locales_path": "/static/i18n/" }"#).unwrap();
        let source = HttpDictionarySource::from_config(&config);
        assert_eq!(source.url(Language::Es), "/static/i18n/es.json");
        assert_eq!(HttpDictionarySource::from_config(&SiteConfig::default()).url(Language::En), "locales/en.json");
    }

    #[cfg(not(feature = "browser"))]
    #[test]
    fn native_fetch_reports_transport_error() {
        use futures::executor::block_on;

        let err = block_on(HttpDictionarySource::new("locales").fetch(Language::En)).unwrap_err();
        assert!(matches!(err, LoadError::Transport(_)));
        assert!(err.to_string().contains("locales/en.json"));
    }
}
