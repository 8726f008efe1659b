//! `[site]` section configuration.
//!
//! Identity of the site organization, used for canonical URLs, Open Graph
//! tags and the Organization / WebSite schemas.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in seo.toml.
///
/// # Example
/// ```toml
/// [site]
/// name = "DIY Food Truckers Union"
/// url = "https://diyfoodtruckers.com"
/// same_as = ["https://discord.gg/foodtruckers"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Organization and site name.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    /// Absolute base URL, no trailing slash needed.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// Absolute logo URL.
    #[serde(default = "defaults::site::logo")]
    #[educe(Default = defaults::site::logo())]
    pub logo: String,

    #[serde(default = "defaults::site::description")]
    #[educe(Default = defaults::site::description())]
    pub description: String,

    /// Open Graph locale, e.g. `en_US`.
    #[serde(default = "defaults::site::locale")]
    #[educe(Default = defaults::site::locale())]
    pub locale: String,

    #[serde(default = "defaults::site::twitter_handle")]
    #[educe(Default = defaults::site::twitter_handle())]
    pub twitter_handle: String,

    #[serde(default = "defaults::site::contact_email")]
    #[educe(Default = defaults::site::contact_email())]
    pub contact_email: String,

    /// Search URL template relative to `url`, used by the WebSite search action.
    #[serde(default = "defaults::site::search_path")]
    #[educe(Default = defaults::site::search_path())]
    pub search_path: String,

    /// External profile URLs (`sameAs`).
    #[serde(default)]
    pub same_as: Vec<String>,
}

impl SiteInfo {
    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Absolute URL for a site path; `path` should start with `/`.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url())
        } else {
            format!("{}/{path}", self.base_url())
        }
    }
}
