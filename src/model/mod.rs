//! Sitemap model for a single build.
//!
//! Holds URL entries, child sitemap references and the rendering flags read
//! by the renderer and the cache layer.
//!
//! # Lifecycle
//!
//! ```text
//! SitemapConfig ──new()──► SitemapModel ──add_item()/set_*()──► renderer
//! ```
//!
//! One instance per build, owned by whoever drives the build. There is no
//! interior mutability, so concurrent builds each need their own model.

mod cache;
mod entry;

pub use cache::{CacheDuration, DEFAULT_CACHE_DURATION_SECS};
pub use entry::Entry;

use crate::{config::SitemapConfig, debug};

/// Protocol limit for URLs in a single sitemap file.
pub const DEFAULT_MAX_SIZE: usize = 50_000;

/// Limit for news sitemaps.
pub const NEWS_MAX_SIZE: usize = 1_000;

pub const DEFAULT_STYLES_LOCATION: &str = "/vendor/sitemap/styles/";

pub const DEFAULT_CACHE_KEY: &str = "laravel-sitemap.";

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapModel {
    items: Vec<Entry>,
    sitemaps: Vec<Entry>,
    title: Option<String>,
    link: Option<String>,
    /// Emit the XSL stylesheet reference.
    use_styles: bool,
    /// XSL asset location, must end with `/`.
    styles_location: Option<String>,
    use_cache: bool,
    cache_key: String,
    cache_duration: CacheDuration,
    /// HTML-escape entry text when rendering.
    escaping: bool,
    use_limit_size: bool,
    /// Overrides the renderer's cap when `use_limit_size` is set.
    max_size: Option<usize>,
    use_gzip: bool,
    /// Disables timestamps and other non-deterministic output.
    testing: bool,
}

impl Default for SitemapModel {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sitemaps: Vec::new(),
            title: None,
            link: None,
            use_styles: true,
            styles_location: Some(DEFAULT_STYLES_LOCATION.to_owned()),
            use_cache: false,
            cache_key: DEFAULT_CACHE_KEY.to_owned(),
            cache_duration: CacheDuration::default(),
            escaping: true,
            use_limit_size: false,
            max_size: None,
            use_gzip: false,
            testing: false,
        }
    }
}

impl SitemapModel {
    /// Create a model, overriding defaults with every key present in `config`.
    pub fn new(config: &SitemapConfig) -> Self {
        let defaults = Self::default();
        Self {
            items: Vec::new(),
            sitemaps: Vec::new(),
            title: None,
            link: None,
            use_styles: config.use_styles.unwrap_or(defaults.use_styles),
            styles_location: config
                .styles_location
                .clone()
                .or(defaults.styles_location),
            use_cache: config.use_cache.unwrap_or(defaults.use_cache),
            cache_key: config.cache_key.clone().unwrap_or(defaults.cache_key),
            cache_duration: config.cache_duration.unwrap_or(defaults.cache_duration),
            escaping: config.escaping.unwrap_or(defaults.escaping),
            use_limit_size: config.use_limit_size.unwrap_or(defaults.use_limit_size),
            max_size: config.max_size.or(defaults.max_size),
            use_gzip: config.use_gzip.unwrap_or(defaults.use_gzip),
            testing: config.testing.unwrap_or(defaults.testing),
        }
    }

    // ------------------------------------------------------------------------
    // entries
    // ------------------------------------------------------------------------

    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    pub fn sitemaps(&self) -> &[Entry] {
        &self.sitemaps
    }

    pub fn add_item(&mut self, item: Entry) {
        self.items.push(item);
    }

    pub fn add_sitemap(&mut self, sitemap: Entry) {
        self.sitemaps.push(sitemap);
    }

    /// Replace all items. Pass `Vec::new()` to clear.
    pub fn reset_items(&mut self, items: Vec<Entry>) {
        self.items = items;
    }

    /// Replace all child sitemap references. Pass `Vec::new()` to clear.
    pub fn reset_sitemaps(&mut self, sitemaps: Vec<Entry>) {
        self.sitemaps = sitemaps;
    }

    /// Keep only the first `max` items.
    ///
    /// Never grows the list; `limit_size(0)` empties it.
    pub fn limit_size(&mut self, max: usize) {
        if self.items.len() > max {
            debug!("sitemap"; "limited items from {} to {}", self.items.len(), max);
            self.items.truncate(max);
        }
    }

    /// Cap a renderer applies when `use_limit_size` is set.
    pub fn effective_max_size(&self) -> usize {
        self.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    // ------------------------------------------------------------------------
    // getters
    // ------------------------------------------------------------------------

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn use_styles(&self) -> bool {
        self.use_styles
    }

    pub fn styles_location(&self) -> Option<&str> {
        self.styles_location.as_deref()
    }

    pub fn use_cache(&self) -> bool {
        self.use_cache
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub fn cache_duration(&self) -> CacheDuration {
        self.cache_duration
    }

    pub fn escaping(&self) -> bool {
        self.escaping
    }

    pub fn use_limit_size(&self) -> bool {
        self.use_limit_size
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    pub fn use_gzip(&self) -> bool {
        self.use_gzip
    }

    pub fn testing(&self) -> bool {
        self.testing
    }

    // ------------------------------------------------------------------------
    // setters
    // ------------------------------------------------------------------------

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn set_link(&mut self, link: Option<String>) {
        self.link = link;
    }

    pub fn set_escaping(&mut self, escaping: bool) {
        self.escaping = escaping;
    }

    pub fn set_use_styles(&mut self, use_styles: bool) {
        self.use_styles = use_styles;
    }

    pub fn set_styles_location(&mut self, styles_location: Option<String>) {
        self.styles_location = styles_location;
    }

    pub fn set_use_limit_size(&mut self, use_limit_size: bool) {
        self.use_limit_size = use_limit_size;
    }

    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
    }

    pub fn set_use_cache(&mut self, use_cache: bool) {
        self.use_cache = use_cache;
    }

    pub fn set_cache_key(&mut self, cache_key: impl Into<String>) {
        self.cache_key = cache_key.into();
    }

    pub fn set_cache_duration(&mut self, cache_duration: impl Into<CacheDuration>) {
        self.cache_duration = cache_duration.into();
    }

    pub fn set_use_gzip(&mut self, use_gzip: bool) {
        self.use_gzip = use_gzip;
    }

    pub fn set_testing(&mut self, testing: bool) {
        self.testing = testing;
    }
}

// ============================================================================
// tests
// ============================================================================
