//! Sitemap model - entries and rendering options for one sitemap build.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── config/    # SitemapConfig, loading and boundary validation
//! ├── model/     # SitemapModel, Entry, CacheDuration
//! ├── utils/     # DateTimeUtc
//! └── logger     # log!/debug! macros
//! ```
//!
//! The model is consumed by an external renderer and an external cache layer.
//! It never renders, compresses, writes or caches anything itself.
//!
//! # Example
//!
//! ```ignore
//! let config = SitemapConfig::from_str("use_limit_size = true\nmax_size = 1000")?;
//! let mut sitemap = SitemapModel::new(&config);
//! sitemap.add_item(Entry::new().with("loc", "https://example.com/"));
//! if sitemap.use_limit_size() {
//!     sitemap.limit_size(sitemap.effective_max_size());
//! }
//! ```

pub mod config;
pub mod logger;
pub mod model;
pub mod utils;

pub use config::{ConfigDiagnostics, ConfigError, InvalidValue, SitemapConfig};
pub use model::{CacheDuration, DEFAULT_MAX_SIZE, Entry, NEWS_MAX_SIZE, SitemapModel};
pub use utils::date::DateTimeUtc;
