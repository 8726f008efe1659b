//! Page metadata and the SEO registry.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   load_from()   ┌─────────────┐  get_page_seo()  ┌───────────┐
//! │ PageSource   │ ──────────────► │ SeoRegistry │ ───────────────► │ SeoConfig │
//! │ (json/static)│   (once)        │ slug → page │                  │ + JSON-LD │
//! └──────────────┘                 └─────────────┘                  └───────────┘
//!                                        │ miss
//!                                        ▼
//!                               fallback_page(slug)
//!                               (category inferred, templates applied)
//! ```
//!
//! | Module | Contents |
//! |--------|----------|
//! | `types` | Wire records: [`PageMetadata`], [`SeoConfig`], ... |
//! | `templates` | Per-category copy, keywords, images and FAQ sets |
//! | `source` | [`PageSource`] and its JSON / in-memory implementations |
//! | `store` | [`SeoRegistry`] |

pub mod source;
pub mod store;
pub mod templates;
pub mod types;

pub use source::{JsonFileSource, PageSource, StaticSource};
pub use store::{ImportReport, PageValidation, RegistryStats, SeoRegistry};
pub use types::{
    AuthorRecord, BreadcrumbItem, Category, Difficulty, OpenGraph, PageMetadata, SeoConfig,
    SeoOverrides, TwitterCard,
};
