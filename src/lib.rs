//! SEO toolkit for the DIY Food Truckers Union site.
//!
//! - [`schema`]: schema.org JSON-LD documents and their validation
//! - [`generator::page`]: which documents each page gets
//! - [`data::SeoRegistry`]: page registry with fallback synthesis
//! - [`validate`]: rule-based SEO scoring and content checks
//! - [`generator::sitemap`] / [`generator::robots`]: crawler artifacts

pub mod cli;
pub mod config;
pub mod data;
pub mod generator;
pub mod logger;
pub mod schema;
pub mod utils;
pub mod validate;
