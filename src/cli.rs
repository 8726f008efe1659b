//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SEO toolkit for the DIY Food Truckers Union site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: seo.toml)
    #[arg(short = 'C', long, default_value = "seo.toml")]
    pub config: PathBuf,

    /// Artifact output directory (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the site base URL.
    ///
    /// Useful for staging builds whose public URL differs from production:
    ///   truckers-seo --base-url "https://staging.diyfoodtruckers.com" sitemap
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write sitemap.xml and robots.txt for every registered page
    Sitemap,

    /// Score every registered page and list its findings
    Validate {
        /// Exit with an error when any page has validation errors
        #[arg(long)]
        strict: bool,
    },

    /// Print aggregate registry statistics
    Stats,

    /// Print the render-ready SEO config of a page as JSON
    Seo {
        /// Page slug, e.g. `/lessons/permits`
        slug: String,

        /// Fallback title when the slug is not registered
        #[arg(long)]
        title: Option<String>,

        /// Fallback description when the slug is not registered
        #[arg(long)]
        description: Option<String>,
    },

    /// Print the JSON-LD documents of a page
    Schemas {
        /// Page slug
        slug: String,
    },

    /// Export the registry as a JSON array
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Import page records from a JSON array and report failures
    Import {
        /// JSON file to import
        file: PathBuf,

        /// Write the merged registry to this file
        #[arg(short, long)]
        write: Option<PathBuf>,
    },

    /// Analyze a markdown or text file: headings, readability, keyword density
    Analyze {
        /// Content file
        file: PathBuf,

        /// Keywords to measure, comma separated
        #[arg(short, long, value_delimiter = ',')]
        keywords: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seo_with_fallbacks() {
        let cli = Cli::parse_from([
            "truckers-seo",
            "seo",
            "/unknown",
            "--title",
            "Fallback",
        ]);
        match cli.command {
            Commands::Seo { slug, title, description } => {
                assert_eq!(slug, "/unknown");
                assert_eq!(title.as_deref(), Some("Fallback"));
                assert!(description.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_analyze_keywords() {
        let cli = Cli::parse_from([
            "truckers-seo",
            "analyze",
            "lesson.md",
            "--keywords",
            "food truck,permit",
        ]);
        match cli.command {
            Commands::Analyze { keywords, .. } => {
                assert_eq!(keywords, vec!["food truck".to_string(), "permit".to_string()]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::parse_from(["truckers-seo", "stats"]);
        assert_eq!(cli.config, PathBuf::from("seo.toml"));
        assert!(cli.base_url.is_none());
    }
}
