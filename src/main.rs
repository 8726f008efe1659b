//! truckers-seo - SEO metadata, JSON-LD and sitemap tooling for the
//! DIY Food Truckers Union site.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use serde_json::json;
use std::path::Path;
use truckers_seo::{
    cli::{Cli, Commands},
    config::SiteConfig,
    data::{JsonFileSource, SeoOverrides, SeoRegistry},
    generator::write_artifacts,
    log,
    schema::render_json_ld,
    validate::content::{
        analyze_keyword_density, analyze_readability, extract_markdown_headings,
        validate_heading_hierarchy,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    let registry = SeoRegistry::new(config.site.clone());
    registry
        .load_from(&JsonFileSource::new(config.registry_source()))
        .await;

    match &cli.command {
        Commands::Sitemap => {
            write_artifacts(&config, &registry)?;
        }
        Commands::Validate { strict } => validate_registry(&registry, *strict)?,
        Commands::Stats => print_json(&registry.get_stats())?,
        Commands::Seo {
            slug,
            title,
            description,
        } => {
            let overrides = SeoOverrides {
                title: title.clone(),
                description: description.clone(),
                ..Default::default()
            };
            print_json(&registry.get_page_seo(slug, Some(&overrides)))?;
        }
        Commands::Schemas { slug } => {
            for script in render_json_ld(&registry.page_schemas(slug)) {
                println!("{script}");
            }
        }
        Commands::Export { file } => {
            let json = registry.export().context("Failed to serialize registry")?;
            match file {
                Some(path) => write_file(path, &json).await?,
                None => println!("{json}"),
            }
        }
        Commands::Import { file, write } => {
            let content = read_file(file).await?;
            let report = registry.import(&content);
            for error in &report.errors {
                log!("error"; "{error}");
            }
            if let Some(path) = write {
                let json = registry.export().context("Failed to serialize registry")?;
                write_file(path, &json).await?;
            }
            print_json(&report)?;
        }
        Commands::Analyze { file, keywords } => {
            let content = read_file(file).await?;
            let headings = extract_markdown_headings(&content);
            let report = json!({
                "headings": validate_heading_hierarchy(&headings),
                "readability": analyze_readability(&content),
                "keywordDensity": analyze_keyword_density(&content, keywords),
            });
            print_json(&report)?;
        }
    }

    Ok(())
}

/// Print every page's validation; with `strict`, fail when any page has errors.
fn validate_registry(registry: &SeoRegistry, strict: bool) -> Result<()> {
    let results = registry.validate_all_configs();
    let mut invalid = 0;

    for result in &results {
        let validation = &result.validation;
        let mark = if validation.is_valid {
            "✓".green()
        } else {
            invalid += 1;
            "✗".red()
        };
        println!("{mark} {} ({})", result.slug, validation.score);
        for error in &validation.errors {
            println!("    {} {error}", "error:".red());
        }
        for warning in &validation.warnings {
            println!("    {} {warning}", "warning:".yellow());
        }
        for suggestion in &validation.suggestions {
            println!("    {} {suggestion}", "suggestion:".cyan());
        }
    }

    log!("validate"; "{} pages, {invalid} invalid", results.len());
    if strict && invalid > 0 {
        bail!("{invalid} pages failed validation");
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log!("export"; "{}", path.display());
    Ok(())
}
