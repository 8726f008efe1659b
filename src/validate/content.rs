//! Checks over rendered page content: heading outline, readability and
//! keyword density. These are advisory and never feed the record score.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Sentence terminators; runs like `?!` or `...` count once.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// ATX markdown heading, trailing `#`s stripped.
static MARKDOWN_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*$").expect("valid regex")
});

// ============================================================================
// Headings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Require exactly one H1 and flag level jumps greater than one.
pub fn validate_heading_hierarchy(headings: &[Heading]) -> HeadingReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match headings.iter().filter(|h| h.level == 1).count() {
        0 => errors.push("Page has no H1 heading".to_string()),
        1 => {}
        n => errors.push(format!("Page has {n} H1 headings, expected exactly one")),
    }

    for pair in headings.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.level > prev.level.saturating_add(1) {
            warnings.push(format!(
                "Heading level skips from H{} to H{} at \"{}\"",
                prev.level, next.level, next.text
            ));
        }
    }

    HeadingReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Collect ATX headings from markdown, skipping fenced code blocks.
pub fn extract_markdown_headings(markdown: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_fence = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(caps) = MARKDOWN_HEADING.captures(line) {
            headings.push(Heading::new(caps[1].len() as u8, caps[2].trim()));
        }
    }
    headings
}

// ============================================================================
// Readability
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilityLevel {
    Easy,
    Moderate,
    Difficult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_words_per_sentence: f64,
    pub level: ReadabilityLevel,
}

/// Average sentence length, classified: under 15 words is easy, over 25 difficult.
pub fn analyze_readability(text: &str) -> ReadabilityReport {
    let word_count = text.split_whitespace().count();
    let sentence_count = SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();

    let average = if sentence_count == 0 {
        0.0
    } else {
        word_count as f64 / sentence_count as f64
    };

    let level = if average < 15.0 {
        ReadabilityLevel::Easy
    } else if average > 25.0 {
        ReadabilityLevel::Difficult
    } else {
        ReadabilityLevel::Moderate
    };

    ReadabilityReport {
        word_count,
        sentence_count,
        average_words_per_sentence: average,
        level,
    }
}

// ============================================================================
// Keyword density
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityLevel {
    Low,
    Good,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub count: usize,
    /// Percent of all words.
    pub density: f64,
    pub level: DensityLevel,
}

/// Per keyword: how many lowercased words contain it, as a share of all words.
///
/// Matching is per whitespace token, so multi-word keywords never match.
/// Blank keywords are skipped.
pub fn analyze_keyword_density<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<KeywordDensity> {
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

    keywords
        .iter()
        .filter(|keyword| !keyword.as_ref().trim().is_empty())
        .map(|keyword| {
            let needle = keyword.as_ref().to_lowercase();
            let count = words.iter().filter(|w| w.contains(&needle)).count();
            let density = if words.is_empty() {
                0.0
            } else {
                count as f64 / words.len() as f64 * 100.0
            };
            let level = if density < 0.5 {
                DensityLevel::Low
            } else if density > 3.0 {
                DensityLevel::High
            } else {
                DensityLevel::Good
            };
            KeywordDensity {
                keyword: keyword.as_ref().to_owned(),
                count,
                density,
                level,
            }
        })
        .collect()
}
