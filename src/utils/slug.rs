//! Page slug normalization.
//!
//! Registry keys are site paths: a leading `/`, no trailing `/`, single
//! separators. The home page is `/`.

/// Characters never valid in a page slug
const FORBIDDEN_CHARS: &[char] = &['<', '>', '"', '\'', '\\', '|', '*', '\t', '\r', '\n'];

// ============================================================================
// Normalization
// ============================================================================

/// Normalize a slug for registry lookup.
///
/// | Input | Output |
/// |-------|--------|
/// | `""` | `/` |
/// | `lessons/permits/` | `/lessons/permits` |
/// | `//operations//staffing` | `/operations/staffing` |
/// | `/community?tab=events#top` | `/community` |
///
/// Case is preserved; slugs are matched exactly.
pub fn normalize_slug(raw: &str) -> String {
    let path = strip_query(raw.trim());

    let segments: Vec<String> = path
        .split('/')
        .map(sanitize_segment)
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        "/".to_owned()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Whether `slug` is already in normalized form.
pub fn is_normalized(slug: &str) -> bool {
    normalize_slug(slug) == slug
}

/// Drop `?query` and `#fragment` parts
fn strip_query(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |idx| &path[..idx])
}

fn sanitize_segment(segment: &str) -> String {
    segment
        .trim()
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
