//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub const NAME: &str = "DIY Food Truckers Union";
    pub const URL: &str = "https://diyfoodtruckers.com";
    pub const LOGO: &str = "https://diyfoodtruckers.com/images/logo.png";

    pub fn name() -> String {
        NAME.into()
    }

    pub fn url() -> String {
        URL.into()
    }

    pub fn logo() -> String {
        LOGO.into()
    }

    pub fn description() -> String {
        "Free, practical lessons for starting and running a food truck business.".into()
    }

    pub fn locale() -> String {
        "en_US".into()
    }

    pub fn twitter_handle() -> String {
        "@diyfoodtruckers".into()
    }

    pub fn contact_email() -> String {
        "hello@diyfoodtruckers.com".into()
    }

    pub fn search_path() -> String {
        "/search?q={search_term_string}".into()
    }
}

// ============================================================================
// [registry] Section Defaults
// ============================================================================

pub mod registry {
    use std::path::PathBuf;

    pub fn source() -> PathBuf {
        "pages.json".into()
    }
}

// ============================================================================
// [sitemap] / [robots] Section Defaults
// ============================================================================

pub mod sitemap {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn path() -> PathBuf {
        "sitemap.xml".into()
    }
}

pub mod robots {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "robots.txt".into()
    }

    pub fn disallow() -> Vec<String> {
        vec!["/admin/".into(), "/api/".into(), "/*.json$".into()]
    }
}
