//! Static per-category content: fallback copy, title templates, keyword
//! sets, social images, learning outcomes and FAQ sets.

use super::types::Category;
use crate::schema::{PageType, input::FaqItem};

/// Title, description and keywords used when a slug is not registered.
pub struct FallbackCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub const fn fallback_copy(category: Category) -> FallbackCopy {
    match category {
        Category::GettingStarted => FallbackCopy {
            title: "Getting Started with Your Food Truck",
            description: "Step-by-step guidance for launching a food truck: planning, permits, buying a truck and opening day.",
            keywords: &["start a food truck", "food truck business plan", "food truck permits"],
        },
        Category::Operations => FallbackCopy {
            title: "Food Truck Operations",
            description: "Run a smoother food truck: staffing, inventory, daily workflows, maintenance and health inspections.",
            keywords: &["food truck operations", "food truck management", "food truck inventory"],
        },
        Category::Financial => FallbackCopy {
            title: "Food Truck Finances",
            description: "Budgeting, pricing, funding and bookkeeping lessons to keep your food truck profitable.",
            keywords: &["food truck budget", "food truck pricing", "food truck funding"],
        },
        Category::Marketing => FallbackCopy {
            title: "Food Truck Marketing",
            description: "Grow your customer base with social media, branding, events and local promotion for food trucks.",
            keywords: &["food truck marketing", "food truck social media", "food truck branding"],
        },
        Category::Resources => FallbackCopy {
            title: "Food Truck Resources",
            description: "Templates, checklists, calculators and tools for food truck owners and aspiring operators.",
            keywords: &["food truck resources", "food truck templates", "food truck tools"],
        },
        Category::Community => FallbackCopy {
            title: "Food Truck Community",
            description: "Connect with food truck owners, share lessons learned and get answers from the DIY Food Truckers Union.",
            keywords: &["food truck community", "food truck owners", "food truck discord"],
        },
    }
}

/// Suffix appended to page titles, by page template.
pub const fn title_suffix(page_type: PageType) -> &'static str {
    match page_type {
        PageType::Home => " | DIY Food Truckers Union",
        PageType::Lesson => " - Food Truck Lesson | DIY Food Truckers Union",
        PageType::Resource => " - Food Truck Resources | DIY Food Truckers Union",
        PageType::Community => " - Food Truck Community | DIY Food Truckers Union",
    }
}

/// Keywords every page of a template carries.
pub const fn template_keywords(page_type: PageType) -> &'static [&'static str] {
    match page_type {
        PageType::Home => &["food truck", "food truck business", "diy food truck"],
        PageType::Lesson => &["food truck lessons", "food truck education"],
        PageType::Resource => &["food truck resources"],
        PageType::Community => &["food truck community"],
    }
}

/// Keywords every page of a category carries.
pub const fn category_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::GettingStarted => &["food truck startup", "starting a food truck"],
        Category::Operations => &["food truck operations", "daily operations"],
        Category::Financial => &["food truck finances", "food truck profit"],
        Category::Marketing => &["food truck marketing", "food truck promotion"],
        Category::Resources => &["food truck tools", "food truck templates"],
        Category::Community => &["food truck owners", "food truck network"],
    }
}

/// Site-relative Open Graph / Twitter image for a category.
pub const fn category_image(category: Category) -> &'static str {
    match category {
        Category::GettingStarted => "/images/og/getting-started.jpg",
        Category::Operations => "/images/og/operations.jpg",
        Category::Financial => "/images/og/financial.jpg",
        Category::Marketing => "/images/og/marketing.jpg",
        Category::Resources => "/images/og/resources.jpg",
        Category::Community => "/images/og/community.jpg",
    }
}

pub const HOME_IMAGE: &str = "/images/og/home.jpg";

/// What a lesson in each category teaches. Non-lesson categories have none.
pub const fn learning_outcomes(category: Category) -> &'static [&'static str] {
    match category {
        Category::GettingStarted => &[
            "Write a food truck business plan",
            "Identify the permits and licenses you need",
            "Choose between buying a new or used truck",
            "Plan a successful opening day",
        ],
        Category::Operations => &[
            "Build efficient daily prep and service workflows",
            "Manage inventory and reduce food waste",
            "Hire, train and schedule staff",
            "Pass health inspections with confidence",
        ],
        Category::Financial => &[
            "Create and track a realistic operating budget",
            "Price menu items for profit",
            "Compare funding options for your truck",
            "Keep clean books for tax season",
        ],
        Category::Marketing => &[
            "Build a recognizable food truck brand",
            "Grow a following on social media",
            "Land events, festivals and catering gigs",
            "Turn first-time customers into regulars",
        ],
        Category::Resources | Category::Community => &[],
    }
}

pub fn home_faqs() -> Vec<FaqItem> {
    vec![
        FaqItem::new(
            "What is the DIY Food Truckers Union?",
            "A free educational community that teaches aspiring and current owners how to start, run and grow a food truck business.",
        ),
        FaqItem::new(
            "How much does it cost to start a food truck?",
            "Most owners spend between $50,000 and $175,000 depending on whether they buy a new or used truck, equipment, permits and initial inventory.",
        ),
        FaqItem::new(
            "Do I need experience to start a food truck?",
            "No. Our lessons start from the basics and walk you through planning, permits, operations, finances and marketing.",
        ),
        FaqItem::new(
            "Are the lessons free?",
            "Yes. Every lesson and resource on the site is free to use.",
        ),
    ]
}

pub fn community_faqs() -> Vec<FaqItem> {
    vec![
        FaqItem::new(
            "How do I join the community?",
            "Join our Discord server from the community page; it is free and open to anyone interested in food trucks.",
        ),
        FaqItem::new(
            "Can I ask questions about my own truck?",
            "Yes. Members share advice on permits, equipment, pricing and marketing for real trucks every day.",
        ),
        FaqItem::new(
            "Are there community events?",
            "We host regular online meetups and share local food truck events posted by members.",
        ),
    ]
}
