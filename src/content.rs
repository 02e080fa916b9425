//! Static content tables.
//!
//! Every record here is plain, immutable data built once and referenced by
//! `id` from the page renderers. Tables are ordinary functions returning
//! owned vectors; they are cheap to build and the build renders each page
//! once.

use crate::components::service_card::CardColor;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
    #[error("duplicate {table} id: {id}")]
    DuplicateId { table: &'static str, id: String },
    #[error("{table} id is not URL-safe: {id:?}")]
    UnsafeId { table: &'static str, id: String },
    #[error("project {0} has no tags")]
    EmptyTags(String),
}

/// A star rating, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, ContentError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ContentError::RatingOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Technology {
    pub id: u32,
    pub name: &'static str,
    pub logo_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub rating: Rating,
    pub avatar_url: &'static str,
    pub thumbnail_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<&'static str>,
}

/// A portfolio entry shown as a work card.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Display order, left to right.
    pub tags: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<&'static str>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Emoji glyph shown in the card's icon badge.
    pub icon: &'static str,
    pub color: CardColor,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobOpening {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PressItem {
    pub outlet: &'static str,
    pub headline: &'static str,
    pub date: &'static str,
    pub url: &'static str,
}

/// Guides, webinars, case studies and help articles share one shape.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub summary: &'static str,
    pub meta: &'static str,
}

// ============================================================================
// Tables
// ============================================================================

pub fn technologies() -> Vec<Technology> {
    let rows = [
        ("React", "https://cdn.simpleicons.org/react"),
        ("TypeScript", "https://cdn.simpleicons.org/typescript"),
        ("Rust", "https://cdn.simpleicons.org/rust"),
        ("Node.js", "https://cdn.simpleicons.org/nodedotjs"),
        ("PostgreSQL", "https://cdn.simpleicons.org/postgresql"),
        ("Figma", "https://cdn.simpleicons.org/figma"),
        ("Tailwind CSS", "https://cdn.simpleicons.org/tailwindcss"),
        ("AWS", "https://cdn.simpleicons.org/amazonaws"),
        ("Flutter", "https://cdn.simpleicons.org/flutter"),
        ("Shopify", "https://cdn.simpleicons.org/shopify"),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, &(name, logo_url))| Technology {
            id: i as u32 + 1,
            name,
            logo_url,
        })
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Sarah Johnson",
            position: "Marketing Director",
            company: "Brightline Retail",
            quote: "They rebuilt our storefront in eight weeks and conversion is up 40%. \
                    The team felt like an extension of ours.",
            rating: Rating(5),
            avatar_url: "https://images.northwind.digital/people/sarah.jpg",
            thumbnail_url: "https://images.northwind.digital/video/sarah-thumb.jpg",
            video_url: Some("https://videos.northwind.digital/testimonials/sarah.mp4"),
        },
        Testimonial {
            id: 2,
            name: "David Chen",
            position: "CTO",
            company: "Ledgerly",
            quote: "Clear communication, honest estimates, and an app our customers \
                    actually enjoy using.",
            rating: Rating(5),
            avatar_url: "https://images.northwind.digital/people/david.jpg",
            thumbnail_url: "https://images.northwind.digital/video/david-thumb.jpg",
            video_url: None,
        },
        Testimonial {
            id: 3,
            name: "Amara Okafor",
            position: "Founder",
            company: "Kinfolk Health",
            quote: "From brand workshop to launch, every step was thoughtful. \
                    We doubled our sign-ups in a quarter.",
            rating: Rating(4),
            avatar_url: "https://images.northwind.digital/people/amara.jpg",
            thumbnail_url: "https://images.northwind.digital/video/amara-thumb.jpg",
            video_url: Some("https://videos.northwind.digital/testimonials/amara.mp4"),
        },
    ]
}

pub fn projects() -> Vec<ProjectDetail> {
    vec![
        ProjectDetail {
            id: "brightline-commerce",
            title: "Brightline Commerce",
            description: "Headless storefront with sub-second page loads and a custom checkout.",
            image: "https://images.northwind.digital/work/brightline.jpg",
            tags: vec!["E-commerce", "Web Development", "Performance"],
            industry: Some("Retail"),
            technologies: Some(vec!["React", "Shopify", "AWS"]),
        },
        ProjectDetail {
            id: "ledgerly-mobile",
            title: "Ledgerly Mobile",
            description: "Cross-platform banking app with biometric login and real-time insights.",
            image: "https://images.northwind.digital/work/ledgerly.jpg",
            tags: vec!["Mobile App", "Fintech", "UI/UX"],
            industry: Some("Finance"),
            technologies: Some(vec!["Flutter", "Rust", "PostgreSQL"]),
        },
        ProjectDetail {
            id: "kinfolk-rebrand",
            title: "Kinfolk Health Rebrand",
            description: "Identity, design system and marketing site for a telehealth startup.",
            image: "https://images.northwind.digital/work/kinfolk.jpg",
            tags: vec!["Branding", "Design System"],
            industry: Some("Healthcare"),
            technologies: None,
        },
        ProjectDetail {
            id: "atlas-analytics",
            title: "Atlas Analytics",
            description: "Data dashboard turning millions of events into decisions.",
            image: "https://images.northwind.digital/work/atlas.jpg",
            tags: vec!["SaaS", "Data Visualization", "Web Development"],
            industry: None,
            technologies: Some(vec!["TypeScript", "Node.js", "PostgreSQL"]),
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "web-development",
            title: "Web Development",
            description: "Fast, accessible websites and web apps built on modern stacks.",
            icon: "\u{1F4BB}",
            color: CardColor::Primary,
            features: vec![
                "Custom websites and web apps",
                "Headless CMS and e-commerce",
                "Performance and Core Web Vitals",
            ],
        },
        Service {
            id: "mobile-apps",
            title: "Mobile Apps",
            description: "Native-quality iOS and Android apps from a single codebase.",
            icon: "\u{1F4F1}",
            color: CardColor::Secondary,
            features: vec![
                "iOS and Android delivery",
                "Offline-first architecture",
                "App store launch support",
            ],
        },
        Service {
            id: "ui-ux-design",
            title: "UI/UX Design",
            description: "Research-led product design that users understand at first glance.",
            icon: "\u{1F3A8}",
            color: CardColor::Accent,
            features: vec!["User research", "Design systems", "Prototyping and testing"],
        },
        Service {
            id: "digital-marketing",
            title: "Digital Marketing",
            description: "SEO, content and paid campaigns measured against real revenue.",
            icon: "\u{1F4C8}",
            color: CardColor::Primary,
            features: vec!["Technical SEO", "Content strategy", "Paid acquisition"],
        },
        Service {
            id: "branding",
            title: "Branding",
            description: "Names, identities and voices that make a company memorable.",
            icon: "\u{2728}",
            color: CardColor::Secondary,
            features: vec!["Brand strategy", "Visual identity", "Guidelines"],
        },
        Service {
            id: "cloud-devops",
            title: "Cloud & DevOps",
            description: "Infrastructure that scales quietly and deploys on every merge.",
            icon: "\u{2601}",
            color: CardColor::Accent,
            features: vec!["Cloud migration", "CI/CD pipelines", "Monitoring"],
        },
    ]
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "starter",
            name: "Starter",
            price: "$2,900",
            period: "per project",
            description: "A polished marketing site for a new business.",
            features: vec!["Up to 5 pages", "Responsive design", "Basic SEO setup"],
            highlighted: false,
        },
        PricingPlan {
            id: "growth",
            name: "Growth",
            price: "$7,500",
            period: "per project",
            description: "Custom design and integrations for growing teams.",
            features: vec![
                "Up to 20 pages",
                "CMS integration",
                "Analytics and conversion tracking",
                "30 days of support",
            ],
            highlighted: true,
        },
        PricingPlan {
            id: "enterprise",
            name: "Enterprise",
            price: "Custom",
            period: "retainer",
            description: "A dedicated team for products that never stop shipping.",
            features: vec!["Dedicated squad", "SLA-backed support", "Quarterly roadmap reviews"],
            highlighted: false,
        },
    ]
}

pub fn job_openings() -> Vec<JobOpening> {
    vec![
        JobOpening {
            id: "senior-frontend",
            title: "Senior Frontend Engineer",
            location: "Remote (EU)",
            kind: "Full-time",
        },
        JobOpening {
            id: "product-designer",
            title: "Product Designer",
            location: "Lisbon",
            kind: "Full-time",
        },
        JobOpening {
            id: "seo-specialist",
            title: "SEO Specialist",
            location: "Remote",
            kind: "Contract",
        },
    ]
}

pub fn press_items() -> Vec<PressItem> {
    vec![
        PressItem {
            outlet: "TechWeekly",
            headline: "Ten agencies redefining digital product design",
            date: "2025-03-12",
            url: "https://techweekly.example/agencies-2025",
        },
        PressItem {
            outlet: "Design Digest",
            headline: "How Northwind rebuilt a telehealth brand in six weeks",
            date: "2024-11-02",
            url: "https://designdigest.example/northwind-kinfolk",
        },
    ]
}

pub fn case_studies() -> Vec<Resource> {
    vec![
        Resource {
            title: "Brightline: 40% more checkouts",
            summary: "How a headless rebuild cut load times in half.",
            meta: "Retail \u{00B7} 8 min read",
        },
        Resource {
            title: "Ledgerly: from prototype to 100k users",
            summary: "Shipping a regulated fintech app on a startup timeline.",
            meta: "Finance \u{00B7} 6 min read",
        },
    ]
}

pub fn guides() -> Vec<Resource> {
    vec![
        Resource {
            title: "Planning a website redesign",
            summary: "A checklist for scoping, budgeting and measuring success.",
            meta: "Guide \u{00B7} 12 min read",
        },
        Resource {
            title: "Technical SEO fundamentals",
            summary: "Structured data, crawl budgets and Core Web Vitals explained.",
            meta: "Guide \u{00B7} 9 min read",
        },
    ]
}

pub fn webinars() -> Vec<Resource> {
    vec![
        Resource {
            title: "Design systems that scale",
            summary: "Building a component library your whole company uses.",
            meta: "On demand \u{00B7} 45 min",
        },
        Resource {
            title: "Measuring marketing ROI",
            summary: "Attribution models for teams without a data department.",
            meta: "On demand \u{00B7} 38 min",
        },
    ]
}

pub fn help_articles() -> Vec<Resource> {
    vec![
        Resource {
            title: "How does a project start?",
            summary: "A discovery call, a written proposal, then a kickoff workshop.",
            meta: "Getting started",
        },
        Resource {
            title: "Who owns the code?",
            summary: "You do. Source and design files transfer on final payment.",
            meta: "Contracts",
        },
        Resource {
            title: "Do you offer maintenance?",
            summary: "Yes, monthly care plans cover updates, monitoring and small changes.",
            meta: "Support",
        },
    ]
}

pub fn find_service(id: &str) -> Option<Service> {
    services().into_iter().find(|s| s.id == id)
}

// ============================================================================
// Validation
// ============================================================================

fn is_url_safe(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn check_ids<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !is_url_safe(id) {
            return Err(ContentError::UnsafeId {
                table,
                id: id.to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_numeric_ids(
    table: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Check catalog invariants: unique URL-safe ids and non-empty tag lists.
pub fn validate() -> Result<(), ContentError> {
    let services = services();
    check_ids("service", services.iter().map(|s| s.id))?;

    let projects = projects();
    check_ids("project", projects.iter().map(|p| p.id))?;
    if let Some(p) = projects.iter().find(|p| p.tags.is_empty()) {
        return Err(ContentError::EmptyTags(p.id.to_string()));
    }

    let plans = pricing_plans();
    check_ids("pricing plan", plans.iter().map(|p| p.id))?;

    let openings = job_openings();
    check_ids("job opening", openings.iter().map(|j| j.id))?;

    check_numeric_ids("technology", technologies().iter().map(|t| t.id))?;
    check_numeric_ids("testimonial", testimonials().iter().map(|t| t.id))?;
    Ok(())
}
