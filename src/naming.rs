//! Filename parsing for the `NNN-slug.md` content convention.
//!
//! Markdown files under the content directory (blog posts today) carry an
//! optional numeric prefix that orders them and a slug that names them:
//!
//! - `010-launching-our-new-site.md` → order 10, slug `launching-our-new-site`,
//!   fallback title "Launching our new site"
//! - `draft-ideas.md` → unordered (sorted last), slug `draft-ideas`

/// Result of parsing an entry filename stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName {
    /// Number prefix if present; entries without one sort after all others.
    pub order: Option<u32>,
    /// URL-safe slug: the stem with the prefix removed, lowercased.
    pub slug: String,
    /// Display title derived from the slug, used when the file has no heading.
    pub fallback_title: String,
}

impl EntryName {
    /// Sort key placing numbered entries first, in numeric order.
    pub fn sort_key(&self) -> (u32, &str) {
        (self.order.unwrap_or(u32::MAX), &self.slug)
    }
}

fn title_from_slug(slug: &str) -> String {
    let words = slug.replace(['-', '_'], " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse a filename stem following the `NNN-slug` convention.
pub fn parse_entry_name(stem: &str) -> EntryName {
    let (order, rest) = match stem.split_once('-') {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) => {
            (prefix.parse::<u32>().ok(), rest)
        }
        _ => (None, stem),
    };
    let slug = rest.to_lowercase();
    EntryName {
        order,
        fallback_title: title_from_slug(&slug),
        slug,
    }
}
