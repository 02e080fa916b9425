//! Blog posts.
//!
//! Posts come from `<content>/blog/*.md` when that directory exists and from
//! a built-in set otherwise. Files follow the `NNN-slug.md` convention (see
//! [`naming`](crate::naming)); the first `# heading` is the title and the
//! first paragraph after it is the excerpt.

use crate::naming::parse_entry_name;
use crate::query::QueryKey;
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub order: Option<u32>,
    pub excerpt: String,
    /// Rendered HTML of the body, heading excluded.
    pub body_html: String,
}

/// Cache key under which the post list is stored.
pub fn posts_query_key() -> QueryKey {
    QueryKey::new(["posts"])
}

fn markdown_to_html(markdown: &str) -> String {
    let mut html = String::new();
    md_html::push_html(&mut html, Parser::new(markdown));
    html
}

/// Build a post from a filename stem and its markdown source.
pub fn parse_post(stem: &str, markdown: &str) -> BlogPost {
    let name = parse_entry_name(stem);
    let mut title = None;
    let mut body_lines = Vec::new();
    for line in markdown.lines() {
        if title.is_none()
            && body_lines.iter().all(|l: &&str| l.trim().is_empty())
            && let Some(heading) = line.trim().strip_prefix("# ")
        {
            title = Some(heading.trim().to_string());
            continue;
        }
        body_lines.push(line);
    }
    let body = body_lines.join("\n");
    let excerpt = body
        .split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .find(|p| !p.is_empty() && !p.starts_with('#'))
        .unwrap_or_default();

    BlogPost {
        title: title.unwrap_or(name.fallback_title.clone()),
        order: name.order,
        slug: name.slug,
        excerpt,
        body_html: markdown_to_html(&body),
    }
}

/// Read posts from `<content_dir>/blog`, falling back to [`built_in_posts`].
///
/// Numbered posts come first in numeric order; unnumbered posts follow,
/// sorted by slug.
pub fn load_posts(content_dir: &Path) -> Result<Vec<BlogPost>, BlogError> {
    let blog_dir = content_dir.join("blog");
    if !blog_dir.is_dir() {
        return Ok(built_in_posts());
    }
    let io_err = |path: &Path| {
        let path = path.display().to_string();
        move |source: std::io::Error| BlogError::Io { path, source }
    };

    let mut posts = Vec::new();
    for entry in fs::read_dir(&blog_dir).map_err(io_err(&blog_dir))? {
        let path = entry.map_err(io_err(&blog_dir))?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let markdown = fs::read_to_string(&path).map_err(io_err(&path))?;
        posts.push((parse_entry_name(stem), parse_post(stem, &markdown)));
    }
    posts.sort_by(|(a, _), (b, _)| a.sort_key().cmp(&b.sort_key()));
    Ok(posts.into_iter().map(|(_, post)| post).collect())
}

pub fn built_in_posts() -> Vec<BlogPost> {
    [
        (
            "010-why-site-speed-matters",
            "# Why site speed matters\n\nEvery extra second of load time costs conversions. \
             Here is how we budget performance from the first sketch.\n\n\
             ## Budgets, not afterthoughts\n\nWe set a weight budget per page and fail the build when it is exceeded.",
        ),
        (
            "020-design-systems-for-small-teams",
            "# Design systems for small teams\n\nYou do not need a platform team to benefit \
             from shared components. Start with tokens and three primitives.",
        ),
        (
            "030-structured-data-primer",
            "# A structured data primer\n\nJSON-LD tells search engines who you are. \
             A few lines of markup can earn richer results.",
        ),
    ]
    .iter()
    .map(|(stem, markdown)| parse_post(stem, markdown))
    .collect()
}
