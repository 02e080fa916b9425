//! CLI output formatting.
//!
//! Output is information-first: every line leads with what the user knows
//! (page label, route), and file paths follow as context.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 001 Home → index.html
//! 002 Services → services/index.html
//! 003 Service (web-development) → services/web-development/index.html
//! ...
//! 023 Not Found → 404.html
//!
//! Generated 23 pages
//! Cache: 12 unchanged, 13 written (25 total)
//! Assets: 4 copied
//! ```
//!
//! ## Routes
//!
//! ```text
//! 001 /
//! 002 /services
//! 003 /services/:serviceId (6 pages)
//! ...
//! 017 * → Not Found
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::generate::{GenerateReport, expand_pattern};
use crate::query::QueryStats;
use crate::router::{Page, Router};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

pub fn format_generate_output(report: &GenerateReport, queries: QueryStats) -> Vec<String> {
    let mut lines: Vec<String> = report
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| format!("{} {} → {}", format_index(i + 1), page.label, page.file))
        .collect();

    lines.push(String::new());
    lines.push(format!("Generated {}", plural(report.pages.len(), "page")));
    lines.push(format!("Cache: {}", report.cache));
    if report.pruned > 0 {
        lines.push(format!("Removed {}", plural(report.pruned as usize, "stale file")));
    }
    if report.assets_copied > 0 {
        lines.push(format!("Assets: {} copied", report.assets_copied));
    }
    if queries.fetches + queries.hits + queries.failures > 0 {
        lines.push(format!("Data: {}", queries));
    }
    lines
}

pub fn print_generate_output(report: &GenerateReport, queries: QueryStats) {
    for line in format_generate_output(report, queries) {
        println!("{}", line);
    }
}

/// The route table in match order, with the fallback last.
pub fn format_routes(router: &Router) -> Vec<String> {
    let mut lines: Vec<String> = router
        .routes()
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let pattern = route.pattern.as_str();
            if route.pattern.is_static() {
                format!("{} {}", format_index(i + 1), pattern)
            } else {
                let pages = expand_pattern(&route.pattern).len();
                format!("{} {} ({})", format_index(i + 1), pattern, plural(pages, "page"))
            }
        })
        .collect();
    lines.push(format!(
        "{} * → {}",
        format_index(router.routes().len() + 1),
        Page::NotFound
    ));
    lines
}

pub fn print_routes(router: &Router) {
    for line in format_routes(router) {
        println!("{}", line);
    }
}

/// Summary printed by `check` after config and content validate.
pub fn format_check_output(config: &SiteConfig, source: &std::path::Path) -> Vec<String> {
    vec![
        format!("Config OK: {} ({})", config.site.name, config.site.url),
        format!("    Source: {}", source.display()),
        format!(
            "    Theme: {} (stored under \"{}\")",
            config.theme.default, config.theme.storage_key
        ),
        format!(
            "Content OK: {}, {}, {}",
            plural(crate::content::services().len(), "service"),
            plural(crate::content::projects().len(), "project"),
            plural(crate::content::testimonials().len(), "testimonial"),
        ),
    ]
}

pub fn print_check_output(config: &SiteConfig, source: &std::path::Path) {
    for line in format_check_output(config, source) {
        println!("{}", line);
    }
}
