//! Static site generation.
//!
//! Walks the route table, renders every concrete path through the
//! application shell, and writes the result to the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                    # /
//! ├── services/
//! │   ├── index.html                # /services
//! │   └── web-development/
//! │       └── index.html            # /services/:serviceId, one per service
//! ├── pricing/index.html            # every other static route likewise
//! ├── 404.html                      # not-found page
//! ├── style.css                     # color variables + static/style.css
//! ├── site.js                       # theme toggle, image reveal, toasts
//! ├── .page-cache.json              # write cache manifest
//! └── assets/...                    # copied from <content>/assets
//! ```
//!
//! Parameterized routes are expanded from the content catalog: a pattern
//! whose parameter has no catalog behind it produces no pages.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (colors prepended from config)
//! - `static/site.js`: client behavior

use crate::app::{App, RenderError};
use crate::cache::{CacheStats, PageCache};
use crate::config;
use crate::content;
use crate::router::{Page, RoutePattern};
use crate::theme::ThemeStorage;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render {path}: {source}")]
    Render {
        path: String,
        #[source]
        source: RenderError,
    },
    #[error("failed to copy assets: {0}")]
    Assets(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// One generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub url_path: String,
    pub file: String,
    pub label: String,
}

/// What a build produced.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    pub assets_copied: u32,
    pub pruned: u32,
    pub cache: CacheStats,
}

/// Concrete paths for a route pattern.
pub fn expand_pattern(pattern: &RoutePattern) -> Vec<String> {
    if pattern.is_static() {
        return vec![pattern.as_str().to_string()];
    }
    match pattern.as_str() {
        "/services/:serviceId" => content::services()
            .iter()
            .map(|s| format!("/services/{}", s.id))
            .collect(),
        _ => Vec::new(),
    }
}

/// Output file for a URL path: `/` → `index.html`, `/a/b` → `a/b/index.html`.
pub fn output_file(url_path: &str) -> String {
    let trimmed = url_path.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{}/index.html", trimmed)
    }
}

pub fn generate<S: ThemeStorage>(
    app: &mut App<S>,
    output_dir: &Path,
    use_cache: bool,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;
    // The old manifest is loaded even without caching so stale files
    // from the previous build are still pruned.
    let mut page_cache = PageCache::load(output_dir);
    if !use_cache {
        page_cache.forget_hashes();
    }
    let mut report = GenerateReport::default();
    let mut written: Vec<String> = Vec::new();

    let url_paths: Vec<String> = app
        .router()
        .routes()
        .iter()
        .flat_map(|route| expand_pattern(&route.pattern))
        .collect();

    for url_path in url_paths {
        let doc = app
            .render_path(&url_path)
            .map_err(|source| GenerateError::Render {
                path: url_path.clone(),
                source,
            })?;
        let file = output_file(&url_path);
        page_cache.write(
            output_dir,
            &file,
            doc.html.into_string().as_bytes(),
            &mut report.cache,
        )?;
        report.pages.push(GeneratedPage {
            label: doc.page.to_string(),
            url_path,
            file: file.clone(),
        });
        written.push(file);
    }

    let not_found = app
        .render_path("/404")
        .map_err(|source| GenerateError::Render {
            path: "/404".to_string(),
            source,
        })?;
    page_cache.write(
        output_dir,
        "404.html",
        not_found.html.into_string().as_bytes(),
        &mut report.cache,
    )?;
    report.pages.push(GeneratedPage {
        url_path: "/404".to_string(),
        file: "404.html".to_string(),
        label: Page::NotFound.to_string(),
    });
    written.push("404.html".to_string());

    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&app.config().colors),
        CSS_STATIC
    );
    page_cache.write(output_dir, "style.css", css.as_bytes(), &mut report.cache)?;
    page_cache.write(output_dir, "site.js", JS.as_bytes(), &mut report.cache)?;
    written.push("style.css".to_string());
    written.push("site.js".to_string());

    report.pruned = page_cache.prune(output_dir, &written)?;
    page_cache.save(output_dir)?;

    let assets_dir = app.content_dir().join("assets");
    if assets_dir.is_dir() {
        report.assets_copied = copy_assets(&assets_dir, &output_dir.join("assets"))?;
    }

    Ok(report)
}

/// Copy every file under `src` to the same relative path under `dst`.
fn copy_assets(src: &Path, dst: &Path) -> Result<u32, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
