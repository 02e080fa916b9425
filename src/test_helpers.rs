//! Shared test utilities.
//!
//! Page renderers need a [`PageContext`]; the shell needs an [`App`]. Both
//! want a content directory that tests can populate without touching the
//! repository, so every helper hands out its own temp directory.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = with_page_ctx(|ctx| render_list(ctx).body.into_string());
//!
//! let (_tmp, mut app) = test_app();
//! let html = app.render_path("/pricing").unwrap().html.into_string();
//! assert_in_shell(&html, "/pricing");
//! ```

use crate::app::App;
use crate::config::SiteConfig;
use crate::pages::PageContext;
use crate::query::QueryClient;
use tempfile::TempDir;

/// Run `f` with a default-config page context over an empty content dir.
pub fn with_page_ctx<R>(f: impl FnOnce(&mut PageContext<'_>) -> R) -> R {
    let tmp = TempDir::new().unwrap();
    let config = SiteConfig::default();
    let mut queries = QueryClient::new();
    let mut ctx = PageContext {
        config: &config,
        queries: &mut queries,
        content_dir: tmp.path(),
    };
    f(&mut ctx)
}

/// A default-config shell over an empty content dir.
///
/// Keep the returned `TempDir` alive for as long as the app is used.
pub fn test_app() -> (TempDir, App) {
    let tmp = TempDir::new().unwrap();
    let app = App::new(SiteConfig::default(), tmp.path());
    (tmp, app)
}

/// Assert a rendered document carries the persistent layout.
pub fn assert_in_shell(html: &str, path: &str) {
    assert!(html.starts_with("<!DOCTYPE html>"), "doctype on {}", path);
    assert!(html.contains("site-header"), "header on {}", path);
    assert!(html.contains("site-footer"), "footer on {}", path);
    assert!(html.contains(r#"id="toaster""#), "toaster on {}", path);
    assert!(html.contains("data-assistant"), "assistant on {}", path);
}
