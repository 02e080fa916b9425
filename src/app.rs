//! Application shell.
//!
//! [`App`] is created once per process and owns the providers every page
//! shares: the data-fetch cache, the theme controller, and the route table.
//! [`App::render_path`] resolves a path, renders the page body, applies its
//! SEO to a fresh [`DocumentHead`], and wraps the result in the persistent
//! layout.

use crate::blog::BlogError;
use crate::components::layout::{ShellContext, page_shell};
use crate::config::SiteConfig;
use crate::head::{DocumentHead, HeadTag};
use crate::pages::{self, PageContext};
use crate::query::QueryClient;
use crate::router::{Page, Router, normalize_path};
use crate::seo::Seo;
use crate::theme::{FixedPreference, MemoryStorage, ResolvedTheme, ThemeController, ThemeStorage};
use maud::Markup;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Build-specific suffix for `style.css` and `site.js` URLs.
pub const ASSET_VERSION: &str = env!("ASSET_VERSION");

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to load blog posts: {0}")]
    Blog(#[from] BlogError),
}

/// A rendered route.
pub struct RenderedDocument {
    pub page: Page,
    pub head: DocumentHead,
    pub html: Markup,
}

pub struct App<S = MemoryStorage> {
    config: SiteConfig,
    router: Router,
    queries: QueryClient,
    theme: ThemeController<S, FixedPreference>,
    content_dir: PathBuf,
}

impl App {
    pub fn new(config: SiteConfig, content_dir: impl Into<PathBuf>) -> Self {
        Self::with_theme_storage(config, content_dir, MemoryStorage::default())
    }
}

impl<S: ThemeStorage> App<S> {
    /// Shell whose theme controller starts from `storage`.
    ///
    /// At build time there is no browser to ask for a color-scheme
    /// preference, so `System` resolves to light and is left for `site.js`.
    pub fn with_theme_storage(
        config: SiteConfig,
        content_dir: impl Into<PathBuf>,
        storage: S,
    ) -> Self {
        let theme = ThemeController::new(
            storage,
            FixedPreference(ResolvedTheme::Light),
            &config.theme.storage_key,
            config.theme.default,
        );
        Self {
            config,
            router: Router::site(),
            queries: QueryClient::new(),
            theme,
            content_dir: content_dir.into(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn queries(&self) -> &QueryClient {
        &self.queries
    }

    pub fn queries_mut(&mut self) -> &mut QueryClient {
        &mut self.queries
    }

    pub fn theme(&self) -> &ThemeController<S, FixedPreference> {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeController<S, FixedPreference> {
        &mut self.theme
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Render the full document for `path`.
    pub fn render_path(&mut self, path: &str) -> Result<RenderedDocument, RenderError> {
        let page = self.router.resolve(path);
        let mut ctx = PageContext {
            config: &self.config,
            queries: &mut self.queries,
            content_dir: &self.content_dir,
        };
        let rendered = pages::render(&page, &mut ctx)?;

        let mut head = DocumentHead::new();
        Seo::apply(&rendered.seo, &self.config, &mut head);
        if rendered.not_found {
            head.upsert(HeadTag::name("robots", "noindex"));
        }

        let current_path = normalize_path(path);
        let shell = ShellContext {
            config: &self.config,
            head: &head,
            current_path: &current_path,
            root_class: self.theme.prerender_root_class(),
            asset_version: ASSET_VERSION,
        };
        let html = page_shell(&shell, rendered.body);
        Ok(RenderedDocument { page, head, html })
    }
}
