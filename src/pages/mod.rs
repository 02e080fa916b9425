//! Page bodies.
//!
//! Each renderer returns the page's [`SeoInput`] together with the markup
//! that goes inside `<main>`; the shell in [`app`](crate::app) adds the head,
//! header, footer, and widgets.

mod company;
mod contact;
mod home;
mod legal;
mod not_found;
mod pricing;
mod projects;
mod resources;
mod services;

use crate::blog::BlogError;
use crate::config::SiteConfig;
use crate::query::QueryClient;
use crate::router::Page;
use crate::seo::SeoInput;
use maud::{Markup, html};
use std::path::Path;

/// What a page renderer can reach.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub queries: &'a mut QueryClient,
    pub content_dir: &'a Path,
}

impl PageContext<'_> {
    /// Canonical URL for a site path.
    pub fn canonical(&self, path: &str) -> String {
        self.config.absolute_url(path)
    }
}

pub struct RenderedPage {
    pub seo: SeoInput,
    pub body: Markup,
    /// Set when the body is the not-found page, whatever route matched.
    pub not_found: bool,
}

impl RenderedPage {
    pub fn new(seo: SeoInput, body: Markup) -> Self {
        Self {
            seo,
            body,
            not_found: false,
        }
    }
}

pub fn render(page: &Page, ctx: &mut PageContext<'_>) -> Result<RenderedPage, BlogError> {
    Ok(match page {
        Page::Home => home::render(ctx),
        Page::Services => services::render_list(ctx),
        Page::ServiceDetail { service_id } => services::render_detail(ctx, service_id),
        Page::Pricing => pricing::render(ctx),
        Page::Contact => contact::render(ctx),
        Page::About => company::render_about(ctx),
        Page::Careers => company::render_careers(ctx),
        Page::Press => company::render_press(ctx),
        Page::Blog => resources::render_blog(ctx)?,
        Page::CaseStudies => resources::render_case_studies(ctx),
        Page::Guides => resources::render_guides(ctx),
        Page::Webinars => resources::render_webinars(ctx),
        Page::HelpCenter => resources::render_help_center(ctx),
        Page::PrivacyPolicy => legal::render_privacy(ctx),
        Page::TermsOfService => legal::render_terms(ctx),
        Page::Projects => projects::render(ctx),
        Page::NotFound => not_found::render(),
    })
}

/// Heading block shared by inner pages.
fn page_hero(eyebrow: &str, title: &str, lead: &str) -> Markup {
    html! {
        section.page-hero {
            p.eyebrow { (eyebrow) }
            h1 { (title) }
            p.lead { (lead) }
        }
    }
}

/// Closing call-to-action band.
fn cta_band(heading: &str, button: &str) -> Markup {
    html! {
        section.cta-band {
            h2 { (heading) }
            a.button.button-primary href="/contact/" { (button) }
        }
    }
}
