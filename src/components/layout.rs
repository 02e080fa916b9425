//! Persistent page chrome: document skeleton, header, footer, the floating
//! assistant widget, and the toast/tooltip presentation layer.
//!
//! Every route, the not-found page included, is wrapped in [`page_shell`].

use crate::config::SiteConfig;
use crate::head::DocumentHead;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Primary navigation, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Services", "/services/"),
    ("Projects", "/projects/"),
    ("Pricing", "/pricing/"),
    ("About", "/about/"),
    ("Blog", "/blog/"),
    ("Contact", "/contact/"),
];

/// Footer link columns.
pub const FOOTER_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "Company",
        &[
            ("About", "/about/"),
            ("Careers", "/careers/"),
            ("Press", "/press/"),
            ("Contact", "/contact/"),
        ],
    ),
    (
        "Resources",
        &[
            ("Blog", "/blog/"),
            ("Case Studies", "/case-studies/"),
            ("Guides", "/guides/"),
            ("Webinars", "/webinars/"),
            ("Help Center", "/help-center/"),
        ],
    ),
    (
        "Legal",
        &[
            ("Privacy Policy", "/privacy-policy/"),
            ("Terms of Service", "/terms-of-service/"),
        ],
    ),
];

/// Everything the shell needs besides the page body.
pub struct ShellContext<'a> {
    pub config: &'a SiteConfig,
    pub head: &'a DocumentHead,
    /// Normalized path of the page, for marking the current nav link.
    pub current_path: &'a str,
    /// `light`/`dark` when known at build time.
    pub root_class: Option<&'a str>,
    pub asset_version: &'a str,
}

/// Inline script run before first paint so a stored theme never flashes.
fn theme_bootstrap(storage_key: &str, default: &str) -> String {
    format!(
        "(function(){{var t;try{{t=localStorage.getItem({key})}}catch(e){{}}t=t||{default};\
         if(t==='system'){{t=matchMedia('(prefers-color-scheme: dark)').matches?'dark':'light'}}\
         var r=document.documentElement;r.classList.remove('light','dark');r.classList.add(t);}})();",
        key = serde_json::Value::from(storage_key),
        default = serde_json::Value::from(default),
    )
}

fn is_current(current_path: &str, href: &str) -> bool {
    let href = href.trim_end_matches('/');
    current_path == href || current_path.starts_with(&format!("{}/", href))
}

pub fn site_header(config: &SiteConfig, current_path: &str) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (config.site.name) }
            input.nav-toggle type="checkbox" id="nav-toggle";
            label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
            nav.site-nav {
                ul {
                    @for (label, href) in NAV_LINKS {
                        li class=[is_current(current_path, href).then_some("current")] {
                            a href=(href) { (label) }
                        }
                    }
                }
            }
            button.theme-toggle type="button" data-theme-toggle
                data-tooltip="Switch theme" aria-label="Switch theme" {
                span.theme-icon-light aria-hidden="true" { "\u{2600}" }
                span.theme-icon-dark aria-hidden="true" { "\u{263E}" }
            }
            a.header-cta href="/contact/" { "Start a project" }
        }
    }
}

pub fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            div.footer-brand {
                a.brand href="/" { (config.site.name) }
                p.footer-tagline { (config.site.description) }
                a href={ "mailto:" (config.site.contact_email) } { (config.site.contact_email) }
            }
            @for (heading, links) in FOOTER_COLUMNS {
                div.footer-column {
                    h4 { (heading) }
                    ul {
                        @for (label, href) in *links {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
            }
            div.footer-social {
                @for url in &config.site.social {
                    a href=(url) target="_blank" rel="noopener" { (social_label(url)) }
                }
            }
        }
    }
}

/// Host name without `www.` and TLD, e.g. `linkedin` for a LinkedIn URL.
fn social_label(url: &str) -> String {
    let host = url
        .split("//")
        .nth(1)
        .unwrap_or(url)
        .split('/')
        .next()
        .unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let name = host.split('.').next().unwrap_or(host);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Floating chat-assistant widget.
pub fn assistant_widget(config: &SiteConfig) -> Markup {
    html! {
        @if config.assistant.enabled {
            aside.assistant data-assistant data-state="closed" {
                button.assistant-launcher type="button" data-assistant-toggle
                    data-tooltip="Chat with us" aria-label="Open assistant" {
                    "\u{1F4AC}"
                }
                div.assistant-panel role="dialog" aria-label="Assistant" {
                    header.assistant-header {
                        span { (config.site.name) " Assistant" }
                        button.assistant-close type="button" data-assistant-toggle aria-label="Close" {
                            "\u{00D7}"
                        }
                    }
                    p.assistant-greeting { (config.assistant.greeting) }
                    ul.assistant-suggestions {
                        li { a href="/services/" { "What services do you offer?" } }
                        li { a href="/pricing/" { "How much does a project cost?" } }
                        li { a href="/contact/" { "I'd like to talk to a person" } }
                    }
                }
            }
        }
    }
}

/// Live region toasts are appended to by `site.js`.
pub fn toaster() -> Markup {
    html! {
        div #toaster.toaster role="status" aria-live="polite" {}
    }
}

/// Full HTML document: head, chrome, and the page body.
pub fn page_shell(ctx: &ShellContext<'_>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[ctx.root_class] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (ctx.head.render())
                script {
                    (PreEscaped(theme_bootstrap(
                        &ctx.config.theme.storage_key,
                        ctx.config.theme.default.as_str(),
                    )))
                }
                link rel="stylesheet" href={ "/style.css?v=" (ctx.asset_version) };
                script src={ "/site.js?v=" (ctx.asset_version) } defer
                    data-theme-key=(ctx.config.theme.storage_key)
                    data-theme-default=(ctx.config.theme.default.as_str()) {}
            }
            body {
                (site_header(ctx.config, ctx.current_path))
                main.page { (body) }
                (site_footer(ctx.config))
                (assistant_widget(ctx.config))
                (toaster())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(config: &SiteConfig, current_path: &str) -> String {
        let head = DocumentHead::new();
        let ctx = ShellContext {
            config,
            head: &head,
            current_path,
            root_class: None,
            asset_version: "test",
        };
        page_shell(&ctx, html! { p { "body" } }).into_string()
    }

    #[test]
    fn shell_wraps_body_with_chrome() {
        let html = shell(&SiteConfig::default(), "/");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("site-header"));
        assert!(html.contains("site-footer"));
        assert!(html.contains("data-assistant"));
        assert!(html.contains(r#"id="toaster""#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn current_nav_link_marked() {
        let html = site_header(&SiteConfig::default(), "/services/branding").into_string();
        assert!(html.contains(r#"<li class="current"><a href="/services/">"#));
        assert!(!html.contains(r#"<li class="current"><a href="/pricing/">"#));
    }

    #[test]
    fn assistant_can_be_disabled() {
        let mut config = SiteConfig::default();
        config.assistant.enabled = false;
        assert!(assistant_widget(&config).into_string().is_empty());
    }

    #[test]
    fn theme_bootstrap_uses_configured_key() {
        let mut config = SiteConfig::default();
        config.theme.storage_key = "my-key".to_string();
        let html = shell(&config, "/");
        assert!(html.contains(r#"localStorage.getItem("my-key")"#));
        assert!(html.contains(r#"data-theme-key="my-key""#));
    }

    #[test]
    fn root_class_applied_when_known() {
        let config = SiteConfig::default();
        let head = DocumentHead::new();
        let ctx = ShellContext {
            config: &config,
            head: &head,
            current_path: "/",
            root_class: Some("dark"),
            asset_version: "v1",
        };
        let html = page_shell(&ctx, html! {}).into_string();
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        assert!(html.contains("/style.css?v=v1"));
    }

    #[test]
    fn social_labels_from_hosts() {
        assert_eq!(social_label("https://twitter.com/acme"), "Twitter");
        assert_eq!(social_label("https://www.linkedin.com/company/acme"), "Linkedin");
        assert_eq!(social_label("github.com/acme"), "Github");
    }
}
