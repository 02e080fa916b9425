//! Privacy policy and terms of service, written in markdown.

use super::{PageContext, RenderedPage, page_hero};
use crate::seo::SeoInput;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

const LAST_UPDATED: &str = "2025-01-15";

const PRIVACY_POLICY: &str = "\
## What we collect

When you use the contact form we receive the name, email address, company and
message you enter. We do not use tracking cookies.

## How we use it

- To reply to your inquiry
- To prepare a proposal you asked for

We never sell personal data.

## Your preferences

The site remembers your light or dark theme choice in your browser's local
storage. It is never sent to us.

## Contact

Write to {email} to access or delete your data.
";

const TERMS_OF_SERVICE: &str = "\
## Use of this site

Content on this site is provided for general information. Case studies
describe past results and are not a guarantee of future outcomes.

## Intellectual property

Text, graphics and code on this site belong to {name} unless stated otherwise.

## Engagements

Client work is governed by a separate signed agreement, which takes precedence
over these terms.

## Questions

Contact {email}.
";

fn render_markdown(markdown: &str) -> Markup {
    let mut html = String::new();
    md_html::push_html(&mut html, Parser::new_ext(markdown, Options::ENABLE_TABLES));
    PreEscaped(html)
}

fn legal_body(ctx: &PageContext<'_>, title: &str, template: &str) -> Markup {
    let markdown = template
        .replace("{email}", &ctx.config.site.contact_email)
        .replace("{name}", &ctx.config.site.name);
    html! {
        (page_hero("Legal", title, &format!("Last updated {}", LAST_UPDATED)))
        article.legal-text { (render_markdown(&markdown)) }
    }
}

pub(super) fn render_privacy(ctx: &mut PageContext<'_>) -> RenderedPage {
    let body = legal_body(ctx, "Privacy Policy", PRIVACY_POLICY);
    let seo = SeoInput::new("Privacy Policy", "How we collect, use and protect your information.")
        .canonical(ctx.canonical("/privacy-policy/"));
    RenderedPage::new(seo, body)
}

pub(super) fn render_terms(ctx: &mut PageContext<'_>) -> RenderedPage {
    let body = legal_body(ctx, "Terms of Service", TERMS_OF_SERVICE);
    let seo = SeoInput::new("Terms of Service", "The terms that govern use of this website.")
        .canonical(ctx.canonical("/terms-of-service/"));
    RenderedPage::new(seo, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::test_helpers::with_page_ctx;

    #[test]
    fn markdown_rendered_with_site_details() {
        let config = SiteConfig::default();
        let html = with_page_ctx(|ctx| render_terms(ctx).body.into_string());
        assert!(html.contains("<h2>Intellectual property</h2>"));
        assert!(html.contains(&config.site.name));
        assert!(html.contains(&config.site.contact_email));
        assert!(!html.contains("{email}"));
    }
}
