use super::RenderedPage;
use crate::seo::SeoInput;
use maud::html;

pub(super) fn render() -> RenderedPage {
    let body = html! {
        section.not-found {
            p.eyebrow { "404" }
            h1 { "Page not found" }
            p.lead { "The page you're looking for doesn't exist or has moved." }
            div.hero-actions {
                a.button.button-primary href="/" { "Back to home" }
                a.button.button-ghost href="/contact/" { "Contact us" }
            }
        }
    };
    RenderedPage {
        seo: SeoInput::new("Page Not Found", "The page you requested could not be found."),
        body,
        not_found: true,
    }
}
