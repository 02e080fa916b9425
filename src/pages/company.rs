//! About, careers, and press.

use super::{PageContext, RenderedPage, cta_band, page_hero};
use crate::content;
use crate::seo::SeoInput;
use maud::html;

const VALUES: &[(&str, &str)] = &[
    ("Craft", "We sweat the details users notice and the ones they don't."),
    ("Candor", "Honest estimates, early warnings, no jargon."),
    ("Outcomes", "We measure success in your metrics, not ours."),
];

pub(super) fn render_about(ctx: &mut PageContext<'_>) -> RenderedPage {
    let config = ctx.config;
    let body = html! {
        (page_hero(
            "About",
            &format!("We are {}", config.site.name),
            &config.site.description,
        ))
        section.values {
            h2 { "What we value" }
            div.card-grid {
                @for (name, text) in VALUES {
                    article.value-card {
                        h3 { (name) }
                        p { (text) }
                    }
                }
            }
        }
        section.stats {
            dl {
                div { dt { "Projects shipped" } dd { "120+" } }
                div { dt { "Team members" } dd { "24" } }
                div { dt { "Average client rating" } dd { "4.9/5" } }
            }
        }
        (cta_band("Want to work with us?", "Say hello"))
    };
    let seo = SeoInput::new(
        "About Us",
        format!("Meet the team behind {}.", config.site.name),
    )
    .canonical(ctx.canonical("/about/"));
    RenderedPage::new(seo, body)
}

pub(super) fn render_careers(ctx: &mut PageContext<'_>) -> RenderedPage {
    let openings = content::job_openings();
    let body = html! {
        (page_hero(
            "Careers",
            "Build the web with us",
            "Remote-friendly, four-day focus weeks, and a learning budget that gets used.",
        ))
        section.openings {
            h2 { "Open positions" }
            @if openings.is_empty() {
                p.empty { "No open positions right now. Check back soon." }
            } @else {
                ul.opening-list {
                    @for job in &openings {
                        li.opening id=(job.id) {
                            h3 { (job.title) }
                            p.opening-meta { (job.location) " \u{00B7} " (job.kind) }
                            a href={ "mailto:" (ctx.config.site.contact_email) "?subject=" (job.title) } {
                                "Apply"
                            }
                        }
                    }
                }
            }
        }
    };
    let seo = SeoInput::new("Careers", "Join our team of designers, engineers and marketers.")
        .canonical(ctx.canonical("/careers/"));
    RenderedPage::new(seo, body)
}

pub(super) fn render_press(ctx: &mut PageContext<'_>) -> RenderedPage {
    let body = html! {
        (page_hero(
            "Press",
            "In the news",
            "Coverage, awards and media resources.",
        ))
        section.press-list {
            @for item in content::press_items() {
                article.press-item {
                    p.press-meta {
                        span.outlet { (item.outlet) }
                        " \u{00B7} "
                        time datetime=(item.date) { (item.date) }
                    }
                    h3 { a href=(item.url) target="_blank" rel="noopener" { (item.headline) } }
                }
            }
        }
        section.press-contact {
            h2 { "Media inquiries" }
            p { a href={ "mailto:" (ctx.config.site.contact_email) } { (ctx.config.site.contact_email) } }
        }
    };
    let seo = SeoInput::new("Press", "News coverage and media resources.")
        .canonical(ctx.canonical("/press/"));
    RenderedPage::new(seo, body)
}
