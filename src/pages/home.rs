use super::{PageContext, RenderedPage, cta_band};
use crate::components::image::OptimizedImage;
use crate::components::service_card::ServiceCard;
use crate::components::work_card::WorkCard;
use crate::content::{self, Testimonial};
use crate::seo::SeoInput;
use maud::{Markup, html};

const HERO_IMAGE: &str = "https://images.northwind.digital/hero/studio.jpg";

/// Dispatched once the hero image is revealed; `site.js` marks the hero ready.
pub const HERO_LOADED_EVENT: &str = "hero:loaded";

fn testimonial(t: &Testimonial) -> Markup {
    let stars = "\u{2605}".repeat(usize::from(t.rating.get()));
    html! {
        figure.testimonial {
            @if let Some(video) = t.video_url {
                a.testimonial-video href=(video) data-tooltip="Watch the video" {
                    (OptimizedImage::new(t.thumbnail_url, t.name).size(320, 180).render())
                }
            }
            blockquote { (t.quote) }
            p.rating aria-label={ "Rated " (t.rating) } { (stars) }
            figcaption {
                (OptimizedImage::new(t.avatar_url, t.name)
                    .size(48, 48)
                    .class_name("avatar")
                    .render())
                span.testimonial-name { (t.name) }
                span.testimonial-role { (t.position) ", " (t.company) }
            }
        }
    }
}

pub(super) fn render(ctx: &mut PageContext<'_>) -> RenderedPage {
    let config = ctx.config;
    let services = content::services();
    let projects = content::projects();

    let body = html! {
        section.hero {
            div.hero-copy {
                p.eyebrow { (config.site.name) }
                h1 { "We design and build digital products people love" }
                p.lead { (config.site.description) }
                div.hero-actions {
                    a.button.button-primary href="/contact/" { "Start a project" }
                    a.button.button-ghost href="/projects/" { "See our work" }
                }
            }
            (OptimizedImage::new(HERO_IMAGE, "Our team at work")
                .size(1200, 800)
                .class_name("hero-image")
                .priority(true)
                .on_load(HERO_LOADED_EVENT)
                .render())
        }
        section.home-services {
            h2 { "What we do" }
            div.card-grid {
                @for service in services.iter().take(3) {
                    (ServiceCard {
                        id: service.id,
                        title: service.title,
                        description: service.description,
                        icon: service.icon,
                        color: service.color,
                        link: "Learn more",
                    }.render())
                }
            }
            a.section-link href="/services/" { "All services \u{2192}" }
        }
        section.home-work {
            h2 { "Selected work" }
            div.work-grid {
                @for project in &projects {
                    (WorkCard {
                        title: project.title,
                        description: project.description,
                        image: project.image,
                        tags: &project.tags,
                        link: Some("/projects/"),
                    }.render())
                }
            }
        }
        section.technologies {
            h2 { "Technologies we trust" }
            ul.logo-strip {
                @for tech in content::technologies() {
                    li data-tooltip=(tech.name) {
                        img src=(tech.logo_url) alt=(tech.name) width="48" height="48" loading="lazy";
                    }
                }
            }
        }
        section.testimonials {
            h2 { "What clients say" }
            div.testimonial-grid {
                @for t in content::testimonials() {
                    (testimonial(&t))
                }
            }
        }
        (cta_band("Have a project in mind?", "Let's talk"))
    };

    let seo = SeoInput::new(
        "Digital Agency for Web, Mobile & Brand",
        config.site.description.clone(),
    )
    .canonical(ctx.canonical("/"));
    RenderedPage::new(seo, body)
}
