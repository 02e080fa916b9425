use super::{PageContext, RenderedPage, cta_band, not_found, page_hero};
use crate::components::service_card::ServiceCard;
use crate::content::{self, Service};
use crate::seo::SeoInput;
use maud::html;
use serde_json::json;

fn card(service: &Service) -> ServiceCard<'_> {
    ServiceCard {
        id: service.id,
        title: service.title,
        description: service.description,
        icon: service.icon,
        color: service.color,
        link: "Learn more",
    }
}

pub(super) fn render_list(ctx: &mut PageContext<'_>) -> RenderedPage {
    let services = content::services();
    let body = html! {
        (page_hero(
            "Services",
            "Everything you need to launch and grow",
            "Strategy, design, engineering and marketing under one roof.",
        ))
        section.services-list {
            div.card-grid {
                @for service in &services {
                    (card(service).render())
                }
            }
        }
        (cta_band("Not sure where to start?", "Book a free consultation"))
    };
    let seo = SeoInput::new(
        "Our Services",
        "Web development, mobile apps, UI/UX design, digital marketing, branding and cloud services.",
    )
    .keywords(services.iter().map(|s| s.title))
    .canonical(ctx.canonical("/services/"));
    RenderedPage::new(seo, body)
}

/// Detail page for one service; unknown ids get the not-found body.
pub(super) fn render_detail(ctx: &mut PageContext<'_>, service_id: &str) -> RenderedPage {
    let Some(service) = content::find_service(service_id) else {
        return not_found::render();
    };
    let style = service.color.style();
    let others: Vec<Service> = content::services()
        .into_iter()
        .filter(|s| s.id != service.id)
        .take(3)
        .collect();

    let body = html! {
        section.page-hero.service-hero {
            div class={ "card-icon " (style.icon_bg) " " (style.icon_color) } aria-hidden="true" {
                (service.icon)
            }
            p.eyebrow { a href="/services/" { "Services" } }
            h1 { (service.title) }
            p.lead { (service.description) }
        }
        section.service-features {
            h2 { "What's included" }
            ul.feature-list {
                @for feature in &service.features {
                    li { (feature) }
                }
            }
        }
        section.related-services {
            h2 { "Related services" }
            div.card-grid {
                @for other in &others {
                    (card(other).render())
                }
            }
        }
        (cta_band(&format!("Ready to talk about {}?", service.title.to_lowercase()), "Get a quote"))
    };

    let path = format!("/services/{}/", service.id);
    let seo = SeoInput::new(service.title, service.description)
        .keywords(service.features.iter().copied())
        .canonical(ctx.canonical(&path))
        .schema(json!({
            "@type": "Service",
            "name": service.title,
            "serviceType": service.title,
            "provider": {
                "@type": "ProfessionalService",
                "name": ctx.config.site.name,
            },
        }));
    RenderedPage::new(seo, body)
}
