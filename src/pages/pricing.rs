use super::{PageContext, RenderedPage, cta_band, page_hero};
use crate::content::{self, PricingPlan};
use crate::seo::SeoInput;
use maud::{Markup, html};
use serde_json::{Value, json};

fn plan_card(plan: &PricingPlan) -> Markup {
    let class = if plan.highlighted {
        "pricing-card pricing-card-highlighted"
    } else {
        "pricing-card"
    };
    html! {
        article class=(class) {
            @if plan.highlighted {
                span.badge { "Most popular" }
            }
            h3 { (plan.name) }
            p.price {
                span.amount { (plan.price) }
                @if !plan.period.is_empty() {
                    span.period { " / " (plan.period) }
                }
            }
            p.plan-description { (plan.description) }
            ul.feature-list {
                @for feature in &plan.features {
                    li { (feature) }
                }
            }
            a.button.button-primary href={ "/contact/?plan=" (plan.id) } { "Choose " (plan.name) }
        }
    }
}

pub(super) fn render(ctx: &mut PageContext<'_>) -> RenderedPage {
    let plans = content::pricing_plans();
    let body = html! {
        (page_hero(
            "Pricing",
            "Simple plans for every stage",
            "Fixed-scope packages or a dedicated team. No surprises on the invoice.",
        ))
        section.pricing-grid {
            @for plan in &plans {
                (plan_card(plan))
            }
        }
        (cta_band("Need something custom?", "Talk to sales"))
    };

    let offers: Vec<Value> = plans
        .iter()
        .map(|p| json!({ "@type": "Offer", "name": p.name, "price": p.price }))
        .collect();
    let seo = SeoInput::new(
        "Pricing",
        "Transparent pricing for websites, apps and ongoing digital growth.",
    )
    .canonical(ctx.canonical("/pricing/"))
    .schema(json!({ "makesOffer": offers }));
    RenderedPage::new(seo, body)
}
