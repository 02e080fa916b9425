//! Service card: a service summary with a colored stripe and a link to its
//! detail page.

use maud::{Markup, html};
use serde::Serialize;

/// The three brand colors a card can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Primary,
    Secondary,
    Accent,
}

/// CSS classes applied to the parts of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub stripe: &'static str,
    pub icon_bg: &'static str,
    pub icon_color: &'static str,
    pub link_color: &'static str,
}

impl CardColor {
    pub fn style(self) -> CardStyle {
        match self {
            CardColor::Primary => CardStyle {
                stripe: "stripe-primary",
                icon_bg: "icon-bg-primary",
                icon_color: "text-primary",
                link_color: "link-primary",
            },
            CardColor::Secondary => CardStyle {
                stripe: "stripe-secondary",
                icon_bg: "icon-bg-secondary",
                icon_color: "text-secondary",
                link_color: "link-secondary",
            },
            CardColor::Accent => CardStyle {
                stripe: "stripe-accent",
                icon_bg: "icon-bg-accent",
                icon_color: "text-accent",
                link_color: "link-accent",
            },
        }
    }
}

pub struct ServiceCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub icon: &'a str,
    pub color: CardColor,
    /// Label of the navigation affordance.
    pub link: &'a str,
}

impl ServiceCard<'_> {
    pub fn href(&self) -> String {
        format!("/services/{}/", self.id)
    }

    pub fn render(&self) -> Markup {
        let style = self.color.style();
        html! {
            article.service-card {
                div class={ "card-stripe " (style.stripe) } {}
                div class={ "card-icon " (style.icon_bg) " " (style.icon_color) } aria-hidden="true" {
                    (self.icon)
                }
                h3.card-title { (self.title) }
                p.card-description { (self.description) }
                a class={ "card-link " (style.link_color) } href=(self.href()) {
                    (self.link) " \u{2192}"
                }
            }
        }
    }
}
