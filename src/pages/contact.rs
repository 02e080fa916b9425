use super::{PageContext, RenderedPage, page_hero};
use crate::content;
use crate::seo::SeoInput;
use maud::html;
use serde_json::json;

/// Toast shown by `site.js` when the form is submitted.
pub const SUBMIT_TOAST: &str = "Thanks for reaching out! We'll reply within one business day.";

pub(super) fn render(ctx: &mut PageContext<'_>) -> RenderedPage {
    let config = ctx.config;
    let body = html! {
        (page_hero(
            "Contact",
            "Tell us about your project",
            "Share a few details and we'll get back to you with next steps.",
        ))
        section.contact-layout {
            form.contact-form data-contact-form data-toast=(SUBMIT_TOAST) novalidate {
                label {
                    span { "Name" }
                    input type="text" name="name" autocomplete="name" required;
                }
                label {
                    span { "Email" }
                    input type="email" name="email" autocomplete="email" required;
                }
                label {
                    span { "Company" }
                    input type="text" name="company" autocomplete="organization";
                }
                label {
                    span { "Plan" }
                    select name="plan" {
                        option value="" { "Not sure yet" }
                        @for plan in content::pricing_plans() {
                            option value=(plan.id) { (plan.name) }
                        }
                    }
                }
                label {
                    span { "Service" }
                    select name="service" {
                        option value="" { "Any" }
                        @for service in content::services() {
                            option value=(service.id) { (service.title) }
                        }
                    }
                }
                label.full-width {
                    span { "Message" }
                    textarea name="message" rows="6" required {}
                }
                button.button.button-primary type="submit" { "Send message" }
            }
            aside.contact-details {
                h2 { "Other ways to reach us" }
                p {
                    a href={ "mailto:" (config.site.contact_email) } data-tooltip="Opens your mail app" {
                        (config.site.contact_email)
                    }
                }
                p { "Mon\u{2013}Fri, 9:00\u{2013}18:00 CET" }
            }
        }
    };

    let seo = SeoInput::new(
        "Contact Us",
        "Get in touch to discuss your website, app or marketing project.",
    )
    .canonical(ctx.canonical("/contact/"))
    .schema(json!({
        "contactPoint": {
            "@type": "ContactPoint",
            "email": config.site.contact_email,
            "contactType": "sales",
        }
    }));
    RenderedPage::new(seo, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::test_helpers::with_page_ctx;

    #[test]
    fn form_carries_toast_message() {
        let config = SiteConfig::default();
        let page = with_page_ctx(render);
        let html = page.body.into_string();
        assert!(html.contains("data-contact-form"));
        assert!(html.contains("data-toast=\"Thanks for reaching out!"));
        assert!(html.contains(r#"<option value="growth">Growth</option>"#));
        assert_eq!(
            page.seo.schema.unwrap()["contactPoint"]["email"],
            config.site.contact_email.as_str()
        );
    }
}
