//! Blog and the resource library pages.

use super::{PageContext, RenderedPage, page_hero};
use crate::blog::{self, BlogError, BlogPost};
use crate::content::{self, Resource};
use crate::seo::SeoInput;
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

fn resource_grid(items: &[Resource]) -> Markup {
    html! {
        div.resource-grid {
            @for item in items {
                article.resource-card {
                    p.resource-meta { (item.meta) }
                    h3 { (item.title) }
                    p { (item.summary) }
                }
            }
        }
    }
}

fn post_article(post: &BlogPost) -> Markup {
    html! {
        article.blog-post id=(post.slug) {
            header {
                h2 { a href={ "#" (post.slug) } { (post.title) } }
                @if !post.excerpt.is_empty() {
                    p.excerpt { (post.excerpt) }
                }
            }
            details {
                summary { "Read more" }
                div.post-body { (PreEscaped(&post.body_html)) }
            }
        }
    }
}

/// Blog index. Posts are read through the shared query cache.
pub(super) fn render_blog(ctx: &mut PageContext<'_>) -> Result<RenderedPage, BlogError> {
    let content_dir = ctx.content_dir;
    let posts: Vec<BlogPost> = ctx
        .queries
        .fetch_query(&blog::posts_query_key(), || blog::load_posts(content_dir))?;

    let body = html! {
        (page_hero("Blog", "Notes from the studio", "Ideas on design, engineering and growth."))
        section.blog-list {
            @if posts.is_empty() {
                p.empty { "No posts yet." }
            }
            @for post in &posts {
                (post_article(post))
            }
        }
    };

    let entries: Vec<Value> = posts
        .iter()
        .map(|p| json!({ "@type": "BlogPosting", "headline": p.title, "abstract": p.excerpt }))
        .collect();
    let seo = SeoInput::new("Blog", "Articles on web development, design and digital marketing.")
        .canonical(ctx.canonical("/blog/"))
        .schema(json!({ "@type": "Blog", "blogPost": entries }));
    Ok(RenderedPage::new(seo, body))
}

pub(super) fn render_case_studies(ctx: &mut PageContext<'_>) -> RenderedPage {
    let body = html! {
        (page_hero("Case Studies", "Results, not just deliverables", "How our clients grew with us."))
        section { (resource_grid(&content::case_studies())) }
    };
    let seo = SeoInput::new("Case Studies", "In-depth stories of projects and the results they delivered.")
        .canonical(ctx.canonical("/case-studies/"));
    RenderedPage::new(seo, body)
}

pub(super) fn render_guides(ctx: &mut PageContext<'_>) -> RenderedPage {
    let body = html! {
        (page_hero("Guides", "Practical guides", "Step-by-step advice from our team."))
        section { (resource_grid(&content::guides())) }
    };
    let seo = SeoInput::new("Guides", "Free guides on planning, building and promoting digital products.")
        .canonical(ctx.canonical("/guides/"));
    RenderedPage::new(seo, body)
}

pub(super) fn render_webinars(ctx: &mut PageContext<'_>) -> RenderedPage {
    let body = html! {
        (page_hero("Webinars", "Learn with us", "Recorded sessions you can watch any time."))
        section { (resource_grid(&content::webinars())) }
    };
    let seo = SeoInput::new("Webinars", "On-demand webinars about design, development and marketing.")
        .canonical(ctx.canonical("/webinars/"));
    RenderedPage::new(seo, body)
}

pub(super) fn render_help_center(ctx: &mut PageContext<'_>) -> RenderedPage {
    let articles = content::help_articles();
    let body = html! {
        (page_hero("Help Center", "How can we help?", "Answers to the questions clients ask most."))
        section.faq {
            @for article in &articles {
                details.faq-item {
                    summary { (article.title) }
                    p { (article.summary) }
                    p.resource-meta { (article.meta) }
                }
            }
        }
        p.help-contact { "Still stuck? " a href="/contact/" { "Contact us" } "." }
    };
    let questions: Vec<Value> = articles
        .iter()
        .map(|a| {
            json!({
                "@type": "Question",
                "name": a.title,
                "acceptedAnswer": { "@type": "Answer", "text": a.summary },
            })
        })
        .collect();
    let seo = SeoInput::new("Help Center", "Frequently asked questions about working with us.")
        .canonical(ctx.canonical("/help-center/"))
        .schema(json!({ "@type": "FAQPage", "mainEntity": questions }));
    RenderedPage::new(seo, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::query::QueryClient;
    use crate::test_helpers::with_page_ctx;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn blog_posts_are_fetched_once() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig::default();
        let mut queries = QueryClient::new();
        for _ in 0..2 {
            let mut ctx = PageContext {
                config: &config,
                queries: &mut queries,
                content_dir: tmp.path(),
            };
            render_blog(&mut ctx).unwrap();
        }
        assert_eq!(queries.stats().fetches, 1);
        assert_eq!(queries.stats().hits, 1);
    }

    #[test]
    fn blog_renders_posts_from_content_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("blog")).unwrap();
        fs::write(
            tmp.path().join("blog/001-hello.md"),
            "# Hello there\n\nShort intro.\n\n**Bold** body.",
        )
        .unwrap();
        let config = SiteConfig::default();
        let mut queries = QueryClient::new();
        let mut ctx = PageContext {
            config: &config,
            queries: &mut queries,
            content_dir: tmp.path(),
        };
        let html = render_blog(&mut ctx).unwrap().body.into_string();
        assert!(html.contains(r#"id="hello""#));
        assert!(html.contains("Hello there"));
        assert!(html.contains("<strong>Bold</strong>"));
    }

    #[test]
    fn help_center_schema_is_faq() {
        let schema = with_page_ctx(render_help_center).seo.schema.unwrap();
        assert_eq!(schema["@type"], "FAQPage");
        assert_eq!(
            schema["mainEntity"].as_array().unwrap().len(),
            content::help_articles().len()
        );
    }
}
