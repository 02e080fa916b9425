use super::{PageContext, RenderedPage, cta_band, page_hero};
use crate::components::work_card::WorkCard;
use crate::content::{self, ProjectDetail};
use crate::seo::SeoInput;
use maud::{Markup, html};
use serde_json::{Value, json};

fn project_entry(project: &ProjectDetail) -> Markup {
    let link = format!("#{}", project.id);
    html! {
        div.project id=(project.id) {
            (WorkCard {
                title: project.title,
                description: project.description,
                image: project.image,
                tags: &project.tags,
                link: Some(&link),
            }.render())
            @if project.industry.is_some() || project.technologies.is_some() {
                dl.project-facts {
                    @if let Some(industry) = project.industry {
                        dt { "Industry" }
                        dd { (industry) }
                    }
                    @if let Some(technologies) = &project.technologies {
                        dt { "Stack" }
                        dd { (technologies.join(", ")) }
                    }
                }
            }
        }
    }
}

pub(super) fn render(ctx: &mut PageContext<'_>) -> RenderedPage {
    let projects = content::projects();
    let body = html! {
        (page_hero(
            "Projects",
            "Work we're proud of",
            "A selection of products we've designed, built and grown with our clients.",
        ))
        section.work-grid {
            @for project in &projects {
                (project_entry(project))
            }
        }
        (cta_band("Your project could be next", "Start a project"))
    };

    let works: Vec<Value> = projects
        .iter()
        .map(|p| json!({ "@type": "CreativeWork", "name": p.title, "keywords": p.tags }))
        .collect();
    let seo = SeoInput::new("Our Work", "Case studies and projects across web, mobile and brand.")
        .keywords(projects.iter().flat_map(|p| p.tags.iter().copied()))
        .canonical(ctx.canonical("/projects/"))
        .schema(json!({ "hasPart": works }));
    RenderedPage::new(seo, body)
}
