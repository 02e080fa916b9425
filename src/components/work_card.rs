//! Work card: a portfolio tile with a hover overlay and colored tags.

use super::image::OptimizedImage;
use maud::{Markup, html};

/// Tag badge classes. Index with [`tag_color_index`].
pub const TAG_PALETTE: [&str; 5] = [
    "tag-blue",
    "tag-green",
    "tag-purple",
    "tag-amber",
    "tag-rose",
];

/// Palette slot for a tag: the sum of its UTF-16 code units modulo the
/// palette size. Different tags may share a color.
pub fn tag_color_index(tag: &str) -> usize {
    let sum: u64 = tag.encode_utf16().map(u64::from).sum();
    (sum % TAG_PALETTE.len() as u64) as usize
}

pub fn tag_color(tag: &str) -> &'static str {
    TAG_PALETTE[tag_color_index(tag)]
}

pub struct WorkCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub tags: &'a [&'a str],
    pub link: Option<&'a str>,
}

impl WorkCard<'_> {
    pub fn render(&self) -> Markup {
        let image = OptimizedImage::new(self.image, self.title)
            .size(640, 400)
            .class_name("work-card-image");
        html! {
            article.work-card {
                div.work-card-media {
                    (image.render())
                    div.work-card-overlay {
                        a.work-card-link href=(self.link.unwrap_or("#")) { "View Project" }
                    }
                }
                div.work-card-body {
                    h3.work-card-title { (self.title) }
                    p.work-card-description { (self.description) }
                    ul.tag-list {
                        @for tag in self.tags {
                            li class={ "tag " (tag_color(tag)) } { (tag) }
                        }
                    }
                }
            }
        }
    }
}
