//! The document `<head>` as an explicit context object.
//!
//! Pages never write head markup directly. Components register tags on a
//! [`DocumentHead`] owned by the render call, and the layout renders it once.
//! Tags carry an identity (`name:description`, `property:og:title`,
//! `link:canonical`, ...) and [`DocumentHead::upsert`] replaces a tag with the
//! same identity in place, so applying the same input twice leaves the head
//! unchanged.

use maud::{Markup, PreEscaped, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    /// `<meta name=...>`
    Name,
    /// `<meta property=...>` (Open Graph)
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Meta {
        attr: MetaAttr,
        key: String,
        content: String,
    },
    Link {
        rel: String,
        href: String,
    },
    /// A serialized JSON-LD document.
    JsonLd(String),
}

impl HeadTag {
    pub fn name(key: &str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            attr: MetaAttr::Name,
            key: key.to_string(),
            content: content.into(),
        }
    }

    pub fn property(key: &str, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            attr: MetaAttr::Property,
            key: key.to_string(),
            content: content.into(),
        }
    }

    pub fn link(rel: &str, href: impl Into<String>) -> Self {
        HeadTag::Link {
            rel: rel.to_string(),
            href: href.into(),
        }
    }

    /// Key under which at most one tag of this kind may exist.
    pub fn identity(&self) -> String {
        match self {
            HeadTag::Meta {
                attr: MetaAttr::Name,
                key,
                ..
            } => format!("name:{}", key),
            HeadTag::Meta {
                attr: MetaAttr::Property,
                key,
                ..
            } => format!("property:{}", key),
            HeadTag::Link { rel, .. } => format!("link:{}", rel),
            HeadTag::JsonLd(_) => "jsonld".to_string(),
        }
    }

    fn render(&self) -> Markup {
        match self {
            HeadTag::Meta {
                attr: MetaAttr::Name,
                key,
                content,
            } => html! { meta name=(key) content=(content); },
            HeadTag::Meta {
                attr: MetaAttr::Property,
                key,
                content,
            } => html! { meta property=(key) content=(content); },
            HeadTag::Link { rel, href } => html! { link rel=(rel) href=(href); },
            // `</` inside a script body would end the element early
            HeadTag::JsonLd(json) => html! {
                script type="application/ld+json" { (PreEscaped(json.replace("</", "<\\/"))) }
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHead {
    title: Option<String>,
    tags: Vec<HeadTag>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Insert `tag`, replacing any tag with the same identity in place.
    pub fn upsert(&mut self, tag: HeadTag) {
        let identity = tag.identity();
        match self.tags.iter_mut().find(|t| t.identity() == identity) {
            Some(existing) => *existing = tag,
            None => self.tags.push(tag),
        }
    }

    pub fn remove(&mut self, identity: &str) {
        self.tags.retain(|t| t.identity() != identity);
    }

    pub fn get(&self, identity: &str) -> Option<&HeadTag> {
        self.tags.iter().find(|t| t.identity() == identity)
    }

    pub fn tags(&self) -> &[HeadTag] {
        &self.tags
    }

    /// Title plus every registered tag, in registration order.
    pub fn render(&self) -> Markup {
        html! {
            @if let Some(title) = &self.title {
                title { (title) }
            }
            @for tag in &self.tags {
                (tag.render())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_same_identity() {
        let mut head = DocumentHead::new();
        head.upsert(HeadTag::name("description", "first"));
        head.upsert(HeadTag::property("og:title", "Home"));
        head.upsert(HeadTag::name("description", "second"));

        assert_eq!(head.tags().len(), 2);
        assert_eq!(
            head.get("name:description"),
            Some(&HeadTag::name("description", "second"))
        );
        // position of the replaced tag is preserved
        assert_eq!(head.tags()[0].identity(), "name:description");
    }

    #[test]
    fn name_and_property_are_distinct() {
        let mut head = DocumentHead::new();
        head.upsert(HeadTag::name("title", "a"));
        head.upsert(HeadTag::property("title", "b"));
        assert_eq!(head.tags().len(), 2);
    }

    #[test]
    fn remove_by_identity() {
        let mut head = DocumentHead::new();
        head.upsert(HeadTag::link("canonical", "https://example.com/"));
        head.remove("link:canonical");
        assert!(head.tags().is_empty());
    }

    #[test]
    fn renders_title_and_tags() {
        let mut head = DocumentHead::new();
        head.set_title("Pricing");
        head.upsert(HeadTag::name("description", "Plans"));
        head.upsert(HeadTag::link("canonical", "https://example.com/pricing"));
        let html = head.render().into_string();
        assert!(html.contains("<title>Pricing</title>"));
        assert!(html.contains(r#"<meta name="description" content="Plans">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/pricing">"#));
    }

    #[test]
    fn json_ld_cannot_close_script() {
        let mut head = DocumentHead::new();
        head.upsert(HeadTag::JsonLd(r#"{"name":"</script><b>"}"#.to_string()));
        let html = head.render().into_string();
        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(r#"<\/script>"#));
    }
}
