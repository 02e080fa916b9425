//! Per-page search and social metadata.
//!
//! [`Seo::apply`] turns a page's [`SeoInput`] into head tags: title,
//! description, keywords, canonical link, Open Graph, Twitter card, and one
//! JSON-LD block describing the agency as a `ProfessionalService`.
//!
//! ## Share image
//!
//! Pages without an explicit `og_image` get a generated one from the image
//! service: `{seo.og_image_base}/{slug}`, where the slug is the lowercased
//! title with each whitespace run replaced by `-`, percent-encoded like
//! JavaScript's `encodeURIComponent`.
//!
//! ## Structured data
//!
//! The JSON-LD payload starts from [`default_schema`] and the page's `schema`
//! object is merged over it one level deep: a key present in both takes the
//! page's value wholesale, nested objects are not merged.

use crate::config::SiteConfig;
use crate::head::{DocumentHead, HeadTag};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value, json};

/// Characters `encodeURIComponent` leaves alone, besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
pub struct SeoInput {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Fields merged over the default structured data.
    pub schema: Option<Map<String, Value>>,
    pub canonical_url: Option<String>,
    pub og_type: String,
    pub og_image: Option<String>,
    pub twitter_card: String,
}

impl SeoInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            keywords: Vec::new(),
            schema: None,
            canonical_url: None,
            og_type: "website".to_string(),
            og_image: None,
            twitter_card: "summary_large_image".to_string(),
        }
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn og_type(mut self, og_type: &str) -> Self {
        self.og_type = og_type.to_string();
        self
    }

    pub fn og_image(mut self, url: impl Into<String>) -> Self {
        self.og_image = Some(url.into());
        self
    }

    /// Override structured-data fields. Non-object values are ignored.
    pub fn schema(mut self, schema: Value) -> Self {
        if let Value::Object(map) = schema {
            self.schema = Some(map);
        }
        self
    }
}

/// Lowercase and replace every whitespace run with a single `-`.
pub fn slugify(title: &str) -> String {
    // Whole-string lowercasing handles context-sensitive forms (final sigma).
    let lower = title.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

/// Generated share image for a title.
pub fn og_image_url(og_image_base: &str, title: &str) -> String {
    format!(
        "{}/{}",
        og_image_base.trim_end_matches('/'),
        utf8_percent_encode(&slugify(title), URI_COMPONENT)
    )
}

/// Organization identity every page's structured data starts from.
pub fn default_schema(config: &SiteConfig, description: &str, url: &str) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org"));
    schema.insert("@type".into(), json!("ProfessionalService"));
    schema.insert("name".into(), json!(config.site.name));
    schema.insert("description".into(), json!(description));
    schema.insert("url".into(), json!(url));
    schema.insert("logo".into(), json!(config.site.logo));
    schema.insert("sameAs".into(), json!(config.site.social));
    schema
}

/// Top-level merge; `overrides` wins on key collision.
pub fn merge_schema(
    mut base: Map<String, Value>,
    overrides: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
    base
}

pub struct Seo;

impl Seo {
    /// Write the page's metadata into `head`. Idempotent for equal input.
    pub fn apply(input: &SeoInput, config: &SiteConfig, head: &mut DocumentHead) {
        let page_url = input
            .canonical_url
            .clone()
            .unwrap_or_else(|| config.site.url.clone());
        let image = input
            .og_image
            .clone()
            .unwrap_or_else(|| og_image_url(&config.seo.og_image_base, &input.title));

        head.set_title(format!("{} | {}", input.title, config.site.name));
        head.upsert(HeadTag::name("description", &input.description));
        let keywords = if input.keywords.is_empty() {
            &config.seo.keywords
        } else {
            &input.keywords
        };
        // optional tags a page omits are removed so the previous page's
        // values never linger
        if keywords.is_empty() {
            head.remove("name:keywords");
        } else {
            head.upsert(HeadTag::name("keywords", keywords.join(", ")));
        }
        match &input.canonical_url {
            Some(canonical) => head.upsert(HeadTag::link("canonical", canonical)),
            None => head.remove("link:canonical"),
        }

        head.upsert(HeadTag::property("og:title", &input.title));
        head.upsert(HeadTag::property("og:description", &input.description));
        head.upsert(HeadTag::property("og:type", &input.og_type));
        head.upsert(HeadTag::property("og:url", &page_url));
        head.upsert(HeadTag::property("og:image", &image));

        head.upsert(HeadTag::name("twitter:card", &input.twitter_card));
        head.upsert(HeadTag::name("twitter:title", &input.title));
        head.upsert(HeadTag::name("twitter:description", &input.description));
        head.upsert(HeadTag::name("twitter:image", &image));

        let schema = merge_schema(
            default_schema(config, &input.description, &page_url),
            input.schema.as_ref(),
        );
        head.upsert(HeadTag::JsonLd(Value::Object(schema).to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::MetaAttr;

    fn json_ld(head: &DocumentHead) -> Value {
        match head.get("jsonld") {
            Some(HeadTag::JsonLd(json)) => serde_json::from_str(json).unwrap(),
            other => panic!("expected JSON-LD tag, got {:?}", other),
        }
    }

    fn meta_content<'a>(head: &'a DocumentHead, identity: &str) -> &'a str {
        match head.get(identity) {
            Some(HeadTag::Meta { content, .. }) => content,
            other => panic!("expected meta {}, got {:?}", identity, other),
        }
    }

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Our Services"), "our-services");
        assert_eq!(slugify("Web   Design\tTips"), "web-design-tips");
        assert_eq!(slugify(" Lead"), "-lead");
        // word-final capital sigma lowers to final sigma, medial to sigma
        assert_eq!(
            slugify("\u{39F}\u{394}\u{39F}\u{3A3} \u{3A4}\u{395}\u{3A3}\u{3A4}"),
            "\u{3BF}\u{3B4}\u{3BF}\u{3C2}-\u{3C4}\u{3B5}\u{3C3}\u{3C4}"
        );
    }

    #[test]
    fn default_image_is_encoded_slug() {
        let config = SiteConfig::default();
        let mut head = DocumentHead::new();
        Seo::apply(
            &SeoInput::new("Pricing & Plans?", "What it costs"),
            &config,
            &mut head,
        );
        let expected = format!("{}/pricing-%26-plans%3F", config.seo.og_image_base);
        assert_eq!(meta_content(&head, "property:og:image"), expected);
        assert_eq!(meta_content(&head, "name:twitter:image"), expected);
    }

    #[test]
    fn og_image_url_keeps_unreserved_marks() {
        assert_eq!(
            og_image_url("https://og.example/", "Rock 'n' Roll (Live)!"),
            "https://og.example/rock-'n'-roll-(live)!"
        );
        assert_eq!(og_image_url("https://og.example", "Caf\u{e9}"), "https://og.example/caf%C3%A9");
    }

    #[test]
    fn explicit_image_wins() {
        let mut head = DocumentHead::new();
        Seo::apply(
            &SeoInput::new("Home", "Welcome").og_image("https://cdn.example/share.png"),
            &SiteConfig::default(),
            &mut head,
        );
        assert_eq!(
            meta_content(&head, "property:og:image"),
            "https://cdn.example/share.png"
        );
    }

    #[test]
    fn schema_override_replaces_existing_key() {
        let mut head = DocumentHead::new();
        let input = SeoInput::new("About", "Who we are").schema(json!({"name": "Northwind Labs"}));
        Seo::apply(&input, &SiteConfig::default(), &mut head);
        let ld = json_ld(&head);
        assert_eq!(ld["name"], "Northwind Labs");
        assert_eq!(ld["@type"], "ProfessionalService");
    }

    #[test]
    fn schema_override_adds_new_key_and_keeps_defaults() {
        let config = SiteConfig::default();
        let mut head = DocumentHead::new();
        let input = SeoInput::new("Contact", "Say hello").schema(json!({"telephone": "+1-555-0100"}));
        Seo::apply(&input, &config, &mut head);
        let ld = json_ld(&head);

        assert_eq!(ld["telephone"], "+1-555-0100");
        let defaults = default_schema(&config, "Say hello", &config.site.url);
        for (key, value) in &defaults {
            assert_eq!(&ld[key], value, "default key {} changed", key);
        }
    }

    #[test]
    fn schema_merge_is_shallow() {
        let base = json!({"address": {"city": "Lisbon", "country": "PT"}});
        let overrides = json!({"address": {"city": "Porto"}});
        let merged = merge_schema(
            base.as_object().unwrap().clone(),
            overrides.as_object(),
        );
        assert_eq!(Value::Object(merged), json!({"address": {"city": "Porto"}}));
    }

    #[test]
    fn apply_is_idempotent() {
        let config = SiteConfig::default();
        let input = SeoInput::new("Blog", "News")
            .keywords(["news", "updates"])
            .canonical("https://northwind.digital/blog");
        let mut head = DocumentHead::new();
        Seo::apply(&input, &config, &mut head);
        let once = head.clone();
        Seo::apply(&input, &config, &mut head);
        assert_eq!(head, once);
        let json_ld_count = head
            .tags()
            .iter()
            .filter(|t| matches!(t, HeadTag::JsonLd(_)))
            .count();
        assert_eq!(json_ld_count, 1);
    }

    #[test]
    fn optional_tags_do_not_linger() {
        let config = SiteConfig::default();
        let mut head = DocumentHead::new();
        Seo::apply(
            &SeoInput::new("Blog", "News").canonical("https://northwind.digital/blog"),
            &config,
            &mut head,
        );
        assert!(head.get("link:canonical").is_some());

        Seo::apply(&SeoInput::new("Press", "Coverage"), &config, &mut head);
        assert!(head.get("link:canonical").is_none());
        assert_eq!(meta_content(&head, "property:og:url"), config.site.url);
    }

    #[test]
    fn keywords_fall_back_to_site_defaults() {
        let config = SiteConfig::default();
        let mut head = DocumentHead::new();
        Seo::apply(&SeoInput::new("Home", "Welcome"), &config, &mut head);
        assert_eq!(
            meta_content(&head, "name:keywords"),
            config.seo.keywords.join(", ")
        );

        Seo::apply(
            &SeoInput::new("Home", "Welcome").keywords(["rust"]),
            &config,
            &mut head,
        );
        assert_eq!(meta_content(&head, "name:keywords"), "rust");
    }

    #[test]
    fn writes_open_graph_and_twitter_blocks() {
        let mut head = DocumentHead::new();
        Seo::apply(
            &SeoInput::new("Careers", "Join us").og_type("article"),
            &SiteConfig::default(),
            &mut head,
        );
        assert_eq!(head.title(), Some("Careers | Northwind Digital"));
        assert_eq!(meta_content(&head, "property:og:type"), "article");
        assert_eq!(meta_content(&head, "name:twitter:card"), "summary_large_image");
        let og_count = head
            .tags()
            .iter()
            .filter(|t| matches!(t, HeadTag::Meta { attr: MetaAttr::Property, .. }))
            .count();
        assert_eq!(og_count, 5);
    }
}
