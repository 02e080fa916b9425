//! Optimized image: a sized placeholder that gives way to a multi-format
//! `<picture>` once the image has loaded.
//!
//! ## Format variants
//!
//! The image service behind every `src` serves alternate encodings selected
//! by a query marker. For a base URL `U` the picture offers, in preference
//! order:
//!
//! ```text
//! <source type="image/avif" srcset="U?avif">
//! <source type="image/webp" srcset="U?webp">
//! <img src="U">
//! ```
//!
//! ## Reveal
//!
//! The wrapper starts in `data-state="loading"` with the placeholder shown.
//! `static/site.js` moves it to `loaded` or `error` exactly once, on the
//! fallback `<img>`'s first load or error event, whichever format the browser
//! picked. When an `on_load` event name is set, the `loaded` transition
//! dispatches that event (bubbling) from the wrapper, once.

use maud::{Markup, html};

pub fn avif_variant(src: &str) -> String {
    format!("{}?avif", src)
}

pub fn webp_variant(src: &str) -> String {
    format!("{}?webp", src)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    /// Every candidate failed; the placeholder stays in place.
    Failed,
}

impl LoadState {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadState::Pending => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizedImage<'a> {
    pub src: &'a str,
    pub alt: &'a str,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub class_name: Option<&'a str>,
    /// Fetch eagerly instead of when the image nears the viewport.
    pub priority: bool,
    /// DOM event dispatched from the wrapper once the image has loaded.
    pub on_load: Option<&'a str>,
}

impl<'a> OptimizedImage<'a> {
    pub fn new(src: &'a str, alt: &'a str) -> Self {
        Self {
            src,
            alt,
            width: None,
            height: None,
            class_name: None,
            priority: false,
            on_load: None,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    pub fn on_load(mut self, event: &'a str) -> Self {
        self.on_load = Some(event);
        self
    }

    fn placeholder_style(&self) -> Option<String> {
        let mut style = String::new();
        if let Some(w) = self.width {
            style.push_str(&format!("width: {}px;", w));
        }
        if let Some(h) = self.height {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(&format!("height: {}px;", h));
        }
        (!style.is_empty()).then_some(style)
    }

    pub fn render(&self) -> Markup {
        let loading = if self.priority { "eager" } else { "lazy" };
        let class = match self.class_name {
            Some(c) => format!("optimized-image {}", c),
            None => "optimized-image".to_string(),
        };
        html! {
            div class=(class) data-state=(LoadState::Pending.as_str()) data-onload=[self.on_load] {
                div.image-placeholder style=[self.placeholder_style()] aria-hidden="true" {}
                picture {
                    source type="image/avif" srcset=(avif_variant(self.src));
                    source type="image/webp" srcset=(webp_variant(self.src));
                    img src=(self.src) alt=(self.alt)
                        width=[self.width] height=[self.height]
                        loading=(loading)
                        fetchpriority=[self.priority.then_some("high")]
                        decoding="async"
                        data-reveal;
                }
            }
        }
    }
}
