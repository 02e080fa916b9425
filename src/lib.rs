//! # Agency Site
//!
//! The public marketing website of a digital agency, rendered to static
//! HTML. A fixed route table maps paths to pages; pages are composed from a
//! handful of presentational components and static content tables; a small
//! script adds the client-side behavior (theme toggle, image reveal,
//! assistant widget, toasts).
//!
//! # Architecture
//!
//! ```text
//! CLI → config → App (providers) → Router → page → components
//!                                                     ↓
//!                       generate: every route → dist/
//! ```
//!
//! Composition is one-directional: components know nothing about pages,
//! pages know nothing about the router.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Application shell: owns the query cache and theme controller, renders any path inside the layout |
//! | [`router`] | Ordered path-pattern table, first match wins, not-found fallback |
//! | [`pages`] | One renderer per page, each returning its SEO input and body |
//! | [`components`] | Service card, work card, optimized image, page layout |
//! | [`seo`] | Per-page meta tags and JSON-LD written into a [`head::DocumentHead`] |
//! | [`head`] | Document head as an explicit, keyed context object |
//! | [`content`] | Static content tables (services, projects, testimonials, ...) |
//! | [`blog`] | Markdown blog posts, loaded through the query cache |
//! | [`query`] | Keyed data-fetch cache shared by every page |
//! | [`theme`] | Light/dark/system theme with injected storage and environment |
//! | [`generate`] | Walks the route table and writes the static site |
//! | [`cache`] | Page-write cache: skips rewriting unchanged files |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`naming`] | `NNN-slug` filename convention parser |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped, and there is no template directory to ship.
//!
//! ## Injected Context Instead of Globals
//!
//! Page metadata goes into a [`head::DocumentHead`] passed by `&mut`, and
//! the theme lives in a [`theme::ThemeController`] generic over its storage
//! and color-scheme source. Rendering never touches ambient state, so tests
//! drive both with in-memory implementations.
//!
//! ## Image Variants by Convention
//!
//! Every image URL `U` is assumed to be served as `U?avif` and `U?webp` by an
//! external image service. The generator never encodes images.

pub mod app;
pub mod blog;
pub mod cache;
pub mod components;
pub mod config;
pub mod content;
pub mod generate;
pub mod head;
pub mod naming;
pub mod output;
pub mod pages;
pub mod query;
pub mod router;
pub mod seo;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
