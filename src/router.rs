//! Path-to-page routing.
//!
//! The route table is explicit, ordered data: each [`Route`] pairs a path
//! pattern with a handler that builds the [`Page`]. [`Router::resolve`]
//! evaluates the table top to bottom, the first match wins, and anything
//! left over falls through to [`Page::NotFound`].
//!
//! Patterns are `/`-separated segments; a segment starting with `:` captures
//! one path segment under that name (`/services/:serviceId`). Matching is
//! exact: a pattern matches only paths with the same number of segments.
//!
//! Paths are normalized before matching: query and fragment are dropped and
//! a trailing slash is ignored, so `/pricing/` and `/pricing?ref=x` both
//! reach the pricing page.

use std::fmt;

/// Every page the site can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    ServiceDetail { service_id: String },
    Pricing,
    Contact,
    About,
    Blog,
    Careers,
    Press,
    PrivacyPolicy,
    TermsOfService,
    CaseStudies,
    Guides,
    Webinars,
    HelpCenter,
    Projects,
    NotFound,
}

impl Page {
    /// Human label used in navigation and build output.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Services",
            Page::ServiceDetail { .. } => "Service",
            Page::Pricing => "Pricing",
            Page::Contact => "Contact",
            Page::About => "About",
            Page::Blog => "Blog",
            Page::Careers => "Careers",
            Page::Press => "Press",
            Page::PrivacyPolicy => "Privacy Policy",
            Page::TermsOfService => "Terms of Service",
            Page::CaseStudies => "Case Studies",
            Page::Guides => "Guides",
            Page::Webinars => "Webinars",
            Page::HelpCenter => "Help Center",
            Page::Projects => "Projects",
            Page::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::ServiceDetail { service_id } => write!(f, "Service ({})", service_id),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed path pattern such as `/services/:serviceId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Values captured by `:name` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Drop query and fragment, ensure a leading slash, drop a trailing slash.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let joined = split_segments(&path[..end]).collect::<Vec<_>>().join("/");
    format!("/{}", joined)
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Self {
        let segments = split_segments(raw)
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern has no `:param` segments.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Match a normalized path, returning captured params.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push((name.clone(), part.to_string())),
            }
        }
        Some(Params(params))
    }
}

pub struct Route {
    pub pattern: RoutePattern,
    handler: fn(&Params) -> Page,
}

impl Route {
    pub fn new(pattern: &str, handler: fn(&Params) -> Page) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            handler,
        }
    }
}

pub struct Router {
    routes: Vec<Route>,
    fallback: fn() -> Page,
}

impl Router {
    pub fn new(routes: Vec<Route>, fallback: fn() -> Page) -> Self {
        Self { routes, fallback }
    }

    /// The site's route table.
    pub fn site() -> Self {
        Self::new(
            vec![
                Route::new("/", |_| Page::Home),
                Route::new("/services", |_| Page::Services),
                Route::new("/services/:serviceId", |p| Page::ServiceDetail {
                    service_id: p.get("serviceId").unwrap_or_default().to_string(),
                }),
                Route::new("/pricing", |_| Page::Pricing),
                Route::new("/contact", |_| Page::Contact),
                Route::new("/about", |_| Page::About),
                Route::new("/blog", |_| Page::Blog),
                Route::new("/careers", |_| Page::Careers),
                Route::new("/press", |_| Page::Press),
                Route::new("/privacy-policy", |_| Page::PrivacyPolicy),
                Route::new("/terms-of-service", |_| Page::TermsOfService),
                Route::new("/case-studies", |_| Page::CaseStudies),
                Route::new("/guides", |_| Page::Guides),
                Route::new("/webinars", |_| Page::Webinars),
                Route::new("/help-center", |_| Page::HelpCenter),
                Route::new("/projects", |_| Page::Projects),
            ],
            || Page::NotFound,
        )
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// First matching route wins; no match yields the fallback page.
    pub fn resolve(&self, path: &str) -> Page {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find_map(|route| {
                route
                    .pattern
                    .matches(&path)
                    .map(|params| (route.handler)(&params))
            })
            .unwrap_or_else(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared() -> Vec<(&'static str, Page)> {
        vec![
            ("/", Page::Home),
            ("/services", Page::Services),
            ("/pricing", Page::Pricing),
            ("/contact", Page::Contact),
            ("/about", Page::About),
            ("/blog", Page::Blog),
            ("/careers", Page::Careers),
            ("/press", Page::Press),
            ("/privacy-policy", Page::PrivacyPolicy),
            ("/terms-of-service", Page::TermsOfService),
            ("/case-studies", Page::CaseStudies),
            ("/guides", Page::Guides),
            ("/webinars", Page::Webinars),
            ("/help-center", Page::HelpCenter),
            ("/projects", Page::Projects),
        ]
    }

    #[test]
    fn every_declared_path_resolves_to_its_page() {
        let router = Router::site();
        for (path, page) in declared() {
            assert_eq!(router.resolve(path), page, "path {}", path);
        }
        assert_eq!(
            router.resolve("/services/branding"),
            Page::ServiceDetail {
                service_id: "branding".to_string()
            }
        );
    }

    #[test]
    fn table_has_sixteen_routes_plus_fallback() {
        assert_eq!(Router::site().routes().len(), 16);
    }

    #[test]
    fn undeclared_paths_fall_through() {
        let router = Router::site();
        for path in ["/nope", "/services/branding/extra", "/Pricing", "/blog/post-1"] {
            assert_eq!(router.resolve(path), Page::NotFound, "path {}", path);
        }
    }

    #[test]
    fn trailing_slash_query_and_fragment_ignored() {
        let router = Router::site();
        assert_eq!(router.resolve("/pricing/"), Page::Pricing);
        assert_eq!(router.resolve("/pricing?plan=growth"), Page::Pricing);
        assert_eq!(router.resolve("/contact#form"), Page::Contact);
        assert_eq!(router.resolve(""), Page::Home);
    }

    #[test]
    fn first_match_wins() {
        let router = Router::new(
            vec![
                Route::new("/services/featured", |_| Page::Home),
                Route::new("/services/:serviceId", |p| Page::ServiceDetail {
                    service_id: p.get("serviceId").unwrap_or_default().to_string(),
                }),
            ],
            || Page::NotFound,
        );
        assert_eq!(router.resolve("/services/featured"), Page::Home);
        assert!(matches!(
            router.resolve("/services/other"),
            Page::ServiceDetail { .. }
        ));
    }

    #[test]
    fn pattern_captures_params() {
        let pattern = RoutePattern::parse("/a/:x/b/:y");
        let params = pattern.matches("/a/1/b/2").unwrap();
        assert_eq!(params.get("x"), Some("1"));
        assert_eq!(params.get("y"), Some("2"));
        assert_eq!(params.get("z"), None);
        assert!(!pattern.is_static());
        assert!(RoutePattern::parse("/pricing").is_static());
    }

    #[test]
    fn normalize_collapses_slashes() {
        assert_eq!(normalize_path("//services///web/"), "/services/web");
        assert_eq!(normalize_path("/"), "/");
    }
}
