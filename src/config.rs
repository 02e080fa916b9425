//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The stock defaults
//! describe a complete site; a user `config.toml` in the content directory
//! overrides only the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Northwind Digital"
//! url = "https://northwind.digital"
//! description = "..."
//! logo = "https://northwind.digital/logo.png"
//! contact_email = "hello@northwind.digital"
//! social = ["https://twitter.com/northwinddigital", ...]
//!
//! [seo]
//! og_image_base = "https://og.northwind.digital/api/og"
//! keywords = ["digital agency", "web development"]
//!
//! [theme]
//! storage_key = "agency-ui-theme"   # localStorage key for the theme choice
//! default = "system"                # light | dark | system
//!
//! [colors.light]
//! background = "#ffffff"
//! ...
//!
//! [assistant]
//! enabled = true
//! greeting = "Hi! How can we help?"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Organization identity used in the header, footer and structured data.
    pub site: SiteIdentity,
    /// Search/social metadata defaults.
    pub seo: SeoConfig,
    /// Theme persistence settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Floating assistant widget.
    pub assistant: AssistantConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.site.url.starts_with("https://") || self.site.url.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "site.url must be an absolute http(s) URL".into(),
            ));
        }
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.seo.og_image_base.trim().is_empty() {
            return Err(ConfigError::Validation(
                "seo.og_image_base must not be empty".into(),
            ));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "theme.storage_key must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Absolute URL for a site path, without a doubled slash.
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.site.url.trim_end_matches('/');
        if path == "/" {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }
}

/// Organization identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteIdentity {
    pub name: String,
    /// Canonical origin, e.g. `https://northwind.digital`.
    pub url: String,
    pub description: String,
    pub logo: String,
    pub contact_email: String,
    /// Social profile URLs, emitted as `sameAs` in JSON-LD.
    pub social: Vec<String>,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "Northwind Digital".to_string(),
            url: "https://northwind.digital".to_string(),
            description: "Northwind Digital is a full-service digital agency building websites, \
                          apps and brands that grow businesses."
                .to_string(),
            logo: "https://northwind.digital/logo.png".to_string(),
            contact_email: "hello@northwind.digital".to_string(),
            social: vec![
                "https://twitter.com/northwinddigital".to_string(),
                "https://www.linkedin.com/company/northwind-digital".to_string(),
                "https://github.com/northwind-digital".to_string(),
            ],
        }
    }
}

/// Search and social metadata defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoConfig {
    /// Image service base path; pages without an explicit image get
    /// `{og_image_base}/{slugified title}`.
    pub og_image_base: String,
    /// Keywords added to every page that does not declare its own.
    pub keywords: Vec<String>,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            og_image_base: "https://og.northwind.digital/api/og".to_string(),
            keywords: vec![
                "digital agency".to_string(),
                "web development".to_string(),
                "ui/ux design".to_string(),
            ],
        }
    }
}

/// Theme persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Client storage key holding the visitor's choice.
    pub storage_key: String,
    /// Theme used when nothing is stored yet.
    pub default: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "agency-ui-theme".to_string(),
            default: Theme::System,
        }
    }
}

/// Floating assistant widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    pub enabled: bool,
    pub greeting: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            greeting: "Hi there! Looking for help with a project? Ask us anything.".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary copy, captions, footer links.
    pub text_muted: String,
    pub border: String,
    /// Brand accents behind the `primary`/`secondary`/`accent` card colors.
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
            primary: "#2563eb".to_string(),
            secondary: "#7c3aed".to_string(),
            accent: "#f97316".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#020617".to_string(),
            text: "#f8fafc".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#1e293b".to_string(),
            primary: "#3b82f6".to_string(),
            secondary: "#8b5cf6".to_string(),
            accent: "#fb923c".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory, layered over the
/// stock defaults and validated.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Agency Site Configuration
# =========================
# All settings are optional. Values shown below are the defaults.
# Place this file at <content>/config.toml. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Organization identity (header, footer, JSON-LD)
# ---------------------------------------------------------------------------
[site]
name = "Northwind Digital"
url = "https://northwind.digital"
description = "Northwind Digital is a full-service digital agency building websites, apps and brands that grow businesses."
logo = "https://northwind.digital/logo.png"
contact_email = "hello@northwind.digital"
social = [
    "https://twitter.com/northwinddigital",
    "https://www.linkedin.com/company/northwind-digital",
    "https://github.com/northwind-digital",
]

# ---------------------------------------------------------------------------
# Search and social previews
# ---------------------------------------------------------------------------
[seo]
# Pages without an explicit share image use <og_image_base>/<slugified-title>.
og_image_base = "https://og.northwind.digital/api/og"
keywords = ["digital agency", "web development", "ui/ux design"]

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Browser storage key holding the visitor's choice.
storage_key = "agency-ui-theme"
# One of: light, dark, system (follow the operating system).
default = "system"

# ---------------------------------------------------------------------------
# Colors - Light mode
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#0f172a"
text_muted = "#64748b"
border = "#e2e8f0"
primary = "#2563eb"
secondary = "#7c3aed"
accent = "#f97316"

# ---------------------------------------------------------------------------
# Colors - Dark mode (applied under the `dark` class on <html>)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#020617"
text = "#f8fafc"
text_muted = "#94a3b8"
border = "#1e293b"
primary = "#3b82f6"
secondary = "#8b5cf6"
accent = "#fb923c"

# ---------------------------------------------------------------------------
# Floating assistant widget
# ---------------------------------------------------------------------------
[assistant]
enabled = true
greeting = "Hi there! Looking for help with a project? Ask us anything."
"##
}

fn scheme_variables(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-primary", &scheme.primary),
        ("--color-secondary", &scheme.secondary),
        ("--color-accent", &scheme.accent),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from color config.
///
/// Light values live on `:root`; dark values apply when the theme controller
/// puts the `dark` class on the document root.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n{}\n}}\n\n:root.dark {{\n{}\n}}",
        scheme_variables(&colors.light, "    "),
        scheme_variables(&colors.dark, "    "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn default_theme_follows_system() {
        let config = SiteConfig::default();
        assert_eq!(config.theme.default, Theme::System);
        assert_eq!(config.theme.storage_key, "agency-ui-theme");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
primary = "#ff0000"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.light.primary, "#ff0000");
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.colors.dark.background, "#020617");
        assert_eq!(config.site.name, "Northwind Digital");
    }

    #[test]
    fn parse_theme_default() {
        let config: SiteConfig = toml::from_str("[theme]\ndefault = \"dark\"\n").unwrap();
        assert_eq!(config.theme.default, Theme::Dark);
    }

    #[test]
    fn invalid_theme_value_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[theme]\ndefault = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn absolute_url_joins_without_double_slash() {
        let mut config = SiteConfig::default();
        config.site.url = "https://example.com/".to_string();
        assert_eq!(config.absolute_url("/"), "https://example.com/");
        assert_eq!(config.absolute_url("/pricing"), "https://example.com/pricing");
        assert_eq!(config.absolute_url("about"), "https://example.com/about");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.url, "https://northwind.digital");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[site]
name = "Acme Studio"
url = "https://acme.studio"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.name, "Acme Studio");
        assert_eq!(config.site.url, "https://acme.studio");
        // untouched keys keep their defaults
        assert_eq!(config.site.contact_email, "hello@northwind.digital");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[site]\nurl = \"northwind.digital\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[site]\nnmae = \"x\"\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[seoo]\nkeywords = []\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_empty_storage_key() {
        let mut config = SiteConfig::default();
        config.theme.storage_key = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("storage_key"));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("social = [\"a\", \"b\"]").unwrap();
        let overlay: toml::Value = toml::from_str("social = [\"c\"]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("social").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // stock config / CSS
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site.name, defaults.site.name);
        assert_eq!(config.site.description, defaults.site.description);
        assert_eq!(config.site.social, defaults.site.social);
        assert_eq!(config.seo.og_image_base, defaults.seo.og_image_base);
        assert_eq!(config.theme.default, Theme::System);
        assert_eq!(config.colors.dark.accent, defaults.colors.dark.accent);
        assert_eq!(config.assistant.greeting, defaults.assistant.greeting);
    }

    #[test]
    fn color_css_scopes_dark_under_root_class() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains(":root {"));
        assert!(css.contains(":root.dark {"));
        assert!(css.contains("--color-bg: #ffffff;"));
        assert!(css.contains("--color-bg: #020617;"));
        assert!(css.contains("--color-accent:"));
    }
}
