use agency_site::app::App;
use agency_site::theme::{FileStorage, Theme};
use agency_site::{config, content, generate, output};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// File in the content directory holding the build-time theme choice.
const THEME_STORE: &str = ".theme.json";

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{}@{hash}", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "agency-site")]
#[command(about = "Static site generator for the agency marketing website")]
#[command(long_about = "\
Static site generator for the agency marketing website

Every route in the site's route table is rendered to plain HTML, wrapped in
the shared layout (header, footer, assistant widget), and written to the
output directory together with one stylesheet and one small script.

Content structure (all optional):

  content/
  ├── config.toml          # Site identity, SEO, theme, colors, assistant
  ├── blog/                # Markdown posts, NNN-slug.md
  │   ├── 010-launch.md
  │   └── 020-case-study.md
  └── assets/              # Copied verbatim to <output>/assets

Run 'agency-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the whole site to the output directory
    Build {
        /// Disable the page-write cache and rewrite every file
        #[arg(long)]
        no_cache: bool,
    },
    /// Print the HTML for one path
    Render {
        /// Site path, e.g. /services/branding
        path: String,
    },
    /// List the route table in match order
    Routes,
    /// Dump the content tables as JSON
    Content,
    /// Validate config and content without building
    Check,
    /// Show or set the theme pre-applied to generated pages
    Theme {
        /// light, dark or system
        value: Option<Theme>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn load_app(source: &Path) -> Result<App<FileStorage>, Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    let storage = FileStorage::open(source.join(THEME_STORE));
    Ok(App::with_theme_storage(site_config, source, storage))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { no_cache } => {
            content::validate()?;
            let mut app = load_app(&cli.source)?;
            println!("==> Generating {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&mut app, &cli.output, !no_cache)?;
            output::print_generate_output(&report, app.queries().stats());
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Render { path } => {
            let mut app = load_app(&cli.source)?;
            let doc = app.render_path(&path)?;
            println!("{}", doc.html.into_string());
        }
        Command::Routes => {
            let app = load_app(&cli.source)?;
            output::print_routes(app.router());
        }
        Command::Content => {
            let tables = serde_json::json!({
                "services": content::services(),
                "projects": content::projects(),
                "technologies": content::technologies(),
                "testimonials": content::testimonials(),
                "pricingPlans": content::pricing_plans(),
                "jobOpenings": content::job_openings(),
                "press": content::press_items(),
                "caseStudies": content::case_studies(),
                "guides": content::guides(),
                "webinars": content::webinars(),
                "helpArticles": content::help_articles(),
            });
            println!("{}", serde_json::to_string_pretty(&tables)?);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            content::validate()?;
            output::print_check_output(&site_config, &cli.source);
        }
        Command::Theme { value } => {
            let mut app = load_app(&cli.source)?;
            if let Some(theme) = value {
                app.theme_mut().set_theme(theme)?;
            }
            let controller = app.theme();
            let applied = match controller.prerender_root_class() {
                Some(class) => format!("pages render with class \"{}\"", class),
                None => "resolved by the browser".to_string(),
            };
            println!("Theme: {} ({})", controller.theme(), applied);
            println!("    Stored in: {}", cli.source.join(THEME_STORE).display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
