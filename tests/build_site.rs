//! CLI tests: runs the binary against temporary content directories.
//!
//! Run with: `cargo test --test build_site`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(source: &Path, output: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_agency-site"))
        .args(args)
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(output)
        .output()
        .expect("failed to run agency-site")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn content_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[site]\nname = \"Test Agency\"\nurl = \"https://test.example\"\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("blog")).unwrap();
    fs::write(
        dir.path().join("blog/010-hello-world.md"),
        "# Hello World\n\nFirst post.\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets/logo.svg"), "<svg/>").unwrap();
    dir
}

#[test]
fn build_writes_every_route() {
    let source = content_dir();
    let out = TempDir::new().unwrap();
    let result = run(source.path(), out.path(), &["build"]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    for file in [
        "index.html",
        "services/index.html",
        "services/branding/index.html",
        "pricing/index.html",
        "contact/index.html",
        "blog/index.html",
        "projects/index.html",
        "404.html",
        "style.css",
        "site.js",
        "assets/logo.svg",
    ] {
        assert!(out.path().join(file).exists(), "missing {}", file);
    }

    let blog = fs::read_to_string(out.path().join("blog/index.html")).unwrap();
    assert!(blog.contains("Hello World"));
    let home = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(home.contains("Test Agency"));

    let text = stdout(&result);
    assert!(text.contains("==> Build complete"));
    assert!(text.contains("Assets: 1 copied"));
}

#[test]
fn second_build_is_cached() {
    let source = content_dir();
    let out = TempDir::new().unwrap();
    assert!(run(source.path(), out.path(), &["build"]).status.success());

    let second = run(source.path(), out.path(), &["build"]);
    assert!(second.status.success());
    assert!(stdout(&second).contains(" unchanged, 0 written"));

    let forced = run(source.path(), out.path(), &["build", "--no-cache"]);
    assert!(forced.status.success());
    assert!(!stdout(&forced).contains("unchanged"));
}

#[test]
fn render_prints_one_document() {
    let source = content_dir();
    let out = TempDir::new().unwrap();
    let result = run(source.path(), out.path(), &["render", "/pricing"]);
    assert!(result.status.success());

    let html = stdout(&result);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Pricing | Test Agency</title>"));
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn render_unknown_path_is_not_found() {
    let source = content_dir();
    let out = TempDir::new().unwrap();
    let html = stdout(&run(source.path(), out.path(), &["render", "/nope"]));
    assert!(html.contains("Page not found"));
    assert!(html.contains("noindex"));
}

#[test]
fn routes_listed_in_match_order() {
    let source = content_dir();
    let out = TempDir::new().unwrap();
    let text = stdout(&run(source.path(), out.path(), &["routes"]));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"001 /"));
    assert!(text.contains("/services/:serviceId (6 pages)"));
    assert!(lines.last().unwrap().ends_with("* → Not Found"));
}

#[test]
fn content_dumps_json_tables() {
    let source = content_dir();
    let out = TempDir::new().unwrap();
    let text = stdout(&run(source.path(), out.path(), &["content"]));
    let tables: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(tables["services"].as_array().unwrap().len(), 6);
    assert!(tables["pricingPlans"].is_array());
}

#[test]
fn check_rejects_unknown_keys() {
    let source = content_dir();
    let out = TempDir::new().unwrap();
    assert!(run(source.path(), out.path(), &["check"]).status.success());

    fs::write(source.path().join("config.toml"), "[site]\nnmae = \"typo\"\n").unwrap();
    let result = run(source.path(), out.path(), &["check"]);
    assert!(!result.status.success());
}

#[test]
fn theme_choice_persists_into_builds() {
    let source = content_dir();
    let out = TempDir::new().unwrap();
    let set = run(source.path(), out.path(), &["theme", "dark"]);
    assert!(set.status.success());
    assert!(stdout(&set).contains("Theme: dark"));
    assert!(source.path().join(".theme.json").exists());

    let html = stdout(&run(source.path(), out.path(), &["render", "/"]));
    assert!(html.contains(r#"<html lang="en" class="dark">"#));

    let bad = run(source.path(), out.path(), &["theme", "sepia"]);
    assert!(!bad.status.success());
}

#[test]
fn gen_config_is_loadable() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let text = stdout(&run(source.path(), out.path(), &["gen-config"]));
    fs::write(source.path().join("config.toml"), &text).unwrap();
    assert!(run(source.path(), out.path(), &["check"]).status.success());
}
