//! Subcommand implementations.

use anyhow::{Context, Result};
use maintainme_site::{PLANS, Plan, RenderOptions, Theme, render_page};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::SiteConfig;

/// Resolved inputs for `maintainme render`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Document options passed to the renderer.
    pub options: RenderOptions,
    /// Destination file; `None` means stdout.
    pub output: Option<PathBuf>,
}

impl RenderPlan {
    /// Merge command-line flags over the config file.
    pub fn resolve(config: SiteConfig, theme: Option<Theme>, out: Option<PathBuf>) -> Self {
        Self {
            options: RenderOptions {
                theme: theme.unwrap_or(config.render.theme),
                metadata: config.site,
            },
            output: out.or(config.render.output),
        }
    }
}

/// Pre-render the page and write it to the plan's destination.
pub fn render(plan: &RenderPlan, stdout: &mut impl Write) -> Result<()> {
    let html = render_page(&plan.options);

    match &plan.output {
        Some(path) => {
            write_file(path, &html)?;
            info!(
                theme = %plan.options.theme,
                bytes = html.len(),
                "wrote {}",
                path.display()
            );
        }
        None => {
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Print the plan catalogue, human-readable or as JSON.
pub fn plans(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let payload = serde_json::to_string_pretty(&PLANS).context("Failed to encode plans")?;
        writeln!(out, "{payload}")?;
        return Ok(());
    }

    for (idx, plan) in PLANS.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        write_plan(plan, out)?;
    }
    Ok(())
}

fn write_plan(plan: &Plan, out: &mut impl Write) -> Result<()> {
    let marker = if plan.tier.is_premium() {
        " (recommended)"
    } else {
        ""
    };
    writeln!(out, "{}{}: {}{}", plan.name, marker, plan.price, plan.billing)?;
    writeln!(out, "  {}", plan.description)?;
    if let Some(note) = plan.note {
        writeln!(out, "  {note}")?;
    }
    for feature in plan.features {
        writeln!(out, "  - {feature}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use maintainme_site::SiteMetadata;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn flags_override_config() {
        let config = SiteConfig {
            site: SiteMetadata::default(),
            render: RenderConfig {
                theme: Theme::Light,
                output: Some(PathBuf::from("config.html")),
            },
        };

        let from_config = RenderPlan::resolve(config.clone(), None, None);
        assert_eq!(from_config.options.theme, Theme::Light);
        assert_eq!(from_config.output, Some(PathBuf::from("config.html")));

        let from_flags =
            RenderPlan::resolve(config, Some(Theme::Dark), Some(PathBuf::from("flag.html")));
        assert_eq!(from_flags.options.theme, Theme::Dark);
        assert_eq!(from_flags.output, Some(PathBuf::from("flag.html")));
    }

    #[test]
    fn render_to_stdout_buffer() {
        let plan = RenderPlan::resolve(SiteConfig::default(), None, None);
        let mut buf = Vec::new();
        render(&plan, &mut buf).expect("render");
        let html = String::from_utf8(buf).expect("utf8");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("MaintainME Basic"));
    }

    #[test]
    fn render_creates_parent_directories() {
        let temp = TempDir::new().expect("temp dir");
        let target = temp.path().join("dist/site/index.html");
        let plan = RenderPlan::resolve(
            SiteConfig::default(),
            Some(Theme::Light),
            Some(target.clone()),
        );

        let mut stdout = Vec::new();
        render(&plan, &mut stdout).expect("render");

        assert!(stdout.is_empty());
        let html = std::fs::read_to_string(&target).expect("read output");
        assert!(html.contains("page bg-white"));
    }

    #[test]
    fn plans_human_output_lists_features_in_order() {
        let mut buf = Vec::new();
        plans(false, &mut buf).expect("plans");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.starts_with("MaintainME Basic: $249/acre/year\n"));
        assert!(text.contains("MaintainME Premium (recommended): $59/acre/month"));
        let first = text.find("Annual blade replacement included").expect("basic feature");
        let last = text.find("Pay-as-you-go service model").expect("basic feature");
        assert!(first < last);
    }

    #[test]
    fn plans_json_output_parses() {
        let mut buf = Vec::new();
        plans(true, &mut buf).expect("plans");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        let names: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|p| p["name"].as_str())
            .collect();
        assert_eq!(names, vec!["MaintainME Basic", "MaintainME Premium"]);
    }
}
