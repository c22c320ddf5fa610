// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use investor_pages::telemetry::{default_level, init_tracing, LogTarget};
use investor_pages::{load_registry, render_page, HtmlViewport, Page, PagesConfig, RenderOptions, SiteContent};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "investor-pages", version, about = "Investor pitch pages in the terminal or as static HTML")]
struct Cli {
    /// Configuration file (defaults to ./investor-pages.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Site to open (overrides `default_site`)
    #[arg(short, long, global = true)]
    site: Option<String>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse a site in the terminal (default)
    Tui,
    /// Write a site as a standalone HTML page
    Render {
        /// Section to activate before rendering
        #[arg(long)]
        section: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List registered sites
    Sites,
    /// Check every registered site's content
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    let config = PagesConfig::load_from(cli.config.as_deref()).context("failed to load configuration")?;

    let target = match command {
        Command::Tui => config
            .log_file
            .clone()
            .map(LogTarget::File)
            .unwrap_or(LogTarget::Off),
        _ => LogTarget::Stderr,
    };
    init_tracing(default_level(cli.quiet, cli.verbose), target)?;

    let registry = load_registry(&config).context("failed to load site content")?;
    let slug = cli.site.unwrap_or_else(|| config.default_site.clone());

    match command {
        Command::Sites => {
            for site in registry.all() {
                println!("{}\t{}", site.slug, site.brand);
            }
        }
        Command::Validate => {
            let failures = registry.validate_all();
            for (slug, error) in &failures {
                eprintln!("❌ {}: {}", slug, error);
            }
            if !failures.is_empty() {
                bail!("{} of {} sites failed validation", failures.len(), registry.count());
            }
            println!("✓ {} sites valid", registry.count());
        }
        Command::Render { section, out } => {
            let site = lookup(&registry, &slug)?;
            let html = render_site(site, section.as_deref()).context("failed to render page")?;
            match out {
                Some(path) => {
                    fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
                    info!(site = %slug, path = %path.display(), "page written");
                }
                None => print!("{}", html),
            }
        }
        Command::Tui => {
            let site = lookup(&registry, &slug)?;
            run_ui_mode(site.clone())?;
        }
    }

    Ok(())
}

fn lookup<'a>(registry: &'a investor_pages::SiteRegistry, slug: &str) -> Result<&'a SiteContent> {
    match registry.get(slug) {
        Some(site) => Ok(site),
        None => bail!("unknown site '{}' (available: {})", slug, registry.slugs().join(", ")),
    }
}

fn render_site(site: &SiteContent, section: Option<&str>) -> askama::Result<String> {
    let mut page = Page::new(site.clone());
    let mut viewport = HtmlViewport::new();
    if let Some(section) = section {
        page.activate(section, &mut viewport);
    }
    render_page(&page, &viewport, &RenderOptions::at(&format!("/{}", site.slug)))
}

#[cfg(feature = "tui")]
fn run_ui_mode(site: SiteContent) -> Result<()> {
    info!(site = %site.slug, "starting terminal UI");

    let mut app = ui::App::new(Page::new(site));
    ui::run_ui(&mut app)?;

    info!("terminal UI closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_site: SiteContent) -> Result<()> {
    bail!(
        "TUI mode not available; rebuild with `--features tui` or use `investor-pages render` / the investor-server binary"
    )
}
