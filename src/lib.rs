// Investor Pages - Core Library
// One page template, per-tenant content, shared by the terminal UI and the web server

pub mod chart;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod navigation;
pub mod page;
pub mod render;
pub mod telemetry;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use chart::{ChartView, SeriesView};
pub use config::{PagesConfig, ServerConfig};
pub use contact::{Acknowledgement, ContactForm, Field};
pub use content::{
    ChartKind, ChartPoint, ChartSpec, FeatureCard, Metric, ProjectCard, SiteContent, SiteRegistry,
};
pub use error::{ConfigError, ContentError};
pub use navigation::{NavigationState, ScrollBehavior, Section, Viewport};
pub use page::{Page, SubmitOutcome};
pub use render::{render_page, HtmlViewport, RenderOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Built-in tenants plus any JSON tenants from the configured content directory.
pub fn load_registry(config: &PagesConfig) -> Result<SiteRegistry, ContentError> {
    let mut registry = SiteRegistry::with_builtins();
    if let Some(dir) = &config.content_dir {
        let loaded = registry.load_dir(dir)?;
        tracing::info!(dir = %dir.display(), loaded, "loaded tenant content files");
    }
    Ok(registry)
}
