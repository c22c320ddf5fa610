// Site Registry - tenant lookup by slug
//
// Built once at startup (built-ins + optional JSON directory) and then only
// read. The server shares it behind an Arc; every request builds its own
// Page from the stored content.

use super::{hotel, tech, SiteContent};
use crate::error::ContentError;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    sites: BTreeMap<String, SiteContent>,
}

impl SiteRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the hotel and tech tenants.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(hotel::content());
        registry.register(tech::content());
        registry
    }

    /// Add a tenant, replacing any tenant with the same slug.
    pub fn register(&mut self, site: SiteContent) -> Option<SiteContent> {
        debug!(slug = %site.slug, "registering site");
        self.sites.insert(site.slug.clone(), site)
    }

    /// Register every `*.json` file in `dir`. Returns how many were loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ContentError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ContentError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ContentError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        // Deterministic override order
        paths.sort();

        for path in &paths {
            let site = SiteContent::from_json_file(path)?;
            if self.register(site).is_some() {
                info!(path = %path.display(), "content file overrides existing site");
            }
        }

        Ok(paths.len())
    }

    pub fn get(&self, slug: &str) -> Option<&SiteContent> {
        self.sites.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.sites.contains_key(slug)
    }

    /// Slugs in sorted order
    pub fn slugs(&self) -> Vec<&str> {
        self.sites.keys().map(String::as_str).collect()
    }

    pub fn all(&self) -> impl Iterator<Item = &SiteContent> {
        self.sites.values()
    }

    pub fn count(&self) -> usize {
        self.sites.len()
    }

    /// Validate every tenant, collecting failures per slug.
    pub fn validate_all(&self) -> Vec<(String, ContentError)> {
        self.sites
            .values()
            .filter_map(|site| site.validate().err().map(|e| (site.slug.clone(), e)))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtins_registered() {
        let registry = SiteRegistry::with_builtins();
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.slugs(), vec!["hotel", "tech"]);
        assert_eq!(registry.get("hotel").unwrap().brand, "Grand Marina Resort");
        assert_eq!(registry.get("tech").unwrap().brand, "InvestTech");
        assert!(registry.get("bank").is_none());
        assert!(registry.validate_all().is_empty());
    }

    #[test]
    fn test_register_replaces_same_slug() {
        let mut registry = SiteRegistry::with_builtins();
        let mut site = hotel::content();
        site.brand = "Grand Marina II".to_string();

        let previous = registry.register(site);

        assert_eq!(previous.unwrap().brand, "Grand Marina Resort");
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.get("hotel").unwrap().brand, "Grand Marina II");
    }

    #[test]
    fn test_load_dir_adds_and_overrides() {
        let dir = tempfile::tempdir().unwrap();

        let mut fund = tech::content();
        fund.slug = "fund".to_string();
        std::fs::write(dir.path().join("fund.json"), serde_json::to_string(&fund).unwrap()).unwrap();

        let mut tech_override = tech::content();
        tech_override.brand = "InvestTech Group".to_string();
        std::fs::write(
            dir.path().join("tech.json"),
            serde_json::to_string(&tech_override).unwrap(),
        )
        .unwrap();

        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut registry = SiteRegistry::with_builtins();
        let loaded = registry.load_dir(dir.path()).unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(registry.slugs(), vec!["fund", "hotel", "tech"]);
        assert_eq!(registry.get("tech").unwrap().brand, "InvestTech Group");
    }

    #[test]
    fn test_load_dir_rejects_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut broken = hotel::content();
        broken.charts.line.points.clear();
        std::fs::write(dir.path().join("hotel.json"), serde_json::to_string(&broken).unwrap()).unwrap();

        let mut registry = SiteRegistry::with_builtins();
        assert!(matches!(
            registry.load_dir(dir.path()),
            Err(ContentError::EmptyChart { .. })
        ));
    }

    #[test]
    fn test_load_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = SiteRegistry::new();
        assert!(matches!(
            registry.load_dir(&dir.path().join("nope")),
            Err(ContentError::Io { .. })
        ));
    }
}
