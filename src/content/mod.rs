// Site Content - one parameterized page, many tenants
//
// Both investor sites share the same template; everything that differs
// (copy, figures, charts, contacts) lives in a SiteContent value. Built-in
// tenants are defined in code, extra ones can be loaded from JSON files.

pub mod cards;
pub mod chart;
pub mod hotel;
pub mod registry;
pub mod tech;

pub use cards::{ContactDetail, FeatureCard, InvestmentOffer, Material, Metric, ProjectCard};
pub use chart::{ChartKind, ChartPoint, ChartSpec, PeriodKey, SeriesSpec, Tone};
pub use registry::SiteRegistry;

use crate::error::ContentError;
use crate::navigation::{NavItem, Section};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// SECTION BLOCKS
// ============================================================================

/// Heading + lead line every section starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionIntro {
    pub title: String,
    pub subtitle: String,
}

impl SectionIntro {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Button that navigates within the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Section id the button activates
    pub target: String,
}

impl CallToAction {
    pub fn new(label: &str, icon: Option<&str>, target: Section) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.map(str::to_string),
            target: target.id().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub lead: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
    pub stats: Vec<Metric>,
    pub image_url: String,
    pub image_alt: String,
}

/// The two chart slots of the financials section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialCharts {
    /// Drawn as a line chart
    pub line: ChartSpec,

    /// Drawn as a grouped bar chart
    pub bar: ChartSpec,
}

impl FinancialCharts {
    pub fn slots(&self) -> [(ChartKind, &ChartSpec); 2] {
        [(ChartKind::Line, &self.line), (ChartKind::Bar, &self.bar)]
    }
}

/// Placeholders and captions of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormLabels {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submit: String,

    /// Shown next to an empty required field
    pub required: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    pub intro: SectionIntro,
    pub info_title: String,
    pub details: Vec<ContactDetail>,
    pub form_title: String,
    pub labels: FormLabels,

    /// Message displayed after a (decorative) submission
    pub acknowledgement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
    pub social: Vec<String>,
    pub copyright: String,
}

// ============================================================================
// SITE CONTENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    /// URL-safe tenant key ("hotel", "tech"): lowercase ASCII letters,
    /// digits and hyphens
    pub slug: String,

    /// Brand shown in the navigation bar and footer
    pub brand: String,

    pub nav: Vec<NavItem>,
    pub hero: Hero,

    pub about: SectionIntro,
    pub features: Vec<FeatureCard>,

    pub portfolio: SectionIntro,
    pub projects: Vec<ProjectCard>,

    pub financials: SectionIntro,
    pub charts: FinancialCharts,
    pub offer: InvestmentOffer,

    pub presentation: SectionIntro,
    pub materials: Vec<Material>,

    pub contact: ContactSection,
    pub footer: Footer,
}

impl SiteContent {
    /// Load a tenant from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content: SiteContent =
            serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        content.validate()?;
        Ok(content)
    }

    /// Check every invariant the template relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        self.require("slug", &self.slug)?;
        check_slug(&self.slug)?;
        self.require("brand", &self.brand)?;
        self.require("contact.acknowledgement", &self.contact.acknowledgement)?;

        for (_, chart) in self.charts.slots() {
            chart.validate()?;
        }
        for card in &self.features {
            card.validate()?;
        }
        for card in &self.projects {
            card.validate()?;
        }

        for link in self.links() {
            if Section::from_id(&link.id).is_none() {
                return Err(ContentError::UnknownLinkTarget {
                    label: link.label.clone(),
                    target: link.id.clone(),
                });
            }
        }
        for cta in [&self.hero.primary_cta, &self.hero.secondary_cta] {
            if Section::from_id(&cta.target).is_none() {
                return Err(ContentError::UnknownLinkTarget {
                    label: cta.label.clone(),
                    target: cta.target.clone(),
                });
            }
        }

        Ok(())
    }

    /// Navigation bar entries followed by all footer links.
    pub fn links(&self) -> impl Iterator<Item = &NavItem> {
        self.nav
            .iter()
            .chain(self.footer.columns.iter().flat_map(|c| c.links.iter()))
    }

    fn require(&self, field: &'static str, value: &str) -> Result<(), ContentError> {
        if value.trim().is_empty() {
            return Err(ContentError::EmptyField {
                site: self.slug.clone(),
                field,
            });
        }
        Ok(())
    }
}

/// Path segments the server routes itself.
pub const RESERVED_SLUGS: &[&str] = &["api"];

fn check_slug(slug: &str) -> Result<(), ContentError> {
    let invalid = |reason| ContentError::InvalidSlug {
        slug: slug.to_string(),
        reason,
    };

    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(invalid("may only contain a-z, 0-9 and '-'"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(invalid("must not start or end with '-'"));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(invalid("is reserved"));
    }
    Ok(())
}

/// Navigation bar shared by both built-in tenants.
pub(crate) fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("home", "Главная"),
        NavItem::new("about", "О компании"),
        NavItem::new("portfolio", "Портфолио"),
        NavItem::new("financials", "Финансы"),
        NavItem::new("presentation", "Материалы"),
        NavItem::new("contact", "Контакты"),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_builtin_tenants_are_valid() {
        hotel::content().validate().unwrap();
        tech::content().validate().unwrap();
    }

    #[test]
    fn test_nav_covers_every_section() {
        let site = hotel::content();
        let ids: Vec<&str> = site.nav.iter().map(|n| n.id.as_str()).collect();
        let expected: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_unknown_footer_target_rejected() {
        let mut site = tech::content();
        site.footer.columns[0].links.push(NavItem::new("careers", "Вакансии"));
        assert!(matches!(
            site.validate(),
            Err(ContentError::UnknownLinkTarget { target, .. }) if target == "careers"
        ));
    }

    #[test]
    fn test_empty_acknowledgement_rejected() {
        let mut site = hotel::content();
        site.contact.acknowledgement = "  ".to_string();
        assert!(matches!(
            site.validate(),
            Err(ContentError::EmptyField { field: "contact.acknowledgement", .. })
        ));
    }

    #[rstest]
    #[case("a/b c")]
    #[case("Hotel")]
    #[case("отель")]
    #[case("-hotel")]
    #[case("api")]
    fn test_unroutable_slug_rejected(#[case] slug: &str) {
        let mut site = hotel::content();
        site.slug = slug.to_string();
        assert!(matches!(
            site.validate(),
            Err(ContentError::InvalidSlug { slug: found, .. }) if found == slug
        ));
    }

    #[test]
    fn test_hyphenated_slug_accepted() {
        let mut site = hotel::content();
        site.slug = "marina-2".to_string();
        site.validate().unwrap();
    }

    #[test]
    fn test_json_file_round_trip() {
        let mut site = tech::content();
        site.slug = "fund".to_string();
        site.brand = "North Fund".to_string();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&site).unwrap()).unwrap();

        let loaded = SiteContent::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, site);
    }

    #[test]
    fn test_json_file_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(matches!(
            SiteContent::from_json_file(file.path()),
            Err(ContentError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SiteContent::from_json_file(&dir.path().join("absent.json")),
            Err(ContentError::Io { .. })
        ));
    }
}
