// HTML page template
//
// One askama template for every tenant (`templates/page.html`). Sections
// carry their ids as anchors; every in-page link points at
// `?section=<id>#<id>` so the server can mark the section active while the
// browser jumps to it. A pending scroll request from `HtmlViewport` becomes a
// `scrollIntoView({behavior: "smooth"})` call.

use super::svg;
use crate::chart::ChartView;
use crate::contact::Field;
use crate::content::{CallToAction, SiteContent};
use crate::navigation::{NavItem, ScrollBehavior, Section, Viewport};
use crate::page::Page;
use askama::Template;

// ============================================================================
// VIEWPORT
// ============================================================================

/// Viewport for a server-rendered document: knows which anchors the template
/// emits and remembers the last scroll request for the client script.
#[derive(Debug, Clone)]
pub struct HtmlViewport {
    anchors: Vec<&'static str>,
    pending: Option<(String, ScrollBehavior)>,
}

impl HtmlViewport {
    pub fn new() -> Self {
        Self {
            anchors: Section::ALL.iter().map(|s| s.id()).collect(),
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<(&str, ScrollBehavior)> {
        self.pending.as_ref().map(|(id, b)| (id.as_str(), *b))
    }
}

impl Default for HtmlViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport for HtmlViewport {
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        if self.anchors.contains(&id) {
            self.pending = Some((id.to_string(), behavior));
            true
        } else {
            false
        }
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Path the page is served under ("/hotel"); links and the form
    /// action are built from it.
    pub base_path: String,

    /// Fields flagged as missing after a rejected submit
    pub missing: Vec<Field>,
}

impl RenderOptions {
    pub fn at(base_path: &str) -> Self {
        Self {
            base_path: base_path.to_string(),
            missing: vec![],
        }
    }

    fn section_href(&self, id: &str) -> String {
        format!("{}?section={}#{}", self.base_path, id, id)
    }
}

// ============================================================================
// PAGE
// ============================================================================

struct Link<'a> {
    label: &'a str,
    href: String,
    active: bool,
}

struct Button<'a> {
    label: &'a str,
    href: String,
    icon: Option<&'a str>,
}

struct Figure<'a> {
    title: &'a str,
    description: &'a str,
    svg: String,
}

struct Input<'a> {
    name: &'static str,
    kind: &'static str,
    placeholder: &'a str,
    value: &'a str,
    multiline: bool,
    missing: bool,
}

struct Column<'a> {
    title: &'a str,
    links: Vec<Link<'a>>,
}

struct Scroll {
    /// JSON string literal of the anchor id
    target: String,
    behavior: &'static str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    site: &'a SiteContent,
    nav: Vec<Link<'a>>,
    hero_actions: Vec<Button<'a>>,
    figures: Vec<Figure<'a>>,
    offer_cta: Button<'a>,
    acknowledgement: Option<&'a str>,
    form_action: String,
    inputs: Vec<Input<'a>>,
    footer_columns: Vec<Column<'a>>,
    scroll: Option<Scroll>,
}

fn link<'a>(item: &'a NavItem, options: &RenderOptions, active: bool) -> Link<'a> {
    Link {
        label: &item.label,
        href: options.section_href(&item.id),
        active,
    }
}

fn button<'a>(cta: &'a CallToAction, options: &RenderOptions) -> Button<'a> {
    Button {
        label: &cta.label,
        href: options.section_href(&cta.target),
        icon: cta.icon.as_deref(),
    }
}

pub fn render_page(page: &Page, viewport: &HtmlViewport, options: &RenderOptions) -> askama::Result<String> {
    let site = page.content();
    let labels = &site.contact.labels;

    let figures = site
        .charts
        .slots()
        .into_iter()
        .map(|(kind, spec)| {
            let view = ChartView::from_spec(kind, spec);
            Ok(Figure {
                title: &spec.title,
                description: &spec.description,
                svg: svg::render(&view)?,
            })
        })
        .collect::<askama::Result<Vec<_>>>()?;

    let inputs = Field::ALL
        .into_iter()
        .map(|field| {
            let (kind, placeholder) = match field {
                Field::Name => ("text", &labels.name),
                Field::Email => ("email", &labels.email),
                Field::Message => ("text", &labels.message),
            };
            Input {
                name: field.as_str(),
                kind,
                placeholder,
                value: page.form().get(field),
                multiline: field == Field::Message,
                missing: options.missing.contains(&field),
            }
        })
        .collect();

    let scroll = match viewport.pending() {
        Some((id, behavior)) => Some(Scroll {
            target: serde_json::to_string(id).map_err(|e| askama::Error::Custom(Box::new(e)))?,
            behavior: match behavior {
                ScrollBehavior::Smooth => "smooth",
                ScrollBehavior::Instant => "auto",
            },
        }),
        None => None,
    };

    PageTemplate {
        site,
        nav: site
            .nav
            .iter()
            .map(|item| link(item, options, page.navigation().is_active(&item.id)))
            .collect(),
        hero_actions: vec![
            button(&site.hero.primary_cta, options),
            button(&site.hero.secondary_cta, options),
        ],
        figures,
        offer_cta: Button {
            label: &site.offer.cta_label,
            href: options.section_href(Section::Contact.id()),
            icon: None,
        },
        acknowledgement: page.acknowledgement().map(|ack| ack.message.as_str()),
        form_action: format!("{}/contact#{}", options.base_path, Section::Contact.id()),
        inputs,
        footer_columns: site
            .footer
            .columns
            .iter()
            .map(|column| Column {
                title: &column.title,
                links: column.links.iter().map(|item| link(item, options, false)).collect(),
            })
            .collect(),
        scroll,
    }
    .render()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{hotel, tech};

    fn render_fresh(site: SiteContent) -> String {
        let page = Page::new(site);
        render_page(&page, &HtmlViewport::new(), &RenderOptions::at("/hotel")).unwrap()
    }

    #[test]
    fn test_every_section_has_an_anchor() {
        let html = render_fresh(hotel::content());
        for section in Section::ALL {
            let anchor = format!("<section id=\"{}\">", section.id());
            assert!(html.contains(&anchor), "missing anchor {}", section.id());
        }
    }

    #[test]
    fn test_home_is_active_initially() {
        let html = render_fresh(hotel::content());
        assert!(html.contains(
            "<a class=\"nav-link active\" href=\"/hotel?section=home#home\">Главная</a>"
        ));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_activate_marks_link_and_requests_scroll() {
        let mut page = Page::new(hotel::content());
        let mut viewport = HtmlViewport::new();
        page.activate("financials", &mut viewport);

        let html = render_page(&page, &viewport, &RenderOptions::at("/hotel")).unwrap();

        assert!(html.contains(
            "<a class=\"nav-link active\" href=\"/hotel?section=financials#financials\">Финансы</a>"
        ));
        assert!(html.contains(
            "document.getElementById(\"financials\")?.scrollIntoView({behavior: \"smooth\"});"
        ));
    }

    #[test]
    fn test_unknown_section_renders_without_scroll() {
        let mut page = Page::new(hotel::content());
        let mut viewport = HtmlViewport::new();
        page.activate("careers", &mut viewport);

        let html = render_page(&page, &viewport, &RenderOptions::at("/hotel")).unwrap();

        assert_eq!(viewport.pending(), None);
        assert!(!html.contains("nav-link active"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_both_charts_rendered() {
        let html = render_fresh(tech::content());
        assert!(html.contains("chart-line"));
        assert!(html.contains("chart-bar"));
        assert!(html.contains("Выручка и прибыль"));
        assert!(html.contains("Структура выручки"));
    }

    #[test]
    fn test_form_fields_are_required_and_escaped() {
        let mut page = Page::new(hotel::content());
        page.update_field(Field::Name, "<Ann>");

        let html = render_page(&page, &HtmlViewport::new(), &RenderOptions::at("/hotel")).unwrap();

        assert_eq!(html.matches(" required>").count(), 3);
        assert!(html.contains("value=\"&lt;Ann&gt;\""));
        assert!(html.contains("action=\"/hotel/contact#contact\""));
    }

    #[test]
    fn test_missing_fields_flagged() {
        let page = Page::new(hotel::content());
        let options = RenderOptions {
            base_path: "/hotel".to_string(),
            missing: vec![Field::Email],
        };
        let html = render_page(&page, &HtmlViewport::new(), &options).unwrap();

        assert!(html.contains("data-field=\"email\""));
        assert_eq!(html.matches("field-error").count(), 2); // style rule + one flag
    }

    #[test]
    fn test_acknowledgement_rendered_after_submit() {
        let mut page = Page::new(hotel::content());
        page.update_field(Field::Name, "Ann");
        page.update_field(Field::Email, "a@b.com");
        page.update_field(Field::Message, "Hi");
        page.submit();

        let html = render_page(&page, &HtmlViewport::new(), &RenderOptions::at("/hotel")).unwrap();

        assert!(html.contains("Спасибо! Мы свяжемся с вами в ближайшее время."));
        assert!(html.contains("value=\"\""));
        assert!(!html.contains("Ann"));
    }

    #[test]
    fn test_footer_links_target_sections() {
        let html = render_fresh(hotel::content());
        assert!(html.contains("href=\"/hotel?section=presentation#presentation\">Отчетность</a>"));
        assert!(html.contains("© 2024 Grand Marina Resort"));
    }

    #[test]
    fn test_tenant_text_is_escaped() {
        let mut site = hotel::content();
        site.brand = "<script>alert('x')</script>".to_string();
        site.hero.image_url = "https://img.example/a.jpg\" onerror=\"x".to_string();

        let html = render_fresh(site);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("<title>&lt;script&gt;alert("));
        assert!(html.contains("a.jpg&quot; onerror=&quot;x"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render_fresh(hotel::content()), render_fresh(hotel::content()));
    }
}
