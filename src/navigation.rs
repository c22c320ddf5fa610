// 🧭 Navigation - active section tracking + scroll requests
//
// The page is one long document split into named sections. Clicking a menu
// entry, a hero button or a footer link all go through the same
// `NavigationState::activate` call: remember the id, ask the viewport to
// bring that anchor into view. An id with no anchor still becomes active;
// the scroll request simply does nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// SECTIONS
// ============================================================================

/// Sections every page template provides, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Portfolio,
    Financials,
    Presentation,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Financials,
        Section::Presentation,
        Section::Contact,
    ];

    /// Anchor id used in markup and in `activate`.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Financials => "financials",
            Section::Presentation => "presentation",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Entry of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

// ============================================================================
// VIEWPORT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Whatever shows the page and can scroll it.
pub trait Viewport {
    /// Bring the element with `id` into view. Returns false (and leaves the
    /// viewport alone) when no such element exists.
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool;
}

// ============================================================================
// NAVIGATION STATE
// ============================================================================

pub const INITIAL_SECTION: &str = "home";

/// Currently active section. Lives as long as the page instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active: String,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            active: INITIAL_SECTION.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Mark `id` active and request a smooth scroll to it.
    pub fn activate<V: Viewport + ?Sized>(&mut self, id: &str, viewport: &mut V) {
        self.active = id.to_string();
        if !viewport.scroll_into_view(id, ScrollBehavior::Smooth) {
            debug!(section = id, "no anchor for section, scroll skipped");
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
