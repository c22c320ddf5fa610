// Page - one visitor's instance of a site
//
// Holds the tenant content (read-only) plus the two bits of per-instance UI
// state: the active section and the contact form. Front-ends (terminal UI,
// HTTP handlers) drive it through `activate`, `update_field` and
// `try_submit`.

use crate::contact::{Acknowledgement, ContactForm, Field};
use crate::content::SiteContent;
use crate::navigation::{NavigationState, Viewport};

/// Result of a submit attempt at the form boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Acknowledged(Acknowledgement),

    /// Required fields are empty; the form is left untouched.
    Incomplete(Vec<Field>),
}

#[derive(Debug, Clone)]
pub struct Page {
    content: SiteContent,
    navigation: NavigationState,
    form: ContactForm,
    acknowledgement: Option<Acknowledgement>,
}

impl Page {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content,
            navigation: NavigationState::new(),
            form: ContactForm::new(),
            acknowledgement: None,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Acknowledgement of the last submission, until dismissed.
    pub fn acknowledgement(&self) -> Option<&Acknowledgement> {
        self.acknowledgement.as_ref()
    }

    pub fn active_section(&self) -> &str {
        self.navigation.active()
    }

    pub fn activate<V: Viewport + ?Sized>(&mut self, id: &str, viewport: &mut V) {
        self.navigation.activate(id, viewport);
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    /// Submit unconditionally. Callers enforce required fields first.
    pub fn submit(&mut self) -> &Acknowledgement {
        let ack = self.form.submit(&self.content.contact.acknowledgement);
        self.acknowledgement.insert(ack)
    }

    /// Required-field check followed by `submit`.
    pub fn try_submit(&mut self) -> SubmitOutcome {
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            return SubmitOutcome::Incomplete(missing);
        }
        SubmitOutcome::Acknowledged(self.submit().clone())
    }

    pub fn dismiss_acknowledgement(&mut self) {
        self.acknowledgement = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::hotel;
    use crate::navigation::tests::RecordingViewport;

    #[test]
    fn test_new_page_state() {
        let page = Page::new(hotel::content());
        assert_eq!(page.active_section(), "home");
        assert!(page.form().is_empty());
        assert!(page.acknowledgement().is_none());
    }

    #[test]
    fn test_navigation_scenario() {
        let mut page = Page::new(hotel::content());
        let mut viewport = RecordingViewport::with_all_sections();

        page.activate("financials", &mut viewport);
        assert_eq!(page.active_section(), "financials");

        page.activate("contact", &mut viewport);
        assert_eq!(page.active_section(), "contact");
        assert_eq!(viewport.scrolled_to.len(), 2);
    }

    #[test]
    fn test_submit_uses_tenant_acknowledgement() {
        let mut page = Page::new(hotel::content());
        page.update_field(Field::Name, "Ann");
        page.update_field(Field::Email, "a@b.com");
        page.update_field(Field::Message, "Hi");

        match page.try_submit() {
            SubmitOutcome::Acknowledged(ack) => {
                assert_eq!(ack.message, "Спасибо! Мы свяжемся с вами в ближайшее время.");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert!(page.form().is_empty());
        assert!(page.acknowledgement().is_some());

        page.dismiss_acknowledgement();
        assert!(page.acknowledgement().is_none());
    }

    #[test]
    fn test_incomplete_submit_keeps_values() {
        let mut page = Page::new(hotel::content());
        page.update_field(Field::Name, "Ann");

        assert_eq!(
            page.try_submit(),
            SubmitOutcome::Incomplete(vec![Field::Email, Field::Message])
        );
        assert_eq!(page.form().name, "Ann");
        assert!(page.acknowledgement().is_none());
    }

    #[test]
    fn test_submit_does_not_touch_navigation() {
        let mut page = Page::new(hotel::content());
        let mut viewport = RecordingViewport::with_all_sections();
        page.activate("contact", &mut viewport);

        page.update_field(Field::Name, "Ann");
        page.update_field(Field::Email, "a@b.com");
        page.update_field(Field::Message, "Hi");
        page.submit();

        assert_eq!(page.active_section(), "contact");
    }
}
