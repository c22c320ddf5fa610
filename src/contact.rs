// ✉️ Contact Form - three text fields, decorative submit
//
// Nothing is sent anywhere. Submitting produces an acknowledgement for the
// visitor and clears the fields. Required-ness is checked by whoever hosts the
// form (browser `required`, the HTTP handler, the terminal UI) via
// `missing_fields` before `submit` is called.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// Confirmation shown after a submission. Says nothing about delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: String,
    pub acknowledged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Overwrite exactly one field.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Fields that would fail a `required` check. Like the browser check,
    /// only the empty string counts as missing.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Acknowledge the message and reset every field to "".
    ///
    /// Callers check `is_complete` first.
    pub fn submit(&mut self, acknowledgement: &str) -> Acknowledgement {
        info!(
            name_len = self.name.chars().count(),
            message_len = self.message.chars().count(),
            "contact form submitted (not delivered)"
        );

        *self = ContactForm::default();

        Acknowledgement {
            message: acknowledgement.to_string(),
            acknowledged_at: Utc::now(),
        }
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
    fn test_new_form_is_empty_strings() {
        let form = ContactForm::new();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert!(form.is_empty());
        assert_eq!(form.missing_fields(), Field::ALL.to_vec());
    }

    #[test]
    fn test_update_field_touches_only_that_field() {
        let mut form = ContactForm::new();
        form.update_field(Field::Email, "a@b.com");

        assert_eq!(form.name, "");
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_last_write_wins() {
        let mut form = ContactForm::new();
        let writes = [
            (Field::Name, "A"),
            (Field::Message, "first"),
            (Field::Name, "Ann"),
            (Field::Message, "second"),
            (Field::Name, "Anna"),
        ];
        for (field, value) in writes {
            form.update_field(field, value);
        }

        assert_eq!(form.get(Field::Name), "Anna");
        assert_eq!(form.get(Field::Message), "second");
        assert_eq!(form.get(Field::Email), "");
    }

    #[test]
    fn test_submit_scenario() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ann");
        form.update_field(Field::Email, "a@b.com");
        form.update_field(Field::Message, "Hi");
        assert!(form.is_complete());

        let ack = form.submit("Спасибо!");

        assert_eq!(ack.message, "Спасибо!");
        assert_eq!(
            (form.name.as_str(), form.email.as_str(), form.message.as_str()),
            ("", "", "")
        );
    }

    #[test]
    fn test_missing_fields_matches_required_check() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ann");
        form.update_field(Field::Message, " ");

        assert_eq!(form.missing_fields(), vec![Field::Email]);
        assert!(!form.is_complete());

        form.update_field(Field::Email, "a@b.com");
        assert!(form.is_complete());
    }

    #[test]
    fn test_field_cycle() {
        let mut field = Field::Name;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, Field::Name);
        assert_eq!(Field::Name.previous(), Field::Message);
    }
}
