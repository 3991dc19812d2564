//! Contact Form State
//!
//! Client-side only. Mirrors exactly what the browser enforces for
//! `required` and `type="email"`, so any submit the browser lets through
//! is acknowledged.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Form control `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Имя",
            ContactField::Email => "Email",
            ContactField::Message => "Сообщение",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Ваше имя",
            ContactField::Email => "name@example.com",
            ContactField::Message => {
                "Кратко опишите, как вы хотите присоединиться или какой вопрос вас интересует"
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Fields the browser would block on, in form order. `required` only
    /// rejects an empty value, so whitespace counts as filled.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(ContactField::Name);
        }
        if !looks_like_email(&self.email) {
            missing.push(ContactField::Email);
        }
        if self.message.is_empty() {
            missing.push(ContactField::Message);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Coarse check equivalent to `<input type="email">`: one `@` with text on
/// both sides.
fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactStatus {
    Editing,
    Acknowledged,
}

impl ContactStatus {
    /// Outcome of a submit attempt. Nothing leaves the client either way.
    pub fn submit(self, draft: &ContactDraft) -> Self {
        if draft.is_complete() {
            ContactStatus::Acknowledged
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Анна".to_string(),
            email: "anna@example.com".to_string(),
            message: "Хочу присоединиться".to_string(),
        }
    }

    #[test]
    fn test_complete_draft_is_acknowledged() {
        let status = ContactStatus::Editing.submit(&filled());
        assert_eq!(status, ContactStatus::Acknowledged);
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let draft = ContactDraft::default();
        assert_eq!(
            draft.missing_fields(),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(ContactStatus::Editing.submit(&draft), ContactStatus::Editing);
    }

    #[test]
    fn test_whitespace_passes_required() {
        let mut draft = filled();
        draft.set(ContactField::Name, "  ".to_string());
        draft.set(ContactField::Message, "   ".to_string());
        assert!(draft.missing_fields().is_empty());
        assert_eq!(ContactStatus::Editing.submit(&draft), ContactStatus::Acknowledged);
    }

    #[test]
    fn test_email_is_trimmed_like_the_browser() {
        let mut draft = filled();
        draft.set(ContactField::Email, "  anna@example.com ".to_string());
        assert!(draft.is_complete());

        draft.set(ContactField::Email, "   ".to_string());
        assert_eq!(draft.missing_fields(), vec![ContactField::Email]);
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("ab"));
        assert!(!looks_like_email("@b"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("a@b@c"));
    }
}
