use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Validation failures; the display text is what the form shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Nom requis")]
    NameTooShort,
    #[error("Format invalide")]
    InvalidEmail,
    #[error("Message trop court")]
    MessageTooShort,
}

impl ContactError {
    pub fn field(self) -> ContactField {
        match self {
            ContactError::NameTooShort => ContactField::Name,
            ContactError::InvalidEmail => ContactField::Email,
            ContactError::MessageTooShort => ContactField::Message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

impl ContactMessage {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Checks every field, returning all failures in field order.
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();
        if self.name.chars().count() < MIN_NAME_CHARS {
            errors.push(ContactError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(ContactError::InvalidEmail);
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(ContactError::MessageTooShort);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Form state: what the user typed plus the errors currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub message: ContactMessage,
    pub errors: Vec<ContactError>,
}

impl ContactDraft {
    pub fn error_for(&self, field: ContactField) -> Option<ContactError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    /// Updates one field and drops the error shown under it.
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.message.set(field, value);
        self.errors.retain(|e| e.field() != field);
    }

    /// Returns the accepted message and resets the form, or records the
    /// failures and keeps the input as typed.
    pub fn submit(&mut self) -> Option<ContactMessage> {
        match self.message.validate() {
            Ok(()) => Some(std::mem::take(self).message),
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            message: body.into(),
        }
    }

    #[test]
    fn accepts_complete_message() {
        let msg = message("Jo", "jo.durand@etu.example.fr", "Bonjour, disponible ?");
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactMessage::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ContactError::NameTooShort,
                ContactError::InvalidEmail,
                ContactError::MessageTooShort
            ]
        );
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 9 chars, 11 bytes
        let msg = message("É", "a@b.fr", "éléphant!");
        assert_eq!(
            msg.validate().unwrap_err(),
            vec![ContactError::NameTooShort, ContactError::MessageTooShort]
        );
        let msg = message("Éa", "a@b.fr", "éléphants!");
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn email_syntax() {
        for ok in ["a@b.fr", "first.last+tag@sub.domain.com", "o'neil@mail.ie"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "",
            "plain",
            "@domain.com",
            "a@b",
            "a@b.c",
            ".a@b.fr",
            "a..b@c.fr",
            "a.@b.fr",
            "a b@c.fr",
            "a@-b.fr",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut draft = ContactDraft::default();
        assert_eq!(draft.submit(), None);
        assert_eq!(draft.errors.len(), 3);

        draft.edit(ContactField::Email, "a@b".into());
        assert_eq!(draft.error_for(ContactField::Email), None);
        assert_eq!(
            draft.error_for(ContactField::Name),
            Some(ContactError::NameTooShort)
        );
        assert_eq!(
            draft.error_for(ContactField::Message),
            Some(ContactError::MessageTooShort)
        );
        assert_eq!(draft.message.email, "a@b");
    }

    #[test]
    fn valid_submit_resets_the_form() {
        let mut draft = ContactDraft::default();
        draft.edit(ContactField::Name, "Jo".into());
        assert_eq!(draft.submit(), None);
        draft.edit(ContactField::Email, "jo@etu.example.fr".into());
        draft.edit(ContactField::Message, "Bonjour, disponible ?".into());

        let sent = draft.submit().expect("complete message is accepted");
        assert_eq!(sent, message("Jo", "jo@etu.example.fr", "Bonjour, disponible ?"));
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn invalid_submit_keeps_what_was_typed() {
        let mut draft = ContactDraft::default();
        draft.edit(ContactField::Name, "Jo".into());
        draft.edit(ContactField::Email, "not-an-email".into());
        draft.edit(ContactField::Message, "court".into());

        assert_eq!(draft.submit(), None);
        assert_eq!(draft.message, message("Jo", "not-an-email", "court"));
        assert_eq!(
            draft.errors,
            vec![ContactError::InvalidEmail, ContactError::MessageTooShort]
        );
    }

    #[test]
    fn error_messages_match_form_copy() {
        assert_eq!(ContactError::NameTooShort.to_string(), "Nom requis");
        assert_eq!(ContactError::InvalidEmail.to_string(), "Format invalide");
        assert_eq!(ContactError::MessageTooShort.to_string(), "Message trop court");
    }
}
