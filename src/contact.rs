use regex::Regex;
use std::{fmt, sync::LazyLock, time::Duration};
use thiserror::Error;

/// How long the "Message Sent!" acknowledgment stays up before the form resets.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

// Same pattern browsers apply to `<input type="email">`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern should compile")
});

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Email => f.write_str("email"),
            Field::Message => f.write_str("message"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Missing required field: {0}")]
    Missing(Field),
    #[error("Email address is malformed")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Overwrites one field. No trimming, the value is kept as typed.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Mirrors the browser's `required` and `type="email"` checks.
    pub fn validate(&self) -> Result<(), DraftError> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            return Err(DraftError::Missing(field));
        }
        if !is_email_shaped(&self.email) {
            return Err(DraftError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitted,
}

/// Identifies one accepted submit. Only the latest ticket may reset the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    phase: FormPhase,
    generation: u64,
}

impl ContactForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn update(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    pub fn submit(&mut self) -> Result<SubmitTicket, DraftError> {
        self.draft.validate()?;
        self.generation += 1;
        self.phase = FormPhase::Submitted;
        Ok(SubmitTicket(self.generation))
    }

    /// Whether `ticket` belongs to the submit whose reset has not run yet.
    pub fn awaits_reset(&self, ticket: SubmitTicket) -> bool {
        self.phase == FormPhase::Submitted && ticket.0 == self.generation
    }

    /// Clears the draft and then returns to idle. Stale tickets from a
    /// superseded submit do nothing.
    pub fn reset(&mut self, ticket: SubmitTicket) -> bool {
        if !self.awaits_reset(ticket) {
            return false;
        }
        self.draft.clear();
        self.phase = FormPhase::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(Field::Name, "Ada".to_string());
        form.update(Field::Email, "ada@example.com".to_string());
        form.update(Field::Message, "Hello".to_string());
        form
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_shaped("ada@example.com"));
        assert!(is_email_shaped("ada@localhost"));
        assert!(is_email_shaped("  ada.l+notes@analytical.engine.uk "));
        assert!(!is_email_shaped("ada"));
        assert!(!is_email_shaped("ada@"));
        assert!(!is_email_shaped("@example.com"));
        assert!(!is_email_shaped("ada@-example.com"));
        assert!(!is_email_shaped("ada lovelace@example.com"));
    }

    #[test]
    fn test_update_keeps_value_verbatim() {
        let mut form = ContactForm::default();
        form.update(Field::Message, "  spaced \n".to_string());
        assert_eq!(form.draft.message, "  spaced \n");
        assert_eq!(form.draft.get(Field::Message), "  spaced \n");
    }

    #[test]
    fn test_submit_blocked_by_each_empty_field() {
        for field in Field::ALL {
            let mut form = ada();
            form.update(field, String::new());
            assert_eq!(form.submit(), Err(DraftError::Missing(field)));
            assert!(!form.is_submitted());
        }
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), Err(DraftError::Missing(Field::Name)));
    }

    #[test]
    fn test_submit_blocked_by_malformed_email() {
        let mut form = ada();
        form.update(Field::Email, "ada-at-example".to_string());
        assert_eq!(form.submit(), Err(DraftError::InvalidEmail));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_submit_then_reset() {
        let mut form = ada();
        let ticket = form.submit().unwrap();
        assert!(form.is_submitted());
        assert_eq!(form.draft.name, "Ada");

        assert!(form.reset(ticket));
        assert!(!form.is_submitted());
        assert!(form.draft.is_empty());

        // a second reset for the same submit is a no-op
        form.update(Field::Name, "Grace".to_string());
        assert!(!form.reset(ticket));
        assert_eq!(form.draft.name, "Grace");
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut form = ada();
        let first = form.submit().unwrap();
        let second = form.submit().unwrap();
        assert_ne!(first, second);

        assert!(!form.awaits_reset(first));
        assert!(form.awaits_reset(second));
        assert!(!form.reset(first));
        assert!(form.is_submitted());
        assert!(form.reset(second));
        assert!(form.draft.is_empty());
    }

    #[test]
    fn test_edits_allowed_while_submitted() {
        let mut form = ada();
        let ticket = form.submit().unwrap();
        form.update(Field::Message, "Hello again".to_string());
        assert!(form.is_submitted());
        assert_eq!(form.draft.message, "Hello again");
        assert!(form.reset(ticket));
        assert_eq!(form.draft, ContactDraft::default());
    }
}
