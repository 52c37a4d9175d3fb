use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Name,
    Email,
    Message,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Name => "Please enter your name (at least 2 characters).",
            FieldError::Email => "Please enter a valid email address.",
            FieldError::Message => "Please write a message of at least 10 characters.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl FormStatus {
    pub fn success(message: &str) -> Self {
        Self { kind: StatusKind::Success, message: message.to_string() }
    }

    pub fn error(message: &str) -> Self {
        Self { kind: StatusKind::Error, message: message.to_string() }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            StatusKind::Success => "form-status success",
            StatusKind::Error => "form-status error",
        }
    }
}

impl From<FieldError> for FormStatus {
    fn from(error: FieldError) -> Self {
        FormStatus::error(error.message())
    }
}

/// Contact form values. Nothing is sent anywhere; a valid submit only
/// thanks the visitor and clears the fields.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Stops at the first failing field, in name, email, message order.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(FieldError::Name);
        }
        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(FieldError::Email);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            return Err(FieldError::Message);
        }
        Ok(())
    }

    pub fn submit(&mut self) -> FormStatus {
        match self.validate() {
            Ok(()) => {
                log::info!("Contact form accepted");
                *self = ContactForm::default();
                FormStatus::success("Thanks! We'll get back to you soon.")
            }
            Err(field) => {
                log::debug!("Contact form rejected: {:?}", field);
                field.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_PATTERN.is_match("a@b.com"));
        assert!(EMAIL_PATTERN.is_match("first.last@sub.example.org"));
        assert!(!EMAIL_PATTERN.is_match("bad-email"));
        assert!(!EMAIL_PATTERN.is_match("a@bcom"));
        assert!(!EMAIL_PATTERN.is_match("a b@c.d"));
        assert!(!EMAIL_PATTERN.is_match("a@b@c.com"));
        assert!(!EMAIL_PATTERN.is_match("@@@.@"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let form = ContactForm::new("  A ", "a@b.com", "valid message text");
        assert_eq!(form.validate(), Err(FieldError::Name));
        let form = ContactForm::new("Al", "  a@b.com  ", "   0123456789   ");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_failed_submit_keeps_values() {
        let mut form = ContactForm::new("Al", "a@b.com", "short");
        let status = form.submit();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(form.message, "short");
    }
}
