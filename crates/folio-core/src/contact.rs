use crate::error::ContactError;

pub const CONTACT_SENT_MESSAGE: &str = "Thanks! Message queued (demo).";

/// Contact form fields as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let blank = |s: &str| s.trim().is_empty();
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err(ContactError::MissingFields);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Shape check only: `local@domain.tld`, no whitespace, a single `@`.
pub fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // at least two labels, none of them empty
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}
