// Host-side tests for contact form validation.

use folio_core::{looks_like_email, ContactError, ContactForm};

fn form(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.into(),
        email: email.into(),
        message: message.into(),
    }
}

#[test]
fn complete_form_passes() {
    assert_eq!(form("Ada", "ada@example.com", "Hello").validate(), Ok(()));
}

#[test]
fn blank_fields_are_missing() {
    assert_eq!(
        form("", "ada@example.com", "Hello").validate(),
        Err(ContactError::MissingFields)
    );
    assert_eq!(
        form("Ada", "ada@example.com", "   ").validate(),
        Err(ContactError::MissingFields)
    );
    assert_eq!(
        ContactForm::default().validate(),
        Err(ContactError::MissingFields)
    );
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(
        form("Ada", "ada.example.com", "Hello").validate(),
        Err(ContactError::InvalidEmail)
    );
    assert_eq!(
        ContactError::MissingFields.to_string(),
        "Please fill all fields"
    );
}

#[test]
fn email_shape() {
    assert!(looks_like_email("a@b.co"));
    assert!(looks_like_email("first.last@sub.example.org"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.co"));
    assert!(!looks_like_email("a@@b.co"));
    assert!(!looks_like_email("a@.co"));
    assert!(!looks_like_email("a b@c.co"));
    assert!(!looks_like_email("a@b."));
    assert!(!looks_like_email("a@b..co"));
    assert!(!looks_like_email("a@sub..example.org"));
}
