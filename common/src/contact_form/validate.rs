pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// `local@domain.tld`: no whitespace, one `@`, and a dot inside the domain part.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn validate_contact_form(name: &str, email: &str, message: &str) -> ContactFormErrors {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    let mut errors = ContactFormErrors::default();

    if name.is_empty() {
        errors.name = Some("Please enter your name.".to_string());
    }

    if email.is_empty() {
        errors.email = Some("Email is required.".to_string());
    } else if !is_valid_email(email) {
        errors.email = Some("Enter a valid email.".to_string());
    }

    if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some(format!(
            "The message needs a bit more detail (at least {} characters).",
            MIN_MESSAGE_CHARS
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.co", "first.last@mail.example.org", "x+tag@d.io"] {
            assert!(is_valid_email(email), "{} should be valid", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "plain",
            "@b.co",
            "a@b",
            "a@.co",
            "a@b.",
            "a@@b.co",
            "a@b@c.co",
            "a b@c.co",
        ] {
            assert!(!is_valid_email(email), "{} should be invalid", email);
        }
    }

    #[test]
    fn test_all_fields_valid() {
        let errors = validate_contact_form("  Ann ", " ann@site.com ", "Hello there, world");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_each_field_reported() {
        let errors = validate_contact_form("   ", "", "short");
        assert!(errors.name.is_some());
        assert_eq!(errors.email.as_deref(), Some("Email is required."));
        assert!(errors.message.is_some());

        let errors = validate_contact_form("Ann", "ann@site", "0123456789");
        assert_eq!(errors.name, None);
        assert_eq!(errors.email.as_deref(), Some("Enter a valid email."));
        assert_eq!(errors.message, None);
    }

    #[test]
    fn test_message_length_counts_trimmed_chars() {
        let errors = validate_contact_form("Ann", "a@b.co", "   123456789   ");
        assert!(errors.message.is_some());
        let errors = validate_contact_form("Ann", "a@b.co", "ёжик в тумане");
        assert!(errors.message.is_none());
    }
}
