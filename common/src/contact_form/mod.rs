mod session;
mod validate;

pub use session::{ContactFormSession, ContactFormSnapshot, ContactFormStatus, SEND_DELAY};
pub use validate::{ContactFormErrors, MIN_MESSAGE_CHARS, is_valid_email, validate_contact_form};
