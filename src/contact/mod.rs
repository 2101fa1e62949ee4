//! Contact form validation
//!
//! Submissions are validated and acknowledged; there is no delivery backend,
//! accepted messages are only logged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Acknowledgment shown after an accepted submission
pub const SUCCESS_MESSAGE: &str = "Message sent. I'll get back to you soon.";

/// Warning shown when a field is left empty
pub const WARNING_MESSAGE: &str = "Please fill out all fields.";

/// The three contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Result of one submission, shown once on the next render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Warning(String),
}

impl ContactForm {
    /// Check that no field is empty
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }

    /// Validate and produce the notice for this submission
    pub fn submit(&self) -> Notice {
        match self.validate() {
            Ok(()) => {
                tracing::info!(
                    name = %self.name.trim(),
                    email = %self.email.trim(),
                    length = self.message.trim().chars().count(),
                    "Contact message received"
                );
                Notice::Success(SUCCESS_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::debug!("Contact form rejected: {}", e);
                Notice::Warning(WARNING_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_complete_form_succeeds() {
        let notice = form("Ada", "ada@example.com", "Hello").submit();
        assert_eq!(notice, Notice::Success(SUCCESS_MESSAGE.to_string()));
    }

    #[test]
    fn test_any_empty_field_warns() {
        for f in [
            form("", "ada@example.com", "Hello"),
            form("Ada", "", "Hello"),
            form("Ada", "ada@example.com", ""),
        ] {
            assert_eq!(f.submit(), Notice::Warning(WARNING_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let notice = form(" ", "ada@example.com", "   \n").submit();
        assert_eq!(notice, Notice::Success(SUCCESS_MESSAGE.to_string()));
    }

    #[test]
    fn test_missing_fields_are_named() {
        let err = form("", "x@y.z", "").validate().unwrap_err();
        assert_eq!(err, ContactError::MissingFields(vec!["name", "message"]));
        assert_eq!(err.to_string(), "missing fields: name, message");
    }
}
