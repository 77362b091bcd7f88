//! Customer email address.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why checkout input is not an email address.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    #[error("email cannot contain spaces")]
    ContainsWhitespace,
    #[error("email must contain exactly one @ symbol")]
    AtSymbolCount,
    #[error("email needs text before the @")]
    EmptyLocalPart,
    #[error("email needs a domain after the @")]
    EmptyDomain,
}

/// An email address as entered on the checkout form.
///
/// Only the shape is checked, about what a browser's `type="email"` field
/// accepts: one `@` with text on both sides and no spaces. Surrounding
/// whitespace is trimmed. Deserializing goes through the same check.
///
/// ```
/// use brightcart_core::Email;
///
/// let email = Email::parse(" ada@example.com ").unwrap();
/// assert_eq!(email.domain(), "example.com");
/// assert!(Email::parse("ada.example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    address: String,
    at: usize,
}

impl Email {
    /// Longest address accepted (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse checkout input.
    ///
    /// # Errors
    ///
    /// Returns the first [`EmailError`] the trimmed input runs into.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let address = input.trim();
        if address.is_empty() {
            return Err(EmailError::Empty);
        }
        if address.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if address.chars().any(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }

        let mut ats = address.match_indices('@').map(|(i, _)| i);
        let (Some(at), None) = (ats.next(), ats.next()) else {
            return Err(EmailError::AtSymbolCount);
        };
        if at == 0 {
            return Err(EmailError::EmptyLocalPart);
        }
        if at + 1 == address.len() {
            return Err(EmailError::EmptyDomain);
        }

        Ok(Self {
            address: address.to_owned(),
            at,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Text before the `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.address.get(..self.at).unwrap_or_default()
    }

    /// Text after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.address.get(self.at + 1..).unwrap_or_default()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_shapes() {
        for input in [
            "ada@example.com",
            "ada.lovelace+orders@mail.example.co.uk",
            "a@b",
        ] {
            assert!(Email::parse(input).is_ok(), "{input}");
        }
    }

    #[test]
    fn test_trims_form_input() {
        let email = Email::parse("\t grace@example.com \n").unwrap();
        assert_eq!(email.as_str(), "grace@example.com");
    }

    #[test]
    fn test_rejections() {
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
        assert_eq!(
            Email::parse("grace hopper@example.com"),
            Err(EmailError::ContainsWhitespace)
        );
        assert_eq!(Email::parse("grace.example.com"), Err(EmailError::AtSymbolCount));
        assert_eq!(Email::parse("a@b@example.com"), Err(EmailError::AtSymbolCount));
        assert_eq!(Email::parse("@example.com"), Err(EmailError::EmptyLocalPart));
        assert_eq!(Email::parse("grace@"), Err(EmailError::EmptyDomain));
    }

    #[test]
    fn test_too_long() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(
            Email::parse(&long),
            Err(EmailError::TooLong {
                max: Email::MAX_LENGTH
            })
        );
    }

    #[test]
    fn test_parts() {
        let email = Email::parse("orders@brightcart.test").unwrap();
        assert_eq!(email.local_part(), "orders");
        assert_eq!(email.domain(), "brightcart.test");
    }

    #[test]
    fn test_serde_is_a_plain_string_and_validates() {
        let email = Email::parse("ada@example.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"ada@example.com\"");

        let parsed: Email = serde_json::from_str("\"ada@example.com\"").unwrap();
        assert_eq!(parsed, email);
        assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
    }
}
