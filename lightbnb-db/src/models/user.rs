//! User input validation
//!
//! Email shape: `local@domain.tld`, no whitespace

use once_cell::sync::Lazy;
use regex::Regex;

use super::validation::require_text;
use super::ValidationError;

/// Maximum length for names and emails (VARCHAR(255) columns)
const MAX_TEXT_LEN: usize = 255;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email, validating its shape.
    ///
    /// # Example
    /// ```
    /// use lightbnb_db::models::Email;
    ///
    /// assert!(Email::new("tristanjacobs@gmail.com").is_ok());
    /// assert!(Email::new("not-an-email").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        require_text(s, "email", MAX_TEXT_LEN)?;

        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@example.com",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated input for creating a user.
///
/// `password` is stored as given; hashing happens in the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    name: String,
    email: Email,
    password: String,
}

impl NewUser {
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        require_text(name, "name", MAX_TEXT_LEN)?;
        let email = Email::new(email)?;
        if password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }

        Ok(Self {
            name: name.to_owned(),
            email,
            password: password.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        assert!(Email::new("a@b.co").is_ok());
        assert!(Email::new("sebastianguerra@ymail.com").is_ok());
        assert_eq!(Email::new("  x@y.io ").unwrap().as_str(), "x@y.io");
    }

    #[test]
    fn invalid_emails() {
        assert!(matches!(
            Email::new(""),
            Err(ValidationError::Empty { field: "email" })
        ));
        assert!(Email::new("no-at-sign").is_err());
        assert!(Email::new("two@@example.com").is_err());
        assert!(Email::new("spa ce@example.com").is_err());
        assert!(Email::new("user@localhost").is_err());
    }

    #[test]
    fn new_user_requires_all_fields() {
        assert!(NewUser::new("Eva", "eva@example.com", "hash").is_ok());
        assert!(matches!(
            NewUser::new(" ", "eva@example.com", "hash"),
            Err(ValidationError::Empty { field: "name" })
        ));
        assert!(matches!(
            NewUser::new("Eva", "eva@example.com", ""),
            Err(ValidationError::Empty { field: "password" })
        ));
    }

    #[test]
    fn name_with_quote_is_kept_verbatim() {
        // Bound as a parameter, never spliced into SQL text
        let user = NewUser::new("O'Brien", "ob@example.com", "x").unwrap();
        assert_eq!(user.name(), "O'Brien");
    }
}
