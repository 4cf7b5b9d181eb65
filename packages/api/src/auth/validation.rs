//! # Sign-up form validation
//!
//! [`SignUpForm::validate`] checks the fields in a fixed order and reports the
//! **first** failure only:
//!
//! 1. first and last name present
//! 2. email present and shaped like `local@domain.tld`
//! 3. password at least [`MIN_PASSWORD_LEN`] characters
//! 4. password equals its confirmation
//! 5. terms accepted
//!
//! The [`ValidationError`] display strings are the messages shown to the user.

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw input of the sign-up form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please agree to the Terms of Service and Privacy Policy.")]
    TermsNotAccepted,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        // Counted in chars: astral-plane characters count once, not as two UTF-16 units
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}

/// Loose `local@domain.tld` check.
///
/// Accepts exactly one `@`, no whitespace anywhere, a non-empty local part,
/// and a domain with a `.` that has at least one character on each side.
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
    // Some dot in the domain must have a character before and after it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignUpForm {
        SignUpForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "longenough1".to_string(),
            confirm_password: "longenough1".to_string(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_missing_names() {
        let mut form = valid_form();
        form.first_name.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));

        let mut form = valid_form();
        form.last_name = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_first_failure_wins() {
        // Everything is wrong; only the name error is reported
        let form = SignUpForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));

        // Bad email and short password: email comes first
        let mut form = valid_form();
        form.email = "nope".to_string();
        form.password = "short".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_short_password_regardless_of_later_fields() {
        for password in ["", "a", "1234567", "seven77"] {
            let mut form = valid_form();
            form.password = password.to_string();
            form.confirm_password = "something else".to_string();
            form.terms_accepted = false;
            assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
            assert_eq!(
                ValidationError::PasswordTooShort.to_string(),
                "Password must be at least 8 characters long."
            );
        }
    }

    #[test]
    fn test_password_length_counts_characters() {
        let mut form = valid_form();
        form.password = "ééééééé".to_string(); // 7 chars, 14 bytes
        form.confirm_password = form.password.clone();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_mismatch_and_terms() {
        let mut form = valid_form();
        form.confirm_password = "longenough2".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        let mut form = valid_form();
        form.terms_accepted = false;
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.c", "ada@example.com", "x.y@sub.domain.org", "a@.b.c"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@example.",
            "ada@.com",
            "ada@@example.com",
            "a@b@c.com",
            "ada @example.com",
            "ada@exam ple.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }
}
