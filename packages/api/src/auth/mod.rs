//! Mock registration and sign-in backed by local storage.

mod accounts;
mod validation;

pub use accounts::{AccountError, AccountService};
pub use validation::{is_valid_email, SignUpForm, ValidationError, MIN_PASSWORD_LEN};
