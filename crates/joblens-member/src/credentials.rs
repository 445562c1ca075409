//! Login credentials, read from the process environment.

use crate::error::{MemberError, Result};

const USERNAME_VAR: &str = "JOBLENS_USERNAME";
const PASSWORD_VAR: &str = "JOBLENS_PASSWORD";

/// Account credentials for a fresh login.
///
/// No `Debug` impl; the password must not end up in logs.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Builds credentials from explicit values.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads `JOBLENS_USERNAME` and `JOBLENS_PASSWORD` from the
    /// environment.
    ///
    /// # Errors
    /// Returns [`MemberError::MissingCredentials`] if either variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self> {
        let username = std::env::var(USERNAME_VAR).unwrap_or_default();
        let password = std::env::var(PASSWORD_VAR).unwrap_or_default();

        if username.is_empty() || password.is_empty() {
            return Err(MemberError::MissingCredentials);
        }

        Ok(Self { username, password })
    }

    /// Account identifier.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}
