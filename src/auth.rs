use crate::models::{LoginRequest, SignupRequest, User};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your full name")]
    Name,
    #[error("Please enter a valid email address")]
    Email,
    #[error("Password must be at least 8 characters long")]
    Password,
    #[error("Passwords do not match")]
    Mismatch,
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationError> {
    if !validate_email(&request.email) {
        return Err(ValidationError::Email);
    }
    if !validate_password(&request.password) {
        return Err(ValidationError::Password);
    }
    Ok(())
}

pub fn validate_signup(request: &SignupRequest) -> Result<(), ValidationError> {
    if request.name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::Name);
    }
    if !validate_email(&request.email) {
        return Err(ValidationError::Email);
    }
    if !validate_password(&request.password) {
        return Err(ValidationError::Password);
    }
    if request.password != request.confirm_password {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

/// Display name is whatever precedes the first `@`.
pub fn user_for(email: &str) -> User {
    let name = email.split('@').next().unwrap_or_default();
    User {
        email: email.to_string(),
        name: name.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
}

impl AuthAction {
    pub fn success_message(self) -> &'static str {
        match self {
            AuthAction::Login => "Successfully logged in!",
            AuthAction::Signup => "Successfully signed up!",
        }
    }
}

/// In-memory sign-in state; gone when the process exits.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    current: Option<User>,
}

impl AuthSession {
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn sign_in(&mut self, email: &str) -> User {
        let user = user_for(email);
        self.current = Some(user.clone());
        user
    }

    pub fn sign_out(&mut self) -> Option<User> {
        self.current.take()
    }
}
