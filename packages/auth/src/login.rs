// ABOUTME: Login form validation and credential check against the user directory
// ABOUTME: A successful check hands the password-free user to the auth context

use coursemgr_client::{ApiClient, ClientError};
use coursemgr_core::validation::{require_fields, ValidationError, ValidationSummary};
use coursemgr_core::{MaskedUser, Prompter, Severity};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::context::AuthContext;
use crate::error::{AuthError, AuthResult};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
pub const LOGIN_FAILED: &str = "An error occurred. Please try again.";
pub const LOGIN_SUCCESS: &str = "Logged in successfully!";

const EMAIL_MAX_LEN: usize = 100;
const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 255;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = require_fields(&[
            ("Email", self.email.as_str()),
            ("Password", self.password.as_str()),
        ]);

        if self.email.chars().count() > EMAIL_MAX_LEN {
            errors.push(ValidationError::new(
                "Email",
                format!("Email must be at most {} characters", EMAIL_MAX_LEN),
            ));
        }

        let password_len = self.password.chars().count();
        if !self.password.trim().is_empty()
            && !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&password_len)
        {
            errors.push(ValidationError::new(
                "Password",
                format!(
                    "Password must be between {} and {} characters",
                    PASSWORD_MIN_LEN, PASSWORD_MAX_LEN
                ),
            ));
        }

        errors
    }
}

pub struct LoginPage {
    client: ApiClient,
    prompter: Arc<dyn Prompter>,
}

impl LoginPage {
    pub fn new(client: ApiClient, prompter: Arc<dyn Prompter>) -> Self {
        Self { client, prompter }
    }

    /// Check the credentials and sign the user in.
    ///
    /// Every outcome is reported through the prompter's alert. The context is
    /// only touched when the password matches.
    pub async fn submit(&self, ctx: &mut AuthContext, form: &LoginForm) -> AuthResult<MaskedUser> {
        let errors = form.validate();
        if !errors.is_empty() {
            self.prompter.alert(Severity::Warning, &ValidationSummary(&errors).to_string());
            return Err(AuthError::Validation(errors));
        }

        let email = form.email.trim();
        debug!("Looking up {}", email);

        let user = match self.client.get_user_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!("No user registered as {}", email);
                return Err(self.reject());
            }
            Err(e @ ClientError::Status { .. }) | Err(e @ ClientError::NotFound(_)) => {
                warn!("Credential lookup rejected: {}", e);
                return Err(self.reject());
            }
            Err(e) => {
                error!("Error during login: {}", e);
                self.prompter.alert(Severity::Error, LOGIN_FAILED);
                return Err(AuthError::Request(e));
            }
        };

        let matches = user
            .password
            .as_ref()
            .is_some_and(|stored| stored.matches(&form.password));
        if !matches {
            debug!("Password mismatch for {}", email);
            return Err(self.reject());
        }

        let masked = MaskedUser::from(user);
        if let Err(e) = ctx.login(masked.clone()).await {
            error!("Could not persist session: {}", e);
            self.prompter.alert(Severity::Error, LOGIN_FAILED);
            return Err(e);
        }

        info!("Login successful for {}", masked.email);
        self.prompter.alert(Severity::Success, LOGIN_SUCCESS);
        Ok(masked)
    }

    fn reject(&self) -> AuthError {
        self.prompter.alert(Severity::Error, INVALID_CREDENTIALS);
        AuthError::InvalidCredentials
    }
}
