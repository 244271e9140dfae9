//! Form drafts held by the contact, login, and signup views

use crate::error::AuthError;
use crate::identity::User;
use crate::session::SessionManager;
use urlencoding::encode;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PRIVACY_REQUIRED: &str = "You must agree to the Privacy Policy to create an account";
pub const SIGNUP_SUCCESS: &str =
    "Account created successfully! You can now log in with your credentials.";

/// Contact form fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// Mail-client URI addressed to `recipient` with encoded subject and body
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode(&self.subject),
            encode(&self.body())
        )
    }
}

/// Contact page state: editing, or showing the sent confirmation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub submitted: bool,
}

impl ContactForm {
    /// Mark the form sent and return the URI the browser should open
    pub fn submit(&mut self, recipient: &str) -> String {
        self.submitted = true;
        self.draft.mailto(recipient)
    }

    /// Back to an empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    /// Shown on the form; the provider always persists the session
    pub remember_me: bool,
}

impl LoginDraft {
    pub async fn submit(&self, manager: &SessionManager) -> Result<User, AuthError> {
        manager.sign_in(&self.email, &self.password).await
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub agree_to_privacy: bool,
}

impl SignupDraft {
    /// Local checks, in the order the form reports them
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.username.trim().is_empty() {
            return Err(AuthError::validation(USERNAME_REQUIRED));
        }
        if !self.agree_to_privacy {
            return Err(AuthError::validation(PRIVACY_REQUIRED));
        }
        Ok(())
    }

    pub async fn submit(&self, manager: &SessionManager) -> Result<Option<User>, AuthError> {
        self.validate()?;
        manager
            .sign_up(&self.email, &self.password, &self.username)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::mock::MockProvider;
    use crate::tests::{Harness, ScriptedProvider};
    use std::rc::Rc;

    fn contact() -> ContactDraft {
        ContactDraft {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Help".into(),
            message: "Hi".into(),
        }
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let uri = contact().mailto("info@inflow.com");
        assert!(uri.starts_with("mailto:info@inflow.com?subject=Help&body=Name%3A%20Jane"));
        assert!(uri.ends_with("Message%3A%0AHi"));
        assert!(uri.contains("jane%40x.com"));
    }

    #[test]
    fn contact_form_resets_to_empty() {
        let mut form = ContactForm {
            draft: contact(),
            submitted: false,
        };
        let uri = form.submit("info@inflow.com");
        assert!(form.submitted);
        assert!(uri.starts_with("mailto:"));

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[tokio::test]
    async fn empty_username_fails_before_provider() {
        // no expectations: any provider call panics
        let harness = Harness::with_provider(Rc::new(MockProvider::new()));
        let draft = SignupDraft {
            username: "  ".into(),
            email: "jane@x.com".into(),
            password: "hunter22".into(),
            agree_to_privacy: true,
        };

        let err = draft.submit(&harness.manager).await.unwrap_err();

        assert_eq!(err, AuthError::validation(USERNAME_REQUIRED));
    }

    #[test]
    fn privacy_agreement_is_checked_after_username() {
        let draft = SignupDraft {
            username: "jane".into(),
            ..SignupDraft::default()
        };
        assert_eq!(draft.validate(), Err(AuthError::validation(PRIVACY_REQUIRED)));
    }

    #[tokio::test]
    async fn valid_signup_reaches_provider() {
        let harness = Harness::new(ScriptedProvider::new());
        let draft = SignupDraft {
            username: "jane".into(),
            email: "jane@x.com".into(),
            password: "hunter22".into(),
            agree_to_privacy: true,
        };

        let user = draft.submit(&harness.manager).await.unwrap();

        assert_eq!(user, None);
        assert_eq!(harness.provider.sign_ups()[0].email, "jane@x.com");
    }

    #[tokio::test]
    async fn login_sets_user_through_notification() {
        let harness = Harness::new(ScriptedProvider::new());
        harness.manager.initialize().await;
        let draft = LoginDraft {
            email: "jane@x.com".into(),
            password: "hunter22".into(),
            remember_me: true,
        };

        let user = draft.submit(&harness.manager).await.unwrap();

        assert_eq!(user.email, "jane@x.com");
        assert_eq!(harness.manager.user(), Some(user));
    }
}
