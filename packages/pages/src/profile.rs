// ABOUTME: Profile view of the signed-in user
// ABOUTME: Rows come from the session's password-free user record

use coursemgr_auth::Session;
use coursemgr_core::MaskedUser;

/// Profile of the signed-in user. Built from the session, so it never holds a password.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    user: MaskedUser,
}

impl ProfilePage {
    pub fn from_session(session: &Session) -> Self {
        Self {
            user: session.user().clone(),
        }
    }

    pub fn name(&self) -> String {
        self.user.full_name()
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn role(&self) -> &'static str {
        if self.user.is_organizer {
            "Organizer"
        } else {
            "Participant"
        }
    }

    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Name", self.name()),
            ("Email", self.user.email.clone()),
            ("Role", self.role().to_string()),
        ];
        if let Some(age) = self.user.age {
            rows.push(("Age", age.to_string()));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursemgr_core::test_utils::sample_user;
    use coursemgr_core::Password;

    #[test]
    fn test_profile_never_carries_password() {
        let mut user = sample_user(1, "Piotr", "Nowak");
        user.password = Some(Password::new("hunter2hunter2"));
        let session = Session::new(user.masked());

        let profile = ProfilePage::from_session(&session);
        let rendered = format!("{:?} {:?}", profile, profile.rows());

        assert_eq!(profile.name(), "Piotr Nowak");
        assert_eq!(profile.email(), "piotr@example.com");
        assert!(!rendered.contains("hunter2"));
        assert!(profile.rows().iter().all(|(label, _)| *label != "Password"));
    }
}
