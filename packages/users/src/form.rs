// ABOUTME: Editable user form shared by the add and edit flows
// ABOUTME: Never pre-fills a stored password; a blank password on edit leaves it unchanged

use coursemgr_client::{UserRegistration, UserUpdate};
use coursemgr_core::validation::{require_fields, ValidationError};
use coursemgr_core::{Password, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub firstname: String,
    pub surname: String,
    /// Free text; anything unparsable is sent as 0
    pub age: String,
    pub email: String,
    pub password: Password,
    pub is_organizer: bool,
}

impl UserForm {
    /// Edit draft for an existing user. The password field starts blank.
    pub fn from_user(user: &User) -> Self {
        Self {
            firstname: user.firstname.clone(),
            surname: user.surname.clone(),
            age: user.age.map(|age| age.to_string()).unwrap_or_default(),
            email: user.email.clone(),
            password: Password::default(),
            is_organizer: user.is_organizer,
        }
    }

    pub fn toggle_organizer(&mut self) {
        self.is_organizer = !self.is_organizer;
    }

    /// Fields required to register a new user
    pub fn validate_new(&self) -> Vec<ValidationError> {
        require_fields(&[
            ("First name", self.firstname.as_str()),
            ("Surname", self.surname.as_str()),
            ("Email", self.email.as_str()),
            ("Password", self.password.expose()),
        ])
    }

    fn parsed_age(&self) -> i32 {
        self.age.trim().parse().unwrap_or(0)
    }

    pub fn to_registration(&self) -> UserRegistration {
        UserRegistration {
            firstname: self.firstname.trim().to_string(),
            surname: self.surname.trim().to_string(),
            age: self.parsed_age(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            is_organizer: self.is_organizer,
        }
    }

    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            firstname: Some(self.firstname.trim().to_string()),
            surname: Some(self.surname.trim().to_string()),
            age: Some(self.parsed_age()),
            email: Some(self.email.trim().to_string()),
            password: (!self.password.expose().trim().is_empty()).then(|| self.password.clone()),
            is_organizer: Some(self.is_organizer),
        }
    }
}
