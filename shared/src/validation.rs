use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::error::LoginValidationError;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PERSON_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]*$").unwrap());

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("empty_field"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_SHAPE.is_match(email) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

// Letters and whitespace only
pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    if !PERSON_NAME.is_match(name) {
        return Err(ValidationError::new("invalid_characters"));
    }
    Ok(())
}

/// Raw values as typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// A profile that passed [`LoginForm::validate`]. The session only accepts
/// logins carrying one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerProfile {
    name: String,
    surname: String,
    email: String,
}

impl PlayerProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl LoginForm {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }

    /// Checks run in a fixed order: empty fields, then the email shape, then
    /// the characters allowed in names. The first failure wins.
    pub fn validate(&self) -> Result<PlayerProfile, LoginValidationError> {
        let name = self.name.trim();
        let surname = self.surname.trim();
        let email = self.email.trim();

        for value in [name, surname, email] {
            validate_required(value).map_err(|_| LoginValidationError::EmptyField)?;
        }

        validate_email(email).map_err(|_| LoginValidationError::InvalidEmailFormat)?;

        validate_person_name(name)
            .and_then(|_| validate_person_name(surname))
            .map_err(|_| LoginValidationError::InvalidCharacters)?;

        Ok(PlayerProfile {
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
        })
    }
}
