//! Sign-in and sign-up forms.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{UserEmail, UserName};
use crate::domain::user::UserProfile;
use crate::forms::{FormError, not_blank};

#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    #[validate(
        custom(function = "not_blank", message = "Please enter your full name"),
        length(min = 2, message = "Please enter your full name")
    )]
    pub full_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Please select a location"))]
    pub location: String,
}

impl TryFrom<SignInForm> for UserProfile {
    type Error = FormError;

    fn try_from(form: SignInForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let email = UserEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?;
        Ok(UserProfile::from_email(email))
    }
}

impl TryFrom<SignUpForm> for UserProfile {
    type Error = FormError;

    fn try_from(form: SignUpForm) -> Result<Self, Self::Error> {
        form.validate()?;
        if form.full_name.trim().chars().count() < 2 {
            return Err(FormError::InvalidName);
        }
        let email = UserEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?;
        let name = UserName::new(form.full_name)?;
        Ok(UserProfile::new(name, email, form.location))
    }
}
