//! Profile details and travel status form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::UserName;
use crate::domain::user::UpdateProfile;
use crate::forms::{FormError, optional_text};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
    #[serde(default)]
    pub currently_traveling: bool,
    #[serde(default)]
    pub current_trip: Option<String>,
}

impl TryFrom<ProfileForm> for UpdateProfile {
    type Error = FormError;

    fn try_from(form: ProfileForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UpdateProfile {
            name: UserName::new(form.name)?,
            location: form.location.trim().to_string(),
            bio: optional_text(form.bio).map(|bio| ammonia::clean(&bio)),
            currently_traveling: form.currently_traveling,
            current_trip: optional_text(form.current_trip),
        })
    }
}
