use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{UserEmail, UserName};

/// Profile of the signed-in traveler kept on the device.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub currently_traveling: bool,
    #[serde(default)]
    pub current_trip: Option<String>,
    #[serde(alias = "signedInAt")]
    pub signed_up_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(name: UserName, email: UserEmail, location: String) -> Self {
        Self {
            name: name.into_inner(),
            email: email.into_inner(),
            location,
            bio: None,
            currently_traveling: false,
            current_trip: None,
            signed_up_at: Utc::now(),
        }
    }

    /// Profile for a returning user, named after the local part of the email.
    pub fn from_email(email: UserEmail) -> Self {
        let name = email
            .as_str()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            name,
            email: email.into_inner(),
            location: String::new(),
            bio: None,
            currently_traveling: false,
            current_trip: None,
            signed_up_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: UpdateProfile) {
        self.name = update.name.into_inner();
        self.location = update.location;
        self.bio = update.bio;
        self.currently_traveling = update.currently_traveling;
        self.current_trip = update.current_trip.filter(|_| update.currently_traveling);
    }
}

/// Editable profile fields, including the travel status.
#[derive(Clone, Debug)]
pub struct UpdateProfile {
    pub name: UserName,
    pub location: String,
    pub bio: Option<String>,
    pub currently_traveling: bool,
    pub current_trip: Option<String>,
}
