use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{MomentId, TripId, TypeConstraintError};

/// Kind of a moment recorded during a trip.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MomentType {
    Departure,
    Arrival,
    Stay,
    #[default]
    SiteVisit,
    Travel,
    Event,
    Other,
}

impl MomentType {
    pub const ALL: [MomentType; 7] = [
        MomentType::Departure,
        MomentType::Arrival,
        MomentType::Stay,
        MomentType::SiteVisit,
        MomentType::Travel,
        MomentType::Event,
        MomentType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MomentType::Departure => "departure",
            MomentType::Arrival => "arrival",
            MomentType::Stay => "stay",
            MomentType::SiteVisit => "site_visit",
            MomentType::Travel => "travel",
            MomentType::Event => "event",
            MomentType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MomentType::Departure => "Departure",
            MomentType::Arrival => "Arrival",
            MomentType::Stay => "Stay",
            MomentType::SiteVisit => "Site Visit",
            MomentType::Travel => "Travel",
            MomentType::Event => "Event",
            MomentType::Other => "Other",
        }
    }
}

impl Display for MomentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for MomentType {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MomentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| TypeConstraintError::InvalidValue(value.to_string()))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    pub id: MomentId,
    pub trip_id: TripId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub moment_type: MomentType,
    #[serde(default)]
    pub other_type: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: NaiveDate,
}

impl Moment {
    /// Title, description and place joined for free-text search.
    pub fn search_text(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.title,
            self.description,
            self.place.as_deref().unwrap_or_default()
        )
    }

    /// Badge text: the custom label for `other` moments when one was given.
    pub fn type_label(&self) -> &str {
        match (self.moment_type, self.other_type.as_deref()) {
            (MomentType::Other, Some(custom)) if !custom.trim().is_empty() => custom,
            (kind, _) => kind.label(),
        }
    }
}

/// Validated moment fields, used both for creation and edits.
#[derive(Clone, Debug)]
pub struct NewMoment {
    pub trip_id: TripId,
    pub title: String,
    pub description: String,
    pub moment_type: MomentType,
    pub other_type: Option<String>,
    pub place: Option<String>,
    pub photos: Vec<String>,
    pub is_public: bool,
}

impl NewMoment {
    pub fn into_moment(self, id: MomentId, created_at: NaiveDate) -> Moment {
        Moment {
            id,
            trip_id: self.trip_id,
            title: self.title,
            description: self.description,
            moment_type: self.moment_type,
            other_type: self.other_type,
            place: self.place,
            photos: self.photos,
            is_public: self.is_public,
            created_at,
        }
    }
}
