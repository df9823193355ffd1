use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ParticipantId, TripId, TripTitle};

/// Name used for the trip creator when nobody is signed in.
pub const ANONYMOUS_PARTICIPANT: &str = "You";

/// Avatar assigned to the trip creator.
pub const DEFAULT_AVATAR: &str = "/diverse-avatars.png";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub open_for_join: bool,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Trip {
    /// Text the trips search runs against: title and destination.
    pub fn search_text(&self) -> String {
        format!("{}\n{}", self.title, self.destination)
    }
}

/// Validated payload for a trip planned by the user.
#[derive(Clone, Debug)]
pub struct NewTrip {
    pub title: TripTitle,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub open_for_join: bool,
    /// Display name of the planner; [`ANONYMOUS_PARTICIPANT`] when unset.
    pub creator: Option<String>,
}

impl NewTrip {
    pub fn created_by(mut self, name: Option<&str>) -> Self {
        self.creator = name.map(str::to_string);
        self
    }

    /// Builds the stored trip with its creator as the only participant.
    pub fn into_trip(self, id: TripId) -> Trip {
        Trip {
            id,
            title: self.title.into_inner(),
            destination: self.destination,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            open_for_join: self.open_for_join,
            participants: vec![Participant {
                id: ParticipantId::FIRST,
                name: self
                    .creator
                    .unwrap_or_else(|| ANONYMOUS_PARTICIPANT.to_string()),
                avatar: DEFAULT_AVATAR.to_string(),
            }],
        }
    }
}
