use serde::{Deserialize, Serialize};

use crate::domain::types::{PlaceId, PlaceName, PlaceSlug, SanitizedText};

/// Short traveler note attached to a place.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Story {
    pub author: String,
    pub date: String,
    pub note: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub slug: String,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    pub rating: f32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub related_places: Vec<PlaceId>,
}

impl Place {
    /// Text the places search runs against: name, city and country.
    ///
    /// Lines are separated so a query cannot match across two fields.
    pub fn search_text(&self) -> String {
        format!("{}\n{}\n{}", self.name, self.city, self.country)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Validated payload for a place added by the user.
#[derive(Clone, Debug)]
pub struct NewPlace {
    pub name: PlaceName,
    pub city: String,
    pub country: String,
    pub area: String,
    pub image: String,
    pub rating: f32,
    pub tags: Vec<String>,
    pub description: SanitizedText,
}

impl NewPlace {
    /// Builds the stored place, deriving slug and location.
    pub fn into_place(self, id: PlaceId) -> Place {
        Place {
            id,
            slug: PlaceSlug::from_name(&self.name).as_str().to_string(),
            location: format!("{}, {}", self.city, self.country),
            name: self.name.into_inner(),
            city: self.city,
            country: self.country,
            area: self.area,
            image: self.image,
            rating: self.rating,
            tags: self.tags,
            description: self.description.into_inner(),
            stories: Vec::new(),
            related_places: Vec::new(),
        }
    }
}
