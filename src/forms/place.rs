//! Form for adding a place.

use serde::Deserialize;
use validator::Validate;

use crate::domain::place::NewPlace;
use crate::domain::types::{PlaceName, SanitizedText};
use crate::forms::{FormError, not_blank};

/// Rating suggested by the form before the user changes it.
pub const DEFAULT_RATING: f32 = 4.5;

fn default_rating() -> f32 {
    DEFAULT_RATING
}

#[derive(Debug, Deserialize, Validate)]
pub struct PlaceForm {
    #[validate(custom(function = "not_blank", message = "Place name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    #[validate(custom(function = "not_blank", message = "City is required"))]
    pub city: String,
    #[validate(custom(function = "not_blank", message = "Country is required"))]
    pub country: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f32,
    #[serde(default)]
    pub image: String,
}

impl TryFrom<PlaceForm> for NewPlace {
    type Error = FormError;

    fn try_from(form: PlaceForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let mut tags: Vec<String> = Vec::with_capacity(form.tags.len());
        for tag in form.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if !tags.iter().any(|existing| existing == tag) {
                tags.push(tag.to_string());
            }
        }

        Ok(NewPlace {
            name: PlaceName::new(form.name)?,
            city: form.city.trim().to_string(),
            country: form.country.trim().to_string(),
            area: form.area.trim().to_string(),
            image: form.image.trim().to_string(),
            rating: form.rating,
            tags,
            description: SanitizedText::new(form.description)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PlaceForm {
        PlaceForm {
            name: "Blue Lagoon".into(),
            description: "Warm water".into(),
            city: " Grindavik ".into(),
            country: "Iceland".into(),
            area: "Reykjanes".into(),
            tags: vec!["Nature".into(), " Nature ".into(), "".into(), "Scenic".into()],
            rating: 4.8,
            image: String::new(),
        }
    }

    #[test]
    fn tags_trimmed_and_deduplicated() {
        let place = NewPlace::try_from(form()).unwrap();
        assert_eq!(place.tags, vec!["Nature", "Scenic"]);
        assert_eq!(place.city, "Grindavik");
    }

    #[test]
    fn rating_out_of_range_rejected() {
        let mut bad = form();
        bad.rating = 7.0;
        assert!(matches!(NewPlace::try_from(bad), Err(FormError::Validation(_))));
    }

    #[test]
    fn blank_city_rejected() {
        let mut bad = form();
        bad.city = "  ".into();
        assert!(NewPlace::try_from(bad).is_err());
    }
}
