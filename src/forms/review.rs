//! Form for reviewing a place.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::review::{AspectRating, NewReview, REVIEW_ASPECTS};
use crate::domain::types::PlaceId;
use crate::forms::FormError;

fn known_aspect(value: &str) -> Result<(), ValidationError> {
    if REVIEW_ASPECTS.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new("unknown_aspect"))
}

#[derive(Debug, Deserialize, Validate)]
pub struct AspectRatingForm {
    #[validate(custom(function = "known_aspect", message = "Unknown review aspect"))]
    pub aspect: String,
    /// Zero means the aspect was left unrated.
    #[validate(range(max = 5, message = "Aspect rating must be between 0 and 5"))]
    pub rating: u8,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewForm {
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "Please select an overall rating"))]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    #[validate(nested)]
    pub aspect_ratings: Vec<AspectRatingForm>,
}

impl ReviewForm {
    pub fn into_new_review(self, place_id: PlaceId) -> Result<NewReview, FormError> {
        self.validate()?;

        let mut aspect_ratings: Vec<AspectRating> = Vec::new();
        for item in self.aspect_ratings.into_iter().filter(|a| a.rating > 0) {
            if !aspect_ratings.iter().any(|a| a.aspect == item.aspect) {
                aspect_ratings.push(AspectRating {
                    aspect: item.aspect,
                    rating: item.rating,
                });
            }
        }

        Ok(NewReview {
            place_id,
            rating: self.rating,
            comment: ammonia::clean(self.comment.trim()),
            aspect_ratings,
            author: None,
        })
    }
}
