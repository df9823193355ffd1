use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::trip::ANONYMOUS_PARTICIPANT;
use crate::domain::types::{PlaceId, ReviewId};

/// Aspects a reviewer may rate besides the overall score.
pub const REVIEW_ASPECTS: [&str; 6] = [
    "Food Quality",
    "Cleanliness",
    "Connectivity",
    "Staff Behavior",
    "Value for Money",
    "Safety",
];

/// Highest star rating, for the overall score and every aspect.
pub const MAX_REVIEW_RATING: u8 = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AspectRating {
    pub aspect: String,
    pub rating: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub user_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub aspect_ratings: Vec<AspectRating>,
    pub created_at: DateTime<Utc>,
}

/// Validated review before it is stored.
#[derive(Clone, Debug, PartialEq)]
pub struct NewReview {
    pub place_id: PlaceId,
    pub rating: u8,
    pub comment: String,
    /// Only the aspects the reviewer actually rated.
    pub aspect_ratings: Vec<AspectRating>,
    /// Display name of the reviewer; [`ANONYMOUS_PARTICIPANT`] when unset.
    pub author: Option<String>,
}

impl NewReview {
    pub fn written_by(mut self, name: Option<&str>) -> Self {
        self.author = name.map(str::to_string);
        self
    }

    pub fn into_review(self, id: ReviewId, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            place_id: self.place_id,
            user_name: self
                .author
                .unwrap_or_else(|| ANONYMOUS_PARTICIPANT.to_string()),
            rating: self.rating,
            comment: self.comment,
            aspect_ratings: self.aspect_ratings,
            created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AspectAverage {
    pub aspect: String,
    pub average: f32,
    /// Reviews that rated this aspect.
    pub count: usize,
}

/// Averages shown above the reviews of a place.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub average_rating: f32,
    pub review_count: usize,
    /// One entry per [`REVIEW_ASPECTS`] item, in that order.
    pub aspects: Vec<AspectAverage>,
}

fn one_decimal(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

impl ReviewSummary {
    /// Averages rounded to one decimal; zero when nothing was rated.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let average = |sum: u32, count: usize| {
            if count == 0 {
                0.0
            } else {
                one_decimal(sum as f32 / count as f32)
            }
        };

        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();

        let aspects = REVIEW_ASPECTS
            .iter()
            .map(|aspect| {
                let ratings: Vec<u32> = reviews
                    .iter()
                    .filter_map(|r| r.aspect_ratings.iter().find(|a| a.aspect == *aspect))
                    .map(|a| u32::from(a.rating))
                    .collect();
                AspectAverage {
                    aspect: aspect.to_string(),
                    average: average(ratings.iter().sum(), ratings.len()),
                    count: ratings.len(),
                }
            })
            .collect();

        Self {
            average_rating: average(total, reviews.len()),
            review_count: reviews.len(),
            aspects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i64, rating: u8, aspects: &[(&str, u8)]) -> Review {
        Review {
            id: ReviewId::new(id).unwrap(),
            place_id: PlaceId::FIRST,
            user_name: "Ana".into(),
            rating,
            comment: String::new(),
            aspect_ratings: aspects
                .iter()
                .map(|(aspect, rating)| AspectRating {
                    aspect: aspect.to_string(),
                    rating: *rating,
                })
                .collect(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    fn aspect<'a>(summary: &'a ReviewSummary, name: &str) -> &'a AspectAverage {
        summary.aspects.iter().find(|a| a.aspect == name).unwrap()
    }

    #[test]
    fn no_reviews_average_zero() {
        let summary = ReviewSummary::from_reviews(&[]);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.review_count, 0);
        assert_eq!(summary.aspects.len(), REVIEW_ASPECTS.len());
        assert!(summary.aspects.iter().all(|a| a.average == 0.0 && a.count == 0));
    }

    #[test]
    fn averages_over_rating_reviews_only() {
        let reviews = [
            review(1, 5, &[("Safety", 4), ("Cleanliness", 5)]),
            review(2, 4, &[("Safety", 3)]),
            review(3, 4, &[]),
        ];
        let summary = ReviewSummary::from_reviews(&reviews);

        assert_eq!(summary.average_rating, 4.3);
        assert_eq!(summary.review_count, 3);
        assert_eq!(aspect(&summary, "Safety").average, 3.5);
        assert_eq!(aspect(&summary, "Safety").count, 2);
        assert_eq!(aspect(&summary, "Cleanliness").average, 5.0);
        assert_eq!(aspect(&summary, "Connectivity").average, 0.0);
    }

    #[test]
    fn anonymous_author_falls_back() {
        let new_review = NewReview {
            place_id: PlaceId::FIRST,
            rating: 3,
            comment: "Fine".into(),
            aspect_ratings: vec![],
            author: None,
        };
        let stored = new_review
            .clone()
            .into_review(ReviewId::FIRST, DateTime::from_timestamp(0, 0).unwrap());
        assert_eq!(stored.user_name, ANONYMOUS_PARTICIPANT);

        let named = new_review
            .written_by(Some("leo"))
            .into_review(ReviewId::FIRST, DateTime::from_timestamp(0, 0).unwrap());
        assert_eq!(named.user_name, "leo");
    }
}
