//! Trip planning form.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::trip::NewTrip;
use crate::domain::types::TripTitle;
use crate::forms::{FormError, not_blank, parse_date};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_trip_dates"))]
pub struct TripForm {
    #[validate(custom(function = "not_blank", message = "Trip title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Please select a destination"))]
    pub destination: String,
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,
    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,
    #[validate(custom(function = "not_blank", message = "Trip description is required"))]
    pub description: String,
    #[serde(default)]
    pub open_for_join: bool,
}

/// The trip must end on or after the day it starts.
fn validate_trip_dates(form: &TripForm) -> Result<(), ValidationError> {
    let (Ok(start), Ok(end)) = (parse_date(&form.start_date), parse_date(&form.end_date)) else {
        return Ok(());
    };
    if end < start {
        let mut err = ValidationError::new("end_before_start");
        err.message = Some("End date must be on or after start date".into());
        return Err(err);
    }
    Ok(())
}

impl TryFrom<TripForm> for NewTrip {
    type Error = FormError;

    fn try_from(form: TripForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewTrip {
            title: TripTitle::new(form.title)?,
            destination: form.destination.trim().to_string(),
            start_date: parse_date(&form.start_date)?,
            end_date: parse_date(&form.end_date)?,
            description: form.description.trim().to_string(),
            open_for_join: form.open_for_join,
            creator: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(start: &str, end: &str) -> TripForm {
        TripForm {
            title: " Alps loop ".into(),
            destination: "Zermatt".into(),
            start_date: start.into(),
            end_date: end.into(),
            description: "Hut to hut".into(),
            open_for_join: true,
        }
    }

    #[test]
    fn valid_trip_is_trimmed() {
        let trip = NewTrip::try_from(form("2024-07-01", "2024-07-10")).unwrap();
        assert_eq!(trip.title.as_str(), "Alps loop");
        assert!(trip.open_for_join);
    }

    #[test]
    fn same_day_trip_allowed() {
        assert!(NewTrip::try_from(form("2024-07-01", "2024-07-01")).is_ok());
    }

    #[test]
    fn end_before_start_rejected() {
        let result = NewTrip::try_from(form("2024-07-10", "2024-07-01"));
        assert!(matches!(result, Err(FormError::Validation(_))));
    }

    #[test]
    fn malformed_date_rejected() {
        let result = NewTrip::try_from(form("July 1st", "2024-07-01"));
        assert!(matches!(result, Err(FormError::InvalidDate(_))));
    }

    #[test]
    fn blank_title_rejected() {
        let mut blank = form("2024-07-01", "2024-07-02");
        blank.title = "   ".into();
        assert!(NewTrip::try_from(blank).is_err());
    }

    #[test]
    fn open_for_join_defaults_to_false() {
        let json = r#"{"title":"T","destination":"D","startDate":"2024-01-01","endDate":"2024-01-02","description":"x"}"#;
        let parsed: TripForm = serde_json::from_str(json).unwrap();
        assert!(!parsed.open_for_join);
    }
}
