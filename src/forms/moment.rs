//! Form for recording or editing a trip moment.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::moment::{MomentType, NewMoment};
use crate::domain::types::TripId;
use crate::forms::{FormError, not_blank, optional_text};

fn default_public() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_other_type"))]
pub struct MomentForm {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    #[serde(rename = "type", default)]
    pub moment_type: MomentType,
    #[serde(default)]
    pub other_type: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

/// `other` moments must say what kind of moment they are.
fn validate_other_type(form: &MomentForm) -> Result<(), ValidationError> {
    let specified = form
        .other_type
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    if form.moment_type == MomentType::Other && !specified {
        let mut err = ValidationError::new("other_type_required");
        err.message = Some("Please specify the moment type".into());
        return Err(err);
    }
    Ok(())
}

impl MomentForm {
    pub fn into_new_moment(self, trip_id: TripId) -> Result<NewMoment, FormError> {
        self.validate()?;
        let other_type = match self.moment_type {
            MomentType::Other => optional_text(self.other_type),
            _ => None,
        };
        Ok(NewMoment {
            trip_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            moment_type: self.moment_type,
            other_type,
            place: optional_text(self.place),
            photos: self.photos,
            is_public: self.is_public,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: MomentType, other: Option<&str>) -> MomentForm {
        MomentForm {
            title: "Sunset".into(),
            description: "From the ridge".into(),
            moment_type: kind,
            other_type: other.map(str::to_string),
            place: Some("  ".into()),
            photos: vec![],
            is_public: true,
        }
    }

    #[test]
    fn other_requires_custom_type() {
        let result = form(MomentType::Other, None).into_new_moment(TripId::FIRST);
        assert!(matches!(result, Err(FormError::Validation(_))));

        let moment = form(MomentType::Other, Some(" Picnic "))
            .into_new_moment(TripId::FIRST)
            .unwrap();
        assert_eq!(moment.other_type.as_deref(), Some("Picnic"));
    }

    #[test]
    fn custom_type_dropped_for_known_types() {
        let moment = form(MomentType::Stay, Some("Picnic"))
            .into_new_moment(TripId::FIRST)
            .unwrap();
        assert_eq!(moment.other_type, None);
        assert_eq!(moment.place, None);
    }

    #[test]
    fn defaults_applied_from_json() {
        let parsed: MomentForm =
            serde_json::from_str(r#"{"title":"A","description":"B"}"#).unwrap();
        assert_eq!(parsed.moment_type, MomentType::SiteVisit);
        assert!(parsed.is_public);
    }
}
