//! Diary entry form.

use serde::Deserialize;
use validator::Validate;

use crate::domain::diary::NewDiaryEntry;
use crate::domain::types::SanitizedText;
use crate::forms::{FormError, not_blank, parse_date};

#[derive(Debug, Deserialize, Validate)]
pub struct DiaryForm {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Please select a place"))]
    pub place: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(custom(function = "not_blank", message = "Your story is required"))]
    pub content: String,
}

impl TryFrom<DiaryForm> for NewDiaryEntry {
    type Error = FormError;

    fn try_from(form: DiaryForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewDiaryEntry {
            title: form.title.trim().to_string(),
            place: form.place,
            date: parse_date(&form.date)?,
            content: SanitizedText::new(form.content)?,
        })
    }
}
