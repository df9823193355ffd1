use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{DiaryEntryId, SanitizedText};

/// Image attached to diary entries created without uploads.
pub const DEFAULT_DIARY_IMAGE: &str = "/travel-memory.jpg";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DiaryEntry {
    pub id: DiaryEntryId,
    pub title: String,
    pub place: String,
    pub date: NaiveDate,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct NewDiaryEntry {
    pub title: String,
    pub place: String,
    pub date: NaiveDate,
    pub content: SanitizedText,
}

impl NewDiaryEntry {
    pub fn into_entry(self, id: DiaryEntryId) -> DiaryEntry {
        DiaryEntry {
            id,
            title: self.title,
            place: self.place,
            date: self.date,
            content: self.content.into_inner(),
            images: vec![DEFAULT_DIARY_IMAGE.to_string()],
        }
    }
}
