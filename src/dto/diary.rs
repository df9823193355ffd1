use serde::Serialize;

use crate::domain::diary::DiaryEntry;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryPageData {
    /// Newest entries first.
    pub entries: Vec<DiaryEntry>,
}
