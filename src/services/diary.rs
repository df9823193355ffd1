use crate::domain::diary::{DiaryEntry, NewDiaryEntry};
use crate::dto::diary::DiaryPageData;
use crate::forms::diary::DiaryForm;
use crate::repository::{DiaryReader, DiaryWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn load_diary<R>(repo: &R) -> ServiceResult<DiaryPageData>
where
    R: DiaryReader + ?Sized,
{
    let entries = repo.list_diary_entries().map_err(|err| {
        log::error!("Failed to list diary entries: {err}");
        err
    })?;

    Ok(DiaryPageData { entries })
}

/// Validates the form and stores the entry at the top of the diary.
pub fn add_diary_entry<R>(repo: &R, form: DiaryForm) -> ServiceResult<DiaryEntry>
where
    R: DiaryWriter + ?Sized,
{
    let new_entry = NewDiaryEntry::try_from(form).map_err(|err| {
        log::error!("Failed to validate diary form: {err}");
        ServiceError::from(err)
    })?;

    let entry = repo.create_diary_entry(new_entry).map_err(|err| {
        log::error!("Failed to add a diary entry: {err}");
        err
    })?;

    Ok(entry)
}
