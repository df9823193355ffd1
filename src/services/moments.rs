use crate::domain::moment::Moment;
use crate::domain::types::{MomentId, TripId};
use crate::forms::moment::MomentForm;
use crate::repository::{MomentReader, MomentWriter, TripReader};
use crate::services::{ServiceError, ServiceResult};

/// Records a moment on an existing trip.
pub fn add_moment<R>(repo: &R, trip_id: TripId, form: MomentForm) -> ServiceResult<Moment>
where
    R: TripReader + MomentWriter + ?Sized,
{
    if repo.get_trip_by_id(trip_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let new_moment = form.into_new_moment(trip_id).map_err(|err| {
        log::error!("Failed to validate moment form: {err}");
        ServiceError::from(err)
    })?;

    let moment = repo.create_moment(new_moment).map_err(|err| {
        log::error!("Failed to add a moment to trip {trip_id}: {err}");
        err
    })?;

    Ok(moment)
}

/// Replaces the editable fields of a moment, keeping its trip and date.
pub fn update_moment<R>(repo: &R, moment_id: MomentId, form: MomentForm) -> ServiceResult<Moment>
where
    R: MomentReader + MomentWriter + ?Sized,
{
    let existing = repo
        .get_moment_by_id(moment_id)?
        .ok_or(ServiceError::NotFound)?;

    let updates = form.into_new_moment(existing.trip_id)?;

    let moment = repo.update_moment(moment_id, updates).map_err(|err| {
        log::error!("Failed to update moment {moment_id}: {err}");
        err
    })?;

    Ok(moment)
}

pub fn delete_moment<R>(repo: &R, moment_id: MomentId) -> ServiceResult<()>
where
    R: MomentWriter + ?Sized,
{
    repo.delete_moment(moment_id).map_err(|err| {
        log::error!("Failed to delete moment {moment_id}: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::moment::MomentType;
    use crate::domain::trip::Trip;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn trip() -> Trip {
        Trip {
            id: TripId::FIRST,
            title: "Kyoto".into(),
            destination: "Japan".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2025, 4, 9).expect("valid date"),
            description: String::new(),
            open_for_join: false,
            participants: vec![],
        }
    }

    fn form(kind: MomentType) -> MomentForm {
        MomentForm {
            title: "Fushimi Inari".into(),
            description: "Thousand gates".into(),
            moment_type: kind,
            other_type: None,
            place: Some("Kyoto".into()),
            photos: vec![],
            is_public: true,
        }
    }

    fn stored(id: i64) -> Moment {
        form(MomentType::SiteVisit)
            .into_new_moment(TripId::FIRST)
            .expect("valid moment")
            .into_moment(
                MomentId::new(id).expect("valid id"),
                NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date"),
            )
    }

    #[test]
    fn add_requires_existing_trip() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id().returning(|_| Ok(None));
        repo.expect_create_moment().times(0);

        let result = add_moment(&repo, TripId::FIRST, form(MomentType::Stay));

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn add_rejects_unspecified_other_type() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id().returning(|_| Ok(Some(trip())));
        repo.expect_create_moment().times(0);

        let result = add_moment(&repo, TripId::FIRST, form(MomentType::Other));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn add_stores_moment_on_trip() {
        let mut repo = MockRepository::new();
        repo.expect_get_trip_by_id().returning(|_| Ok(Some(trip())));
        repo.expect_create_moment()
            .withf(|m| m.trip_id == TripId::FIRST && m.moment_type == MomentType::Event)
            .times(1)
            .returning(|m| {
                Ok(m.into_moment(
                    MomentId::FIRST,
                    NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date"),
                ))
            });

        let moment = add_moment(&repo, TripId::FIRST, form(MomentType::Event)).expect("added");

        assert_eq!(moment.type_label(), "Event");
    }

    #[test]
    fn update_keeps_trip_of_existing_moment() {
        let mut repo = MockRepository::new();
        repo.expect_get_moment_by_id().returning(|id| Ok(Some(stored(id.get()))));
        repo.expect_update_moment()
            .withf(|id, m| id.get() == 3 && m.trip_id == TripId::FIRST && m.title == "Fushimi Inari")
            .times(1)
            .returning(|id, m| {
                Ok(m.into_moment(id, NaiveDate::from_ymd_opt(2025, 4, 2).expect("valid date")))
            });

        let moment = update_moment(&repo, MomentId::new(3).expect("valid id"), form(MomentType::Stay))
            .expect("updated");

        assert_eq!(moment.moment_type, MomentType::Stay);
    }

    #[test]
    fn delete_unknown_moment_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_moment()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = delete_moment(&repo, MomentId::new(9).expect("valid id"));

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
