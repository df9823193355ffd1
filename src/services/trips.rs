use crate::domain::trip::{NewTrip, Trip};
use crate::domain::types::TripId;
use crate::dto::trips::{TripDetailData, TripsPageData, TripsQuery};
use crate::forms::trip::TripForm;
use crate::list_view::{FilterOption, ListFields, ListView};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{MomentReader, TripReader, TripWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;

fn trip_fields() -> ListFields<Trip> {
    ListFields::new(Trip::search_text).filter_by(
        |t: &Trip| t.open_for_join.to_string(),
        vec![
            FilterOption::new("true", "Open to join"),
            FilterOption::new("false", "Private"),
        ],
    )
}

/// Loads one page of trips, newest first.
pub fn load_trips_page<R>(repo: &R, query: TripsQuery) -> ServiceResult<TripsPageData>
where
    R: TripReader + ?Sized,
{
    let trips = repo.list_trips().map_err(|err| {
        log::error!("Failed to list trips: {err}");
        err
    })?;

    let mut view = ListView::new(&trips, trip_fields())
        .items_per_page(query.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE));

    if let Some(search) = query.search {
        view.set_search_query(search);
    }
    view.select_filter(query.open.map(|open| open.to_string()));
    view.set_page(query.page.unwrap_or(1));

    Ok(TripsPageData {
        trips: view.paginate().map(Clone::clone),
        filter_options: view.filter_options().to_vec(),
        state: view.state().clone(),
        summary: view.summary(),
        has_active_filters: view.has_active_filters(),
    })
}

/// Loads a trip together with its moments.
pub fn load_trip_detail<R>(repo: &R, trip_id: TripId) -> ServiceResult<TripDetailData>
where
    R: TripReader + MomentReader + ?Sized,
{
    let trip = repo.get_trip_by_id(trip_id)?.ok_or(ServiceError::NotFound)?;

    let moments = repo.list_trip_moments(trip_id).map_err(|err| {
        log::error!("Failed to list moments of trip {trip_id}: {err}");
        err
    })?;

    Ok(TripDetailData { trip, moments })
}

/// Plans a new trip; the signed-in user, if any, becomes its first
/// participant.
pub fn create_trip<R>(repo: &R, session: &SessionContext, form: TripForm) -> ServiceResult<Trip>
where
    R: TripWriter + ?Sized,
{
    let new_trip = NewTrip::try_from(form)
        .map_err(|err| {
            log::error!("Failed to validate trip form: {err}");
            ServiceError::from(err)
        })?
        .created_by(session.display_name());

    let trip = repo.create_trip(new_trip).map_err(|err| {
        log::error!("Failed to create a trip: {err}");
        err
    })?;

    log::info!("Created trip {} ({})", trip.title, trip.id);
    Ok(trip)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::moment::Moment;
    use crate::domain::trip::ANONYMOUS_PARTICIPANT;
    use crate::domain::types::{MomentId, UserEmail, next_id};
    use crate::domain::user::UserProfile;
    use crate::repository::ProfileStore;
    use crate::repository::errors::RepositoryResult;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn trip(id: i64, title: &str, destination: &str, open: bool) -> Trip {
        Trip {
            id: TripId::new(id).unwrap(),
            title: title.into(),
            destination: destination.into(),
            start_date: date("2025-06-01"),
            end_date: date("2025-06-10"),
            description: String::new(),
            open_for_join: open,
            participants: vec![],
        }
    }

    #[derive(Default)]
    struct MockRepo {
        trips: RefCell<Vec<Trip>>,
    }

    impl MockRepo {
        fn seeded() -> Self {
            Self {
                trips: RefCell::new(vec![
                    trip(1, "Island Hopping", "Greece", true),
                    trip(2, "Temple Run", "Japan", false),
                    trip(3, "Rice Terraces", "Bali", true),
                ]),
            }
        }
    }

    impl TripReader for MockRepo {
        fn list_trips(&self) -> RepositoryResult<Vec<Trip>> {
            Ok(self.trips.borrow().clone())
        }

        fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>> {
            Ok(self.trips.borrow().iter().find(|t| t.id == id).cloned())
        }
    }

    impl TripWriter for MockRepo {
        fn create_trip(&self, new_trip: NewTrip) -> RepositoryResult<Trip> {
            let mut trips = self.trips.borrow_mut();
            let id = next_id(trips.iter().map(|t| t.id), TripId::FIRST, TripId::next);
            let trip = new_trip.into_trip(id);
            trips.insert(0, trip.clone());
            Ok(trip)
        }
    }

    impl MomentReader for MockRepo {
        fn list_moments(&self) -> RepositoryResult<Vec<Moment>> {
            Ok(vec![])
        }

        fn list_trip_moments(&self, _trip_id: TripId) -> RepositoryResult<Vec<Moment>> {
            Ok(vec![])
        }

        fn get_moment_by_id(&self, _id: MomentId) -> RepositoryResult<Option<Moment>> {
            Ok(None)
        }
    }

    struct NoopStore;

    impl ProfileStore for NoopStore {
        fn load_profile(&self) -> RepositoryResult<Option<UserProfile>> {
            Ok(None)
        }

        fn save_profile(&self, _profile: &UserProfile) -> RepositoryResult<()> {
            Ok(())
        }

        fn clear_profile(&self) -> RepositoryResult<()> {
            Ok(())
        }
    }

    fn form(title: &str, start: &str, end: &str) -> TripForm {
        TripForm {
            title: title.into(),
            destination: "Iceland".into(),
            start_date: start.into(),
            end_date: end.into(),
            description: "Ring road".into(),
            open_for_join: true,
        }
    }

    #[test]
    fn open_filter_and_search() {
        let repo = MockRepo::seeded();

        let open = load_trips_page(
            &repo,
            TripsQuery {
                open: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        let titles: Vec<_> = open.trips.items.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Island Hopping", "Rice Terraces"]);
        assert_eq!(open.state.selected_filter.as_deref(), Some("true"));

        let searched = load_trips_page(
            &repo,
            TripsQuery {
                search: Some("japan".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(searched.trips.total_items, 1);
        assert_eq!(searched.trips.items[0].title, "Temple Run");
    }

    #[test]
    fn created_trip_listed_first_with_creator() {
        let repo = MockRepo::seeded();
        let mut session = SessionContext::anonymous();

        let anonymous = create_trip(&repo, &session, form("Fjords", "2025-07-01", "2025-07-05")).unwrap();
        assert_eq!(anonymous.participants[0].name, ANONYMOUS_PARTICIPANT);

        let email = UserEmail::new("ana@example.com").unwrap();
        session
            .sign_in(&NoopStore, UserProfile::from_email(email))
            .unwrap();

        let trip = create_trip(&repo, &session, form("Glaciers", "2025-08-01", "2025-08-01")).unwrap();
        assert_eq!(trip.participants[0].name, "ana");
        assert_eq!(trip.id.get(), 5);

        let page = load_trips_page(&repo, TripsQuery::default()).unwrap();
        assert_eq!(page.trips.items[0].title, "Glaciers");
    }

    #[test]
    fn end_before_start_rejected() {
        let repo = MockRepo::default();
        let session = SessionContext::anonymous();

        let result = create_trip(&repo, &session, form("Back", "2025-07-05", "2025-07-01"));

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert!(repo.trips.borrow().is_empty());
    }

    #[test]
    fn missing_trip_is_not_found() {
        let repo = MockRepo::seeded();
        let result = load_trip_detail(&repo, TripId::new(42).unwrap());
        assert!(matches!(result, Err(ServiceError::NotFound)));
        assert_eq!(
            load_trip_detail(&repo, TripId::FIRST).unwrap().trip.title,
            "Island Hopping"
        );
    }
}
