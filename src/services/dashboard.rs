use crate::dto::dashboard::DashboardData;
use crate::repository::{PlaceReader, TripReader};
use crate::services::ServiceResult;

/// Places shown in the top rated strip.
pub const TOP_RATED_COUNT: usize = 4;
/// Trips shown in the nearby strip.
pub const NEARBY_TRIPS_COUNT: usize = 3;

/// Loads the home screen: top rated places and the leading trips.
pub fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardData>
where
    R: PlaceReader + TripReader + ?Sized,
{
    let mut places = repo.list_places().map_err(|err| {
        log::error!("Failed to list places: {err}");
        err
    })?;
    // Stable, so equally rated places keep their listing order.
    places.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    places.truncate(TOP_RATED_COUNT);

    let mut trips = repo.list_trips().map_err(|err| {
        log::error!("Failed to list trips: {err}");
        err
    })?;
    trips.truncate(NEARBY_TRIPS_COUNT);

    Ok(DashboardData {
        top_rated: places,
        nearby_trips: trips,
    })
}
