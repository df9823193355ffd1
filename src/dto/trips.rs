use serde::{Deserialize, Serialize};

use crate::domain::moment::Moment;
use crate::domain::trip::Trip;
use crate::list_view::{FilterOption, ListViewState};
use crate::pagination::Paginated;

/// Query parameters accepted by the trips listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripsQuery {
    /// Free text matched against title and destination.
    pub search: Option<String>,
    /// `Some(true)` keeps only trips open to new participants.
    pub open: Option<bool>,
    pub page: Option<usize>,
    #[serde(alias = "per_page")]
    pub per_page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripsPageData {
    pub trips: Paginated<Trip>,
    pub filter_options: Vec<FilterOption>,
    pub state: ListViewState,
    pub summary: String,
    pub has_active_filters: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetailData {
    pub trip: Trip,
    pub moments: Vec<Moment>,
}
