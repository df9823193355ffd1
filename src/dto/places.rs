use serde::{Deserialize, Serialize};

use crate::domain::place::Place;
use crate::domain::review::{Review, ReviewSummary};
use crate::list_view::{FilterOption, ListViewState};
use crate::pagination::Paginated;

/// Query parameters accepted by the places listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesQuery {
    /// Free text matched against name, city and country.
    pub search: Option<String>,
    /// Area selected in the filter strip.
    pub area: Option<String>,
    /// Optional tag every listed place must carry.
    pub tag: Option<String>,
    /// Optional city every listed place must be in.
    pub city: Option<String>,
    pub page: Option<usize>,
    #[serde(alias = "per_page")]
    pub per_page: Option<usize>,
}

/// Data required to render the places listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesPageData {
    pub places: Paginated<Place>,
    /// Sorted distinct cities of every place, for the city picker.
    pub cities: Vec<String>,
    pub filter_options: Vec<FilterOption>,
    pub state: ListViewState,
    pub summary: String,
    pub has_active_filters: bool,
}

/// A place with its related places, reviews and wishlist flag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailData {
    pub place: Place,
    pub related: Vec<Place>,
    pub in_wishlist: bool,
    pub reviews: Vec<Review>,
    pub review_summary: ReviewSummary,
}
