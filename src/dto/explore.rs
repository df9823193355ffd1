use serde::{Deserialize, Serialize};

use crate::domain::moment::Moment;
use crate::list_view::{FilterOption, ListViewState};
use crate::pagination::Paginated;

/// Query parameters accepted by the explore feed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreQuery {
    /// Free text matched against title, description and place.
    pub search: Option<String>,
    /// Wire name of a moment type, e.g. `site_visit`.
    #[serde(rename = "type")]
    pub moment_type: Option<String>,
    pub page: Option<usize>,
    #[serde(alias = "per_page")]
    pub per_page: Option<usize>,
}

/// A public moment as shown in the feed, credited to its traveler.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMoment {
    #[serde(flatten)]
    pub moment: Moment,
    pub author: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorePageData {
    /// Paged list of every matching public moment.
    pub popular: Paginated<FeedMoment>,
    /// The first half of the matching moments, rounded up.
    pub following: Vec<FeedMoment>,
    pub filter_options: Vec<FilterOption>,
    pub state: ListViewState,
    pub summary: String,
    pub has_active_filters: bool,
}
