use serde::Serialize;

use crate::domain::place::Place;
use crate::domain::trip::Trip;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Highest rated places, best first.
    pub top_rated: Vec<Place>,
    /// Leading trips in listing order.
    pub nearby_trips: Vec<Trip>,
}
