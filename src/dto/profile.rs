use serde::Serialize;

use crate::domain::place::Place;
use crate::domain::user::UserProfile;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePageData {
    pub profile: UserProfile,
    pub wishlist: Vec<Place>,
}
