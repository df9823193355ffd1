use crate::domain::diary::{DiaryEntry, NewDiaryEntry};
use crate::domain::moment::{Moment, NewMoment};
use crate::domain::place::{NewPlace, Place};
use crate::domain::review::{NewReview, Review};
use crate::domain::trip::{NewTrip, Trip};
use crate::domain::types::{MomentId, PlaceId, TripId};
use crate::domain::user::UserProfile;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod fixtures;
pub mod local;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod storage;

pub use local::LocalRepository;

pub trait PlaceReader {
    fn list_places(&self) -> RepositoryResult<Vec<Place>>;
    fn get_place_by_id(&self, id: PlaceId) -> RepositoryResult<Option<Place>>;
    fn get_place_by_slug(&self, slug: &str) -> RepositoryResult<Option<Place>>;
}

pub trait PlaceWriter {
    fn create_place(&self, new_place: NewPlace) -> RepositoryResult<Place>;
}

pub trait ReviewReader {
    /// Reviews of one place, oldest first.
    fn list_place_reviews(&self, place_id: PlaceId) -> RepositoryResult<Vec<Review>>;
}

pub trait ReviewWriter {
    fn create_review(&self, new_review: NewReview) -> RepositoryResult<Review>;
}

pub trait TripReader {
    fn list_trips(&self) -> RepositoryResult<Vec<Trip>>;
    fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>>;
}

pub trait TripWriter {
    fn create_trip(&self, new_trip: NewTrip) -> RepositoryResult<Trip>;
}

pub trait MomentReader {
    /// Every moment across all trips, in stored order.
    fn list_moments(&self) -> RepositoryResult<Vec<Moment>>;
    fn list_trip_moments(&self, trip_id: TripId) -> RepositoryResult<Vec<Moment>>;
    fn get_moment_by_id(&self, id: MomentId) -> RepositoryResult<Option<Moment>>;
}

pub trait MomentWriter {
    fn create_moment(&self, new_moment: NewMoment) -> RepositoryResult<Moment>;
    fn update_moment(&self, id: MomentId, updates: NewMoment) -> RepositoryResult<Moment>;
    fn delete_moment(&self, id: MomentId) -> RepositoryResult<()>;
}

pub trait DiaryReader {
    fn list_diary_entries(&self) -> RepositoryResult<Vec<DiaryEntry>>;
}

pub trait DiaryWriter {
    fn create_diary_entry(&self, new_entry: NewDiaryEntry) -> RepositoryResult<DiaryEntry>;
}

pub trait WishlistStore {
    fn list_wishlist(&self) -> RepositoryResult<Vec<PlaceId>>;
    /// Adds or removes `place_id`; returns whether it is now wishlisted.
    fn toggle_wishlist(&self, place_id: PlaceId) -> RepositoryResult<bool>;
}

pub trait ProfileStore {
    fn load_profile(&self) -> RepositoryResult<Option<UserProfile>>;
    fn save_profile(&self, profile: &UserProfile) -> RepositoryResult<()>;
    fn clear_profile(&self) -> RepositoryResult<()>;
}
