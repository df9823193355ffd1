//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::diary::{DiaryEntry, NewDiaryEntry};
use crate::domain::moment::{Moment, NewMoment};
use crate::domain::place::{NewPlace, Place};
use crate::domain::review::{NewReview, Review};
use crate::domain::trip::{NewTrip, Trip};
use crate::domain::types::{MomentId, PlaceId, TripId};
use crate::domain::user::UserProfile;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DiaryReader, DiaryWriter, MomentReader, MomentWriter, PlaceReader, PlaceWriter,
    ProfileStore, ReviewReader, ReviewWriter, TripReader, TripWriter, WishlistStore,
};

mock! {
    pub Repository {}

    impl PlaceReader for Repository {
        fn list_places(&self) -> RepositoryResult<Vec<Place>>;
        fn get_place_by_id(&self, id: PlaceId) -> RepositoryResult<Option<Place>>;
        fn get_place_by_slug(&self, slug: &str) -> RepositoryResult<Option<Place>>;
    }

    impl PlaceWriter for Repository {
        fn create_place(&self, new_place: NewPlace) -> RepositoryResult<Place>;
    }

    impl ReviewReader for Repository {
        fn list_place_reviews(&self, place_id: PlaceId) -> RepositoryResult<Vec<Review>>;
    }

    impl ReviewWriter for Repository {
        fn create_review(&self, new_review: NewReview) -> RepositoryResult<Review>;
    }

    impl TripReader for Repository {
        fn list_trips(&self) -> RepositoryResult<Vec<Trip>>;
        fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>>;
    }

    impl TripWriter for Repository {
        fn create_trip(&self, new_trip: NewTrip) -> RepositoryResult<Trip>;
    }

    impl MomentReader for Repository {
        fn list_moments(&self) -> RepositoryResult<Vec<Moment>>;
        fn list_trip_moments(&self, trip_id: TripId) -> RepositoryResult<Vec<Moment>>;
        fn get_moment_by_id(&self, id: MomentId) -> RepositoryResult<Option<Moment>>;
    }

    impl MomentWriter for Repository {
        fn create_moment(&self, new_moment: NewMoment) -> RepositoryResult<Moment>;
        fn update_moment(&self, id: MomentId, updates: NewMoment) -> RepositoryResult<Moment>;
        fn delete_moment(&self, id: MomentId) -> RepositoryResult<()>;
    }

    impl DiaryReader for Repository {
        fn list_diary_entries(&self) -> RepositoryResult<Vec<DiaryEntry>>;
    }

    impl DiaryWriter for Repository {
        fn create_diary_entry(&self, new_entry: NewDiaryEntry) -> RepositoryResult<DiaryEntry>;
    }

    impl WishlistStore for Repository {
        fn list_wishlist(&self) -> RepositoryResult<Vec<PlaceId>>;
        fn toggle_wishlist(&self, place_id: PlaceId) -> RepositoryResult<bool>;
    }

    impl ProfileStore for Repository {
        fn load_profile(&self) -> RepositoryResult<Option<UserProfile>>;
        fn save_profile(&self, profile: &UserProfile) -> RepositoryResult<()>;
        fn clear_profile(&self) -> RepositoryResult<()>;
    }
}
