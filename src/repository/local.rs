//! Repository backed by [`LocalStorage`] with fixture fallbacks.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::diary::{DiaryEntry, NewDiaryEntry};
use crate::domain::moment::{Moment, NewMoment};
use crate::domain::place::{NewPlace, Place};
use crate::domain::review::{NewReview, Review};
use crate::domain::trip::{NewTrip, Trip};
use crate::domain::types::{DiaryEntryId, MomentId, PlaceId, ReviewId, TripId, next_id};
use crate::domain::user::UserProfile;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::fixtures::Fixtures;
use crate::repository::storage::{
    DIARY_KEY, LocalStorage, MOMENTS_KEY, PLACES_KEY, REVIEWS_KEY, TRIPS_KEY, USER_KEY,
    WISHLIST_KEY,
};
use crate::repository::{
    DiaryReader, DiaryWriter, MomentReader, MomentWriter, PlaceReader, PlaceWriter,
    ProfileStore, ReviewReader, ReviewWriter, TripReader, TripWriter, WishlistStore,
};

#[derive(Clone)]
pub struct LocalRepository {
    storage: LocalStorage,
    fixtures: Arc<Fixtures>,
    write_lock: Arc<Mutex<()>>,
}

impl LocalRepository {
    pub fn new(storage: LocalStorage, fixtures: Fixtures) -> Self {
        Self {
            storage,
            fixtures: Arc::new(fixtures),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Stored collection for `key`, or the fixture copy when nothing is stored.
    fn load<T>(&self, key: &str, fallback: &[T]) -> RepositoryResult<Vec<T>>
    where
        T: DeserializeOwned + Clone,
    {
        Ok(self
            .storage
            .get::<Vec<T>>(key)?
            .unwrap_or_else(|| fallback.to_vec()))
    }

    fn store<T: Serialize>(&self, key: &str, items: &[T]) -> RepositoryResult<()> {
        self.storage.set(key, items)
    }

    /// Serializes read-modify-write cycles on the store.
    fn lock(&self) -> RepositoryResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| RepositoryError::Storage(format!("storage lock poisoned: {e}")))
    }
}

impl PlaceReader for LocalRepository {
    fn list_places(&self) -> RepositoryResult<Vec<Place>> {
        self.load(PLACES_KEY, &self.fixtures.places)
    }

    fn get_place_by_id(&self, id: PlaceId) -> RepositoryResult<Option<Place>> {
        Ok(self.list_places()?.into_iter().find(|p| p.id == id))
    }

    fn get_place_by_slug(&self, slug: &str) -> RepositoryResult<Option<Place>> {
        Ok(self.list_places()?.into_iter().find(|p| p.slug == slug))
    }
}

impl PlaceWriter for LocalRepository {
    fn create_place(&self, new_place: NewPlace) -> RepositoryResult<Place> {
        let _guard = self.lock()?;
        let mut places = self.list_places()?;
        let id = next_id(places.iter().map(|p| p.id), PlaceId::FIRST, PlaceId::next);
        let place = new_place.into_place(id);
        places.insert(0, place.clone());
        self.store(PLACES_KEY, &places)?;
        Ok(place)
    }
}

impl LocalRepository {
    fn all_reviews(&self) -> RepositoryResult<Vec<Review>> {
        self.load(REVIEWS_KEY, &[])
    }
}

impl ReviewReader for LocalRepository {
    fn list_place_reviews(&self, place_id: PlaceId) -> RepositoryResult<Vec<Review>> {
        Ok(self
            .all_reviews()?
            .into_iter()
            .filter(|r| r.place_id == place_id)
            .collect())
    }
}

impl ReviewWriter for LocalRepository {
    fn create_review(&self, new_review: NewReview) -> RepositoryResult<Review> {
        let _guard = self.lock()?;
        let mut reviews = self.all_reviews()?;
        let id = next_id(reviews.iter().map(|r| r.id), ReviewId::FIRST, ReviewId::next);
        let review = new_review.into_review(id, Utc::now());
        reviews.push(review.clone());
        self.store(REVIEWS_KEY, &reviews)?;
        Ok(review)
    }
}

impl TripReader for LocalRepository {
    fn list_trips(&self) -> RepositoryResult<Vec<Trip>> {
        self.load(TRIPS_KEY, &self.fixtures.trips)
    }

    fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>> {
        Ok(self.list_trips()?.into_iter().find(|t| t.id == id))
    }
}

impl TripWriter for LocalRepository {
    fn create_trip(&self, new_trip: NewTrip) -> RepositoryResult<Trip> {
        let _guard = self.lock()?;
        let mut trips = self.list_trips()?;
        let id = next_id(trips.iter().map(|t| t.id), TripId::FIRST, TripId::next);
        let trip = new_trip.into_trip(id);
        trips.insert(0, trip.clone());
        self.store(TRIPS_KEY, &trips)?;
        Ok(trip)
    }
}

impl MomentReader for LocalRepository {
    fn list_moments(&self) -> RepositoryResult<Vec<Moment>> {
        self.load(MOMENTS_KEY, &self.fixtures.moments)
    }

    fn list_trip_moments(&self, trip_id: TripId) -> RepositoryResult<Vec<Moment>> {
        Ok(self
            .list_moments()?
            .into_iter()
            .filter(|m| m.trip_id == trip_id)
            .collect())
    }

    fn get_moment_by_id(&self, id: MomentId) -> RepositoryResult<Option<Moment>> {
        Ok(self.list_moments()?.into_iter().find(|m| m.id == id))
    }
}

impl MomentWriter for LocalRepository {
    fn create_moment(&self, new_moment: NewMoment) -> RepositoryResult<Moment> {
        let _guard = self.lock()?;
        let mut moments = self.list_moments()?;
        let id = next_id(moments.iter().map(|m| m.id), MomentId::FIRST, MomentId::next);
        let moment = new_moment.into_moment(id, Utc::now().date_naive());
        moments.push(moment.clone());
        self.store(MOMENTS_KEY, &moments)?;
        Ok(moment)
    }

    fn update_moment(&self, id: MomentId, updates: NewMoment) -> RepositoryResult<Moment> {
        let _guard = self.lock()?;
        let mut moments = self.list_moments()?;
        let slot = moments
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let updated = updates.into_moment(id, slot.created_at);
        *slot = updated.clone();
        self.store(MOMENTS_KEY, &moments)?;
        Ok(updated)
    }

    fn delete_moment(&self, id: MomentId) -> RepositoryResult<()> {
        let _guard = self.lock()?;
        let mut moments = self.list_moments()?;
        let before = moments.len();
        moments.retain(|m| m.id != id);
        if moments.len() == before {
            return Err(RepositoryError::NotFound);
        }
        self.store(MOMENTS_KEY, &moments)
    }
}

impl DiaryReader for LocalRepository {
    fn list_diary_entries(&self) -> RepositoryResult<Vec<DiaryEntry>> {
        self.load(DIARY_KEY, &self.fixtures.diary_entries)
    }
}

impl DiaryWriter for LocalRepository {
    fn create_diary_entry(&self, new_entry: NewDiaryEntry) -> RepositoryResult<DiaryEntry> {
        let _guard = self.lock()?;
        let mut entries = self.list_diary_entries()?;
        let id = next_id(
            entries.iter().map(|e| e.id),
            DiaryEntryId::FIRST,
            DiaryEntryId::next,
        );
        let entry = new_entry.into_entry(id);
        entries.insert(0, entry.clone());
        self.store(DIARY_KEY, &entries)?;
        Ok(entry)
    }
}

impl WishlistStore for LocalRepository {
    fn list_wishlist(&self) -> RepositoryResult<Vec<PlaceId>> {
        Ok(self.storage.get(WISHLIST_KEY)?.unwrap_or_default())
    }

    fn toggle_wishlist(&self, place_id: PlaceId) -> RepositoryResult<bool> {
        let _guard = self.lock()?;
        let mut wishlist = self.list_wishlist()?;
        let added = if wishlist.contains(&place_id) {
            wishlist.retain(|id| *id != place_id);
            false
        } else {
            wishlist.push(place_id);
            true
        };
        self.store(WISHLIST_KEY, &wishlist)?;
        Ok(added)
    }
}

impl ProfileStore for LocalRepository {
    fn load_profile(&self) -> RepositoryResult<Option<UserProfile>> {
        self.storage.get(USER_KEY)
    }

    fn save_profile(&self, profile: &UserProfile) -> RepositoryResult<()> {
        self.storage.set(USER_KEY, profile)
    }

    fn clear_profile(&self) -> RepositoryResult<()> {
        self.storage.remove(USER_KEY)
    }
}
