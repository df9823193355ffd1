use std::collections::BTreeSet;

use crate::domain::place::{NewPlace, Place};
use crate::domain::review::{Review, ReviewSummary};
use crate::domain::types::PlaceId;
use crate::dto::places::{PlaceDetailData, PlacesPageData, PlacesQuery};
use crate::forms::place::PlaceForm;
use crate::forms::review::ReviewForm;
use crate::list_view::{FilterOption, ListFields, ListView};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{PlaceReader, PlaceWriter, ReviewReader, ReviewWriter, WishlistStore};
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;

/// Search over name, city and country; filter on area.
fn place_fields(places: &[Place]) -> ListFields<Place> {
    let areas: BTreeSet<&str> = places
        .iter()
        .map(|p| p.area.as_str())
        .filter(|a| !a.is_empty())
        .collect();
    let options = areas
        .into_iter()
        .map(|area| FilterOption::new(area, area))
        .collect();

    ListFields::new(Place::search_text).filter_by(|p: &Place| p.area.clone(), options)
}

/// Loads one page of places for the listing.
pub fn load_places_page<R>(repo: &R, query: PlacesQuery) -> ServiceResult<PlacesPageData>
where
    R: PlaceReader + ?Sized,
{
    let mut places = repo.list_places().map_err(|err| {
        log::error!("Failed to list places: {err}");
        err
    })?;

    let cities: BTreeSet<&str> = places
        .iter()
        .map(|p| p.city.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    let cities = cities.into_iter().map(str::to_string).collect();

    if let Some(tag) = query.tag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        places.retain(|p| p.has_tag(tag));
    }
    if let Some(city) = query.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        places.retain(|p| p.city == city);
    }

    let fields = place_fields(&places);
    let mut view = ListView::new(&places, fields)
        .items_per_page(query.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE));

    if let Some(search) = query.search {
        view.set_search_query(search);
    }
    view.select_filter(query.area.filter(|a| !a.trim().is_empty()));
    view.set_page(query.page.unwrap_or(1));

    Ok(PlacesPageData {
        places: view.paginate().map(Clone::clone),
        cities,
        filter_options: view.filter_options().to_vec(),
        state: view.state().clone(),
        summary: view.summary(),
        has_active_filters: view.has_active_filters(),
    })
}

/// Finds a place by slug, falling back to a numeric id.
fn find_place<R>(repo: &R, key: &str) -> ServiceResult<Place>
where
    R: PlaceReader + ?Sized,
{
    if let Some(place) = repo.get_place_by_slug(key)? {
        return Ok(place);
    }

    let id = key
        .parse::<i64>()
        .ok()
        .and_then(|id| PlaceId::new(id).ok())
        .ok_or(ServiceError::NotFound)?;

    repo.get_place_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Loads a place with its related places, reviews and wishlist state.
pub fn load_place_detail<R>(repo: &R, key: &str) -> ServiceResult<PlaceDetailData>
where
    R: PlaceReader + ReviewReader + WishlistStore + ?Sized,
{
    let place = find_place(repo, key)?;

    let related = repo
        .list_places()?
        .into_iter()
        .filter(|p| place.related_places.contains(&p.id))
        .collect();

    let in_wishlist = repo.list_wishlist()?.contains(&place.id);

    let reviews = repo.list_place_reviews(place.id).map_err(|err| {
        log::error!("Failed to list reviews of place {}: {err}", place.id);
        err
    })?;
    let review_summary = ReviewSummary::from_reviews(&reviews);

    Ok(PlaceDetailData {
        place,
        related,
        in_wishlist,
        reviews,
        review_summary,
    })
}

/// Stores a review of an existing place, credited to the signed-in user.
pub fn add_review<R>(
    repo: &R,
    session: &SessionContext,
    place_id: PlaceId,
    form: ReviewForm,
) -> ServiceResult<Review>
where
    R: PlaceReader + ReviewWriter + ?Sized,
{
    if repo.get_place_by_id(place_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let new_review = form
        .into_new_review(place_id)
        .map_err(|err| {
            log::error!("Failed to validate review form: {err}");
            ServiceError::from(err)
        })?
        .written_by(session.display_name());

    let review = repo.create_review(new_review).map_err(|err| {
        log::error!("Failed to add a review: {err}");
        err
    })?;

    log::info!("Added review {} of place {place_id}", review.id);
    Ok(review)
}

/// Validates the form and stores the new place ahead of the existing ones.
pub fn add_place<R>(repo: &R, form: PlaceForm) -> ServiceResult<Place>
where
    R: PlaceWriter + ?Sized,
{
    let new_place = NewPlace::try_from(form).map_err(|err| {
        log::error!("Failed to validate place form: {err}");
        ServiceError::from(err)
    })?;

    let place = repo.create_place(new_place).map_err(|err| {
        log::error!("Failed to add a place: {err}");
        err
    })?;

    log::info!("Added place {} ({})", place.name, place.id);
    Ok(place)
}

/// Adds or removes a place from the wishlist; returns the new membership.
pub fn toggle_wishlist<R>(repo: &R, place_id: PlaceId) -> ServiceResult<bool>
where
    R: PlaceReader + WishlistStore + ?Sized,
{
    if repo.get_place_by_id(place_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let added = repo.toggle_wishlist(place_id).map_err(|err| {
        log::error!("Failed to update wishlist: {err}");
        err
    })?;

    Ok(added)
}

/// Wishlisted places in the order they were added.
pub fn load_wishlist<R>(repo: &R) -> ServiceResult<Vec<Place>>
where
    R: PlaceReader + WishlistStore + ?Sized,
{
    let places = repo.list_places()?;
    let wishlist = repo.list_wishlist()?;

    Ok(wishlist
        .into_iter()
        .filter_map(|id| places.iter().find(|p| p.id == id).cloned())
        .collect())
}
