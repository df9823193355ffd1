use crate::domain::moment::{Moment, MomentType};
use crate::dto::explore::{ExplorePageData, ExploreQuery, FeedMoment};
use crate::list_view::{FilterOption, ListFields, ListView};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::MomentReader;
use crate::services::ServiceResult;

fn moment_fields() -> ListFields<Moment> {
    let options = MomentType::ALL
        .into_iter()
        .map(|kind| FilterOption::new(kind.as_str(), kind.label()))
        .collect();

    ListFields::new(Moment::search_text)
        .filter_by(|m: &Moment| m.moment_type.as_str().to_string(), options)
}

fn feed_moment(moment: &Moment) -> FeedMoment {
    FeedMoment {
        author: format!("Traveler {}", moment.trip_id),
        moment: moment.clone(),
    }
}

/// Loads the explore feed: public moments from every trip.
pub fn load_explore<R>(repo: &R, query: ExploreQuery) -> ServiceResult<ExplorePageData>
where
    R: MomentReader + ?Sized,
{
    let mut moments = repo.list_moments().map_err(|err| {
        log::error!("Failed to list moments: {err}");
        err
    })?;
    moments.retain(|m| m.is_public);

    let mut view = ListView::new(&moments, moment_fields())
        .items_per_page(query.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE));

    if let Some(search) = query.search {
        view.set_search_query(search);
    }
    view.select_filter(query.moment_type.filter(|t| !t.trim().is_empty()));
    view.set_page(query.page.unwrap_or(1));

    let matching = view.filtered_items();
    let following = matching
        .iter()
        .take(matching.len().div_ceil(2))
        .map(|m| feed_moment(m))
        .collect();

    Ok(ExplorePageData {
        popular: view.paginate().map(feed_moment),
        following,
        filter_options: view.filter_options().to_vec(),
        state: view.state().clone(),
        summary: view.summary(),
        has_active_filters: view.has_active_filters(),
    })
}
