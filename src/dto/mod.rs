pub mod dashboard;
pub mod diary;
pub mod explore;
pub mod places;
pub mod profile;
pub mod trips;
