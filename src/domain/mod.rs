pub mod diary;
pub mod moment;
pub mod place;
pub mod review;
pub mod trip;
pub mod types;
pub mod user;
