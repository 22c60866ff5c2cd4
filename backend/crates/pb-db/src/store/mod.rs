pub mod listed_user;
pub mod planner_store;
pub mod sqlite_store;
