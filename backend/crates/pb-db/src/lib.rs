pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

pub use connection::pool::{connect_pool, run_migrations};
pub use connection::store_options::StoreOptions;
pub use error::{DbError, Result};
pub use repositories::daily_plan_repository::DailyPlanRepository;
pub use repositories::time_block_repository::TimeBlockRepository;
pub use repositories::user_repository::UserRepository;
pub use store::listed_user::ListedUser;
pub use store::planner_store::PlannerStore;
pub use store::sqlite_store::SqliteStore;
