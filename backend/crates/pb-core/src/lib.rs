pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::daily_plan::{DailyPlan, NewDailyPlan};
pub use models::identity::Identity;
pub use models::ids::{BlockId, PlanId, UserId};
pub use models::time_block::{NewTimeBlock, TimeBlock};
pub use models::user::{NewUser, User, UserProfile};
