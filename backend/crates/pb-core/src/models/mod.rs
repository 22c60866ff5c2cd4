pub mod daily_plan;
pub mod identity;
pub mod ids;
pub mod time_block;
pub mod user;
