pub mod daily_plan_repository;
pub mod time_block_repository;
pub mod user_repository;

mod row_decode;
