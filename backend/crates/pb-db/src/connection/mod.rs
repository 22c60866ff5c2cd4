pub mod pool;
pub mod store_options;
