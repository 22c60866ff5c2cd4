pub mod faulty_store;
pub mod fixtures;
pub mod test_db;

#[allow(unused_imports)]
pub use faulty_store::*;
#[allow(unused_imports)]
pub use fixtures::*;
pub use test_db::*;
