mod identity;
mod time_block;
mod user;
