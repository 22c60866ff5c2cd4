use crate::Result as DbErrorResult;

use pb_core::{User, UserId};

/// One row of a full `users` scan.
///
/// `identity` and `email` are the raw column text, so a row whose other
/// columns cannot be decoded can still be reported. `user` carries the decode
/// result for that row alone.
#[derive(Debug)]
pub struct ListedUser {
    pub id: UserId,
    pub identity: String,
    pub email: String,
    pub user: DbErrorResult<User>,
}
