
use pb_core::{Identity, User, UserId};
use pb_db::ListedUser;

use chrono::Utc;

pub(crate) fn user(id: i64, identity: &str) -> User {
    User {
        id: UserId(id),
        identity: Identity::new(identity).unwrap(),
        email: format!("{identity}@example.com"),
        name: String::from("Test User"),
        credentials_info: None,
        selected_calendars: None,
        created_at: Utc::now(),
    }
}

pub(crate) fn listed(id: i64, identity: &str) -> ListedUser {
    ListedUser {
        id: UserId(id),
        identity: identity.to_string(),
        email: format!("{identity}@example.com"),
        user: Ok(user(id, identity)),
    }
}
