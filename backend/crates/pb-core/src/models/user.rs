use crate::{Identity, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unified user row. Carries the TimeBlocker calendar data next to the
/// shared identity so both applications can read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub identity: Identity,

    pub email: String,
    pub name: String,

    // Google Calendar access (TimeBlocker)
    pub credentials_info: Option<Value>,
    pub selected_calendars: Option<Value>,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            credentials_info: self.credentials_info.clone(),
            selected_calendars: self.selected_calendars.clone(),
        }
    }
}

/// Insert shape for `users`; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub identity: Identity,
    pub email: String,
    pub name: String,
    pub credentials_info: Option<Value>,
    pub selected_calendars: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Copy of another store's user, stamped with a fresh creation time.
    pub fn copy_of(user: &User) -> Self {
        Self {
            identity: user.identity.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            credentials_info: user.credentials_info.clone(),
            selected_calendars: user.selected_calendars.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Auxiliary profile data attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub credentials_info: Option<Value>,
    pub selected_calendars: Option<Value>,
}

impl UserProfile {
    /// Fields present in `source` but absent here. Fields already set are
    /// never part of the result.
    pub fn missing_from(&self, source: &UserProfile) -> UserProfile {
        UserProfile {
            credentials_info: match (&self.credentials_info, &source.credentials_info) {
                (None, Some(value)) => Some(value.clone()),
                _ => None,
            },
            selected_calendars: match (&self.selected_calendars, &source.selected_calendars) {
                (None, Some(value)) => Some(value.clone()),
                _ => None,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.credentials_info.is_none() && self.selected_calendars.is_none()
    }
}
