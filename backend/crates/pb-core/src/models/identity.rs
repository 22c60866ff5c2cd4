use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// External-provider subject id (Google `sub`) shared by both applications.
///
/// At most one unified user may carry a given identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    #[track_caller]
    pub fn new(value: impl Into<String>) -> CoreResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CoreError::InvalidIdentity {
                value,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
