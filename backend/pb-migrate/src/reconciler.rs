use crate::error::ReconcileError;

use pb_core::{ErrorLocation, NewUser, User, UserId};
use pb_db::PlannerStore;

use std::panic::Location;

use log::{debug, info, warn};

/// What happens to auxiliary profile data of users already in the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileBackfill {
    /// Existing target users are left untouched.
    #[default]
    Disabled,
    /// NULL fields on the target user are filled from the source user.
    FillMissing,
}

impl From<bool> for ProfileBackfill {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::FillMissing
        } else {
            Self::Disabled
        }
    }
}

/// Proof that a target user was inserted during this run.
///
/// Only the reconciler constructs it, so subtree copies can only be started
/// for users that did not exist in the target before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedUser {
    source_user_id: UserId,
    target_user_id: UserId,
}

impl CreatedUser {
    pub fn source_user_id(&self) -> UserId {
        self.source_user_id
    }

    pub fn target_user_id(&self) -> UserId {
        self.target_user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    Created(CreatedUser),
    AlreadyPresent {
        target_user_id: UserId,
        profile_backfilled: bool,
    },
}

impl Reconciliation {
    pub fn target_user_id(&self) -> UserId {
        match self {
            Self::Created(created) => created.target_user_id,
            Self::AlreadyPresent { target_user_id, .. } => *target_user_id,
        }
    }
}

/// Maps source users onto target users by Identity.
pub struct Reconciler<'a> {
    target: &'a dyn PlannerStore,
    backfill: ProfileBackfill,
}

impl<'a> Reconciler<'a> {
    pub fn new(target: &'a dyn PlannerStore, backfill: ProfileBackfill) -> Self {
        Self { target, backfill }
    }

    /// Find or create the target user for `source_user`.
    ///
    /// One lookup and at most one insert. A uniqueness conflict on insert is
    /// answered with a single re-read; the insert is never repeated.
    pub async fn reconcile(&self, source_user: &User) -> Result<Reconciliation, ReconcileError> {
        if let Some(existing) = self.lookup(source_user).await? {
            return self.already_present(source_user, existing).await;
        }

        match self.target.insert_user(&NewUser::copy_of(source_user)).await {
            Ok(created) => {
                info!(
                    "Created target user {} for {} (source id {})",
                    created.id, source_user.email, source_user.id
                );
                Ok(Reconciliation::Created(CreatedUser {
                    source_user_id: source_user.id,
                    target_user_id: created.id,
                }))
            }
            Err(e) if e.is_conflict() => {
                warn!(
                    "Identity {} was inserted concurrently, re-reading target",
                    source_user.identity
                );
                match self.lookup(source_user).await? {
                    Some(existing) => self.already_present(source_user, existing).await,
                    None => Err(ReconcileError::Conflict {
                        identity: source_user.identity.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }),
                }
            }
            Err(e) => Err(ReconcileError::Insert {
                identity: source_user.identity.to_string(),
                source: e,
            }),
        }
    }

    async fn lookup(&self, source_user: &User) -> Result<Option<User>, ReconcileError> {
        self.target
            .find_user_by_identity(&source_user.identity)
            .await
            .map_err(|e| ReconcileError::Lookup {
                identity: source_user.identity.to_string(),
                source: e,
            })
    }

    async fn already_present(
        &self,
        source_user: &User,
        existing: User,
    ) -> Result<Reconciliation, ReconcileError> {
        info!(
            "User already exists: {} (target id {})",
            source_user.email, existing.id
        );

        let profile_backfilled = match self.backfill {
            ProfileBackfill::Disabled => false,
            ProfileBackfill::FillMissing => {
                let missing = existing.profile().missing_from(&source_user.profile());
                if missing.is_empty() {
                    false
                } else {
                    self.target
                        .update_user_profile(existing.id, &missing)
                        .await
                        .map_err(|e| ReconcileError::Backfill {
                            user_id: existing.id,
                            source: e,
                        })?;
                    debug!("Filled missing profile fields on target user {}", existing.id);
                    true
                }
            }
        };

        Ok(Reconciliation::AlreadyPresent {
            target_user_id: existing.id,
            profile_backfilled,
        })
    }
}
