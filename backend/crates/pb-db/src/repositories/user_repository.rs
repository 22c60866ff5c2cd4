use crate::repositories::row_decode;
use crate::{DbError, ListedUser, Result as DbErrorResult};

use pb_core::{ErrorLocation, Identity, NewUser, User, UserId, UserProfile};

use std::panic::Location;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const USER_COLUMNS: &str =
    "id, google_id, email, name, credentials_info, selected_calendars, created_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert `user` and return the stored row.
    ///
    /// A duplicate `google_id` is reported as `DbError::Conflict`.
    pub async fn create(&self, user: &NewUser) -> DbErrorResult<User> {
        let credentials_info =
            row_decode::json_text(&user.credentials_info, "users.credentials_info")?;
        let selected_calendars =
            row_decode::json_text(&user.selected_calendars, "users.selected_calendars")?;
        let created_at = user.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                                   google_id, email, name,
                                   credentials_info, selected_calendars, created_at
                                   ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.identity.as_str())
        .bind(&user.email)
        .bind(&user.name)
        .bind(credentials_info)
        .bind(selected_calendars)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::Conflict {
                identity: user.identity.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => DbError::from(other),
        })?;

        Ok(User {
            id: UserId(result.last_insert_rowid()),
            identity: user.identity.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            credentials_info: user.credentials_info.clone(),
            selected_calendars: user.selected_calendars.clone(),
            created_at: row_decode::timestamp(created_at, "users.created_at")?,
        })
    }

    pub async fn find_by_identity(&self, identity: &Identity) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE google_id = ? LIMIT 1",
            USER_COLUMNS
        ))
        .bind(identity.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    pub async fn find_by_id(&self, id: UserId) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    /// Every user, oldest first. A row that fails to decode does not fail
    /// the scan; its error is kept in `ListedUser::user`.
    pub async fn find_all(&self) -> DbErrorResult<Vec<ListedUser>> {
        let rows = sqlx::query(&format!("SELECT {} FROM users ORDER BY id ASC", USER_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|r| -> DbErrorResult<ListedUser> {
                Ok(ListedUser {
                    id: UserId(r.try_get("id")?),
                    identity: Self::raw_text(r, "google_id"),
                    email: Self::raw_text(r, "email"),
                    user: Self::map_row(r),
                })
            })
            .collect()
    }

    /// Fill NULL profile columns from `profile`. Columns that already hold a
    /// value keep it.
    pub async fn fill_missing_profile(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> DbErrorResult<()> {
        let credentials_info =
            row_decode::json_text(&profile.credentials_info, "users.credentials_info")?;
        let selected_calendars =
            row_decode::json_text(&profile.selected_calendars, "users.selected_calendars")?;

        sqlx::query(
            r#"
                UPDATE users
                SET credentials_info = COALESCE(credentials_info, ?),
                    selected_calendars = COALESCE(selected_calendars, ?)
                WHERE id = ?
            "#,
        )
        .bind(credentials_info)
        .bind(selected_calendars)
        .bind(id.get())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Column text for reporting; empty when NULL or not text.
    fn raw_text(r: &SqliteRow, column: &str) -> String {
        r.try_get::<Option<String>, _>(column)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    fn map_row(r: &SqliteRow) -> DbErrorResult<User> {
        Ok(User {
            id: UserId(r.try_get("id")?),
            identity: row_decode::identity(r.try_get("google_id")?, "users.google_id")?,
            email: r.try_get("email")?,
            name: r.try_get("name")?,
            credentials_info: row_decode::json(
                r.try_get("credentials_info")?,
                "users.credentials_info",
            )?,
            selected_calendars: row_decode::json(
                r.try_get("selected_calendars")?,
                "users.selected_calendars",
            )?,
            created_at: row_decode::timestamp(r.try_get("created_at")?, "users.created_at")?,
        })
    }
}
