use crate::Result as DbErrorResult;
use crate::repositories::row_decode;

use pb_core::{DailyPlan, NewDailyPlan, PlanId, UserId};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct DailyPlanRepository {
    pool: SqlitePool,
}

impl DailyPlanRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, plan: &NewDailyPlan) -> DbErrorResult<DailyPlan> {
        let date = plan.date.timestamp();
        let created_at = plan.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO daily_plans (user_id, date, created_at)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(plan.user_id.get())
        .bind(date)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(DailyPlan {
            id: PlanId(result.last_insert_rowid()),
            user_id: plan.user_id,
            date: row_decode::timestamp(date, "daily_plans.date")?,
            created_at: row_decode::timestamp(created_at, "daily_plans.created_at")?,
        })
    }

    /// Plans owned by `user_id` in insertion order.
    pub async fn find_by_user(&self, user_id: UserId) -> DbErrorResult<Vec<DailyPlan>> {
        let rows = sqlx::query(
            r#"
                SELECT id, user_id, date, created_at
                FROM daily_plans
                WHERE user_id = ?
                ORDER BY id ASC
            "#,
        )
        .bind(user_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(Self::map_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    fn map_row(r: &SqliteRow) -> DbErrorResult<DailyPlan> {
        Ok(DailyPlan {
            id: PlanId(r.try_get("id")?),
            user_id: UserId(r.try_get("user_id")?),
            date: row_decode::timestamp(r.try_get("date")?, "daily_plans.date")?,
            created_at: row_decode::timestamp(
                r.try_get("created_at")?,
                "daily_plans.created_at",
            )?,
        })
    }
}
