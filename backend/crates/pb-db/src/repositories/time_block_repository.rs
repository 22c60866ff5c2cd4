use crate::Result as DbErrorResult;
use crate::repositories::row_decode;

use pb_core::{BlockId, NewTimeBlock, PlanId, TimeBlock};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct TimeBlockRepository {
    pool: SqlitePool,
}

impl TimeBlockRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, block: &NewTimeBlock) -> DbErrorResult<TimeBlock> {
        let start_time = block.start_time.timestamp();
        let end_time = block.end_time.timestamp();
        let created_at = block.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO time_blocks (
                                         daily_plan_id, title, start_time, end_time,
                                         category, priority, created_at
                                         ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(block.daily_plan_id.get())
        .bind(&block.title)
        .bind(start_time)
        .bind(end_time)
        .bind(&block.category)
        .bind(&block.priority)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(TimeBlock {
            id: BlockId(result.last_insert_rowid()),
            daily_plan_id: block.daily_plan_id,
            title: block.title.clone(),
            start_time: row_decode::timestamp(start_time, "time_blocks.start_time")?,
            end_time: row_decode::timestamp(end_time, "time_blocks.end_time")?,
            category: block.category.clone(),
            priority: block.priority.clone(),
            created_at: row_decode::timestamp(created_at, "time_blocks.created_at")?,
        })
    }

    /// Blocks of `plan_id` in insertion order.
    pub async fn find_by_plan(&self, plan_id: PlanId) -> DbErrorResult<Vec<TimeBlock>> {
        let rows = sqlx::query(
            r#"
                SELECT id, daily_plan_id, title, start_time, end_time,
                       category, priority, created_at
                FROM time_blocks
                WHERE daily_plan_id = ?
                ORDER BY id ASC
            "#,
        )
        .bind(plan_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(Self::map_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    fn map_row(r: &SqliteRow) -> DbErrorResult<TimeBlock> {
        Ok(TimeBlock {
            id: BlockId(r.try_get("id")?),
            daily_plan_id: PlanId(r.try_get("daily_plan_id")?),
            title: r.try_get("title")?,
            start_time: row_decode::timestamp(r.try_get("start_time")?, "time_blocks.start_time")?,
            end_time: row_decode::timestamp(r.try_get("end_time")?, "time_blocks.end_time")?,
            category: r.try_get("category")?,
            priority: r.try_get("priority")?,
            created_at: row_decode::timestamp(
                r.try_get("created_at")?,
                "time_blocks.created_at",
            )?,
        })
    }
}
