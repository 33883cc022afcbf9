use super::map_sqlx;
use crate::domain::activity::{
    ActivityId, ActivityPage, ActivityRecord, ActivityStore, Description, NewActivity,
    PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const SELECT_COLUMNS: &str = "id, description, user_id, ip_address, user_agent, created_at";

#[derive(Clone)]
pub struct PostgresActivityStore {
    pool: PgPool,
}

impl PostgresActivityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityRow {
    id: i64,
    description: String,
    user_id: i64,
    ip_address: Option<String>,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActivityRow> for ActivityRecord {
    type Error = DomainError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let activity = NewActivity::new(
            Description::new(row.description)?,
            UserId::new(row.user_id)?,
            row.created_at,
        )
        .with_ip_address(row.ip_address)
        .with_user_agent(row.user_agent);

        Ok(ActivityRecord::from_parts(ActivityId::new(row.id)?, activity))
    }
}

fn into_records(rows: Vec<ActivityRow>) -> DomainResult<Vec<ActivityRecord>> {
    rows.into_iter().map(ActivityRecord::try_from).collect()
}

fn bounds(page: PageRequest) -> (i64, i64) {
    (
        i64::from(page.page_size()),
        i64::try_from(page.offset()).unwrap_or(i64::MAX),
    )
}

#[async_trait]
impl ActivityStore for PostgresActivityStore {
    async fn record(&self, activity: NewActivity) -> DomainResult<ActivityRecord> {
        let NewActivity {
            description,
            user_id,
            ip_address,
            user_agent,
            created_at,
        } = activity;

        let row = sqlx::query_as::<_, ActivityRow>(&format!(
            r#"
            INSERT INTO user_activity (description, user_id, ip_address, user_agent, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(String::from(description))
        .bind(i64::from(user_id))
        .bind(ip_address)
        .bind(user_agent)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.try_into()
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> DomainResult<ActivityPage> {
        let (limit, offset) = bounds(page);

        let rows = sqlx::query_as::<_, ActivityRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM user_activity
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(i64::from(user_id))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM user_activity WHERE user_id = $1",
        )
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ActivityPage {
            items: into_records(rows)?,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn list_all(&self, page: PageRequest) -> DomainResult<ActivityPage> {
        let (limit, offset) = bounds(page);

        let rows = sqlx::query_as::<_, ActivityRow>(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM user_activity
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM user_activity")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(ActivityPage {
            items: into_records(rows)?,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }
}
