use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserDirectory, UserId, UserSummary};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Reads the host application's `users` table.
#[derive(Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// The host owns this table: `id` may be INT4 and `username` may be NULL.
const SELECT_USER: &str = "SELECT id::BIGINT AS id, username FROM users";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: Option<String>,
}

impl TryFrom<UserRow> for UserSummary {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = row
            .username
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("#{}", row.id));
        Ok(UserSummary {
            id: UserId::new(row.id)?,
            username,
        })
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<UserSummary>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(UserSummary::try_from).transpose()
    }

    async fn find_many(&self, ids: &[UserId]) -> DomainResult<Vec<UserSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().copied().map(i64::from).collect();

        let rows = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = ANY($1)"))
            .bind(raw)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(UserSummary::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_or_blank_username_falls_back_to_id() {
        let missing = UserSummary::try_from(UserRow {
            id: 5,
            username: None,
        })
        .unwrap();
        assert_eq!(missing.username, "#5");

        let blank = UserSummary::try_from(UserRow {
            id: 6,
            username: Some("  ".into()),
        })
        .unwrap();
        assert_eq!(blank.username, "#6");
    }

    #[test]
    fn username_is_kept_when_present() {
        let user = UserSummary::try_from(UserRow {
            id: 7,
            username: Some("jdoe".into()),
        })
        .unwrap();
        assert_eq!(user.username, "jdoe");
        assert_eq!(i64::from(user.id), 7);
    }
}
