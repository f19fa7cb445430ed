use sqlx::PgPool;

use crate::dto::visitor_dto::{DailyCount, PageCount};
use crate::models::visitor::Visitor;
use crate::utils::errors::AppError;

pub struct VisitorRepository {
    pool: PgPool,
}

impl VisitorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, visitor: Visitor) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO visitors (id, ip, user_agent, page, visited_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(visitor.id)
        .bind(visitor.ip)
        .bind(visitor.user_agent)
        .bind(visitor.page)
        .bind(visitor.visited_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_total(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM visitors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_today(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM visitors WHERE visited_at >= date_trunc('day', NOW())",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn count_by_page(&self, limit: i64) -> Result<Vec<PageCount>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT page, COUNT(*) FROM visitors
            GROUP BY page
            ORDER BY COUNT(*) DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(page, count)| PageCount { page, count })
            .collect())
    }

    pub async fn daily_counts(&self) -> Result<Vec<DailyCount>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT to_char(date_trunc('day', visited_at), 'YYYY-MM-DD'), COUNT(*)
            FROM visitors
            WHERE visited_at >= NOW() - INTERVAL '7 days'
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect())
    }
}
