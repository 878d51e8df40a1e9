//! PostgreSQL implementation of WebinarRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use webinar_core::entities::Webinar;
use webinar_core::error::DomainError;
use webinar_core::traits::{RepoResult, WebinarRepository};
use webinar_core::value_objects::WebinarId;

use crate::models::WebinarModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of WebinarRepository
#[derive(Clone)]
pub struct PgWebinarRepository {
    pool: PgPool,
}

impl PgWebinarRepository {
    /// Create a new PgWebinarRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebinarRepository for PgWebinarRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &WebinarId) -> RepoResult<Option<Webinar>> {
        let result = sqlx::query_as::<_, WebinarModel>(
            r"
            SELECT id, organizer_id, title, start_date, end_date, seats
            FROM webinars
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Webinar::from))
    }

    #[instrument(skip(self), fields(webinar_id = %webinar.id))]
    async fn create(&self, webinar: &Webinar) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO webinars (id, organizer_id, title, start_date, end_date, seats)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(webinar.id.as_str())
        .bind(webinar.organizer_id.as_str())
        .bind(&webinar.title)
        .bind(webinar.start_date)
        .bind(webinar.end_date)
        .bind(webinar.seats)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::WebinarAlreadyExists(webinar.id.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self), fields(webinar_id = %webinar.id))]
    async fn update(&self, webinar: &Webinar) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE webinars
            SET organizer_id = $2, title = $3, start_date = $4, end_date = $5, seats = $6
            WHERE id = $1
            ",
        )
        .bind(webinar.id.as_str())
        .bind(webinar.organizer_id.as_str())
        .bind(&webinar.title)
        .bind(webinar.start_date)
        .bind(webinar.end_date)
        .bind(webinar.seats)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::WebinarNotFound);
        }

        Ok(())
    }
}
