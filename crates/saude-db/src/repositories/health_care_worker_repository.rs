//! CRUD repository for health-care workers.
//!
//! Rows are addressed by the external uuid; the autoincrement primary
//! key never leaves this crate. Deleting a worker cascades to its
//! appointments via the schema's foreign key.

use crate::Result as DbResult;
use crate::repositories::{parse_date, parse_timestamp, parse_uuid};

use saude_core::{HealthCareWorker, Tracked};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct HealthCareWorkerRepository {
    pool: SqlitePool,
}

impl HealthCareWorkerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, worker: &HealthCareWorker) -> DbResult<()> {
        sqlx::query(
            r#"
                INSERT INTO health_care_workers (
                    uuid, legal_name, preferred_name, pronouns,
                    date_of_birth, specialization, created, modified
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(worker.tracked.uuid.to_string())
        .bind(&worker.legal_name)
        .bind(&worker.preferred_name)
        .bind(&worker.pronouns)
        .bind(worker.date_of_birth.to_string())
        .bind(&worker.specialization)
        .bind(worker.tracked.created.to_rfc3339())
        .bind(worker.tracked.modified.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> DbResult<Option<HealthCareWorker>> {
        let row = sqlx::query(
            r#"
                SELECT uuid, legal_name, preferred_name, pronouns,
                    date_of_birth, specialization, created, modified
                FROM health_care_workers
                WHERE uuid = ?
            "#,
        )
        .bind(uuid.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_worker(&r)).transpose()
    }

    /// All workers in stored (insertion) order.
    pub async fn find_all(&self) -> DbResult<Vec<HealthCareWorker>> {
        let rows = sqlx::query(
            r#"
                SELECT uuid, legal_name, preferred_name, pronouns,
                    date_of_birth, specialization, created, modified
                FROM health_care_workers
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_worker).collect()
    }

    /// Returns false when no row matches the worker's uuid.
    pub async fn update(&self, worker: &HealthCareWorker) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE health_care_workers
                SET legal_name = ?, preferred_name = ?, pronouns = ?,
                    date_of_birth = ?, specialization = ?, modified = ?
                WHERE uuid = ?
            "#,
        )
        .bind(&worker.legal_name)
        .bind(&worker.preferred_name)
        .bind(&worker.pronouns)
        .bind(worker.date_of_birth.to_string())
        .bind(&worker.specialization)
        .bind(worker.tracked.modified.to_rfc3339())
        .bind(worker.tracked.uuid.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Appointments referencing the worker go with it.
    pub async fn delete_by_uuid(&self, uuid: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM health_care_workers WHERE uuid = ?")
            .bind(uuid.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_worker(row: &SqliteRow) -> DbResult<HealthCareWorker> {
    let uuid: String = row.try_get("uuid")?;
    let date_of_birth: String = row.try_get("date_of_birth")?;
    let created: String = row.try_get("created")?;
    let modified: String = row.try_get("modified")?;

    Ok(HealthCareWorker {
        tracked: Tracked {
            uuid: parse_uuid(&uuid, "health_care_workers.uuid")?,
            created: parse_timestamp(&created, "health_care_workers.created")?,
            modified: parse_timestamp(&modified, "health_care_workers.modified")?,
        },
        legal_name: row.try_get("legal_name")?,
        preferred_name: row.try_get("preferred_name")?,
        pronouns: row.try_get("pronouns")?,
        date_of_birth: parse_date(&date_of_birth, "health_care_workers.date_of_birth")?,
        specialization: row.try_get("specialization")?,
    })
}
