//! CRUD repository for appointments.
//!
//! Writes resolve the worker's external uuid to the internal foreign
//! key in SQL, so the internal id never crosses the crate boundary.
//! The schema is the final authority on the (worker, date) uniqueness
//! rule and the future-date rule: concurrent writes that slip past the
//! API pre-checks fail here and surface as classified `DbError`s.

use crate::Result as DbResult;
use crate::repositories::{parse_date, parse_timestamp, parse_uuid};

use saude_core::{Appointment, Tracked};

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Appointments always join back to the worker to expose its uuid.
const SELECT_APPOINTMENT: &str = r#"
    SELECT a.uuid, w.uuid AS health_care_worker_uuid, a.date, a.info,
        a.created, a.modified
    FROM appointments a
    JOIN health_care_workers w ON w.id = a.health_care_worker_id
"#;

pub struct AppointmentRepository {
    pool: SqlitePool,
}

impl AppointmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns false when the referenced worker does not exist (it was
    /// deleted between validation and this insert).
    pub async fn create(&self, appointment: &Appointment) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
                INSERT INTO appointments (
                    uuid, health_care_worker_id, date, info, created, modified
                )
                SELECT ?, w.id, ?, ?, ?, ?
                FROM health_care_workers w
                WHERE w.uuid = ?
            "#,
        )
        .bind(appointment.tracked.uuid.to_string())
        .bind(appointment.date.to_string())
        .bind(&appointment.info)
        .bind(appointment.tracked.created.to_rfc3339())
        .bind(appointment.tracked.modified.to_rfc3339())
        .bind(appointment.health_care_worker.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> DbResult<Option<Appointment>> {
        let sql = format!("{SELECT_APPOINTMENT} WHERE a.uuid = ?");

        let row = sqlx::query(&sql)
            .bind(uuid.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_appointment(&r)).transpose()
    }

    /// All appointments in ascending date order, optionally restricted
    /// to a single worker's external uuid.
    pub async fn find_all(&self, health_care_worker: Option<Uuid>) -> DbResult<Vec<Appointment>> {
        let rows = match health_care_worker {
            Some(worker) => {
                let sql = format!("{SELECT_APPOINTMENT} WHERE w.uuid = ? ORDER BY a.date, a.id");
                sqlx::query(&sql)
                    .bind(worker.to_string())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("{SELECT_APPOINTMENT} ORDER BY a.date, a.id");
                sqlx::query(&sql).fetch_all(&self.pool).await?
            }
        };

        rows.iter().map(row_to_appointment).collect()
    }

    /// Returns false when no row matches the appointment's uuid.
    pub async fn update(&self, appointment: &Appointment) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE appointments
                SET health_care_worker_id =
                        (SELECT id FROM health_care_workers WHERE uuid = ?),
                    date = ?, info = ?, modified = ?
                WHERE uuid = ?
            "#,
        )
        .bind(appointment.health_care_worker.to_string())
        .bind(appointment.date.to_string())
        .bind(&appointment.info)
        .bind(appointment.tracked.modified.to_rfc3339())
        .bind(appointment.tracked.uuid.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_by_uuid(&self, uuid: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE uuid = ?")
            .bind(uuid.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Fast-reject pre-check for the (worker, date) uniqueness rule.
    /// `exclude` skips the instance currently being updated. The unique
    /// constraint remains the final authority under concurrent writes.
    pub async fn exists_for_worker_and_date(
        &self,
        health_care_worker: Uuid,
        date: NaiveDate,
        exclude: Option<Uuid>,
    ) -> DbResult<bool> {
        let exists: i64 = match exclude {
            Some(excluded) => {
                sqlx::query_scalar(
                    r#"
                        SELECT EXISTS (
                            SELECT 1
                            FROM appointments a
                            JOIN health_care_workers w ON w.id = a.health_care_worker_id
                            WHERE w.uuid = ? AND a.date = ? AND a.uuid <> ?
                        )
                    "#,
                )
                .bind(health_care_worker.to_string())
                .bind(date.to_string())
                .bind(excluded.to_string())
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar(
                    r#"
                        SELECT EXISTS (
                            SELECT 1
                            FROM appointments a
                            JOIN health_care_workers w ON w.id = a.health_care_worker_id
                            WHERE w.uuid = ? AND a.date = ?
                        )
                    "#,
                )
                .bind(health_care_worker.to_string())
                .bind(date.to_string())
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(exists != 0)
    }
}

fn row_to_appointment(row: &SqliteRow) -> DbResult<Appointment> {
    let uuid: String = row.try_get("uuid")?;
    let worker_uuid: String = row.try_get("health_care_worker_uuid")?;
    let date: String = row.try_get("date")?;
    let created: String = row.try_get("created")?;
    let modified: String = row.try_get("modified")?;

    Ok(Appointment {
        tracked: Tracked {
            uuid: parse_uuid(&uuid, "appointments.uuid")?,
            created: parse_timestamp(&created, "appointments.created")?,
            modified: parse_timestamp(&modified, "appointments.modified")?,
        },
        health_care_worker: parse_uuid(&worker_uuid, "health_care_workers.uuid")?,
        date: parse_date(&date, "appointments.date")?,
        info: row.try_get("info")?,
    })
}
