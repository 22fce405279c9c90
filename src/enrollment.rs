//! Student enrollment: duplicate check, next SID and insert.
//!
//! The dni/email uniqueness check is a lookup, not a database constraint.
//! Two enrollments racing on the same dni or email can both pass it.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::entities::student;
use crate::error::{Result, StudentError};
use crate::repositories::StudentRepository;
use crate::validation::{validate_new_student, NewStudent};

/// Enrollment request; the SID is assigned by [`enroll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollStudent {
    pub firstname: String,
    pub lastname: String,
    pub dni: i64,
    pub email: String,
}

impl EnrollStudent {
    fn with_sid(self, sid: i64) -> NewStudent {
        NewStudent {
            sid,
            firstname: self.firstname,
            lastname: self.lastname,
            dni: self.dni,
            email: self.email,
        }
    }
}

/// SID the next enrollment will receive: one past the highest ever assigned.
pub async fn next_sid<C>(conn: &C) -> Result<i64>
where
    C: ConnectionTrait,
{
    Ok(StudentRepository::get_last_sid(conn).await? + 1)
}

/// Enroll a student with the next sequential SID.
///
/// Fails with [`StudentError::Duplicate`] when an active student already
/// uses the dni or the email.
pub async fn enroll<C>(conn: &C, request: EnrollStudent) -> Result<student::Model>
where
    C: ConnectionTrait,
{
    // Validate before any lookup so a bad email never hits the database.
    let candidate = request.with_sid(0);
    validate_new_student(&candidate)?;

    if let Some(existing) = StudentRepository::find_by_dni_or_email(conn, candidate.dni, &candidate.email).await? {
        log::warn!(
            "Rejected enrollment: dni {} or email {} already used by student {}",
            candidate.dni,
            candidate.email,
            existing.id
        );
        return Err(StudentError::Duplicate {
            dni: candidate.dni,
            email: candidate.email,
        });
    }

    let sid = next_sid(conn).await?;
    let created = StudentRepository::create(conn, NewStudent { sid, ..candidate }).await?;

    log::info!("Enrolled student {} with sid {}", created.id, created.sid);
    Ok(created)
}
