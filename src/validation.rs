//! Field validation for student writes.
//!
//! Every insert and update goes through [`validate_new_student`] or
//! [`validate_changes`] before touching the database, so a malformed email or
//! an over-long name never reaches the storage layer.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::{StudentError, ValidationError};

/// Fields required to insert a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewStudent {
    pub sid: i64,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub firstname: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub lastname: String,
    pub dni: i64,
    #[validate(
        length(max = 150, message = "must be at most 150 characters"),
        email(message = "must be a valid email address")
    )]
    pub email: String,
}

/// Partial update of a student. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StudentChanges {
    pub sid: Option<i64>,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub firstname: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub lastname: Option<String>,
    pub dni: Option<i64>,
    #[validate(
        length(max = 150, message = "must be at most 150 characters"),
        email(message = "must be a valid email address")
    )]
    pub email: Option<String>,
}

impl StudentChanges {
    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.sid.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.dni.is_none()
            && self.email.is_none()
    }
}

/// Validate a student about to be inserted.
pub fn validate_new_student(student: &NewStudent) -> Result<(), StudentError> {
    student.validate().map_err(into_student_error)
}

/// Validate the fields present in a partial update.
pub fn validate_changes(changes: &StudentChanges) -> Result<(), StudentError> {
    changes.validate().map_err(into_student_error)
}

fn into_student_error(errors: ValidationErrors) -> StudentError {
    let mut fields: Vec<ValidationError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| ValidationError {
                field: field.to_string(),
                reason: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.reason.cmp(&b.reason)));
    StudentError::Validation(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EMAIL_MAX_LEN, NAME_MAX_LEN};

    fn valid_student() -> NewStudent {
        NewStudent {
            sid: 1,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            dni: 30111222,
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_student_passes() {
        assert!(validate_new_student(&valid_student()).is_ok());
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let mut student = valid_student();
        student.email = "not-an-email".to_string();

        let err = validate_new_student(&student).unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["email"]);
    }

    #[test]
    fn test_name_length_limits() {
        let mut student = valid_student();
        student.firstname = "a".repeat(NAME_MAX_LEN as usize);
        assert!(validate_new_student(&student).is_ok());

        student.firstname = "a".repeat(NAME_MAX_LEN as usize + 1);
        student.lastname = String::new();
        let err = validate_new_student(&student).unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["firstname", "lastname"]);
    }

    #[test]
    fn test_email_length_limit() {
        let mut student = valid_student();
        let domain = "@example.com";
        student.email = format!("{}{}", "a".repeat(EMAIL_MAX_LEN as usize + 1 - domain.len()), domain);

        let err = validate_new_student(&student).unwrap_err();
        assert_eq!(err.invalid_fields()[0], "email");
    }

    #[test]
    fn test_changes_only_check_present_fields() {
        let changes = StudentChanges {
            lastname: Some("Byron".to_string()),
            ..Default::default()
        };
        assert!(validate_changes(&changes).is_ok());
        assert!(!changes.is_empty());

        let bad = StudentChanges {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_changes(&bad).unwrap_err().invalid_fields(), vec!["email"]);
        assert!(StudentChanges::default().is_empty());
    }
}
