//! Student repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, FIRST_PAGE, LOG_SOFT_DELETE_FAILED};
use crate::entities::student::{self, StudentSummary, SUMMARY_COLUMNS};
use crate::error::{Result, StudentError};
use crate::validation::{validate_changes, validate_new_student, NewStudent, StudentChanges};

/// Largest offset or limit SQL drivers accept as a signed 64-bit bind.
const MAX_BINDABLE: u64 = i64::MAX as u64;

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    /// Total rows matching the filter across all pages.
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(self.page_size)
    }
}

/// Search and paging parameters for [`StudentRepository::find_all_with_pagination`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub search: String,
    pub page: u64,
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Repository for student-related database operations.
pub struct StudentRepository;

impl StudentRepository {
    /// Get all active students, without bookkeeping columns.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<StudentSummary>>
    where
        C: ConnectionTrait,
    {
        Ok(student::Entity::find()
            .filter(student::Column::Deleted.eq(false))
            .order_by_asc(student::Column::Id)
            .select_only()
            .columns(SUMMARY_COLUMNS)
            .into_model::<StudentSummary>()
            .all(conn)
            .await?)
    }

    /// Highest `sid` ever assigned, deleted rows included. 0 on an empty table.
    pub async fn get_last_sid<C>(conn: &C) -> Result<i64>
    where
        C: ConnectionTrait,
    {
        let max_sid: Option<Option<i64>> = student::Entity::find()
            .select_only()
            .column_as(student::Column::Sid.max(), "max_sid")
            .into_tuple()
            .one(conn)
            .await?;

        Ok(max_sid.flatten().unwrap_or(0))
    }

    /// First active student with the given dni or email.
    pub async fn find_by_dni_or_email<C>(conn: &C, dni: i64, email: &str) -> Result<Option<student::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(student::Entity::find()
            .filter(
                Condition::any()
                    .add(student::Column::Dni.eq(dni))
                    .add(student::Column::Email.eq(email)),
            )
            .filter(student::Column::Deleted.eq(false))
            .order_by_asc(student::Column::Id)
            .one(conn)
            .await?)
    }

    /// Active students ordered by last name then first name, one page at a time.
    ///
    /// A non-empty `search` keeps only rows whose lowercased last name contains
    /// the lowercased search text. Both sides are folded with Rust's Unicode
    /// lowercasing, so accented capitals match too. `page` is 1-indexed; a page
    /// beyond the last one comes back empty with the true `count`.
    pub async fn find_all_with_pagination<C>(
        conn: &C,
        search: &str,
        page: u64,
        page_size: u64,
    ) -> Result<Page<StudentSummary>>
    where
        C: ConnectionTrait,
    {
        if page < FIRST_PAGE || page_size == 0 || page_size > MAX_BINDABLE {
            return Err(StudentError::InvalidPage { page, page_size });
        }

        let mut query = student::Entity::find().filter(student::Column::Deleted.eq(false));
        if !search.is_empty() {
            query = query.filter(student::Column::LastnameLower.contains(search.to_lowercase()));
        }

        let count = query.clone().count(conn).await?;

        // An offset past what the database can bind cannot hold any rows.
        let offset = match (page - 1).checked_mul(page_size) {
            Some(offset) if offset <= MAX_BINDABLE => offset,
            _ => {
                return Ok(Page {
                    rows: Vec::new(),
                    count,
                    page,
                    page_size,
                })
            }
        };

        let rows = query
            .order_by_asc(student::Column::Lastname)
            .order_by_asc(student::Column::Firstname)
            .offset(offset)
            .limit(page_size)
            .select_only()
            .columns(SUMMARY_COLUMNS)
            .into_model::<StudentSummary>()
            .all(conn)
            .await?;

        Ok(Page {
            rows,
            count,
            page,
            page_size,
        })
    }

    /// Same as [`Self::find_all_with_pagination`], driven by a [`PageRequest`].
    pub async fn find_page<C>(conn: &C, request: &PageRequest) -> Result<Page<StudentSummary>>
    where
        C: ConnectionTrait,
    {
        Self::find_all_with_pagination(conn, &request.search, request.page, request.page_size).await
    }

    /// Mark an active student as deleted.
    ///
    /// Returns `false` when the id does not exist or is already deleted.
    pub async fn soft_delete<C>(conn: &C, id: i32) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = student::Entity::update_many()
            .col_expr(student::Column::Deleted, Expr::value(true))
            .col_expr(student::Column::UpdatedAt, Expr::value(chrono::Utc::now()))
            .filter(student::Column::Id.eq(id))
            .filter(student::Column::Deleted.eq(false))
            .exec(conn)
            .await;

        match result {
            Ok(res) => Ok(res.rows_affected > 0),
            Err(err) => {
                log::error!("{}: {}", LOG_SOFT_DELETE_FAILED, err);
                Err(err.into())
            }
        }
    }

    /// Get a single student by primary key, deleted or not.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<student::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(student::Entity::find_by_id(id).one(conn).await?)
    }

    /// Validate and insert a new student.
    pub async fn create<C>(conn: &C, new_student: NewStudent) -> Result<student::Model>
    where
        C: ConnectionTrait,
    {
        validate_new_student(&new_student)?;

        let model = student::ActiveModel {
            sid: ActiveValue::Set(new_student.sid),
            firstname: ActiveValue::Set(new_student.firstname),
            lastname: ActiveValue::Set(new_student.lastname),
            dni: ActiveValue::Set(new_student.dni),
            email: ActiveValue::Set(new_student.email),
            ..Default::default()
        };

        Ok(model.insert(conn).await?)
    }

    /// Validate and apply a partial update to an existing student.
    pub async fn update<C>(conn: &C, id: i32, changes: StudentChanges) -> Result<student::Model>
    where
        C: ConnectionTrait,
    {
        validate_changes(&changes)?;

        let existing = Self::get_by_id(conn, id).await?.ok_or(StudentError::NotFound(id))?;
        if changes.is_empty() {
            return Ok(existing);
        }

        let mut active: student::ActiveModel = existing.into();
        if let Some(sid) = changes.sid {
            active.sid = ActiveValue::Set(sid);
        }
        if let Some(firstname) = changes.firstname {
            active.firstname = ActiveValue::Set(firstname);
        }
        if let Some(lastname) = changes.lastname {
            active.lastname = ActiveValue::Set(lastname);
        }
        if let Some(dni) = changes.dni {
            active.dni = ActiveValue::Set(dni);
        }
        if let Some(email) = changes.email {
            active.email = ActiveValue::Set(email);
        }

        Ok(active.update(conn).await?)
    }
}
