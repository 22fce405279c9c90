//! Student entity backing the `students` table.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub sid: i64,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub firstname: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub lastname: String,
    /// `lastname` folded with Unicode lowercasing, used by the last-name search
    #[serde(skip)]
    pub lastname_lower: String,
    pub dni: i64,
    #[sea_orm(column_type = "String(StringLen::N(150))")]
    pub email: String,
    pub deleted: bool,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Keep the bookkeeping and search columns current on every write.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(lastname) = &self.lastname {
            self.lastname_lower = ActiveValue::Set(lastname.to_lowercase());
        }

        let now = chrono::Utc::now();
        if insert {
            if self.deleted.is_not_set() {
                self.deleted = ActiveValue::Set(false);
            }
            self.created_at = ActiveValue::Set(now);
        }
        self.updated_at = ActiveValue::Set(now);
        Ok(self)
    }
}

/// Student row without the bookkeeping columns (`lastname_lower`, `deleted`, timestamps).
#[derive(Clone, Debug, PartialEq, Eq, sea_orm::FromQueryResult, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i32,
    pub sid: i64,
    pub firstname: String,
    pub lastname: String,
    pub dni: i64,
    pub email: String,
}

impl From<Model> for StudentSummary {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            sid: model.sid,
            firstname: model.firstname,
            lastname: model.lastname,
            dni: model.dni,
            email: model.email,
        }
    }
}

/// Columns selected into a [`StudentSummary`].
pub(crate) const SUMMARY_COLUMNS: [Column; 6] = [
    Column::Id,
    Column::Sid,
    Column::Firstname,
    Column::Lastname,
    Column::Dni,
    Column::Email,
];
