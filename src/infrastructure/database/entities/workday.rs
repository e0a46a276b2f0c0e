//! WorkDay entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workdays")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    pub clock_in: DateTimeUtc,

    /// Null while the session is open
    #[sea_orm(nullable)]
    pub clock_out: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        super::workday_photo::Relation::Photo.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::workday_photo::Relation::WorkDay.def().rev())
    }
}

impl Related<super::timesheet::Entity> for Entity {
    fn to() -> RelationDef {
        super::timesheet_workday::Relation::TimeSheet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::timesheet_workday::Relation::WorkDay.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
