//! TimeSheet-WorkDay association entity
//!
//! A workday linked here is archived: it belongs to a saved timesheet
//! and is read-only from then on.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timesheet_workdays")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub timesheet_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub workday_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::timesheet::Entity",
        from = "Column::TimesheetId",
        to = "super::timesheet::Column::Id"
    )]
    TimeSheet,
    #[sea_orm(
        belongs_to = "super::workday::Entity",
        from = "Column::WorkdayId",
        to = "super::workday::Column::Id"
    )]
    WorkDay,
}

impl Related<super::timesheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheet.def()
    }
}

impl Related<super::workday::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkDay.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
