//! WorkDay-Photo association entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workday_photos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub photo_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub workday_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::photo::Entity",
        from = "Column::PhotoId",
        to = "super::photo::Column::Id"
    )]
    Photo,
    #[sea_orm(
        belongs_to = "super::workday::Entity",
        from = "Column::WorkdayId",
        to = "super::workday::Column::Id"
    )]
    WorkDay,
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl Related<super::workday::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkDay.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
