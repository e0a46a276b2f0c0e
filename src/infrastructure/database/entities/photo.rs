//! Photo entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub filename: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::workday::Entity> for Entity {
    fn to() -> RelationDef {
        super::workday_photo::Relation::WorkDay.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::workday_photo::Relation::Photo.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
