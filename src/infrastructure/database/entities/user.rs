//! User entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum UserRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "OWNER")]
    Owner,
    #[sea_orm(string_value = "EMPLOYEE")]
    Employee,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Employee
    }
}

/// User model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    /// Optional display name; unique when present
    #[sea_orm(unique, nullable)]
    pub username: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::workday::Entity")]
    WorkDays,
    #[sea_orm(has_many = "super::timesheet::Entity")]
    TimeSheets,
}

impl Related<super::workday::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkDays.def()
    }
}

impl Related<super::timesheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSheets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
