//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use tracing::debug;

use crate::domain::user::{NewUser, Role, User, UserRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn role_to_db(role: Role) -> user::UserRole {
    match role {
        Role::Admin => user::UserRole::Admin,
        Role::Owner => user::UserRole::Owner,
        Role::Employee => user::UserRole::Employee,
    }
}

fn role_to_domain(role: user::UserRole) -> Role {
    match role {
        user::UserRole::Admin => Role::Admin,
        user::UserRole::Owner => Role::Owner,
        user::UserRole::Employee => Role::Employee,
    }
}

fn model_to_domain(u: user::Model) -> User {
    User {
        id: u.id,
        email: u.email,
        password_hash: u.password_hash,
        role: role_to_domain(u.role),
        username: u.username,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Surface unique violations on email/username as `DuplicateIdentity`
/// instead of a storage fault.
fn insert_err(new: &NewUser, e: sea_orm::DbErr) -> DomainError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
        if msg.contains("email") {
            return DomainError::DuplicateIdentity {
                field: "email",
                value: new.email.clone(),
            };
        }
        if msg.contains("username") {
            return DomainError::DuplicateIdentity {
                field: "username",
                value: new.username.clone().unwrap_or_default(),
            };
        }
    }
    db_err(e)
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, new: NewUser) -> DomainResult<User> {
        debug!(email = %new.email, "Inserting user");
        let model = user::ActiveModel {
            email: Set(new.email.clone()),
            password_hash: Set(new.password_hash.clone()),
            role: Set(role_to_db(new.role)),
            username: Set(new.username.clone()),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(|e| insert_err(&new, e))?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .filter(user::Column::Role.eq(role_to_db(role)))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!(user_id = id, "Deleting user");
        let res = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }
}
