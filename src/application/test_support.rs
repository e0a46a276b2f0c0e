//! Shared fixtures for service tests
//!
//! Every test runs against its own in-memory SQLite database with the
//! full migration set applied, so the services are exercised together
//! with the real SeaORM repositories.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::user::{NewUser, Role, User};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

/// The password every seeded test user logs in with.
pub(crate) const TEST_PASSWORD: &str = "password123";

/// Fresh in-memory database with all migrations applied.
pub(crate) async fn setup_repos() -> Arc<dyn RepositoryProvider> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    Arc::new(SeaOrmRepositoryProvider::new(db))
}

/// Insert a user with the given role. Uses the lowest bcrypt cost (4)
/// to keep the suite fast; [`TEST_PASSWORD`] verifies against the hash.
pub(crate) async fn seed_user(repos: &dyn RepositoryProvider, role: Role, email: &str) -> User {
    let hash = bcrypt::hash(TEST_PASSWORD, 4).expect("hash test password");
    repos
        .users()
        .insert(NewUser {
            email: email.to_string(),
            password_hash: hash,
            role,
            username: None,
        })
        .await
        .expect("seed user")
}

/// Fixed timestamp helper, days in January 2022.
pub(crate) fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, day, hour, min, 0).unwrap()
}
