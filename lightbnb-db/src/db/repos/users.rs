//! User repository
//!
//! Lookups return `Ok(None)` when no row matches; database failures are
//! returned as errors, never collapsed into `None`.

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::models::NewUser;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user by email (exact match).
    #[instrument(skip_all)]
    pub async fn get_with_email(&self, email: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        debug!(found = user.is_some(), "user lookup by email");
        Ok(user)
    }

    /// Get a single user by ID.
    #[instrument(skip(self))]
    pub async fn get_with_id(&self, id: i32) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        debug!(found = user.is_some(), "user lookup by id");
        Ok(user)
    }

    /// Add a new user, returning the stored record.
    ///
    /// A duplicate email surfaces as the database's unique-constraint error.
    #[instrument(skip_all)]
    pub async fn add(&self, user: NewUser) -> Result<User> {
        let created: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(user.name())
        .bind(user.email().as_str())
        .bind(user.password())
        .fetch_one(self.pool)
        .await?;

        info!(user_id = created.id, "user created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_not_serialized() {
        let user = User {
            id: 1,
            name: "Devin Sanders".into(),
            email: "tristanjacobs@gmail.com".into(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".into(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "tristanjacobs@gmail.com");
        assert!(json.get("password").is_none());
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p lightbnb-db -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn add_then_lookup_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        let repo = UserRepo::new(&pool);

        let email = format!("o'brien+{}@example.com", std::process::id());
        let new_user = NewUser::new("Róisín O'Brien", &email, "hash").unwrap();
        let created = repo.add(new_user).await.expect("insert");
        assert_eq!(created.name, "Róisín O'Brien");

        let by_email = repo.get_with_email(&email).await.expect("lookup");
        assert_eq!(by_email.as_ref(), Some(&created));

        let by_id = repo.get_with_id(created.id).await.expect("lookup");
        assert_eq!(by_id, Some(created));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_user_is_none() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        let user = UserRepo::new(&pool)
            .get_with_email("nobody@nowhere.invalid")
            .await
            .expect("lookup");
        assert!(user.is_none());
    }
}
