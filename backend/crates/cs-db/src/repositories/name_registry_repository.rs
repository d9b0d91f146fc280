//! Authoritative name registry.
//!
//! ## Binding
//!
//! A bind is a single `INSERT ... ON CONFLICT DO NOTHING` against a table
//! whose primary key is the identity and whose `name` column is UNIQUE. SQLite
//! serialises writers, so of two concurrent binds for the same name exactly
//! one inserts a row. The loser's outcome is classified afterwards by reading
//! the row its identity owns (if any):
//!
//! - identity already owns the same name → idempotent success
//! - identity owns a different name → already bound
//! - identity owns nothing → the name belongs to someone else

use crate::{DbError, Result as DbErrorResult};

use cs_core::{ClientIdentity, Profile, Role};

use std::str::FromStr;

use chrono::Utc;
use log::debug;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const TABLE: &str = "users";

/// Result of a bind attempt that reached the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    /// A new binding was created.
    Bound(Profile),
    /// The identity already owned this exact name.
    AlreadyOwned(Profile),
    /// The name belongs to a different identity.
    NameConflict,
    /// The identity is bound to a different name.
    AlreadyBound { existing: Profile },
}

impl BindOutcome {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Bound(profile) | Self::AlreadyOwned(profile) => Some(profile),
            Self::NameConflict | Self::AlreadyBound { .. } => None,
        }
    }
}

pub struct NameRegistryRepository {
    pool: SqlitePool,
}

impl NameRegistryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// False iff `name` is bound to an identity other than `identity`.
    pub async fn check_availability(&self, name: &str, identity: &str) -> DbErrorResult<bool> {
        let owner: Option<String> = sqlx::query_scalar("SELECT identity FROM users WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(match owner {
            Some(owner) => owner == identity,
            None => true,
        })
    }

    pub async fn bind(
        &self,
        identity: &ClientIdentity,
        name: &str,
        class: &str,
    ) -> DbErrorResult<BindOutcome> {
        let now = Utc::now().timestamp();
        let role = Role::default();

        let result = sqlx::query(
            r#"
                INSERT INTO users (identity, name, class, role, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT DO NOTHING
            "#,
        )
        .bind(identity.as_str())
        .bind(name)
        .bind(class)
        .bind(role.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            debug!("Bound {} to name {:?}", identity, name);
            return Ok(BindOutcome::Bound(Profile::new(
                identity.clone(),
                name.to_string(),
                class.to_string(),
                role,
            )));
        }

        match self.resolve(identity).await? {
            Some(existing) if existing.name == name => Ok(BindOutcome::AlreadyOwned(existing)),
            Some(existing) => Ok(BindOutcome::AlreadyBound { existing }),
            None => Ok(BindOutcome::NameConflict),
        }
    }

    pub async fn resolve(&self, identity: &ClientIdentity) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query(
            r#"
                SELECT identity, name, class, role
                FROM users
                WHERE identity = ?
            "#,
        )
        .bind(identity.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| profile_from_row(&r)).transpose()
    }

    /// Deletes the binding. Returns false if the identity was not bound.
    pub async fn release(&self, identity: &ClientIdentity) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE identity = ?")
            .bind(identity.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_role(
        &self,
        identity: &ClientIdentity,
        role: Role,
    ) -> DbErrorResult<Option<Profile>> {
        let now = Utc::now().timestamp();

        let result = sqlx::query("UPDATE users SET role = ?, updated_at = ? WHERE identity = ?")
            .bind(role.as_str())
            .bind(now)
            .bind(identity.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.resolve(identity).await
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn profile_from_row(row: &SqliteRow) -> DbErrorResult<Profile> {
    let identity: String = row.try_get("identity")?;
    let name: String = row.try_get("name")?;
    let class: String = row.try_get("class")?;
    let role: String = row.try_get("role")?;

    let identity = ClientIdentity::parse(&identity)
        .map_err(|e| DbError::invalid_row(TABLE, format!("users.identity: {}", e)))?;
    let role = Role::from_str(&role)
        .map_err(|e| DbError::invalid_row(TABLE, format!("users.role: {}", e)))?;

    Ok(Profile::new(identity, name, class, role))
}
