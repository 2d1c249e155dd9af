//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups, role changes and logout bookkeeping with
//! conversion between entity models and domain models at the infrastructure boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        auth::{Role, RoleSet},
        user::User,
    },
    util::parse::to_json_array,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `email` - Unique login email
    /// - `name` - Display name
    /// - `password_hash` - Argon2 PHC string
    /// - `roles` - Initial roles
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violation on `email`
    pub async fn create(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
        roles: &RoleSet,
    ) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            app_roles: ActiveValue::Set(to_json_array("app_roles", &roles.to_tags())?),
            last_logout_at: ActiveValue::Set(None),
            token_version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by login email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets all users ordered by email.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Replaces a user's roles.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_roles(&self, id: i32, roles: &RoleSet) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.app_roles = ActiveValue::Set(to_json_array("app_roles", &roles.to_tags())?);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Records a logout at `at` and bumps the token version, revoking every token
    /// issued so far.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_last_logout(&self, id: i32, at: DateTime<Utc>) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let next_version = existing.token_version.wrapping_add(1);
        let mut active: entity::user::ActiveModel = existing.into();
        active.last_logout_at = ActiveValue::Set(Some(at));
        active.token_version = ActiveValue::Set(next_version);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Checks if any user holds the admin role.
    ///
    /// Matches the quoted tag inside the stored JSON array.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let tag = format!("\"{}\"", Role::Admin.as_str());
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::AppRoles.contains(tag))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
