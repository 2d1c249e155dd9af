use sea_orm::DatabaseConnection;

use crate::server::{
    config::AdminBootstrap,
    data::user::UserRepository,
    error::AppError,
    model::{
        auth::{Role, RoleSet},
        user::{CreateUserParams, User},
    },
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Creates an account with a hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "User with email {} already exists",
                params.email
            )));
        }

        let password_hash = hash_password(&params.password)?;
        let user = repo
            .create(&params.email, &params.name, &password_hash, &params.roles)
            .await?;

        tracing::info!(user_id = user.id, "created user");

        Ok(user)
    }

    /// Replaces a user's roles.
    ///
    /// Returns `None` if the user doesn't exist.
    pub async fn update_roles(&self, id: i32, roles: RoleSet) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).update_roles(id, &roles).await?)
    }

    /// Seeds an admin account when none exists.
    ///
    /// An existing account with the bootstrap email is promoted instead of recreated.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin created or promoted
    /// - `Ok(None)` - An admin already exists
    pub async fn ensure_admin(&self, bootstrap: &AdminBootstrap) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.admin_exists().await? {
            return Ok(None);
        }

        let email = bootstrap.email.trim().to_lowercase();
        if let Some(existing) = repo.find_by_email(&email).await? {
            let mut tags = existing.roles.to_tags();
            tags.push(Role::Admin.as_str().to_string());
            return Ok(repo
                .update_roles(existing.id, &RoleSet::from_tags_lossy(&tags))
                .await?);
        }

        let password_hash = hash_password(&bootstrap.password)?;
        let user = repo
            .create(
                &email,
                &bootstrap.name,
                &password_hash,
                &RoleSet::new(&[Role::Admin]),
            )
            .await?;

        Ok(Some(user))
    }
}
