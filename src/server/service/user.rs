//! User service for business logic.
//!
//! Handles registration, login, admin-side account management and the startup admin
//! seed. Email addresses are stored trimmed and lowercased so uniqueness checks and
//! logins are case-insensitive. Passwords are hashed here before anything reaches the
//! repository.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        config::AdminSeedConfig,
        data::user::UserRepository,
        error::{auth::AuthError, validation::ValidationError, AppError},
        model::user::{
            CreateUserParam, NewUserRecord, PaginatedUsers, UpdateUserParam, User,
            UserRecordChanges,
        },
        util::{
            password::{hash_password, verify_password},
            validate::{normalize_email, require_field, validate_password},
        },
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account after validating every field.
    ///
    /// # Returns
    /// - `Ok(User)` - Stored user
    /// - `Err(AppError::ValidationErr)` - Blank name, malformed email, short password or
    ///   an email address that is already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let name = require_field("name", &param.name)?;
        let email = normalize_email(&param.email)?;
        validate_password(&param.password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(ValidationError::EmailTaken(email).into());
        }

        let user = user_repo
            .create(NewUserRecord {
                name,
                email,
                phone: normalize_phone(param.phone),
                password_hash: hash_password(&param.password)?,
                role: param.role,
            })
            .await?;

        tracing::info!(user_id = user.id, role = ?user.role, "User created");

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Retrieves all users with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Users per page, at least 1
    pub async fn list(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let per_page = per_page.max(1);

        let (users, total_items) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page,
            per_page,
            total_pages: total_items.div_ceil(per_page),
        })
    }

    /// Lists the manicures clients can book with.
    pub async fn list_manicures(&self) -> Result<Vec<User>, AppError> {
        let manicures = UserRepository::new(self.db)
            .get_by_role(UserRole::Manicure)
            .await?;

        Ok(manicures)
    }

    /// Applies a partial update to an account.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::ValidationErr)` - A provided field is invalid, or the new email
    ///   belongs to another account
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut changes = UserRecordChanges {
            role: param.role,
            ..Default::default()
        };

        if let Some(name) = param.name {
            changes.name = Some(require_field("name", &name)?);
        }

        if let Some(email) = param.email {
            let email = normalize_email(&email)?;
            if let Some(owner) = user_repo.find_by_email(&email).await? {
                if owner.id != id {
                    return Err(ValidationError::EmailTaken(email).into());
                }
            }
            changes.email = Some(email);
        }

        if let Some(phone) = param.phone {
            changes.phone = Some(phone.trim().to_string());
        }

        if let Some(password) = param.password {
            validate_password(&password)?;
            changes.password_hash = Some(hash_password(&password)?);
        }

        let user = user_repo
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(user_id = id, "User updated");

        Ok(user)
    }

    /// Deletes an account together with its appointments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }

    /// Creates the configured admin account unless an admin already exists.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin account created
    /// - `Ok(None)` - An admin already exists; nothing was changed
    /// - `Err(AppError::ValidationErr)` - The configured credentials are invalid or the
    ///   email belongs to a non-admin account
    pub async fn seed_admin(&self, seed: &AdminSeedConfig) -> Result<Option<User>, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            tracing::debug!("Admin account already present, skipping seed");
            return Ok(None);
        }

        let admin = self
            .create(CreateUserParam {
                name: seed.name.clone(),
                email: seed.email.clone(),
                phone: None,
                password: seed.password.clone(),
                role: UserRole::Admin,
            })
            .await?;

        tracing::info!(user_id = admin.id, email = %admin.email, "Seeded admin account");

        Ok(Some(admin))
    }
}

fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone
        .map(|phone| phone.trim().to_string())
        .filter(|phone| !phone.is_empty())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}
