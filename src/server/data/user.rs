//! User data repository for database operations.
//!
//! Provides account creation, lookups by ID and email, role-filtered listings and
//! partial updates. Passwords arrive here already hashed.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserRole,
    server::model::user::{NewUserRecord, User, UserRecordChanges},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, including a duplicate email
    pub async fn create(&self, record: NewUserRecord) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(record.name),
            email: ActiveValue::Set(record.email),
            phone: ActiveValue::Set(record.phone),
            password_hash: ActiveValue::Set(record.password_hash),
            role: ActiveValue::Set(record.role.into()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// Emails are stored lowercased, so `email` must already be normalized.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether at least one admin account exists.
    ///
    /// Used at startup to decide whether the configured admin account must be seeded.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_role: entity::sea_orm_active_enums::UserRole = UserRole::Admin.into();
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(admin_role))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Gets every user with the given role, ordered alphabetically by name.
    pub async fn get_by_role(&self, role: UserRole) -> Result<Vec<User>, DbErr> {
        let role: entity::sea_orm_active_enums::UserRole = role.into();
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user, or the unchanged user if `changes` is empty
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, changes: UserRecordChanges) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = existing.clone().into();

        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = changes.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(role) = changes.role {
            active_model.role = ActiveValue::Set(role.into());
        }
        if let Some(password_hash) = changes.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }

        if !active_model.is_changed() {
            return Ok(Some(User::from_entity(existing)));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user. Returns `false` when no user had that ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
