//! Service catalog management.
//!
//! Anyone may browse the catalog. Manicures maintain their own entries and admins may
//! maintain every entry.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::{salon_service::SalonServiceRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            salon_service::{CreateSalonServiceParam, SalonService, UpdateSalonServiceParam},
            user::User,
        },
        util::validate::{require_field, validate_price},
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists catalog entries, optionally only those offered by one manicure.
    pub async fn list(&self, staff_id: Option<i32>) -> Result<Vec<SalonService>, AppError> {
        let services = SalonServiceRepository::new(self.db)
            .find_all(staff_id)
            .await?;

        Ok(services)
    }

    pub async fn get(&self, id: i32) -> Result<SalonService, AppError> {
        SalonServiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Adds a catalog entry.
    ///
    /// A manicure always owns the entries they create; an admin may assign any manicure
    /// or leave the entry unassigned.
    ///
    /// # Returns
    /// - `Ok(SalonService)` - Stored entry
    /// - `Err(AppError::ValidationErr)` - Blank name or duration, or a negative price
    /// - `Err(AppError::AuthErr)` - A manicure tried to create an entry for someone else
    /// - `Err(AppError::BadRequest)` - The assigned manicure does not exist
    pub async fn create(
        &self,
        actor: &User,
        mut param: CreateSalonServiceParam,
    ) -> Result<SalonService, AppError> {
        param.name = require_field("name", &param.name)?;
        param.duration = require_field("duration", &param.duration)?;
        validate_price(param.price)?;
        for add_on in &param.add_ons {
            validate_price(add_on.price)?;
        }

        if actor.role == UserRole::Manicure && param.staff_id != Some(actor.id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                "manicure attempted to create a service for another manicure".to_string(),
            )
            .into());
        }

        if let Some(staff_id) = param.staff_id {
            self.validate_staff(staff_id).await?;
        }

        let service = SalonServiceRepository::new(self.db).create(param).await?;

        tracing::info!(
            service_id = service.id,
            staff_id = ?service.staff_id,
            "Catalog entry created"
        );

        Ok(service)
    }

    /// Applies a partial update to a catalog entry.
    ///
    /// # Returns
    /// - `Ok(SalonService)` - Updated entry
    /// - `Err(AppError::NotFound)` - No such entry
    /// - `Err(AppError::AuthErr)` - A manicure tried to edit or reassign another manicure's entry
    /// - `Err(AppError::ValidationErr)` - A provided field is invalid
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        mut param: UpdateSalonServiceParam,
    ) -> Result<SalonService, AppError> {
        let current = self.get(id).await?;
        ensure_can_modify(actor, &current)?;

        if let Some(name) = &param.name {
            param.name = Some(require_field("name", name)?);
        }
        if let Some(duration) = &param.duration {
            param.duration = Some(require_field("duration", duration)?);
        }
        if let Some(price) = param.price {
            validate_price(price)?;
        }
        for add_on in param.add_ons.iter().flatten() {
            validate_price(add_on.price)?;
        }

        if let Some(staff_id) = param.staff_id {
            if actor.role == UserRole::Manicure && staff_id != actor.id {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("manicure attempted to reassign service {}", id),
                )
                .into());
            }
            self.validate_staff(staff_id).await?;
        }

        let updated = SalonServiceRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(service_id = id, "Catalog entry updated");

        Ok(updated)
    }

    /// Removes a catalog entry.
    ///
    /// # Returns
    /// - `Ok(())` - Entry deleted
    /// - `Err(AppError::NotFound)` - No such entry
    /// - `Err(AppError::AuthErr)` - A manicure tried to delete another manicure's entry
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let current = self.get(id).await?;
        ensure_can_modify(actor, &current)?;

        if !SalonServiceRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(service_id = id, "Catalog entry deleted");

        Ok(())
    }

    async fn validate_staff(&self, staff_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(staff_id).await? {
            Some(staff) if staff.is_staff() => Ok(()),
            _ => Err(AppError::BadRequest(format!(
                "Manicure {} does not exist",
                staff_id
            ))),
        }
    }
}

fn ensure_can_modify(actor: &User, service: &SalonService) -> Result<(), AppError> {
    match actor.role {
        UserRole::Admin => Ok(()),
        UserRole::Manicure if service.staff_id == Some(actor.id) => Ok(()),
        _ => Err(AuthError::AccessDenied(
            actor.id,
            format!("cannot modify service {}", service.id),
        )
        .into()),
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Service {} not found", id))
}
