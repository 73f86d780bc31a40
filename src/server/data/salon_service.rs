//! Service catalog data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    add_on::add_ons_into_entity,
    salon_service::{CreateSalonServiceParam, SalonService, UpdateSalonServiceParam},
};

pub struct SalonServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalonServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateSalonServiceParam) -> Result<SalonService, DbErr> {
        let entity = entity::salon_service::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            duration: ActiveValue::Set(param.duration),
            staff_id: ActiveValue::Set(param.staff_id),
            add_ons: ActiveValue::Set(add_ons_into_entity(param.add_ons)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SalonService::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SalonService>, DbErr> {
        let entity = entity::prelude::SalonService::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(SalonService::from_entity))
    }

    /// Lists catalog entries ordered by name, optionally only those of one manicure.
    pub async fn find_all(&self, staff_id: Option<i32>) -> Result<Vec<SalonService>, DbErr> {
        let mut query = entity::prelude::SalonService::find();

        if let Some(staff_id) = staff_id {
            query = query.filter(entity::salon_service::Column::StaffId.eq(staff_id));
        }

        let entities = query
            .order_by_asc(entity::salon_service::Column::Name)
            .order_by_asc(entity::salon_service::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SalonService::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(SalonService))` - Updated entry, or the unchanged entry if `param` is empty
    /// - `Ok(None)` - No entry with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateSalonServiceParam,
    ) -> Result<Option<SalonService>, DbErr> {
        let Some(existing) = entity::prelude::SalonService::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::salon_service::ActiveModel = existing.clone().into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(duration) = param.duration {
            active_model.duration = ActiveValue::Set(duration);
        }
        if let Some(staff_id) = param.staff_id {
            active_model.staff_id = ActiveValue::Set(Some(staff_id));
        }
        if let Some(add_ons) = param.add_ons {
            active_model.add_ons = ActiveValue::Set(add_ons_into_entity(add_ons));
        }

        if !active_model.is_changed() {
            return Ok(Some(SalonService::from_entity(existing)));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(SalonService::from_entity(entity)))
    }

    /// Deletes a catalog entry. Returns `false` when no entry had that ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SalonService::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
