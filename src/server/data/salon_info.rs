//! Salon metadata repository.
//!
//! The metadata lives in a single row with a fixed ID; updates upsert that row.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::salon::{PhotoGallery, SalonInfo, UpdateSalonInfoParam};

/// Primary key of the salon metadata row.
pub const SALON_INFO_ID: i32 = 1;

pub struct SalonInfoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalonInfoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored metadata, or `None` before the first save.
    pub async fn get(&self) -> Result<Option<SalonInfo>, DbErr> {
        let entity = entity::prelude::SalonInfo::find_by_id(SALON_INFO_ID)
            .one(self.db)
            .await?;

        Ok(entity.map(SalonInfo::from_entity))
    }

    /// Applies `param` to the metadata row, creating the row if it does not exist yet.
    pub async fn upsert(&self, param: UpdateSalonInfoParam) -> Result<SalonInfo, DbErr> {
        let existing = entity::prelude::SalonInfo::find_by_id(SALON_INFO_ID)
            .one(self.db)
            .await?;

        let is_new = existing.is_none();
        let mut active_model = match existing {
            Some(model) => model.into(),
            None => entity::salon_info::ActiveModel {
                id: ActiveValue::Set(SALON_INFO_ID),
                name: ActiveValue::Set(None),
                phone: ActiveValue::Set(None),
                whatsapp: ActiveValue::Set(None),
                address: ActiveValue::Set(None),
                email: ActiveValue::Set(None),
                instagram: ActiveValue::Set(None),
                opening_hours: ActiveValue::Set(None),
                galleries: ActiveValue::Set(entity::json::GalleryList::default()),
                updated_at: ActiveValue::NotSet,
            },
        };

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(Some(name));
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(whatsapp) = param.whatsapp {
            active_model.whatsapp = ActiveValue::Set(Some(whatsapp));
        }
        if let Some(address) = param.address {
            active_model.address = ActiveValue::Set(Some(address));
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(Some(email));
        }
        if let Some(instagram) = param.instagram {
            active_model.instagram = ActiveValue::Set(Some(instagram));
        }
        if let Some(opening_hours) = param.opening_hours {
            active_model.opening_hours = ActiveValue::Set(Some(opening_hours));
        }
        if let Some(galleries) = param.galleries {
            active_model.galleries = ActiveValue::Set(entity::json::GalleryList(
                galleries.into_iter().map(PhotoGallery::into_entity).collect(),
            ));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = if is_new {
            active_model.insert(self.db).await?
        } else {
            active_model.update(self.db).await?
        };

        Ok(SalonInfo::from_entity(entity))
    }
}
