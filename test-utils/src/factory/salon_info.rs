//! Salon info factory for the single metadata row.

use chrono::Utc;
use entity::json::{GalleryList, PhotoGallery};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Row id used for the salon metadata record.
pub const SALON_INFO_ID: i32 = 1;

/// Factory for the salon metadata row. Every field starts unset.
pub struct SalonInfoFactory<'a> {
    db: &'a DatabaseConnection,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    galleries: Vec<PhotoGallery>,
}

impl<'a> SalonInfoFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: None,
            phone: None,
            email: None,
            address: None,
            galleries: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn gallery(mut self, name: impl Into<String>, photos: Vec<String>) -> Self {
        self.galleries.push(PhotoGallery {
            name: name.into(),
            photos,
        });
        self
    }

    /// Builds and inserts the salon info row.
    pub async fn build(self) -> Result<entity::salon_info::Model, DbErr> {
        entity::salon_info::ActiveModel {
            id: ActiveValue::Set(SALON_INFO_ID),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            whatsapp: ActiveValue::Set(None),
            address: ActiveValue::Set(self.address),
            email: ActiveValue::Set(self.email),
            instagram: ActiveValue::Set(None),
            opening_hours: ActiveValue::Set(None),
            galleries: ActiveValue::Set(GalleryList(self.galleries)),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}
