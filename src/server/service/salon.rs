//! Salon metadata service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::salon_info::SalonInfoRepository,
    error::AppError,
    model::salon::{SalonInfo, UpdateSalonInfoParam},
    util::validate::{normalize_email, require_field},
};

pub struct SalonInfoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalonInfoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the salon metadata. Before the first save this is an empty record, which the
    /// DTO conversion fills with defaults.
    pub async fn get(&self) -> Result<SalonInfo, AppError> {
        let info = SalonInfoRepository::new(self.db).get().await?;

        Ok(info.unwrap_or_default())
    }

    /// Updates the provided fields.
    ///
    /// An empty email clears the stored address; any other value must be well formed.
    /// Gallery names may not be blank.
    ///
    /// # Returns
    /// - `Ok(SalonInfo)` - Stored metadata after the update
    /// - `Err(AppError::ValidationErr)` - Malformed email or unnamed gallery
    pub async fn update(&self, mut param: UpdateSalonInfoParam) -> Result<SalonInfo, AppError> {
        if let Some(email) = &param.email {
            param.email = Some(if email.trim().is_empty() {
                String::new()
            } else {
                normalize_email(email)?
            });
        }

        if let Some(galleries) = &mut param.galleries {
            for gallery in galleries.iter_mut() {
                gallery.name = require_field("galleries.name", &gallery.name)?;
            }
        }

        let info = SalonInfoRepository::new(self.db).upsert(param).await?;

        tracing::info!("Salon information updated");

        Ok(info)
    }
}
