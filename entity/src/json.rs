//! Structured values stored in JSON columns.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Extra item attached to a service or appointment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub name: String,
    pub price: f64,
    pub per_unit: bool,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AddOnList(pub Vec<AddOn>);

/// Named set of photo URLs shown on the salon page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoGallery {
    pub name: String,
    pub photos: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct GalleryList(pub Vec<PhotoGallery>);
