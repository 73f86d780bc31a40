use crate::model::appointment::AddOnDto;

/// Extra item attached to a service or appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOn {
    pub name: String,
    pub price: f64,
    /// Whether `price` is charged per unit of `quantity`.
    pub per_unit: bool,
    pub quantity: u32,
}

impl AddOn {
    pub fn from_entity(entity: entity::json::AddOn) -> Self {
        Self {
            name: entity.name,
            price: entity.price,
            per_unit: entity.per_unit,
            quantity: entity.quantity,
        }
    }

    pub fn into_entity(self) -> entity::json::AddOn {
        entity::json::AddOn {
            name: self.name,
            price: self.price,
            per_unit: self.per_unit,
            quantity: self.quantity,
        }
    }

    pub fn from_dto(dto: AddOnDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            per_unit: dto.per_unit,
            quantity: dto.quantity,
        }
    }

    pub fn into_dto(self) -> AddOnDto {
        AddOnDto {
            name: self.name,
            price: self.price,
            per_unit: self.per_unit,
            quantity: self.quantity,
        }
    }
}

/// Converts a stored add-on list into domain add-ons, preserving order.
pub fn add_ons_from_entity(list: entity::json::AddOnList) -> Vec<AddOn> {
    list.0.into_iter().map(AddOn::from_entity).collect()
}

/// Converts domain add-ons into the stored JSON list, preserving order.
pub fn add_ons_into_entity(add_ons: Vec<AddOn>) -> entity::json::AddOnList {
    entity::json::AddOnList(add_ons.into_iter().map(AddOn::into_entity).collect())
}
