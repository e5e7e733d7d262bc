//! Type aliases for database models used by fixtures.

pub type UserModel = entity::users::Model;
pub type CaseModel = entity::cases::Model;
pub type ItemModel = entity::items::Model;
pub type InventoryDetailModel = entity::inventory_details::Model;
