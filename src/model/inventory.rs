use serde::{Deserialize, Serialize};

/// Total quantity of one case owned by the caller
///
/// Quantities are summed across every inventory row for the case, since grants insert
/// a new row each time rather than topping up an existing one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryCaseDto {
    pub case_name: String,
    pub image_path: String,
    pub quantity: i64,
}

/// An item that can be drawn from a case
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ItemDto {
    pub item_name: String,
    pub image_path: String,
    pub rarity: String,
}
