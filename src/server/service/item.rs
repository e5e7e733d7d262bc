use sea_orm::DatabaseConnection;

use crate::{
    model::inventory::ItemDto,
    server::{data::item::ItemRepository, error::Error},
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    /// Creates a new instance of [`ItemService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the items of the named case ordered by item ID, empty for unknown cases
    pub async fn get_items_for_case(&self, case_name: &str) -> Result<Vec<ItemDto>, Error> {
        let items = ItemRepository::new(self.db)
            .get_by_case_name(case_name)
            .await?;

        Ok(items
            .into_iter()
            .map(|item| ItemDto {
                item_name: item.item_name,
                image_path: item.image_path,
                rarity: item.rarity,
            })
            .collect())
    }
}
