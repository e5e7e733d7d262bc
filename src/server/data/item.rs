use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::ItemModel;

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every item of the case with the given name, ordered by item ID
    ///
    /// Returns an empty list both for an unknown case and for a case without items.
    pub async fn get_by_case_name(&self, case_name: &str) -> Result<Vec<ItemModel>, DbErr> {
        entity::prelude::Items::find()
            .inner_join(entity::prelude::Cases)
            .filter(entity::cases::Column::CaseName.eq(case_name))
            .order_by_asc(entity::items::Column::Id)
            .all(self.db)
            .await
    }
}
