//! Case catalog, item, and inventory row fixtures.

use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::{
    constant::{STARTER_CASES, TEST_IMAGE_PATH},
    error::TestError,
    model::{CaseModel, InventoryDetailModel, ItemModel},
    TestContext,
};

impl TestContext {
    pub fn inventory<'a>(&'a self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> InventoryFixtures<'a> {
    /// Insert a case into the catalog
    pub async fn insert_case(&self, case_name: &str) -> Result<CaseModel, TestError> {
        Ok(
            entity::prelude::Cases::insert(entity::cases::ActiveModel {
                case_name: ActiveValue::Set(case_name.to_string()),
                image_path: ActiveValue::Set(TEST_IMAGE_PATH.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the Weapon, Bravo and Hydra cases
    pub async fn insert_starter_cases(&self) -> Result<Vec<CaseModel>, TestError> {
        let mut cases = Vec::new();

        for (case_name, _) in STARTER_CASES {
            cases.push(self.insert_case(case_name).await?);
        }

        Ok(cases)
    }

    /// Find a case by name
    pub async fn find_case(&self, case_name: &str) -> Result<Option<CaseModel>, TestError> {
        Ok(entity::prelude::Cases::find()
            .filter(entity::cases::Column::CaseName.eq(case_name))
            .one(&self.setup.db)
            .await?)
    }

    /// Insert an item belonging to a case
    pub async fn insert_item(
        &self,
        case_id: i32,
        item_name: &str,
        rarity: &str,
    ) -> Result<ItemModel, TestError> {
        Ok(
            entity::prelude::Items::insert(entity::items::ActiveModel {
                item_name: ActiveValue::Set(item_name.to_string()),
                image_path: ActiveValue::Set(TEST_IMAGE_PATH.to_string()),
                rarity: ActiveValue::Set(rarity.to_string()),
                case_id: ActiveValue::Set(case_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an inventory row, quantities of zero or below are allowed
    pub async fn insert_inventory_detail(
        &self,
        user_id: i32,
        case_id: i32,
        quantity: i32,
    ) -> Result<InventoryDetailModel, TestError> {
        Ok(
            entity::prelude::InventoryDetails::insert(entity::inventory_details::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                case_id: ActiveValue::Set(case_id),
                quantity: ActiveValue::Set(quantity),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// All inventory rows of a user, ordered by ID
    pub async fn get_inventory_details(
        &self,
        user_id: i32,
    ) -> Result<Vec<InventoryDetailModel>, TestError> {
        Ok(entity::prelude::InventoryDetails::find()
            .filter(entity::inventory_details::Column::UserId.eq(user_id))
            .order_by_asc(entity::inventory_details::Column::Id)
            .all(&self.setup.db)
            .await?)
    }

    /// Number of inventory rows across all users
    pub async fn count_inventory_details(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::InventoryDetails::find()
            .count(&self.setup.db)
            .await?)
    }
}
