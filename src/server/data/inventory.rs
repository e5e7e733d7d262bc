use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
    UpdateResult,
};

use crate::server::model::db::InventoryDetailModel;

/// Quantity of a case summed over all of a user's inventory rows
#[derive(Debug, PartialEq, Eq, FromQueryResult)]
pub struct CaseTotal {
    pub case_name: String,
    pub image_path: String,
    pub quantity: i64,
}

pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new instance of [`InventoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new inventory row, existing rows for the same user and case are left as is
    pub async fn create(
        &self,
        user_id: i32,
        case_id: i32,
        quantity: i32,
    ) -> Result<InventoryDetailModel, DbErr> {
        let inventory_detail = entity::inventory_details::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            case_id: ActiveValue::Set(case_id),
            quantity: ActiveValue::Set(quantity),
            ..Default::default()
        };

        inventory_detail.insert(self.db).await
    }

    /// Gets every inventory row the user holds for the named case
    ///
    /// Rows come back in whatever order the store returns them.
    pub async fn get_by_user_and_case(
        &self,
        firebase_uid: &str,
        case_name: &str,
    ) -> Result<Vec<InventoryDetailModel>, DbErr> {
        entity::prelude::InventoryDetails::find()
            .inner_join(entity::prelude::Users)
            .inner_join(entity::prelude::Cases)
            .filter(entity::users::Column::FirebaseUid.eq(firebase_uid))
            .filter(entity::cases::Column::CaseName.eq(case_name))
            .all(self.db)
            .await
    }

    /// Sums the user's positive inventory rows per case, ordered by case name
    pub async fn get_case_totals(&self, firebase_uid: &str) -> Result<Vec<CaseTotal>, DbErr> {
        entity::prelude::InventoryDetails::find()
            .select_only()
            .column(entity::cases::Column::CaseName)
            .column(entity::cases::Column::ImagePath)
            .column_as(entity::inventory_details::Column::Quantity.sum(), "quantity")
            .inner_join(entity::prelude::Users)
            .inner_join(entity::prelude::Cases)
            .filter(entity::users::Column::FirebaseUid.eq(firebase_uid))
            .filter(entity::inventory_details::Column::Quantity.gt(0))
            .group_by(entity::cases::Column::CaseName)
            .group_by(entity::cases::Column::ImagePath)
            .order_by_asc(entity::cases::Column::CaseName)
            .into_model::<CaseTotal>()
            .all(self.db)
            .await
    }

    pub async fn set_quantity(&self, id: i32, quantity: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::InventoryDetails::update_many()
            .col_expr(
                entity::inventory_details::Column::Quantity,
                Expr::value(quantity),
            )
            .filter(entity::inventory_details::Column::Id.eq(id))
            .exec(self.db)
            .await
    }

    /// Deletes an inventory row
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::InventoryDetails::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
