use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_create_users_table::Users, m20250301_000002_create_cases_table::Cases,
};

static IDX_INVENTORY_DETAILS_USER_ID: &str = "idx_inventory_details_user_id";
static FK_INVENTORY_DETAILS_USER_ID: &str = "fk_inventory_details_user_id";
static FK_INVENTORY_DETAILS_CASE_ID: &str = "fk_inventory_details_case_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique (user_id, case_id) constraint: every grant inserts its own row
        manager
            .create_table(
                Table::create()
                    .table(InventoryDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryDetails::Id))
                    .col(integer(InventoryDetails::UserId))
                    .col(integer(InventoryDetails::CaseId))
                    .col(integer(InventoryDetails::Quantity))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_DETAILS_USER_ID)
                    .table(InventoryDetails::Table)
                    .col(InventoryDetails::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVENTORY_DETAILS_USER_ID)
                    .from_tbl(InventoryDetails::Table)
                    .from_col(InventoryDetails::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVENTORY_DETAILS_CASE_ID)
                    .from_tbl(InventoryDetails::Table)
                    .from_col(InventoryDetails::CaseId)
                    .to_tbl(Cases::Table)
                    .to_col(Cases::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVENTORY_DETAILS_CASE_ID)
                    .table(InventoryDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVENTORY_DETAILS_USER_ID)
                    .table(InventoryDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_DETAILS_USER_ID)
                    .table(InventoryDetails::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryDetails::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum InventoryDetails {
    Table,
    Id,
    UserId,
    CaseId,
    Quantity,
}
