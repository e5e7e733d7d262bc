use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_create_cases_table::Cases;

static IDX_ITEMS_CASE_ID: &str = "idx_items_case_id";
static FK_ITEMS_CASE_ID: &str = "fk_items_case_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(pk_auto(Items::Id))
                    .col(string(Items::ItemName))
                    .col(string(Items::ImagePath))
                    .col(string(Items::Rarity))
                    .col(integer(Items::CaseId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ITEMS_CASE_ID)
                    .table(Items::Table)
                    .col(Items::CaseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ITEMS_CASE_ID)
                    .from_tbl(Items::Table)
                    .from_col(Items::CaseId)
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
                    .name(FK_ITEMS_CASE_ID)
                    .table(Items::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ITEMS_CASE_ID)
                    .table(Items::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    ItemName,
    ImagePath,
    Rarity,
    CaseId,
}
