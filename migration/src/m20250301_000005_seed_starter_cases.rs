use sea_orm_migration::prelude::*;

use crate::m20250301_000002_create_cases_table::Cases;

/// Cases granted to every user on login, the API never creates catalog rows itself
static STARTER_CASES: [(&str, &str); 3] = [
    ("Weapon Case", "/main/images/cases/weapon_case.png"),
    ("Bravo Case", "/main/images/cases/bravo_case.png"),
    ("Hydra Case", "/main/images/cases/hydra_case.png"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Cases::Table)
            .columns([Cases::CaseName, Cases::ImagePath]);

        for (case_name, image_path) in STARTER_CASES {
            insert.values_panic([case_name.into(), image_path.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Cases::Table)
            .and_where(Expr::col(Cases::CaseName).is_in(STARTER_CASES.map(|(name, _)| name)))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
