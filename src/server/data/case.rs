use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::CaseModel;

pub struct CaseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CaseRepository<'a, C> {
    /// Creates a new instance of [`CaseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, case_name: &str) -> Result<Option<CaseModel>, DbErr> {
        entity::prelude::Cases::find()
            .filter(entity::cases::Column::CaseName.eq(case_name))
            .one(self.db)
            .await
    }
}
