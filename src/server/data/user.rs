use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user without administrator access
    pub async fn create(
        &self,
        firebase_uid: &str,
        email: Option<&str>,
    ) -> Result<UserModel, DbErr> {
        let user = entity::users::ActiveModel {
            firebase_uid: ActiveValue::Set(firebase_uid.to_string()),
            email: ActiveValue::Set(email.map(str::to_string)),
            administrator_access: ActiveValue::Set(None),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn find_by_firebase_uid(
        &self,
        firebase_uid: &str,
    ) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::Users::find()
            .filter(entity::users::Column::FirebaseUid.eq(firebase_uid))
            .one(self.db)
            .await
    }
}
