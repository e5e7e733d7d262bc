//! User row fixtures.

use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a non-admin user
    pub async fn insert_user(
        &self,
        firebase_uid: &str,
        email: Option<&str>,
    ) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::Users::insert(entity::users::ActiveModel {
                firebase_uid: ActiveValue::Set(firebase_uid.to_string()),
                email: ActiveValue::Set(email.map(str::to_string)),
                administrator_access: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user with administrator access
    pub async fn insert_admin_user(&self, firebase_uid: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::Users::insert(entity::users::ActiveModel {
                firebase_uid: ActiveValue::Set(firebase_uid.to_string()),
                email: ActiveValue::Set(None),
                administrator_access: ActiveValue::Set(Some(true)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Find the user row for a Firebase UID
    pub async fn find_user(&self, firebase_uid: &str) -> Result<Option<UserModel>, TestError> {
        Ok(entity::prelude::Users::find()
            .filter(entity::users::Column::FirebaseUid.eq(firebase_uid))
            .one(&self.setup.db)
            .await?)
    }

    /// Number of user rows in the database
    pub async fn count_users(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Users::find().count(&self.setup.db).await?)
    }
}
