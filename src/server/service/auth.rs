//! Login bootstrap for verified callers.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository, error::Error, identity::VerifiedIdentity,
    service::inventory::grant_case_in,
};

/// Cases granted on login and the quantity of each
pub static STARTER_CASES: [(&str, i32); 3] =
    [("Weapon Case", 1), ("Bravo Case", 1), ("Hydra Case", 2)];

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs in a verified caller, creating their user on first login.
    ///
    /// The starter cases are granted on every login, not only the first, so returning
    /// users accumulate a new set of rows each time. User creation and the grants share a
    /// single transaction.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the user has administrator access, always false for new users
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn login(&self, identity: &VerifiedIdentity) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let user_repository = UserRepository::new(&txn);

        let administrator_access = match user_repository
            .find_by_firebase_uid(&identity.uid)
            .await?
        {
            Some(user) => user.administrator_access.unwrap_or(false),
            None => {
                let user = user_repository
                    .create(&identity.uid, identity.email.as_deref())
                    .await?;

                tracing::info!(user_id = user.id, "Created user on first login");

                false
            }
        };

        for (case_name, quantity) in STARTER_CASES {
            grant_case_in(&txn, &identity.uid, case_name, quantity).await?;
        }

        txn.commit().await?;

        Ok(administrator_access)
    }
}
