//! Case grants, inventory totals, and case consumption.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::inventory::InventoryCaseDto,
    server::{
        data::{case::CaseRepository, inventory::InventoryRepository, user::UserRepository},
        error::Error,
        model::db::InventoryDetailModel,
    },
};

/// A single mutation of an inventory row decided by [`plan_consumption`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete(i32),
    Decrement { id: i32, new_quantity: i32 },
}

/// Mutations needed to consume one unit of a case
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsumptionPlan {
    pub actions: Vec<RowAction>,
    /// Whether one unit is consumed by the plan, zero quantity sweeps do not count
    pub removed: bool,
}

/// Decides how to consume one unit of a case from the user's rows.
///
/// Rows are scanned in the given order. The first row holding at least one unit is
/// deleted when it holds exactly one and decremented otherwise. Rows with a quantity of
/// zero are always deleted, before or after the consumed row. Negative quantities are
/// left untouched.
pub fn plan_consumption(rows: &[InventoryDetailModel]) -> ConsumptionPlan {
    let mut plan = ConsumptionPlan::default();

    for row in rows {
        match row.quantity {
            0 => plan.actions.push(RowAction::Delete(row.id)),
            1 if !plan.removed => {
                plan.actions.push(RowAction::Delete(row.id));
                plan.removed = true;
            }
            quantity if quantity > 1 && !plan.removed => {
                plan.actions.push(RowAction::Decrement {
                    id: row.id,
                    new_quantity: quantity - 1,
                });
                plan.removed = true;
            }
            _ => (),
        }
    }

    plan
}

/// Inserts a grant of the named case for the user within the provided connection.
///
/// Returns `Ok(None)` with a warning when either the user or the case does not exist,
/// neither is treated as an error.
pub async fn grant_case_in<C: ConnectionTrait>(
    db: &C,
    firebase_uid: &str,
    case_name: &str,
    quantity: i32,
) -> Result<Option<InventoryDetailModel>, Error> {
    let Some(user) = UserRepository::new(db)
        .find_by_firebase_uid(firebase_uid)
        .await?
    else {
        tracing::warn!(
            firebase_uid = %firebase_uid,
            case_name = %case_name,
            "Skipped case grant for user that does not exist"
        );

        return Ok(None);
    };

    let Some(case) = CaseRepository::new(db).find_by_name(case_name).await? else {
        tracing::warn!(
            firebase_uid = %firebase_uid,
            case_name = %case_name,
            "Skipped case grant for case missing from the catalog"
        );

        return Ok(None);
    };

    let inventory_detail = InventoryRepository::new(db)
        .create(user.id, case.id, quantity)
        .await?;

    tracing::debug!(
        user_id = user.id,
        case_name = %case_name,
        quantity = quantity,
        "Granted case"
    );

    Ok(Some(inventory_detail))
}

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants a quantity of the named case to the user.
    ///
    /// Every call inserts a new inventory row, repeated grants are never merged.
    ///
    /// # Returns
    /// - `Ok(Some(InventoryDetailModel))` - The inserted row
    /// - `Ok(None)` - The user or the case does not exist, nothing was inserted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn grant_case(
        &self,
        firebase_uid: &str,
        case_name: &str,
        quantity: i32,
    ) -> Result<Option<InventoryDetailModel>, Error> {
        let txn = self.db.begin().await?;

        let inventory_detail = grant_case_in(&txn, firebase_uid, case_name, quantity).await?;

        txn.commit().await?;

        Ok(inventory_detail)
    }

    /// Gets the user's case totals, ordered by case name
    pub async fn get_inventory(&self, firebase_uid: &str) -> Result<Vec<InventoryCaseDto>, Error> {
        let totals = InventoryRepository::new(self.db)
            .get_case_totals(firebase_uid)
            .await?;

        Ok(totals
            .into_iter()
            .map(|total| InventoryCaseDto {
                case_name: total.case_name,
                image_path: total.image_path,
                quantity: total.quantity,
            })
            .collect())
    }

    /// Consumes one unit of the named case from the user's inventory.
    ///
    /// Zero quantity rows for the case are deleted as part of the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - One unit was removed
    /// - `Ok(false)` - The user holds no units of the case
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn consume_case(&self, firebase_uid: &str, case_name: &str) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let inventory_repository = InventoryRepository::new(&txn);

        let rows = inventory_repository
            .get_by_user_and_case(firebase_uid, case_name)
            .await?;

        let plan = plan_consumption(&rows);

        for action in &plan.actions {
            match *action {
                RowAction::Delete(id) => {
                    inventory_repository.delete(id).await?;
                }
                RowAction::Decrement { id, new_quantity } => {
                    inventory_repository.set_quantity(id, new_quantity).await?;
                }
            }
        }

        txn.commit().await?;

        if !plan.removed {
            tracing::debug!(
                firebase_uid = %firebase_uid,
                case_name = %case_name,
                "No units of case to consume"
            );
        }

        Ok(plan.removed)
    }
}
