//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// A user, keyed by Firebase UID
///
/// # Fields (from `entity::users::Model`)
/// - `id` - Primary key
/// - `firebase_uid` - Subject ID from verified ID tokens (unique)
/// - `email` - Email claim captured when the user was created (nullable)
/// - `administrator_access` - Administrator flag, absent means no access
pub type UserModel = entity::users::Model;

/// A case in the catalog
///
/// # Fields (from `entity::cases::Model`)
/// - `id` - Primary key
/// - `case_name` - Case name (unique)
/// - `image_path` - Path of the case image under the frontend mount
pub type CaseModel = entity::cases::Model;

/// An item that belongs to a case
pub type ItemModel = entity::items::Model;

/// A stack of one case owned by a user, several stacks per user and case may exist
///
/// # Fields (from `entity::inventory_details::Model`)
/// - `id` - Primary key
/// - `user_id` - Owning user
/// - `case_id` - Case held
/// - `quantity` - Number of cases in this stack
pub type InventoryDetailModel = entity::inventory_details::Model;
