//! User entity - Back-office accounts.
//!
//! Credentials are stored the way the shared store stores them (plaintext);
//! the login path is in [`crate::core::session`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Back-office user database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name
    #[sea_orm(unique)]
    pub username: String,
    /// Stored credential, compared verbatim at login
    pub password: String,
    /// Name shown in the UI
    pub display_name: String,
    /// Branch the account belongs to
    pub branch: String,
    /// `"admin"` or `"staff"`
    pub role: String,
    /// When the account was created
    pub created_at: DateTimeUtc,
}

/// Users reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
