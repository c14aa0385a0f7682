//! Message entity - Inter-branch messages.
//!
//! Messages are addressed branch-to-branch and carry a read flag the
//! receiving side flips. Delivery is pull-based: branches poll for unread
//! messages via [`crate::core::poller`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inter-branch message database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Sending branch
    pub from_branch: String,
    /// Receiving branch
    pub to_branch: String,
    /// Message body
    pub content: String,
    /// Whether the receiving branch has read the message
    pub is_read: bool,
    /// When the message was sent
    pub created_at: DateTimeUtc,
}

/// Messages reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
