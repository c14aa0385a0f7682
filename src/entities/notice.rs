//! Notice entity - Company-wide notice board posts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Notice board post database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notices")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Username of the author
    pub author: String,
    /// Pinned posts sort ahead of everything else
    pub is_pinned: bool,
    /// When the post was created
    pub created_at: DateTimeUtc,
}

/// Notices reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
