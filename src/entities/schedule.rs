//! Schedule entity - Branch events (lessons, demo days, closures).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Scheduled event database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short event title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Day the event takes place
    pub event_date: Date,
    /// Branch hosting the event
    pub branch: String,
    /// When the event was entered
    pub created_at: DateTimeUtc,
}

/// Schedules reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
