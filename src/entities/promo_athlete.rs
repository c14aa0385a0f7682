//! Promo athlete entity - Sponsored athletes ("ambassadors").
//!
//! Services for these customers are logged with the ambassador sentinel in
//! `total_cost` and excluded from revenue totals.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sponsored athlete database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "promo_athletes")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Athlete's name
    pub name: String,
    /// Athlete's phone number
    pub phone: String,
    /// Discipline (e.g. "alpine", "snowboard")
    pub discipline: String,
    /// Branch carrying the sponsorship
    pub sponsor_branch: String,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the athlete was registered
    pub created_at: DateTimeUtc,
}

/// Promo athletes reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
