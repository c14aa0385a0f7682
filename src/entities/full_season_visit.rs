//! Full-season visit entity - One visit under a full-season-care package.
//!
//! Same row shape as [`super::season_visit`]: the full-season program is a
//! separate store table but groups into contracts by the identical rules, so
//! both models implement [`crate::core::contract::ContractRow`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Full-season-care visit database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "full_season_care")]
pub struct Model {
    /// Unique identifier for the visit
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer's name
    pub customer_name: String,
    /// Customer's phone number (the stable customer key)
    pub customer_phone: String,
    /// Contract this visit belongs to, scoped per phone; 1 when absent
    pub contract_number: Option<i32>,
    /// Package label (`"5+왁"` or `"10+1"`), set on the opening record only
    pub season_count: Option<String>,
    /// Nominal contract price in won, set alongside `season_count`
    pub total_cost: Option<i64>,
    /// Branch the package was paid at
    pub payment_location: Option<String>,
    /// `"paid"` or `"unpaid"`
    pub payment_status: String,
    /// Day of this visit
    pub service_date: Date,
    /// When the row was created; the store may omit this, in which case
    /// ordering falls back to `service_date`
    pub created_at: Option<DateTimeUtc>,
}

/// Full-season visits reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
