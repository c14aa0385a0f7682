//! Season visit entity - One visit under a season-care package.
//!
//! Visits sharing `(customer_phone, contract_number)` form one contract.
//! The package fields (`season_count`, `total_cost`, `payment_location`) are
//! present only on the record that opened the contract; follow-up visits
//! carry them as NULL. `contract_number` itself may be absent, in which case
//! the visit belongs to the phone's virtual contract 1.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Season-care visit database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "season_care")]
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

/// Season visits reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
