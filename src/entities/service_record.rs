//! Service record entity - Represents one general equipment-service visit.
//!
//! Each record captures who brought the gear in, what was done, what it cost,
//! and where/whether it was paid. `total_cost` is kept exactly as the store
//! delivers it: numeric text, formatted text like `"150,000원"`, or the
//! ambassador sentinel meaning a complimentary service. Typing the cost is
//! the job of [`crate::core::revenue::CostValue`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// General service record database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    /// Unique identifier for the service record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer's name
    pub customer_name: String,
    /// Customer's phone number (the stable customer key)
    pub customer_phone: String,
    /// Free-form memo about the customer
    pub customer_memo: Option<String>,
    /// What was serviced (e.g. "base grind + edge tune")
    pub service_description: String,
    /// Raw cost value as stored: digits with optional formatting, or the
    /// ambassador sentinel for a complimentary service
    pub total_cost: String,
    /// Day the service was performed
    pub service_date: Date,
    /// `"paid"` or `"unpaid"`
    pub payment_status: String,
    /// Branch that took the job in
    pub branch: String,
    /// Internal work notes
    pub notes: Option<String>,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

/// Service records reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
