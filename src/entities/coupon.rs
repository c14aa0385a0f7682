//! Coupon entity - Issuable/redeemable service coupons.
//!
//! A coupon is registered first (blank holder), later issued to a customer,
//! and finally redeemed exactly once. `coupon_number` is the business key and
//! must be unique; the state machine lives in [`crate::core::coupon`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Coupon database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique business key printed on the coupon
    #[sea_orm(unique)]
    pub coupon_number: String,
    /// `"free"` (free service) or `"discount"`
    pub coupon_type: String,
    /// `"unused"` or `"used"`
    pub status: String,
    /// Customer holding the coupon; None until issued
    pub issued_to_customer: Option<String>,
    /// When the coupon was handed to a customer
    pub issued_at: Option<DateTimeUtc>,
    /// When the coupon was redeemed
    pub used_at: Option<DateTimeUtc>,
    /// When the coupon was registered
    pub created_at: DateTimeUtc,
}

/// Coupons reference no other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
