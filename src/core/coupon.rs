//! Coupon business logic - registration, issuance, and redemption.
//!
//! A coupon moves through a one-way life cycle: registered (no holder),
//! issued to a customer, redeemed once. Redemption of an already-used coupon
//! is a typed error so the desk can tell the customer exactly what happened.

use crate::{
    entities::{Coupon, coupon},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// `coupon_type` value for a free-service coupon.
pub const COUPON_TYPE_FREE: &str = "free";

/// `coupon_type` value for a discount coupon.
pub const COUPON_TYPE_DISCOUNT: &str = "discount";

/// `status` value for a coupon that has not been redeemed.
pub const COUPON_STATUS_UNUSED: &str = "unused";

/// `status` value for a redeemed coupon.
pub const COUPON_STATUS_USED: &str = "used";

/// Registers a new coupon with a unique number and no holder.
pub async fn register_coupon(
    db: &DatabaseConnection,
    coupon_number: String,
    coupon_type: String,
) -> Result<coupon::Model> {
    let number = coupon_number.trim().to_string();
    if number.is_empty() {
        return Err(Error::Config {
            message: "Coupon number cannot be empty".to_string(),
        });
    }
    if coupon_type != COUPON_TYPE_FREE && coupon_type != COUPON_TYPE_DISCOUNT {
        return Err(Error::Config {
            message: format!("Unknown coupon type: {coupon_type}"),
        });
    }

    if get_coupon(db, &number).await?.is_some() {
        return Err(Error::DuplicateCoupon { number });
    }

    let model = coupon::ActiveModel {
        coupon_number: Set(number),
        coupon_type: Set(coupon_type),
        status: Set(COUPON_STATUS_UNUSED.to_string()),
        issued_to_customer: Set(None),
        issued_at: Set(None),
        used_at: Set(None),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Looks up a coupon by its printed number.
pub async fn get_coupon(
    db: &DatabaseConnection,
    coupon_number: &str,
) -> Result<Option<coupon::Model>> {
    Coupon::find()
        .filter(coupon::Column::CouponNumber.eq(coupon_number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Hands a registered coupon to a customer.
///
/// Fails if the coupon does not exist or some customer already holds it.
pub async fn issue_coupon(
    db: &DatabaseConnection,
    coupon_number: &str,
    customer: String,
) -> Result<coupon::Model> {
    if customer.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer cannot be empty".to_string(),
        });
    }

    let found = get_coupon(db, coupon_number)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "coupon",
            id: coupon_number.to_string(),
        })?;

    if let Some(holder) = found.issued_to_customer.clone() {
        return Err(Error::CouponAlreadyIssued {
            number: found.coupon_number,
            customer: holder,
        });
    }

    let mut active: coupon::ActiveModel = found.into();
    active.issued_to_customer = Set(Some(customer.trim().to_string()));
    active.issued_at = Set(Some(chrono::Utc::now()));
    active.update(db).await.map_err(Into::into)
}

/// Redeems a coupon, flipping it to used exactly once.
///
/// A second presentation of the same coupon returns
/// [`Error::CouponAlreadyUsed`].
pub async fn redeem_coupon(db: &DatabaseConnection, coupon_number: &str) -> Result<coupon::Model> {
    let found = get_coupon(db, coupon_number)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "coupon",
            id: coupon_number.to_string(),
        })?;

    if found.status == COUPON_STATUS_USED {
        return Err(Error::CouponAlreadyUsed {
            number: found.coupon_number,
        });
    }

    let mut active: coupon::ActiveModel = found.into();
    active.status = Set(COUPON_STATUS_USED.to_string());
    active.used_at = Set(Some(chrono::Utc::now()));
    active.update(db).await.map_err(Into::into)
}

/// Retrieves all coupons, newest registration first.
pub async fn list_coupons(db: &DatabaseConnection) -> Result<Vec<coupon::Model>> {
    Coupon::find()
        .order_by_desc(coupon::Column::CreatedAt)
        .order_by_desc(coupon::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves coupons that can still be redeemed.
pub async fn unused_coupons(db: &DatabaseConnection) -> Result<Vec<coupon::Model>> {
    Coupon::find()
        .filter(coupon::Column::Status.eq(COUPON_STATUS_UNUSED))
        .order_by_asc(coupon::Column::CouponNumber)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_register_coupon_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = register_coupon(&db, "  ".to_string(), COUPON_TYPE_FREE.to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = register_coupon(&db, "C-100".to_string(), "voucher".to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_number() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_coupon(&db, "C-100").await?;
        let result = register_coupon(&db, "C-100".to_string(), COUPON_TYPE_FREE.to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::DuplicateCoupon { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_issue_then_redeem_lifecycle() -> Result<()> {
        let db = setup_test_db().await?;

        let coupon = create_test_coupon(&db, "C-100").await?;
        assert_eq!(coupon.status, COUPON_STATUS_UNUSED);
        assert!(coupon.issued_to_customer.is_none());

        let issued = issue_coupon(&db, "C-100", "김철수".to_string()).await?;
        assert_eq!(issued.issued_to_customer.as_deref(), Some("김철수"));
        assert!(issued.issued_at.is_some());

        let redeemed = redeem_coupon(&db, "C-100").await?;
        assert_eq!(redeemed.status, COUPON_STATUS_USED);
        assert!(redeemed.used_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_double_redeem_rejected() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_coupon(&db, "C-200").await?;
        redeem_coupon(&db, "C-200").await?;

        let result = redeem_coupon(&db, "C-200").await;
        assert!(matches!(result.unwrap_err(), Error::CouponAlreadyUsed { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_double_issue_rejected() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_coupon(&db, "C-300").await?;
        issue_coupon(&db, "C-300", "김철수".to_string()).await?;

        let result = issue_coupon(&db, "C-300", "박영희".to_string()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CouponAlreadyIssued { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_redeem_missing_coupon() -> Result<()> {
        let db = setup_test_db().await?;

        let result = redeem_coupon(&db, "C-404").await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_unused_coupons_filter() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_coupon(&db, "C-1").await?;
        create_test_coupon(&db, "C-2").await?;
        redeem_coupon(&db, "C-1").await?;

        let unused = unused_coupons(&db).await?;
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].coupon_number, "C-2");

        let all = list_coupons(&db).await?;
        assert_eq!(all.len(), 2);

        Ok(())
    }
}
