//! General service record business logic.
//!
//! Create/list/update operations for the walk-in service ledger. Validation
//! happens up front; the raw `total_cost` string is stored untouched so the
//! revenue module can type it later.

use crate::{
    core::revenue::{PAYMENT_PAID, PAYMENT_UNPAID},
    entities::{ServiceRecord, service_record},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};

fn validate_payment_status(status: &str) -> Result<()> {
    if status == PAYMENT_PAID || status == PAYMENT_UNPAID {
        Ok(())
    } else {
        Err(Error::Config {
            message: format!("Unknown payment status: {status}"),
        })
    }
}

/// Creates a new general service record.
///
/// Name, phone, and description must be non-blank and the payment status
/// must be one of the known values. The cost is stored verbatim - formatted
/// amounts and the ambassador sentinel are both legal.
#[allow(clippy::too_many_arguments)]
pub async fn create_service_record(
    db: &DatabaseConnection,
    customer_name: String,
    customer_phone: String,
    service_description: String,
    total_cost: String,
    service_date: NaiveDate,
    payment_status: String,
    branch: String,
    customer_memo: Option<String>,
    notes: Option<String>,
) -> Result<service_record::Model> {
    if customer_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer name cannot be empty".to_string(),
        });
    }
    if customer_phone.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer phone cannot be empty".to_string(),
        });
    }
    if service_description.trim().is_empty() {
        return Err(Error::Config {
            message: "Service description cannot be empty".to_string(),
        });
    }
    validate_payment_status(&payment_status)?;

    let record = service_record::ActiveModel {
        customer_name: Set(customer_name.trim().to_string()),
        customer_phone: Set(customer_phone.trim().to_string()),
        customer_memo: Set(customer_memo),
        service_description: Set(service_description.trim().to_string()),
        total_cost: Set(total_cost.trim().to_string()),
        service_date: Set(service_date),
        payment_status: Set(payment_status),
        branch: Set(branch),
        notes: Set(notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = record.insert(db).await?;
    Ok(result)
}

/// Retrieves all service records, newest service day first.
pub async fn list_service_records(db: &DatabaseConnection) -> Result<Vec<service_record::Model>> {
    ServiceRecord::find()
        .order_by_desc(service_record::Column::ServiceDate)
        .order_by_desc(service_record::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the service history for one customer phone, newest first.
pub async fn services_for_customer(
    db: &DatabaseConnection,
    customer_phone: &str,
) -> Result<Vec<service_record::Model>> {
    ServiceRecord::find()
        .filter(service_record::Column::CustomerPhone.eq(customer_phone))
        .order_by_desc(service_record::Column::ServiceDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Flips a record between paid and unpaid.
pub async fn update_payment_status(
    db: &DatabaseConnection,
    record_id: i64,
    payment_status: String,
) -> Result<service_record::Model> {
    validate_payment_status(&payment_status)?;

    let record = ServiceRecord::find_by_id(record_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "service record",
            id: record_id.to_string(),
        })?;

    let mut active: service_record::ActiveModel = record.into();
    active.payment_status = Set(payment_status);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a service record outright. The ledger keeps no tombstones; a
/// wrongly entered row is simply removed.
pub async fn delete_service_record(db: &DatabaseConnection, record_id: i64) -> Result<()> {
    let record = ServiceRecord::find_by_id(record_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "service record",
            id: record_id.to_string(),
        })?;

    record.delete(db).await?;
    Ok(())
}
