//! Season-care visit business logic.
//!
//! Writes go to the flat visit tables; reads come back either as raw visit
//! lists or grouped into [`Contract`]s via the pure grouper. The grouping is
//! recomputed from a full fetch on every call - contracts are never stored.

use crate::{
    core::contract::{Contract, SeasonPackage, group_by_contract},
    entities::{FullSeasonVisit, SeasonVisit, full_season_visit, season_visit},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Parameters for recording one season-care visit.
///
/// Package fields are set on the contract-opening visit only; follow-up
/// visits leave them `None`.
#[derive(Debug, Clone)]
pub struct NewVisit {
    /// Customer's name
    pub customer_name: String,
    /// Customer's phone number
    pub customer_phone: String,
    /// Explicit contract number; `None` files the visit under contract 1
    pub contract_number: Option<i32>,
    /// Package label, when this visit opens a contract
    pub season_count: Option<String>,
    /// Nominal contract price, when this visit opens a contract
    pub total_cost: Option<i64>,
    /// Branch the package was paid at
    pub payment_location: Option<String>,
    /// `"paid"` or `"unpaid"`
    pub payment_status: String,
    /// Day of the visit
    pub service_date: NaiveDate,
}

fn validate_visit(visit: &NewVisit) -> Result<()> {
    if visit.customer_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer name cannot be empty".to_string(),
        });
    }
    if visit.customer_phone.trim().is_empty() {
        return Err(Error::Config {
            message: "Customer phone cannot be empty".to_string(),
        });
    }
    if let Some(number) = visit.contract_number {
        if number < 1 {
            return Err(Error::Config {
                message: format!("Contract number must be positive, got {number}"),
            });
        }
    }
    // An unknown label is not an error for the grouper (it degrades to a
    // null remaining count), but new rows should never be written with one.
    if let Some(label) = visit.season_count.as_deref() {
        if SeasonPackage::parse(label).is_none() {
            return Err(Error::Config {
                message: format!("Unknown season package label: {label}"),
            });
        }
    }
    Ok(())
}

/// Records a season-care visit.
pub async fn record_visit(
    db: &DatabaseConnection,
    visit: NewVisit,
) -> Result<season_visit::Model> {
    validate_visit(&visit)?;

    let model = season_visit::ActiveModel {
        customer_name: Set(visit.customer_name.trim().to_string()),
        customer_phone: Set(visit.customer_phone.trim().to_string()),
        contract_number: Set(visit.contract_number),
        season_count: Set(visit.season_count),
        total_cost: Set(visit.total_cost),
        payment_location: Set(visit.payment_location),
        payment_status: Set(visit.payment_status),
        service_date: Set(visit.service_date),
        created_at: Set(Some(chrono::Utc::now())),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Records a full-season-care visit.
pub async fn record_full_season_visit(
    db: &DatabaseConnection,
    visit: NewVisit,
) -> Result<full_season_visit::Model> {
    validate_visit(&visit)?;

    let model = full_season_visit::ActiveModel {
        customer_name: Set(visit.customer_name.trim().to_string()),
        customer_phone: Set(visit.customer_phone.trim().to_string()),
        contract_number: Set(visit.contract_number),
        season_count: Set(visit.season_count),
        total_cost: Set(visit.total_cost),
        payment_location: Set(visit.payment_location),
        payment_status: Set(visit.payment_status),
        service_date: Set(visit.service_date),
        created_at: Set(Some(chrono::Utc::now())),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves all season-care visits, oldest first.
pub async fn list_visits(db: &DatabaseConnection) -> Result<Vec<season_visit::Model>> {
    SeasonVisit::find()
        .order_by_asc(season_visit::Column::ServiceDate)
        .order_by_asc(season_visit::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Fetches every season-care visit and groups them into contracts,
/// most recently visited first.
pub async fn list_contracts(
    db: &DatabaseConnection,
) -> Result<Vec<Contract<season_visit::Model>>> {
    let rows = SeasonVisit::find().all(db).await?;
    Ok(group_by_contract(rows))
}

/// Fetches every full-season-care visit and groups them into contracts.
pub async fn list_full_season_contracts(
    db: &DatabaseConnection,
) -> Result<Vec<Contract<full_season_visit::Model>>> {
    let rows = FullSeasonVisit::find().all(db).await?;
    Ok(group_by_contract(rows))
}

/// Groups one customer's season-care visits into their contracts.
pub async fn contracts_for_customer(
    db: &DatabaseConnection,
    customer_phone: &str,
) -> Result<Vec<Contract<season_visit::Model>>> {
    let rows = SeasonVisit::find()
        .filter(season_visit::Column::CustomerPhone.eq(customer_phone))
        .all(db)
        .await?;
    Ok(group_by_contract(rows))
}
