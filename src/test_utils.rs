//! Shared test utilities.
//!
//! Common helpers for setting up in-memory test databases and creating test
//! rows with sensible defaults.

use crate::{
    core::{coupon, season::NewVisit, service},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a `NaiveDate` from parts; test dates are always valid.
#[must_use]
pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// A season-care visit with follow-up-visit defaults (no package fields).
///
/// # Defaults
/// * `customer_name`: "김철수"
/// * `contract_number`: Some(1)
/// * `payment_status`: "paid"
#[must_use]
pub fn test_visit(phone: &str, service_date: NaiveDate) -> NewVisit {
    NewVisit {
        customer_name: "김철수".to_string(),
        customer_phone: phone.to_string(),
        contract_number: Some(1),
        season_count: None,
        total_cost: None,
        payment_location: None,
        payment_status: "paid".to_string(),
        service_date,
    }
}

/// Inserts a general service record with sensible defaults.
///
/// # Defaults
/// * `service_description`: "베이스 정비"
/// * `total_cost`: "50,000원"
/// * `payment_status`: "unpaid"
/// * `branch`: "곤지암"
pub async fn create_test_service(
    db: &DatabaseConnection,
    name: &str,
    phone: &str,
    service_date: NaiveDate,
) -> Result<entities::service_record::Model> {
    service::create_service_record(
        db,
        name.to_string(),
        phone.to_string(),
        "베이스 정비".to_string(),
        "50,000원".to_string(),
        service_date,
        "unpaid".to_string(),
        "곤지암".to_string(),
        None,
        None,
    )
    .await
}

/// Registers an unissued free-service coupon.
pub async fn create_test_coupon(
    db: &DatabaseConnection,
    number: &str,
) -> Result<entities::coupon::Model> {
    coupon::register_coupon(
        db,
        number.to_string(),
        coupon::COUPON_TYPE_FREE.to_string(),
    )
    .await
}

/// Inserts a back-office user with the given credentials.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    branch: &str,
) -> Result<entities::user::Model> {
    use sea_orm::{ActiveModelTrait, Set};

    let user = entities::user::ActiveModel {
        username: Set(username.to_string()),
        password: Set(password.to_string()),
        display_name: Set(username.to_string()),
        branch: Set(branch.to_string()),
        role: Set("staff".to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}
