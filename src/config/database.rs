//! Database configuration module.
//!
//! Handles connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust struct definitions without manual SQL. Also seeds the initial
//! admin account from the environment on first run.

use crate::entities::{
    AppState, Coupon, FullSeasonVisit, Message, Notice, PromoAthlete, Schedule, SeasonVisit,
    ServiceRecord, User, user,
};
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    Schema, Set, sea_query::TableCreateStatement,
};
use sea_orm::ColumnTrait;
use tracing::info;

/// Establishes a connection to the database at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let tables: Vec<TableCreateStatement> = vec![
        schema.create_table_from_entity(ServiceRecord),
        schema.create_table_from_entity(SeasonVisit),
        schema.create_table_from_entity(FullSeasonVisit),
        schema.create_table_from_entity(Coupon),
        schema.create_table_from_entity(Schedule),
        schema.create_table_from_entity(Message),
        schema.create_table_from_entity(Notice),
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(PromoAthlete),
        schema.create_table_from_entity(AppState),
    ];

    for mut table in tables {
        db.execute(builder.build(table.if_not_exists())).await?;
    }

    Ok(())
}

/// Seeds the admin account from `ADMIN_USER`/`ADMIN_PASSWORD` when the
/// username is not present yet. Without the env vars, seeding is skipped -
/// accounts can also be provisioned directly in the store.
pub async fn seed_admin_user(db: &DatabaseConnection, home_branch: &str) -> Result<()> {
    let (Ok(username), Ok(password)) = (
        std::env::var("ADMIN_USER"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        info!("ADMIN_USER/ADMIN_PASSWORD not set; skipping admin seed");
        return Ok(());
    };

    let existing = User::find()
        .filter(user::Column::Username.eq(&username))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let admin = user::ActiveModel {
        username: Set(username.clone()),
        password: Set(password),
        display_name: Set(username),
        branch: Set(home_branch.to_string()),
        role: Set("admin".to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    admin.insert(db).await?;
    info!("Seeded initial admin account");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        coupon::Model as CouponModel, season_visit::Model as SeasonVisitModel,
        service_record::Model as ServiceRecordModel, user::Model as UserModel,
    };
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_connection_in_memory() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<SeasonVisitModel> = SeasonVisit::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_covers_every_entity() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<ServiceRecordModel> = ServiceRecord::find().limit(1).all(&db).await?;
        let _: Vec<SeasonVisitModel> = SeasonVisit::find().limit(1).all(&db).await?;
        let _: Vec<CouponModel> = Coupon::find().limit(1).all(&db).await?;
        let _: Vec<UserModel> = User::find().limit(1).all(&db).await?;
        let _ = FullSeasonVisit::find().limit(1).all(&db).await?;
        let _ = Schedule::find().limit(1).all(&db).await?;
        let _ = Message::find().limit(1).all(&db).await?;
        let _ = Notice::find().limit(1).all(&db).await?;
        let _ = PromoAthlete::find().limit(1).all(&db).await?;
        let _ = AppState::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
