//! Promo athlete (ambassador) roster business logic.
//!
//! Sponsored athletes get complimentary service; their records are logged
//! with the ambassador sentinel in `total_cost`, which
//! [`crate::core::revenue`] keeps out of the money totals.

use crate::{
    entities::{PromoAthlete, promo_athlete},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Registers a sponsored athlete.
pub async fn register_athlete(
    db: &DatabaseConnection,
    name: String,
    phone: String,
    discipline: String,
    sponsor_branch: String,
    notes: Option<String>,
) -> Result<promo_athlete::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Athlete name cannot be empty".to_string(),
        });
    }
    if phone.trim().is_empty() {
        return Err(Error::Config {
            message: "Athlete phone cannot be empty".to_string(),
        });
    }

    let model = promo_athlete::ActiveModel {
        name: Set(name.trim().to_string()),
        phone: Set(phone.trim().to_string()),
        discipline: Set(discipline),
        sponsor_branch: Set(sponsor_branch),
        notes: Set(notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves the roster, alphabetical by name.
pub async fn list_athletes(db: &DatabaseConnection) -> Result<Vec<promo_athlete::Model>> {
    PromoAthlete::find()
        .order_by_asc(promo_athlete::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Whether a phone number belongs to a sponsored athlete. The desk checks
/// this before logging a service with the ambassador sentinel.
pub async fn is_promo_athlete(db: &DatabaseConnection, phone: &str) -> Result<bool> {
    let count = PromoAthlete::find()
        .filter(promo_athlete::Column::Phone.eq(phone))
        .count(db)
        .await?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_register_athlete_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = register_athlete(
            &db,
            String::new(),
            "010-1234-5678".to_string(),
            "alpine".to_string(),
            "곤지암".to_string(),
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_roster_and_lookup() -> Result<()> {
        let db = setup_test_db().await?;

        register_athlete(
            &db,
            "정동현".to_string(),
            "010-1234-5678".to_string(),
            "alpine".to_string(),
            "곤지암".to_string(),
            Some("국가대표".to_string()),
        )
        .await?;
        register_athlete(
            &db,
            "김민성".to_string(),
            "010-8765-4321".to_string(),
            "snowboard".to_string(),
            "지산".to_string(),
            None,
        )
        .await?;

        let roster = list_athletes(&db).await?;
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "김민성");

        assert!(is_promo_athlete(&db, "010-1234-5678").await?);
        assert!(!is_promo_athlete(&db, "010-0000-0000").await?);

        Ok(())
    }
}
