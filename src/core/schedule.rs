//! Event scheduling business logic.

use crate::{
    entities::{Schedule, schedule},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a scheduled event for a branch.
pub async fn create_schedule(
    db: &DatabaseConnection,
    title: String,
    description: Option<String>,
    event_date: NaiveDate,
    branch: String,
) -> Result<schedule::Model> {
    if title.trim().is_empty() {
        return Err(Error::Config {
            message: "Schedule title cannot be empty".to_string(),
        });
    }

    let model = schedule::ActiveModel {
        title: Set(title.trim().to_string()),
        description: Set(description),
        event_date: Set(event_date),
        branch: Set(branch),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves all events, earliest event day first.
pub async fn list_schedules(db: &DatabaseConnection) -> Result<Vec<schedule::Model>> {
    Schedule::find()
        .order_by_asc(schedule::Column::EventDate)
        .order_by_asc(schedule::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves events on or after the given day.
pub async fn upcoming_schedules(
    db: &DatabaseConnection,
    from: NaiveDate,
) -> Result<Vec<schedule::Model>> {
    Schedule::find()
        .filter(schedule::Column::EventDate.gte(from))
        .order_by_asc(schedule::Column::EventDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Removes an event.
pub async fn delete_schedule(db: &DatabaseConnection, schedule_id: i64) -> Result<()> {
    let found = Schedule::find_by_id(schedule_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "schedule",
            id: schedule_id.to_string(),
        })?;

    found.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_schedule_requires_title() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_schedule(
            &db,
            "  ".to_string(),
            None,
            test_date(2025, 12, 24),
            "곤지암".to_string(),
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_schedules_ordered_by_event_date() -> Result<()> {
        let db = setup_test_db().await?;

        create_schedule(
            &db,
            "왁싱 클래스".to_string(),
            None,
            test_date(2025, 12, 24),
            "곤지암".to_string(),
        )
        .await?;
        create_schedule(
            &db,
            "시즌 오픈".to_string(),
            Some("시즌권 고객 우선".to_string()),
            test_date(2025, 11, 29),
            "지산".to_string(),
        )
        .await?;

        let schedules = list_schedules(&db).await?;
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].title, "시즌 오픈");
        assert_eq!(schedules[1].title, "왁싱 클래스");

        Ok(())
    }

    #[tokio::test]
    async fn test_upcoming_schedules_filters_past_events() -> Result<()> {
        let db = setup_test_db().await?;

        create_schedule(
            &db,
            "지난 행사".to_string(),
            None,
            test_date(2025, 11, 1),
            "곤지암".to_string(),
        )
        .await?;
        create_schedule(
            &db,
            "다가오는 행사".to_string(),
            None,
            test_date(2025, 12, 20),
            "곤지암".to_string(),
        )
        .await?;

        let upcoming = upcoming_schedules(&db, test_date(2025, 12, 1)).await?;
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "다가오는 행사");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_schedule() -> Result<()> {
        let db = setup_test_db().await?;

        let event = create_schedule(
            &db,
            "행사".to_string(),
            None,
            test_date(2025, 12, 20),
            "곤지암".to_string(),
        )
        .await?;

        delete_schedule(&db, event.id).await?;
        assert!(list_schedules(&db).await?.is_empty());

        let result = delete_schedule(&db, event.id).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }
}
