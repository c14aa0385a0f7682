//! Session business logic - explicit login state, no ambient global.
//!
//! The active session lives in a [`SessionManager`] the caller owns and
//! passes where it is needed. It has a defined init (attempt [`restore`] on
//! app start) and teardown ([`logout`] clears both memory and the persisted
//! snapshot). The snapshot is JSON under an `app_state` key, the same
//! key-value idiom the store uses for other restart-surviving state.
//!
//! [`restore`]: SessionManager::restore
//! [`logout`]: SessionManager::logout

use crate::{
    entities::{AppState, User, app_state, user},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;

const ACTIVE_SESSION_KEY: &str = "active_session";

/// A logged-in back-office user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The user's database id
    pub user_id: i64,
    /// Login name
    pub username: String,
    /// Name shown in the UI
    pub display_name: String,
    /// Branch the account belongs to
    pub branch: String,
    /// `"admin"` or `"staff"`
    pub role: String,
    /// When the session was established
    pub logged_in_at: DateTime<Utc>,
}

/// Owns the current session and its persisted snapshot.
#[derive(Debug, Default)]
pub struct SessionManager {
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    /// Creates a manager with no active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the active session, if any.
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Verifies credentials against the `users` table and establishes a
    /// session, persisting a snapshot so a restart can restore it.
    ///
    /// Unknown user and wrong password are deliberately the same error.
    pub async fn login(
        &self,
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<Session> {
        let found = User::find()
            .filter(user::Column::Username.eq(username))
            .one(db)
            .await?
            .ok_or_else(|| Error::LoginFailed {
                username: username.to_string(),
            })?;

        if found.password != password {
            return Err(Error::LoginFailed {
                username: username.to_string(),
            });
        }

        let session = Session {
            user_id: found.id,
            username: found.username,
            display_name: found.display_name,
            branch: found.branch,
            role: found.role,
            logged_in_at: Utc::now(),
        };

        set_state_value(db, ACTIVE_SESSION_KEY, &serde_json::to_string(&session)?).await?;
        *self.current.write().await = Some(session.clone());
        Ok(session)
    }

    /// Attempts to restore the persisted session on app start.
    ///
    /// A missing row restores nothing. An unreadable snapshot also restores
    /// nothing - it is logged and left for the next login to overwrite.
    pub async fn restore(&self, db: &DatabaseConnection) -> Result<Option<Session>> {
        let Some(raw) = get_state_value(db, ACTIVE_SESSION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                *self.current.write().await = Some(session.clone());
                Ok(Some(session))
            }
            Err(e) => {
                warn!("Discarding unreadable session snapshot: {e}");
                Ok(None)
            }
        }
    }

    /// Tears the session down: clears memory and deletes the snapshot.
    pub async fn logout(&self, db: &DatabaseConnection) -> Result<()> {
        *self.current.write().await = None;
        delete_state_value(db, ACTIVE_SESSION_KEY).await
    }
}

async fn get_state_value(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let found = AppState::find()
        .filter(app_state::Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(found.map(|state| state.value))
}

async fn set_state_value(db: &DatabaseConnection, key: &str, value: &str) -> Result<()> {
    let now = Utc::now().naive_utc();
    let existing = AppState::find()
        .filter(app_state::Column::Key.eq(key))
        .one(db)
        .await?;

    if let Some(state) = existing {
        let mut active: app_state::ActiveModel = state.into();
        active.value = Set(value.to_string());
        active.updated_at = Set(now);
        active.update(db).await?;
    } else {
        let state = app_state::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };
        state.insert(db).await?;
    }
    Ok(())
}

async fn delete_state_value(db: &DatabaseConnection, key: &str) -> Result<()> {
    let existing = AppState::find()
        .filter(app_state::Column::Key.eq(key))
        .one(db)
        .await?;
    if let Some(state) = existing {
        state.delete(db).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_login_success_and_current() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "manager", "tune1234", "곤지암").await?;

        let manager = SessionManager::new();
        assert!(manager.current().await.is_none());

        let session = manager.login(&db, "manager", "tune1234").await?;
        assert_eq!(session.username, "manager");
        assert_eq!(session.branch, "곤지암");
        assert_eq!(manager.current().await, Some(session));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_failure_is_uniform() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "manager", "tune1234", "곤지암").await?;

        let manager = SessionManager::new();

        let wrong_password = manager.login(&db, "manager", "nope").await;
        assert!(matches!(
            wrong_password.unwrap_err(),
            Error::LoginFailed { .. }
        ));

        let unknown_user = manager.login(&db, "ghost", "tune1234").await;
        assert!(matches!(
            unknown_user.unwrap_err(),
            Error::LoginFailed { .. }
        ));
        assert!(manager.current().await.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_restore_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "manager", "tune1234", "곤지암").await?;

        let manager = SessionManager::new();
        let session = manager.login(&db, "manager", "tune1234").await?;

        // A fresh manager (new app start) restores the persisted session.
        let restarted = SessionManager::new();
        let restored = restarted.restore(&db).await?;
        assert_eq!(restored, Some(session));
        assert!(restarted.current().await.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_restore_with_no_snapshot() -> Result<()> {
        let db = setup_test_db().await?;

        let manager = SessionManager::new();
        assert_eq!(manager.restore(&db).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_restore_discards_corrupt_snapshot() -> Result<()> {
        let db = setup_test_db().await?;
        set_state_value(&db, ACTIVE_SESSION_KEY, "not json").await?;

        let manager = SessionManager::new();
        assert_eq!(manager.restore(&db).await?, None);
        assert!(manager.current().await.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_snapshot() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "manager", "tune1234", "곤지암").await?;

        let manager = SessionManager::new();
        manager.login(&db, "manager", "tune1234").await?;
        manager.logout(&db).await?;

        assert!(manager.current().await.is_none());
        let restarted = SessionManager::new();
        assert_eq!(restarted.restore(&db).await?, None);

        Ok(())
    }
}
