//! App state entity - Stores key-value pairs for application state.
//! Used for state that must survive a restart but is not business data,
//! such as the persisted session snapshot.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// App state database model - stores key-value state pairs
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_state")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// State key (e.g. `"active_session"`)
    pub key: String,
    /// State value stored as string
    pub value: String,
    /// When this entry was last modified
    pub updated_at: DateTime,
}

/// `AppState` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
