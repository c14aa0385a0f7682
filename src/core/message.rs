//! Inter-branch messaging and notice board business logic.
//!
//! Messages are branch-to-branch with a read flag; delivery is pull-based
//! (see [`crate::core::poller`]). Notices are company-wide posts, pinned
//! ones first.

use crate::{
    entities::{Message, Notice, message, notice},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Sends a message from one branch to another.
pub async fn send_message(
    db: &DatabaseConnection,
    from_branch: String,
    to_branch: String,
    content: String,
) -> Result<message::Model> {
    if content.trim().is_empty() {
        return Err(Error::Config {
            message: "Message content cannot be empty".to_string(),
        });
    }
    if from_branch == to_branch {
        return Err(Error::Config {
            message: format!("Cannot send a message from {from_branch} to itself"),
        });
    }

    let model = message::ActiveModel {
        from_branch: Set(from_branch),
        to_branch: Set(to_branch),
        content: Set(content.trim().to_string()),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves every message addressed to a branch, newest first.
pub async fn messages_for_branch(
    db: &DatabaseConnection,
    branch: &str,
) -> Result<Vec<message::Model>> {
    Message::find()
        .filter(message::Column::ToBranch.eq(branch))
        .order_by_desc(message::Column::CreatedAt)
        .order_by_desc(message::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the unread messages for a branch, oldest first so the desk
/// reads them in arrival order.
pub async fn unread_messages(
    db: &DatabaseConnection,
    branch: &str,
) -> Result<Vec<message::Model>> {
    Message::find()
        .filter(message::Column::ToBranch.eq(branch))
        .filter(message::Column::IsRead.eq(false))
        .order_by_asc(message::Column::CreatedAt)
        .order_by_asc(message::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Counts unread messages for a branch.
pub async fn unread_count(db: &DatabaseConnection, branch: &str) -> Result<u64> {
    Message::find()
        .filter(message::Column::ToBranch.eq(branch))
        .filter(message::Column::IsRead.eq(false))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Marks one message as read.
pub async fn mark_read(db: &DatabaseConnection, message_id: i64) -> Result<message::Model> {
    let found = Message::find_by_id(message_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "message",
            id: message_id.to_string(),
        })?;

    let mut active: message::ActiveModel = found.into();
    active.is_read = Set(true);
    active.update(db).await.map_err(Into::into)
}

/// Marks everything addressed to a branch as read. Returns how many
/// messages were flipped.
pub async fn mark_all_read(db: &DatabaseConnection, branch: &str) -> Result<u64> {
    use sea_orm::sea_query::Expr;

    let result = Message::update_many()
        .col_expr(message::Column::IsRead, Expr::value(true))
        .filter(message::Column::ToBranch.eq(branch))
        .filter(message::Column::IsRead.eq(false))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Posts a notice to the company-wide board.
pub async fn post_notice(
    db: &DatabaseConnection,
    title: String,
    content: String,
    author: String,
    is_pinned: bool,
) -> Result<notice::Model> {
    if title.trim().is_empty() {
        return Err(Error::Config {
            message: "Notice title cannot be empty".to_string(),
        });
    }

    let model = notice::ActiveModel {
        title: Set(title.trim().to_string()),
        content: Set(content),
        author: Set(author),
        is_pinned: Set(is_pinned),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves the notice board: pinned posts first, then newest first.
pub async fn list_notices(db: &DatabaseConnection) -> Result<Vec<notice::Model>> {
    Notice::find()
        .order_by_desc(notice::Column::IsPinned)
        .order_by_desc(notice::Column::CreatedAt)
        .order_by_desc(notice::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Removes a notice board post.
pub async fn delete_notice(db: &DatabaseConnection, notice_id: i64) -> Result<()> {
    let found = Notice::find_by_id(notice_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "notice",
            id: notice_id.to_string(),
        })?;

    found.delete(db).await?;
    Ok(())
}
