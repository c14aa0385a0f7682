//! Periodic message polling with an explicit lifecycle.
//!
//! The store pushes nothing; branches learn about new messages by
//! re-fetching on a fixed interval, so the staleness window equals the
//! interval. The poller is a handle the owner starts and stops - dropping it
//! also stops it, so a view transition can never leak a timer.

use crate::{core::message, entities::message as message_entity};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::{sync::mpsc, task::JoinHandle, time};
use tracing::{debug, warn};

/// A running unread-message poll task for one branch.
#[derive(Debug)]
pub struct MessagePoller {
    handle: JoinHandle<()>,
}

impl MessagePoller {
    /// Spawns a poll task that fetches the branch's unread messages every
    /// `interval` and sends each non-empty batch to `sender`.
    ///
    /// A failed fetch is logged and skipped - the next tick is the retry.
    /// The task ends on its own when the receiving side is dropped.
    #[must_use]
    pub fn start(
        db: DatabaseConnection,
        branch: String,
        interval: Duration,
        sender: mpsc::Sender<Vec<message_entity::Model>>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            // The first tick fires immediately; skip it so "every N seconds"
            // means what it says.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                match message::unread_messages(&db, &branch).await {
                    Ok(batch) => {
                        if batch.is_empty() {
                            debug!("No unread messages for {branch}");
                            continue;
                        }
                        if sender.send(batch).await.is_err() {
                            // Receiver gone; the owner no longer cares.
                            return;
                        }
                    }
                    Err(e) => warn!("Unread message fetch failed for {branch}: {e}"),
                }
            }
        });

        Self { handle }
    }

    /// Stops the poll task.
    pub fn stop(self) {
        self.handle.abort();
    }

    /// Whether the task is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for MessagePoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
