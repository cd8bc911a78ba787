// SPDX-License-Identifier: GPL-3.0-only
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_TITLE: &str = "Cafe Database";
pub const DEFAULT_SUBTITLE: &str = "Welcome to my cafe database. Feel free to view info about all the stored cafes. \
     You're free to add or delete other cafes that have yet to be listed.";
pub const ADDED_TITLE: &str = "Success!";
pub const ADDED_SUBTITLE: &str =
    "You've successfully added a cafe to the database! You can view it by clicking the button below.";
pub const DELETED_TITLE: &str = "Success!";
pub const DELETED_SUBTITLE: &str = "You've successfully deleted a cafe from the database.";

/// How long a notice waits for its session to come back to the landing page.
pub const NOTICE_TTL: Duration = Duration::from_secs(10 * 60);

/// Title and subtitle shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub subtitle: String,
}

impl Notice {
    fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }

    pub fn landing_default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_SUBTITLE)
    }

    pub fn cafe_added() -> Self {
        Self::new(ADDED_TITLE, ADDED_SUBTITLE)
    }

    pub fn cafe_deleted() -> Self {
        Self::new(DELETED_TITLE, DELETED_SUBTITLE)
    }
}

#[derive(Debug)]
struct PendingNotice {
    notice: Notice,
    set_at: Instant,
}

/// Pending one-time notices, at most one per session.
///
/// Notices older than the TTL are never returned, and are evicted whenever a
/// new notice is set.
#[derive(Debug)]
pub struct NoticeSlots {
    slots: Mutex<HashMap<Uuid, PendingNotice>>,
    ttl: Duration,
}

impl Default for NoticeSlots {
    fn default() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }
}

impl NoticeSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Replace any pending notice for the session.
    pub async fn set(&self, session_id: Uuid, notice: Notice) {
        let now = Instant::now();
        let mut slots = self.slots.lock().await;

        let before = slots.len();
        slots.retain(|_, pending| now.duration_since(pending.set_at) < self.ttl);
        let evicted = before - slots.len();
        if evicted > 0 {
            debug!(evicted, "Evicted expired notices");
        }

        slots.insert(session_id, PendingNotice { notice, set_at: now });
    }

    /// Remove and return the pending notice for the session, unless it expired.
    pub async fn take(&self, session_id: &Uuid) -> Option<Notice> {
        self.slots
            .lock()
            .await
            .remove(session_id)
            .filter(|pending| pending.set_at.elapsed() < self.ttl)
            .map(|pending| pending.notice)
    }
}
