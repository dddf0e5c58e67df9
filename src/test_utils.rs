//! Test fixtures.
//!
//! Exposed behind the `test_utils` feature so downstream crates can reuse
//! them in their own test suites.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock;
use crate::record::{Publishable, Record};
use crate::store::memory::InMemoryStore;
use crate::store::RecordStore;

/// A minimal publishable record, the kind of entity this crate attaches to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// A new draft post.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            created_at: clock::now(),
            published_at: None,
        }
    }
}

impl Record for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Publishable for Post {
    fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    fn published_at_mut(&mut self) -> &mut Option<DateTime<Utc>> {
        &mut self.published_at
    }
}

/// Builder-style fixture around an [`InMemoryStore`] of posts.
pub struct StoreFixture {
    pub store: InMemoryStore<Post>,
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreFixture {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }

    pub fn with_draft_post(mut self, title: &str) -> Self {
        let post = Post::new(title, "Draft content");
        self.store.save(&post).unwrap();
        self
    }

    /// A post published one minute ago.
    pub fn with_published_post(mut self, title: &str) -> Self {
        let mut post = Post::new(title, "Published content");
        post.published_at = Some(clock::now() - Duration::minutes(1));
        self.store.save(&post).unwrap();
        self
    }

    pub fn with_scheduled_post(mut self, title: &str, at: DateTime<Utc>) -> Self {
        let mut post = Post::new(title, "Scheduled content");
        post.published_at = Some(at);
        self.store.save(&post).unwrap();
        self
    }
}
