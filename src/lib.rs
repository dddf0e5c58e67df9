//! # Draftable
//!
//! Draftable is a **record-agnostic publication layer**. A record is either a
//! draft (invisible by default) or published (visible), and publication can be
//! scheduled for a future moment. There is no separate "scheduled" state: a
//! record with a future `published_at` is simply a draft until the clock
//! catches up.
//!
//! The crate attaches this behavior to any persisted entity type:
//!
//! - Implement [`Publishable`] for your record (identity plus access to its
//!   `published_at` column). [`Draftable`] is blanket-implemented on top and
//!   brings the state accessors and in-memory mutators.
//! - Persisting operations ([`publishing::publish`], [`publishing::draft`],
//!   [`publishing::schedule`], [`publishing::publish_at`]) mutate the record
//!   and save it through a [`RecordStore`].
//! - [`Query`] filters a store's records. Drafts are hidden by default;
//!   callers opt out with [`Query::with_drafts`] or invert the filter with
//!   [`Query::only_drafts`].
//!
//! Visibility is a pure function of `published_at` and the current time.
//! Every time comparison reads the crate [`clock`], which tests can pin to a
//! fixed instant.
//!
//! ```ignore
//! let mut store = InMemoryStore::new();
//! let mut post = Post::new("Launch notes", "…");
//!
//! assert!(post.is_draft());
//! publishing::schedule(&mut store, &mut post, "+1 week")?;
//! assert!(post.is_draft()); // visible in a week, not before
//!
//! let live = Query::new().fetch(&store)?; // excludes the scheduled post
//! ```

pub mod clock;
pub mod date;
pub mod error;
pub mod publishing;
pub mod query;
pub mod record;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use date::DateInput;
pub use error::{DraftableError, Result};
pub use query::{Condition, Query};
pub use record::{Draftable, Publishable, Record};
pub use store::memory::InMemoryStore;
pub use store::RecordStore;
